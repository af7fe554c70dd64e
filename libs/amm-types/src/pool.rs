use soroban_sdk::{contracttype, Address};

/// Rule used to mint claims for deposits into a seeded pool
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AddPolicy {
    /// Reject deposits that under-supply asset B; mint from the A side only
    StrictRatio,
    /// Accept any ratio; mint the lesser of the two proportional shares
    ProportionalMin,
}

/// Which asset is paid in during a swap
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SwapDirection {
    AToB,
    BToA,
}

/// Pool configuration - immutable after initialization
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolConfig {
    /// Token contract of asset A
    pub asset_a: Address,
    /// Token contract of asset B
    pub asset_b: Address,
    /// Liquidity-add policy of this deployment
    pub add_policy: AddPolicy,
}

impl PoolConfig {
    /// (asset paid in, asset paid out) for a swap direction
    pub fn assets_for(&self, direction: SwapDirection) -> (Address, Address) {
        match direction {
            SwapDirection::AToB => (self.asset_a.clone(), self.asset_b.clone()),
            SwapDirection::BToA => (self.asset_b.clone(), self.asset_a.clone()),
        }
    }
}

/// Reserve ledger - stored in Instance storage
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PoolState {
    /// Custody of asset A
    pub reserve_a: u128,
    /// Custody of asset B
    pub reserve_b: u128,
    /// Outstanding claims, mirrors the claim ledger's total supply
    pub total_claims: u128,
}

impl PoolState {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while no claims are outstanding
    pub fn is_empty(&self) -> bool {
        self.total_claims == 0
    }

    /// (reserve_in, reserve_out) for a swap direction
    pub fn reserves_for(&self, direction: SwapDirection) -> (u128, u128) {
        match direction {
            SwapDirection::AToB => (self.reserve_a, self.reserve_b),
            SwapDirection::BToA => (self.reserve_b, self.reserve_a),
        }
    }

    /// Write back (reserve_in, reserve_out) for a swap direction
    pub fn set_reserves_for(&mut self, direction: SwapDirection, reserve_in: u128, reserve_out: u128) {
        match direction {
            SwapDirection::AToB => {
                self.reserve_a = reserve_in;
                self.reserve_b = reserve_out;
            }
            SwapDirection::BToA => {
                self.reserve_b = reserve_in;
                self.reserve_a = reserve_out;
            }
        }
    }
}

/// Result of pricing a swap against current reserves, without executing it
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SwapQuote {
    /// Amount paid in, fee included
    pub amount_in: u128,
    /// Amount paid out
    pub amount_out: u128,
    /// Input-side reserve after the swap
    pub reserve_in_after: u128,
    /// Output-side reserve after the swap
    pub reserve_out_after: u128,
}
