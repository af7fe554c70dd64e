use crate::storage::{get_claim_supply, get_claims, set_claim_supply, set_claims};
use amm_types::AmmError;
use soroban_sdk::{Address, Env};

/// The slice of a fungible ledger the pool needs for LP claims
pub trait ClaimLedger {
    fn mint(&self, to: &Address, amount: u128) -> Result<(), AmmError>;
    fn burn(&self, from: &Address, amount: u128) -> Result<(), AmmError>;
    fn total_supply(&self) -> u128;
    fn balance_of(&self, who: &Address) -> u128;
}

/// Claim ledger kept in the pool contract's own storage
pub struct StorageClaimLedger<'a> {
    env: &'a Env,
}

impl<'a> StorageClaimLedger<'a> {
    pub fn new(env: &'a Env) -> Self {
        Self { env }
    }
}

impl ClaimLedger for StorageClaimLedger<'_> {
    fn mint(&self, to: &Address, amount: u128) -> Result<(), AmmError> {
        let balance = get_claims(self.env, to)
            .checked_add(amount)
            .ok_or(AmmError::ArithmeticOverflow)?;
        let supply = get_claim_supply(self.env)
            .checked_add(amount)
            .ok_or(AmmError::ArithmeticOverflow)?;

        set_claims(self.env, to, balance);
        set_claim_supply(self.env, supply);
        Ok(())
    }

    fn burn(&self, from: &Address, amount: u128) -> Result<(), AmmError> {
        let balance = get_claims(self.env, from)
            .checked_sub(amount)
            .ok_or(AmmError::InsufficientClaimBalance)?;
        let supply = get_claim_supply(self.env)
            .checked_sub(amount)
            .ok_or(AmmError::InvariantViolation)?;

        set_claims(self.env, from, balance);
        set_claim_supply(self.env, supply);
        Ok(())
    }

    fn total_supply(&self) -> u128 {
        get_claim_supply(self.env)
    }

    fn balance_of(&self, who: &Address) -> u128 {
        get_claims(self.env, who)
    }
}
