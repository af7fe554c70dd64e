#![no_std]

#[cfg(any(test, feature = "certora"))]
mod certora_specs;
mod claims;
mod custody;
mod events;
mod guard;
mod invariants;
mod liquidity;
mod storage;
mod swap;

pub use claims::{ClaimLedger, StorageClaimLedger};

use amm_types::{AddPolicy, AmmError, PoolConfig, PoolState, SwapDirection, SwapQuote};
use soroban_sdk::{contract, contractimpl, log, Address, Env};
use storage::{get_config, get_state, has_config, set_config, set_state};

#[contract]
pub struct AmmPool;

#[contractimpl]
impl AmmPool {
    /// Initialize the pool for an asset pair
    ///
    /// `add_policy` fixes how deposits into a seeded pool are credited for
    /// the lifetime of the deployment.
    pub fn initialize(
        env: Env,
        asset_a: Address,
        asset_b: Address,
        add_policy: AddPolicy,
    ) -> Result<(), AmmError> {
        if has_config(&env) {
            return Err(AmmError::AlreadyInitialized);
        }
        if asset_a == asset_b {
            return Err(AmmError::IdenticalAssets);
        }

        let config = PoolConfig {
            asset_a,
            asset_b,
            add_policy,
        };
        set_config(&env, &config);
        set_state(&env, &PoolState::new());

        log!(&env, "pool initialized", config.asset_a.clone(), config.asset_b.clone());
        events::pool_initialized(&env, &config);
        Ok(())
    }

    /// Deposit `amount_a` of asset A and `amount_b` of asset B
    ///
    /// # Returns
    /// Claims minted to `provider`
    pub fn add_liquidity(
        env: Env,
        provider: Address,
        amount_a: u128,
        amount_b: u128,
    ) -> Result<u128, AmmError> {
        provider.require_auth();
        guard::non_reentrant(&env, || {
            liquidity::add_liquidity(&env, &provider, amount_a, amount_b)
        })
    }

    /// Burn `claims` and withdraw the proportional share of both reserves
    ///
    /// # Returns
    /// (amount_a, amount_b) paid to `provider`
    pub fn remove_liquidity(
        env: Env,
        provider: Address,
        claims: u128,
    ) -> Result<(u128, u128), AmmError> {
        provider.require_auth();
        guard::non_reentrant(&env, || liquidity::remove_liquidity(&env, &provider, claims))
    }

    /// Swap exactly `amount_in` of the input asset
    ///
    /// # Returns
    /// Amount of the output asset paid to `trader`
    pub fn swap(
        env: Env,
        trader: Address,
        direction: SwapDirection,
        amount_in: u128,
    ) -> Result<u128, AmmError> {
        trader.require_auth();
        guard::non_reentrant(&env, || swap::execute_swap(&env, &trader, direction, amount_in))
    }

    // === View Functions ===

    /// Get (reserve_a, reserve_b)
    pub fn get_reserves(env: Env) -> Result<(u128, u128), AmmError> {
        let state = get_state(&env)?;
        Ok((state.reserve_a, state.reserve_b))
    }

    /// Get price of A in B, scaled by 1e18
    pub fn get_price(env: Env) -> Result<u128, AmmError> {
        let state = get_state(&env)?;
        amm_math::get_price(&env, state.reserve_a, state.reserve_b)
    }

    /// Constant-product output for arbitrary reserves
    pub fn get_amount_out(
        env: Env,
        amount_in: u128,
        reserve_in: u128,
        reserve_out: u128,
    ) -> Result<u128, AmmError> {
        amm_math::get_amount_out(&env, amount_in, reserve_in, reserve_out)
    }

    /// Minimal input for a desired output, for arbitrary reserves
    pub fn get_amount_in(
        env: Env,
        amount_out: u128,
        reserve_in: u128,
        reserve_out: u128,
    ) -> Result<u128, AmmError> {
        amm_math::get_amount_in(&env, amount_out, reserve_in, reserve_out)
    }

    /// Quote an exact-input swap against the current reserves
    pub fn quote(
        env: Env,
        direction: SwapDirection,
        amount_in: u128,
    ) -> Result<SwapQuote, AmmError> {
        swap::quote(&env, direction, amount_in)
    }

    /// Get current pool state
    pub fn get_state(env: Env) -> Result<PoolState, AmmError> {
        get_state(&env)
    }

    /// Get pool configuration
    pub fn get_config(env: Env) -> Result<PoolConfig, AmmError> {
        get_config(&env)
    }

    /// Get asset A address
    pub fn asset_a(env: Env) -> Result<Address, AmmError> {
        Ok(get_config(&env)?.asset_a)
    }

    /// Get asset B address
    pub fn asset_b(env: Env) -> Result<Address, AmmError> {
        Ok(get_config(&env)?.asset_b)
    }

    /// Get total outstanding claims
    pub fn total_claims(env: Env) -> u128 {
        StorageClaimLedger::new(&env).total_supply()
    }

    /// Get claims held by `holder`
    pub fn claims_of(env: Env, holder: Address) -> u128 {
        StorageClaimLedger::new(&env).balance_of(&holder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use amm_types::PRICE_SCALE;
    use soroban_sdk::testutils::{Address as _, ContractEvents, Events};
    use soroban_sdk::{token, vec, Address, Env, IntoVal, Symbol, Val, Vec};

    struct PoolTest<'a> {
        env: Env,
        pool_id: Address,
        pool: AmmPoolClient<'a>,
        token_a: token::Client<'a>,
        token_b: token::Client<'a>,
        sac_a: token::StellarAssetClient<'a>,
        sac_b: token::StellarAssetClient<'a>,
    }

    fn create_token<'a>(
        env: &Env,
        admin: &Address,
    ) -> (token::Client<'a>, token::StellarAssetClient<'a>) {
        let sac = env.register_stellar_asset_contract_v2(admin.clone());
        (
            token::Client::new(env, &sac.address()),
            token::StellarAssetClient::new(env, &sac.address()),
        )
    }

    impl<'a> PoolTest<'a> {
        fn new(policy: AddPolicy) -> Self {
            let env = Env::default();
            env.mock_all_auths();

            let admin = Address::generate(&env);
            let (token_a, sac_a) = create_token(&env, &admin);
            let (token_b, sac_b) = create_token(&env, &admin);

            let pool_id = env.register(AmmPool, ());
            let pool = AmmPoolClient::new(&env, &pool_id);
            pool.initialize(&token_a.address, &token_b.address, &policy);

            PoolTest {
                env,
                pool_id,
                pool,
                token_a,
                token_b,
                sac_a,
                sac_b,
            }
        }

        /// New address holding the given balances
        fn funded_user(&self, amount_a: i128, amount_b: i128) -> Address {
            let user = Address::generate(&self.env);
            if amount_a > 0 {
                self.sac_a.mint(&user, &amount_a);
            }
            if amount_b > 0 {
                self.sac_b.mint(&user, &amount_b);
            }
            user
        }

        /// Events the pool emitted during the last invocation
        fn pool_events(&self) -> ContractEvents {
            self.env.events().all().filter_by_contract(&self.pool_id)
        }

        fn pool_event(
            &self,
            name: &str,
            actor: &Address,
            data: Val,
        ) -> Vec<(Address, Vec<Val>, Val)> {
            let topics: Vec<Val> =
                (Symbol::new(&self.env, name), actor.clone()).into_val(&self.env);
            vec![&self.env, (self.pool_id.clone(), topics, data)]
        }

        fn assert_custody_matches_reserves(&self) {
            let (reserve_a, reserve_b) = self.pool.get_reserves();
            assert_eq!(self.token_a.balance(&self.pool_id) as u128, reserve_a);
            assert_eq!(self.token_b.balance(&self.pool_id) as u128, reserve_b);
        }
    }

    // === Initialization Tests ===

    #[test]
    fn test_initialize_pool() {
        let t = PoolTest::new(AddPolicy::ProportionalMin);

        let config = t.pool.get_config();
        assert_eq!(config.asset_a, t.token_a.address);
        assert_eq!(config.asset_b, t.token_b.address);
        assert_eq!(config.add_policy, AddPolicy::ProportionalMin);

        let state = t.pool.get_state();
        assert_eq!(state, PoolState::new());
        assert_eq!(t.pool.get_reserves(), (0, 0));
        assert_eq!(t.pool.total_claims(), 0);
        assert_eq!(t.pool.asset_a(), t.token_a.address);
        assert_eq!(t.pool.asset_b(), t.token_b.address);
    }

    #[test]
    fn test_initialize_twice_fails() {
        let t = PoolTest::new(AddPolicy::ProportionalMin);
        let result = t.pool.try_initialize(
            &t.token_a.address,
            &t.token_b.address,
            &AddPolicy::StrictRatio,
        );
        assert_eq!(result, Err(Ok(AmmError::AlreadyInitialized)));
        assert_eq!(t.pool.get_config().add_policy, AddPolicy::ProportionalMin);
    }

    #[test]
    fn test_initialize_identical_assets_fails() {
        let env = Env::default();
        let asset = Address::generate(&env);
        let pool_id = env.register(AmmPool, ());
        let pool = AmmPoolClient::new(&env, &pool_id);

        let result = pool.try_initialize(&asset, &asset, &AddPolicy::StrictRatio);
        assert_eq!(result, Err(Ok(AmmError::IdenticalAssets)));
    }

    #[test]
    fn test_uninitialized_queries_fail() {
        let env = Env::default();
        let pool_id = env.register(AmmPool, ());
        let pool = AmmPoolClient::new(&env, &pool_id);

        assert_eq!(pool.try_get_reserves(), Err(Ok(AmmError::NotInitialized)));
        assert_eq!(pool.try_get_price(), Err(Ok(AmmError::NotInitialized)));
    }

    // === Add Liquidity Tests ===

    #[test]
    fn test_first_deposit_mints_sqrt() {
        let t = PoolTest::new(AddPolicy::ProportionalMin);
        let provider = t.funded_user(100, 100);

        let claims = t.pool.add_liquidity(&provider, &100, &100);

        assert_eq!(claims, 100);
        assert_eq!(t.pool.get_reserves(), (100, 100));
        assert_eq!(t.pool.total_claims(), 100);
        assert_eq!(t.pool.claims_of(&provider), 100);
        assert_eq!(t.pool.get_state().total_claims, 100);
        assert_eq!(t.token_a.balance(&provider), 0);
        assert_eq!(t.token_b.balance(&provider), 0);
        t.assert_custody_matches_reserves();
    }

    #[test]
    fn test_add_zero_amount_fails() {
        for policy in [AddPolicy::StrictRatio, AddPolicy::ProportionalMin] {
            let t = PoolTest::new(policy);
            let provider = t.funded_user(1_000, 1_000);

            assert_eq!(
                t.pool.try_add_liquidity(&provider, &0, &50),
                Err(Ok(AmmError::ZeroAmount))
            );
            assert_eq!(
                t.pool.try_add_liquidity(&provider, &50, &0),
                Err(Ok(AmmError::ZeroAmount))
            );

            // Seeded pool rejects zero amounts the same way
            t.pool.add_liquidity(&provider, &500, &500);
            assert_eq!(
                t.pool.try_add_liquidity(&provider, &0, &50),
                Err(Ok(AmmError::ZeroAmount))
            );
            assert_eq!(
                t.pool.try_add_liquidity(&provider, &50, &0),
                Err(Ok(AmmError::ZeroAmount))
            );
        }
    }

    #[test]
    fn test_proportional_min_credits_lesser_share() {
        let t = PoolTest::new(AddPolicy::ProportionalMin);
        let seed = t.funded_user(100, 200);
        t.pool.add_liquidity(&seed, &100, &200);
        // sqrt(100 * 200) = 141
        assert_eq!(t.pool.total_claims(), 141);

        let provider = t.funded_user(50, 60);
        // A side: 50 * 141 / 100 = 70, B side: 60 * 141 / 200 = 42
        let claims = t.pool.add_liquidity(&provider, &50, &60);

        assert_eq!(claims, 42);
        assert_eq!(t.pool.get_reserves(), (150, 260));
        assert_eq!(t.pool.total_claims(), 183);
        t.assert_custody_matches_reserves();
    }

    #[test]
    fn test_strict_ratio_donates_surplus_b() {
        let t = PoolTest::new(AddPolicy::StrictRatio);
        let seed = t.funded_user(100, 200);
        t.pool.add_liquidity(&seed, &100, &200);

        let provider = t.funded_user(50, 150);
        // Needs 100 B; the extra 50 B is donated
        let claims = t.pool.add_liquidity(&provider, &50, &150);

        assert_eq!(claims, 70);
        assert_eq!(t.pool.get_reserves(), (150, 350));
        assert_eq!(t.token_b.balance(&provider), 0);
        t.assert_custody_matches_reserves();
    }

    #[test]
    fn test_strict_ratio_violation_leaves_state() {
        let t = PoolTest::new(AddPolicy::StrictRatio);
        let seed = t.funded_user(100, 200);
        t.pool.add_liquidity(&seed, &100, &200);
        let before = t.pool.get_state();

        let provider = t.funded_user(50, 99);
        assert_eq!(
            t.pool.try_add_liquidity(&provider, &50, &99),
            Err(Ok(AmmError::RatioViolation))
        );

        assert_eq!(t.pool.get_state(), before);
        assert_eq!(t.token_a.balance(&provider), 50);
        assert_eq!(t.token_b.balance(&provider), 99);
        assert_eq!(t.pool.claims_of(&provider), 0);
    }

    #[test]
    fn test_dust_deposit_fails() {
        let t = PoolTest::new(AddPolicy::ProportionalMin);
        let seed = t.funded_user(1_000_000, 1_000_000);
        t.pool.add_liquidity(&seed, &1_000_000, &1_000_000);

        // Drain claims down to a tiny supply relative to reserves
        t.pool.remove_liquidity(&seed, &999_000);
        assert_eq!(t.pool.total_claims(), 1_000);
        assert_eq!(t.pool.get_reserves(), (1_000, 1_000));

        let provider = t.funded_user(10, 10);
        let swapper = t.funded_user(1_000_000, 0);
        t.pool.swap(&swapper, &SwapDirection::AToB, &1_000_000);
        let (reserve_a, _) = t.pool.get_reserves();
        assert!(reserve_a > 1_000 * 10);

        // 0 claims would be minted for a deposit below one claim's worth
        assert_eq!(
            t.pool.try_add_liquidity(&provider, &10, &10),
            Err(Ok(AmmError::InsufficientClaimsMinted))
        );
    }

    #[test]
    fn test_add_with_insufficient_balance_fails_atomically() {
        let t = PoolTest::new(AddPolicy::ProportionalMin);
        // Enough A, not enough B: the A pull must not stick
        let provider = t.funded_user(100, 40);

        assert_eq!(
            t.pool.try_add_liquidity(&provider, &100, &100),
            Err(Ok(AmmError::TransferFailed))
        );

        assert_eq!(t.pool.get_state(), PoolState::new());
        assert_eq!(t.token_a.balance(&provider), 100);
        assert_eq!(t.token_b.balance(&provider), 40);
        assert_eq!(t.pool.claims_of(&provider), 0);
        assert_eq!(t.token_a.balance(&t.pool_id), 0);
    }

    // === Remove Liquidity Tests ===

    #[test]
    fn test_remove_half() {
        let t = PoolTest::new(AddPolicy::ProportionalMin);
        let provider = t.funded_user(100, 100);
        t.pool.add_liquidity(&provider, &100, &100);

        let (amount_a, amount_b) = t.pool.remove_liquidity(&provider, &50);

        assert_eq!((amount_a, amount_b), (50, 50));
        assert_eq!(t.pool.get_reserves(), (50, 50));
        assert_eq!(t.pool.total_claims(), 50);
        assert_eq!(t.pool.claims_of(&provider), 50);
        assert_eq!(t.token_a.balance(&provider), 50);
        assert_eq!(t.token_b.balance(&provider), 50);
        t.assert_custody_matches_reserves();
    }

    #[test]
    fn test_remove_more_than_balance_fails() {
        let t = PoolTest::new(AddPolicy::ProportionalMin);
        let provider = t.funded_user(100, 100);
        t.pool.add_liquidity(&provider, &100, &100);
        let before = t.pool.get_state();

        assert_eq!(
            t.pool.try_remove_liquidity(&provider, &101),
            Err(Ok(AmmError::InsufficientClaimBalance))
        );

        // Another holder cannot burn claims it does not hold
        let stranger = t.funded_user(0, 0);
        assert_eq!(
            t.pool.try_remove_liquidity(&stranger, &1),
            Err(Ok(AmmError::InsufficientClaimBalance))
        );

        assert_eq!(t.pool.get_state(), before);
        assert_eq!(t.pool.claims_of(&provider), 100);
    }

    #[test]
    fn test_remove_zero_fails() {
        let t = PoolTest::new(AddPolicy::ProportionalMin);
        let provider = t.funded_user(100, 100);
        t.pool.add_liquidity(&provider, &100, &100);

        assert_eq!(
            t.pool.try_remove_liquidity(&provider, &0),
            Err(Ok(AmmError::ZeroAmount))
        );
    }

    #[test]
    fn test_full_exit_empties_pool_and_reseeds() {
        let t = PoolTest::new(AddPolicy::ProportionalMin);
        let provider = t.funded_user(1_000, 3_000);
        t.pool.add_liquidity(&provider, &1_000, &3_000);

        let trader = t.funded_user(77, 0);
        t.pool.swap(&trader, &SwapDirection::AToB, &77);

        let claims = t.pool.claims_of(&provider);
        let (reserve_a, reserve_b) = t.pool.get_reserves();
        assert_eq!(t.pool.remove_liquidity(&provider, &claims), (reserve_a, reserve_b));

        assert_eq!(t.pool.get_state(), PoolState::new());
        assert_eq!(t.pool.try_get_price(), Err(Ok(AmmError::EmptyPool)));
        t.assert_custody_matches_reserves();

        // Reseeding sets a fresh rate
        let next = t.funded_user(30, 120);
        assert_eq!(t.pool.add_liquidity(&next, &30, &120), 60);
        assert_eq!(t.pool.get_price(), 4 * PRICE_SCALE);
    }

    #[test]
    fn test_add_then_remove_never_gains() {
        let t = PoolTest::new(AddPolicy::ProportionalMin);
        let seed = t.funded_user(1_000, 2_000);
        t.pool.add_liquidity(&seed, &1_000, &2_000);

        let provider = t.funded_user(100, 200);
        let claims = t.pool.add_liquidity(&provider, &100, &200);
        let (amount_a, amount_b) = t.pool.remove_liquidity(&provider, &claims);

        assert!(amount_a <= 100);
        assert!(amount_b <= 200);
        assert_eq!(t.pool.claims_of(&provider), 0);
        t.assert_custody_matches_reserves();
    }

    // === Swap Tests ===

    #[test]
    fn test_swap_a_to_b() {
        let t = PoolTest::new(AddPolicy::ProportionalMin);
        let provider = t.funded_user(1_000, 1_000);
        t.pool.add_liquidity(&provider, &1_000, &1_000);

        let trader = t.funded_user(100, 0);
        // 100 * 997 * 1000 / (1000 * 1000 + 100 * 997) = 90
        let amount_out = t.pool.swap(&trader, &SwapDirection::AToB, &100);

        assert_eq!(amount_out, 90);
        assert_eq!(t.token_a.balance(&trader), 0);
        assert_eq!(t.token_b.balance(&trader), 90);
        assert_eq!(t.pool.get_reserves(), (1_100, 910));
        t.assert_custody_matches_reserves();
    }

    #[test]
    fn test_swap_b_to_a() {
        let t = PoolTest::new(AddPolicy::ProportionalMin);
        let provider = t.funded_user(100, 100);
        t.pool.add_liquidity(&provider, &100, &100);

        let trader = t.funded_user(0, 10);
        let amount_out = t.pool.swap(&trader, &SwapDirection::BToA, &10);

        assert_eq!(amount_out, 9);
        assert_eq!(t.token_a.balance(&trader), 9);
        assert_eq!(t.pool.get_reserves(), (91, 110));
        t.assert_custody_matches_reserves();
    }

    #[test]
    fn test_swap_grows_constant_product() {
        let t = PoolTest::new(AddPolicy::ProportionalMin);
        let provider = t.funded_user(50_000, 80_000);
        t.pool.add_liquidity(&provider, &50_000, &80_000);

        let trader = t.funded_user(100_000, 100_000);
        let amounts: [(SwapDirection, u128); 6] = [
            (SwapDirection::AToB, 1_000),
            (SwapDirection::BToA, 7_777),
            (SwapDirection::AToB, 3),
            (SwapDirection::BToA, 25_000),
            (SwapDirection::AToB, 40_000),
            (SwapDirection::BToA, 12),
        ];
        for (direction, amount_in) in amounts {
            let (a_before, b_before) = t.pool.get_reserves();
            t.pool.swap(&trader, &direction, &amount_in);
            let (a_after, b_after) = t.pool.get_reserves();
            assert!(a_after * b_after > a_before * b_before);
        }
        t.assert_custody_matches_reserves();
    }

    #[test]
    fn test_swap_empty_pool_fails_without_transfer() {
        let t = PoolTest::new(AddPolicy::ProportionalMin);
        let trader = t.funded_user(100, 100);

        assert_eq!(
            t.pool.try_swap(&trader, &SwapDirection::AToB, &10),
            Err(Ok(AmmError::EmptyPool))
        );
        assert_eq!(
            t.pool.try_swap(&trader, &SwapDirection::BToA, &10),
            Err(Ok(AmmError::EmptyPool))
        );
        assert_eq!(t.token_a.balance(&trader), 100);
        assert_eq!(t.token_b.balance(&trader), 100);
    }

    #[test]
    fn test_swap_zero_input_fails() {
        let t = PoolTest::new(AddPolicy::ProportionalMin);
        let provider = t.funded_user(100, 100);
        t.pool.add_liquidity(&provider, &100, &100);

        assert_eq!(
            t.pool.try_swap(&provider, &SwapDirection::AToB, &0),
            Err(Ok(AmmError::ZeroInput))
        );
    }

    #[test]
    fn test_swap_dust_input_fails() {
        let t = PoolTest::new(AddPolicy::ProportionalMin);
        let provider = t.funded_user(100, 100);
        t.pool.add_liquidity(&provider, &100, &100);

        let trader = t.funded_user(1, 0);
        // 997 * 100 / (100 * 1000 + 997) = 0
        assert_eq!(
            t.pool.try_swap(&trader, &SwapDirection::AToB, &1),
            Err(Ok(AmmError::InsufficientOutputAmount))
        );
        assert_eq!(t.token_a.balance(&trader), 1);
    }

    #[test]
    fn test_swap_insufficient_balance_fails() {
        let t = PoolTest::new(AddPolicy::ProportionalMin);
        let provider = t.funded_user(1_000, 1_000);
        t.pool.add_liquidity(&provider, &1_000, &1_000);
        let before = t.pool.get_state();

        let trader = t.funded_user(5, 0);
        assert_eq!(
            t.pool.try_swap(&trader, &SwapDirection::AToB, &100),
            Err(Ok(AmmError::TransferFailed))
        );
        assert_eq!(t.pool.get_state(), before);
        assert_eq!(t.token_a.balance(&trader), 5);
        assert_eq!(t.token_b.balance(&trader), 0);
    }

    #[test]
    fn test_swap_rejected_while_locked() {
        let t = PoolTest::new(AddPolicy::ProportionalMin);
        let provider = t.funded_user(100, 100);
        t.pool.add_liquidity(&provider, &100, &100);

        t.env.as_contract(&t.pool_id, || storage::set_locked(&t.env, true));

        let trader = t.funded_user(10, 0);
        assert_eq!(
            t.pool.try_swap(&trader, &SwapDirection::AToB, &10),
            Err(Ok(AmmError::Reentrancy))
        );
        assert_eq!(
            t.pool.try_add_liquidity(&provider, &1, &1),
            Err(Ok(AmmError::Reentrancy))
        );
    }

    // === Event Tests ===

    #[test]
    fn test_initialize_emits_event() {
        let t = PoolTest::new(AddPolicy::StrictRatio);
        assert_eq!(t.pool_events().events().len(), 1);
    }

    #[test]
    fn test_add_liquidity_emits_one_event() {
        let t = PoolTest::new(AddPolicy::ProportionalMin);
        let provider = t.funded_user(100, 100);

        t.pool.add_liquidity(&provider, &100, &100);

        let data = (100u128, 100u128, 100u128).into_val(&t.env);
        assert_eq!(
            t.pool_events(),
            t.pool_event("liquidity_added", &provider, data)
        );
    }

    #[test]
    fn test_remove_liquidity_emits_one_event() {
        let t = PoolTest::new(AddPolicy::ProportionalMin);
        let provider = t.funded_user(100, 100);
        t.pool.add_liquidity(&provider, &100, &100);

        t.pool.remove_liquidity(&provider, &50);

        let data = (50u128, 50u128, 50u128).into_val(&t.env);
        assert_eq!(
            t.pool_events(),
            t.pool_event("liquidity_removed", &provider, data)
        );
    }

    #[test]
    fn test_swap_emits_one_event() {
        let t = PoolTest::new(AddPolicy::ProportionalMin);
        let provider = t.funded_user(1_000, 1_000);
        t.pool.add_liquidity(&provider, &1_000, &1_000);
        let trader = t.funded_user(100, 0);

        t.pool.swap(&trader, &SwapDirection::AToB, &100);

        let data = (
            t.token_a.address.clone(),
            t.token_b.address.clone(),
            100u128,
            90u128,
        )
            .into_val(&t.env);
        assert_eq!(t.pool_events(), t.pool_event("swap", &trader, data));
    }

    #[test]
    fn test_failed_operations_emit_nothing() {
        let strict = PoolTest::new(AddPolicy::StrictRatio);
        let seed = strict.funded_user(100, 200);
        strict.pool.add_liquidity(&seed, &100, &200);
        let provider = strict.funded_user(50, 99);
        assert_eq!(
            strict.pool.try_add_liquidity(&provider, &50, &99),
            Err(Ok(AmmError::RatioViolation))
        );
        assert!(strict.pool_events().events().is_empty());

        let t = PoolTest::new(AddPolicy::ProportionalMin);
        let poor = t.funded_user(100, 40);
        assert_eq!(
            t.pool.try_add_liquidity(&poor, &100, &100),
            Err(Ok(AmmError::TransferFailed))
        );
        assert!(t.pool_events().events().is_empty());

        let trader = t.funded_user(10, 0);
        assert_eq!(
            t.pool.try_swap(&trader, &SwapDirection::AToB, &10),
            Err(Ok(AmmError::EmptyPool))
        );
        assert!(t.pool_events().events().is_empty());
    }

    // === Query Tests ===

    #[test]
    fn test_get_amount_out_reference() {
        let t = PoolTest::new(AddPolicy::ProportionalMin);
        assert_eq!(t.pool.get_amount_out(&10, &100, &100), 9);
        assert_eq!(
            t.pool.try_get_amount_out(&10, &0, &100),
            Err(Ok(AmmError::InvalidReserves))
        );
        assert_eq!(
            t.pool.try_get_amount_out(&0, &100, &100),
            Err(Ok(AmmError::ZeroInput))
        );
        assert_eq!(t.pool.get_amount_in(&9, &100, &100), 10);
    }

    #[test]
    fn test_get_price() {
        let t = PoolTest::new(AddPolicy::ProportionalMin);
        assert_eq!(t.pool.try_get_price(), Err(Ok(AmmError::EmptyPool)));

        let provider = t.funded_user(100, 250);
        t.pool.add_liquidity(&provider, &100, &250);
        assert_eq!(t.pool.get_price(), 2_500_000_000_000_000_000);
    }

    #[test]
    fn test_quote_matches_swap() {
        let t = PoolTest::new(AddPolicy::ProportionalMin);
        let provider = t.funded_user(10_000, 20_000);
        t.pool.add_liquidity(&provider, &10_000, &20_000);

        let quote = t.pool.quote(&SwapDirection::BToA, &1_234);
        let trader = t.funded_user(0, 1_234);
        let amount_out = t.pool.swap(&trader, &SwapDirection::BToA, &1_234);

        assert_eq!(quote.amount_out, amount_out);
        let (reserve_a, reserve_b) = t.pool.get_reserves();
        assert_eq!(quote.reserve_in_after, reserve_b);
        assert_eq!(quote.reserve_out_after, reserve_a);
    }

    #[test]
    fn test_claims_sum_to_total() {
        let t = PoolTest::new(AddPolicy::ProportionalMin);
        let alice = t.funded_user(1_000, 1_000);
        let bob = t.funded_user(1_000, 1_000);
        t.pool.add_liquidity(&alice, &400, &400);
        t.pool.add_liquidity(&bob, &250, &300);
        t.pool.remove_liquidity(&alice, &123);

        let total = t.pool.claims_of(&alice) + t.pool.claims_of(&bob);
        assert_eq!(total, t.pool.total_claims());
        assert_eq!(total, t.pool.get_state().total_claims);
    }
}
