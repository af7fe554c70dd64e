use soroban_sdk::contracterror;

/// Errors returned by the pool contract and the pricing math.
///
/// Codes are part of the contract interface and must never be renumbered.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum AmmError {
    /// `initialize` called on a pool that already has a config
    AlreadyInitialized = 1,
    /// Operation on a pool that was never initialized
    NotInitialized = 2,
    /// Both assets of the pair are the same token
    IdenticalAssets = 3,
    /// A deposit or withdrawal amount is zero
    ZeroAmount = 4,
    /// Swap or quote input is zero
    ZeroInput = 5,
    /// Deposit too small to mint a single claim
    InsufficientClaimsMinted = 6,
    /// Provider tried to burn more claims than it holds
    InsufficientClaimBalance = 7,
    /// Strict-ratio deposit under-supplies asset B
    RatioViolation = 8,
    /// Pool holds no reserves
    EmptyPool = 9,
    /// Pricing called with a zero reserve
    InvalidReserves = 10,
    /// Underlying asset movement failed
    TransferFailed = 11,
    /// Result does not fit the integer width
    ArithmeticOverflow = 12,
    /// Requested output is not available in the reserves
    InsufficientLiquidity = 13,
    /// Swap would pay out nothing
    InsufficientOutputAmount = 14,
    /// Mutating call entered while another one is in progress
    Reentrancy = 15,
    /// Post-operation state check failed
    InvariantViolation = 16,
}
