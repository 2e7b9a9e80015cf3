use anchor_lang::prelude::*;

#[error_code]
pub enum LedgerError {
    #[msg("Caller lacks the required role or whitelist entry")]
    PermissionDenied,

    #[msg("Ledger is caged")]
    NotLive,

    #[msg("Ledger is already live")]
    NotCaged,

    #[msg("Ledger is paused")]
    LedgerPaused,

    #[msg("Collateral pool is not initialized")]
    PoolNotInitialized,

    #[msg("Collateral pool is already initialized")]
    AlreadyInitialized,

    #[msg("Pool or total debt ceiling exceeded")]
    CeilingExceeded,

    #[msg("Position debt ceiling exceeded")]
    PositionDebtCeilingExceeded,

    #[msg("Source position debt ceiling exceeded")]
    PositionDebtCeilingExceededSrc,

    #[msg("Destination position debt ceiling exceeded")]
    PositionDebtCeilingExceededDst,

    #[msg("Position is not safe")]
    NotSafe,

    #[msg("Source position is not safe")]
    NotSafeSrc,

    #[msg("Destination position is not safe")]
    NotSafeDst,

    #[msg("Position debt is below the debt floor")]
    DebtFloor,

    #[msg("Source position debt is below the debt floor")]
    DebtFloorSrc,

    #[msg("Destination position debt is below the debt floor")]
    DebtFloorDst,

    #[msg("Insufficient balance")]
    InsufficientBalance,

    #[msg("Rate multiplier must be at least one ray")]
    InvalidRateMultiplier,

    #[msg("Source and destination positions must differ")]
    SamePosition,

    #[msg("Math overflow")]
    MathOverflow,
}
