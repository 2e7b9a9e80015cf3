// PDA Seeds
pub const LEDGER_SEED: &[u8] = b"ledger";
pub const COLLATERAL_POOL_SEED: &[u8] = b"collateral_pool";
pub const POSITION_SEED: &[u8] = b"position";
pub const COLLATERAL_BALANCE_SEED: &[u8] = b"collateral";
pub const CURRENCY_BALANCE_SEED: &[u8] = b"currency";
pub const BAD_DEBT_SEED: &[u8] = b"bad_debt";
pub const WHITELIST_SEED: &[u8] = b"whitelist";
pub const ROLE_SEED: &[u8] = b"role";

// Fixed-point precisions (decimal places)
pub const WAD_DECIMALS: usize = 18; // collateral amounts and debt shares
pub const RAY_DECIMALS: usize = 27; // rates and prices
pub const RAD_DECIMALS: usize = 45; // currency value, wad * ray

/// Collateral pool identifier, a fixed-size opaque tag
pub type PoolId = [u8; 32];
