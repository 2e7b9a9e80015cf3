pub mod balances;
pub mod collateral_pool;
pub mod ledger;
pub mod position;
pub mod role_grant;
pub mod whitelist;

pub use balances::*;
pub use collateral_pool::*;
pub use ledger::*;
pub use position::*;
pub use role_grant::*;
pub use whitelist::*;
