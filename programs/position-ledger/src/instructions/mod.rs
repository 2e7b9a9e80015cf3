pub mod initialize;
pub mod grant_role;
pub mod revoke_role;
pub mod init_collateral_pool;
pub mod admin_set_params;
pub mod admin_set_total_debt_ceiling;
pub mod admin_set_paused;
pub mod whitelist;
pub mod unwhitelist;
pub mod add_collateral;
pub mod move_collateral;
pub mod move_currency;
pub mod adjust_position;
pub mod move_position;
pub mod confiscate_position;
pub mod mint_unbacked_currency;
pub mod settle_system_bad_debt;
pub mod accrue_stability_fee;
pub mod cage;
pub mod uncage;

pub use initialize::*;
pub use grant_role::*;
pub use revoke_role::*;
pub use init_collateral_pool::*;
pub use admin_set_params::*;
pub use admin_set_total_debt_ceiling::*;
pub use admin_set_paused::*;
pub use whitelist::*;
pub use unwhitelist::*;
pub use add_collateral::*;
pub use move_collateral::*;
pub use move_currency::*;
pub use adjust_position::*;
pub use move_position::*;
pub use confiscate_position::*;
pub use mint_unbacked_currency::*;
pub use settle_system_bad_debt::*;
pub use accrue_stability_fee::*;
pub use cage::*;
pub use uncage::*;
