use anchor_lang::prelude::*;

/// Presence of this account means `delegate` may act on `owner`'s
/// balances and positions
#[account]
#[derive(Debug, Default)]
pub struct WhitelistEntry {
    pub owner: Pubkey,
    pub delegate: Pubkey,
    pub bump: u8,
}

impl WhitelistEntry {
    pub const LEN: usize = 8 + 32 + 32 + 1;
}
