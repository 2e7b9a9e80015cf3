use anchor_lang::prelude::*;

use crate::constants::PoolId;
use crate::math::{Rad, Wad, FIXED_POINT_LEN};

/// Unlocked collateral the ledger recognizes for an account in one pool
#[account]
#[derive(Debug, Default)]
pub struct CollateralBalance {
    pub pool_id: PoolId,
    pub owner: Pubkey,
    pub amount: Wad,
    pub bump: u8,
}

impl CollateralBalance {
    pub const LEN: usize = 8 + 32 + 32 + FIXED_POINT_LEN + 1;

    pub fn bind(&mut self, pool_id: PoolId, owner: Pubkey, bump: u8) {
        if self.owner == Pubkey::default() {
            self.pool_id = pool_id;
            self.owner = owner;
            self.bump = bump;
        }
    }
}

/// Synthetic currency held by an account
#[account]
#[derive(Debug, Default)]
pub struct CurrencyBalance {
    pub owner: Pubkey,
    pub amount: Rad,
    pub bump: u8,
}

impl CurrencyBalance {
    pub const LEN: usize = 8 + 32 + FIXED_POINT_LEN + 1;

    pub fn bind(&mut self, owner: Pubkey, bump: u8) {
        if self.owner == Pubkey::default() {
            self.owner = owner;
            self.bump = bump;
        }
    }
}

/// Bad debt absorbed by the system on behalf of an account
#[account]
#[derive(Debug, Default)]
pub struct SystemBadDebt {
    pub owner: Pubkey,
    pub amount: Rad,
    pub bump: u8,
}

impl SystemBadDebt {
    pub const LEN: usize = 8 + 32 + FIXED_POINT_LEN + 1;

    pub fn bind(&mut self, owner: Pubkey, bump: u8) {
        if self.owner == Pubkey::default() {
            self.owner = owner;
            self.bump = bump;
        }
    }
}
