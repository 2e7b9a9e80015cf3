use anchor_lang::prelude::*;

use crate::errors::LedgerError;
use crate::math::{Rad, FIXED_POINT_LEN};

/// Shutdown state of the ledger
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LiveFlag {
    Live,
    Caged,
}

impl Default for LiveFlag {
    fn default() -> Self {
        LiveFlag::Live
    }
}

/// Global ledger state
/// Holds the system-wide supply totals, the shutdown flag and the pause switch
#[account]
#[derive(Debug, Default)]
pub struct Ledger {
    /// Account that created the ledger
    pub admin: Pubkey,

    /// Live or caged
    pub live: LiveFlag,

    /// Whether value-moving operations are paused
    pub paused: bool,

    /// Ceiling on total currency issued across all pools
    pub total_debt_ceiling: Rad,

    /// Currency issued across all pools, including unbacked currency
    pub total_currency_issued: Rad,

    /// Currency minted against system bad debt
    pub total_unbacked_currency: Rad,

    /// Unix timestamp of the last cage, zero while never caged
    pub caged_at: i64,

    pub bump: u8,

    /// Reserved space for future upgrades
    pub _reserved: [u64; 8],
}

impl Ledger {
    pub const LEN: usize = 8 + // discriminator
        32 + // admin
        1 + // live
        1 + // paused
        FIXED_POINT_LEN + // total_debt_ceiling
        FIXED_POINT_LEN + // total_currency_issued
        FIXED_POINT_LEN + // total_unbacked_currency
        8 + // caged_at
        1 + // bump
        (8 * 8); // _reserved

    pub fn is_live(&self) -> bool {
        self.live == LiveFlag::Live
    }

    pub fn require_live(&self) -> Result<()> {
        require!(self.is_live(), LedgerError::NotLive);
        Ok(())
    }

    pub fn require_not_paused(&self) -> Result<()> {
        require!(!self.paused, LedgerError::LedgerPaused);
        Ok(())
    }

    /// Freeze risk-increasing operations.
    /// Returns false when the ledger was already caged, in which case nothing changes.
    pub fn cage(&mut self, now: i64) -> bool {
        if !self.is_live() {
            return false;
        }
        self.live = LiveFlag::Caged;
        self.caged_at = now;
        true
    }

    pub fn uncage(&mut self) -> Result<()> {
        require!(!self.is_live(), LedgerError::NotCaged);
        self.live = LiveFlag::Live;
        Ok(())
    }
}
