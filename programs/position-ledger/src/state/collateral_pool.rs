use anchor_lang::prelude::*;

use crate::constants::PoolId;
use crate::errors::LedgerError;
use crate::math::{FixedPoint, Rad, Ray, Wad, FIXED_POINT_LEN};

/// Risk parameters of a collateral pool
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PoolParams {
    /// Collateral price already discounted by the liquidation buffer
    pub price_with_safety_margin: Ray,
    /// Ceiling on currency issued against this pool
    pub debt_ceiling: Rad,
    /// Smallest non-zero debt a position may carry
    pub debt_floor: Rad,
    /// Ceiling on the debt of a single position
    pub position_debt_ceiling: Rad,
}

/// Registry record of one collateral class
/// Parameters are written by the registry; the ledger maintains the
/// accumulated rate, the total debt share and the currency issued
#[account]
#[derive(Debug, Default)]
pub struct CollateralPool {
    pub pool_id: PoolId,

    /// Shared debt rate, multiplied lazily against every debt share
    pub debt_accumulated_rate: Ray,

    /// Sum of debt shares of all positions in the pool
    pub total_debt_share: Wad,

    pub price_with_safety_margin: Ray,
    pub debt_ceiling: Rad,
    pub debt_floor: Rad,
    pub position_debt_ceiling: Rad,

    /// Currency issued against this pool
    pub currency_issued: Rad,

    pub bump: u8,

    /// Reserved space for future upgrades
    pub _reserved: [u64; 8],
}

impl CollateralPool {
    pub const LEN: usize = 8 + // discriminator
        32 + // pool_id
        FIXED_POINT_LEN + // debt_accumulated_rate
        FIXED_POINT_LEN + // total_debt_share
        FIXED_POINT_LEN + // price_with_safety_margin
        FIXED_POINT_LEN + // debt_ceiling
        FIXED_POINT_LEN + // debt_floor
        FIXED_POINT_LEN + // position_debt_ceiling
        FIXED_POINT_LEN + // currency_issued
        1 + // bump
        (8 * 8); // _reserved

    /// A pool is initialized once its rate has been set
    pub fn is_initialized(&self) -> bool {
        !self.debt_accumulated_rate.is_zero()
    }

    pub fn require_initialized(&self) -> Result<()> {
        require!(self.is_initialized(), LedgerError::PoolNotInitialized);
        Ok(())
    }

    /// Set up a fresh pool with a rate of one and empty aggregates
    pub fn initialize(&mut self, pool_id: PoolId, params: &PoolParams, bump: u8) -> Result<()> {
        require!(!self.is_initialized(), LedgerError::AlreadyInitialized);

        self.pool_id = pool_id;
        self.debt_accumulated_rate = Ray::one();
        self.total_debt_share = Wad::ZERO;
        self.currency_issued = Rad::ZERO;
        self.set_params(params);
        self.bump = bump;

        Ok(())
    }

    pub fn params(&self) -> PoolParams {
        PoolParams {
            price_with_safety_margin: self.price_with_safety_margin,
            debt_ceiling: self.debt_ceiling,
            debt_floor: self.debt_floor,
            position_debt_ceiling: self.position_debt_ceiling,
        }
    }

    pub fn set_params(&mut self, params: &PoolParams) {
        self.price_with_safety_margin = params.price_with_safety_margin;
        self.debt_ceiling = params.debt_ceiling;
        self.debt_floor = params.debt_floor;
        self.position_debt_ceiling = params.position_debt_ceiling;
    }
}
