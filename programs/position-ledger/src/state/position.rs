use anchor_lang::prelude::*;

use crate::constants::PoolId;
use crate::errors::LedgerError;
use crate::math::{FixedPoint, Rad, Wad, FIXED_POINT_LEN};
use crate::state::CollateralPool;

/// One account's locked collateral and outstanding debt share within one pool
/// Created on first use, never deleted; a position with both fields at zero is empty
#[account]
#[derive(Debug, Default)]
pub struct Position {
    pub pool_id: PoolId,

    /// Owner of this position
    pub owner: Pubkey,

    /// Collateral locked against the debt
    pub locked_collateral: Wad,

    /// Debt in rate-independent shares; real debt is `debt_share * rate`
    pub debt_share: Wad,

    pub bump: u8,
}

impl Position {
    pub const LEN: usize = 8 + // discriminator
        32 + // pool_id
        32 + // owner
        FIXED_POINT_LEN + // locked_collateral
        FIXED_POINT_LEN + // debt_share
        1; // bump

    /// Record the key material of a freshly created position
    pub fn bind(&mut self, pool_id: PoolId, owner: Pubkey, bump: u8) {
        if self.owner == Pubkey::default() {
            self.pool_id = pool_id;
            self.owner = owner;
            self.bump = bump;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.locked_collateral.is_zero() && self.debt_share.is_zero()
    }

    /// Real debt at the pool's current rate
    pub fn debt_value(&self, pool: &CollateralPool) -> Result<Rad> {
        self.debt_share
            .mul_ray(pool.debt_accumulated_rate)
            .ok_or(error!(LedgerError::MathOverflow))
    }

    /// Locked collateral valued at the pool's safety-margin price
    pub fn collateral_value(&self, pool: &CollateralPool) -> Result<Rad> {
        self.locked_collateral
            .mul_ray(pool.price_with_safety_margin)
            .ok_or(error!(LedgerError::MathOverflow))
    }

    /// Whether the collateral covers the debt
    pub fn is_safe(&self, pool: &CollateralPool) -> Result<bool> {
        Ok(self.debt_value(pool)? <= self.collateral_value(pool)?)
    }

    /// Whether the debt is either zero or at least the pool's floor
    pub fn is_above_floor(&self, pool: &CollateralPool) -> Result<bool> {
        let debt = self.debt_value(pool)?;
        Ok(debt.is_zero() || debt >= pool.debt_floor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Ray;

    fn pool(rate: Ray, price: Ray) -> CollateralPool {
        CollateralPool {
            debt_accumulated_rate: rate,
            price_with_safety_margin: price,
            debt_floor: Rad::from_units(5),
            ..Default::default()
        }
    }

    #[test]
    fn safety_compares_values_not_amounts() {
        let position = Position {
            locked_collateral: Wad::from_units(10),
            debt_share: Wad::from_units(10),
            ..Default::default()
        };
        assert!(position.is_safe(&pool(Ray::one(), Ray::one())).unwrap());
        assert!(!position.is_safe(&pool(Ray::from_units(2), Ray::one())).unwrap());
        assert!(position.is_safe(&pool(Ray::from_units(2), Ray::from_units(2))).unwrap());
    }

    #[test]
    fn debt_floor_ignores_empty_debt() {
        let mut position = Position::default();
        let pool = pool(Ray::one(), Ray::one());
        assert!(position.is_empty());
        assert!(position.is_above_floor(&pool).unwrap());

        position.debt_share = Wad::from_units(1);
        assert!(!position.is_above_floor(&pool).unwrap());

        position.debt_share = Wad::from_units(5);
        assert!(position.is_above_floor(&pool).unwrap());
    }

    #[test]
    fn bind_only_sets_keys_once() {
        let owner = Pubkey::new_unique();
        let mut position = Position::default();
        position.bind([1u8; 32], owner, 250);
        position.bind([2u8; 32], Pubkey::new_unique(), 1);
        assert_eq!(position.owner, owner);
        assert_eq!(position.pool_id, [1u8; 32]);
        assert_eq!(position.bump, 250);
    }
}
