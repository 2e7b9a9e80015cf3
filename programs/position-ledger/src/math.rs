//! Fixed-point units used by the ledger.
//!
//! `Wad` (18 decimals) measures collateral amounts and debt shares, `Ray`
//! (27 decimals) measures rates and prices, and `Rad` (45 decimals) measures
//! currency value. The only way to get a `Rad` from a `Wad` is multiplying by a
//! `Ray`, and the only way back is dividing by one, so units cannot be mixed up.
//! All values sit on an unsigned 256-bit integer; signs only exist on [`Delta`].

use std::fmt;
use std::io::{Read, Write};

use anchor_lang::prelude::*;
use primitive_types::U256;

use crate::constants::{RAD_DECIMALS, RAY_DECIMALS, WAD_DECIMALS};

/// Largest magnitude representable by a signed 256-bit integer.
const MAX_SIGNED: U256 = U256([u64::MAX, u64::MAX, u64::MAX, i64::MAX as u64]);

/// Arithmetic shared by the three units. Every operation is checked and
/// returns `None` instead of wrapping.
pub trait FixedPoint: Copy + Ord {
    fn checked_add(self, rhs: Self) -> Option<Self>;
    fn checked_sub(self, rhs: Self) -> Option<Self>;
    fn is_zero(&self) -> bool;
}

macro_rules! fixed_point {
    ($(#[$doc:meta])* $name:ident, $decimals:expr) => {
        $(#[$doc])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(U256);

        impl $name {
            pub const ZERO: Self = Self(U256([0; 4]));
            pub const DECIMALS: usize = $decimals;

            /// Wrap an already scaled integer.
            pub fn from_raw(raw: u128) -> Self {
                Self(U256::from(raw))
            }

            /// Scale a whole number of units, e.g. `from_units(3)` is 3.0.
            pub fn from_units(units: u64) -> Self {
                Self(U256::from(units).saturating_mul(U256::exp10($decimals)))
            }
        }

        impl FixedPoint for $name {
            fn checked_add(self, rhs: Self) -> Option<Self> {
                self.0.checked_add(rhs.0).map(Self)
            }

            fn checked_sub(self, rhs: Self) -> Option<Self> {
                self.0.checked_sub(rhs.0).map(Self)
            }

            fn is_zero(&self) -> bool {
                self.0.is_zero()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        // Stored as four little-endian u64 limbs.
        impl AnchorSerialize for $name {
            fn serialize<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
                for limb in self.0 .0.iter() {
                    limb.serialize(writer)?;
                }
                Ok(())
            }
        }

        impl AnchorDeserialize for $name {
            fn deserialize_reader<R: Read>(reader: &mut R) -> std::io::Result<Self> {
                let mut limbs = [0u64; 4];
                for limb in limbs.iter_mut() {
                    *limb = u64::deserialize_reader(reader)?;
                }
                Ok(Self(U256(limbs)))
            }
        }
    };
}

fixed_point!(
    /// Collateral amount or debt share, 18 decimals.
    Wad,
    WAD_DECIMALS
);

fixed_point!(
    /// Rate or price, 27 decimals.
    Ray,
    RAY_DECIMALS
);

fixed_point!(
    /// Currency value, 45 decimals (`Wad` x `Ray`).
    Rad,
    RAD_DECIMALS
);

/// Serialized size of any fixed-point value.
pub const FIXED_POINT_LEN: usize = 32;

impl Wad {
    /// Value of this amount at the given rate or price.
    pub fn mul_ray(self, ray: Ray) -> Option<Rad> {
        self.0.checked_mul(ray.0).map(Rad)
    }
}

impl Ray {
    pub fn one() -> Self {
        Self(U256::exp10(RAY_DECIMALS))
    }

    /// `self * rhs / 1e27`, truncating.
    pub fn rmul(self, rhs: Ray) -> Option<Ray> {
        self.0
            .checked_mul(rhs.0)?
            .checked_div(U256::exp10(RAY_DECIMALS))
            .map(Ray)
    }
}

impl Rad {
    /// Amount this value buys at the given rate, truncating.
    pub fn div_ray(self, ray: Ray) -> Option<Wad> {
        self.0.checked_div(ray.0).map(Wad)
    }
}

/// A signed change of a fixed-point value.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Delta<T> {
    Increase(T),
    Decrease(T),
}

impl<T: FixedPoint> Delta<T> {
    pub fn magnitude(self) -> T {
        match self {
            Delta::Increase(v) | Delta::Decrease(v) => v,
        }
    }

    pub fn is_positive(self) -> bool {
        matches!(self, Delta::Increase(v) if !v.is_zero())
    }

    pub fn is_negative(self) -> bool {
        matches!(self, Delta::Decrease(v) if !v.is_zero())
    }

    pub fn negate(self) -> Self {
        match self {
            Delta::Increase(v) => Delta::Decrease(v),
            Delta::Decrease(v) => Delta::Increase(v),
        }
    }

    /// `value + self`, or `None` on overflow or when the result would be
    /// negative.
    pub fn apply_to(self, value: T) -> Option<T> {
        match self {
            Delta::Increase(v) => value.checked_add(v),
            Delta::Decrease(v) => value.checked_sub(v),
        }
    }
}

impl Delta<Wad> {
    pub fn from_signed(raw: i128) -> Self {
        if raw < 0 {
            Delta::Decrease(Wad::from_raw(raw.unsigned_abs()))
        } else {
            Delta::Increase(Wad::from_raw(raw.unsigned_abs()))
        }
    }

    /// Value of this change at the given rate. Fails when the magnitude does
    /// not fit a signed 256-bit integer.
    pub fn mul_ray(self, ray: Ray) -> Option<Delta<Rad>> {
        let value = self.magnitude().mul_ray(ray)?;
        if value.0 > MAX_SIGNED {
            return None;
        }
        Some(match self {
            Delta::Increase(_) => Delta::Increase(value),
            Delta::Decrease(_) => Delta::Decrease(value),
        })
    }
}

impl<T: fmt::Display> fmt::Display for Delta<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Delta::Increase(v) => write!(f, "+{}", v),
            Delta::Decrease(v) => write!(f, "-{}", v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wad_times_ray_is_rad() {
        let value = Wad::from_units(10).mul_ray(Ray::one()).unwrap();
        assert_eq!(value, Rad::from_units(10));

        let half = Ray::from_raw(500_000_000_000_000_000_000_000_000);
        assert_eq!(Wad::from_units(3).mul_ray(half).unwrap().to_string(), format!("15{}", "0".repeat(44)));
    }

    #[test]
    fn rad_divided_by_ray_truncates() {
        let three = Ray::from_units(3);
        let wad = Rad::from_units(10).div_ray(three).unwrap();
        // 10 / 3 truncated at 18 decimals
        assert_eq!(wad, Wad::from_raw(3_333_333_333_333_333_333));
        assert_eq!(Rad::from_units(1).div_ray(Ray::ZERO), None);
    }

    #[test]
    fn rmul_multiplies_before_dividing() {
        let rate = Ray::from_raw(1_000_000_000_000_000_000_000_000_001);
        let multiplier = Ray::from_raw(1_500_000_000_000_000_000_000_000_000);
        // (1e27 + 1) * 1.5e27 / 1e27 = 1.5e27 + 1 (1.5 truncated)
        assert_eq!(
            rate.rmul(multiplier).unwrap(),
            Ray::from_raw(1_500_000_000_000_000_000_000_000_001)
        );
        assert_eq!(Ray::one().rmul(Ray::one()).unwrap(), Ray::one());
    }

    #[test]
    fn units_scale_by_their_decimals() {
        assert_eq!(Wad::from_units(1), Wad::from_raw(10u128.pow(18)));
        assert_eq!(Ray::from_units(1), Ray::one());
        assert_eq!(Rad::from_units(1).0, U256::exp10(45));
    }

    #[test]
    fn checked_sub_refuses_to_go_negative() {
        let one = Wad::from_units(1);
        assert_eq!(one.checked_sub(Wad::from_units(2)), None);
        assert_eq!(one.checked_sub(one), Some(Wad::ZERO));
    }

    #[test]
    fn delta_from_signed_keeps_sign_and_magnitude() {
        let up = Delta::<Wad>::from_signed(5);
        let down = Delta::<Wad>::from_signed(-5);
        assert!(up.is_positive() && !up.is_negative());
        assert!(down.is_negative() && !down.is_positive());
        assert_eq!(up.magnitude(), down.magnitude());
        assert_eq!(down.negate(), up);

        let zero = Delta::<Wad>::from_signed(0);
        assert!(!zero.is_positive() && !zero.is_negative());

        let min = Delta::<Wad>::from_signed(i128::MIN);
        assert_eq!(min.magnitude(), Wad::from_raw(1u128 << 127));
    }

    #[test]
    fn delta_apply_to_balances() {
        let balance = Wad::from_units(4);
        assert_eq!(Delta::Increase(Wad::from_units(1)).apply_to(balance), Some(Wad::from_units(5)));
        assert_eq!(Delta::Decrease(Wad::from_units(4)).apply_to(balance), Some(Wad::ZERO));
        assert_eq!(Delta::Decrease(Wad::from_units(5)).apply_to(balance), None);
    }

    #[test]
    fn delta_value_rejects_signed_overflow() {
        let big = Delta::<Wad>::from_signed(i128::MAX);
        assert!(big.mul_ray(Ray::one()).is_some());

        // i128::MAX * 2^129 fits 256 bits but is beyond the signed 256-bit range.
        let huge_rate = Ray(U256([0, 0, 2, 0]));
        assert_eq!(big.mul_ray(huge_rate), None);

        let debit = Delta::<Wad>::from_signed(-2).mul_ray(Ray::from_units(3)).unwrap();
        assert_eq!(debit, Delta::Decrease(Rad::from_raw(6 * 10u128.pow(27))));
    }

    #[test]
    fn serializes_as_limbs() {
        let value = Rad::from_units(7);
        let bytes = value.try_to_vec().unwrap();
        assert_eq!(bytes.len(), FIXED_POINT_LEN);
        assert_eq!(Rad::try_from_slice(&bytes).unwrap(), value);
    }
}
