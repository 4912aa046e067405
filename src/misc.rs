use std::cmp::Ordering;
use std::ops::{BitAnd, BitOr, BitXor, Not};

use num_traits::ops::overflowing::{OverflowingAdd, OverflowingMul, OverflowingSub};
use num_traits::{Bounded, One, Zero};

use crate::limb::Limb;
use crate::DoubleWidth;

impl<H: Limb> DoubleWidth<H> {
    pub const BITS: u32 = <Self as Limb>::BITS;
    pub const IS_SIGNED: bool = <Self as Limb>::IS_SIGNED;
    pub const WORDS: usize = <Self as Limb>::WORDS;

    pub const MIN: Self = <Self as Limb>::MIN;
    pub const MAX: Self = <Self as Limb>::MAX;
    pub const ZERO: Self = <Self as Limb>::ZERO;
    pub const ONE: Self = <Self as Limb>::ONE;

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.high.is_zero() && self.low.is_zero()
    }
}

impl<H: Limb> PartialOrd for DoubleWidth<H> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<H: Limb> Ord for DoubleWidth<H> {
    /// The signed high halves decide unless they are equal.
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.high
            .cmp(&other.high)
            .then_with(|| self.low.cmp(&other.low))
    }
}

impl<H: Limb> Not for DoubleWidth<H> {
    type Output = Self;

    #[inline]
    fn not(self) -> Self {
        Self {
            high: !self.high,
            low: !self.low,
        }
    }
}

macro_rules! impl_bitwise {
    ($($op:ident :: $method:ident => $token:tt),*) => {$(
        impl<H: Limb> $op for DoubleWidth<H> {
            type Output = Self;

            #[inline]
            fn $method(self, other: Self) -> Self {
                Self {
                    high: self.high $token other.high,
                    low: self.low $token other.low,
                }
            }
        }
    )*};
}

impl_bitwise!(BitAnd::bitand => &, BitOr::bitor => |, BitXor::bitxor => ^);

impl<H: Limb> Zero for DoubleWidth<H> {
    #[inline]
    fn zero() -> Self {
        Self::ZERO
    }

    #[inline]
    fn is_zero(&self) -> bool {
        DoubleWidth::is_zero(self)
    }
}

impl<H: Limb> One for DoubleWidth<H> {
    #[inline]
    fn one() -> Self {
        Self::ONE
    }
}

impl<H: Limb> Bounded for DoubleWidth<H> {
    #[inline]
    fn min_value() -> Self {
        Self::MIN
    }

    #[inline]
    fn max_value() -> Self {
        Self::MAX
    }
}

impl<H: Limb> OverflowingAdd for DoubleWidth<H> {
    #[inline]
    fn overflowing_add(&self, other: &Self) -> (Self, bool) {
        DoubleWidth::overflowing_add(self, other)
    }
}

impl<H: Limb> OverflowingSub for DoubleWidth<H> {
    #[inline]
    fn overflowing_sub(&self, other: &Self) -> (Self, bool) {
        DoubleWidth::overflowing_sub(self, other)
    }
}

impl<H: Limb> OverflowingMul for DoubleWidth<H> {
    #[inline]
    fn overflowing_mul(&self, other: &Self) -> (Self, bool) {
        DoubleWidth::overflowing_mul(self, other)
    }
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use num_traits::Bounded;

    use crate::{i256, u256, I256, U256};

    #[test]
    fn compares() {
        let a = u256([0, 1, 2, 3]);
        let b = u256([0, 1, 2, 4]);
        let c = u256([1, 1, 2, 4]);
        let d = u256([1, 2, 5, 2]);

        assert_eq!(a.cmp(&b), Ordering::Less);
        assert_eq!(b.cmp(&c), Ordering::Less);
        assert_eq!(c.cmp(&d), Ordering::Greater);
        assert_eq!(d.cmp(&d), Ordering::Equal);
    }

    #[test]
    fn compares_signed() {
        let minus_one = i256([u64::MAX; 4]);
        let one = i256([1, 0, 0, 0]);

        assert!(minus_one < one);
        assert!(I256::MIN < minus_one);
        assert!(I256::MAX > one);
        assert_eq!(I256::MIN.cmp(&I256::MIN), Ordering::Equal);

        // Same bits, different ordering.
        assert!(u256([u64::MAX; 4]) > u256([1, 0, 0, 0]));
    }

    #[test]
    fn bounds() {
        assert_eq!(U256::MIN, U256::ZERO);
        assert_eq!(U256::MAX, u256([u64::MAX; 4]));
        assert_eq!(I256::MIN, i256([0, 0, 0, 1 << 63]));
        assert_eq!(I256::MAX, i256([u64::MAX, u64::MAX, u64::MAX, u64::MAX >> 1]));
        assert_eq!(<I256 as Bounded>::max_value(), I256::MAX);
        assert_eq!(U256::BITS, 256);
        assert_eq!(U256::WORDS, 4);
        assert!(I256::IS_SIGNED && !U256::IS_SIGNED);
    }

    #[test]
    fn bitwise() {
        let a = u256([0b1100, 1, 0, u64::MAX]);
        let b = u256([0b1010, 3, 0, 0]);

        assert_eq!(a & b, u256([0b1000, 1, 0, 0]));
        assert_eq!(a | b, u256([0b1110, 3, 0, u64::MAX]));
        assert_eq!(a ^ b, u256([0b0110, 2, 0, u64::MAX]));
        assert_eq!(!a, u256([!0b1100, !1, u64::MAX, 0]));
        assert_eq!(!I256::ZERO, i256([u64::MAX; 4]));
    }

    #[test]
    fn zero() {
        assert!(U256::ZERO.is_zero());
        assert!(!u256([0, 0, 1, 0]).is_zero());
        assert!(!I256::MIN.is_zero());
    }
}
