use num_traits::ops::overflowing::{OverflowingAdd, OverflowingSub};

use crate::limb::{Limb, SignedLimb};
use crate::DoubleWidth;

impl<H: Limb> DoubleWidth<H> {
    /// Wrapping sum and whether it overflowed the signed or unsigned range
    /// of `Self`.
    #[inline]
    pub fn overflowing_add(&self, other: &Self) -> (Self, bool) {
        let (low, carry) = self.low.overflowing_add(&other.low);
        let (mut high, mut overflow) = self.high.overflowing_add(&other.high);

        if carry {
            let (h, o) = high.overflowing_add(&H::ONE);
            high = h;
            // Two wraps in opposite directions cancel out.
            overflow ^= o;
        }

        (Self { high, low }, overflow)
    }

    #[inline]
    pub fn overflowing_sub(&self, other: &Self) -> (Self, bool) {
        let (low, borrow) = self.low.overflowing_sub(&other.low);
        let (mut high, mut overflow) = self.high.overflowing_sub(&other.high);

        if borrow {
            let (h, o) = high.overflowing_sub(&H::ONE);
            high = h;
            overflow ^= o;
        }

        (Self { high, low }, overflow)
    }

    #[inline]
    pub fn overflowing_add_half(&self, other: H::Magnitude) -> (Self, bool) {
        let (low, carry) = self.low.overflowing_add(&other);
        if !carry {
            return (Self { high: self.high, low }, false);
        }

        let (high, overflow) = self.high.overflowing_add(&H::ONE);
        (Self { high, low }, overflow)
    }

    #[inline]
    pub fn overflowing_sub_half(&self, other: H::Magnitude) -> (Self, bool) {
        let (low, borrow) = self.low.overflowing_sub(&other);
        if !borrow {
            return (Self { high: self.high, low }, false);
        }

        let (high, overflow) = self.high.overflowing_sub(&H::ONE);
        (Self { high, low }, overflow)
    }

    #[inline]
    pub fn wrapping_add(&self, other: &Self) -> Self {
        self.overflowing_add(other).0
    }

    #[inline]
    pub fn wrapping_sub(&self, other: &Self) -> Self {
        self.overflowing_sub(other).0
    }

    #[inline]
    pub fn wrapping_neg(self) -> Self {
        (!self).overflowing_add(&Self::ONE).0
    }

    /// Negation overflows for the minimum of a signed type and for every
    /// nonzero unsigned value.
    #[inline]
    pub fn overflowing_neg(self) -> (Self, bool) {
        let overflow = if H::IS_SIGNED {
            self == Self::MIN
        } else {
            !self.is_zero()
        };

        (self.wrapping_neg(), overflow)
    }
}

impl<H: Limb> std::ops::Add<DoubleWidth<H>> for DoubleWidth<H> {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self::Output {
        crate::overflow_check! { "add", self.overflowing_add(&other) }
    }
}

impl<H: Limb> std::ops::AddAssign<DoubleWidth<H>> for DoubleWidth<H> {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl<H: Limb> std::ops::Sub<DoubleWidth<H>> for DoubleWidth<H> {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self::Output {
        crate::overflow_check! { "subtract", self.overflowing_sub(&other) }
    }
}

impl<H: Limb> std::ops::SubAssign<DoubleWidth<H>> for DoubleWidth<H> {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl<H: SignedLimb> std::ops::Neg for DoubleWidth<H> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        crate::overflow_check! { "negate", self.overflowing_neg() }
    }
}
