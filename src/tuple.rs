//! Two- and three-limb tuples used as intermediate state by the wide
//! multiplication and division algorithms. Values are read most significant
//! limb first; only the most significant limb carries the sign.

use std::cmp::Ordering;

use crate::limb::{Limb, UnsignedLimb};

/// `high * 2^BITS + low`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Wide2<T: Limb> {
    pub high: T,
    pub low: T::Magnitude,
}

/// `high * 2^(2 * BITS) + mid * 2^BITS + low`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Wide3<T: Limb> {
    pub high: T,
    pub mid: T::Magnitude,
    pub low: T::Magnitude,
}

impl<T: UnsignedLimb> Wide2<T> {
    /// Two's-complement negation modulo `2^(2 * BITS)`.
    #[inline]
    pub fn wrapping_neg(self) -> Self {
        let (low, carry) = (!self.low).overflowing_add(&T::ONE);
        let high = if carry {
            (!self.high).overflowing_add(&T::ONE).0
        } else {
            !self.high
        };

        Wide2 { high, low }
    }
}

/// Compares two three-limb values, most significant limb first.
#[inline]
pub fn compare33<T: Limb>(lhs: Wide3<T>, rhs: Wide3<T>) -> Ordering {
    lhs.high
        .cmp(&rhs.high)
        .then_with(|| lhs.mid.cmp(&rhs.mid))
        .then_with(|| lhs.low.cmp(&rhs.low))
}

/// Adds both limbs of `rhs` to `lhs` in place, wrapping, and returns how many
/// times the sum wrapped (0, 1 or 2).
#[inline]
pub fn increment12<T: UnsignedLimb>(lhs: &mut T, rhs: (T, T)) -> T {
    let (sum, x) = lhs.overflowing_add(&rhs.0);
    let (sum, y) = sum.overflowing_add(&rhs.1);
    *lhs = sum;

    T::from_bit(x).overflowing_add(&T::from_bit(y)).0
}

/// Subtracts a two-limb value from a three-limb value in place, modulo
/// `2^(3 * BITS)`. Returns `true` if the subtraction borrowed past the top.
#[inline]
pub fn decrement32<T: UnsignedLimb>(lhs: &mut Wide3<T>, rhs: Wide2<T>) -> bool {
    let (low, a) = lhs.low.overflowing_sub(&rhs.low);
    let (mut mid, b) = lhs.mid.overflowing_sub(&rhs.high);
    let mut x = false;
    if a {
        (mid, x) = mid.overflowing_sub(&T::ONE);
    }

    let mut high = lhs.high;
    let mut y = false;
    if b || x {
        (high, y) = high.overflowing_sub(&T::ONE);
    }

    *lhs = Wide3 { high, mid, low };
    y
}

/// Subtracts a three-limb value from another in place, modulo
/// `2^(3 * BITS)`. Returns `true` if the subtraction borrowed past the top.
#[inline]
pub fn decrement33<T: UnsignedLimb>(lhs: &mut Wide3<T>, rhs: Wide3<T>) -> bool {
    let (low, a) = lhs.low.overflowing_sub(&rhs.low);
    let (mut mid, b) = lhs.mid.overflowing_sub(&rhs.mid);
    let mut x = false;
    if a {
        (mid, x) = mid.overflowing_sub(&T::ONE);
    }

    let (mut high, c) = lhs.high.overflowing_sub(&rhs.high);
    let mut y = false;
    if b || x {
        (high, y) = high.overflowing_sub(&T::ONE);
    }

    *lhs = Wide3 { high, mid, low };
    c || y
}

/// Complete product of a two-limb value and a limb.
#[inline]
pub fn multiplying21<T: UnsignedLimb>(lhs: Wide2<T>, rhs: T) -> Wide3<T> {
    let a = lhs.low.multiplied_full_width(rhs);
    let b = lhs.high.multiplied_full_width(rhs);

    let (mid, x) = b.low.overflowing_add(&a.high);
    let high = if x {
        b.high.overflowing_add(&T::ONE).0
    } else {
        b.high
    };

    Wide3 {
        high,
        mid,
        low: a.low,
    }
}
