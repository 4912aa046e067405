//! Division of a little-endian word sequence (index 0 least significant) by
//! a single word.
//!
//! A zero divisor is not fatal here: every form reports `overflow = true`
//! and yields the dividend's first word (or zero) as the partial value,
//! leaving the dividend untouched.

use num_traits::Zero;

use crate::limb::{Limb, MachineWord, UnsignedLimb};
use crate::tuple::Wide2;
use crate::DoubleWidth;

#[inline]
fn zero_divisor<W: MachineWord>(dividend: &[W]) -> (W, bool) {
    (dividend.first().copied().unwrap_or(W::ZERO), true)
}

/// Remainder of `dividend / divisor`, and the overflow flag.
pub fn overflowing_rem<W: MachineWord>(dividend: &[W], divisor: W) -> (W, bool) {
    if divisor.is_zero() {
        return zero_divisor(dividend);
    }

    let remainder = dividend.iter().rev().fold(W::ZERO, |remainder, &word| {
        divisor
            .divided_full_width(Wide2 {
                high: remainder,
                low: word,
            })
            .1
    });

    (remainder, false)
}

/// Replaces every word of `dividend` with the matching quotient word and
/// returns the remainder, and the overflow flag.
pub fn overflowing_div_rem_in_place<W: MachineWord>(
    dividend: &mut [W],
    divisor: W,
) -> (W, bool) {
    if divisor.is_zero() {
        return zero_divisor(dividend);
    }

    let mut remainder = W::ZERO;
    for word in dividend.iter_mut().rev() {
        (*word, remainder) = divisor.divided_full_width(Wide2 {
            high: remainder,
            low: *word,
        });
    }

    (remainder, false)
}

/// Fresh quotient, remainder, and the overflow flag. On a zero divisor the
/// quotient is a copy of the dividend.
pub fn overflowing_div_rem<W: MachineWord>(
    dividend: &[W],
    divisor: W,
) -> (Vec<W>, W, bool) {
    let mut quotient = dividend.to_vec();
    let (remainder, overflow) = overflowing_div_rem_in_place(&mut quotient, divisor);

    (quotient, remainder, overflow)
}

impl<H: UnsignedLimb> DoubleWidth<H> {
    /// Quotient, remainder and overflow flag of `self / divisor`. A zero
    /// divisor follows the lenient slice contract: `self` comes back
    /// unchanged with its lowest word as the remainder.
    pub fn overflowing_div_rem_word(self, divisor: H::Word) -> (Self, H::Word, bool) {
        if divisor.is_zero() {
            return (self, self.word(0), true);
        }

        let zero = <H::Word as Limb>::ZERO;
        let (quotient, remainder) = self.carrying_div_rem_word(zero, divisor);
        (quotient, remainder, false)
    }
}

impl<H: UnsignedLimb> std::ops::Div<H::Word> for DoubleWidth<H> {
    type Output = Self;

    #[inline]
    fn div(self, divisor: H::Word) -> Self::Output {
        if divisor.is_zero() {
            panic!("attempt to divide by zero");
        }

        self.overflowing_div_rem_word(divisor).0
    }
}

impl<H: UnsignedLimb> std::ops::Rem<H::Word> for DoubleWidth<H> {
    type Output = H::Word;

    #[inline]
    fn rem(self, divisor: H::Word) -> H::Word {
        if divisor.is_zero() {
            panic!("attempt to calculate the remainder with a divisor of zero");
        }

        self.overflowing_div_rem_word(divisor).1
    }
}
