//! Capabilities a fixed-width integer needs to serve as one half of a
//! [`DoubleWidth`], implemented for the native integers and, recursively,
//! for `DoubleWidth` itself.

use std::fmt;
use std::hash::Hash;
use std::ops::{BitAnd, BitOr, BitXor, Not};

use num_traits::ops::overflowing::{OverflowingAdd, OverflowingMul, OverflowingSub};
use num_traits::{Bounded, One, Zero};

use crate::tuple::Wide2;
use crate::DoubleWidth;

pub trait Limb:
    Copy
    + Default
    + Eq
    + Ord
    + Hash
    + fmt::Debug
    + Not<Output = Self>
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + Zero
    + One
    + Bounded
    + OverflowingAdd
    + OverflowingSub
    + OverflowingMul
    + 'static
{
    /// Unsigned counterpart with the same bit width.
    type Magnitude: UnsignedLimb + Limb<Word = Self::Word>;

    /// Native unsigned integer of the word view.
    type Word: MachineWord;

    const BITS: u32;
    const IS_SIGNED: bool;

    /// Number of `Word`s in the word view.
    const WORDS: usize;

    const ZERO: Self;
    const ONE: Self;
    const MIN: Self;
    const MAX: Self;

    fn from_bit_pattern(bits: Self::Magnitude) -> Self;
    fn bit_pattern(self) -> Self::Magnitude;

    fn most_significant_bit(self) -> bool;
    fn least_significant_bit(self) -> bool;

    fn count_ones(self) -> u32;
    fn leading_zeros(self) -> u32;
    fn trailing_zeros(self) -> u32;

    fn wrapping_neg(self) -> Self;

    /// Complete product as a `(high, low)` pair. Cannot overflow.
    fn multiplied_full_width(self, rhs: Self) -> Wide2<Self>;

    /// Word at `index` of the word view, least significant first.
    fn word(&self, index: usize) -> Self::Word;
    fn set_word(&mut self, index: usize, word: Self::Word);

    #[inline]
    fn is_negative(self) -> bool {
        Self::IS_SIGNED && self.most_significant_bit()
    }

    #[inline]
    fn repeating(bit: bool) -> Self {
        if bit {
            !Self::ZERO
        } else {
            Self::ZERO
        }
    }

    #[inline]
    fn from_bit(bit: bool) -> Self {
        if bit {
            Self::ONE
        } else {
            Self::ZERO
        }
    }

    #[inline]
    fn magnitude(self) -> Self::Magnitude {
        let bits = self.bit_pattern();

        if self.is_negative() {
            bits.wrapping_neg()
        } else {
            bits
        }
    }
}

pub trait UnsignedLimb: Limb<Magnitude = Self> {
    /// Divides `carry * 2^BITS + self` by `divisor`, returning the quotient
    /// and the remainder. Requires `carry < divisor`.
    fn carrying_div_rem_word(
        self,
        carry: Self::Word,
        divisor: Self::Word,
    ) -> (Self, Self::Word);
}

pub trait SignedLimb: Limb {}

/// A native unsigned integer, the leaf of every composition.
pub trait MachineWord: UnsignedLimb + Limb<Word = Self> {
    /// Divides the two-word `dividend` by `self`, returning the quotient and
    /// the remainder. Requires `dividend.high < self`.
    fn divided_full_width(self, dividend: Wide2<Self>) -> (Self, Self);

    fn to_u64(self) -> u64;
    fn truncating_from_u64(chunk: u64) -> Self;
}

macro_rules! impl_unsigned_limb {
    ($($t:ty => $wide:ty),* $(,)?) => {$(
        impl Limb for $t {
            type Magnitude = $t;
            type Word = $t;

            const BITS: u32 = <$t>::BITS;
            const IS_SIGNED: bool = false;
            const WORDS: usize = 1;

            const ZERO: Self = 0;
            const ONE: Self = 1;
            const MIN: Self = <$t>::MIN;
            const MAX: Self = <$t>::MAX;

            #[inline]
            fn from_bit_pattern(bits: $t) -> Self {
                bits
            }

            #[inline]
            fn bit_pattern(self) -> $t {
                self
            }

            #[inline]
            fn most_significant_bit(self) -> bool {
                self >> (<$t>::BITS - 1) != 0
            }

            #[inline]
            fn least_significant_bit(self) -> bool {
                self & 1 != 0
            }

            #[inline]
            fn count_ones(self) -> u32 {
                <$t>::count_ones(self)
            }

            #[inline]
            fn leading_zeros(self) -> u32 {
                <$t>::leading_zeros(self)
            }

            #[inline]
            fn trailing_zeros(self) -> u32 {
                <$t>::trailing_zeros(self)
            }

            #[inline]
            fn wrapping_neg(self) -> Self {
                <$t>::wrapping_neg(self)
            }

            #[inline]
            fn multiplied_full_width(self, rhs: Self) -> Wide2<Self> {
                let product = self as $wide * rhs as $wide;

                Wide2 {
                    high: (product >> <$t>::BITS) as $t,
                    low: product as $t,
                }
            }

            #[inline]
            fn word(&self, index: usize) -> $t {
                assert!(index == 0, "word index out of bounds");
                *self
            }

            #[inline]
            fn set_word(&mut self, index: usize, word: $t) {
                assert!(index == 0, "word index out of bounds");
                *self = word;
            }
        }

        impl UnsignedLimb for $t {
            #[inline]
            fn carrying_div_rem_word(self, carry: $t, divisor: $t) -> ($t, $t) {
                divisor.divided_full_width(Wide2 { high: carry, low: self })
            }
        }

        impl MachineWord for $t {
            #[inline]
            fn divided_full_width(self, dividend: Wide2<Self>) -> (Self, Self) {
                debug_assert!(dividend.high < self, "quotient does not fit in a word");

                let numerator =
                    (dividend.high as $wide) << <$t>::BITS | dividend.low as $wide;
                let divisor = self as $wide;

                ((numerator / divisor) as $t, (numerator % divisor) as $t)
            }

            #[inline]
            fn to_u64(self) -> u64 {
                self as u64
            }

            #[inline]
            fn truncating_from_u64(chunk: u64) -> Self {
                chunk as $t
            }
        }
    )*};
}

macro_rules! impl_signed_limb {
    ($($t:ty => $u:ty, $wide:ty);* $(;)?) => {$(
        impl Limb for $t {
            type Magnitude = $u;
            type Word = $u;

            const BITS: u32 = <$t>::BITS;
            const IS_SIGNED: bool = true;
            const WORDS: usize = 1;

            const ZERO: Self = 0;
            const ONE: Self = 1;
            const MIN: Self = <$t>::MIN;
            const MAX: Self = <$t>::MAX;

            #[inline]
            fn from_bit_pattern(bits: $u) -> Self {
                bits as $t
            }

            #[inline]
            fn bit_pattern(self) -> $u {
                self as $u
            }

            #[inline]
            fn most_significant_bit(self) -> bool {
                self < 0
            }

            #[inline]
            fn least_significant_bit(self) -> bool {
                self & 1 != 0
            }

            #[inline]
            fn count_ones(self) -> u32 {
                <$t>::count_ones(self)
            }

            #[inline]
            fn leading_zeros(self) -> u32 {
                <$t>::leading_zeros(self)
            }

            #[inline]
            fn trailing_zeros(self) -> u32 {
                <$t>::trailing_zeros(self)
            }

            #[inline]
            fn wrapping_neg(self) -> Self {
                <$t>::wrapping_neg(self)
            }

            #[inline]
            fn multiplied_full_width(self, rhs: Self) -> Wide2<Self> {
                // The product of two N-bit signed values always fits in 2N bits.
                let product = self as $wide * rhs as $wide;

                Wide2 {
                    high: (product >> <$t>::BITS) as $t,
                    low: product as $u,
                }
            }

            #[inline]
            fn word(&self, index: usize) -> $u {
                assert!(index == 0, "word index out of bounds");
                *self as $u
            }

            #[inline]
            fn set_word(&mut self, index: usize, word: $u) {
                assert!(index == 0, "word index out of bounds");
                *self = word as $t;
            }
        }

        impl SignedLimb for $t {}
    )*};
}

impl_unsigned_limb! { u8 => u16, u16 => u32, u32 => u64, u64 => u128 }

impl_signed_limb! {
    i8 => u8, i16;
    i16 => u16, i32;
    i32 => u32, i64;
    i64 => u64, i128;
}

impl<H: Limb> Limb for DoubleWidth<H> {
    type Magnitude = DoubleWidth<H::Magnitude>;
    type Word = H::Word;

    const BITS: u32 = 2 * H::BITS;
    const IS_SIGNED: bool = H::IS_SIGNED;
    const WORDS: usize = 2 * H::WORDS;

    const ZERO: Self = DoubleWidth {
        high: H::ZERO,
        low: <H::Magnitude as Limb>::ZERO,
    };
    const ONE: Self = DoubleWidth {
        high: H::ZERO,
        low: <H::Magnitude as Limb>::ONE,
    };
    const MIN: Self = DoubleWidth {
        high: H::MIN,
        low: <H::Magnitude as Limb>::MIN,
    };
    const MAX: Self = DoubleWidth {
        high: H::MAX,
        low: <H::Magnitude as Limb>::MAX,
    };

    #[inline]
    fn from_bit_pattern(bits: DoubleWidth<H::Magnitude>) -> Self {
        DoubleWidth {
            high: H::from_bit_pattern(bits.high),
            low: bits.low,
        }
    }

    #[inline]
    fn bit_pattern(self) -> DoubleWidth<H::Magnitude> {
        DoubleWidth {
            high: self.high.bit_pattern(),
            low: self.low,
        }
    }

    #[inline]
    fn most_significant_bit(self) -> bool {
        self.high.most_significant_bit()
    }

    #[inline]
    fn least_significant_bit(self) -> bool {
        self.low.least_significant_bit()
    }

    #[inline]
    fn count_ones(self) -> u32 {
        Self::count_ones(self)
    }

    #[inline]
    fn leading_zeros(self) -> u32 {
        Self::leading_zeros(self)
    }

    #[inline]
    fn trailing_zeros(self) -> u32 {
        Self::trailing_zeros(self)
    }

    #[inline]
    fn wrapping_neg(self) -> Self {
        Self::wrapping_neg(self)
    }

    #[inline]
    fn multiplied_full_width(self, rhs: Self) -> Wide2<Self> {
        Self::multiplied_full_width(self, rhs)
    }

    #[inline]
    fn word(&self, index: usize) -> H::Word {
        let half = <H::Magnitude as Limb>::WORDS;

        if index < half {
            self.low.word(index)
        } else {
            self.high.word(index - half)
        }
    }

    #[inline]
    fn set_word(&mut self, index: usize, word: H::Word) {
        let half = <H::Magnitude as Limb>::WORDS;

        if index < half {
            self.low.set_word(index, word);
        } else {
            self.high.set_word(index - half, word);
        }
    }
}

impl<H: UnsignedLimb> UnsignedLimb for DoubleWidth<H> {
    #[inline]
    fn carrying_div_rem_word(self, carry: H::Word, divisor: H::Word) -> (Self, H::Word) {
        let (high, carry) = self.high.carrying_div_rem_word(carry, divisor);
        let (low, carry) = self.low.carrying_div_rem_word(carry, divisor);

        (DoubleWidth { high, low }, carry)
    }
}

impl<H: SignedLimb> SignedLimb for DoubleWidth<H> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{i256, u256, I128, I1024, I256, U1024, U128, U256};

    #[test]
    fn native_full_width_products() {
        let p = u64::MAX.multiplied_full_width(u64::MAX);
        assert_eq!(p, Wide2 { high: u64::MAX - 1, low: 1 });

        let p = (-1_i64).multiplied_full_width(i64::MAX);
        assert_eq!(p, Wide2 { high: -1, low: (i64::MIN as u64) + 1 });

        let p = i8::MIN.multiplied_full_width(i8::MIN);
        assert_eq!(p, Wide2 { high: 0x40, low: 0 });
    }

    #[test]
    fn native_full_width_division() {
        let (q, r) = 10_u8.divided_full_width(Wide2 { high: 9, low: 255 });
        assert_eq!((q, r), (255, 9));

        let dividend = Wide2 { high: u64::MAX - 1, low: u64::MAX };
        let (q, r) = u64::MAX.divided_full_width(dividend);
        assert_eq!((q, r), (u64::MAX, u64::MAX - 1));
    }

    #[test]
    fn magnitudes() {
        assert_eq!(i8::MIN.magnitude(), 128);
        assert_eq!((-5_i32).magnitude(), 5);
        assert_eq!(7_u16.magnitude(), 7);

        assert_eq!(I128::MIN.magnitude(), U128::from_words(&[0, 1 << 63]));
        assert_eq!((-I128::ONE).magnitude(), U128::ONE);
    }

    #[test]
    fn repeating_bits() {
        assert_eq!(<i16 as Limb>::repeating(true), -1);
        assert_eq!(<u16 as Limb>::repeating(true), u16::MAX);
        assert_eq!(U128::repeating(true), U128::MAX);
        assert_eq!(I128::repeating(false), I128::ZERO);
        assert_eq!(I128::from_bit(true), I128::ONE);
    }

    #[test]
    fn composed_word_view() {
        let mut n = I256::ZERO;
        n.set_word(3, 1 << 63);
        n.set_word(0, 9);

        assert_eq!(n, i256([9, 0, 0, 1 << 63]));
        assert_eq!(n.word(3), 1 << 63);
        assert_eq!(n.word(0), 9);
        assert!(n.is_negative());
        assert_eq!(<I256 as Limb>::WORDS, 4);
    }

    #[test]
    fn end_bits() {
        assert!(!U256::ZERO.least_significant_bit());
        assert!(U256::ONE.least_significant_bit());
        assert!(!u256([2, 0, 0, 1]).least_significant_bit());
        assert!(!u256([3, 0, 0, 0]).most_significant_bit());

        assert!((-I256::ONE).least_significant_bit());
        assert!(i256([1, 0, 0, 1 << 63]).least_significant_bit());
        assert!(!I256::MIN.least_significant_bit());
        assert!(I256::MIN.most_significant_bit());
        assert!(I256::MAX.least_significant_bit());
        assert!(!I256::MAX.most_significant_bit());

        assert!(U1024::MAX.least_significant_bit());
        assert!(U1024::MAX.most_significant_bit());
        assert!(!I1024::MIN.least_significant_bit());
    }

    #[test]
    #[should_panic(expected = "word index out of bounds")]
    fn word_view_is_bounds_checked() {
        let _ = U128::ZERO.word(2);
    }
}
