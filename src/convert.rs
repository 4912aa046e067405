use std::fmt;

use crate::error::WideError;
use crate::limb::{Limb, MachineWord};
use crate::DoubleWidth;

/// Read access to an integer's two's-complement bits, in 64-bit chunks,
/// least significant first. The source of every `DoubleWidth` constructor.
pub trait IntegerBits: Copy + fmt::Debug {
    const SIGNED: bool;

    fn chunk_count(&self) -> usize;

    /// Requires `index < self.chunk_count()`.
    fn chunk(&self, index: usize) -> u64;

    /// All ones for negative values, zero otherwise.
    #[inline]
    fn sign_chunk(&self) -> u64 {
        let top = self.chunk(self.chunk_count() - 1);

        if Self::SIGNED && top >> 63 != 0 {
            u64::MAX
        } else {
            0
        }
    }
}

macro_rules! impl_integer_bits {
    ($($t:ty => $signed:literal, $extended:ty);* $(;)?) => {$(
        impl IntegerBits for $t {
            const SIGNED: bool = $signed;

            #[inline]
            fn chunk_count(&self) -> usize {
                1
            }

            #[inline]
            fn chunk(&self, index: usize) -> u64 {
                debug_assert_eq!(index, 0);
                *self as $extended as u64
            }
        }
    )*};
}

impl_integer_bits! {
    u8 => false, u64;
    u16 => false, u64;
    u32 => false, u64;
    u64 => false, u64;
    usize => false, u64;
    i8 => true, i64;
    i16 => true, i64;
    i32 => true, i64;
    i64 => true, i64;
    isize => true, i64;
}

macro_rules! impl_integer_bits_128 {
    ($($t:ty => $signed:literal),*) => {$(
        impl IntegerBits for $t {
            const SIGNED: bool = $signed;

            #[inline]
            fn chunk_count(&self) -> usize {
                2
            }

            #[inline]
            fn chunk(&self, index: usize) -> u64 {
                debug_assert!(index < 2);
                (*self >> (64 * index)) as u64
            }
        }
    )*};
}

impl_integer_bits_128!(u128 => false, i128 => true);

impl<H: Limb> IntegerBits for DoubleWidth<H> {
    const SIGNED: bool = H::IS_SIGNED;

    #[inline]
    fn chunk_count(&self) -> usize {
        (Self::BITS as usize + 63) / 64
    }

    fn chunk(&self, index: usize) -> u64 {
        let word_bits = <H::Word as Limb>::BITS;
        let per_chunk = (64 / word_bits) as usize;

        // Words past the top of a narrow value are sign extension.
        let fill = if self.is_negative() {
            u64::MAX >> (64 - word_bits)
        } else {
            0
        };

        let mut chunk = 0;
        for offset in 0..per_chunk {
            let position = index * per_chunk + offset;
            let word = if position < Self::WORDS {
                self.word(position).to_u64()
            } else {
                fill
            };

            chunk |= word << (offset as u32 * word_bits);
        }

        chunk
    }
}

impl<H: Limb> DoubleWidth<H> {
    /// Truncates `source` to `Self` and reports whether the value survived,
    /// i.e. the kept sign matches the source sign and every discarded bit is
    /// a copy of it.
    fn truncating<T: IntegerBits>(source: T) -> (Self, bool) {
        let sign = source.sign_chunk();
        let chunks = source.chunk_count();

        let word_bits = <H::Word as Limb>::BITS;
        let per_chunk = (64 / word_bits) as usize;

        let mut value = Self::ZERO;
        for position in 0..Self::WORDS {
            let index = position / per_chunk;
            let chunk = if index < chunks {
                source.chunk(index)
            } else {
                sign
            };
            let shift = (position % per_chunk) as u32 * word_bits;

            let word = <H::Word as MachineWord>::truncating_from_u64(chunk >> shift);
            value.set_word(position, word);
        }

        let kept = Self::BITS as usize;
        let mut exact = value.is_negative() == (sign != 0);

        for index in kept / 64..chunks {
            let skip = if index == kept / 64 { (kept % 64) as u32 } else { 0 };
            exact &= source.chunk(index) >> skip == sign >> skip;
        }

        (value, exact)
    }

    /// `source` if it is representable, `None` otherwise.
    pub fn checked_from<T: IntegerBits>(source: T) -> Option<Self> {
        let (value, exact) = Self::truncating(source);
        exact.then_some(value)
    }

    /// `source` clamped to `MIN..=MAX`.
    pub fn saturating_from<T: IntegerBits>(source: T) -> Self {
        match Self::truncating(source) {
            (value, true) => value,
            _ if source.sign_chunk() == 0 => Self::MAX,
            _ => Self::MIN,
        }
    }

    /// The low `BITS` bits of `source`.
    pub fn wrapping_from<T: IntegerBits>(source: T) -> Self {
        Self::truncating(source).0
    }

    pub fn try_new<T: IntegerBits>(source: T) -> Result<Self, WideError> {
        Self::checked_from(source).ok_or_else(|| WideError::OutOfRange {
            target: Self::describe(),
            value: format!("{source:?}"),
        })
    }

    /// Exact construction. Panics if `source` is not representable.
    pub fn new<T: IntegerBits>(source: T) -> Self {
        match Self::try_new(source) {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }

    /// Sign-extends a single half into a full value.
    pub fn from_digit(digit: H) -> Self {
        Self {
            high: H::repeating(digit.is_negative()),
            low: digit.bit_pattern(),
        }
    }

    pub fn try_from_words(words: &[H::Word]) -> Result<Self, WideError> {
        if words.len() != Self::WORDS {
            return Err(WideError::WordCount {
                expected: Self::WORDS,
                actual: words.len(),
            });
        }

        let mut value = Self::ZERO;
        for (index, &word) in words.iter().enumerate() {
            value.set_word(index, word);
        }

        Ok(value)
    }

    /// Builds a value from exactly `WORDS` words, least significant first.
    pub fn from_words(words: &[H::Word]) -> Self {
        match Self::try_from_words(words) {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }

    pub fn words(&self) -> Vec<H::Word> {
        (0..Self::WORDS).map(|index| self.word(index)).collect()
    }

    /// Type name as used in messages, e.g. `U256` or `I128`.
    pub fn describe() -> String {
        let prefix = if H::IS_SIGNED { "I" } else { "U" };
        format!("{prefix}{}", Self::BITS)
    }
}
