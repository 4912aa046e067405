//! Bit accounting for `DoubleWidth` values and for little-endian limb
//! sequences (least significant limb first).

use num_traits::Zero;

use crate::limb::Limb;
use crate::DoubleWidth;

impl<H: Limb> DoubleWidth<H> {
    #[inline]
    pub fn count_ones(self) -> u32 {
        self.high.count_ones() + self.low.count_ones()
    }

    #[inline]
    pub fn count_zeros(self) -> u32 {
        Self::BITS - self.count_ones()
    }

    #[inline]
    pub fn leading_zeros(self) -> u32 {
        if self.high.is_zero() {
            H::BITS + self.low.leading_zeros()
        } else {
            self.high.leading_zeros()
        }
    }

    #[inline]
    pub fn trailing_zeros(self) -> u32 {
        if self.low.is_zero() {
            <H::Magnitude as Limb>::BITS + self.high.trailing_zeros()
        } else {
            self.low.trailing_zeros()
        }
    }

    #[inline]
    pub fn leading_ones(self) -> u32 {
        (!self).leading_zeros()
    }

    #[inline]
    pub fn trailing_ones(self) -> u32 {
        (!self).trailing_zeros()
    }

    pub fn is_power_of_two(self) -> bool {
        !self.is_negative() && self.count_ones() == 1
    }
}

pub fn nonzero_bit_count<T: Limb>(limbs: &[T]) -> usize {
    limbs.iter().map(|limb| limb.count_ones() as usize).sum()
}

/// Same as `nonzero_bit_count(limbs) == comparand`, but stops scanning once
/// the count exceeds `comparand`.
pub fn nonzero_bit_count_equals<T: Limb>(limbs: &[T], comparand: usize) -> bool {
    let mut count = 0;

    for limb in limbs {
        if count > comparand {
            break;
        }
        count += limb.count_ones() as usize;
    }

    count == comparand
}

/// Number of set bits in the two's complement of the sequence (its
/// negation modulo `2^(len * BITS)`), computed without materialising it.
pub fn nonzero_bit_count_of_twos_complement<T: Limb>(limbs: &[T]) -> usize {
    let Some(index) = limbs.iter().position(|limb| !limb.is_zero()) else {
        return 0;
    };

    let ones: usize = limbs[index..]
        .iter()
        .map(|limb| (!*limb).count_ones() as usize)
        .sum();

    // Flipping every bit of the lowest nonzero limb and adding one clears
    // its trailing zeros back and sets the bit just above them.
    ones + 1 - limbs[index].trailing_zeros() as usize
}

pub fn leading_zero_count<T: Limb>(limbs: &[T]) -> usize {
    let bits = T::BITS as usize;

    match limbs.iter().rposition(|limb| !limb.is_zero()) {
        Some(index) => {
            (limbs.len() - 1 - index) * bits + limbs[index].leading_zeros() as usize
        }
        None => limbs.len() * bits,
    }
}

pub fn trailing_zero_count<T: Limb>(limbs: &[T]) -> usize {
    let bits = T::BITS as usize;

    match limbs.iter().position(|limb| !limb.is_zero()) {
        Some(index) => index * bits + limbs[index].trailing_zeros() as usize,
        None => limbs.len() * bits,
    }
}

/// Most significant bit of the sequence's two's complement, or `None` for an
/// empty sequence.
pub fn most_significant_bit_of_twos_complement<T: Limb>(limbs: &[T]) -> Option<bool> {
    let last = *limbs.last()?;

    let bit = match limbs.iter().position(|limb| !limb.is_zero()) {
        None => false,
        Some(index) if index == limbs.len() - 1 => {
            last.wrapping_neg().most_significant_bit()
        }
        Some(_) => (!last).most_significant_bit(),
    };

    Some(bit)
}
