mod addsub;
pub mod bits;
mod convert;
pub mod div;
mod error;
mod format;
pub mod limb;
mod misc;
mod mul;
pub mod overflow;
pub mod tuple;

pub use convert::IntegerBits;
pub use error::WideError;
pub use limb::{Limb, MachineWord, SignedLimb, UnsignedLimb};
pub use tuple::{Wide2, Wide3};

/// An integer twice as wide as its halves: `high * 2^H::BITS + low`.
///
/// Only the high half carries the sign; the low half is always the unsigned
/// counterpart of `H`. Since `DoubleWidth<H>` is itself a [`Limb`], widths
/// compose recursively down to a native machine word.
#[derive(Eq, PartialEq, Hash, Copy, Clone, Default)]
pub struct DoubleWidth<H: Limb> {
    pub low: H::Magnitude,
    pub high: H,
}

pub type U128 = DoubleWidth<u64>;
pub type I128 = DoubleWidth<i64>;
pub type U256 = DoubleWidth<U128>;
pub type I256 = DoubleWidth<I128>;
pub type U512 = DoubleWidth<U256>;
pub type I512 = DoubleWidth<I256>;
pub type U1024 = DoubleWidth<U512>;
pub type I1024 = DoubleWidth<I512>;

/// Builds a [`U256`] from its words, least significant first.
pub fn u256(words: [u64; 4]) -> U256 {
    U256::from_words(&words)
}

/// Builds an [`I256`] from its two's-complement words, least significant first.
pub fn i256(words: [u64; 4]) -> I256 {
    I256::from_words(&words)
}

#[cfg(test)]
impl<H> Arbitrary for DoubleWidth<H>
where
    H: Limb + Arbitrary,
    H::Magnitude: Arbitrary,
{
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        Self {
            high: H::arbitrary(g),
            low: <H::Magnitude as Arbitrary>::arbitrary(g),
        }
    }
}

#[cfg(test)]
use quickcheck::Arbitrary;

#[cfg(test)]
pub fn rng() -> rand_pcg::Pcg64 {
    let now = std::time::Instant::now();
    let seed = now.elapsed().as_nanos();

    rand_pcg::Pcg64::new(0xcafef00dd15ea5e5 ^ seed, 0xa02bdbf7bb3c0a7ac28fa16a64abf96)
}
