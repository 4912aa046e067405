use crate::limb::{Limb, UnsignedLimb};
use crate::tuple::{self, Wide2};
use crate::DoubleWidth;

impl<H: UnsignedLimb> DoubleWidth<H> {
    /// Schoolbook product of the four half-width cross terms.
    fn magnitude_multiplied_full_width(self, rhs: Self) -> Wide2<Self> {
        let m0 = self.low.multiplied_full_width(rhs.low);
        let m1 = self.low.multiplied_full_width(rhs.high);
        let m2 = self.high.multiplied_full_width(rhs.low);
        let m3 = self.high.multiplied_full_width(rhs.high);

        let mut s0 = m0.high;
        let c0 = tuple::increment12(&mut s0, (m1.low, m2.low));
        let mut s1 = m1.high;
        let c1 = tuple::increment12(&mut s1, (m2.high, m3.low));

        let low = Self {
            high: s0,
            low: m0.low,
        };

        // The complete product fits in four halves, so neither carry can
        // leave the top half.
        let (mut high, _) = Self {
            high: m3.high,
            low: s1,
        }
        .overflowing_add_half(c0);
        high.high = high.high.overflowing_add(&c1).0;

        Wide2 { high, low }
    }

    fn magnitude_overflowing_mul(self, rhs: Self) -> (Self, bool) {
        let ax = self.low.multiplied_full_width(rhs.low);
        let (ay, oy) = self.low.overflowing_mul(&rhs.high);
        let (bx, ox) = self.high.overflowing_mul(&rhs.low);

        let complete = !self.high.is_zero() && !rhs.high.is_zero();
        let (high, o0) = ax.high.overflowing_add(&ay);
        let (high, o1) = high.overflowing_add(&bx);

        let product = Self { high, low: ax.low };
        (product, complete || oy || ox || o0 || o1)
    }

    fn magnitude_wrapping_mul(self, rhs: Self) -> Self {
        let ax = self.low.multiplied_full_width(rhs.low);
        let (ay, _) = self.low.overflowing_mul(&rhs.high);
        let (bx, _) = self.high.overflowing_mul(&rhs.low);

        let (high, _) = ax.high.overflowing_add(&ay);
        let (high, _) = high.overflowing_add(&bx);

        Self { high, low: ax.low }
    }

    /// Product with a half-width factor, and whether it overflowed.
    pub fn overflowing_mul_half(self, rhs: H) -> (Self, bool) {
        let product = tuple::multiplying21(
            Wide2 {
                high: self.high,
                low: self.low,
            },
            rhs,
        );

        let truncated = Self {
            high: product.mid,
            low: product.low,
        };
        (truncated, !product.high.is_zero())
    }
}

impl<H: Limb> DoubleWidth<H> {
    /// Complete product as a `(high, low)` pair. Signed operands are
    /// multiplied by magnitude and the result negated when the signs differ.
    pub fn multiplied_full_width(self, rhs: Self) -> Wide2<Self> {
        let minus = self.is_negative() != rhs.is_negative();
        let product = self
            .magnitude()
            .magnitude_multiplied_full_width(rhs.magnitude());

        let product = if minus {
            product.wrapping_neg()
        } else {
            product
        };

        Wide2 {
            high: Self::from_bit_pattern(product.high),
            low: product.low,
        }
    }

    /// Replaces `self` with the low half of `self * rhs` and returns the
    /// high half.
    pub fn multiply_full_width(&mut self, rhs: Self) -> Self {
        let product = self.multiplied_full_width(rhs);
        *self = Self::from_bit_pattern(product.low);

        product.high
    }

    pub fn overflowing_mul(&self, other: &Self) -> (Self, bool) {
        let minus = self.is_negative() != other.is_negative();
        let (magnitude, overflow) = self
            .magnitude()
            .magnitude_overflowing_mul(other.magnitude());

        let product = Self::from_bit_pattern(if minus {
            magnitude.wrapping_neg()
        } else {
            magnitude
        });

        // The magnitude fit but the sign did not.
        let flipped = if minus {
            !product.is_negative() && !product.is_zero()
        } else {
            product.is_negative()
        };

        (product, overflow || flipped)
    }

    /// Two's-complement wrapping makes the signed product the unsigned
    /// product of the bit patterns.
    pub fn wrapping_mul(&self, other: &Self) -> Self {
        Self::from_bit_pattern(
            self.bit_pattern()
                .magnitude_wrapping_mul(other.bit_pattern()),
        )
    }

    pub fn overflowing_pow(self, mut exp: u32) -> (Self, bool) {
        let mut base = self;
        let mut result = Self::ONE;
        let mut overflow = false;

        while exp != 0 {
            if exp & 1 != 0 {
                let (r, o) = result.overflowing_mul(&base);
                result = r;
                overflow |= o;
            }

            exp >>= 1;

            // Squaring past the last set bit could report a spurious overflow.
            if exp != 0 {
                let (b, o) = base.overflowing_mul(&base);
                base = b;
                overflow |= o;
            }
        }

        (result, overflow)
    }

    #[inline(never)]
    pub fn pow(self, exp: u32) -> Self {
        crate::overflow_check! { "multiply", self.overflowing_pow(exp) }
    }
}

impl<H: Limb> std::ops::Mul<DoubleWidth<H>> for DoubleWidth<H> {
    type Output = Self;

    #[inline]
    fn mul(self, other: Self) -> Self::Output {
        // Avoid computing the overflow flag if nobody checks it.
        if crate::overflow::CHECKING_OVERFLOW {
            crate::overflow_check! { "multiply", self.overflowing_mul(&other) }
        } else {
            self.wrapping_mul(&other)
        }
    }
}

impl<H: Limb> std::ops::MulAssign<DoubleWidth<H>> for DoubleWidth<H> {
    #[inline]
    fn mul_assign(&mut self, other: Self) {
        *self = *self * other;
    }
}
