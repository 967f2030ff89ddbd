//! # Conversion Utilities
//!
//! Conversion between [`RatioFloat`] and the native floating-point type it
//! mirrors: decomposition of a native value into normalized
//! numerator/denominator/exponent form, exact reconstruction, and the
//! self-consistency check used for hand-authored literals.
//!
//! ## Encoding
//!
//! A decomposed value stores `mantissa_length` fractional bits in the
//! denominator and tracks scale in a biased exponent, exactly like the
//! native encoding it generalizes:
//!
//! ```text
//! value = numerator / denominator * 2^(exponent - bias)
//! bias  = MAX_EXP - 1
//! ```
//!
//! The significand `numerator / denominator` of a decomposed value lies in
//! `[1, 2]`: normalization doubles values below `1` and halves values above
//! `2`, so exactly `2.0` is kept unscaled. Hand-authored literals are not
//! normalized at all and may put any quotient at any exponent.
//!
//! ## Examples
//!
//! ```rust
//! use ratiofloat::DoubleRatioFloat;
//!
//! let x = DoubleRatioFloat::from_float(2.5);
//! assert_eq!(x.to_float(), 2.5);
//! assert!(x.validate(2.5));
//!
//! // the implicit-conversion surface
//! let y: f64 = DoubleRatioFloat::from(0.1).into();
//! assert_eq!(y, 0.1);
//! ```

use crate::limits::{Float, SignedInt, UnsignedInt};
use crate::ratiofloat::RatioFloat;

impl<N: SignedInt, D: UnsignedInt, E: SignedInt, F: Float> RatioFloat<N, D, E, F> {
    /// Decomposes a native float into normalized form.
    ///
    /// The denominator reserves `mantissa_length` fractional bits, the sign
    /// is captured up front, the absolute value is scaled into `[1, 2]` one
    /// power of two at a time while the exponent compensates, and the
    /// numerator is the rounded product of the scaled value and the
    /// denominator, negated again if the input was negative.
    ///
    /// Zero (of either sign) maps to a zero numerator at the bias. The input
    /// must be finite; infinities and NaN have no normalized form.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ratiofloat::{DoubleRatioFloat, SingleRatioFloat};
    ///
    /// let x = DoubleRatioFloat::from_float(std::f64::consts::PI);
    /// assert_eq!(x.to_float(), std::f64::consts::PI);
    ///
    /// let y = SingleRatioFloat::from_float(-0.375f32);
    /// assert_eq!(y.to_float(), -0.375f32);
    /// ```
    pub fn from_float(value: F) -> Self {
        const { Self::LAYOUT_CHECK };

        let denominator: u128 = 1 << Self::MANTISSA_LENGTH;
        let mut exponent = F::MAX_EXP as i128 - 1;

        let negative = value < F::ZERO;
        let mut value = if negative { -value } else { value };

        if value == F::ZERO {
            return Self::new(
                N::from_i128(0),
                D::from_u128(denominator),
                E::from_i128(exponent),
            );
        }

        while value < F::ONE {
            exponent -= 1;
            value = value * F::TWO;
        }
        while value > F::TWO {
            exponent += 1;
            value = value / F::TWO;
        }

        let mut numerator = (value * F::from_u128(denominator)).round().to_i128();
        if negative {
            numerator = -numerator;
        }
        Self::new(
            N::from_i128(numerator),
            D::from_u128(denominator),
            E::from_i128(exponent),
        )
    }

    /// Reconstructs the native value.
    ///
    /// Computes `numerator / denominator`, then applies the power-of-two
    /// scale one step per exponent unit: a doubling for every unit at or
    /// above `MAX_EXP`, a halving for every unit below the bias. An exponent
    /// equal to the bias leaves the quotient untouched.
    ///
    /// Reconstruction is limited by `F`'s own precision: distinct encodings
    /// whose quotients differ below `F`'s resolution collapse to the same
    /// native value.
    pub fn to_float(&self) -> F {
        const { Self::LAYOUT_CHECK };

        let mut value = F::from_i128(self.numerator.as_i128())
            / F::from_u128(self.denominator.as_u128());

        let exponent = self.exponent.as_i128();
        let bias = F::MAX_EXP as i128 - 1;

        let mut step = bias + 1;
        while step <= exponent {
            value = value * F::TWO;
            step += 1;
        }
        let mut step = bias - 1;
        while step >= exponent {
            value = value / F::TWO;
            step -= 1;
        }
        value
    }

    /// Returns whether the encoded value renders exactly as `expected`.
    ///
    /// Equality is exact, not tolerance-based: this checks a specific
    /// encoding against a specific expected rendering, typically a
    /// hand-authored literal against the native constant it claims to
    /// refine. Pure; safe to call repeatedly.
    pub fn validate(&self, expected: F) -> bool {
        expected == self.to_float()
    }
}

macro_rules! impl_from_float {
    ($($f:ty),*) => {$(
        impl<N: SignedInt, D: UnsignedInt, E: SignedInt> From<$f> for RatioFloat<N, D, E, $f> {
            fn from(value: $f) -> Self {
                Self::from_float(value)
            }
        }

        impl<N: SignedInt, D: UnsignedInt, E: SignedInt> From<RatioFloat<N, D, E, $f>> for $f {
            fn from(value: RatioFloat<N, D, E, $f>) -> Self {
                value.to_float()
            }
        }
    )*};
}

impl_from_float!(f32, f64);
