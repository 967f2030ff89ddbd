//! # Math Constants
//!
//! A per-type source of named mathematical constants, resolved by static
//! dispatch. Each participating numeric type provides exactly one
//! authoritative definition of each constant, at whatever precision the
//! type can carry; the trait has no default implementation, so asking for
//! a constant of an unregistered type is a compile error rather than a
//! silently low-precision fallback.
//!
//! The key space is the trait's method set: a new constant (Euler's number,
//! say) is a new method, and a new numeric type participates by
//! implementing the trait — neither addition touches existing code.
//!
//! ```rust
//! use ratiofloat::{pi, DoubleRatioFloat};
//!
//! let native: f64 = pi();
//! assert_eq!(native, std::f64::consts::PI);
//!
//! // the hand-authored high-precision encoding renders as the native value
//! let encoded: DoubleRatioFloat = pi();
//! assert!(encoded.validate(native));
//! ```

use crate::ratiofloat::DoubleRatioFloat;

/// Per-type source of math constants.
///
/// No default implementation exists on purpose: a type that has not
/// declared its own rendering of a constant must fail to compile, not fall
/// back to one of another precision.
///
/// ```compile_fail
/// // u8 has no registered constants
/// let x: u8 = ratiofloat::pi();
/// ```
pub trait MathConsts: Sized {
    /// The best available rendering of π for this type.
    fn pi() -> Self;
}

/// Looks up the rendering of π registered for `T`.
pub fn pi<T: MathConsts>() -> T {
    T::pi()
}

impl MathConsts for f64 {
    fn pi() -> Self {
        std::f64::consts::PI
    }
}

impl MathConsts for f32 {
    fn pi() -> Self {
        std::f32::consts::PI
    }
}

/// 19 significant decimal digits, six more than `f64` can distinguish.
/// The quotient is already in place, so the exponent is the bias.
impl MathConsts for DoubleRatioFloat {
    fn pi() -> Self {
        Self::new(3_141_592_653_589_793_238, 1_000_000_000_000_000_000, 1023)
    }
}

#[cfg(test)]
mod tests {
    use num_bigint::BigUint;

    use super::*;

    /// One unit below the high-precision literal in its last decimal digit.
    /// Indistinguishable from it at `f64` resolution.
    fn almost_pi() -> DoubleRatioFloat {
        DoubleRatioFloat::new(3_141_592_653_589_793_237, 1_000_000_000_000_000_000, 1023)
    }

    #[test]
    fn native_entries_are_the_standard_constants() {
        assert_eq!(pi::<f64>(), std::f64::consts::PI);
        assert_eq!(pi::<f32>(), std::f32::consts::PI);
    }

    #[test]
    fn high_precision_literal_validates_against_native_pi() {
        let hp_pi: DoubleRatioFloat = pi();
        assert!(hp_pi.validate(std::f64::consts::PI));
        assert_eq!(hp_pi.to_float(), std::f64::consts::PI);
    }

    #[test]
    fn neighboring_literal_collapses_to_the_same_native_value() {
        assert!(almost_pi().validate(std::f64::consts::PI));
        assert_eq!(almost_pi().to_float(), pi::<DoubleRatioFloat>().to_float());
    }

    #[test]
    fn decomposed_native_pi_validates() {
        let dp_pi = DoubleRatioFloat::from_float(std::f64::consts::PI);
        assert!(dp_pi.validate(std::f64::consts::PI));
    }

    #[test]
    fn literal_matches_a_longer_decimal_expansion() {
        // pi scaled by 10^29, correctly rounded in the last digit
        let expansion: BigUint = "314159265358979323846264338328".parse().unwrap();
        let scale = BigUint::from(10u64).pow(11);

        let quotient = &expansion / &scale;
        let remainder = &expansion % &scale;
        let rounded = if remainder * 2u8 >= scale {
            quotient + 1u8
        } else {
            quotient
        };

        let numerator = pi::<DoubleRatioFloat>().numerator();
        assert_eq!(rounded, BigUint::from(numerator as u64));
    }
}
