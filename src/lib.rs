//! # RatioFloat
//!
//! A high-precision library generalizing the internal representation of
//! IEEE 754 binary floating-point numbers. A value is encoded as
//! `numerator / denominator * 2^exponent` with independently sized integer
//! fields for each part, so a single encoding can carry more significant
//! digits than any native float type, while converting to and from native
//! floats exactly.
//!
//! ## Overview
//!
//! RatioFloat provides:
//! - **Rational-exponent encoding**: signed numerator, unsigned denominator
//!   and signed exponent, each an independently chosen integer type
//! - **Compile-time layout checks**: incompatible field/float combinations
//!   fail to compile, never at runtime
//! - **Exact native conversion**: every finite native float decomposes and
//!   reconstructs bit-for-bit
//! - **Per-type math constants**: each numeric type registers its own best
//!   rendering of π, resolved statically with no fallback
//! - **Big-number stand-ins**: fixed- and dynamic-precision wrappers that
//!   participate in the constant mechanism
//!
//! ## Architecture
//!
//! The library is built around four modules:
//!
//! ### Limits Module
//! Compile-time contracts over the primitive numeric types: is-integer,
//! is-signed, digit count and bit width, plus the conversion hooks generic
//! code needs. Pure predicates, never evaluated at runtime.
//!
//! ### RatioFloat Module
//! The core representation with:
//! - Signed numerator (one digit fewer than the denominator)
//! - Unsigned denominator (wider than the native mantissa)
//! - Signed exponent (wide enough for the native exponent field)
//!
//! ### Constants Module
//! The [`MathConsts`] provider: one authoritative π per participating type,
//! or a compile error for types that never registered one.
//!
//! ### BigNum Module
//! [`FixedBigNum`] (precision fixed at the type level) and
//! [`DynamicBigNum`] (precision retargetable at runtime, with π as a
//! recompute-on-demand algorithm rather than a cached constant).
//!
//! ## Quick Start
//!
//! ```rust
//! use ratiofloat::{pi, DoubleRatioFloat};
//!
//! // Decompose a native float
//! let x = DoubleRatioFloat::from_float(2.718281828459045);
//!
//! // Reconstruct it exactly
//! let back: f64 = x.into();
//! assert_eq!(back, 2.718281828459045);
//!
//! // A hand-authored 19-digit constant, checked against the native one
//! let hp_pi: DoubleRatioFloat = pi();
//! assert!(hp_pi.validate(std::f64::consts::PI));
//! ```
//!
//! ## Precision Targets
//!
//! ```rust
//! use ratiofloat::{pi, DynamicBigNum, FixedBigNum};
//!
//! let fixed: FixedBigNum<100> = pi();
//! assert_eq!(fixed.round_to_f64(), std::f64::consts::PI);
//!
//! let mut dynamic: DynamicBigNum = pi();
//! dynamic.set_precision(50);
//! assert_eq!(dynamic.compute_pi().round_to_f64(), std::f64::consts::PI);
//! ```

pub mod bignum;
pub mod constants;
pub mod limits;
pub mod ratiofloat;

// Re-export the main types for convenience
pub use bignum::{DynamicBigNum, FixedBigNum};
pub use constants::{pi, MathConsts};
pub use ratiofloat::{DoubleRatioFloat, RatioFloat, SingleRatioFloat};

pub mod prelude {
    //! Prelude module for RatioFloat.
    //!
    //! Re-exports the commonly used types and traits, allowing for easier
    //! imports in user code.

    pub use crate::bignum::{DynamicBigNum, FixedBigNum};
    pub use crate::constants::{pi, MathConsts};
    pub use crate::limits::{Float, NumericLimits, SignedInt, UnsignedInt};
    pub use crate::ratiofloat::{DoubleRatioFloat, RatioFloat, SingleRatioFloat};
}
