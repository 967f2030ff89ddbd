use crate::constants::MathConsts;

// TODO: replace the f64 stand-in with a real arbitrary-precision state
type State = f64;

/// A big number whose precision `P` is fixed at the type level.
///
/// The internal state is currently a native double, so the advertised
/// precision is declared but not yet honored by the stored value: constants
/// obtained through [`MathConsts`] are seeded from the native-double entry
/// for every `P`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedBigNum<const P: u32> {
    state: State,
}

impl<const P: u32> FixedBigNum<P> {
    pub const fn new(value: f64) -> Self {
        Self { state: value }
    }

    pub const fn precision() -> u32 {
        P
    }

    /// Narrows the state to a native double. Lossy once the state carries
    /// more than a double's precision; always succeeds.
    pub const fn round_to_f64(&self) -> f64 {
        self.state
    }
}

impl<const P: u32> MathConsts for FixedBigNum<P> {
    fn pi() -> Self {
        Self::new(<f64 as MathConsts>::pi())
    }
}
