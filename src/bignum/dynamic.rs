use crate::constants::MathConsts;

// TODO: replace the f64 stand-in with a real arbitrary-precision state
type State = f64;

/// A big number whose precision is a runtime-mutable field.
///
/// Unlike [`FixedBigNum`](crate::bignum::FixedBigNum), constants for this
/// type are not constants at all: π is an algorithm that runs until the
/// current target precision is reached, so it is recomputed against
/// `precision` rather than read from a type-level value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DynamicBigNum {
    state: State,
    precision: u32,
}

impl DynamicBigNum {
    pub const fn new(value: f64, precision: u32) -> Self {
        Self { state: value, precision }
    }

    /// Retargets the precision. No upper bound is enforced.
    ///
    /// Any value previously computed at the old precision is stale after
    /// this call and must be recomputed, not reused.
    pub fn set_precision(&mut self, precision: u32) {
        self.precision = precision;
    }

    pub const fn precision(&self) -> u32 {
        self.precision
    }

    /// Computes π to the current target precision.
    ///
    /// Stand-in: a full implementation would refine iteratively until
    /// `precision` units are correct. Until the state grows beyond a native
    /// double there is nothing to refine, so this seeds from the
    /// native-double entry at the current precision.
    pub fn compute_pi(&self) -> Self {
        Self::new(<f64 as MathConsts>::pi(), self.precision)
    }

    pub const fn round_to_f64(&self) -> f64 {
        self.state
    }
}

/// The one non-constant entry in the provider: a value produced by running
/// the type's own π computation at zero precision.
impl MathConsts for DynamicBigNum {
    fn pi() -> Self {
        Self::new(<f64 as MathConsts>::pi(), 0).compute_pi()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::pi;

    #[test]
    fn provider_entry_is_computed_at_zero_precision() {
        let x: DynamicBigNum = pi();
        assert_eq!(x.precision(), 0);
        assert_eq!(x.round_to_f64(), std::f64::consts::PI);
    }

    #[test]
    fn set_precision_mutates_the_target() {
        let mut x = DynamicBigNum::new(1.0, 0);
        x.set_precision(64);
        assert_eq!(x.precision(), 64);
        x.set_precision(0);
        assert_eq!(x.precision(), 0);
    }

    #[test]
    fn compute_pi_carries_the_current_precision() {
        let mut x = DynamicBigNum::new(0.0, 0);
        x.set_precision(37);
        let pi = x.compute_pi();
        assert_eq!(pi.precision(), 37);
        assert_eq!(pi.round_to_f64(), std::f64::consts::PI);
    }

    /// The driver contract: take the provider default, then refine at ever
    /// higher precision; every step must yield a finite value.
    #[test]
    fn refinement_loop_stays_finite() {
        let mut pi: DynamicBigNum = pi();
        for i in 0..100 {
            pi.set_precision(i);
            let refined = pi.compute_pi();
            assert!(refined.round_to_f64().is_finite());
            assert!(!refined.round_to_f64().is_nan());
            assert_eq!(refined.round_to_f64(), std::f64::consts::PI);
        }
    }
}
