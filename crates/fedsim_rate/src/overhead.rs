//! Barrier overhead configuration for fedsim
//!
//! Gantree: L2_RateModel → Overhead
//!
//! How communication/synchronization overhead at a barrier is computed.

use fedsim_core::{FedSimError, FedSimResult};

/// How a node's communication or synchronization overhead is computed once
/// it reaches a barrier.
///
/// Exactly one discipline applies per overhead component: a fixed number of
/// host nanoseconds, or a fraction of the noise-free quantum length that
/// would have been simulated. The fraction is always evaluated against the
/// *noise-free* base quantum, never against a noise-perturbed one, so
/// overhead scales with the configured rate model rather than with whatever
/// a particular quantum happened to roll.
/// Gantree: OverheadSpec // enum, 오버헤드 규율
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OverheadSpec {
    /// A fixed overhead, independent of quantum length.
    /// Gantree: Fixed(u64) // 고정 오버헤드
    Fixed(u64),
    /// A fraction of the noise-free quantum host-nanosecond length.
    /// Gantree: FractionOfQuantum(f64) // 비율 오버헤드
    FractionOfQuantum(f64),
}

impl OverheadSpec {
    /// A fixed overhead spec.
    pub fn fixed(ns: u64) -> Self {
        Self::Fixed(ns)
    }

    /// A fractional overhead spec. The fraction must be non-negative.
    pub fn fraction(fraction: f64) -> FedSimResult<Self> {
        if fraction < 0.0 {
            return Err(FedSimError::InvalidOverheadFraction(fraction));
        }
        Ok(Self::FractionOfQuantum(fraction))
    }

    /// An overhead spec that contributes nothing.
    pub fn none() -> Self {
        Self::Fixed(0)
    }

    /// Resolve this spec into a concrete host-nanosecond overhead given the
    /// noise-free quantum length it applies against.
    pub fn resolve(&self, noise_free_quantum_host_ns: u64) -> u64 {
        match self {
            OverheadSpec::Fixed(ns) => *ns,
            OverheadSpec::FractionOfQuantum(fraction) => {
                (noise_free_quantum_host_ns as f64 * fraction) as u64
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_overhead_ignores_quantum_length() {
        let spec = OverheadSpec::fixed(1_000);
        assert_eq!(spec.resolve(0), 1_000);
        assert_eq!(spec.resolve(999_999), 1_000);
    }

    #[test]
    fn test_fractional_overhead_scales_and_truncates() {
        let spec = OverheadSpec::fraction(0.1).unwrap();
        assert_eq!(spec.resolve(999), 99);
        assert_eq!(spec.resolve(1_000), 100);
    }

    #[test]
    fn test_negative_fraction_rejected() {
        assert!(matches!(
            OverheadSpec::fraction(-0.01).unwrap_err(),
            FedSimError::InvalidOverheadFraction(_)
        ));
    }

    #[test]
    fn test_none_resolves_to_zero() {
        assert_eq!(OverheadSpec::none().resolve(1_000_000), 0);
    }
}
