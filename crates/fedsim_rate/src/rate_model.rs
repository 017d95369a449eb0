//! Rate models for fedsim
//!
//! Gantree: L2_RateModel → RateModel
//!
//! Concrete [`NodeRateModel`] implementations: a noise-free base model and a
//! noise-injecting decorator that wraps any other rate model.

use fedsim_core::node::host_ns_per_target_ns;
use fedsim_core::NodeRateModel;

use crate::noise_sequence::NoiseSequence;
use crate::overhead::OverheadSpec;

/// The noise-free rate model: converts a quantum into host nanoseconds using
/// only the node's instruction rate, and resolves barrier overhead from a
/// pair of [`OverheadSpec`]s with no further perturbation.
/// Gantree: BaseRateModel // 노이즈 없는 변환
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaseRateModel {
    communication_overhead: OverheadSpec,
    synchronization_overhead: OverheadSpec,
}

impl BaseRateModel {
    /// A base model with independently configured communication and
    /// synchronization overhead.
    pub fn new(communication_overhead: OverheadSpec, synchronization_overhead: OverheadSpec) -> Self {
        Self {
            communication_overhead,
            synchronization_overhead,
        }
    }

    /// A base model with no communication overhead and a fixed
    /// synchronization overhead, the common case for a single-hop node.
    pub fn fixed_sync(synchronization_overhead_ns: u64) -> Self {
        Self::new(
            OverheadSpec::none(),
            OverheadSpec::fixed(synchronization_overhead_ns),
        )
    }
}

impl NodeRateModel for BaseRateModel {
    fn quantum_to_host_ns(&mut self, quanta_ns: u64, instruction_per_ns: f64, simulation_speed_ips: f64) -> u64 {
        host_ns_per_target_ns(instruction_per_ns, simulation_speed_ips).saturating_mul(quanta_ns)
    }

    fn barrier_overhead(&self, noise_free_quantum_host_ns: u64) -> (u64, u64) {
        (
            self.communication_overhead.resolve(noise_free_quantum_host_ns),
            self.synchronization_overhead.resolve(noise_free_quantum_host_ns),
        )
    }
}

/// A decorator that perturbs another rate model's quantum length by a cyclic
/// sequence of noise factors, in the style of a hardware simulator whose
/// timing model samples from a recorded jitter trace.
///
/// `quantum_to_host_ns` is perturbed: `without_noise * (1 + noise_factor)`,
/// truncated toward zero. `barrier_overhead` passes straight through to the
/// wrapped model, since overhead is defined against the noise-free quantum
/// length by construction.
/// Gantree: NoisyRateModel // 노이즈 데코레이터
#[derive(Debug, Clone, PartialEq)]
pub struct NoisyRateModel<M: NodeRateModel> {
    inner: M,
    noise: NoiseSequence,
}

impl<M: NodeRateModel> NoisyRateModel<M> {
    /// Wrap `inner`, perturbing its quantum length with `noise`.
    pub fn new(inner: M, noise: NoiseSequence) -> Self {
        Self { inner, noise }
    }
}

impl<M: NodeRateModel> NodeRateModel for NoisyRateModel<M> {
    fn quantum_to_host_ns(&mut self, quanta_ns: u64, instruction_per_ns: f64, simulation_speed_ips: f64) -> u64 {
        let without_noise = self.inner.quantum_to_host_ns(quanta_ns, instruction_per_ns, simulation_speed_ips);
        let noise_factor = self.noise.next();
        (without_noise as f64 * (1.0 + noise_factor)) as u64
    }

    fn barrier_overhead(&self, noise_free_quantum_host_ns: u64) -> (u64, u64) {
        self.inner.barrier_overhead(noise_free_quantum_host_ns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_rate_model_is_noise_free() {
        let mut model = BaseRateModel::fixed_sync(1_000);
        let host_ns = model.quantum_to_host_ns(500, 10.0, 5e8);
        assert_eq!(host_ns, 500 * host_ns_per_target_ns(10.0, 5e8));
        assert_eq!(model.barrier_overhead(host_ns), (0, 1_000));
    }

    #[test]
    fn test_noisy_rate_model_perturbs_and_cycles() {
        let base = BaseRateModel::fixed_sync(0);
        let noise = NoiseSequence::new(vec![0.1, -0.1]).unwrap();
        let mut noisy = NoisyRateModel::new(base, noise);

        let without_noise = base_quantum_ns(500, 10.0, 5e8);
        let first = noisy.quantum_to_host_ns(500, 10.0, 5e8);
        let second = noisy.quantum_to_host_ns(500, 10.0, 5e8);
        assert_eq!(first, (without_noise as f64 * 1.1) as u64);
        assert_eq!(second, (without_noise as f64 * 0.9) as u64);
    }

    #[test]
    fn test_noisy_rate_model_overhead_bypasses_noise() {
        let base = BaseRateModel::fixed_sync(1_000);
        let noise = NoiseSequence::new(vec![5.0]).unwrap();
        let noisy = NoisyRateModel::new(base, noise);
        assert_eq!(noisy.barrier_overhead(999), (0, 1_000));
    }

    fn base_quantum_ns(quanta_ns: u64, instruction_per_ns: f64, simulation_speed_ips: f64) -> u64 {
        host_ns_per_target_ns(instruction_per_ns, simulation_speed_ips).saturating_mul(quanta_ns)
    }
}
