//! Federation configuration for fedsim
//!
//! Gantree: L4_Integration → Config
//!
//! Barrier discipline, quantum derivation, distribution mode, and
//! observational flags.

use fedsim_core::{FedSimError, FedSimResult};
use fedsim_schedule::BarrierPolicy;
use serde::{Deserialize, Serialize};

/// How a node's quantum length is derived at federation construction.
/// Gantree: QuantaPolicy // enum, 쿼넘 파생 규율
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum QuantaPolicy {
    /// Every node shares one globally configured quantum length.
    /// Gantree: Global(u64) // 전역 쿼넘
    Global(u64),
    /// Each node's quantum is the minimum latency over its incident edges.
    /// Gantree: LinkDerived // 링크 파생 쿼넘
    LinkDerived,
}

/// Configuration for a federation: which barrier discipline it uses, how
/// quanta are derived, whether it runs in distributed mode, and whether the
/// scheduler prints a per-iteration trace.
/// Gantree: FederationConfig // 연합 설정
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FederationConfig {
    /// Barrier release discipline.
    /// Gantree: barrier_policy: BarrierPolicy // 배리어 규율
    pub barrier_policy: BarrierPolicy,
    /// How each node's quantum length is derived.
    /// Gantree: quanta_policy: QuantaPolicy // 쿼넘 파생 규율
    pub quanta_policy: QuantaPolicy,
    /// If false, a master node handle is required and no node may set
    /// `manages_quanta`. True distributed operation is not implemented.
    /// Gantree: is_distributed: bool // 분산 모드 플래그
    pub is_distributed: bool,
    /// Enables per-iteration state dumps from the scheduler.
    /// Gantree: verbose: bool // 추적 출력 플래그
    pub verbose: bool,
}

impl FederationConfig {
    /// A non-distributed federation with a global barrier and a global
    /// quantum length, the common configuration for a tightly coupled
    /// cluster of hardware simulators.
    pub fn global_barrier(global_quanta_ns: u64) -> Self {
        Self {
            barrier_policy: BarrierPolicy::Global,
            quanta_policy: QuantaPolicy::Global(global_quanta_ns),
            is_distributed: false,
            verbose: false,
        }
    }

    /// A non-distributed federation with a neighbor (local) barrier and
    /// link-derived quanta, the configuration that lets fast nodes outpace
    /// slow neighbors within causality limits.
    pub fn local_barrier_link_derived() -> Self {
        Self {
            barrier_policy: BarrierPolicy::Local,
            quanta_policy: QuantaPolicy::LinkDerived,
            is_distributed: false,
            verbose: false,
        }
    }

    /// Select the barrier discipline.
    pub fn with_barrier_policy(mut self, barrier_policy: BarrierPolicy) -> Self {
        self.barrier_policy = barrier_policy;
        self
    }

    /// Select the quanta derivation policy.
    pub fn with_quanta_policy(mut self, quanta_policy: QuantaPolicy) -> Self {
        self.quanta_policy = quanta_policy;
        self
    }

    /// Set distributed mode. True distributed operation is not implemented
    /// ([`crate::master::MasterNode`]); this flag is carried for
    /// configuration-shape completeness only.
    pub fn with_distributed(mut self, is_distributed: bool) -> Self {
        self.is_distributed = is_distributed;
        self
    }

    /// Enable or disable the scheduler's per-iteration trace.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Validate the configuration in isolation, before it is applied to any
    /// nodes or topology.
    pub fn validate(&self) -> FedSimResult<()> {
        if let QuantaPolicy::Global(quanta_ns) = self.quanta_policy {
            if quanta_ns == 0 {
                return Err(FedSimError::GlobalQuantaRequired);
            }
        }
        Ok(())
    }
}

impl Default for FederationConfig {
    fn default() -> Self {
        Self::global_barrier(1_000)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_barrier_preset() {
        let config = FederationConfig::global_barrier(500);
        assert_eq!(config.barrier_policy, BarrierPolicy::Global);
        assert_eq!(config.quanta_policy, QuantaPolicy::Global(500));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_local_barrier_preset() {
        let config = FederationConfig::local_barrier_link_derived();
        assert_eq!(config.barrier_policy, BarrierPolicy::Local);
        assert_eq!(config.quanta_policy, QuantaPolicy::LinkDerived);
    }

    #[test]
    fn test_zero_global_quanta_is_rejected() {
        let config = FederationConfig::global_barrier(0);
        assert!(matches!(
            config.validate().unwrap_err(),
            FedSimError::GlobalQuantaRequired
        ));
    }

    #[test]
    fn test_builder_methods_compose() {
        let config = FederationConfig::default()
            .with_barrier_policy(BarrierPolicy::Local)
            .with_distributed(false)
            .with_verbose(true);
        assert_eq!(config.barrier_policy, BarrierPolicy::Local);
        assert!(config.verbose);
    }
}
