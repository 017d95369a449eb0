//! # fedsim engine
//!
//! Federation construction, configuration, validation, and the run drivers
//! that turn a user-facing goal into a completed federated simulation.
//!
//! ## Gantree Architecture
//!
//! ```text
//! fedsim_engine // L4: Integration (완료)
//!     FederationConfig // 연합 설정 (완료)
//!         barrier_policy, quanta_policy, is_distributed, verbose
//!         global_barrier(), local_barrier_link_derived()
//!     Federation // 연합 구성/검증 (완료)
//!         new() - 노드 연결, 쿼넘 배정, 초기화
//!     MasterNode // 마스터 핸들 placeholder (완료)
//!     run // 실행 드라이버 (완료)
//!         simulate_for_instructions(), simulate_for_target_ns()
//! ```
//!
//! ## Quick start
//!
//! ```rust
//! use fedsim_engine::prelude::*;
//! use fedsim_core::Node;
//! use fedsim_rate::BaseRateModel;
//!
//! let nodes = vec![
//!     Node::new("a", 5e6, false, Box::new(BaseRateModel::fixed_sync(1_000))),
//!     Node::new("b", 5e6, false, Box::new(BaseRateModel::fixed_sync(1_000))),
//! ];
//! let edges = vec![("a".to_string(), "b".to_string(), 500)];
//! let config = FederationConfig::global_barrier(500);
//!
//! let mut federation =
//!     Federation::new(config, nodes, edges, Some(MasterNode::new("coordinator"))).unwrap();
//!
//! let host_ns = simulate_for_instructions(&mut federation, 10_000_000_000).unwrap();
//! assert!(host_ns > 0);
//! ```

#![warn(missing_docs)]

// ============================================================================
// Module Declarations
// ============================================================================

/// Federation-wide configuration: barrier discipline, quantum derivation,
/// distribution mode, and observational flags.
pub mod config;

/// Federation construction: wiring nodes into a topology and validating
/// the configuration before any simulation runs.
pub mod federation;

/// The master-node placeholder required by non-distributed federations.
pub mod master;

/// Run drivers: `simulate_for_instructions` and `simulate_for_target_ns`.
pub mod run;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::{FederationConfig, QuantaPolicy};
pub use federation::Federation;
pub use master::MasterNode;
pub use run::{simulate_for_instructions, simulate_for_target_ns};

// ============================================================================
// Prelude
// ============================================================================

/// Convenient imports for common use cases.
pub mod prelude {
    //! ```rust
    //! use fedsim_engine::prelude::*;
    //! ```

    pub use crate::config::{FederationConfig, QuantaPolicy};
    pub use crate::federation::Federation;
    pub use crate::master::MasterNode;
    pub use crate::run::{simulate_for_instructions, simulate_for_target_ns};
}

// ============================================================================
// Integration Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::prelude::*;
    use fedsim_core::Node;
    use fedsim_rate::BaseRateModel;
    use fedsim_schedule::BarrierPolicy;

    fn node(id: &str, ips: f64) -> Node {
        Node::new(id, ips, false, Box::new(BaseRateModel::fixed_sync(0)))
    }

    #[test]
    fn test_single_node_federation_via_run_driver() {
        let config = FederationConfig::global_barrier(100);
        let mut federation =
            Federation::new(config, vec![node("solo", 1e9)], vec![], Some(MasterNode::new("m")))
                .unwrap();

        let host_ns = simulate_for_target_ns(&mut federation, 1_000).unwrap();

        assert!(host_ns > 0);
        assert!(federation.nodes()["solo"].is_done());
    }

    #[test]
    fn test_local_barrier_federation_via_run_driver() {
        let config = FederationConfig::local_barrier_link_derived();
        let nodes = vec![node("a", 1e9), node("b", 1e9), node("c", 1e9)];
        let edges = vec![
            ("a".to_string(), "b".to_string(), 200),
            ("b".to_string(), "c".to_string(), 800),
        ];
        let mut federation =
            Federation::new(config, nodes, edges, Some(MasterNode::new("m"))).unwrap();

        assert_eq!(federation.config().barrier_policy, BarrierPolicy::Local);
        simulate_for_target_ns(&mut federation, 1_600).unwrap();

        assert!(federation.nodes()["a"].current_target_ns() >= 1_600);
        assert!(federation.nodes()["c"].current_target_ns() >= 1_600);
    }
}
