//! Error types for fedsim
//!
//! Gantree: L0_Foundation → Errors
//!
//! Shared error taxonomy across the federation crates.

// Error variant fields are self-documenting via error messages
#![allow(missing_docs)]

use thiserror::Error;

/// Main error type for the federation.
/// Gantree: FedSimError // enum
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FedSimError {
    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// Two nodes were registered under the same id.
    /// Gantree: DuplicateNodeId(String) // 중복 노드 id
    #[error("node id '{0}' is not unique")]
    DuplicateNodeId(String),

    /// An edge or node referenced an id that was never registered.
    /// Gantree: UnknownNodeId(String) // 미등록 id
    #[error("unknown node id '{0}'")]
    UnknownNodeId(String),

    /// Quantum length must be a positive number of nanoseconds.
    /// Gantree: QuantaMustBePositive{{node,value}} // 쿼넘 양수 제약
    #[error("quanta for node '{node}' must be greater than zero, got {value}")]
    QuantaMustBePositive { node: String, value: i64 },

    /// Edge latency must be a positive number of nanoseconds.
    /// Gantree: LatencyMustBePositive{{a,b,value}} // 지연시간 양수 제약
    #[error("latency between '{a}' and '{b}' must be greater than zero, got {value}")]
    LatencyMustBePositive { a: String, b: String, value: i64 },

    /// `has_global_quanta` was set but no global quantum length was given.
    /// Gantree: GlobalQuantaRequired // 전역 쿼넘 누락
    #[error("global_quanta_ns must be set and greater than zero when has_global_quanta is enabled")]
    GlobalQuantaRequired,

    /// The federation is not distributed but no master node was supplied.
    /// Gantree: MissingMaster // 마스터 노드 누락
    #[error("a master node is required when is_distributed is false")]
    MissingMaster,

    /// A node declared `manages_quanta` in a non-distributed federation.
    /// Gantree: ManagesQuantaInNonDistributed(String) // 비분산 쿼넘 관리
    #[error("node '{0}' manages its own quanta, which is only valid in a distributed federation")]
    ManagesQuantaInNonDistributed(String),

    /// Neither a fixed overhead nor a fractional overhead was configured.
    /// Gantree: OverheadUnconfigured(String) // 오버헤드 미설정
    #[error("node '{0}' has no overhead configured: set a fixed value or a fraction of the quantum")]
    OverheadUnconfigured(String),

    /// A fractional overhead spec was given a negative fraction.
    /// Gantree: InvalidOverheadFraction(f64) // 음수 비율
    #[error("overhead fraction {0} must be non-negative")]
    InvalidOverheadFraction(f64),

    // ========================================================================
    // Contract Violations
    // ========================================================================
    /// `simulate` was called before `initialize`.
    /// Gantree: NotInitialized(String) // 초기화 누락
    #[error("node '{0}' must be initialized before it can be simulated")]
    NotInitialized(String),

    /// Asked to advance a node further than its current mode has time left for.
    /// Gantree: OverrunCurrentMode{{node,requested,available}} // 모드 초과
    #[error(
        "node '{node}' cannot simulate {requested} ns, only {available} ns remain in its current mode"
    )]
    OverrunCurrentMode {
        node: String,
        requested: u64,
        available: i64,
    },

    /// The scheduler computed a non-positive step while nodes remain unfinished.
    /// Gantree: Deadlock{{remaining}} // 교착 상태
    #[error("deadlock: no eligible node has time left to simulate, but {remaining} node(s) are not done")]
    Deadlock { remaining: usize },

    /// A noise sequence was constructed with no entries.
    /// Gantree: EmptyNoiseSequence // 빈 노이즈 시퀀스
    #[error("noise sequence must contain at least one value")]
    EmptyNoiseSequence,

    /// A noise value fell outside the permitted range `(-1, +inf)`.
    /// Gantree: InvalidNoiseValue(f64) // 노이즈 범위
    #[error("noise value {0} is out of range: must be greater than -1")]
    InvalidNoiseValue(f64),

    // ========================================================================
    // Unimplemented
    // ========================================================================
    /// Distributed (networked) scheduling is not implemented by this engine.
    /// Gantree: NotImplemented(String) // 미구현 기능
    #[error("distributed scheduling is not implemented: {0}")]
    NotImplemented(String),
}

/// Result type alias for federation operations.
pub type FedSimResult<T> = Result<T, FedSimError>;

impl FedSimError {
    /// True for errors raised while validating a `FederationConfig` or
    /// constructing a `Federation`, before any simulation has run.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            FedSimError::DuplicateNodeId(_)
                | FedSimError::UnknownNodeId(_)
                | FedSimError::QuantaMustBePositive { .. }
                | FedSimError::LatencyMustBePositive { .. }
                | FedSimError::GlobalQuantaRequired
                | FedSimError::MissingMaster
                | FedSimError::ManagesQuantaInNonDistributed(_)
                | FedSimError::OverheadUnconfigured(_)
                | FedSimError::InvalidOverheadFraction(_)
        )
    }

    /// True for invariant violations raised while the scheduler is running.
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            FedSimError::NotInitialized(_)
                | FedSimError::OverrunCurrentMode { .. }
                | FedSimError::Deadlock { .. }
                | FedSimError::EmptyNoiseSequence
                | FedSimError::InvalidNoiseValue(_)
        )
    }

    /// True for features explicitly scoped out of this engine.
    pub fn is_unimplemented(&self) -> bool {
        matches!(self, FedSimError::NotImplemented(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FedSimError::DuplicateNodeId("node-a".into());
        assert!(err.to_string().contains("node-a"));
    }

    #[test]
    fn test_is_configuration_error() {
        assert!(FedSimError::MissingMaster.is_configuration_error());
        assert!(!FedSimError::Deadlock { remaining: 2 }.is_configuration_error());
    }

    #[test]
    fn test_is_contract_violation() {
        assert!(FedSimError::Deadlock { remaining: 1 }.is_contract_violation());
        assert!(!FedSimError::MissingMaster.is_contract_violation());
    }

    #[test]
    fn test_is_unimplemented() {
        assert!(FedSimError::NotImplemented("networked transport".into()).is_unimplemented());
        assert!(!FedSimError::MissingMaster.is_unimplemented());
    }
}
