//! Node mode state machine for fedsim
//!
//! Gantree: L1_NodeModel → Mode
//!
//! A tagged union of the three modes a node can be in, each carrying only
//! the execution bookkeeping that mode needs.

use serde::{Deserialize, Serialize};

/// Bookkeeping for a node actively executing a quantum.
/// Gantree: QuantaExecution // 쿼넘 실행 상태
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuantaExecution {
    /// Host nanoseconds required to execute this quantum (noise already applied).
    /// Gantree: host_length_ns: u64 // 쿼넘 호스트 길이
    pub host_length_ns: u64,
    /// Target instructions this quantum will retire once it completes.
    /// Gantree: instructions: u64 // 쿼넘당 명령어 수
    pub instructions: u64,
    /// Host nanoseconds simulated so far within this quantum.
    /// Gantree: time_executed_ns: u64 // 경과 호스트 시간
    pub time_executed_ns: u64,
}

impl QuantaExecution {
    fn total_execution_time_ns(&self) -> u64 {
        self.host_length_ns
    }

    /// Remaining host nanoseconds before this quantum completes.
    /// Gantree: time_left_ns() -> i64 // 잔여 시간
    pub fn time_left_ns(&self) -> i64 {
        self.total_execution_time_ns() as i64 - self.time_executed_ns as i64
    }
}

/// Bookkeeping for a node running the synchronization/communication overhead
/// after a barrier releases it.
/// Gantree: BarrierExecution // 배리어 실행 상태
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarrierExecution {
    /// Fixed communication overhead in host nanoseconds.
    /// Gantree: communication_overhead_ns: u64 // 통신 오버헤드
    pub communication_overhead_ns: u64,
    /// Fixed synchronization overhead in host nanoseconds.
    /// Gantree: synchronization_overhead_ns: u64 // 동기화 오버헤드
    pub synchronization_overhead_ns: u64,
    /// Host nanoseconds simulated so far within this barrier.
    /// Gantree: time_executed_ns: u64 // 경과 호스트 시간
    pub time_executed_ns: u64,
}

impl BarrierExecution {
    fn total_execution_time_ns(&self) -> u64 {
        self.communication_overhead_ns + self.synchronization_overhead_ns
    }

    /// Remaining host nanoseconds before synchronization completes.
    /// Gantree: time_left_ns() -> i64 // 잔여 시간
    pub fn time_left_ns(&self) -> i64 {
        self.total_execution_time_ns() as i64 - self.time_executed_ns as i64
    }
}

/// The mode a node is currently in.
///
/// This replaces a `MODE` tag plus a nullable `execution_details` field with
/// a single sum type: `Waiting` carries no execution bookkeeping by
/// construction, so there is no state where the tag and the details can
/// disagree.
/// Gantree: Mode // enum, 노드 모드 태그드 유니온
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Mode {
    /// Executing a quantum of simulated work.
    /// Gantree: Running(QuantaExecution) // 쿼넘 실행 중
    Running(QuantaExecution),
    /// Quantum finished; waiting for the barrier policy to release this node.
    /// Gantree: Waiting // 배리어 대기
    Waiting,
    /// Released from the barrier, running communication/synchronization overhead.
    /// Gantree: Synchronizing(BarrierExecution) // 동기화 중
    Synchronizing(BarrierExecution),
}

impl Mode {
    /// Remaining host nanoseconds in the current mode, or `None` while waiting.
    pub fn time_left_ns(&self) -> Option<i64> {
        match self {
            Mode::Running(q) => Some(q.time_left_ns()),
            Mode::Waiting => None,
            Mode::Synchronizing(b) => Some(b.time_left_ns()),
        }
    }

    /// True if this node is presently blocked on the barrier.
    pub fn is_waiting(&self) -> bool {
        matches!(self, Mode::Waiting)
    }

    /// True if this node is presently executing a quantum.
    pub fn is_running(&self) -> bool {
        matches!(self, Mode::Running(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quanta_execution_time_left() {
        let q = QuantaExecution {
            host_length_ns: 1000,
            instructions: 42,
            time_executed_ns: 400,
        };
        assert_eq!(q.time_left_ns(), 600);
    }

    #[test]
    fn test_barrier_execution_total() {
        let b = BarrierExecution {
            communication_overhead_ns: 100,
            synchronization_overhead_ns: 50,
            time_executed_ns: 0,
        };
        assert_eq!(b.time_left_ns(), 150);
    }

    #[test]
    fn test_mode_waiting_has_no_time_left() {
        assert_eq!(Mode::Waiting.time_left_ns(), None);
        assert!(Mode::Waiting.is_waiting());
        assert!(!Mode::Waiting.is_running());
    }
}
