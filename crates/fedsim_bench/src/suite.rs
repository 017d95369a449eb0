//! Benchmark suite for fedsim
//!
//! Gantree: L8_Benchmark → BenchSuite
//!
//! Provides comprehensive benchmarking for federated quanta-barrier runs.

use fedsim_core::Node;
use fedsim_engine::{simulate_for_instructions, simulate_for_target_ns, Federation, FederationConfig, MasterNode};
use fedsim_schedule::BarrierPolicy;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// What a benchmarked federation was asked to run to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum BenchGoal {
    /// Run until every node has executed at least this many target
    /// instructions.
    Instructions(u64),
    /// Run until every node's target clock reaches at least this many
    /// nanoseconds.
    TargetNs(u64),
}

/// Single benchmark result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkResult {
    /// Benchmark name
    pub name: String,

    /// Number of nodes in the federation
    pub num_nodes: usize,

    /// Barrier discipline under which the federation ran
    pub barrier_policy: BarrierPolicy,

    /// What the run was driven to completion against
    pub goal: BenchGoal,

    /// The federation's reported wall-clock result: `max(current_host_ns)`
    pub host_ns: u64,

    /// Wall-clock time this process spent driving the simulation
    /// (milliseconds)
    pub time_ms: u64,
}

impl BenchmarkResult {
    /// Build a result from a completed federation and the elapsed wall time
    /// spent running it.
    pub fn from_run(
        name: &str,
        federation: &Federation,
        goal: BenchGoal,
        host_ns: u64,
        time_ms: u64,
    ) -> Self {
        Self {
            name: name.to_string(),
            num_nodes: federation.nodes().len(),
            barrier_policy: federation.config().barrier_policy,
            goal,
            host_ns,
            time_ms,
        }
    }
}

/// Benchmark suite
/// Gantree: BenchSuite // 벤치마크 스위트
pub struct BenchSuite {
    /// Base seed for reproducibility (reserved for generators that draw
    /// randomness; the scheduler itself is deterministic)
    seed: u64,

    /// Results
    results: Vec<BenchmarkResult>,

    /// Verbose output
    verbose: bool,
}

impl BenchSuite {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Create new benchmark suite
    pub fn new() -> Self {
        Self {
            seed: 42,
            results: Vec::new(),
            verbose: false,
        }
    }

    /// Create with seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            results: Vec::new(),
            verbose: false,
        }
    }

    /// Enable verbose output
    pub fn verbose(mut self) -> Self {
        self.verbose = true;
        self
    }

    /// This suite's configured seed.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    // ========================================================================
    // Individual Benchmarks
    // ========================================================================

    /// Run a single federation to completion and record the result.
    pub fn bench_federation(
        &mut self,
        name: &str,
        config: FederationConfig,
        nodes: Vec<Node>,
        edges: Vec<(String, String, u64)>,
        goal: BenchGoal,
    ) -> BenchmarkResult {
        if self.verbose {
            println!("Running benchmark: {name} ({} nodes)", nodes.len());
        }

        let mut federation =
            Federation::new(config, nodes, edges, Some(MasterNode::new("bench-coordinator")))
                .expect("benchmark scenarios build valid federations");

        let start = Instant::now();
        let host_ns = match goal {
            BenchGoal::Instructions(n) => simulate_for_instructions(&mut federation, n),
            BenchGoal::TargetNs(n) => simulate_for_target_ns(&mut federation, n),
        }
        .expect("benchmark scenarios do not deadlock");
        let time_ms = start.elapsed().as_millis() as u64;

        let result = BenchmarkResult::from_run(name, &federation, goal, host_ns, time_ms);
        self.results.push(result.clone());
        result
    }

    // ========================================================================
    // Benchmark Suites
    // ========================================================================

    /// Run a node-count scaling benchmark over a fully-connected mesh,
    /// mirroring spec.md scenario S3's `n^2` synchronization cost.
    pub fn run_node_scaling(&mut self, node_counts: &[usize], ips: f64, latency_ns: u64) -> Vec<BenchmarkResult> {
        if self.verbose {
            println!("=== Node Scaling Benchmark ===");
        }

        let generator = crate::generators::ScenarioGenerator::with_seed(self.seed);
        let mut results = Vec::new();

        for &n in node_counts {
            let (nodes, edges) = generator.fully_connected_mesh(n, ips, latency_ns);
            let name = format!("node_scaling_{n}");
            let config = FederationConfig::global_barrier(latency_ns);
            let result = self.bench_federation(&name, config, nodes, edges, BenchGoal::TargetNs(1_000_000));
            results.push(result);
        }

        results
    }

    /// Run a latency scaling benchmark over a two-node federation.
    pub fn run_latency_scaling(&mut self, latencies_ns: &[u64], ips: f64) -> Vec<BenchmarkResult> {
        if self.verbose {
            println!("=== Latency Scaling Benchmark ===");
        }

        let generator = crate::generators::ScenarioGenerator::with_seed(self.seed);
        let mut results = Vec::new();

        for &latency_ns in latencies_ns {
            let (nodes, edges) = generator.node_pair(ips, 1_000, latency_ns);
            let name = format!("latency_scaling_{latency_ns}ns");
            let config = FederationConfig::global_barrier(latency_ns);
            let result = self.bench_federation(&name, config, nodes, edges, BenchGoal::TargetNs(1_000_000));
            results.push(result);
        }

        results
    }

    /// Run a barrier-policy comparison over the same line topology,
    /// mirroring spec.md scenario S2.
    pub fn run_barrier_policy_comparison(
        &mut self,
        num_nodes: usize,
        ips: f64,
        quanta_ns: u64,
    ) -> Vec<BenchmarkResult> {
        if self.verbose {
            println!("=== Barrier Policy Comparison ===");
        }

        let generator = crate::generators::ScenarioGenerator::with_seed(self.seed);
        let mut results = Vec::new();

        for (policy_name, policy) in [("global", BarrierPolicy::Global), ("local", BarrierPolicy::Local)] {
            let (nodes, edges) = generator.line(num_nodes, ips, 500, quanta_ns);
            let name = format!("barrier_policy_{policy_name}");
            let config = FederationConfig::global_barrier(quanta_ns).with_barrier_policy(policy);
            let result = self.bench_federation(&name, config, nodes, edges, BenchGoal::TargetNs(100_000));
            results.push(result);
        }

        results
    }

    /// Run the full benchmark suite.
    pub fn run_all(&mut self) -> Vec<BenchmarkResult> {
        if self.verbose {
            println!("=== Running Full Benchmark Suite ===");
        }

        let mut all_results = Vec::new();
        all_results.extend(self.run_node_scaling(&[2, 4, 8, 16], 250_000.0 / 4.0, 500));
        all_results.extend(self.run_latency_scaling(&[200, 500, 1_000, 2_000], 5e6));
        all_results.extend(self.run_barrier_policy_comparison(3, 5e8, 1_000));
        all_results
    }

    /// Run a quick benchmark (for testing)
    pub fn run_quick(&mut self) -> Vec<BenchmarkResult> {
        if self.verbose {
            println!("=== Running Quick Benchmark ===");
        }

        let generator = crate::generators::ScenarioGenerator::with_seed(self.seed);
        let mut results = Vec::new();

        let (nodes, edges) = generator.node_pair(5e6, 1_000, 500);
        let config = FederationConfig::global_barrier(500);
        results.push(self.bench_federation("quick_pair", config, nodes, edges, BenchGoal::TargetNs(10_000)));

        let (nodes, edges) = generator.fully_connected_mesh(4, 62_500.0, 500);
        let config = FederationConfig::global_barrier(500);
        results.push(self.bench_federation("quick_mesh", config, nodes, edges, BenchGoal::TargetNs(10_000)));

        results
    }

    // ========================================================================
    // Results
    // ========================================================================

    /// Get all results
    pub fn results(&self) -> &[BenchmarkResult] {
        &self.results
    }

    /// Clear results
    pub fn clear(&mut self) {
        self.results.clear();
    }

    /// Get statistics
    pub fn statistics(&self) -> BenchmarkStatistics {
        BenchmarkStatistics::from_results(&self.results)
    }
}

impl Default for BenchSuite {
    fn default() -> Self {
        Self::new()
    }
}

/// Benchmark statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkStatistics {
    /// Number of benchmarks
    pub count: usize,

    /// Average reported host time (ns)
    pub avg_host_ns: f64,

    /// Maximum reported host time (ns)
    pub max_host_ns: u64,

    /// Minimum reported host time (ns)
    pub min_host_ns: u64,

    /// Average execution time (ms)
    pub avg_time_ms: f64,

    /// Total execution time (ms)
    pub total_time_ms: u64,
}

impl BenchmarkStatistics {
    /// Compute statistics from results
    pub fn from_results(results: &[BenchmarkResult]) -> Self {
        if results.is_empty() {
            return Self {
                count: 0,
                avg_host_ns: 0.0,
                max_host_ns: 0,
                min_host_ns: 0,
                avg_time_ms: 0.0,
                total_time_ms: 0,
            };
        }

        let count = results.len();
        let host_ns_values: Vec<u64> = results.iter().map(|r| r.host_ns).collect();
        let times: Vec<u64> = results.iter().map(|r| r.time_ms).collect();

        Self {
            count,
            avg_host_ns: host_ns_values.iter().sum::<u64>() as f64 / count as f64,
            max_host_ns: *host_ns_values.iter().max().expect("non-empty"),
            min_host_ns: *host_ns_values.iter().min().expect("non-empty"),
            avg_time_ms: times.iter().sum::<u64>() as f64 / count as f64,
            total_time_ms: times.iter().sum(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bench_suite_new() {
        let suite = BenchSuite::new();
        assert!(suite.results().is_empty());
    }

    #[test]
    fn test_bench_federation() {
        let generator = crate::generators::ScenarioGenerator::with_seed(42);
        let (nodes, edges) = generator.node_pair(5e6, 1_000, 500);
        let config = FederationConfig::global_barrier(500);

        let mut suite = BenchSuite::with_seed(42);
        let result = suite.bench_federation("test", config, nodes, edges, BenchGoal::TargetNs(10_000));

        assert_eq!(result.num_nodes, 2);
        assert!(result.host_ns > 0);
    }

    #[test]
    fn test_run_quick() {
        let mut suite = BenchSuite::with_seed(42);
        let results = suite.run_quick();
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn test_node_scaling() {
        let mut suite = BenchSuite::with_seed(42);
        let results = suite.run_node_scaling(&[2, 3, 4], 62_500.0, 500);
        assert_eq!(results.len(), 3);
    }

    #[test]
    fn test_latency_scaling() {
        let mut suite = BenchSuite::with_seed(42);
        let results = suite.run_latency_scaling(&[200, 500], 5e6);
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn test_barrier_policy_comparison() {
        let mut suite = BenchSuite::with_seed(42);
        let results = suite.run_barrier_policy_comparison(3, 5e8, 1_000);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].barrier_policy, BarrierPolicy::Global);
        assert_eq!(results[1].barrier_policy, BarrierPolicy::Local);
    }

    #[test]
    fn test_statistics() {
        let mut suite = BenchSuite::with_seed(42);
        suite.run_quick();

        let stats = suite.statistics();
        assert_eq!(stats.count, 2);
        assert!(stats.max_host_ns >= stats.min_host_ns);
    }

    #[test]
    fn test_empty_statistics() {
        let suite = BenchSuite::new();
        let stats = suite.statistics();
        assert_eq!(stats.count, 0);
    }

    #[test]
    fn test_clear() {
        let mut suite = BenchSuite::with_seed(42);
        suite.run_quick();
        assert!(!suite.results().is_empty());
        suite.clear();
        assert!(suite.results().is_empty());
    }
}
