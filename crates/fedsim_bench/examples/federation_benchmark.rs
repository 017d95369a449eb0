//! fedsim Federation Benchmark
//!
//! Runs the scenarios documented for the federated quanta-barrier scheduler:
//! QEMU-style pairs, a gem5-style mesh scaling by node count, a barrier
//! policy comparison, and a link-latency scaling sweep.

use fedsim_bench::prelude::*;

fn main() {
    println!("╔══════════════════════════════════════════════════════════════════════╗");
    println!("║                fedsim Federation Benchmark Report                     ║");
    println!("╚══════════════════════════════════════════════════════════════════════╝\n");

    let seed = 42u64;
    let mut suite = BenchSuite::with_seed(seed);

    // =========================================================================
    // Benchmark 1: Node Scaling (S3-style gem5 mesh)
    // =========================================================================
    println!("═══════════════════════════════════════════════════════════════════════");
    println!("  BENCHMARK 1: Node Scaling (fully-connected gem5-style mesh)");
    println!("═══════════════════════════════════════════════════════════════════════\n");

    let node_counts = vec![2, 4, 8, 16, 32];
    let node_results = suite.run_node_scaling(&node_counts, 250_000.0 / 4.0, 500);

    println!("{}", Reporter::node_scaling_report(&node_results));

    // =========================================================================
    // Benchmark 2: Barrier Policy Comparison (S2-style three-node line)
    // =========================================================================
    println!("═══════════════════════════════════════════════════════════════════════");
    println!("  BENCHMARK 2: Barrier Policy Comparison (three-node line)");
    println!("═══════════════════════════════════════════════════════════════════════\n");

    let policy_results = suite.run_barrier_policy_comparison(3, 5e8, 1_000);
    println!("{}", Reporter::barrier_policy_report(&policy_results));

    // =========================================================================
    // Benchmark 3: Link Latency Scaling (QEMU-style pair)
    // =========================================================================
    println!("═══════════════════════════════════════════════════════════════════════");
    println!("  BENCHMARK 3: Link Latency Scaling (QEMU-style node pair)");
    println!("═══════════════════════════════════════════════════════════════════════\n");

    let latencies = vec![200, 500, 1_000, 2_000, 5_000];
    let latency_results = suite.run_latency_scaling(&latencies, 5e6);

    for r in &latency_results {
        println!(
            "  {} -> host_ns={}, time={}ms",
            r.name, r.host_ns, r.time_ms
        );
    }
    println!();

    // =========================================================================
    // Summary
    // =========================================================================
    println!("═══════════════════════════════════════════════════════════════════════");
    println!("  SUMMARY");
    println!("═══════════════════════════════════════════════════════════════════════\n");

    let stats = suite.statistics();
    println!("  Total benchmarks run: {}", stats.count);
    println!("  Average host_ns:      {:.0}", stats.avg_host_ns);
    println!("  Max host_ns:          {}", stats.max_host_ns);
    println!("  Total wall time:      {:.2}s", stats.total_time_ms as f64 / 1000.0);
    println!();

    println!("{}", Reporter::to_markdown(suite.results()));
}
