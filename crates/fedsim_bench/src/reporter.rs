//! Benchmark reporting
//!
//! Gantree: L8_Benchmark → Reporter
//!
//! Provides various output formats for federation benchmark results.

use crate::suite::{BenchGoal, BenchmarkResult, BenchmarkStatistics};
use serde_json;
use std::fmt::Write;

/// Report format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    /// Markdown table
    Markdown,
    /// JSON
    Json,
    /// CSV
    Csv,
    /// Plain text summary
    Text,
}

fn goal_label(goal: BenchGoal) -> String {
    match goal {
        BenchGoal::Instructions(n) => format!("{n} instr"),
        BenchGoal::TargetNs(n) => format!("{n} ns"),
    }
}

/// Benchmark reporter
/// Gantree: Reporter // 결과 리포팅
pub struct Reporter;

impl Reporter {
    // ========================================================================
    // Format Converters
    // ========================================================================

    /// Generate report in specified format
    pub fn report(results: &[BenchmarkResult], format: ReportFormat) -> String {
        match format {
            ReportFormat::Markdown => Self::to_markdown(results),
            ReportFormat::Json => Self::to_json(results),
            ReportFormat::Csv => Self::to_csv(results),
            ReportFormat::Text => Self::to_text(results),
        }
    }

    /// Convert results to Markdown table
    pub fn to_markdown(results: &[BenchmarkResult]) -> String {
        let mut output = String::new();

        writeln!(output, "# fedsim Benchmark Results\n").unwrap();

        // Statistics
        let stats = BenchmarkStatistics::from_results(results);
        writeln!(output, "## Summary\n").unwrap();
        writeln!(output, "- **Benchmarks**: {}", stats.count).unwrap();
        writeln!(output, "- **Avg host_ns**: {:.0}", stats.avg_host_ns).unwrap();
        writeln!(output, "- **Max host_ns**: {}", stats.max_host_ns).unwrap();
        writeln!(
            output,
            "- **Total Time**: {:.2}s\n",
            stats.total_time_ms as f64 / 1000.0
        )
        .unwrap();

        // Results table
        writeln!(output, "## Detailed Results\n").unwrap();
        writeln!(output, "| Name | Nodes | Barrier | Goal | host_ns | Time(ms) |").unwrap();
        writeln!(output, "|------|-------|---------|------|---------|----------|").unwrap();

        for r in results {
            writeln!(
                output,
                "| {} | {} | {:?} | {} | {} | {} |",
                r.name,
                r.num_nodes,
                r.barrier_policy,
                goal_label(r.goal),
                r.host_ns,
                r.time_ms
            )
            .unwrap();
        }

        output
    }

    /// Convert results to JSON
    pub fn to_json(results: &[BenchmarkResult]) -> String {
        let stats = BenchmarkStatistics::from_results(results);

        let report = serde_json::json!({
            "statistics": stats,
            "results": results,
        });

        serde_json::to_string_pretty(&report).unwrap_or_else(|_| "{}".to_string())
    }

    /// Convert results to CSV
    pub fn to_csv(results: &[BenchmarkResult]) -> String {
        let mut output = String::new();

        writeln!(output, "name,num_nodes,barrier_policy,goal,host_ns,time_ms").unwrap();

        for r in results {
            writeln!(
                output,
                "{},{},{:?},{},{},{}",
                r.name,
                r.num_nodes,
                r.barrier_policy,
                goal_label(r.goal),
                r.host_ns,
                r.time_ms
            )
            .unwrap();
        }

        output
    }

    /// Convert results to plain text summary
    pub fn to_text(results: &[BenchmarkResult]) -> String {
        let mut output = String::new();
        let stats = BenchmarkStatistics::from_results(results);

        writeln!(output, "fedsim Benchmark Results").unwrap();
        writeln!(output, "========================\n").unwrap();

        writeln!(output, "Summary:").unwrap();
        writeln!(output, "  Benchmarks run: {}", stats.count).unwrap();
        writeln!(output, "  Average host_ns: {:.0}", stats.avg_host_ns).unwrap();
        writeln!(output, "  Max host_ns: {}", stats.max_host_ns).unwrap();
        writeln!(output, "  Min host_ns: {}", stats.min_host_ns).unwrap();
        writeln!(
            output,
            "  Total time: {:.2}s\n",
            stats.total_time_ms as f64 / 1000.0
        )
        .unwrap();

        writeln!(output, "Individual Results:").unwrap();
        for r in results {
            writeln!(
                output,
                "  {} ({} nodes, {:?} barrier, goal={}): host_ns={}, {}ms",
                r.name,
                r.num_nodes,
                r.barrier_policy,
                goal_label(r.goal),
                r.host_ns,
                r.time_ms
            )
            .unwrap();
        }

        output
    }

    // ========================================================================
    // Specialized Reports
    // ========================================================================

    /// Generate comparison report between two result sets
    pub fn comparison_report(baseline: &[BenchmarkResult], optimized: &[BenchmarkResult]) -> String {
        let mut output = String::new();

        writeln!(output, "# fedsim Comparison Report\n").unwrap();

        let baseline_stats = BenchmarkStatistics::from_results(baseline);
        let optimized_stats = BenchmarkStatistics::from_results(optimized);

        writeln!(output, "## Statistics Comparison\n").unwrap();
        writeln!(output, "| Metric | Baseline | Optimized | Change |").unwrap();
        writeln!(output, "|--------|----------|-----------|--------|").unwrap();

        writeln!(
            output,
            "| Avg host_ns | {:.0} | {:.0} | {:.0} |",
            baseline_stats.avg_host_ns,
            optimized_stats.avg_host_ns,
            optimized_stats.avg_host_ns - baseline_stats.avg_host_ns
        )
        .unwrap();

        writeln!(
            output,
            "| Avg Time (ms) | {:.0} | {:.0} | {:.0} |",
            baseline_stats.avg_time_ms,
            optimized_stats.avg_time_ms,
            optimized_stats.avg_time_ms - baseline_stats.avg_time_ms
        )
        .unwrap();

        output
    }

    /// Generate a node-count scaling report.
    pub fn node_scaling_report(results: &[BenchmarkResult]) -> String {
        let mut output = String::new();

        writeln!(output, "# Node Scaling Analysis\n").unwrap();
        writeln!(output, "| Nodes | host_ns | Time(ms) | host_ns/node |").unwrap();
        writeln!(output, "|-------|---------|----------|--------------|").unwrap();

        for r in results {
            let per_node = r.host_ns as f64 / r.num_nodes as f64;
            writeln!(
                output,
                "| {} | {} | {} | {:.1} |",
                r.num_nodes, r.host_ns, r.time_ms, per_node
            )
            .unwrap();
        }

        output
    }

    /// Generate a barrier-policy comparison report.
    pub fn barrier_policy_report(results: &[BenchmarkResult]) -> String {
        let mut output = String::new();

        writeln!(output, "# Barrier Policy Analysis\n").unwrap();
        writeln!(output, "| Policy | host_ns | Time(ms) |").unwrap();
        writeln!(output, "|--------|---------|----------|").unwrap();

        for r in results {
            writeln!(output, "| {:?} | {} | {} |", r.barrier_policy, r.host_ns, r.time_ms).unwrap();
        }

        output
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use fedsim_schedule::BarrierPolicy;

    fn make_test_results() -> Vec<BenchmarkResult> {
        vec![
            BenchmarkResult {
                name: "test1".to_string(),
                num_nodes: 2,
                barrier_policy: BarrierPolicy::Global,
                goal: BenchGoal::TargetNs(10_000),
                host_ns: 100_000,
                time_ms: 5,
            },
            BenchmarkResult {
                name: "test2".to_string(),
                num_nodes: 4,
                barrier_policy: BarrierPolicy::Local,
                goal: BenchGoal::Instructions(1_000_000),
                host_ns: 250_000,
                time_ms: 12,
            },
        ]
    }

    #[test]
    fn test_to_markdown() {
        let results = make_test_results();
        let md = Reporter::to_markdown(&results);

        assert!(md.contains("# fedsim Benchmark Results"));
        assert!(md.contains("| Name |"));
        assert!(md.contains("test1"));
        assert!(md.contains("test2"));
    }

    #[test]
    fn test_to_json() {
        let results = make_test_results();
        let json = Reporter::to_json(&results);

        assert!(json.contains("\"statistics\""));
        assert!(json.contains("\"results\""));
        assert!(json.contains("test1"));
    }

    #[test]
    fn test_to_csv() {
        let results = make_test_results();
        let csv = Reporter::to_csv(&results);

        assert!(csv.contains("name,num_nodes"));
        assert!(csv.contains("test1,2"));
        assert!(csv.contains("test2,4"));
    }

    #[test]
    fn test_to_text() {
        let results = make_test_results();
        let text = Reporter::to_text(&results);

        assert!(text.contains("fedsim Benchmark Results"));
        assert!(text.contains("Summary:"));
        assert!(text.contains("test1"));
    }

    #[test]
    fn test_report_format() {
        let results = make_test_results();

        let md = Reporter::report(&results, ReportFormat::Markdown);
        assert!(md.contains("# fedsim"));

        let json = Reporter::report(&results, ReportFormat::Json);
        assert!(json.contains("{"));

        let csv = Reporter::report(&results, ReportFormat::Csv);
        assert!(csv.contains(","));
    }

    #[test]
    fn test_comparison_report() {
        let baseline = vec![make_test_results()[0].clone()];
        let optimized = vec![make_test_results()[1].clone()];

        let report = Reporter::comparison_report(&baseline, &optimized);

        assert!(report.contains("Comparison Report"));
        assert!(report.contains("Baseline"));
        assert!(report.contains("Optimized"));
    }

    #[test]
    fn test_node_scaling_report() {
        let results = make_test_results();
        let report = Reporter::node_scaling_report(&results);

        assert!(report.contains("Node Scaling"));
        assert!(report.contains("| 2 |"));
        assert!(report.contains("| 4 |"));
    }

    #[test]
    fn test_barrier_policy_report() {
        let results = make_test_results();
        let report = Reporter::barrier_policy_report(&results);

        assert!(report.contains("Barrier Policy"));
        assert!(report.contains("Global"));
        assert!(report.contains("Local"));
    }

    #[test]
    fn test_empty_results() {
        let results: Vec<BenchmarkResult> = vec![];

        let md = Reporter::to_markdown(&results);
        assert!(md.contains("Benchmarks**: 0"));

        let json = Reporter::to_json(&results);
        assert!(json.contains("\"count\": 0"));
    }
}
