use std::path::Path;

use altmem_core::{render_individual_summary, render_merge_summary, FileRecord, RunStatistics};
use pretty_assertions::assert_eq;

fn init_logging() {
    altmem_logging::initialize_for_tests();
}

fn sample() -> RunStatistics {
    let mut stats = RunStatistics::new();
    stats.push(FileRecord::converted("a.xlf", Some("a.tmx".into()), 3));
    stats.push(FileRecord::failed("broken.xlf", "malformed XML: unexpected end of stream"));
    stats.push(FileRecord::converted("c.xlf", Some("c.tmx".into()), 6));
    stats
}

#[test]
fn totals_only_count_successful_records() {
    init_logging();
    let stats = sample();
    assert_eq!(stats.len(), 3);
    assert_eq!(stats.success_count(), 2);
    assert_eq!(stats.failure_count(), 1);
    assert_eq!(stats.total_tus(), 9);
    assert!(!stats.all_succeeded());
}

#[test]
fn shares_sum_to_one_hundred_when_total_is_positive() {
    init_logging();
    let mut stats = RunStatistics::new();
    stats.push(FileRecord::converted("a.xlf", None, 1));
    stats.push(FileRecord::converted("b.xlf", None, 1));
    stats.push(FileRecord::converted("c.xlf", None, 1));

    let sum: f64 = stats.shares().iter().sum();
    assert!((sum - 100.0).abs() < 1e-9, "sum was {sum}");
}

#[test]
fn shares_are_zero_when_nothing_was_extracted() {
    init_logging();
    let mut stats = RunStatistics::new();
    stats.push(FileRecord::converted("a.xlf", None, 0));
    stats.push(FileRecord::failed("b.xlf", "boom"));
    assert_eq!(stats.shares(), vec![0.0, 0.0]);
}

#[test]
fn individual_summary_lists_every_file_and_failure_cause() {
    init_logging();
    let text = render_individual_summary(&sample());
    assert!(text.contains("SUMMARY - INDIVIDUAL MODE"));
    assert!(text.contains("Files processed:  2/3"));
    assert!(text.contains("Total TUs:        9"));
    assert!(text.contains("a.tmx"));
    assert!(text.contains("FAILED"));
    assert!(text.contains("broken.xlf: malformed XML"));
}

#[test]
fn merge_summary_reports_percentages_and_output() {
    init_logging();
    let text = render_merge_summary(&sample(), Path::new("out/combined_3files_9tus.tmx"));
    assert!(text.contains("SUMMARY - MERGE MODE"));
    assert!(text.contains("Files combined:   3"));
    assert!(text.contains("combined_3files_9tus.tmx"));
    assert!(text.contains(" 33.3%"));
    assert!(text.contains(" 66.7%"));
    assert!(text.contains("  0.0%"));
}
