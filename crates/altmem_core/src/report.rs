use std::fmt::Write;
use std::path::Path;

use crate::stats::RunStatistics;

const RULE_WIDTH: usize = 70;

/// Summary block for individual mode.
pub fn render_individual_summary(stats: &RunStatistics) -> String {
    let mut out = String::new();
    push_banner(&mut out, "SUMMARY - INDIVIDUAL MODE");
    let _ = writeln!(
        out,
        "Files processed:  {}/{}",
        stats.success_count(),
        stats.len()
    );
    let _ = writeln!(out, "Total TUs:        {}", stats.total_tus());

    if !stats.is_empty() {
        let _ = writeln!(out, "\nDetailed Statistics:");
        let _ = writeln!(
            out,
            "  {:<6} {:<40} {:<40} {:>6}",
            "Status", "Input File", "Output File", "TUs"
        );
        let _ = writeln!(
            out,
            "  {} {} {} {}",
            "-".repeat(6),
            "-".repeat(40),
            "-".repeat(40),
            "-".repeat(6)
        );
        for record in stats.records() {
            let output = record.output_name.as_deref().unwrap_or("FAILED");
            let _ = writeln!(
                out,
                "  {:<6} {:<40} {:<40} {:>6}",
                status_marker(record.is_success()),
                record.input_name,
                output,
                record.tu_count
            );
        }
        push_failures(&mut out, stats);
    }
    out
}

/// Summary block for merge mode, including each file's share of the total.
pub fn render_merge_summary(stats: &RunStatistics, output_path: &Path) -> String {
    let mut out = String::new();
    push_banner(&mut out, "SUMMARY - MERGE MODE");
    let _ = writeln!(out, "Files combined:   {}", stats.len());
    let _ = writeln!(out, "Total TUs:        {}", stats.total_tus());
    let _ = writeln!(out, "Output file:      {}", output_path.display());

    if !stats.is_empty() {
        let _ = writeln!(out, "\nContribution per file:");
        let _ = writeln!(
            out,
            "  {:<6} {:<50} {:>8} {:>6}",
            "Status", "File Name", "TUs", "%"
        );
        let _ = writeln!(
            out,
            "  {} {} {} {}",
            "-".repeat(6),
            "-".repeat(50),
            "-".repeat(8),
            "-".repeat(6)
        );
        for record in stats.records() {
            let _ = writeln!(
                out,
                "  {:<6} {:<50} {:>8} {:>5.1}%",
                status_marker(record.is_success()),
                record.input_name,
                record.tu_count,
                stats.share_of(record)
            );
        }
        push_failures(&mut out, stats);
    }
    out
}

fn push_banner(out: &mut String, title: &str) {
    let rule = "=".repeat(RULE_WIDTH);
    let _ = writeln!(out, "\n{rule}\n{title}\n{rule}");
}

fn push_failures(out: &mut String, stats: &RunStatistics) {
    if stats.failure_count() == 0 {
        return;
    }
    let _ = writeln!(out, "\nFailures:");
    for record in stats.records() {
        if let Some(reason) = &record.failure {
            let _ = writeln!(out, "  {}: {}", record.input_name, reason);
        }
    }
}

fn status_marker(success: bool) -> &'static str {
    if success {
        "OK"
    } else {
        "FAIL"
    }
}
