//! Summary-report generation
//!
//! Renders a fixed-format, human-readable digest of a history snapshot:
//! total count, per-reason breakdown, and the most recent exits.

use std::collections::HashMap;
use std::fmt::{self, Write};

use chrono::{LocalResult, TimeZone, Utc};

use crate::domain::{reason_label, ExitRecord};

/// Number of records detailed in the "recent exits" section
const RECENT_EXITS: usize = 5;

/// Fixed response when the host has no history for the scope
const NO_EXIT_INFORMATION: &str = "No exit information available";

/// Renders the summary report for a history snapshot
///
/// Records are expected in host recency order; the recent-exits section
/// lists the first `min(5, len)` of them. Breakdown lines appear once per
/// distinct reason code with its occurrence count; their order is
/// unspecified.
pub fn render_summary(records: &[ExitRecord]) -> String {
    if records.is_empty() {
        return NO_EXIT_INFORMATION.to_string();
    }

    let mut report = String::new();
    // fmt::Write on a String cannot fail
    let _ = write_summary(&mut report, records);
    report
}

fn write_summary(w: &mut impl Write, records: &[ExitRecord]) -> fmt::Result {
    writeln!(w, "=== APPLICATION EXIT INFORMATION SUMMARY ===")?;
    writeln!(w, "Total exits recorded: {}", records.len())?;
    writeln!(w)?;

    let mut reason_counts: HashMap<i32, usize> = HashMap::new();
    for record in records {
        *reason_counts.entry(record.reason_code()).or_insert(0) += 1;
    }

    writeln!(w, "Exit reasons breakdown:")?;
    for (code, count) in &reason_counts {
        writeln!(w, "- {}: {}", reason_label(*code), count)?;
    }

    writeln!(w)?;
    writeln!(w, "=== RECENT EXITS (Last {RECENT_EXITS}) ===")?;
    for (index, record) in records.iter().take(RECENT_EXITS).enumerate() {
        writeln!(w, "Exit #{}:", index + 1)?;
        writeln!(w, "  Timestamp: {}", format_timestamp(record.timestamp()))?;
        writeln!(w, "  Reason: {}", record.reason_label())?;
        writeln!(
            w,
            "  Process: {} (PID: {})",
            record.process_name(),
            record.pid()
        )?;
        if let Some(description) = record.description().filter(|d| !d.is_empty()) {
            writeln!(w, "  Description: {description}")?;
        }
        writeln!(w)?;
    }

    Ok(())
}

/// Calendar rendering of an epoch-millisecond timestamp
///
/// Out-of-range values fall back to the raw millisecond count so the
/// report itself can never fail to render.
fn format_timestamp(millis: i64) -> String {
    match Utc.timestamp_millis_opt(millis) {
        LocalResult::Single(datetime) => datetime.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        _ => format!("{millis} ms"),
    }
}
