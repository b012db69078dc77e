//! Record normalization
//!
//! Converts one raw host record into an [`ExitRecord`], including bounded
//! extraction of the optional trace stream. Normalization never fails: any
//! field that cannot be derived degrades to its safe default, so one broken
//! record cannot abort a batch.

use std::io::{BufRead, BufReader, Read};

use crate::domain::ExitRecord;
use crate::ports::ExitRecordSource;

/// Hard cap on captured trace lines per record
pub const MAX_TRACE_LINES: usize = 100;

/// Normalizes one raw host record
///
/// Fields map one-to-one; the reason label is derived by the record
/// constructor; the trace stream, when present, is read up to
/// [`MAX_TRACE_LINES`] lines. Trace extraction failure degrades the single
/// field to absent and is reported through `tracing`, never to the caller.
pub fn normalize_record(source: &dyn ExitRecordSource) -> ExitRecord {
    let mut record = ExitRecord::new(source.timestamp(), source.pid(), source.reason_code())
        .with_uids(source.real_uid(), source.package_uid(), source.defining_uid())
        .with_process_name(source.process_name().unwrap_or_default())
        .with_importance(source.importance())
        .with_memory(source.pss(), source.rss())
        .with_status(source.status());

    if let Some(description) = source.description() {
        record = record.with_description(description);
    }
    if let Some(trace_log) = extract_trace(source) {
        record = record.with_trace_log(trace_log);
    }

    record
}

/// Bounded trace extraction; `None` on missing stream or any I/O failure
fn extract_trace(source: &dyn ExitRecordSource) -> Option<String> {
    let stream = match source.open_trace_stream() {
        Ok(Some(stream)) => stream,
        Ok(None) => return None,
        Err(e) => {
            tracing::warn!(pid = source.pid(), error = %e, "Failed to open trace stream");
            return None;
        }
    };

    match read_trace_capped(stream) {
        Ok(trace_log) => Some(trace_log),
        Err(e) => {
            tracing::warn!(pid = source.pid(), error = %e, "Failed to read trace data");
            None
        }
    }
}

/// Reads up to [`MAX_TRACE_LINES`] lines, each re-terminated with `\n`
///
/// The stream is dropped on every exit path, including the early cap.
fn read_trace_capped(stream: impl Read) -> std::io::Result<String> {
    let reader = BufReader::new(stream);
    let mut trace_log = String::new();
    for line in reader.lines().take(MAX_TRACE_LINES) {
        trace_log.push_str(&line?);
        trace_log.push('\n');
    }
    Ok(trace_log)
}
