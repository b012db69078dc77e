//! Host process-history port (driven/secondary port)
//!
//! This module defines the interface to the host facility that retains
//! historical process-termination records. The primary implementation
//! targets the platform activity/process manager of the embedding OS, but
//! the traits are host-agnostic: anything that can enumerate past exits and
//! hand out their fields can back the query engine.
//!
//! ## Design Notes
//!
//! - Uses `anyhow::Result` because errors at port boundaries are
//!   adapter-specific and don't need domain-level classification. The use
//!   case layer consumes them; no error propagates past it.
//! - Methods are synchronous. The host history call is a blocking
//!   request/response API and every operation in this system runs to
//!   completion within its invoking call.
//! - `ExitRecordSource` is a per-record accessor view, not a domain entity;
//!   use cases are responsible for normalizing it into an `ExitRecord`.

use std::io::{self, Read};

use crate::domain::PackageName;

/// Accessor view over one raw host termination record
///
/// Field accessors mirror the host record one-to-one and are infallible;
/// the host has already materialized these values. Only the trace stream
/// is lazy and fallible.
pub trait ExitRecordSource {
    /// Epoch milliseconds at which the process ended
    fn timestamp(&self) -> i64;

    /// OS process identifier at time of exit
    fn pid(&self) -> i32;

    /// Real UID of the process
    fn real_uid(&self) -> i32;

    /// UID of the owning package
    fn package_uid(&self) -> i32;

    /// OS-assigned process name, if the host recorded one
    fn process_name(&self) -> Option<String>;

    /// Raw termination-reason code
    fn reason_code(&self) -> i32;

    /// Host process-importance tier at time of exit
    fn importance(&self) -> i32;

    /// Proportional set size at time of exit (0 if unavailable)
    fn pss(&self) -> i64;

    /// Resident set size at time of exit (0 if unavailable)
    fn rss(&self) -> i64;

    /// Optional free-form host-supplied detail
    fn description(&self) -> Option<String>;

    /// Raw exit status or signal value
    fn status(&self) -> i32;

    /// UID that defined the process
    fn defining_uid(&self) -> i32;

    /// Opens the crash/ANR trace stream associated with this record
    ///
    /// `Ok(None)` means the host exposes no stream for this record;
    /// `Err` means a stream exists but could not be opened. Both degrade
    /// to "no trace data" during normalization.
    fn open_trace_stream(&self) -> io::Result<Option<Box<dyn Read + '_>>>;
}

/// Port trait for the host's process-history query facility
///
/// ## Implementation Notes
///
/// - Records must be returned in the host's recency order; the query
///   engine preserves it and never re-sorts.
/// - Adapters should surface host unavailability as an `Err`; the use case
///   layer degrades it to an empty result.
pub trait ExitHistoryProvider: Send + Sync {
    /// Fetches historical termination records
    ///
    /// # Arguments
    /// * `package_name` - scope filter; `None` defers to host-default scoping
    /// * `pid_filter` - restrict to one process id; `0` matches any pid
    /// * `max_records` - upper bound on results; `0` means unbounded
    fn historical_exit_records(
        &self,
        package_name: Option<&PackageName>,
        pid_filter: i32,
        max_records: usize,
    ) -> anyhow::Result<Vec<Box<dyn ExitRecordSource>>>;
}
