//! Use cases orchestrating domain entities through port interfaces

pub mod normalize;
pub mod query_history;
pub mod summary_report;

pub use normalize::{normalize_record, MAX_TRACE_LINES};
pub use query_history::ExitHistoryQuery;
pub use summary_report::render_summary;
