//! Port definitions (trait interfaces for adapters)
//!
//! Ports define the boundary between the domain core and the host
//! environment. Adapter crates implement these traits against the real
//! host API; tests implement them in memory.

pub mod history;

pub use history::{ExitHistoryProvider, ExitRecordSource};
