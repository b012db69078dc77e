//! Exitinfo Bridge - cross-runtime surface over the query engine
//!
//! Embedding runtimes (game engines, managed VMs, script hosts) consume
//! exit history as plain strings: JSON for records, prose for the summary
//! report. This crate provides that surface:
//!
//! - `ExitInfoBridge` - string-valued API with a late-bindable host handle
//!
//! Nothing here panics or returns an error. Per the degradation contract,
//! an unbound host handle yields `None`, an unreachable host yields empty
//! collections, and diagnostics go to `tracing` rather than return values.

pub mod service;

pub use service::ExitInfoBridge;
