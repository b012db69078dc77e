//! Bridge service implementation
//!
//! `ExitInfoBridge` is the outbound boundary for callers that cannot hold
//! Rust types: every result is a `String` (or `None`). Embedding runtimes
//! typically initialize in stages, so the host handle is late-bindable;
//! queries made before binding degrade to `None` rather than failing.

use std::sync::Arc;

use exitinfo_core::config::ExitInfoConfig;
use exitinfo_core::domain::{reason_label, to_json_array, PackageName};
use exitinfo_core::ports::ExitHistoryProvider;
use exitinfo_core::usecases::ExitHistoryQuery;

/// String-valued facade over [`ExitHistoryQuery`]
///
/// Owns one [`ExitInfoConfig`] per instance — "set once, reuse across
/// calls" without process-wide state. Callers with concurrent access wrap
/// the bridge in their runtime's synchronization primitive; the bridge
/// itself takes `&mut self` only for configuration changes.
pub struct ExitInfoBridge {
    provider: Option<Arc<dyn ExitHistoryProvider>>,
    config: ExitInfoConfig,
}

impl ExitInfoBridge {
    /// Creates an unbound bridge; queries return `None` until a host
    /// facility is bound
    #[must_use]
    pub fn new() -> Self {
        Self {
            provider: None,
            config: ExitInfoConfig::new(),
        }
    }

    /// Creates a bridge bound to a host facility
    #[must_use]
    pub fn with_provider(provider: Arc<dyn ExitHistoryProvider>) -> Self {
        Self {
            provider: Some(provider),
            config: ExitInfoConfig::new(),
        }
    }

    /// Binds (or replaces) the host facility handle
    pub fn bind_provider(&mut self, provider: Arc<dyn ExitHistoryProvider>) {
        self.provider = Some(provider);
    }

    /// Whether a host facility is currently bound
    pub fn is_bound(&self) -> bool {
        self.provider.is_some()
    }

    /// Sets the package scope used by all queries
    ///
    /// Invalid names (empty, whitespace) are rejected with a warning and
    /// leave the current scope unchanged — the bridge surface never errors.
    pub fn set_package_name(&mut self, package_name: &str) {
        match PackageName::new(package_name) {
            Ok(name) => self.config.set_package_name(Some(name)),
            Err(e) => {
                tracing::warn!(error = %e, "Rejected package name, keeping previous scope");
            }
        }
    }

    /// JSON array of all records in scope; `None` when unbound
    pub fn get_all_as_json(&self) -> Option<String> {
        let records = self.query()?.all_records();
        json_or_none(to_json_array(&records))
    }

    /// JSON object for the most recent record; `None` when unbound or
    /// when history is empty
    pub fn get_latest_as_json(&self) -> Option<String> {
        let record = self.query()?.latest_record()?;
        json_or_none(record.to_json())
    }

    /// JSON array of managed and native crashes; `None` when unbound
    pub fn get_crashes_as_json(&self) -> Option<String> {
        let records = self.query()?.crashes();
        json_or_none(to_json_array(&records))
    }

    /// JSON array of ANR terminations; `None` when unbound
    pub fn get_anrs_as_json(&self) -> Option<String> {
        let records = self.query()?.anrs();
        json_or_none(to_json_array(&records))
    }

    /// Human-readable summary report; `None` when unbound
    pub fn get_summary_report(&self) -> Option<String> {
        Some(self.query()?.summary_report())
    }

    /// Human-readable label for a raw reason code
    #[must_use]
    pub fn reason_label(&self, reason_code: i32) -> String {
        reason_label(reason_code)
    }

    fn query(&self) -> Option<ExitHistoryQuery> {
        let provider = self.provider.as_ref()?;
        Some(ExitHistoryQuery::new(
            Arc::clone(provider),
            self.config.clone(),
        ))
    }
}

impl Default for ExitInfoBridge {
    fn default() -> Self {
        Self::new()
    }
}

/// Serialization failure degrades to `None` with a warning
fn json_or_none(result: serde_json::Result<String>) -> Option<String> {
    match result {
        Ok(json) => Some(json),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to serialize exit records");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unbound_bridge_returns_none() {
        let bridge = ExitInfoBridge::new();

        assert!(!bridge.is_bound());
        assert!(bridge.get_all_as_json().is_none());
        assert!(bridge.get_latest_as_json().is_none());
        assert!(bridge.get_crashes_as_json().is_none());
        assert!(bridge.get_anrs_as_json().is_none());
        assert!(bridge.get_summary_report().is_none());
    }

    #[test]
    fn test_reason_label_works_without_binding() {
        let bridge = ExitInfoBridge::new();

        assert_eq!(bridge.reason_label(6), "ANR");
        assert_eq!(bridge.reason_label(42), "Unknown (42)");
    }
}
