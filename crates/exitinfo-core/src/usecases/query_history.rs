//! Exit-history query use case
//!
//! Orchestrates retrieval of historical termination records from the host
//! facility: scoping, normalization, and the reason-based views. Every
//! operation is a pure function of the host's current history snapshot;
//! host unavailability degrades to an empty result, never an error.

use std::sync::Arc;

use crate::config::ExitInfoConfig;
use crate::domain::{ExitReason, ExitRecord, PackageName};
use crate::ports::ExitHistoryProvider;
use crate::usecases::normalize::normalize_record;
use crate::usecases::summary_report::render_summary;

/// Query engine over the host's termination history
///
/// Holds the host facility behind its port and the caller-owned scoping
/// configuration. Construction is the point where both are injected; the
/// engine itself carries no other state.
pub struct ExitHistoryQuery {
    provider: Arc<dyn ExitHistoryProvider>,
    config: ExitInfoConfig,
}

impl ExitHistoryQuery {
    /// Creates a query engine over the given host facility
    ///
    /// # Arguments
    ///
    /// * `provider` - Host process-history facility
    /// * `config` - Default scoping for unfiltered queries
    pub fn new(provider: Arc<dyn ExitHistoryProvider>, config: ExitInfoConfig) -> Self {
        Self { provider, config }
    }

    /// All records under the configured scope, in host recency order
    pub fn all_records(&self) -> Vec<ExitRecord> {
        self.records_filtered(self.config.package_name(), 0, 0)
    }

    /// Records under an explicit scope
    ///
    /// `package_name = None` defers to host-default scoping; `pid_filter = 0`
    /// matches any pid; `max_records = 0` is unbounded. Results keep the
    /// order the host supplied. Host failure yields an empty vector.
    pub fn records_filtered(
        &self,
        package_name: Option<&PackageName>,
        pid_filter: i32,
        max_records: usize,
    ) -> Vec<ExitRecord> {
        match self
            .provider
            .historical_exit_records(package_name, pid_filter, max_records)
        {
            Ok(sources) => sources
                .iter()
                .map(|source| normalize_record(source.as_ref()))
                .collect(),
            Err(e) => {
                tracing::warn!(error = %e, "Exit-history facility unavailable");
                Vec::new()
            }
        }
    }

    /// The most recent record, or `None` if history is empty
    pub fn latest_record(&self) -> Option<ExitRecord> {
        self.records_filtered(self.config.package_name(), 0, 1)
            .into_iter()
            .next()
    }

    /// Records whose reason code exactly matches `reason_code`
    pub fn records_by_reason(&self, reason_code: i32) -> Vec<ExitRecord> {
        let mut records = self.all_records();
        records.retain(|record| record.reason_code() == reason_code);
        records
    }

    /// Managed and native crashes, in one order-preserving pass
    pub fn crashes(&self) -> Vec<ExitRecord> {
        let mut records = self.all_records();
        records.retain(|record| {
            matches!(
                ExitReason::from_code(record.reason_code()),
                Some(ExitReason::Crash | ExitReason::CrashNative)
            )
        });
        records
    }

    /// Application-not-responding terminations
    pub fn anrs(&self) -> Vec<ExitRecord> {
        self.records_by_reason(ExitReason::Anr.code())
    }

    /// Human-readable summary of the configured scope's history
    pub fn summary_report(&self) -> String {
        render_summary(&self.all_records())
    }
}
