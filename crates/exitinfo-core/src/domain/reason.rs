//! Termination-reason classification
//!
//! Maps the host's integer termination-reason codes to the fixed English
//! labels used in summary reports and serialized records. The mapping is
//! total: codes outside the known set yield a synthesized `Unknown (<code>)`
//! label rather than an error, so classification can never fail.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Termination reasons reported by the host process-history facility
///
/// Discriminants match the host's raw code values, so a known code
/// round-trips through [`ExitReason::from_code`] and [`ExitReason::code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(i32)]
pub enum ExitReason {
    /// Reason could not be determined
    Unknown = 0,
    /// Process exited of its own accord
    ExitSelf = 1,
    /// Process was killed by an OS signal
    Signaled = 2,
    /// Process was reclaimed by the low-memory killer
    LowMemory = 3,
    /// Unhandled exception in managed code
    Crash = 4,
    /// Native crash (e.g. SIGSEGV, SIGABRT)
    CrashNative = 5,
    /// Application was not responding
    Anr = 6,
    /// Process failed during initialization
    InitializationFailure = 7,
    /// A runtime permission of the package changed
    PermissionChange = 8,
    /// Process exceeded its resource budget
    ExcessiveResourceUsage = 9,
    /// The user asked for the process to stop
    UserRequested = 10,
    /// The user force-stopped the owning package
    UserStopped = 11,
    /// A process this one depended on died
    DependencyDied = 12,
    /// Terminated for a reason the host does not further classify
    Other = 13,
}

impl ExitReason {
    /// All defined reasons, in code order
    pub const ALL: [ExitReason; 14] = [
        ExitReason::Unknown,
        ExitReason::ExitSelf,
        ExitReason::Signaled,
        ExitReason::LowMemory,
        ExitReason::Crash,
        ExitReason::CrashNative,
        ExitReason::Anr,
        ExitReason::InitializationFailure,
        ExitReason::PermissionChange,
        ExitReason::ExcessiveResourceUsage,
        ExitReason::UserRequested,
        ExitReason::UserStopped,
        ExitReason::DependencyDied,
        ExitReason::Other,
    ];

    /// Maps a raw host code to a defined reason, if there is one
    #[must_use]
    pub fn from_code(code: i32) -> Option<ExitReason> {
        match code {
            0 => Some(ExitReason::Unknown),
            1 => Some(ExitReason::ExitSelf),
            2 => Some(ExitReason::Signaled),
            3 => Some(ExitReason::LowMemory),
            4 => Some(ExitReason::Crash),
            5 => Some(ExitReason::CrashNative),
            6 => Some(ExitReason::Anr),
            7 => Some(ExitReason::InitializationFailure),
            8 => Some(ExitReason::PermissionChange),
            9 => Some(ExitReason::ExcessiveResourceUsage),
            10 => Some(ExitReason::UserRequested),
            11 => Some(ExitReason::UserStopped),
            12 => Some(ExitReason::DependencyDied),
            13 => Some(ExitReason::Other),
            _ => None,
        }
    }

    /// Returns the raw host code for this reason
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }

    /// Returns the fixed English label for this reason
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            ExitReason::Unknown => "Unknown",
            ExitReason::ExitSelf => "Exit Self",
            ExitReason::Signaled => "Signaled",
            ExitReason::LowMemory => "Low Memory",
            ExitReason::Crash => "Crash (Java)",
            ExitReason::CrashNative => "Crash (Native)",
            ExitReason::Anr => "ANR",
            ExitReason::InitializationFailure => "Initialization Failure",
            ExitReason::PermissionChange => "Permission Change",
            ExitReason::ExcessiveResourceUsage => "Excessive Resource Usage",
            ExitReason::UserRequested => "User Requested",
            ExitReason::UserStopped => "User Stopped",
            ExitReason::DependencyDied => "Dependency Died",
            ExitReason::Other => "Other",
        }
    }
}

impl fmt::Display for ExitReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Returns the human-readable label for any raw reason code
///
/// Total function: defined codes map to their fixed label, anything else
/// yields `Unknown (<code>)`. Every label in the system is derived through
/// this function so that records and reports can never disagree.
#[must_use]
pub fn reason_label(code: i32) -> String {
    match ExitReason::from_code(code) {
        Some(reason) => reason.label().to_string(),
        None => format!("Unknown ({code})"),
    }
}
