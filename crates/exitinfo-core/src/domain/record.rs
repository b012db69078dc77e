//! Normalized termination records and their JSON wire format
//!
//! An [`ExitRecord`] is one row of host-retained history: constructed once
//! per raw record returned by a query, immutable afterwards, and gone when
//! the call that produced it ends — the host OS remains the system of
//! record. The serialized shape is pinned to the legacy wire format that
//! cross-runtime consumers already parse; see the field attributes below.

use serde::ser::Serializer;
use serde::Serialize;

use super::reason::reason_label;

/// A normalized historical process-termination record
///
/// Field-for-field view of one raw host record, with the reason label
/// derived during construction. There is deliberately no way to set
/// `reason_label` independently of `reason_code`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExitRecord {
    /// Epoch milliseconds at which the process ended
    timestamp: i64,
    /// OS process identifier at time of exit
    pid: i32,
    #[serde(rename = "realUid")]
    real_uid: i32,
    /// The legacy wire format stores the package UID (an integer) under the
    /// `packageName` key, as a quoted string. Preserved for compatibility;
    /// see DESIGN.md.
    #[serde(rename = "packageName", serialize_with = "uid_as_string")]
    package_uid: i32,
    /// Host-assigned process name; may be empty, never absent
    #[serde(rename = "processName")]
    process_name: String,
    #[serde(rename = "reason")]
    reason_code: i32,
    /// Derived from `reason_code` in the constructor
    #[serde(rename = "reasonString")]
    reason_label: String,
    /// Host process-importance tier at time of exit
    importance: i32,
    /// Proportional set size, 0 if the host did not record it
    pss: i64,
    /// Resident set size, 0 if the host did not record it
    rss: i64,
    /// Free-form host-supplied detail
    #[serde(serialize_with = "text_or_empty")]
    description: Option<String>,
    /// Raw exit status or signal value
    status: i32,
    #[serde(rename = "definingUid")]
    defining_uid: i32,
    /// First lines of the associated crash/ANR trace, if one was readable
    #[serde(rename = "traceData", skip_serializing_if = "trace_is_empty")]
    trace_log: Option<String>,
}

impl ExitRecord {
    /// Creates a record from the fields every raw record carries
    ///
    /// The reason label is derived here and is consistent with
    /// `reason_code` for the lifetime of the record. Remaining fields
    /// default to zero/empty and are filled in with the `with_*` builders.
    #[must_use]
    pub fn new(timestamp: i64, pid: i32, reason_code: i32) -> Self {
        Self {
            timestamp,
            pid,
            real_uid: 0,
            package_uid: 0,
            process_name: String::new(),
            reason_code,
            reason_label: reason_label(reason_code),
            importance: 0,
            pss: 0,
            rss: 0,
            description: None,
            status: 0,
            defining_uid: 0,
            trace_log: None,
        }
    }

    /// Sets the owning user identifiers
    #[must_use]
    pub fn with_uids(mut self, real_uid: i32, package_uid: i32, defining_uid: i32) -> Self {
        self.real_uid = real_uid;
        self.package_uid = package_uid;
        self.defining_uid = defining_uid;
        self
    }

    /// Sets the OS-assigned process name
    #[must_use]
    pub fn with_process_name(mut self, process_name: impl Into<String>) -> Self {
        self.process_name = process_name.into();
        self
    }

    /// Sets the host importance tier
    #[must_use]
    pub fn with_importance(mut self, importance: i32) -> Self {
        self.importance = importance;
        self
    }

    /// Sets the memory measurements taken at exit
    #[must_use]
    pub fn with_memory(mut self, pss: i64, rss: i64) -> Self {
        self.pss = pss;
        self.rss = rss;
        self
    }

    /// Sets the raw exit status / signal value
    #[must_use]
    pub fn with_status(mut self, status: i32) -> Self {
        self.status = status;
        self
    }

    /// Sets the host-supplied description
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the extracted trace text
    #[must_use]
    pub fn with_trace_log(mut self, trace_log: impl Into<String>) -> Self {
        self.trace_log = Some(trace_log.into());
        self
    }

    /// Epoch milliseconds at which the process ended
    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    /// OS process identifier at time of exit
    pub fn pid(&self) -> i32 {
        self.pid
    }

    /// Real UID of the process
    pub fn real_uid(&self) -> i32 {
        self.real_uid
    }

    /// UID of the owning package
    pub fn package_uid(&self) -> i32 {
        self.package_uid
    }

    /// OS-assigned process name (empty if the host supplied none)
    pub fn process_name(&self) -> &str {
        &self.process_name
    }

    /// Raw termination-reason code
    pub fn reason_code(&self) -> i32 {
        self.reason_code
    }

    /// Human-readable reason label, always consistent with the code
    pub fn reason_label(&self) -> &str {
        &self.reason_label
    }

    /// Host importance tier at time of exit
    pub fn importance(&self) -> i32 {
        self.importance
    }

    /// Proportional set size at time of exit
    pub fn pss(&self) -> i64 {
        self.pss
    }

    /// Resident set size at time of exit
    pub fn rss(&self) -> i64 {
        self.rss
    }

    /// Host-supplied detail, if any
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Raw exit status / signal value
    pub fn status(&self) -> i32 {
        self.status
    }

    /// UID that defined the process
    pub fn defining_uid(&self) -> i32 {
        self.defining_uid
    }

    /// Extracted trace text, if a stream was present and readable
    pub fn trace_log(&self) -> Option<&str> {
        self.trace_log.as_deref()
    }

    /// Serializes this record as one JSON object in the legacy wire format
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Serializes a sequence of records as a JSON array (`[]` when empty)
pub fn to_json_array(records: &[ExitRecord]) -> serde_json::Result<String> {
    serde_json::to_string(records)
}

/// The wire format carries the package UID as a quoted string
fn uid_as_string<S: Serializer>(uid: &i32, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(uid)
}

/// Absent text fields serialize as `""`, never as `null`
fn text_or_empty<S: Serializer>(
    text: &Option<String>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(text.as_deref().unwrap_or(""))
}

/// `traceData` is omitted from the wire entirely unless non-empty
fn trace_is_empty(trace_log: &Option<String>) -> bool {
    trace_log.as_deref().map_or(true, str::is_empty)
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;

    fn sample_record() -> ExitRecord {
        ExitRecord::new(1_700_000_000_000, 4242, 4)
            .with_uids(10180, 10180, 10180)
            .with_process_name("com.example.app")
            .with_importance(100)
            .with_memory(52_428, 104_856)
            .with_status(0)
            .with_description("crashed in onCreate")
    }

    #[test]
    fn test_label_derived_from_code() {
        let record = ExitRecord::new(0, 1, 6);
        assert_eq!(record.reason_code(), 6);
        assert_eq!(record.reason_label(), "ANR");

        let unmapped = ExitRecord::new(0, 1, 77);
        assert_eq!(unmapped.reason_label(), "Unknown (77)");
    }

    #[test]
    fn test_builder_sets_all_fields() {
        let record = sample_record().with_trace_log("line one\nline two\n");

        assert_eq!(record.timestamp(), 1_700_000_000_000);
        assert_eq!(record.pid(), 4242);
        assert_eq!(record.real_uid(), 10180);
        assert_eq!(record.package_uid(), 10180);
        assert_eq!(record.process_name(), "com.example.app");
        assert_eq!(record.importance(), 100);
        assert_eq!(record.pss(), 52_428);
        assert_eq!(record.rss(), 104_856);
        assert_eq!(record.description(), Some("crashed in onCreate"));
        assert_eq!(record.status(), 0);
        assert_eq!(record.defining_uid(), 10180);
        assert_eq!(record.trace_log(), Some("line one\nline two\n"));
    }

    #[test]
    fn test_wire_format_keys_and_types() {
        let json = sample_record().to_json().unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object["timestamp"], 1_700_000_000_000_i64);
        assert_eq!(object["pid"], 4242);
        assert_eq!(object["realUid"], 10180);
        // Legacy quirk: packageName carries the package UID as a string
        assert_eq!(object["packageName"], "10180");
        assert_eq!(object["processName"], "com.example.app");
        assert_eq!(object["reason"], 4);
        assert_eq!(object["reasonString"], "Crash (Java)");
        assert_eq!(object["importance"], 100);
        assert_eq!(object["pss"], 52_428);
        assert_eq!(object["rss"], 104_856);
        assert_eq!(object["description"], "crashed in onCreate");
        assert_eq!(object["status"], 0);
        assert_eq!(object["definingUid"], 10180);
        assert!(!object.contains_key("traceData"));
        assert_eq!(object.len(), 13);
    }

    #[test]
    fn test_trace_data_present_when_non_empty() {
        let json = sample_record().with_trace_log("frame #0\n").to_json().unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["traceData"], "frame #0\n");
        assert_eq!(value.as_object().unwrap().len(), 14);
    }

    #[test]
    fn test_trace_data_omitted_when_empty() {
        let json = sample_record().with_trace_log("").to_json().unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();

        assert!(!value.as_object().unwrap().contains_key("traceData"));
    }

    #[test]
    fn test_absent_description_serializes_as_empty_string() {
        let json = ExitRecord::new(0, 1, 0).to_json().unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["description"], "");
        assert_eq!(value["processName"], "");
    }

    #[test]
    fn test_escaping_round_trips() {
        let record = ExitRecord::new(0, 1, 2)
            .with_process_name("weird\"name")
            .with_description("line one\nline two\rwith \"quotes\"")
            .with_trace_log("at Foo.bar(\"arg\")\n\tat Baz.qux\n");

        let json = record.to_json().unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["processName"], "weird\"name");
        assert_eq!(value["description"], "line one\nline two\rwith \"quotes\"");
        assert_eq!(value["traceData"], "at Foo.bar(\"arg\")\n\tat Baz.qux\n");
    }

    #[test]
    fn test_json_array() {
        assert_eq!(to_json_array(&[]).unwrap(), "[]");

        let records = vec![
            ExitRecord::new(1, 10, 4),
            ExitRecord::new(2, 20, 6),
            ExitRecord::new(3, 30, 13),
        ];
        let json = to_json_array(&records).unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();
        let array = value.as_array().unwrap();

        assert_eq!(array.len(), 3);
        assert_eq!(array[0]["pid"], 10);
        assert_eq!(array[1]["reasonString"], "ANR");
        assert_eq!(array[2]["reason"], 13);
    }
}
