//! Event-log column mapping.
//!
//! Tells the backend which CSV column holds each field the processing
//! engines need. Sent as a JSON string in the `eventLogColumnMapping`
//! form field.

use serde::{Deserialize, Serialize};

/// Semantic event-log field a column can be mapped to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventLogField {
    CaseId,
    Activity,
    Resource,
    StartTimestamp,
    EndTimestamp,
}

impl EventLogField {
    pub const ALL: [EventLogField; 5] = [
        EventLogField::CaseId,
        EventLogField::Activity,
        EventLogField::Resource,
        EventLogField::StartTimestamp,
        EventLogField::EndTimestamp,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            EventLogField::CaseId => "Case ID",
            EventLogField::Activity => "Activity",
            EventLogField::Resource => "Resource",
            EventLogField::StartTimestamp => "Start timestamp",
            EventLogField::EndTimestamp => "End timestamp",
        }
    }
}

/// Column name for every [`EventLogField`]. Empty means "not set".
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMapping {
    #[serde(rename = "case")]
    pub case_id: String,
    pub activity: String,
    pub resource: String,
    #[serde(rename = "start_time")]
    pub start_timestamp: String,
    #[serde(rename = "end_time")]
    pub end_timestamp: String,
}

impl ColumnMapping {
    pub fn get(&self, field: EventLogField) -> &str {
        match field {
            EventLogField::CaseId => &self.case_id,
            EventLogField::Activity => &self.activity,
            EventLogField::Resource => &self.resource,
            EventLogField::StartTimestamp => &self.start_timestamp,
            EventLogField::EndTimestamp => &self.end_timestamp,
        }
    }

    pub fn set(&mut self, field: EventLogField, column: impl Into<String>) {
        let column = column.into().trim().to_string();
        match field {
            EventLogField::CaseId => self.case_id = column,
            EventLogField::Activity => self.activity = column,
            EventLogField::Resource => self.resource = column,
            EventLogField::StartTimestamp => self.start_timestamp = column,
            EventLogField::EndTimestamp => self.end_timestamp = column,
        }
    }

    /// True when every field names a column.
    pub fn is_complete(&self) -> bool {
        EventLogField::ALL.iter().all(|f| !self.get(*f).is_empty())
    }

    /// Value of the `eventLogColumnMapping` form field.
    pub fn to_form_value(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_mapping() -> ColumnMapping {
        let mut mapping = ColumnMapping::default();
        mapping.set(EventLogField::CaseId, "case_id");
        mapping.set(EventLogField::Activity, "Activity");
        mapping.set(EventLogField::Resource, "Resource");
        mapping.set(EventLogField::StartTimestamp, "start_time");
        mapping.set(EventLogField::EndTimestamp, " end_time ");
        mapping
    }

    #[test]
    fn test_default_is_incomplete() {
        assert!(!ColumnMapping::default().is_complete());

        let mut mapping = full_mapping();
        mapping.set(EventLogField::Resource, "   ");
        assert!(!mapping.is_complete());
    }

    #[test]
    fn test_complete_mapping() {
        let mapping = full_mapping();
        assert!(mapping.is_complete());
        assert_eq!(mapping.get(EventLogField::EndTimestamp), "end_time");
    }

    #[test]
    fn test_form_value_uses_backend_keys() {
        let value = full_mapping().to_form_value().unwrap();
        let json: serde_json::Value = serde_json::from_str(&value).unwrap();
        assert_eq!(json["case"], "case_id");
        assert_eq!(json["start_time"], "start_time");
        assert_eq!(json["end_time"], "end_time");
        assert_eq!(json["activity"], "Activity");
    }
}
