//! Camera Models
//!
//! Record types shared by every stage of the list pipeline, plus the
//! ingestion step that normalizes the API's loosely shaped JSON.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Sentinel shown for a camera without a recorder
pub const NO_RECORDER: &str = "N/A";

/// Status value that marks a camera as active
pub const ACTIVE_STATUS: &str = "Active";

/// Stable camera identifier.
///
/// The API sends ids as strings or integers; both normalize to the
/// decimal/string form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CameraId(String);

impl CameraId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CameraId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CameraId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<u64> for CameraId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl<'de> Deserialize<'de> for CameraId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum IdRepr {
            Text(String),
            Unsigned(u64),
            Signed(i64),
        }

        Ok(match IdRepr::deserialize(deserializer)? {
            IdRepr::Text(s) => CameraId(s),
            IdRepr::Unsigned(n) => CameraId(n.to_string()),
            IdRepr::Signed(n) => CameraId(n.to_string()),
        })
    }
}

/// Task column: either a count or a free-form description
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Tasks {
    Count(u64),
    Text(String),
}

impl Default for Tasks {
    fn default() -> Self {
        Tasks::Count(0)
    }
}

impl fmt::Display for Tasks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tasks::Count(n) => write!(f, "{}", n),
            Tasks::Text(s) => f.write_str(s),
        }
    }
}

/// Health grade of one health channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthGrade {
    Good,
    Degraded,
}

impl HealthGrade {
    /// `"A"` is the only healthy grade
    pub fn from_code(code: &str) -> Self {
        if code.trim() == "A" {
            HealthGrade::Good
        } else {
            HealthGrade::Degraded
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HealthGrade::Good => "good",
            HealthGrade::Degraded => "degraded",
        }
    }
}

/// Cloud and device health codes
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Health {
    #[serde(default, deserialize_with = "text_or_empty")]
    pub cloud: String,
    #[serde(default, deserialize_with = "text_or_empty")]
    pub device: String,
}

impl Health {
    pub fn cloud_grade(&self) -> HealthGrade {
        HealthGrade::from_code(&self.cloud)
    }

    pub fn device_grade(&self) -> HealthGrade {
        HealthGrade::from_code(&self.device)
    }
}

/// One monitored camera (canonical form, also the snapshot format)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CameraRecord {
    pub id: CameraId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub recorder: Option<String>,
    #[serde(default)]
    pub tasks: Tasks,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub health: Health,
}

impl CameraRecord {
    pub fn new(id: impl Into<CameraId>, name: &str, location: &str, status: &str) -> Self {
        Self {
            id: id.into(),
            name: name.to_string(),
            location: location.to_string(),
            recorder: None,
            tasks: Tasks::default(),
            status: status.to_string(),
            health: Health::default(),
        }
    }

    /// Recorder for display; missing or blank becomes `"N/A"`
    pub fn recorder_label(&self) -> &str {
        match self.recorder.as_deref() {
            Some(r) if !r.trim().is_empty() => r,
            _ => NO_RECORDER,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == ACTIVE_STATUS
    }
}

/// Record as the remote API sends it.
///
/// Display fields accept numbers and booleans as text; values of any other
/// shape are treated as absent.
#[derive(Debug, Clone, Deserialize)]
pub struct RawCameraRecord {
    #[serde(default)]
    pub id: Option<CameraId>,
    #[serde(rename = "_id", default)]
    pub legacy_id: Option<CameraId>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub recorder: Option<String>,
    #[serde(default, deserialize_with = "lenient_tasks")]
    pub tasks: Option<Tasks>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient_health")]
    pub health: Option<Health>,
}

impl RawCameraRecord {
    /// `id` wins over `_id`; None when the record has neither
    fn into_record(self) -> Option<CameraRecord> {
        let id = self.id.or(self.legacy_id)?;
        Some(CameraRecord {
            id,
            name: self.name.unwrap_or_default(),
            location: self.location.unwrap_or_default(),
            recorder: self.recorder,
            tasks: self.tasks.unwrap_or_default(),
            status: self.status.unwrap_or_default(),
            health: self.health.unwrap_or_default(),
        })
    }
}

/// Normalize API records: drop unreadable and id-less entries, keep the
/// first of duplicated ids.
pub fn ingest(raw: Vec<Value>) -> Vec<CameraRecord> {
    let mut seen = HashSet::new();
    let mut records = Vec::with_capacity(raw.len());
    for (index, value) in raw.into_iter().enumerate() {
        let entry = match RawCameraRecord::deserialize(value) {
            Ok(entry) => entry,
            Err(e) => {
                log::warn!("[ingest] Skipping unreadable camera at index {}: {}", index, e);
                continue;
            }
        };
        let Some(record) = entry.into_record() else {
            log::warn!("[ingest] Skipping camera at index {} without id", index);
            continue;
        };
        if !seen.insert(record.id.clone()) {
            log::warn!("[ingest] Skipping duplicate camera id {}", record.id);
            continue;
        }
        records.push(record);
    }
    records
}

/// Strings as is, numbers and booleans in their JSON spelling
fn value_to_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(Option::<Value>::deserialize(deserializer)?.and_then(value_to_text))
}

fn text_or_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(lenient_text(deserializer)?.unwrap_or_default())
}

/// Non-negative integers count; any other number or text is descriptive
fn lenient_tasks<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Tasks>, D::Error> {
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => Some(match n.as_u64() {
            Some(count) => Tasks::Count(count),
            None => Tasks::Text(n.to_string()),
        }),
        Some(other) => value_to_text(other).map(Tasks::Text),
        None => None,
    })
}

fn lenient_health<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Health>, D::Error> {
    Ok(Option::<Value>::deserialize(deserializer)?.and_then(|v| Health::deserialize(v).ok()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_raw(json: &str) -> Vec<Value> {
        serde_json::from_str(json).expect("valid JSON array")
    }

    #[test]
    fn test_ingest_normalizes_id_spellings() {
        let raw = parse_raw(
            r#"[
                {"_id": "abc", "name": "Lobby"},
                {"id": 42, "name": "Dock"},
                {"id": "7", "_id": "ignored", "name": "Gate"}
            ]"#,
        );
        let records = ingest(raw);

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].id.as_str(), "abc");
        assert_eq!(records[1].id.as_str(), "42");
        assert_eq!(records[2].id.as_str(), "7");
    }

    #[test]
    fn test_ingest_drops_missing_and_duplicate_ids() {
        let raw = parse_raw(
            r#"[
                {"id": 1, "name": "First"},
                {"name": "No id"},
                {"_id": 1, "name": "Duplicate"}
            ]"#,
        );
        let records = ingest(raw);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "First");
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let raw = parse_raw(r#"[{"id": 3, "name": null, "health": {"cloud": null, "device": "B"}}]"#);
        let record = &ingest(raw)[0];

        assert_eq!(record.name, "");
        assert_eq!(record.location, "");
        assert_eq!(record.tasks, Tasks::Count(0));
        assert_eq!(record.health.cloud, "");
        assert_eq!(record.health.device_grade(), HealthGrade::Degraded);
    }

    #[test]
    fn test_tasks_accepts_count_or_text() {
        let raw = parse_raw(r#"[{"id": 1, "tasks": 4}, {"id": 2, "tasks": "2 Tasks"}]"#);
        let records = ingest(raw);

        assert_eq!(records[0].tasks.to_string(), "4");
        assert_eq!(records[1].tasks.to_string(), "2 Tasks");
    }

    #[test]
    fn test_loose_field_types_are_kept_as_text() {
        let raw = parse_raw(
            r#"[
                {"id": 1, "name": "Good"},
                {"id": 2, "tasks": 1.5, "recorder": 7, "name": 404},
                {"id": 3, "tasks": -2, "status": true, "location": ["x"]},
                {"id": 4, "health": "A"}
            ]"#,
        );
        let records = ingest(raw);

        assert_eq!(records.len(), 4);
        assert_eq!(records[0].name, "Good");
        assert_eq!(records[1].tasks, Tasks::Text("1.5".to_string()));
        assert_eq!(records[1].recorder_label(), "7");
        assert_eq!(records[1].name, "404");
        assert_eq!(records[2].tasks, Tasks::Text("-2".to_string()));
        assert_eq!(records[2].status, "true");
        assert_eq!(records[2].location, "");
        assert_eq!(records[3].health, Health::default());
    }

    #[test]
    fn test_unreadable_entry_is_skipped_alone() {
        let raw = parse_raw(r#"[{"id": {"nested": 1}}, "not an object", {"id": 5, "name": "Kept"}]"#);
        let records = ingest(raw);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Kept");
    }

    #[test]
    fn test_record_identity_covers_content() {
        let before = CameraRecord::new(1u64, "Cam", "Denver, CO", "Active");
        let mut after = before.clone();
        after.status = "Inactive".to_string();

        let keys: HashSet<CameraRecord> = [before.clone(), after, before].into_iter().collect();
        assert_eq!(keys.len(), 2);
    }

    #[test]
    fn test_recorder_label() {
        let mut record = CameraRecord::new(1u64, "Cam", "Denver, CO", "Active");
        assert_eq!(record.recorder_label(), NO_RECORDER);

        record.recorder = Some("  ".to_string());
        assert_eq!(record.recorder_label(), NO_RECORDER);

        record.recorder = Some("NVR-1".to_string());
        assert_eq!(record.recorder_label(), "NVR-1");
    }

    #[test]
    fn test_health_grade() {
        assert_eq!(HealthGrade::from_code("A"), HealthGrade::Good);
        assert_eq!(HealthGrade::from_code("B"), HealthGrade::Degraded);
        assert_eq!(HealthGrade::from_code(""), HealthGrade::Degraded);
    }

    #[test]
    fn test_snapshot_format_round_trips_canonical_id() {
        let record = CameraRecord::new(9u64, "Cam", "Chicago, IL", "Inactive");
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains(r#""id":"9""#));

        let back: CameraRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
