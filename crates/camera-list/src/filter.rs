//! Filter Engine
//!
//! Conjunctive, case-insensitive substring filtering over camera records.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::models::CameraRecord;

/// Active filter inputs. Empty strings mean "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub search_text: String,
    pub location_filter: String,
    pub status_filter: String,
}

impl FilterState {
    pub fn is_empty(&self) -> bool {
        self.search_text.is_empty() && self.location_filter.is_empty() && self.status_filter.is_empty()
    }
}

/// Filter `records`, preserving input order. Never mutates the input.
pub fn apply(records: &[CameraRecord], filter: &FilterState) -> Vec<CameraRecord> {
    if filter.is_empty() {
        return records.to_vec();
    }

    // Lowercase the needles once rather than per record
    let search = filter.search_text.to_lowercase();
    let location = filter.location_filter.to_lowercase();
    let status = filter.status_filter.to_lowercase();

    records
        .iter()
        .filter(|record| matches_lowered(record, &search, &location, &status))
        .cloned()
        .collect()
}

fn matches_lowered(record: &CameraRecord, search: &str, location: &str, status: &str) -> bool {
    let search_ok = search.is_empty()
        || [
            record.name.as_str(),
            record.location.as_str(),
            record.recorder.as_deref().unwrap_or(""),
            record.status.as_str(),
        ]
        .iter()
        .any(|field| contains_ci(field, search));

    search_ok
        && (location.is_empty() || contains_ci(&record.location, location))
        && (status.is_empty() || contains_ci(&record.status, status))
}

fn contains_ci(haystack: &str, lowered_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowered_needle)
}

/// Dropdown choices derived from the loaded records
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions {
    pub locations: Vec<String>,
    pub statuses: Vec<String>,
}

impl FilterOptions {
    /// Distinct, sorted, non-blank locations and statuses
    pub fn from_records(records: &[CameraRecord]) -> Self {
        let mut locations = BTreeSet::new();
        let mut statuses = BTreeSet::new();
        for record in records {
            let location = record.location.trim();
            if !location.is_empty() {
                locations.insert(location.to_string());
            }
            let status = record.status.trim();
            if !status.is_empty() {
                statuses.insert(status.to_string());
            }
        }
        Self {
            locations: locations.into_iter().collect(),
            statuses: statuses.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<CameraRecord> {
        let mut lobby = CameraRecord::new(1u64, "Lobby", "Denver, CO", "Active");
        lobby.recorder = Some("NVR-East".to_string());
        vec![
            lobby,
            CameraRecord::new(2u64, "Dock", "Chicago, IL", "Inactive"),
            CameraRecord::new(3u64, "Gate", "Denver, CO", "Inactive"),
            CameraRecord::new(4u64, "Roof", "Austin, TX", "Active"),
        ]
    }

    fn ids(records: &[CameraRecord]) -> Vec<&str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_empty_filter_keeps_everything() {
        let records = sample();
        let filtered = apply(&records, &FilterState::default());
        assert_eq!(filtered, records);
    }

    #[test]
    fn test_search_matches_any_field_case_insensitive() {
        let records = sample();

        let by_name = FilterState { search_text: "LOBBY".into(), ..Default::default() };
        assert_eq!(ids(&apply(&records, &by_name)), vec!["1"]);

        let by_recorder = FilterState { search_text: "nvr-e".into(), ..Default::default() };
        assert_eq!(ids(&apply(&records, &by_recorder)), vec!["1"]);

        let by_location = FilterState { search_text: "denver".into(), ..Default::default() };
        assert_eq!(ids(&apply(&records, &by_location)), vec!["1", "3"]);
    }

    #[test]
    fn test_status_filter_is_substring_match() {
        let records = sample();
        // "active" is a substring of "Inactive" as well
        let filter = FilterState { status_filter: "active".into(), ..Default::default() };
        assert_eq!(ids(&apply(&records, &filter)), vec!["1", "2", "3", "4"]);

        let filter = FilterState { status_filter: "inact".into(), ..Default::default() };
        assert_eq!(ids(&apply(&records, &filter)), vec!["2", "3"]);
    }

    #[test]
    fn test_filters_compose_conjunctively() {
        let records = sample();
        let filter = FilterState {
            search_text: "a".into(),
            location_filter: "denver".into(),
            status_filter: "inactive".into(),
        };
        assert_eq!(ids(&apply(&records, &filter)), vec!["3"]);
    }

    #[test]
    fn test_output_is_ordered_subset() {
        let records = sample();
        let filters = [
            FilterState { search_text: "o".into(), ..Default::default() },
            FilterState { location_filter: ", ".into(), ..Default::default() },
            FilterState { status_filter: "zzz".into(), ..Default::default() },
        ];
        for filter in &filters {
            let filtered = apply(&records, filter);
            let positions: Vec<usize> = filtered
                .iter()
                .map(|f| records.iter().position(|r| r == f).expect("subset of input"))
                .collect();
            assert!(positions.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn test_absent_recorder_never_matches_nonempty_search() {
        let records = vec![CameraRecord::new(1u64, "", "", "")];
        let filter = FilterState { search_text: "n/a".into(), ..Default::default() };
        assert!(apply(&records, &filter).is_empty());
    }

    #[test]
    fn test_filter_options_are_distinct_and_sorted() {
        let options = FilterOptions::from_records(&sample());
        assert_eq!(options.locations, vec!["Austin, TX", "Chicago, IL", "Denver, CO"]);
        assert_eq!(options.statuses, vec!["Active", "Inactive"]);
    }
}
