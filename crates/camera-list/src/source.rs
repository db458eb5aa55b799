//! Data Source
//!
//! Snapshot-first loading of the camera list. A non-empty snapshot is
//! returned as is, without touching the network; otherwise the remote API
//! is called once and a successful result replaces the snapshot.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use serde::Deserialize;
use serde_json::Value;

use crate::config::SourceConfig;
use crate::error::{FetchError, FetchResult};
use crate::models::{ingest, CameraRecord};
use crate::snapshot::{Snapshot, SnapshotStore};

/// Remote provider of the full camera list
#[async_trait(?Send)]
pub trait CameraApi {
    async fn fetch_cameras(&self) -> FetchResult<Vec<CameraRecord>>;
}

/// Response body of the cameras endpoint. Entries stay untyped so one
/// malformed camera cannot fail the whole list.
#[derive(Debug, Deserialize)]
struct CameraListResponse {
    data: Vec<Value>,
}

/// Decode a cameras response body into normalized records
pub fn parse_camera_list(body: &str) -> FetchResult<Vec<CameraRecord>> {
    let response: CameraListResponse = serde_json::from_str(body)?;
    Ok(ingest(response.data))
}

/// `GET` against the configured endpoint with a bearer token
#[derive(Debug, Clone)]
pub struct HttpCameraApi {
    http: reqwest::Client,
    endpoint: String,
    auth_token: String,
}

impl HttpCameraApi {
    pub fn new(config: &SourceConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: config.endpoint.clone(),
            auth_token: config.auth_token.clone(),
        }
    }
}

#[async_trait(?Send)]
impl CameraApi for HttpCameraApi {
    async fn fetch_cameras(&self) -> FetchResult<Vec<CameraRecord>> {
        let response = self
            .http
            .get(&self.endpoint)
            .bearer_auth(&self.auth_token)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(FetchError::Status {
                status: response.status().as_u16(),
            });
        }

        let body = response.text().await?;
        parse_camera_list(&body)
    }
}

/// Where a loaded list came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOrigin {
    Snapshot,
    Remote,
    /// Remote failed; records are whatever the snapshot held, possibly nothing
    Fallback,
}

#[derive(Debug)]
pub struct LoadOutcome {
    pub records: Vec<CameraRecord>,
    pub origin: LoadOrigin,
    pub error: Option<FetchError>,
}

pub struct DataSource<A, S> {
    api: A,
    snapshot: Snapshot<S>,
}

impl<S: SnapshotStore> DataSource<HttpCameraApi, S> {
    pub fn from_config(config: &SourceConfig, store: S) -> Self {
        Self::new(HttpCameraApi::new(config), Snapshot::new(store, config.snapshot_key.clone()))
    }
}

impl<A: CameraApi, S: SnapshotStore> DataSource<A, S> {
    pub fn new(api: A, snapshot: Snapshot<S>) -> Self {
        Self { api, snapshot }
    }

    pub fn snapshot(&self) -> &Snapshot<S> {
        &self.snapshot
    }

    /// Snapshot if present and non-empty, else one remote fetch.
    pub async fn load(&self) -> LoadOutcome {
        let cached = self.snapshot.read();
        if let Some(records) = cached.as_ref().filter(|records| !records.is_empty()) {
            log::info!("[source] Loaded {} cameras from snapshot", records.len());
            return LoadOutcome {
                records: records.clone(),
                origin: LoadOrigin::Snapshot,
                error: None,
            };
        }

        match self.api.fetch_cameras().await {
            Ok(records) => {
                log::info!("[source] Fetched {} cameras", records.len());
                self.store(&records);
                LoadOutcome {
                    records,
                    origin: LoadOrigin::Remote,
                    error: None,
                }
            }
            Err(e) => {
                log::warn!("[source] Failed to fetch cameras: {}", e);
                LoadOutcome {
                    records: cached.unwrap_or_default(),
                    origin: LoadOrigin::Fallback,
                    error: Some(e),
                }
            }
        }
    }

    /// Fetch remotely regardless of the snapshot; success replaces it.
    pub async fn refresh(&self) -> FetchResult<Vec<CameraRecord>> {
        let records = self.api.fetch_cameras().await.inspect_err(|e| {
            log::warn!("[source] Refresh failed: {}", e);
        })?;
        log::info!("[source] Refreshed {} cameras", records.len());
        self.store(&records);
        Ok(records)
    }

    fn store(&self, records: &[CameraRecord]) {
        if let Err(e) = self.snapshot.write(records) {
            log::warn!("[source] Failed to store snapshot: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::MemorySnapshotStore;
    use std::cell::Cell;

    /// Stub API returning a canned result and counting calls
    struct StubApi {
        response: Result<Vec<CameraRecord>, u16>,
        calls: Cell<usize>,
    }

    impl StubApi {
        fn ok(records: Vec<CameraRecord>) -> Self {
            Self { response: Ok(records), calls: Cell::new(0) }
        }

        fn status(status: u16) -> Self {
            Self { response: Err(status), calls: Cell::new(0) }
        }
    }

    #[async_trait(?Send)]
    impl CameraApi for StubApi {
        async fn fetch_cameras(&self) -> FetchResult<Vec<CameraRecord>> {
            self.calls.set(self.calls.get() + 1);
            match &self.response {
                Ok(records) => Ok(records.clone()),
                Err(status) => Err(FetchError::Status { status: *status }),
            }
        }
    }

    fn cam(id: u64) -> CameraRecord {
        CameraRecord::new(id, &format!("Cam {}", id), "Denver, CO", "Active")
    }

    #[tokio::test]
    async fn test_non_empty_snapshot_skips_network() {
        let store = MemorySnapshotStore::new();
        let snapshot = Snapshot::new(store, "cams");
        snapshot.write(&[cam(1)]).unwrap();

        let source = DataSource::new(StubApi::ok(vec![cam(2)]), snapshot);
        let outcome = source.load().await;

        assert_eq!(outcome.origin, LoadOrigin::Snapshot);
        assert_eq!(outcome.records, vec![cam(1)]);
        assert_eq!(source.api.calls.get(), 0);
    }

    #[tokio::test]
    async fn test_remote_fetch_writes_snapshot() {
        let store = MemorySnapshotStore::new();
        let source = DataSource::new(StubApi::ok(vec![cam(1), cam(2)]), Snapshot::new(store, "cams"));

        let outcome = source.load().await;

        assert_eq!(outcome.origin, LoadOrigin::Remote);
        assert!(outcome.error.is_none());
        assert_eq!(source.snapshot().read(), Some(vec![cam(1), cam(2)]));
    }

    #[tokio::test]
    async fn test_empty_snapshot_still_fetches() {
        let store = MemorySnapshotStore::new();
        let snapshot = Snapshot::new(store, "cams");
        snapshot.write(&[]).unwrap();

        let source = DataSource::new(StubApi::ok(vec![cam(5)]), snapshot);
        let outcome = source.load().await;

        assert_eq!(outcome.origin, LoadOrigin::Remote);
        assert_eq!(source.api.calls.get(), 1);
    }

    #[tokio::test]
    async fn test_failed_fetch_falls_back() {
        let store = MemorySnapshotStore::new();
        let source = DataSource::new(StubApi::status(500), Snapshot::new(store, "cams"));

        let outcome = source.load().await;

        assert_eq!(outcome.origin, LoadOrigin::Fallback);
        assert!(outcome.records.is_empty());
        assert!(matches!(outcome.error, Some(FetchError::Status { status: 500 })));
        assert_eq!(source.snapshot().read(), None);
    }

    #[tokio::test]
    async fn test_refresh_bypasses_snapshot() {
        let store = MemorySnapshotStore::new();
        let snapshot = Snapshot::new(store, "cams");
        snapshot.write(&[cam(1)]).unwrap();

        let source = DataSource::new(StubApi::ok(vec![cam(3)]), snapshot);
        let records = source.refresh().await.unwrap();

        assert_eq!(records, vec![cam(3)]);
        assert_eq!(source.snapshot().read(), Some(vec![cam(3)]));
    }

    #[test]
    fn test_odd_field_types_keep_the_rest_of_the_list() {
        let records =
            parse_camera_list(r#"{"data": [{"id": 1, "name": "Good"}, {"id": 2, "tasks": 1.5, "recorder": 7}]}"#)
                .unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "Good");
        assert_eq!(records[1].tasks.to_string(), "1.5");
        assert_eq!(records[1].recorder_label(), "7");
    }

    #[test]
    fn test_parse_camera_list() {
        let records = parse_camera_list(r#"{"data": [{"_id": "x1", "name": "Lobby"}]}"#).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id.as_str(), "x1");

        assert!(matches!(parse_camera_list("<html>"), Err(FetchError::Parse(_))));
        assert!(matches!(parse_camera_list(r#"{"data": {}}"#), Err(FetchError::Parse(_))));
        assert!(matches!(parse_camera_list(r#"{"items": []}"#), Err(FetchError::Parse(_))));
    }
}
