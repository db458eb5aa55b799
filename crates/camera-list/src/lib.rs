//! Camera List Core
//!
//! Client-side list management for the camera table:
//! - models: camera records and API ingestion
//! - filter / paginate / selection: pure list transformations
//! - snapshot / source: snapshot-first loading from the remote API
//! - controller: state owner that recomputes the view after every intent

mod config;
mod controller;
mod error;
mod filter;
mod models;
mod paginate;
mod selection;
mod snapshot;
mod source;


pub use config::{SourceConfig, DEFAULT_ENDPOINT, DEFAULT_SNAPSHOT_KEY};
pub use controller::{ListController, ListView};
pub use error::{FetchError, FetchResult, SnapshotError, SnapshotResult};
pub use filter::{apply as apply_filter, FilterOptions, FilterState};
pub use models::{ingest, CameraId, CameraRecord, Health, HealthGrade, Tasks, ACTIVE_STATUS, NO_RECORDER};
pub use paginate::{page, parse_clamped, total_pages, Page, PageState, DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS};
pub use selection::SelectionTracker;
pub use snapshot::{MemorySnapshotStore, Snapshot, SnapshotStore};
pub use source::{parse_camera_list, CameraApi, DataSource, HttpCameraApi, LoadOrigin, LoadOutcome};
