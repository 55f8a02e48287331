use std::sync::Arc;

use tintbox_domain::{Preset, PreviewFrame, SourceImage};

use crate::ApplicationError;

#[derive(Debug, Clone)]
pub struct PickedPhoto {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Media acquisition: yields the raw encoded bytes of a user-chosen photo,
/// or `None` when the user cancels the dialog.
pub trait PhotoPicker {
    fn request_pick(&self) -> Result<Option<PickedPhoto>, ApplicationError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoadedPhoto {
    pub full: Arc<SourceImage>,
    pub preview_base: SourceImage,
    pub thumb_base: SourceImage,
}

#[derive(Debug)]
pub struct LoadOutcome {
    pub sequence: u64,
    pub result: Result<LoadedPhoto, ApplicationError>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadMetrics {
    pub submitted_jobs: u64,
    pub completed_jobs: u64,
    pub superseded_jobs: u64,
    pub failed_jobs: u64,
}

/// Asynchronous decode: a newer submission supersedes any in-flight one and
/// stale outcomes are dropped inside the pipeline, never delivered.
pub trait LoadPipeline {
    fn submit_load(&self, photo: PickedPhoto) -> Result<(), ApplicationError>;

    fn try_receive_load(&self) -> Result<Option<LoadOutcome>, ApplicationError>;

    fn metrics(&self) -> Result<LoadMetrics, ApplicationError>;
}

pub trait AdjustmentRenderer {
    fn render(&self, source: &SourceImage, preset: &Preset)
        -> Result<PreviewFrame, ApplicationError>;
}

#[derive(Clone)]
pub struct ExportJob {
    pub source: Arc<SourceImage>,
    pub preset: Preset,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedPhoto {
    pub file_path: String,
}

#[derive(Debug)]
pub struct ExportOutcome {
    pub sequence: u64,
    pub result: Result<SavedPhoto, ApplicationError>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportMetrics {
    pub submitted_jobs: u64,
    pub completed_jobs: u64,
    pub failed_jobs: u64,
}

/// Asynchronous bake-and-save: permission check, bake, encode and write run
/// to completion or failure off the UI thread, attempt-once, no cancellation.
pub trait ExportPipeline {
    fn submit_export(&self, job: ExportJob) -> Result<(), ApplicationError>;

    fn try_receive_export(&self) -> Result<Option<ExportOutcome>, ApplicationError>;

    fn metrics(&self) -> Result<ExportMetrics, ApplicationError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteAccess {
    Granted,
    Denied,
}

/// Photo storage backed by the managed export directory.
pub trait PhotoLibrary: Send + Sync {
    fn request_write_access(&self) -> Result<WriteAccess, ApplicationError>;

    fn save_photo(&self, jpeg_bytes: &[u8]) -> Result<SavedPhoto, ApplicationError>;
}

pub trait Clock: Send + Sync {
    fn now_timestamp_string(&self) -> String;
}
