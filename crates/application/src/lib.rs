mod error;
mod ports;
mod service;
mod use_cases;

pub use error::ApplicationError;
pub use ports::{
    AdjustmentRenderer, Clock, ExportJob, ExportMetrics, ExportOutcome, ExportPipeline,
    LoadMetrics, LoadOutcome, LoadPipeline, LoadedPhoto, PhotoLibrary, PhotoPicker, PickedPhoto,
    SavedPhoto, WriteAccess,
};
pub use service::{ApplicationService, ExportEvent, LoadEvent};
pub use use_cases::{
    ExportMetricsQuery, ExportPhotoCommand, LoadMetricsQuery, PickPhotoCommand, PollExportCommand,
    PollLoadCommand, RenderThumbnailCommand, SelectPresetCommand, SwipePresetCommand,
};
