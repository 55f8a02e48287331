pub mod codec;
pub mod fs;
pub mod pick;
pub mod pipeline;
pub mod presenters;
pub mod render;

pub use fs::{FsPhotoLibrary, SystemClock};
pub use pick::DialogPhotoPicker;
pub use pipeline::{BackgroundExportPipeline, BackgroundLoadPipeline};
pub use presenters::{
    present_adjust_params, present_export_event, present_load_event, present_photo_status,
};
pub use render::{BakeRenderer, CpuAdjustmentRenderer, CpuExportRenderer};
