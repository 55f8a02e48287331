mod adjust;
mod color;
mod error;
mod export;
mod preset;
mod render;
mod selection;

pub use adjust::AdjustParams;
pub use color::{
    apply_brightness, apply_chain, apply_contrast, apply_saturation, apply_warmth, luma_rec709,
    COOL_FILL_RGB, LUMA_REC709, WARM_FILL_RGB, WHITE_FILL_RGB,
};
pub use error::DomainError;
pub use export::{apply_fill, export_fill_plan, FillBlend, FillOp};
pub use preset::{built_in_presets, validate_catalog, Preset};
pub use render::{render_preview, PreviewFrame, SourceImage};
pub use selection::{SelectionState, SwipeDirection};
