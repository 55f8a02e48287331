mod export;
mod load;

pub use export::BackgroundExportPipeline;
pub use load::BackgroundLoadPipeline;
