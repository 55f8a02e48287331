use tintbox_application::{ExportEvent, LoadEvent};
use tintbox_domain::{AdjustParams, Preset};

pub fn present_photo_status(width: u32, height: u32, preset: &Preset) -> String {
    format!("{}x{} | {}", width, height, preset.name)
}

pub fn present_load_event(event: &LoadEvent) -> String {
    match event {
        LoadEvent::Loaded { width, height } => {
            format!("loaded photo {}x{}", width, height)
        }
        LoadEvent::Failed { message } => format!("photo load failed: {}", message),
    }
}

pub fn present_export_event(event: &ExportEvent) -> String {
    match event {
        ExportEvent::Saved { file_path } => format!("saved copy to {}", file_path),
        ExportEvent::Failed { message } => format!("export failed: {}", message),
    }
}

pub fn present_adjust_params(params: &AdjustParams) -> String {
    format!(
        "brightness={} contrast={} saturation={} warmth={}",
        params.brightness, params.contrast, params.saturation, params.warmth
    )
}
