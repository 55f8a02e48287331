use tintbox_domain::SwipeDirection;

#[derive(Debug, Clone, Default)]
pub struct PickPhotoCommand;

#[derive(Debug, Clone, Default)]
pub struct PollLoadCommand;

#[derive(Debug, Clone, Copy)]
pub struct SelectPresetCommand {
    pub index: usize,
}

#[derive(Debug, Clone, Copy)]
pub struct SwipePresetCommand {
    pub direction: SwipeDirection,
}

#[derive(Debug, Clone, Copy)]
pub struct RenderThumbnailCommand {
    pub index: usize,
}

#[derive(Debug, Clone, Default)]
pub struct ExportPhotoCommand;

#[derive(Debug, Clone, Default)]
pub struct PollExportCommand;

#[derive(Debug, Clone, Default)]
pub struct LoadMetricsQuery;

#[derive(Debug, Clone, Default)]
pub struct ExportMetricsQuery;
