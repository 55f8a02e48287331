mod config;
mod logging;
mod ui;

use std::process::ExitCode;
use std::sync::Arc;

use config::AppConfig;
use tintbox_adapters::{
    BackgroundExportPipeline, BackgroundLoadPipeline, CpuAdjustmentRenderer, CpuExportRenderer,
    DialogPhotoPicker, FsPhotoLibrary, SystemClock,
};
use tintbox_application::{ApplicationError, ApplicationService};

fn main() -> ExitCode {
    logging::init_logging();
    let config = AppConfig::from_env();

    let mut service = match build_application_service(&config) {
        Ok(service) => service,
        Err(error) => {
            eprintln!("failed to start tintbox: {error}");
            return ExitCode::from(1);
        }
    };

    match ui::launch_window(&mut service, &config.export_dir.to_string_lossy()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{message}");
            ExitCode::from(1)
        }
    }
}

fn build_application_service(config: &AppConfig) -> Result<ApplicationService, ApplicationError> {
    let library = FsPhotoLibrary::new(config.export_dir.clone(), Box::new(SystemClock));
    ApplicationService::new(
        Box::new(DialogPhotoPicker),
        Box::new(BackgroundLoadPipeline::new()),
        Box::new(CpuAdjustmentRenderer),
        Box::new(BackgroundExportPipeline::new(
            Arc::new(CpuExportRenderer),
            Arc::new(library),
        )),
    )
}
