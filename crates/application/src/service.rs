use std::sync::Arc;

use tintbox_domain::{built_in_presets, validate_catalog, Preset, PreviewFrame, SelectionState};

use crate::{
    ApplicationError, ExportJob, ExportMetrics, ExportMetricsQuery, ExportPhotoCommand,
    ExportPipeline, LoadMetrics, LoadMetricsQuery, LoadPipeline, LoadedPhoto, PhotoPicker,
    PickPhotoCommand, PollExportCommand, PollLoadCommand, AdjustmentRenderer,
    RenderThumbnailCommand, SelectPresetCommand, SwipePresetCommand,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadEvent {
    Loaded { width: u32, height: u32 },
    Failed { message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportEvent {
    Saved { file_path: String },
    Failed { message: String },
}

/// Session orchestration: owns the catalog handle, the selection and the
/// current photo. Pipeline outcomes mutate this state only from the polling
/// methods, so everything here stays confined to the UI thread.
pub struct ApplicationService {
    picker: Box<dyn PhotoPicker>,
    loader: Box<dyn LoadPipeline>,
    renderer: Box<dyn AdjustmentRenderer>,
    exporter: Box<dyn ExportPipeline>,
    presets: &'static [Preset],
    selection: SelectionState,
    photo: Option<LoadedPhoto>,
    load_pending: bool,
    export_pending: bool,
}

impl ApplicationService {
    pub fn new(
        picker: Box<dyn PhotoPicker>,
        loader: Box<dyn LoadPipeline>,
        renderer: Box<dyn AdjustmentRenderer>,
        exporter: Box<dyn ExportPipeline>,
    ) -> Result<Self, ApplicationError> {
        let presets = built_in_presets();
        validate_catalog(presets)?;
        Ok(Self {
            picker,
            loader,
            renderer,
            exporter,
            presets,
            selection: SelectionState::new(),
            photo: None,
            load_pending: false,
            export_pending: false,
        })
    }

    pub fn presets(&self) -> &'static [Preset] {
        self.presets
    }

    pub fn selected_index(&self) -> usize {
        self.selection.index()
    }

    pub fn selected_preset(&self) -> &'static Preset {
        &self.presets[self.selection.index()]
    }

    pub fn has_photo(&self) -> bool {
        self.photo.is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.load_pending
    }

    pub fn is_exporting(&self) -> bool {
        self.export_pending
    }

    /// Opens the picker and, when the user chose a file, hands its bytes to
    /// the load pipeline. Returns false when the dialog was canceled.
    pub fn pick_photo(&mut self, _command: PickPhotoCommand) -> Result<bool, ApplicationError> {
        let Some(picked) = self.picker.request_pick()? else {
            return Ok(false);
        };
        log::info!("picked {} ({} bytes)", picked.file_name, picked.bytes.len());
        self.loader.submit_load(picked)?;
        self.load_pending = true;
        Ok(true)
    }

    /// Drains the load pipeline. A successful decode replaces the photo
    /// wholesale and resets the selection to the identity entry; a failure
    /// leaves the previous photo and selection untouched.
    pub fn poll_load(
        &mut self,
        _command: PollLoadCommand,
    ) -> Result<Option<LoadEvent>, ApplicationError> {
        let Some(outcome) = self.loader.try_receive_load()? else {
            return Ok(None);
        };
        self.load_pending = false;
        match outcome.result {
            Ok(photo) => {
                let width = photo.full.width();
                let height = photo.full.height();
                self.photo = Some(photo);
                self.selection.reset();
                log::info!("loaded photo {width}x{height} (job {})", outcome.sequence);
                Ok(Some(LoadEvent::Loaded { width, height }))
            }
            Err(error) => {
                log::warn!("photo load failed (job {}): {error}", outcome.sequence);
                Ok(Some(LoadEvent::Failed {
                    message: error.to_string(),
                }))
            }
        }
    }

    pub fn select_preset(&mut self, command: SelectPresetCommand) {
        self.selection.select(command.index, self.presets.len());
    }

    pub fn swipe_preset(&mut self, command: SwipePresetCommand) {
        self.selection.step(command.direction, self.presets.len());
    }

    /// Renders the currently selected preset over the preview-sized working
    /// copy. None while no photo is loaded.
    pub fn render_preview(&self) -> Result<Option<PreviewFrame>, ApplicationError> {
        let Some(photo) = &self.photo else {
            return Ok(None);
        };
        let preset = &self.presets[self.selection.index()];
        self.renderer.render(&photo.preview_base, preset).map(Some)
    }

    pub fn render_thumbnail(
        &self,
        command: RenderThumbnailCommand,
    ) -> Result<Option<PreviewFrame>, ApplicationError> {
        let Some(photo) = &self.photo else {
            return Ok(None);
        };
        let preset = self.presets.get(command.index).ok_or_else(|| {
            ApplicationError::InvalidInput(format!(
                "preset index {} outside the catalog",
                command.index
            ))
        })?;
        self.renderer.render(&photo.thumb_base, preset).map(Some)
    }

    /// Submits the full-resolution source and the selected preset to the
    /// export pipeline.
    pub fn export_photo(&mut self, _command: ExportPhotoCommand) -> Result<(), ApplicationError> {
        let Some(photo) = &self.photo else {
            return Err(ApplicationError::InvalidInput(
                "no photo loaded to export".to_string(),
            ));
        };
        let preset = self.presets[self.selection.index()];
        log::info!("export requested with preset {}", preset.name);
        self.exporter.submit_export(ExportJob {
            source: Arc::clone(&photo.full),
            preset,
        })?;
        self.export_pending = true;
        Ok(())
    }

    pub fn poll_export(
        &mut self,
        _command: PollExportCommand,
    ) -> Result<Option<ExportEvent>, ApplicationError> {
        let Some(outcome) = self.exporter.try_receive_export()? else {
            return Ok(None);
        };
        self.export_pending = false;
        match outcome.result {
            Ok(saved) => {
                log::info!("export saved to {}", saved.file_path);
                Ok(Some(ExportEvent::Saved {
                    file_path: saved.file_path,
                }))
            }
            Err(error) => {
                log::warn!("export failed (job {}): {error}", outcome.sequence);
                Ok(Some(ExportEvent::Failed {
                    message: error.to_string(),
                }))
            }
        }
    }

    pub fn load_metrics(&self, _query: LoadMetricsQuery) -> Result<LoadMetrics, ApplicationError> {
        self.loader.metrics()
    }

    pub fn export_metrics(
        &self,
        _query: ExportMetricsQuery,
    ) -> Result<ExportMetrics, ApplicationError> {
        self.exporter.metrics()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use tintbox_domain::{SourceImage, SwipeDirection};

    use super::*;
    use crate::{ExportOutcome, LoadOutcome, PickedPhoto, SavedPhoto};

    fn tiny_source(shade: u8) -> SourceImage {
        SourceImage::new(2, 2, vec![shade; 16]).expect("valid image")
    }

    fn loaded_photo(shade: u8) -> LoadedPhoto {
        LoadedPhoto {
            full: Arc::new(tiny_source(shade)),
            preview_base: tiny_source(shade),
            thumb_base: tiny_source(shade),
        }
    }

    struct FakePicker {
        response: RefCell<Option<PickedPhoto>>,
    }

    impl PhotoPicker for FakePicker {
        fn request_pick(&self) -> Result<Option<PickedPhoto>, ApplicationError> {
            Ok(self.response.borrow_mut().take())
        }
    }

    #[derive(Default, Clone)]
    struct FakeLoadPipeline {
        submitted: Rc<RefCell<Vec<PickedPhoto>>>,
        outcomes: Rc<RefCell<Vec<LoadOutcome>>>,
    }

    impl LoadPipeline for FakeLoadPipeline {
        fn submit_load(&self, photo: PickedPhoto) -> Result<(), ApplicationError> {
            self.submitted.borrow_mut().push(photo);
            Ok(())
        }

        fn try_receive_load(&self) -> Result<Option<LoadOutcome>, ApplicationError> {
            Ok(self.outcomes.borrow_mut().pop())
        }

        fn metrics(&self) -> Result<LoadMetrics, ApplicationError> {
            Ok(LoadMetrics::default())
        }
    }

    #[derive(Default, Clone)]
    struct FakeRenderer {
        rendered_with: Rc<RefCell<Vec<&'static str>>>,
    }

    impl AdjustmentRenderer for FakeRenderer {
        fn render(
            &self,
            source: &SourceImage,
            preset: &Preset,
        ) -> Result<PreviewFrame, ApplicationError> {
            self.rendered_with.borrow_mut().push(preset.name);
            Ok(PreviewFrame {
                width: source.width(),
                height: source.height(),
                pixels: source.pixels().to_vec(),
            })
        }
    }

    #[derive(Default, Clone)]
    struct FakeExportPipeline {
        jobs: Rc<RefCell<Vec<ExportJob>>>,
        outcomes: Rc<RefCell<Vec<ExportOutcome>>>,
    }

    impl ExportPipeline for FakeExportPipeline {
        fn submit_export(&self, job: ExportJob) -> Result<(), ApplicationError> {
            self.jobs.borrow_mut().push(job);
            Ok(())
        }

        fn try_receive_export(&self) -> Result<Option<ExportOutcome>, ApplicationError> {
            Ok(self.outcomes.borrow_mut().pop())
        }

        fn metrics(&self) -> Result<ExportMetrics, ApplicationError> {
            Ok(ExportMetrics::default())
        }
    }

    fn service_with(
        picker_response: Option<PickedPhoto>,
    ) -> (
        ApplicationService,
        FakeLoadPipeline,
        FakeRenderer,
        FakeExportPipeline,
    ) {
        let loader = FakeLoadPipeline::default();
        let renderer = FakeRenderer::default();
        let exporter = FakeExportPipeline::default();
        let service = ApplicationService::new(
            Box::new(FakePicker {
                response: RefCell::new(picker_response),
            }),
            Box::new(loader.clone()),
            Box::new(renderer.clone()),
            Box::new(exporter.clone()),
        )
        .expect("catalog should validate");
        (service, loader, renderer, exporter)
    }

    #[test]
    fn canceled_pick_submits_nothing() {
        let (mut service, loader, _, _) = service_with(None);
        let picked = service.pick_photo(PickPhotoCommand).expect("pick");
        assert!(!picked);
        assert!(loader.submitted.borrow().is_empty());
        assert!(!service.is_loading());
    }

    #[test]
    fn pick_hands_bytes_to_the_load_pipeline() {
        let (mut service, loader, _, _) = service_with(Some(PickedPhoto {
            file_name: "holiday.jpg".to_string(),
            bytes: vec![1, 2, 3],
        }));
        let picked = service.pick_photo(PickPhotoCommand).expect("pick");
        assert!(picked);
        assert!(service.is_loading());
        let submitted = loader.submitted.borrow();
        assert_eq!(submitted.len(), 1);
        assert_eq!(submitted[0].file_name, "holiday.jpg");
    }

    #[test]
    fn completed_load_replaces_the_photo_and_resets_selection() {
        let (mut service, loader, _, _) = service_with(None);
        service.select_preset(SelectPresetCommand { index: 3 });
        loader.outcomes.borrow_mut().push(LoadOutcome {
            sequence: 1,
            result: Ok(loaded_photo(90)),
        });

        let event = service.poll_load(PollLoadCommand).expect("poll");
        assert_eq!(
            event,
            Some(LoadEvent::Loaded {
                width: 2,
                height: 2
            })
        );
        assert!(service.has_photo());
        assert_eq!(service.selected_index(), 0);
    }

    #[test]
    fn failed_load_keeps_the_previous_photo_and_selection() {
        let (mut service, loader, _, _) = service_with(None);
        loader.outcomes.borrow_mut().push(LoadOutcome {
            sequence: 1,
            result: Ok(loaded_photo(90)),
        });
        service.poll_load(PollLoadCommand).expect("poll");
        service.select_preset(SelectPresetCommand { index: 2 });

        loader.outcomes.borrow_mut().push(LoadOutcome {
            sequence: 2,
            result: Err(ApplicationError::Decode("truncated jpeg".to_string())),
        });
        let event = service.poll_load(PollLoadCommand).expect("poll");
        assert!(matches!(event, Some(LoadEvent::Failed { .. })));
        assert!(service.has_photo());
        assert_eq!(service.selected_index(), 2);
    }

    #[test]
    fn selection_gestures_stay_inside_the_catalog() {
        let (mut service, _, _, _) = service_with(None);
        service.select_preset(SelectPresetCommand { index: 42 });
        assert_eq!(service.selected_index(), 8);

        service.swipe_preset(SwipePresetCommand {
            direction: SwipeDirection::Next,
        });
        assert_eq!(service.selected_index(), 8);

        service.swipe_preset(SwipePresetCommand {
            direction: SwipeDirection::Previous,
        });
        assert_eq!(service.selected_index(), 7);
    }

    #[test]
    fn preview_renders_with_the_selected_preset() {
        let (mut service, loader, renderer, _) = service_with(None);
        assert!(service.render_preview().expect("render").is_none());

        loader.outcomes.borrow_mut().push(LoadOutcome {
            sequence: 1,
            result: Ok(loaded_photo(90)),
        });
        service.poll_load(PollLoadCommand).expect("poll");
        service.select_preset(SelectPresetCommand { index: 3 });

        let frame = service.render_preview().expect("render");
        assert!(frame.is_some());
        assert_eq!(renderer.rendered_with.borrow().as_slice(), ["Pop Art"]);
    }

    #[test]
    fn thumbnails_render_each_requested_preset() {
        let (mut service, loader, renderer, _) = service_with(None);
        loader.outcomes.borrow_mut().push(LoadOutcome {
            sequence: 1,
            result: Ok(loaded_photo(90)),
        });
        service.poll_load(PollLoadCommand).expect("poll");

        service
            .render_thumbnail(RenderThumbnailCommand { index: 1 })
            .expect("thumbnail");
        service
            .render_thumbnail(RenderThumbnailCommand { index: 8 })
            .expect("thumbnail");
        assert_eq!(
            renderer.rendered_with.borrow().as_slice(),
            ["Sunset Glow", "Golden Hour"]
        );

        let result = service.render_thumbnail(RenderThumbnailCommand { index: 9 });
        assert!(matches!(result, Err(ApplicationError::InvalidInput(_))));
    }

    #[test]
    fn export_without_a_photo_is_rejected() {
        let (mut service, _, _, exporter) = service_with(None);
        let result = service.export_photo(ExportPhotoCommand);
        assert!(matches!(result, Err(ApplicationError::InvalidInput(_))));
        assert!(exporter.jobs.borrow().is_empty());
    }

    #[test]
    fn export_submits_the_full_source_with_the_selected_preset() {
        let (mut service, loader, _, exporter) = service_with(None);
        loader.outcomes.borrow_mut().push(LoadOutcome {
            sequence: 1,
            result: Ok(loaded_photo(90)),
        });
        service.poll_load(PollLoadCommand).expect("poll");
        service.select_preset(SelectPresetCommand { index: 3 });

        service.export_photo(ExportPhotoCommand).expect("export");
        assert!(service.is_exporting());
        let jobs = exporter.jobs.borrow();
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].preset.name, "Pop Art");
        assert_eq!(jobs[0].source.width(), 2);
    }

    #[test]
    fn export_outcomes_surface_as_events() {
        let (mut service, loader, _, exporter) = service_with(None);
        loader.outcomes.borrow_mut().push(LoadOutcome {
            sequence: 1,
            result: Ok(loaded_photo(90)),
        });
        service.poll_load(PollLoadCommand).expect("poll");
        service.export_photo(ExportPhotoCommand).expect("export");

        exporter.outcomes.borrow_mut().push(ExportOutcome {
            sequence: 1,
            result: Ok(SavedPhoto {
                file_path: "tintbox-exports/tintbox-123.jpg".to_string(),
            }),
        });
        let event = service.poll_export(PollExportCommand).expect("poll");
        assert_eq!(
            event,
            Some(ExportEvent::Saved {
                file_path: "tintbox-exports/tintbox-123.jpg".to_string(),
            })
        );
        assert!(!service.is_exporting());

        exporter.outcomes.borrow_mut().push(ExportOutcome {
            sequence: 2,
            result: Err(ApplicationError::PermissionDenied(
                "export directory is read-only".to_string(),
            )),
        });
        let event = service.poll_export(PollExportCommand).expect("poll");
        assert!(matches!(event, Some(ExportEvent::Failed { .. })));
    }
}
