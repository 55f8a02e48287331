use std::fs;

use rfd::FileDialog;
use tintbox_application::{ApplicationError, PhotoPicker, PickedPhoto};

/// Native file dialog picker. Blocks the calling thread while the dialog is
/// open, which matches the single suspension point the UI expects.
#[derive(Debug, Default)]
pub struct DialogPhotoPicker;

impl PhotoPicker for DialogPhotoPicker {
    fn request_pick(&self) -> Result<Option<PickedPhoto>, ApplicationError> {
        let Some(path) = FileDialog::new()
            .set_title("Choose a photo")
            .add_filter("photos", &["jpg", "jpeg", "png"])
            .pick_file()
        else {
            return Ok(None);
        };

        let bytes = fs::read(&path).map_err(|error| ApplicationError::Io(error.to_string()))?;
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("photo")
            .to_string();
        Ok(Some(PickedPhoto { file_name, bytes }))
    }
}
