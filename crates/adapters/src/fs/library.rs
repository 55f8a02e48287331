use std::fs;
use std::path::PathBuf;

use tintbox_application::{ApplicationError, Clock, PhotoLibrary, SavedPhoto, WriteAccess};

const WRITE_PROBE_NAME: &str = ".tintbox-write-probe";

/// Photo storage backed by a directory on disk. Write access means the
/// directory exists or can be created and accepts a probe write.
pub struct FsPhotoLibrary {
    root: PathBuf,
    clock: Box<dyn Clock>,
}

impl FsPhotoLibrary {
    pub fn new(root: PathBuf, clock: Box<dyn Clock>) -> Self {
        Self { root, clock }
    }

    pub fn root(&self) -> &PathBuf {
        &self.root
    }
}

impl PhotoLibrary for FsPhotoLibrary {
    fn request_write_access(&self) -> Result<WriteAccess, ApplicationError> {
        if let Err(error) = fs::create_dir_all(&self.root) {
            log::warn!("export directory {:?} cannot be created: {error}", self.root);
            return Ok(WriteAccess::Denied);
        }

        let probe = self.root.join(WRITE_PROBE_NAME);
        match fs::write(&probe, b"probe") {
            Ok(()) => {
                let _ = fs::remove_file(&probe);
                Ok(WriteAccess::Granted)
            }
            Err(error) => {
                log::warn!("export directory {:?} rejects writes: {error}", self.root);
                Ok(WriteAccess::Denied)
            }
        }
    }

    fn save_photo(&self, jpeg_bytes: &[u8]) -> Result<SavedPhoto, ApplicationError> {
        fs::create_dir_all(&self.root)
            .map_err(|error| ApplicationError::Storage(error.to_string()))?;

        let stamp = self.clock.now_timestamp_string();
        let mut path = self.root.join(format!("tintbox-{stamp}.jpg"));
        let mut suffix = 1_u32;
        while path.exists() {
            path = self.root.join(format!("tintbox-{stamp}-{suffix}.jpg"));
            suffix += 1;
        }

        fs::write(&path, jpeg_bytes)
            .map_err(|error| ApplicationError::Storage(error.to_string()))?;
        Ok(SavedPhoto {
            file_path: path.to_string_lossy().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    struct FixedClock;

    impl Clock for FixedClock {
        fn now_timestamp_string(&self) -> String {
            "1700000000".to_string()
        }
    }

    #[test]
    fn writable_directory_grants_access() {
        let dir = TempDir::new().expect("tempdir");
        let library = FsPhotoLibrary::new(dir.path().join("exports"), Box::new(FixedClock));
        assert_eq!(
            library.request_write_access().expect("access"),
            WriteAccess::Granted
        );
        assert!(dir.path().join("exports").is_dir());
    }

    #[test]
    fn access_is_denied_when_the_root_is_a_file() {
        let dir = TempDir::new().expect("tempdir");
        let blocking_file = dir.path().join("exports");
        fs::write(&blocking_file, b"not a directory").expect("write");

        let library = FsPhotoLibrary::new(blocking_file, Box::new(FixedClock));
        assert_eq!(
            library.request_write_access().expect("access"),
            WriteAccess::Denied
        );
    }

    #[test]
    fn save_into_an_unusable_root_is_a_storage_error() {
        let dir = TempDir::new().expect("tempdir");
        let blocking_file = dir.path().join("exports");
        fs::write(&blocking_file, b"not a directory").expect("write");

        let library = FsPhotoLibrary::new(blocking_file, Box::new(FixedClock));
        let result = library.save_photo(&[0xFF, 0xD8]);
        assert!(matches!(result, Err(ApplicationError::Storage(_))));
    }

    #[test]
    fn saves_deduplicate_colliding_timestamps() {
        let dir = TempDir::new().expect("tempdir");
        let library = FsPhotoLibrary::new(dir.path().to_path_buf(), Box::new(FixedClock));

        let first = library.save_photo(&[0xFF, 0xD8, 1]).expect("save");
        let second = library.save_photo(&[0xFF, 0xD8, 2]).expect("save");

        assert!(first.file_path.ends_with("tintbox-1700000000.jpg"));
        assert!(second.file_path.ends_with("tintbox-1700000000-1.jpg"));
        assert_eq!(fs::read(&first.file_path).expect("read"), [0xFF, 0xD8, 1]);
        assert_eq!(fs::read(&second.file_path).expect("read"), [0xFF, 0xD8, 2]);
    }
}
