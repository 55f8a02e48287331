mod clock;
mod library;

pub use clock::SystemClock;
pub use library::FsPhotoLibrary;
