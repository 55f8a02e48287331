use std::path::PathBuf;

pub const EXPORT_DIR_ENV: &str = "TINTBOX_EXPORT_DIR";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub export_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            export_dir: PathBuf::from("tintbox-exports"),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(dir) = std::env::var_os(EXPORT_DIR_ENV) {
            config.export_dir = PathBuf::from(dir);
        }
        config
    }
}
