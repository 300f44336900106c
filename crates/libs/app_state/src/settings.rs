use crate::{ApiSettings, LoggingSettings, RawSettings, SecretSettings};
use serde::Deserialize;
use std::path::{Path, PathBuf, absolute};

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub storage: StorageSettings,
    pub logging: LoggingSettings,
    pub api: ApiSettings,
    pub secrets: SecretSettings,
}

/// Storage settings with the media folder resolved to an absolute path.
#[derive(Debug, Deserialize, Clone)]
pub struct StorageSettings {
    pub media_root: PathBuf,
    pub photo_extensions: Vec<String>,
    pub max_upload_bytes: u64,
}

impl From<RawSettings> for AppSettings {
    fn from(raw: RawSettings) -> Self {
        let media_root = absolute(&raw.storage.media_folder).expect("Invalid media_folder");
        let storage = StorageSettings {
            media_root,
            photo_extensions: raw.storage.photo_extensions,
            max_upload_bytes: raw.storage.max_upload_mb * 1024 * 1024,
        };

        Self {
            storage,
            logging: raw.logging,
            api: raw.api,
            secrets: raw.secrets,
        }
    }
}

impl StorageSettings {
    /// Whether a file name carries one of the accepted photo extensions.
    #[must_use]
    pub fn is_photo_file(&self, file: &Path) -> bool {
        let Some(extension) = file.extension().map(|e| e.to_string_lossy().to_lowercase()) else {
            return false;
        };
        self.photo_extensions.contains(&extension)
    }
}
