use crate::{AppConstants, AppSettings, RawSettings};
use color_eyre::eyre::{Result, eyre};
use std::fs;
use std::path::PathBuf;
use std::sync::LazyLock;

/// Locate `config/settings.yaml`, walking up from the working directory so
/// workspace members (and their tests) resolve the same file as the binary.
fn find_settings_file() -> Result<PathBuf> {
    let mut dir = std::env::current_dir()?;
    loop {
        let candidate = dir.join("config/settings.yaml");
        if candidate.is_file() {
            return Ok(candidate.canonicalize()?);
        }
        let Some(parent) = dir.parent() else {
            return Err(eyre!("config/settings.yaml not found in any parent directory"));
        };
        dir = parent.to_path_buf();
    }
}

fn build_raw_settings(with_env: bool) -> Result<RawSettings> {
    let config_path = find_settings_file()?;
    let mut builder = config::Config::builder().add_source(config::File::from(config_path));
    if with_env {
        builder = builder.add_source(
            config::Environment::with_prefix("APP")
                .separator("__")
                .try_parsing(true),
        );
    }
    Ok(builder.build()?.try_deserialize::<RawSettings>()?)
}

pub fn load_app_settings() -> Result<AppSettings> {
    // Load from dotenv so APP__ overrides (e.g. the db url) land in the env first.
    dotenv::from_path(".env").ok();

    let raw_settings = build_raw_settings(true)?;
    let settings: AppSettings = raw_settings.into();

    fs::create_dir_all(&settings.storage.media_root)?;

    Ok(settings)
}

fn load_app_constants() -> Result<AppConstants> {
    let raw_constants = build_raw_settings(false)?;
    Ok(raw_constants.into())
}

pub static CONSTANTS: LazyLock<AppConstants> =
    LazyLock::new(|| load_app_constants().expect("Cannot load app settings."));

#[must_use]
pub fn constants() -> &'static AppConstants {
    &CONSTANTS
}
