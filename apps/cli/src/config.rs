use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use tracing::warn;

pub const SETTINGS_FILE: &str = "builder.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub generator_url: String,
    pub output_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            generator_url: "http://127.0.0.1:3000".into(),
            output_dir: PathBuf::from("."),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    generator_url: Option<String>,
    output_dir: Option<PathBuf>,
}

impl Settings {
    /// Command-line values win over everything else.
    pub fn with_overrides(
        mut self,
        generator_url: Option<String>,
        output_dir: Option<PathBuf>,
    ) -> Self {
        if let Some(v) = generator_url {
            self.generator_url = v;
        }
        if let Some(v) = output_dir {
            self.output_dir = v;
        }
        self
    }
}

pub fn load_settings() -> Settings {
    load_settings_from(Path::new(SETTINGS_FILE), |key| std::env::var(key).ok())
}

/// Defaults, then the settings file, then the environment.
pub fn load_settings_from(path: &Path, env: impl Fn(&str) -> Option<String>) -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string(path) {
        match toml::from_str::<FileSettings>(&raw) {
            Ok(file_cfg) => {
                if let Some(v) = file_cfg.generator_url {
                    settings.generator_url = v;
                }
                if let Some(v) = file_cfg.output_dir {
                    settings.output_dir = v;
                }
            }
            Err(error) => {
                warn!(path = %path.display(), %error, "ignoring unreadable settings file");
            }
        }
    }

    if let Some(v) = env("GENERATOR_URL") {
        settings.generator_url = v;
    }
    if let Some(v) = env("APP__GENERATOR_URL") {
        settings.generator_url = v;
    }

    if let Some(v) = env("APP__OUTPUT_DIR") {
        settings.output_dir = PathBuf::from(v);
    }

    settings
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
