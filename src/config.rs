use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::SiteError;

static DEFAULT_CONFIG: &str = include_str!("default_config.toml");

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub paths: PathsConfig,
    pub output: OutputConfig,
}

/// Where the site's inputs live and where the build goes.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PathsConfig {
    pub static_dir: PathBuf,
    pub content_dir: PathBuf,
    pub template: PathBuf,
    pub output_dir: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            static_dir: PathBuf::from("static"),
            content_dir: PathBuf::from("content"),
            template: PathBuf::from("template.html"),
            output_dir: PathBuf::from("public"),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct OutputConfig {
    /// Extension given to generated pages, without the dot.
    pub extension: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            extension: "html".to_string(),
        }
    }
}

impl Config {
    /// The config bundled into the binary. `build.rs` checks it parses.
    pub fn compiled_default() -> Self {
        toml::from_str(DEFAULT_CONFIG).unwrap_or_default()
    }

    /// Load config from a TOML file, or return defaults if not found.
    pub fn load(path: &Path) -> Result<Self, SiteError> {
        match fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(|source| SiteError::Config {
                path: path.to_path_buf(),
                source,
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("no config at {}, using defaults", path.display());
                Ok(Self::compiled_default())
            }
            Err(e) => Err(SiteError::io(path)(e)),
        }
    }

    /// Make every relative path absolute against `root`.
    pub fn resolve(mut self, root: &Path) -> Self {
        let paths = &mut self.paths;
        for path in [
            &mut paths.static_dir,
            &mut paths.content_dir,
            &mut paths.template,
            &mut paths.output_dir,
        ] {
            if path.is_relative() {
                *path = root.join(&*path);
            }
        }
        self
    }
}
