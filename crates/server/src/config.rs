use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;
type Result<T> = anyhow::Result<T>;

pub const CONFIG_PATH_ENV: &str = "ANNOTATOR_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "annotator.toml";

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub image_dir: PathBuf,
    pub annotation_dir: PathBuf,
    pub static_dir: PathBuf,
    pub max_upload_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 5000)),
            image_dir: PathBuf::from("image"),
            annotation_dir: PathBuf::from("annotations"),
            static_dir: PathBuf::from("static"),
            max_upload_bytes: 16 * 1024 * 1024,
        }
    }
}

impl ServerConfig {
    /// Reads the config file named by `ANNOTATOR_CONFIG` (or `annotator.toml`),
    /// falling back to defaults when it does not exist, then applies
    /// `ANNOTATOR_*` environment overrides.
    pub fn load() -> Result<Self> {
        let path = std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.into());
        let path = Path::new(&path);

        let mut config = if path.exists() {
            Self::from_file(path)?
        } else {
            Self::default()
        };
        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        Self::from_str(&content)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Result<Self> {
        toml::from_str(s).context("failed to deserialize server config")
    }

    /// Applies overrides from a key lookup, normally the process environment.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(addr) = lookup("ANNOTATOR_BIND_ADDR") {
            self.bind_addr = addr
                .parse()
                .with_context(|| format!("ANNOTATOR_BIND_ADDR is not a socket address: {addr}"))?;
        }
        if let Some(dir) = lookup("ANNOTATOR_IMAGE_DIR") {
            self.image_dir = PathBuf::from(dir);
        }
        if let Some(dir) = lookup("ANNOTATOR_ANNOTATION_DIR") {
            self.annotation_dir = PathBuf::from(dir);
        }
        if let Some(dir) = lookup("ANNOTATOR_STATIC_DIR") {
            self.static_dir = PathBuf::from(dir);
        }
        if let Some(limit) = lookup("ANNOTATOR_MAX_UPLOAD_BYTES") {
            self.max_upload_bytes = limit
                .parse()
                .with_context(|| format!("ANNOTATOR_MAX_UPLOAD_BYTES is not a number: {limit}"))?;
        }
        Ok(())
    }
}
