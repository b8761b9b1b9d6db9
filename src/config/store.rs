//! src/config/store.rs
//! The persisted baseline configuration (~/.config/gitmsg/config.toml).

use std::io::Write;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};
use tokio::fs;

use crate::errors::StoreError;

/// Overrides the configuration directory, mostly useful for tests and CI.
pub const CONFIG_DIR_ENV: &str = "GITMSG_CONFIG_DIR";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Durable configuration, the second precedence layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoredConfig {
    pub provider: String,
    pub api_key: String,
    pub model: String,
    pub url: String,
    pub language: String,
    /// Seconds.
    pub timeout: u64,
    pub proxy: String,
    pub use_gitmoji: bool,
    pub commit_type: String,
    pub scope: String,
    pub custom_convention: String,
    pub max_length: u32,
    pub temperature: f64,
    pub max_redirects: u32,
}

impl Default for StoredConfig {
    fn default() -> Self {
        Self {
            provider: "openai".to_string(),
            api_key: String::new(),
            model: String::new(),
            url: String::new(),
            language: "en".to_string(),
            timeout: 30,
            proxy: String::new(),
            use_gitmoji: false,
            commit_type: String::new(),
            scope: String::new(),
            custom_convention: String::new(),
            max_length: 200,
            temperature: 0.7,
            max_redirects: 5,
        }
    }
}

impl StoredConfig {
    /// Copy suitable for display: the API key is masked.
    pub fn redacted(&self) -> Self {
        let mut copy = self.clone();
        copy.api_key = mask_secret(&self.api_key);
        copy
    }
}

fn mask_secret(secret: &str) -> String {
    let count = secret.chars().count();
    if count == 0 {
        return String::new();
    }
    if count <= 8 {
        return "*".repeat(count);
    }
    let tail: String = secret.chars().skip(count - 4).collect();
    format!("{}{}", "*".repeat(count - 4), tail)
}

/// Reads and atomically rewrites `config.toml` in one directory.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    dir: PathBuf,
}

impl ConfigStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// `$GITMSG_CONFIG_DIR`, else the platform config dir joined with `gitmsg`.
    pub fn from_env() -> Result<Self, StoreError> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|d| !d.is_empty()) {
            return Ok(Self::new(dir));
        }
        let base = if cfg!(windows) {
            dirs::data_dir()
        } else {
            dirs::config_dir()
        };
        let dir = base
            .map(|p| p.join("gitmsg"))
            .ok_or(StoreError::NoConfigDir)?;
        Ok(Self::new(dir))
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(CONFIG_FILE_NAME)
    }

    /// Missing file means built-in defaults; nothing is written.
    pub async fn load(&self) -> Result<StoredConfig, StoreError> {
        let path = self.path();
        let content = match fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("no config at {}, using defaults", path.display());
                return Ok(StoredConfig::default());
            }
            Err(source) => return Err(StoreError::Io { path, source }),
        };
        toml::from_str(&content).map_err(|source| StoreError::Parse { path, source })
    }

    pub async fn save(&self, config: &StoredConfig) -> Result<PathBuf, StoreError> {
        let content = toml::to_string_pretty(config).map_err(StoreError::Serialize)?;
        fs::create_dir_all(&self.dir).await.map_err(|source| StoreError::Io {
            path: self.dir.clone(),
            source,
        })?;

        let path = self.path();
        write_atomically(&self.dir, &path, content.as_bytes())?;
        debug!("saved config to {}", path.display());
        Ok(path)
    }

    /// Writes the default baseline. An existing file is only replaced with `force`.
    pub async fn init(&self, force: bool) -> Result<PathBuf, StoreError> {
        let path = self.path();
        if !force && fs::try_exists(&path).await.unwrap_or(false) {
            return Err(StoreError::AlreadyExists(path));
        }
        self.save(&StoredConfig::default()).await
    }
}

// Temp file in the same directory, then rename over the target.
fn write_atomically(dir: &Path, path: &Path, bytes: &[u8]) -> Result<(), StoreError> {
    let io_err = |source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    };
    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(io_err)?;
    tmp.write_all(bytes).map_err(io_err)?;
    tmp.as_file().sync_all().map_err(io_err)?;
    tmp.persist(path).map_err(|e| io_err(e.error))?;
    Ok(())
}
