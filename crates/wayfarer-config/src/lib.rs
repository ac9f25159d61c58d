//! Shared configuration for Wayfarer embedders.
//!
//! TOML config merged with `WAYFARER_*` environment variables, plus the
//! file-backed session-token store (the persistent fixed-key storage
//! the API client reads on every request).

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use wayfarer_api::{ApiClient, TokenStore, TransportConfig};
use wayfarer_core::{AiProvider, Hub};

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("no platform config directory available")]
    NoConfigDir,

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── Config ──────────────────────────────────────────────────────────

/// Top-level configuration.
///
/// Defaults < `wayfarer.toml` < `WAYFARER_*` environment variables.
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// Backend endpoint (single URL; all requests are
    /// action-discriminated against it).
    pub api_url: String,

    /// Which AI provider the backend should use by default.
    #[serde(default)]
    pub ai_provider: AiProvider,

    /// Optional overall request timeout in seconds. Unset means the
    /// client layer configures none.
    pub timeout_secs: Option<u64>,

    /// Override for the session-token file location.
    pub token_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: "https://api.wayfarer.example/api.php".into(),
            ai_provider: AiProvider::default(),
            timeout_secs: None,
            token_path: None,
        }
    }
}

impl Config {
    /// Load from the default config file location plus environment.
    pub fn load() -> Result<Self, ConfigError> {
        let path = default_config_path().ok_or(ConfigError::NoConfigDir)?;
        Self::load_from(&path)
    }

    /// Load from an explicit TOML file plus environment.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let config = Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed("WAYFARER_"))
            .extract()?;
        Ok(config)
    }

    /// The token file this config resolves to.
    pub fn token_path(&self) -> Result<PathBuf, ConfigError> {
        match &self.token_path {
            Some(path) => Ok(path.clone()),
            None => default_token_path().ok_or(ConfigError::NoConfigDir),
        }
    }

    /// Build the file-backed token store.
    pub fn token_store(&self) -> Result<FileTokenStore, ConfigError> {
        Ok(FileTokenStore::new(self.token_path()?))
    }

    /// Build an [`ApiClient`] from this config.
    pub fn api_client(&self) -> Result<ApiClient, ConfigError> {
        let endpoint = url::Url::parse(&self.api_url).map_err(|e| ConfigError::Validation {
            field: "api_url".into(),
            reason: e.to_string(),
        })?;

        let mut transport = TransportConfig::default();
        if let Some(secs) = self.timeout_secs {
            transport = transport.with_timeout(Duration::from_secs(secs));
        }

        let tokens: Arc<dyn TokenStore> = Arc::new(self.token_store()?);
        ApiClient::new(endpoint, tokens, &transport).map_err(|e| ConfigError::Validation {
            field: "api_url".into(),
            reason: e.to_string(),
        })
    }

    /// Build a ready-to-bootstrap [`Hub`].
    pub fn hub(&self) -> Result<Hub, ConfigError> {
        Ok(Hub::new(self.api_client()?))
    }
}

/// Platform config file: `{config_dir}/wayfarer.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join("wayfarer.toml"))
}

/// Platform token file: `{config_dir}/token`.
pub fn default_token_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join("token"))
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("io", "wayfarer", "wayfarer")
}

// ── File-backed token store ─────────────────────────────────────────

/// One opaque token string in one file.
///
/// Matches `TokenStore`'s absorb-everything contract: IO failures are
/// logged and swallowed, `load` treats a missing or empty file as "no
/// token".
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Option<SecretString> {
        let raw = std::fs::read_to_string(&self.path).ok()?;
        let trimmed = raw.trim();
        (!trimmed.is_empty()).then(|| SecretString::from(trimmed.to_owned()))
    }

    fn store(&self, token: SecretString) {
        if let Some(parent) = self.path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                warn!(path = %parent.display(), error = %e, "cannot create token directory");
                return;
            }
        }

        if let Err(e) = std::fs::write(&self.path, token.expose_secret()) {
            warn!(path = %self.path.display(), error = %e, "cannot persist session token");
            return;
        }

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let perms = std::fs::Permissions::from_mode(0o600);
            if let Err(e) = std::fs::set_permissions(&self.path, perms) {
                warn!(path = %self.path.display(), error = %e, "cannot restrict token permissions");
            }
        }
    }

    fn clear(&self) {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => warn!(path = %self.path.display(), error = %e, "cannot remove session token"),
        }
    }
}
