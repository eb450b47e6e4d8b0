//! Configuration management for the News API relay.
//!
//! Configuration is read once at startup into an immutable [`Config`] which is
//! then handed to the components that need it. Values come from, in order of
//! priority:
//! 1. Environment variables (and command-line overrides applied by `main`)
//! 2. A `.env` file in the working directory
//! 3. A `.env` file in the local data directory (`newsrelay/.env`)
//! 4. Application defaults (where applicable)

use std::{env, path::Path, path::PathBuf, time::Duration};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_API_BASE_URL: &str = "https://newsapi.org/v2";

/// Loads environment variables from `.env` files.
///
/// The working directory is tried first, then the platform-specific local
/// data directory:
/// - Linux: `~/.local/share/newsrelay/.env`
/// - macOS: `~/Library/Application Support/newsrelay/.env`
/// - Windows: `%LOCALAPPDATA%/newsrelay/.env`
///
/// Variables that are already set are never overwritten, and missing files
/// are skipped.
///
/// # Errors
///
/// Returns an error string if the data directory cannot be created or an
/// existing `.env` file cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    if let Err(e) = dotenv::dotenv() {
        if !e.not_found() {
            return Err(e.to_string());
        }
    }

    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("newsrelay/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// Loads environment variables from an explicitly named file.
///
/// Unlike [`load_env`], a missing file is an error here.
pub fn load_env_file(path: &Path) -> Result<(), String> {
    dotenv::from_path(path).map_err(|e| format!("{}: {}", path.display(), e))
}

/// Process-wide relay configuration.
///
/// Built once at startup and shared read-only afterwards. The API key lives
/// here only; it is never taken from a client request.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub api_key: String,
    pub api_base_url: String,
    /// Upstream request timeout. `None` keeps the HTTP client default.
    pub timeout: Option<Duration>,
}

impl Config {
    /// Creates a configuration with defaults for everything but the API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            api_key: api_key.into(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout: None,
        }
    }

    /// Builds the configuration from the process environment.
    ///
    /// Reads `PORT`, `HOST`, `NEWS_API_KEY` (falling back to the legacy
    /// `NewsAPI` name), `NEWS_API_BASE_URL` and `UPSTREAM_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Fails when no API key is present, or when `PORT` or
    /// `UPSTREAM_TIMEOUT_SECS` is set but not a valid number.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_key = get("NEWS_API_KEY")
            .or_else(|| get("NewsAPI"))
            .ok_or_else(|| "NEWS_API_KEY must be set".to_string())?;

        let mut config = Self::new(api_key);

        if let Some(port) = get("PORT") {
            config.port = port
                .trim()
                .parse()
                .map_err(|e| format!("PORT must be a valid port number ({}): {}", port, e))?;
        }
        if let Some(host) = get("HOST") {
            config.host = host.trim().to_string();
        }
        if let Some(base) = get("NEWS_API_BASE_URL") {
            config.api_base_url = base.trim().trim_end_matches('/').to_string();
        }
        if let Some(secs) = get("UPSTREAM_TIMEOUT_SECS") {
            let secs: u64 = secs.trim().parse().map_err(|e| {
                format!("UPSTREAM_TIMEOUT_SECS must be a whole number ({}): {}", secs, e)
            })?;
            config.timeout = Some(Duration::from_secs(secs));
        }

        Ok(config)
    }

    /// Returns the `host:port` address the server binds to.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Returns the upstream "top headlines" endpoint.
    pub fn top_headlines_url(&self) -> String {
        format!("{}/top-headlines", self.api_base_url)
    }

    /// Returns the upstream "everything" (full-text search) endpoint.
    pub fn everything_url(&self) -> String {
        format!("{}/everything", self.api_base_url)
    }
}
