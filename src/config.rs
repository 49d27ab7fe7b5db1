//! Application configuration.
//!
//! One value matters: the backend base URL. It is read once from the
//! environment (`BACKEND_URL`, with `.env` support handled in `main`) and
//! never changes for the lifetime of the process.

use anyhow::{Context, Result};

/// Environment variable naming the backend base URL.
const BACKEND_URL_VAR: &str = "BACKEND_URL";

#[derive(Debug, Clone)]
pub struct Settings {
    backend_url: String,
}

impl Settings {
    /// Build settings from an explicit base URL.
    ///
    /// Trailing slashes are trimmed so request paths can always start
    /// with `/`.
    pub fn new(backend_url: &str) -> Self {
        Self {
            backend_url: backend_url.trim_end_matches('/').to_string(),
        }
    }

    /// Read settings from the environment.
    pub fn from_env() -> Result<Self> {
        let url = std::env::var(BACKEND_URL_VAR)
            .with_context(|| format!("{} is not set", BACKEND_URL_VAR))?;
        Ok(Self::new(&url))
    }

    pub fn backend_url(&self) -> &str {
        &self.backend_url
    }
}
