use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use reqwest::Url;

pub const DEFAULT_API_BASE: &str = "https://groupietrackers.herokuapp.com/api";

/// Runtime configuration shared by the HTTP client, the router and `main`.
#[derive(Clone, Debug)]
pub struct AppConfig {
    api_base: String,
    listen_addr: SocketAddr,
    static_dir: PathBuf,
    user_agent: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        let user_agent = format!(
            "{}/{} ( {} )",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION"),
            DEFAULT_API_BASE
        );

        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            static_dir: PathBuf::from("static"),
            user_agent,
        }
    }
}

impl AppConfig {
    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_listen_addr(mut self, addr: SocketAddr) -> Self {
        self.listen_addr = addr;
        self
    }

    pub fn with_static_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.static_dir = dir.into();
        self
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    pub fn listen_addr(&self) -> SocketAddr {
        self.listen_addr
    }

    pub fn static_dir(&self) -> &Path {
        &self.static_dir
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn artists_url(&self) -> String {
        format!("{}/artists", self.api_base)
    }

    pub fn locations_url(&self) -> String {
        format!("{}/locations", self.api_base)
    }

    pub fn dates_url(&self) -> String {
        format!("{}/dates", self.api_base)
    }

    pub fn relations_url(&self) -> String {
        format!("{}/relation", self.api_base)
    }

    /// Checks the values that would otherwise only fail on the first request.
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.api_base)
            .with_context(|| format!("Invalid API base URL: {}", self.api_base))?;
        if !matches!(url.scheme(), "http" | "https") {
            bail!("API base URL must use http or https: {}", self.api_base);
        }

        if !self.static_dir.is_dir() {
            tracing::warn!(
                static_dir = %self.static_dir.display(),
                "Static directory not found, /static requests will return 404"
            );
        }

        Ok(())
    }
}
