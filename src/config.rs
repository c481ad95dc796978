use anyhow::Result;
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub service: ServiceConfig,
    #[serde(rename = "static")]
    pub static_files: StaticConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub name: String,
    pub http: HttpConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub bind: String,
    pub port: u16,

    /// Origin advertised in join links; when unset, join links point at
    /// http://localhost:<port>
    pub public_url: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct StaticConfig {
    /// Directory served for non-API requests
    pub root: PathBuf,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            name: "meeting-registry".to_string(),
            http: HttpConfig::default(),
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0".to_string(),
            port: 8000,
            public_url: None,
        }
    }
}

impl Default for StaticConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
        }
    }
}

impl Config {
    /// Load configuration from a file; a missing file yields the defaults
    pub fn load(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Base URL interpolated into join links
    pub fn join_base(&self) -> String {
        match &self.service.http.public_url {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => format!("http://localhost:{}", self.service.http.port),
        }
    }
}
