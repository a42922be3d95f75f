use serde::{Deserialize, Serialize};
use std::path::Path;

pub const ACCESS_TOKEN_ENV: &str = "TMDB_ACCESS_TOKEN";

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub listen: ListenConfig,
    #[serde(default)]
    pub tmdb: TmdbConfig,
    #[serde(default)]
    pub recommendations: RecommendationConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ListenConfig {
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default = "default_port")]
    pub port: String,
    #[serde(default)]
    pub tlscert: Option<String>,
    #[serde(default)]
    pub tlskey: Option<String>,
}

impl Default for ListenConfig {
    fn default() -> Self {
        Self {
            address: None,
            port: default_port(),
            tlscert: None,
            tlskey: None,
        }
    }
}

#[derive(Clone, Deserialize, Serialize)]
pub struct TmdbConfig {
    #[serde(alias = "baseurl", default = "default_base_url")]
    pub base_url: String,
    #[serde(alias = "accesstoken", default)]
    pub access_token: Option<String>,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(alias = "timeout", default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for TmdbConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            access_token: None,
            language: default_language(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

// The token never ends up in logs.
impl std::fmt::Debug for TmdbConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TmdbConfig")
            .field("base_url", &self.base_url)
            .field("access_token", &self.access_token.as_ref().map(|_| "[REDACTED]"))
            .field("language", &self.language)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RecommendationConfig {
    #[serde(alias = "pagesize", default = "default_page_size")]
    pub page_size: u32,
    #[serde(alias = "sourcepagesize", default = "default_source_page_size")]
    pub source_page_size: u32,
    #[serde(alias = "maxpages", default = "default_max_pages")]
    pub max_pages: u32,
    /// Retry empty strict queries with progressively looser ones.
    #[serde(default = "default_true")]
    pub relax: bool,
    /// Resolve emotion keywords to catalog keyword ids before discovery.
    #[serde(default)]
    pub keywords: bool,
    #[serde(alias = "searchlimit", default = "default_search_limit")]
    pub search_limit: usize,
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            source_page_size: default_source_page_size(),
            max_pages: default_max_pages(),
            relax: true,
            keywords: false,
            search_limit: default_search_limit(),
        }
    }
}

fn default_port() -> String {
    "3000".to_string()
}

fn default_base_url() -> String {
    "https://api.themoviedb.org/3".to_string()
}

fn default_language() -> String {
    "en-US".to_string()
}

fn default_timeout_secs() -> u64 {
    15
}

fn default_page_size() -> u32 {
    6
}

fn default_source_page_size() -> u32 {
    20
}

fn default_max_pages() -> u32 {
    500
}

fn default_search_limit() -> usize {
    10
}

fn default_true() -> bool {
    true
}

impl Config {
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadError(path.to_string(), e))?;

        Self::from_yaml(path, &content)
    }

    /// Load the config file if it exists, otherwise start from defaults.
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        let mut config = if Path::new(path).exists() {
            Self::from_file(path)?
        } else {
            Config::default()
        };
        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    fn from_yaml(path: &str, content: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(content).map_err(|e| ConfigError::ParseError(path.to_string(), e))
    }

    fn apply_env(&mut self) {
        if let Ok(token) = std::env::var(ACCESS_TOKEN_ENV) {
            if !token.trim().is_empty() {
                self.tmdb.access_token = Some(token);
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let r = &self.recommendations;
        if r.page_size == 0 || r.source_page_size == 0 {
            return Err(ConfigError::Invalid("page sizes must be positive".to_string()));
        }
        if r.page_size > r.source_page_size {
            return Err(ConfigError::Invalid(format!(
                "page_size {} exceeds source_page_size {}",
                r.page_size, r.source_page_size
            )));
        }
        Ok(())
    }

    /// The upstream credential, if one is configured and non-blank.
    pub fn access_token(&self) -> Option<&str> {
        self.tmdb
            .access_token
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    ReadError(String, std::io::Error),
    #[error("Failed to parse config file {0}: {1}")]
    ParseError(String, serde_yaml::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
