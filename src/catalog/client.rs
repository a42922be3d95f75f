use async_trait::async_trait;
use reqwest::header;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

use super::error::CatalogError;
use super::query::CatalogQuery;
use super::types::{KeywordPage, MovieDetails, MoviePage, StatusBody};
use super::CatalogSource;
use crate::config::TmdbConfig;

/// HTTP client for the TMDB v3 API, authenticated with a bearer token.
#[derive(Clone)]
pub struct TmdbClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
    language: String,
}

impl std::fmt::Debug for TmdbClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TmdbClient")
            .field("base_url", &self.base_url)
            .field("token", &"[REDACTED]")
            .field("language", &self.language)
            .finish()
    }
}

impl TmdbClient {
    pub fn new(config: &TmdbConfig, token: &str) -> Result<Self, CatalogError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("suking-tindahan/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
            language: config.language.clone(),
        })
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, CatalogError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(url = %url, params = ?params, "Catalog request");

        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.token)
            .header(header::ACCEPT, "application/json")
            .query(&[("language", self.language.as_str()), ("include_adult", "false")])
            .query(params)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<StatusBody>(&body)
                .ok()
                .and_then(|b| b.status_message)
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("Unknown error").to_string());
            warn!(url = %url, status = status.as_u16(), message = %message, "Catalog request failed");
            return Err(CatalogError::Status {
                status: status.as_u16(),
                message,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl CatalogSource for TmdbClient {
    async fn discover(&self, query: &CatalogQuery, page: u32) -> Result<MoviePage, CatalogError> {
        let mut params = query.to_params();
        params.push(("page", page.to_string()));
        self.get("/discover/movie", &params).await
    }

    async fn search(&self, text: &str, page: u32) -> Result<MoviePage, CatalogError> {
        let params = [
            ("query", text.to_string()),
            ("page", page.to_string()),
        ];
        self.get("/search/movie", &params).await
    }

    async fn movie_details(&self, id: u64) -> Result<MovieDetails, CatalogError> {
        let params = [("append_to_response", "credits,videos".to_string())];
        self.get(&format!("/movie/{}", id), &params).await
    }

    async fn search_keywords(&self, keyword: &str) -> Result<KeywordPage, CatalogError> {
        let params = [("query", keyword.to_string())];
        self.get("/search/keyword", &params).await
    }
}
