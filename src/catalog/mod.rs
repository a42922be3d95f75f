pub mod client;
pub mod error;
pub mod query;
pub mod types;

#[cfg(test)]
pub mod fake;

pub use client::TmdbClient;
pub use error::CatalogError;
pub use query::{CatalogQuery, ReleaseSpan, RuntimeBounds};
pub use types::*;

use async_trait::async_trait;

/// The external movie catalog. Pages are fixed at the source's own size.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn discover(&self, query: &CatalogQuery, page: u32) -> Result<MoviePage, CatalogError>;

    async fn search(&self, text: &str, page: u32) -> Result<MoviePage, CatalogError>;

    /// Detail with credits and videos appended.
    async fn movie_details(&self, id: u64) -> Result<MovieDetails, CatalogError>;

    async fn search_keywords(&self, keyword: &str) -> Result<KeywordPage, CatalogError>;
}
