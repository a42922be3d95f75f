use futures::future::join_all;
use tracing::info;

use super::enrich::enrich;
use super::types::{MovieSummary, SearchPage};
use crate::catalog::{CatalogError, CatalogSource};

/// Free-text search. At most `limit` hits are enriched and returned; a hit
/// whose detail fetch fails is returned from its listing entry alone.
pub async fn search(
    catalog: &dyn CatalogSource,
    text: &str,
    page: u32,
    limit: usize,
) -> Result<SearchPage, CatalogError> {
    let listing = catalog.search(text, page).await?;
    info!(query = text, total_results = listing.total_results, "Search results");

    let hits = listing.results.iter().take(limit).map(|entry| async move {
        let mut summary = MovieSummary::from_entry(entry);
        if let Some(enrichment) = enrich(catalog, entry.id).await {
            enrichment.apply(&mut summary);
        }
        summary
    });

    Ok(SearchPage {
        results: join_all(hits).await,
        total_results: listing.total_results,
        total_pages: listing.total_pages,
    })
}
