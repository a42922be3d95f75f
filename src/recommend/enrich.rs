use futures::future::join_all;
use tracing::warn;

use super::types::{CastEntry, Director, MovieSummary, Trailer};
use crate::catalog::{CatalogError, CatalogSource, MovieDetails, MovieListEntry};

pub const MAX_CAST: usize = 6;

/// Extended metadata pulled from a detail fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct Enrichment {
    pub director: Option<Director>,
    pub cast: Vec<CastEntry>,
    pub trailer: Option<Trailer>,
    pub genres: Vec<String>,
    pub runtime: Option<u32>,
}

impl Enrichment {
    pub fn from_details(details: &MovieDetails) -> Self {
        Self {
            director: find_director(details),
            cast: top_cast(details),
            trailer: find_trailer(details),
            genres: details.genres.iter().map(|g| g.name.clone()).collect(),
            runtime: details.runtime,
        }
    }

    pub fn apply(self, summary: &mut MovieSummary) {
        summary.director = self.director;
        summary.cast = self.cast;
        summary.trailer = self.trailer;
        summary.genres = self.genres;
        if self.runtime.is_some() {
            summary.runtime = self.runtime;
        }
    }
}

pub fn find_director(details: &MovieDetails) -> Option<Director> {
    details
        .credits
        .as_ref()?
        .crew
        .iter()
        .find(|person| person.job == "Director")
        .map(|person| Director {
            name: person.name.clone(),
            profile_path: person.profile_path.clone(),
        })
}

pub fn top_cast(details: &MovieDetails) -> Vec<CastEntry> {
    details
        .credits
        .as_ref()
        .map(|credits| {
            credits
                .cast
                .iter()
                .take(MAX_CAST)
                .map(|actor| CastEntry {
                    name: actor.name.clone(),
                    character: actor.character.clone(),
                    profile_path: actor.profile_path.clone(),
                })
                .collect()
        })
        .unwrap_or_default()
}

pub fn find_trailer(details: &MovieDetails) -> Option<Trailer> {
    details
        .videos
        .as_ref()?
        .results
        .iter()
        .find(|video| video.video_type == "Trailer" && video.site == "YouTube")
        .map(|video| Trailer {
            key: video.key.clone(),
            name: video.name.clone(),
        })
}

/// Full card for a single movie; errors propagate.
pub async fn movie_summary(catalog: &dyn CatalogSource, id: u64) -> Result<MovieSummary, CatalogError> {
    let details = catalog.movie_details(id).await?;
    let mut summary = MovieSummary::from_details(&details);
    Enrichment::from_details(&details).apply(&mut summary);
    Ok(summary)
}

/// Enrichment for one item, or `None` if its detail fetch failed.
pub async fn enrich(catalog: &dyn CatalogSource, id: u64) -> Option<Enrichment> {
    match catalog.movie_details(id).await {
        Ok(details) => Some(Enrichment::from_details(&details)),
        Err(e) => {
            warn!(id, error = %e, "Failed to fetch details for movie");
            None
        }
    }
}

/// Enrich all entries concurrently. The output keeps input order; an entry
/// whose detail fetch failed yields `None` in its slot.
pub async fn enrich_all(
    catalog: &dyn CatalogSource,
    entries: &[MovieListEntry],
) -> Vec<Option<MovieSummary>> {
    let fetches = entries.iter().map(|entry| async move {
        let enrichment = enrich(catalog, entry.id).await?;
        let mut summary = MovieSummary::from_entry(entry);
        enrichment.apply(&mut summary);
        Some(summary)
    });
    join_all(fetches).await
}
