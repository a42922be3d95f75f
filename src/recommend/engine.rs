use futures::future::join_all;
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::emotion::EmotionMapping;
use super::enrich::enrich_all;
use super::filter::{base_query, normalize, FilterSpec};
use super::types::ResultPage;
use super::window::{take_window, total_pages, WindowPlan};
use crate::catalog::{CatalogError, CatalogQuery, CatalogSource, MoviePage};
use crate::config::RecommendationConfig;

#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("Page {0} is out of range")]
    PageOutOfRange(u32),
    #[error(transparent)]
    Upstream(#[from] CatalogError),
}

/// One query in the relaxation chain, derived from the strict query.
#[derive(Debug, Clone, PartialEq)]
pub enum RelaxationStep {
    /// Strict query narrowed to resolved keyword ids.
    WithKeywords(Vec<u64>),
    Strict,
    ExpandedGenres,
    ExpandedGenresAnyOrigin,
    /// Base genres with only the region and certification lock.
    Minimal,
}

impl RelaxationStep {
    pub fn name(&self) -> &'static str {
        match self {
            RelaxationStep::WithKeywords(_) => "keywords",
            RelaxationStep::Strict => "strict",
            RelaxationStep::ExpandedGenres => "expanded-genres",
            RelaxationStep::ExpandedGenresAnyOrigin => "expanded-genres-any-origin",
            RelaxationStep::Minimal => "minimal",
        }
    }

    pub fn query(&self, strict: &CatalogQuery, mapping: &EmotionMapping) -> CatalogQuery {
        match self {
            RelaxationStep::WithKeywords(ids) => CatalogQuery {
                keywords: ids.clone(),
                ..strict.clone()
            },
            RelaxationStep::Strict => strict.clone(),
            RelaxationStep::ExpandedGenres => CatalogQuery {
                genres: mapping.expanded_genres.to_vec(),
                ..strict.clone()
            },
            RelaxationStep::ExpandedGenresAnyOrigin => CatalogQuery {
                genres: mapping.expanded_genres.to_vec(),
                origin_country: None,
                ..strict.clone()
            },
            RelaxationStep::Minimal => base_query(mapping.genres),
        }
    }
}

/// Steps to try in order. The first non-empty result wins.
pub fn relaxation_chain(relax: bool, keyword_ids: Vec<u64>) -> Vec<RelaxationStep> {
    let mut chain = Vec::new();
    if !keyword_ids.is_empty() {
        chain.push(RelaxationStep::WithKeywords(keyword_ids));
    }
    chain.push(RelaxationStep::Strict);
    if relax {
        chain.extend([
            RelaxationStep::ExpandedGenres,
            RelaxationStep::ExpandedGenresAnyOrigin,
            RelaxationStep::Minimal,
        ]);
    }
    chain
}

/// Resolves a filtered emotion request into one application page.
#[derive(Clone)]
pub struct Engine {
    catalog: Arc<dyn CatalogSource>,
    settings: RecommendationConfig,
}

impl Engine {
    pub fn new(catalog: Arc<dyn CatalogSource>, settings: RecommendationConfig) -> Self {
        Self { catalog, settings }
    }

    pub async fn resolve(
        &self,
        mapping: &EmotionMapping,
        filters: &FilterSpec,
    ) -> Result<ResultPage, ResolveError> {
        let s = &self.settings;
        if filters.page == 0 || filters.page > s.max_pages {
            return Err(ResolveError::PageOutOfRange(filters.page));
        }

        let plan = WindowPlan::new(filters.page, s.page_size, s.source_page_size);
        let strict = normalize(filters, mapping);

        let keyword_ids = if s.keywords {
            self.resolve_keywords(mapping).await
        } else {
            Vec::new()
        };

        let chain = relaxation_chain(s.relax, keyword_ids);
        let Some((step, query, first)) = self
            .first_non_empty(chain, &strict, mapping, plan.first_native_page)
            .await?
        else {
            info!(emotion = %mapping.label, page = filters.page, "No matches after relaxation");
            return Ok(ResultPage::empty(filters.page));
        };

        let mut entries = take_window(&first.results, plan.offset, plan.head_len);
        if plan.spans_boundary()
            && entries.len() == plan.head_len
            && plan.native_page <= first.total_pages
        {
            match self.catalog.discover(&query, plan.native_page).await {
                Ok(next) => entries.extend(take_window(&next.results, 0, plan.tail_len)),
                Err(e) => warn!(
                    native_page = plan.native_page,
                    error = %e,
                    "Failed to fetch continuation page, returning short page"
                ),
            }
        }

        let results: Vec<_> = enrich_all(self.catalog.as_ref(), &entries)
            .await
            .into_iter()
            .flatten()
            .collect();

        info!(
            emotion = %mapping.label,
            step = step.name(),
            page = filters.page,
            total_results = first.total_results,
            returned = results.len(),
            "Resolved recommendations"
        );

        Ok(ResultPage {
            results,
            total_results: first.total_results,
            total_pages: total_pages(first.total_results, s.page_size, s.max_pages),
            current_page: filters.page,
        })
    }

    /// Run the chain sequentially. Only a failure of the strict step is
    /// fatal; other failing steps count as empty.
    async fn first_non_empty(
        &self,
        chain: Vec<RelaxationStep>,
        strict: &CatalogQuery,
        mapping: &EmotionMapping,
        native_page: u32,
    ) -> Result<Option<(RelaxationStep, CatalogQuery, MoviePage)>, ResolveError> {
        for step in chain {
            let query = step.query(strict, mapping);
            let page = match self.catalog.discover(&query, native_page).await {
                Ok(page) => page,
                Err(e) if step == RelaxationStep::Strict => return Err(e.into()),
                Err(e) => {
                    warn!(step = step.name(), error = %e, "Relaxation step failed");
                    continue;
                }
            };

            if page.total_results > 0 {
                return Ok(Some((step, query, page)));
            }
            debug!(step = step.name(), "No matches, relaxing query");
        }
        Ok(None)
    }

    /// Look up every keyword concurrently; misses and failures are skipped.
    async fn resolve_keywords(&self, mapping: &EmotionMapping) -> Vec<u64> {
        let lookups = mapping.keywords.iter().map(|keyword| async move {
            match self.catalog.search_keywords(keyword).await {
                Ok(page) => page.results.first().map(|k| k.id),
                Err(e) => {
                    warn!(keyword = *keyword, error = %e, "Keyword lookup failed");
                    None
                }
            }
        });

        let mut ids = Vec::new();
        for id in join_all(lookups).await.into_iter().flatten() {
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
        debug!(emotion = %mapping.label, resolved = ids.len(), "Resolved keywords");
        ids
    }
}
