use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Json,
};
use serde::Deserialize;
use tracing::debug;

use super::error::{AppError, ErrorResponse};
use crate::recommend::{self, lookup, Engine, FilterSpec, MovieSummary, ResultPage, SearchPage};
use crate::server::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct RecommendationParams {
    pub emotion: Option<String>,
    pub popularity: Option<String>,
    pub duration: Option<String>,
    pub decades: Option<String>,
    pub page: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub query: Option<String>,
    pub page: Option<String>,
}

/// Absent means page 1; anything else must be a positive integer.
fn parse_page(raw: Option<&str>) -> Result<u32, AppError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(1),
        Some(s) => match s.parse::<u32>() {
            Ok(page) if page >= 1 => Ok(page),
            _ => Err(AppError::InvalidInput(format!("Invalid page: {}", s))),
        },
    }
}

fn query_params<T>(query: Result<Query<T>, QueryRejection>) -> Result<T, AppError> {
    query
        .map(|Query(params)| params)
        .map_err(|rejection| AppError::InvalidInput(rejection.body_text()))
}

fn non_empty(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|s| !s.is_empty())
}

pub async fn get_recommendations(
    State(state): State<AppState>,
    query: Result<Query<RecommendationParams>, QueryRejection>,
) -> Result<Json<ResultPage>, ErrorResponse> {
    let params = query_params(query).map_err(|e| e.paged(1))?;
    let page = parse_page(params.page.as_deref()).map_err(|e| e.paged(1))?;

    let emotion = non_empty(params.emotion.as_deref()).ok_or_else(|| {
        AppError::InvalidInput("Emotion parameter is required".to_string()).paged(page)
    })?;
    let mapping = lookup(emotion).map_err(|e| AppError::from(e).paged(page))?;
    let catalog = state.catalog().map_err(|e| e.paged(page))?;

    let filters = FilterSpec::from_raw(
        params.popularity.as_deref(),
        params.duration.as_deref(),
        params.decades.as_deref(),
        page,
    );
    debug!(emotion = %mapping.label, filters = ?filters, "Recommendation request");

    let engine = Engine::new(catalog, state.config.recommendations.clone());
    let result = engine
        .resolve(&mapping, &filters)
        .await
        .map_err(|e| AppError::from(e).paged(page))?;

    Ok(Json(result))
}

pub async fn get_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MovieSummary>, ErrorResponse> {
    let id = id
        .trim()
        .parse::<u64>()
        .map_err(|_| AppError::InvalidInput(format!("Invalid movie id: {}", id)).bare())?;
    let catalog = state.catalog().map_err(AppError::bare)?;

    let movie = recommend::movie_summary(catalog.as_ref(), id)
        .await
        .map_err(|e| AppError::upstream("Failed to fetch movie details", e).bare())?;

    Ok(Json(movie))
}

pub async fn search_movies(
    State(state): State<AppState>,
    query: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<SearchPage>, ErrorResponse> {
    let params = query_params(query).map_err(AppError::listed)?;
    let query = non_empty(params.query.as_deref())
        .ok_or_else(|| AppError::InvalidInput("Query parameter is required".to_string()).listed())?;
    let page = parse_page(params.page.as_deref()).map_err(AppError::listed)?;
    let max_pages = state.config.recommendations.max_pages;
    if page > max_pages {
        return Err(AppError::InvalidInput(format!("Page {} is out of range", page)).listed());
    }
    let catalog = state.catalog().map_err(AppError::listed)?;

    let result = recommend::search(
        catalog.as_ref(),
        query,
        page,
        state.config.recommendations.search_limit,
    )
    .await
    .map_err(|e| AppError::upstream("Failed to search movies", e).listed())?;

    Ok(Json(result))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_page() {
        assert_eq!(parse_page(None).unwrap(), 1);
        assert_eq!(parse_page(Some("")).unwrap(), 1);
        assert_eq!(parse_page(Some(" 3 ")).unwrap(), 3);
        assert!(matches!(parse_page(Some("0")), Err(AppError::InvalidInput(_))));
        assert!(matches!(parse_page(Some("-2")), Err(AppError::InvalidInput(_))));
        assert!(matches!(parse_page(Some("two")), Err(AppError::InvalidInput(_))));
    }
}
