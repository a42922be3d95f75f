use axum::{extract::Request, http::StatusCode, response::IntoResponse, routing::get, Router};
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use crate::api::AppError;
use crate::catalog::CatalogSource;
use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    catalog: Option<Arc<dyn CatalogSource>>,
}

impl AppState {
    /// `catalog` is `None` when no upstream credential is configured; every
    /// API request then fails without contacting the catalog.
    pub fn new(config: Config, catalog: Option<Arc<dyn CatalogSource>>) -> Self {
        Self {
            config: Arc::new(config),
            catalog,
        }
    }

    pub fn catalog(&self) -> Result<Arc<dyn CatalogSource>, AppError> {
        self.catalog.clone().ok_or(AppError::Configuration)
    }
}

pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/recommendations", get(crate::api::get_recommendations))
        .route("/movie/:id", get(crate::api::get_movie))
        .route("/search", get(crate::api::search_movies));

    let router = Router::new()
        .route("/robots.txt", get(robots_txt_handler))
        .merge(api_routes)
        .fallback(fallback_handler);

    // normalize_path has to wrap the router itself so the rewritten
    // path is what gets routed.
    let router = router
        .layer(axum::middleware::from_fn(crate::middleware::log_request))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    Router::new()
        .fallback_service(router)
        .layer(axum::middleware::from_fn(crate::middleware::normalize_path))
}

async fn robots_txt_handler() -> &'static str {
    "User-agent: *\nDisallow: /\n"
}

async fn fallback_handler(req: Request<axum::body::Body>) -> impl IntoResponse {
    if req.method() == axum::http::Method::OPTIONS {
        return StatusCode::OK.into_response();
    }
    StatusCode::NOT_FOUND.into_response()
}
