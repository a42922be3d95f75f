#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Catalog returned status {status}: {message}")]
    Status { status: u16, message: String },
    #[error("Failed to parse catalog response: {0}")]
    Parse(#[from] serde_json::Error),
}

impl CatalogError {
    /// Upstream HTTP status, when the catalog answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            CatalogError::Status { status, .. } => Some(*status),
            CatalogError::Http(e) => e.status().map(|s| s.as_u16()),
            CatalogError::Parse(_) => None,
        }
    }
}
