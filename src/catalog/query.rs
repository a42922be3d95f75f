/// Discover filters in the catalog's native vocabulary.
///
/// The native page number is deliberately not part of the query: the
/// resolution engine derives it from the application page and passes it
/// alongside.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogQuery {
    pub region: String,
    pub origin_country: Option<String>,
    pub certification_country: String,
    pub certification_lte: String,
    pub sort_by: String,
    pub genres: Vec<u32>,
    pub keywords: Vec<u64>,
    pub vote_average_gte: Option<f32>,
    pub runtime: Option<RuntimeBounds>,
    pub release: Option<ReleaseSpan>,
}

/// Runtime bounds in minutes, inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuntimeBounds {
    pub min: u32,
    pub max: u32,
}

/// Release years, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReleaseSpan {
    pub start_year: u16,
    pub end_year: u16,
}

fn join<T: ToString>(ids: &[T]) -> String {
    ids.iter().map(|id| id.to_string()).collect::<Vec<_>>().join("|")
}

impl CatalogQuery {
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("region", self.region.clone()),
            ("sort_by", self.sort_by.clone()),
        ];

        if let Some(ref origin) = self.origin_country {
            params.push(("with_origin_country", origin.clone()));
        }
        if !self.genres.is_empty() {
            params.push(("with_genres", join(&self.genres)));
        }
        params.push(("certification_country", self.certification_country.clone()));
        params.push(("certification.lte", self.certification_lte.clone()));

        if let Some(floor) = self.vote_average_gte {
            params.push(("vote_average.gte", format!("{:.1}", floor)));
        }
        if let Some(span) = self.release {
            params.push(("primary_release_date.gte", format!("{}-01-01", span.start_year)));
            params.push(("primary_release_date.lte", format!("{}-12-31", span.end_year)));
        }
        if let Some(runtime) = self.runtime {
            params.push(("with_runtime.gte", runtime.min.to_string()));
            params.push(("with_runtime.lte", runtime.max.to_string()));
        }
        if !self.keywords.is_empty() {
            params.push(("with_keywords", join(&self.keywords)));
        }

        params
    }
}
