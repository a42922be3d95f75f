use tracing::debug;

use super::emotion::EmotionMapping;
use crate::catalog::{CatalogQuery, ReleaseSpan, RuntimeBounds};

/// Region, origin country and certification jurisdiction of every query.
pub const REGION: &str = "PH";
/// Certification ceiling of every query.
pub const CERTIFICATION_CEILING: &str = "PG";
pub const SORT_BY: &str = "popularity.desc";

/// Minutes added on each side of a requested duration range.
pub const RUNTIME_BUFFER: u32 = 5;
/// Lowest runtime bound ever sent upstream.
pub const MIN_RUNTIME: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Decade {
    Eighties,
    Nineties,
    Noughties,
    Tens,
    Twenties,
}

impl Decade {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "80s" => Some(Decade::Eighties),
            "90s" => Some(Decade::Nineties),
            "00s" => Some(Decade::Noughties),
            "10s" => Some(Decade::Tens),
            "20s" => Some(Decade::Twenties),
            _ => None,
        }
    }

    pub fn years(&self) -> (u16, u16) {
        match self {
            Decade::Eighties => (1980, 1989),
            Decade::Nineties => (1990, 1999),
            Decade::Noughties => (2000, 2009),
            Decade::Tens => (2010, 2019),
            Decade::Twenties => (2020, 2029),
        }
    }
}

/// Requested runtime range in minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationRange {
    pub min: u32,
    pub max: u32,
}

/// User filters for one recommendation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSpec {
    /// 0 means no popularity constraint.
    pub popularity_tier: u8,
    pub duration: Option<DurationRange>,
    pub decades: Vec<Decade>,
    /// Application page, 1-based.
    pub page: u32,
}

impl Default for FilterSpec {
    fn default() -> Self {
        Self {
            popularity_tier: 0,
            duration: None,
            decades: Vec::new(),
            page: 1,
        }
    }
}

impl FilterSpec {
    /// Build from raw query-string values. Malformed optional values are
    /// dropped rather than rejected.
    pub fn from_raw(
        popularity: Option<&str>,
        duration: Option<&str>,
        decades: Option<&str>,
        page: u32,
    ) -> Self {
        Self {
            popularity_tier: popularity.map(parse_popularity).unwrap_or(0),
            duration: duration.and_then(parse_duration),
            decades: decades.map(parse_decades).unwrap_or_default(),
            page,
        }
    }
}

pub fn parse_popularity(raw: &str) -> u8 {
    match raw.trim().parse::<u8>() {
        Ok(tier) if tier <= 5 => tier,
        _ => {
            debug!(popularity = raw, "Ignoring popularity value");
            0
        }
    }
}

/// Parse a JSON `[min, max]` pair of minutes.
pub fn parse_duration(raw: &str) -> Option<DurationRange> {
    match serde_json::from_str::<Vec<u32>>(raw) {
        Ok(pair) if pair.len() == 2 && pair[0] <= pair[1] => Some(DurationRange {
            min: pair[0],
            max: pair[1],
        }),
        _ => {
            debug!(duration = raw, "Ignoring invalid duration format");
            None
        }
    }
}

pub fn parse_decades(raw: &str) -> Vec<Decade> {
    let mut decades = Vec::new();
    for token in raw.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        match Decade::from_token(token) {
            Some(decade) if !decades.contains(&decade) => decades.push(decade),
            Some(_) => {}
            None => debug!(decade = token, "Ignoring unknown decade"),
        }
    }
    decades
}

/// Minimum vote average for a popularity tier.
pub fn vote_floor(tier: u8) -> Option<f32> {
    match tier {
        1 => Some(2.0),
        2 => Some(4.0),
        3 => Some(6.0),
        4 => Some(8.0),
        5 => Some(8.5),
        _ => None,
    }
}

pub fn runtime_bounds(range: DurationRange) -> RuntimeBounds {
    RuntimeBounds {
        min: range.min.saturating_sub(RUNTIME_BUFFER).max(MIN_RUNTIME),
        max: range.max.saturating_add(RUNTIME_BUFFER).max(MIN_RUNTIME),
    }
}

/// One contiguous span from the earliest selected decade to the latest.
/// Unselected decades in between are included.
pub fn release_span(decades: &[Decade]) -> Option<ReleaseSpan> {
    let start_year = decades.iter().map(|d| d.years().0).min()?;
    let end_year = decades.iter().map(|d| d.years().1).max()?;
    Some(ReleaseSpan {
        start_year,
        end_year,
    })
}

/// The region/certification lock with nothing else applied.
pub fn base_query(genres: &[u32]) -> CatalogQuery {
    CatalogQuery {
        region: REGION.to_string(),
        origin_country: None,
        certification_country: REGION.to_string(),
        certification_lte: CERTIFICATION_CEILING.to_string(),
        sort_by: SORT_BY.to_string(),
        genres: genres.to_vec(),
        keywords: Vec::new(),
        vote_average_gte: None,
        runtime: None,
        release: None,
    }
}

pub fn normalize(spec: &FilterSpec, mapping: &EmotionMapping) -> CatalogQuery {
    CatalogQuery {
        origin_country: Some(REGION.to_string()),
        vote_average_gte: vote_floor(spec.popularity_tier),
        runtime: spec.duration.map(runtime_bounds),
        release: release_span(&spec.decades),
        ..base_query(mapping.genres)
    }
}
