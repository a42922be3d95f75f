use serde::{Deserialize, Serialize};

use crate::catalog::{MovieDetails, MovieListEntry};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Director {
    pub name: String,
    pub profile_path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CastEntry {
    pub name: String,
    pub character: Option<String>,
    pub profile_path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trailer {
    pub key: String,
    pub name: String,
}

/// A movie card as served to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieSummary {
    pub id: u64,
    pub title: String,
    pub original_title: String,
    pub overview: String,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub release_date: Option<String>,
    pub runtime: Option<u32>,
    pub vote_average: f64,
    pub vote_count: u64,
    pub genres: Vec<String>,
    pub director: Option<Director>,
    pub cast: Vec<CastEntry>,
    pub trailer: Option<Trailer>,
}

impl MovieSummary {
    /// A card built from a listing entry alone, without credits.
    pub fn from_entry(entry: &MovieListEntry) -> Self {
        Self {
            id: entry.id,
            title: entry.title.clone(),
            original_title: entry.original_title.clone(),
            overview: entry.overview.clone(),
            poster_path: entry.poster_path.clone(),
            backdrop_path: entry.backdrop_path.clone(),
            release_date: entry.release_date.clone(),
            runtime: entry.runtime,
            vote_average: entry.vote_average,
            vote_count: entry.vote_count,
            genres: Vec::new(),
            director: None,
            cast: Vec::new(),
            trailer: None,
        }
    }

    pub fn from_details(details: &MovieDetails) -> Self {
        Self {
            id: details.id,
            title: details.title.clone(),
            original_title: details.original_title.clone(),
            overview: details.overview.clone(),
            poster_path: details.poster_path.clone(),
            backdrop_path: details.backdrop_path.clone(),
            release_date: details.release_date.clone(),
            runtime: details.runtime,
            vote_average: details.vote_average,
            vote_count: details.vote_count,
            genres: Vec::new(),
            director: None,
            cast: Vec::new(),
            trailer: None,
        }
    }
}

/// One application page of recommendations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultPage {
    pub results: Vec<MovieSummary>,
    pub total_results: u64,
    pub total_pages: u32,
    pub current_page: u32,
}

impl ResultPage {
    pub fn empty(current_page: u32) -> Self {
        Self {
            results: Vec::new(),
            total_results: 0,
            total_pages: 0,
            current_page,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchPage {
    pub results: Vec<MovieSummary>,
    pub total_results: u64,
    pub total_pages: u32,
}
