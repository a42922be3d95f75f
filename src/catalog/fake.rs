//! In-memory catalog used by the engine and router tests.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use super::*;

pub const SOURCE_PAGE_SIZE: u32 = 20;

#[derive(Debug, Clone)]
pub enum Call {
    Discover(CatalogQuery, u32),
    Search(String, u32),
    Details(u64),
    Keyword(String),
}

type DiscoverFn = Box<dyn Fn(&CatalogQuery, u32) -> Result<MoviePage, CatalogError> + Send + Sync>;
type SearchFn = Box<dyn Fn(&str, u32) -> Result<MoviePage, CatalogError> + Send + Sync>;
type DetailsFn = Box<dyn Fn(u64) -> Result<MovieDetails, CatalogError> + Send + Sync>;

pub struct FakeCatalog {
    count: u64,
    discover: Option<DiscoverFn>,
    search: Option<SearchFn>,
    details: Option<DetailsFn>,
    failing_details: HashSet<u64>,
    keywords: HashMap<String, u64>,
    failing_keywords: HashSet<String>,
    calls: Mutex<Vec<Call>>,
}

pub fn entry(id: u64) -> MovieListEntry {
    MovieListEntry {
        id,
        title: format!("Pelikula {}", id),
        original_title: format!("Pelikula {}", id),
        overview: format!("Overview {}", id),
        poster_path: Some(format!("/poster{}.jpg", id)),
        backdrop_path: None,
        release_date: Some("2015-09-09".to_string()),
        runtime: None,
        vote_average: 7.5,
        vote_count: 100 + id,
    }
}

pub fn details(id: u64) -> MovieDetails {
    let list = entry(id);
    MovieDetails {
        id,
        title: list.title,
        original_title: list.original_title,
        overview: list.overview,
        poster_path: list.poster_path,
        backdrop_path: list.backdrop_path,
        release_date: list.release_date,
        runtime: Some(90 + id as u32 % 30),
        vote_average: list.vote_average,
        vote_count: list.vote_count,
        genres: vec![
            Genre { id: 18, name: "Drama".to_string() },
            Genre { id: 10749, name: "Romance".to_string() },
        ],
        credits: Some(Credits {
            cast: (1..=8)
                .map(|n| CastMember {
                    name: format!("Actor {}", n),
                    character: Some(format!("Role {}", n)),
                    profile_path: None,
                })
                .collect(),
            crew: vec![
                CrewMember {
                    name: "Screen Writer".to_string(),
                    job: "Screenplay".to_string(),
                    profile_path: None,
                },
                CrewMember {
                    name: format!("Director {}", id),
                    job: "Director".to_string(),
                    profile_path: Some("/director.jpg".to_string()),
                },
            ],
        }),
        videos: Some(Videos {
            results: vec![
                Video {
                    key: "teaser".to_string(),
                    name: "Teaser".to_string(),
                    video_type: "Teaser".to_string(),
                    site: "YouTube".to_string(),
                },
                Video {
                    key: "vimeo".to_string(),
                    name: "Trailer on Vimeo".to_string(),
                    video_type: "Trailer".to_string(),
                    site: "Vimeo".to_string(),
                },
                Video {
                    key: format!("yt{}", id),
                    name: "Official Trailer".to_string(),
                    video_type: "Trailer".to_string(),
                    site: "YouTube".to_string(),
                },
            ],
        }),
    }
}

/// Native page `page` of a stable catalog holding ids `1..=count`.
pub fn page_of(count: u64, page: u32) -> MoviePage {
    let size = SOURCE_PAGE_SIZE as u64;
    let start = (page as u64 - 1) * size;
    let end = (start + size).min(count);
    MoviePage {
        page,
        results: (start + 1..=end).map(entry).collect(),
        total_results: count,
        total_pages: count.div_ceil(size).min(500) as u32,
    }
}

impl FakeCatalog {
    pub fn with_movies(count: u64) -> Self {
        Self {
            count,
            discover: None,
            search: None,
            details: None,
            failing_details: HashSet::new(),
            keywords: HashMap::new(),
            failing_keywords: HashSet::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn empty() -> Self {
        Self::with_movies(0)
    }

    pub fn discover_with<F>(mut self, f: F) -> Self
    where
        F: Fn(&CatalogQuery, u32) -> Result<MoviePage, CatalogError> + Send + Sync + 'static,
    {
        self.discover = Some(Box::new(f));
        self
    }

    pub fn search_with<F>(mut self, f: F) -> Self
    where
        F: Fn(&str, u32) -> Result<MoviePage, CatalogError> + Send + Sync + 'static,
    {
        self.search = Some(Box::new(f));
        self
    }

    pub fn details_with<F>(mut self, f: F) -> Self
    where
        F: Fn(u64) -> Result<MovieDetails, CatalogError> + Send + Sync + 'static,
    {
        self.details = Some(Box::new(f));
        self
    }

    pub fn fail_details(mut self, id: u64) -> Self {
        self.failing_details.insert(id);
        self
    }

    pub fn keyword(mut self, name: &str, id: u64) -> Self {
        self.keywords.insert(name.to_string(), id);
        self
    }

    pub fn fail_keyword(mut self, name: &str) -> Self {
        self.failing_keywords.insert(name.to_string());
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn discover_calls(&self) -> Vec<(CatalogQuery, u32)> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Discover(q, p) => Some((q, p)),
                _ => None,
            })
            .collect()
    }

    pub fn detail_calls(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, Call::Details(_)))
            .count()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

pub fn not_found() -> CatalogError {
    CatalogError::Status {
        status: 404,
        message: "The resource you requested could not be found.".to_string(),
    }
}

#[async_trait]
impl CatalogSource for FakeCatalog {
    async fn discover(&self, query: &CatalogQuery, page: u32) -> Result<MoviePage, CatalogError> {
        self.record(Call::Discover(query.clone(), page));
        match self.discover {
            Some(ref f) => f(query, page),
            None => Ok(page_of(self.count, page)),
        }
    }

    async fn search(&self, text: &str, page: u32) -> Result<MoviePage, CatalogError> {
        self.record(Call::Search(text.to_string(), page));
        match self.search {
            Some(ref f) => f(text, page),
            None => Ok(page_of(self.count, page)),
        }
    }

    async fn movie_details(&self, id: u64) -> Result<MovieDetails, CatalogError> {
        self.record(Call::Details(id));
        if let Some(ref f) = self.details {
            return f(id);
        }
        if self.failing_details.contains(&id) || id > self.count {
            return Err(not_found());
        }
        Ok(details(id))
    }

    async fn search_keywords(&self, keyword: &str) -> Result<KeywordPage, CatalogError> {
        self.record(Call::Keyword(keyword.to_string()));
        if self.failing_keywords.contains(keyword) {
            return Err(CatalogError::Status {
                status: 500,
                message: "boom".to_string(),
            });
        }
        let results = self
            .keywords
            .get(keyword)
            .map(|id| {
                vec![Keyword {
                    id: *id,
                    name: keyword.to_string(),
                }]
            })
            .unwrap_or_default();
        Ok(KeywordPage { results })
    }
}
