use serde::{Deserialize, Serialize};

/// One page of a discover or search listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MoviePage {
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub results: Vec<MovieListEntry>,
    #[serde(default)]
    pub total_results: u64,
    #[serde(default)]
    pub total_pages: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MovieListEntry {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub original_title: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub runtime: Option<u32>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub vote_count: u64,
}

/// Movie detail with `credits` and `videos` appended.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MovieDetails {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub original_title: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub runtime: Option<u32>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub vote_count: u64,
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub credits: Option<Credits>,
    #[serde(default)]
    pub videos: Option<Videos>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Genre {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Credits {
    #[serde(default)]
    pub cast: Vec<CastMember>,
    #[serde(default)]
    pub crew: Vec<CrewMember>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CastMember {
    pub name: String,
    #[serde(default)]
    pub character: Option<String>,
    #[serde(default)]
    pub profile_path: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CrewMember {
    pub name: String,
    #[serde(default)]
    pub job: String,
    #[serde(default)]
    pub profile_path: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Videos {
    #[serde(default)]
    pub results: Vec<Video>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Video {
    pub key: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub video_type: String,
    #[serde(default)]
    pub site: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KeywordPage {
    #[serde(default)]
    pub results: Vec<Keyword>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Keyword {
    pub id: u64,
    pub name: String,
}

/// Error body the catalog sends along with non-success statuses.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct StatusBody {
    #[serde(default)]
    pub status_message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_details_with_nulls() {
        let json = r#"{
            "id": 42,
            "title": "Heneral Luna",
            "original_title": "Heneral Luna",
            "overview": "",
            "poster_path": null,
            "release_date": "2015-09-09",
            "runtime": 118,
            "vote_average": 7.4,
            "vote_count": 120,
            "genres": [{"id": 36, "name": "History"}],
            "credits": {
                "cast": [{"name": "John Arcilla", "character": "Antonio Luna", "profile_path": null}],
                "crew": [{"name": "Jerrold Tarog", "job": "Director", "profile_path": "/jt.jpg"}]
            },
            "videos": {"results": [{"key": "abc", "name": "Official Trailer", "type": "Trailer", "site": "YouTube"}]}
        }"#;

        let details: MovieDetails = serde_json::from_str(json).unwrap();
        assert_eq!(details.id, 42);
        assert_eq!(details.poster_path, None);
        assert_eq!(details.runtime, Some(118));
        let credits = details.credits.unwrap();
        assert_eq!(credits.crew[0].job, "Director");
        assert_eq!(details.videos.unwrap().results[0].video_type, "Trailer");
    }

    #[test]
    fn test_parse_sparse_page() {
        let page: MoviePage = serde_json::from_str(r#"{"results": [{"id": 7}]}"#).unwrap();
        assert_eq!(page.results.len(), 1);
        assert_eq!(page.results[0].title, "");
        assert_eq!(page.total_results, 0);
    }
}
