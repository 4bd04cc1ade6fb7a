//! Movie, TV and genre listing types.

use serde::{Deserialize, Serialize};

/// A page of results, as returned by search, discover and list endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Page<T> {
    /// The page number (1-based).
    pub page: u32,

    /// The entries on this page.
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,

    /// Total number of pages.
    #[serde(default)]
    pub total_pages: u32,

    /// Total number of results across all pages.
    #[serde(default)]
    pub total_results: u32,
}

impl<T> Page<T> {
    /// Returns `true` if there are pages after this one.
    #[must_use]
    pub const fn has_next_page(&self) -> bool {
        self.page < self.total_pages
    }
}

/// A movie as it appears in listings.
///
/// Release dates are kept as strings because TMDB sends `""` for unknown
/// dates.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct MovieSummary {
    pub id: u64,
    pub title: Option<String>,
    pub original_title: Option<String>,
    pub original_language: Option<String>,
    pub overview: Option<String>,
    pub release_date: Option<String>,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub genre_ids: Vec<u32>,
    pub popularity: Option<f64>,
    pub vote_average: Option<f64>,
    pub vote_count: Option<u32>,
    pub adult: Option<bool>,
    pub video: Option<bool>,
}

/// A TV series as it appears in listings.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct TvSummary {
    pub id: u64,
    pub name: Option<String>,
    pub original_name: Option<String>,
    pub original_language: Option<String>,
    pub overview: Option<String>,
    pub first_air_date: Option<String>,
    #[serde(default)]
    pub origin_country: Vec<String>,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub genre_ids: Vec<u32>,
    pub popularity: Option<f64>,
    pub vote_average: Option<f64>,
    pub vote_count: Option<u32>,
}

/// A genre.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Genre {
    pub id: u32,
    pub name: String,
}

/// The payload of `genre/movie/list` and `genre/tv/list`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct GenreList {
    pub genres: Vec<Genre>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movie_page_deserialization() {
        let json = r#"{
            "page": 1,
            "results": [{
                "adult": false,
                "backdrop_path": "/hZkgoQYus5vegHoetLkCJzb17zJ.jpg",
                "genre_ids": [18],
                "id": 550,
                "original_language": "en",
                "original_title": "Fight Club",
                "overview": "A ticking-time-bomb insomniac...",
                "popularity": 61.416,
                "poster_path": "/pB8BM7pdSp6B6Ih7QZ4DrQ3PmJK.jpg",
                "release_date": "1999-10-15",
                "title": "Fight Club",
                "video": false,
                "vote_average": 8.433,
                "vote_count": 26280
            }],
            "total_pages": 3,
            "total_results": 55
        }"#;

        let page: Page<MovieSummary> = serde_json::from_str(json).unwrap();
        assert_eq!(page.results.len(), 1);
        assert_eq!(page.results[0].id, 550);
        assert_eq!(page.results[0].genre_ids, vec![18]);
        assert_eq!(page.results[0].release_date.as_deref(), Some("1999-10-15"));
        assert!(page.has_next_page());
    }

    #[test]
    fn test_tv_summary_tolerates_missing_fields() {
        let tv: TvSummary = serde_json::from_str(r#"{"id": 1399, "name": "Game of Thrones"}"#).unwrap();
        assert_eq!(tv.id, 1399);
        assert!(tv.origin_country.is_empty());
        assert!(tv.vote_average.is_none());
    }

    #[test]
    fn test_last_page_has_no_next() {
        let page: Page<TvSummary> =
            serde_json::from_str(r#"{"page": 2, "results": [], "total_pages": 2, "total_results": 20}"#)
                .unwrap();
        assert!(!page.has_next_page());
    }
}
