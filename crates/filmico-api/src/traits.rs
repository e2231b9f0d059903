//! Trait definitions for movie catalog sources.
//!
//! The list controller and the trailer lookup only see [`MovieCatalog`], so
//! tests can swap the TMDB client for a scripted fake.

use std::future::Future;

/// Image width segment used for posters and backdrops.
pub const IMAGE_SIZE: &str = "w500";

/// A read-only, paginated movie metadata source.
pub trait MovieCatalog: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    /// One page of popular movies. Pages start at 1.
    fn popular_movies(
        &self,
        page: u32,
    ) -> impl Future<Output = Result<Vec<MovieSummary>, Self::Error>> + Send;

    /// Free-text title search. Only the first page is returned.
    fn search_movies(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<Vec<MovieSummary>, Self::Error>> + Send;

    /// All movie genres known to the source.
    fn genres(&self) -> impl Future<Output = Result<Vec<Genre>, Self::Error>> + Send;

    /// Movies tagged with the given genre. Only the first page is returned.
    fn movies_by_genre(
        &self,
        genre_id: u64,
    ) -> impl Future<Output = Result<Vec<MovieSummary>, Self::Error>> + Send;

    /// Videos (trailers, teasers, clips) attached to a movie.
    fn movie_videos(
        &self,
        movie_id: u64,
    ) -> impl Future<Output = Result<Vec<Video>, Self::Error>> + Send;
}

/// A movie as it appears in list and search results.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MovieSummary {
    pub id: u64,
    pub title: String,
    pub poster_path: Option<String>,
    pub vote_average: f32,
    pub overview: Option<String>,
    pub release_date: Option<String>,
    pub backdrop_path: Option<String>,
    pub original_language: Option<String>,
}

impl MovieSummary {
    /// A summary with only the identifying fields set.
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            poster_path: None,
            vote_average: 0.0,
            overview: None,
            release_date: None,
            backdrop_path: None,
            original_language: None,
        }
    }

    /// Full poster URL under `image_base` (e.g. `https://image.tmdb.org/t/p`).
    pub fn poster_url(&self, image_base: &str) -> Option<String> {
        self.poster_path
            .as_deref()
            .map(|path| image_url(image_base, path))
    }

    pub fn backdrop_url(&self, image_base: &str) -> Option<String> {
        self.backdrop_path
            .as_deref()
            .map(|path| image_url(image_base, path))
    }

    /// Whole stars on a five-star scale: half the vote average, rounded down.
    pub fn star_count(&self) -> usize {
        let half = (self.vote_average / 2.0).floor();
        if half.is_nan() || half <= 0.0 {
            0
        } else {
            (half as usize).min(5)
        }
    }

    /// Release year parsed from a `YYYY-MM-DD` date.
    pub fn release_year(&self) -> Option<u32> {
        self.release_date
            .as_deref()
            .and_then(|d| d.get(..4))
            .and_then(|y| y.parse().ok())
    }
}

fn image_url(image_base: &str, path: &str) -> String {
    format!("{}/{IMAGE_SIZE}{path}", image_base.trim_end_matches('/'))
}

/// A movie genre label.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Genre {
    pub id: u64,
    pub name: String,
}

/// A video attached to a movie.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Video {
    pub key: String,
    pub site: String,
    pub kind: String,
    pub name: String,
}
