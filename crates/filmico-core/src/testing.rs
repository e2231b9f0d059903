//! Scripted in-memory catalog for tests.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use filmico_api::traits::{Genre, MovieCatalog, MovieSummary, Video};

#[derive(Debug, thiserror::Error)]
#[error("fake catalog: {0}")]
pub struct FakeError(pub String);

/// Catalog answering from fixed data and recording every call.
#[derive(Default)]
pub struct FakeCatalog {
    /// Popular page `n` is `popular[n - 1]`; pages past the end are empty.
    pub popular: Vec<Vec<MovieSummary>>,
    pub failing_pages: HashSet<u32>,
    pub titles: HashMap<String, Vec<MovieSummary>>,
    pub fail_search: bool,
    pub by_genre: HashMap<u64, Vec<MovieSummary>>,
    pub fail_genre_filter: bool,
    pub genres: Vec<Genre>,
    pub fail_genres: bool,
    pub videos: HashMap<u64, Vec<Video>>,
    pub call_log: Mutex<Vec<String>>,
}

impl FakeCatalog {
    pub fn calls(&self) -> Vec<String> {
        self.call_log.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.call_log.lock().unwrap().push(call);
    }
}

pub fn movies(ids: std::ops::Range<u64>) -> Vec<MovieSummary> {
    ids.map(|id| MovieSummary::new(id, format!("Movie {id}")))
        .collect()
}

impl MovieCatalog for FakeCatalog {
    type Error = FakeError;

    async fn popular_movies(&self, page: u32) -> Result<Vec<MovieSummary>, FakeError> {
        self.record(format!("popular:{page}"));
        if self.failing_pages.contains(&page) {
            return Err(FakeError(format!("page {page} unavailable")));
        }
        let index = page.saturating_sub(1) as usize;
        Ok(self.popular.get(index).cloned().unwrap_or_default())
    }

    async fn search_movies(&self, query: &str) -> Result<Vec<MovieSummary>, FakeError> {
        self.record(format!("search:{query}"));
        if self.fail_search {
            return Err(FakeError("search timed out".into()));
        }
        Ok(self.titles.get(query).cloned().unwrap_or_default())
    }

    async fn genres(&self) -> Result<Vec<Genre>, FakeError> {
        self.record("genres".into());
        if self.fail_genres {
            return Err(FakeError("genres unavailable".into()));
        }
        Ok(self.genres.clone())
    }

    async fn movies_by_genre(&self, genre_id: u64) -> Result<Vec<MovieSummary>, FakeError> {
        self.record(format!("genre:{genre_id}"));
        if self.fail_genre_filter {
            return Err(FakeError(format!("genre {genre_id} unavailable")));
        }
        Ok(self.by_genre.get(&genre_id).cloned().unwrap_or_default())
    }

    async fn movie_videos(&self, movie_id: u64) -> Result<Vec<Video>, FakeError> {
        self.record(format!("videos:{movie_id}"));
        self.videos
            .get(&movie_id)
            .cloned()
            .ok_or_else(|| FakeError(format!("movie {movie_id} not found")))
    }
}
