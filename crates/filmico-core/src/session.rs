//! Sequential driver pairing a [`ListController`] with a catalog.
//!
//! Each command awaits its own fetch before returning, which suits the
//! command line. Front ends that keep handling input while a request is out
//! should drive the controller and [`fetch::execute`] themselves.

use filmico_api::traits::MovieCatalog;

use crate::controller::{Fetch, ListController};
use crate::fetch;
use crate::scroll::ScrollMetrics;
use crate::trailer;

/// Default prefetch threshold, in viewport lengths from the end.
pub const DEFAULT_PREFETCH_THRESHOLD: f32 = 0.5;

pub struct BrowseSession<C> {
    catalog: C,
    controller: ListController,
    prefetch_threshold: f32,
}

impl<C: MovieCatalog> BrowseSession<C> {
    pub fn new(catalog: C) -> Self {
        Self {
            catalog,
            controller: ListController::new(),
            prefetch_threshold: DEFAULT_PREFETCH_THRESHOLD,
        }
    }

    pub fn with_prefetch_threshold(mut self, threshold: f32) -> Self {
        self.prefetch_threshold = threshold;
        self
    }

    pub fn controller(&self) -> &ListController {
        &self.controller
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Load genres and the first popular page concurrently.
    pub async fn start(&mut self) {
        let first_page = self.controller.load_next_page();
        let catalog = &self.catalog;
        let (genres, settled) = futures::join!(catalog.genres(), async move {
            match first_page {
                Some(f) => Some(fetch::execute(catalog, f).await),
                None => None,
            }
        });

        match genres {
            Ok(genres) => self.controller.set_genres(genres),
            Err(e) => tracing::warn!(error = %e, "failed to load genres"),
        }
        if let Some(settled) = settled {
            self.controller.settle(settled);
        }
    }

    /// Load the genre list alone, e.g. before a one-off search.
    pub async fn load_genres(&mut self) {
        match self.catalog.genres().await {
            Ok(genres) => self.controller.set_genres(genres),
            Err(e) => tracing::warn!(error = %e, "failed to load genres"),
        }
    }

    /// Returns `false` when no request was issued.
    pub async fn load_next_page(&mut self) -> bool {
        match self.controller.load_next_page() {
            Some(f) => self.run(f).await,
            None => false,
        }
    }

    pub async fn on_scroll(&mut self, metrics: ScrollMetrics) -> bool {
        match self.controller.on_scroll(metrics, self.prefetch_threshold) {
            Some(f) => self.run(f).await,
            None => false,
        }
    }

    pub async fn submit_query(&mut self, text: &str) {
        let f = self.controller.submit_query(text);
        self.run(f).await;
    }

    pub async fn on_query_text_change(&mut self, text: &str) {
        if let Some(f) = self.controller.on_query_text_change(text) {
            self.run(f).await;
        }
    }

    /// Trailer URL for a movie, if it has one on YouTube.
    pub async fn trailer(&self, movie_id: u64) -> Option<String> {
        trailer::fetch_trailer(&self.catalog, movie_id).await
    }

    /// Trailer lookups for several movies at once, in the order given.
    pub async fn trailers(&self, movie_ids: &[u64]) -> Vec<Option<String>> {
        futures::future::join_all(movie_ids.iter().map(|&id| self.trailer(id))).await
    }

    async fn run(&mut self, f: Fetch) -> bool {
        let settled = fetch::execute(&self.catalog, f).await;
        self.controller.settle(settled)
    }
}
