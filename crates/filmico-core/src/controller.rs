//! Incremental movie list controller.
//!
//! [`ListController`] owns the displayed movies, the pagination cursor, the
//! browse/filter mode and the in-flight flag. It never performs I/O: each
//! command hands back a [`Fetch`] describing the request to run, and the
//! caller feeds the outcome back through [`ListController::settle`]. This is
//! the same split an `update` function and its async `Task` have in an Elm
//! style UI.
//!
//! Every issued fetch carries an epoch. A newer search or reset bumps the
//! epoch, and a settlement from an older one is discarded so a slow response
//! can't overwrite results the user has already moved past.

use filmico_api::traits::{Genre, MovieSummary};

use crate::error::FetchFailed;
use crate::query::{self, CatalogQuery};
use crate::scroll::{self, ScrollMetrics};

/// Which result set the list shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Paginated popular movies; scrolling appends pages.
    #[default]
    Browsing,
    /// A single page of genre or title results.
    Filtering,
}

/// A catalog request the controller wants performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Popular { page: u32 },
    Search(CatalogQuery),
}

/// A request tagged with the epoch it was issued under.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "a fetch leaves the controller pending until it is settled"]
pub struct Fetch {
    epoch: u64,
    request: Request,
}

impl Fetch {
    pub fn request(&self) -> &Request {
        &self.request
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Pair this fetch with its outcome.
    pub fn settle(self, result: Result<Vec<MovieSummary>, FetchFailed>) -> Settled {
        Settled {
            fetch: self,
            result,
        }
    }
}

/// A completed fetch, ready to be applied.
#[derive(Debug, Clone)]
pub struct Settled {
    fetch: Fetch,
    result: Result<Vec<MovieSummary>, FetchFailed>,
}

impl Settled {
    pub fn request(&self) -> &Request {
        &self.fetch.request
    }

    pub fn result(&self) -> &Result<Vec<MovieSummary>, FetchFailed> {
        &self.result
    }
}

/// State behind the home screen's movie list.
#[derive(Debug, Default)]
pub struct ListController {
    items: Vec<MovieSummary>,
    page: u32,
    mode: Mode,
    pending: bool,
    query: String,
    genres: Vec<Genre>,
    epoch: u64,
}

impl ListController {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Accessors ────────────────────────────────────────────────

    pub fn items(&self) -> &[MovieSummary] {
        &self.items
    }

    /// Last popular page appended. Zero before the first page lands.
    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn genres(&self) -> &[Genre] {
        &self.genres
    }

    /// Nothing to show and nothing on the way: render the empty state.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty() && !self.pending
    }

    /// Install the genre list used to resolve searches.
    pub fn set_genres(&mut self, genres: Vec<Genre>) {
        tracing::debug!(count = genres.len(), "genres loaded");
        self.genres = genres;
    }

    // ── Commands ─────────────────────────────────────────────────

    /// Request the next popular page.
    ///
    /// Returns `None` while another request is in flight or outside
    /// browsing mode. Repeated scroll events are dropped, never queued.
    pub fn load_next_page(&mut self) -> Option<Fetch> {
        if self.mode != Mode::Browsing {
            return None;
        }
        if self.pending {
            tracing::trace!(page = self.page, "next page suppressed: request in flight");
            return None;
        }
        let page = self.page + 1;
        Some(self.issue(Request::Popular { page }))
    }

    /// Submit search text. Blank text is a [`reset`](Self::reset).
    ///
    /// A search always starts immediately; whatever was in flight becomes
    /// stale.
    pub fn submit_query(&mut self, text: &str) -> Fetch {
        let Some(target) = query::resolve(text, &self.genres) else {
            return self.reset();
        };

        self.query = text.to_string();
        if self.mode != Mode::Filtering {
            tracing::info!("switching to filtering mode");
        }
        self.mode = Mode::Filtering;
        match &target {
            CatalogQuery::Genre(genre) => {
                tracing::debug!(genre_id = genre.id, name = %genre.name, "filtering by genre");
            }
            CatalogQuery::Title(title) => tracing::debug!(%title, "searching by title"),
        }
        self.issue(Request::Search(target))
    }

    /// Drop the current list and start browsing again from page 1.
    pub fn reset(&mut self) -> Fetch {
        if self.mode != Mode::Browsing {
            tracing::info!("switching to browsing mode");
        }
        self.mode = Mode::Browsing;
        self.query.clear();
        self.page = 0;
        self.items.clear();
        self.issue(Request::Popular { page: 1 })
    }

    /// Track the search box. Clearing it returns to browsing without a submit.
    pub fn on_query_text_change(&mut self, text: &str) -> Option<Fetch> {
        if text.trim().is_empty() {
            return Some(self.reset());
        }
        self.query = text.to_string();
        None
    }

    /// Scroll notification: load the next page once the end is near.
    pub fn on_scroll(&mut self, metrics: ScrollMetrics, threshold: f32) -> Option<Fetch> {
        if scroll::should_prefetch(metrics, threshold) {
            self.load_next_page()
        } else {
            None
        }
    }

    /// Apply a finished fetch. Returns `false` if it was stale and ignored.
    pub fn settle(&mut self, settled: Settled) -> bool {
        let Settled { fetch, result } = settled;
        if fetch.epoch != self.epoch {
            tracing::debug!(
                stale = fetch.epoch,
                current = self.epoch,
                "discarding stale response"
            );
            return false;
        }
        self.pending = false;

        match (fetch.request, result) {
            (Request::Popular { page }, Ok(movies)) => {
                tracing::debug!(page, count = movies.len(), "page appended");
                self.items.extend(movies);
                self.page = page;
            }
            (Request::Popular { page }, Err(err)) => {
                // Items are kept; after a reset they are already empty.
                tracing::warn!(page, error = %err, "failed to load popular movies");
            }
            (Request::Search(_), Ok(movies)) => {
                tracing::debug!(count = movies.len(), "search results replaced list");
                self.items = movies;
            }
            (Request::Search(_), Err(err)) => {
                tracing::warn!(error = %err, "search failed");
                self.items.clear();
            }
        }
        true
    }

    fn issue(&mut self, request: Request) -> Fetch {
        self.epoch += 1;
        self.pending = true;
        Fetch {
            epoch: self.epoch,
            request,
        }
    }
}
