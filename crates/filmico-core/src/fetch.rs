use filmico_api::traits::MovieCatalog;

use crate::controller::{Fetch, Request, Settled};
use crate::error::FetchFailed;
use crate::query::CatalogQuery;

/// Run a controller fetch against a catalog.
///
/// Catalog errors of any kind come back as [`FetchFailed`]; nothing here
/// returns early, so the result can always be handed to
/// [`ListController::settle`](crate::controller::ListController::settle).
pub async fn execute<C: MovieCatalog>(catalog: &C, fetch: Fetch) -> Settled {
    tracing::trace!(epoch = fetch.epoch(), request = ?fetch.request(), "executing fetch");
    let result = match fetch.request() {
        Request::Popular { page } => catalog
            .popular_movies(*page)
            .await
            .map_err(|e| FetchFailed::new("popular movies", e)),
        Request::Search(CatalogQuery::Genre(genre)) => catalog
            .movies_by_genre(genre.id)
            .await
            .map_err(|e| FetchFailed::new("movies by genre", e)),
        Request::Search(CatalogQuery::Title(title)) => catalog
            .search_movies(title)
            .await
            .map_err(|e| FetchFailed::new("movie search", e)),
    };
    fetch.settle(result)
}
