//! Resolution of search text into a catalog request.

use filmico_api::traits::Genre;

/// What a submitted search turns into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogQuery {
    /// Text named a loaded genre: list that genre's movies.
    Genre(Genre),
    /// Free-text title search.
    Title(String),
}

/// Resolve search text against the loaded genres.
///
/// A case-insensitive exact match on a genre name always wins over a title
/// search. Returns `None` for blank text.
///
/// The match is exact except for surrounding whitespace: the text is trimmed
/// before the genre comparison, and the title query carries the trimmed text.
pub fn resolve(text: &str, genres: &[Genre]) -> Option<CatalogQuery> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    let needle = text.to_lowercase();
    let query = match genres.iter().find(|g| g.name.to_lowercase() == needle) {
        Some(genre) => CatalogQuery::Genre(genre.clone()),
        None => CatalogQuery::Title(text.to_string()),
    };
    Some(query)
}
