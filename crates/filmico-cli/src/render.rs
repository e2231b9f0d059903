//! Plain-text rendering of controller state.

use std::fmt::Write;

use filmico_api::traits::{Genre, MovieSummary};
use filmico_core::controller::ListController;

/// Shown for an empty list, whether the catalog had nothing or the request
/// failed.
pub const EMPTY_LIST: &str = "No movies found.";

pub const NO_TRAILER: &str = "No trailer available.";

fn stars(movie: &MovieSummary) -> String {
    let filled = movie.star_count();
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

fn title_with_year(movie: &MovieSummary) -> String {
    match movie.release_year() {
        Some(year) => format!("{} ({year})", movie.title),
        None => movie.title.clone(),
    }
}

/// One numbered line: title, year, rating and id.
pub fn movie_line(index: usize, movie: &MovieSummary) -> String {
    format!(
        "{index:>3}. {}  {} {:.1}/10  [#{}]",
        title_with_year(movie),
        stars(movie),
        movie.vote_average,
        movie.id
    )
}

/// The controller's list as numbered lines, with poster URLs under each line
/// when `image_base` is given. An empty controller renders [`EMPTY_LIST`].
pub fn movie_list(controller: &ListController, image_base: Option<&str>) -> String {
    if controller.is_empty() {
        return format!("{EMPTY_LIST}\n");
    }

    let mut out = String::new();
    for (i, movie) in controller.items().iter().enumerate() {
        let _ = writeln!(out, "{}", movie_line(i + 1, movie));
        if let Some(url) = image_base.and_then(|base| movie.poster_url(base)) {
            let _ = writeln!(out, "       {url}");
        }
    }
    out
}

/// Everything known about one movie: rating, language, release date,
/// backdrop, trailer and overview. Missing fields are left out.
pub fn movie_detail(movie: &MovieSummary, image_base: &str, trailer: Option<&str>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}  [#{}]", title_with_year(movie), movie.id);
    let _ = writeln!(out, "  {} {:.1} / 10", stars(movie), movie.vote_average);
    if let Some(language) = &movie.original_language {
        let _ = writeln!(out, "  Language: {}", language.to_uppercase());
    }
    if let Some(date) = &movie.release_date {
        let _ = writeln!(out, "  Released: {date}");
    }
    if let Some(url) = movie.backdrop_url(image_base) {
        let _ = writeln!(out, "  Backdrop: {url}");
    }
    let _ = writeln!(out, "  Trailer: {}", trailer.unwrap_or(NO_TRAILER));
    if let Some(overview) = &movie.overview {
        let _ = writeln!(out, "\n  {overview}");
    }
    out
}

/// Detail blocks for the controller's list, one blank line apart.
/// `trailers` lines up with the controller's items.
pub fn detail_list(
    controller: &ListController,
    image_base: &str,
    trailers: &[Option<String>],
) -> String {
    if controller.is_empty() {
        return format!("{EMPTY_LIST}\n");
    }

    controller
        .items()
        .iter()
        .enumerate()
        .map(|(i, movie)| {
            let trailer = trailers.get(i).and_then(|t| t.as_deref());
            movie_detail(movie, image_base, trailer)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn genre_list(genres: &[Genre]) -> String {
    if genres.is_empty() {
        return "No genres available.\n".to_string();
    }
    genres
        .iter()
        .map(|g| format!("{:>6}  {}\n", g.id, g.name))
        .collect()
}
