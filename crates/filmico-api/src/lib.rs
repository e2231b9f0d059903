//! Movie catalog clients.
//!
//! [`traits::MovieCatalog`] is the read-only contract the rest of the
//! workspace consumes; [`tmdb::TmdbClient`] implements it against The Movie
//! Database v3 API.

pub mod tmdb;
pub mod traits;
