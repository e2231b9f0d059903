use serde::Deserialize;

use crate::traits::{Genre, MovieSummary, Video};

// ── Movie list responses ────────────────────────────────────────

/// Shared shape of `/movie/popular`, `/search/movie` and `/discover/movie`.
#[derive(Debug, Deserialize)]
pub struct TmdbMovieListResponse {
    #[serde(default)]
    pub page: u32,
    pub results: Vec<TmdbMovie>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: u32,
}

#[derive(Debug, Deserialize)]
pub struct TmdbMovie {
    pub id: u64,
    pub title: String,
    pub poster_path: Option<String>,
    #[serde(default)]
    pub vote_average: f32,
    pub overview: Option<String>,
    pub release_date: Option<String>,
    pub backdrop_path: Option<String>,
    pub original_language: Option<String>,
}

// ── Genre responses ─────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct TmdbGenreListResponse {
    pub genres: Vec<TmdbGenre>,
}

#[derive(Debug, Deserialize)]
pub struct TmdbGenre {
    pub id: u64,
    pub name: String,
}

// ── Video responses ─────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct TmdbVideoListResponse {
    pub results: Vec<TmdbVideo>,
}

#[derive(Debug, Deserialize)]
pub struct TmdbVideo {
    pub key: String,
    pub site: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub name: String,
}

// ── Error body ──────────────────────────────────────────────────

/// Body TMDB sends alongside non-success statuses.
#[derive(Debug, Deserialize)]
pub struct TmdbStatus {
    pub status_code: Option<u32>,
    pub status_message: String,
}

// ── Conversions to shared trait types ───────────────────────────

impl TmdbMovie {
    pub fn into_summary(self) -> MovieSummary {
        MovieSummary {
            id: self.id,
            title: self.title,
            // TMDB sends "" instead of null for some unreleased titles.
            poster_path: self.poster_path.filter(|p| !p.is_empty()),
            vote_average: self.vote_average.clamp(0.0, 10.0),
            overview: self.overview.filter(|o| !o.is_empty()),
            release_date: self.release_date.filter(|d| !d.is_empty()),
            backdrop_path: self.backdrop_path.filter(|p| !p.is_empty()),
            original_language: self.original_language,
        }
    }
}

impl TmdbMovieListResponse {
    /// Summaries in server order.
    pub fn into_summaries(self) -> Vec<MovieSummary> {
        self.results
            .into_iter()
            .map(TmdbMovie::into_summary)
            .collect()
    }
}

impl From<TmdbGenre> for Genre {
    fn from(g: TmdbGenre) -> Self {
        Genre {
            id: g.id,
            name: g.name,
        }
    }
}

impl From<TmdbVideo> for Video {
    fn from(v: TmdbVideo) -> Self {
        Video {
            key: v.key,
            site: v.site,
            kind: v.kind,
            name: v.name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_popular_response() {
        let json = r#"{
            "page": 1,
            "results": [
                {
                    "adult": false,
                    "backdrop_path": "/xOMo8BRK7PfcJv9JCnx7s5hj0PX.jpg",
                    "genre_ids": [878, 12],
                    "id": 693134,
                    "original_language": "en",
                    "original_title": "Dune: Part Two",
                    "overview": "Follow the mythic journey of Paul Atreides...",
                    "popularity": 3437.313,
                    "poster_path": "/1pdfLvkbY9ohJlCjQH2CZjjYVvJ.jpg",
                    "release_date": "2024-02-27",
                    "title": "Dune: Part Two",
                    "video": false,
                    "vote_average": 8.2,
                    "vote_count": 3432
                },
                {
                    "id": 1,
                    "title": "Untitled",
                    "poster_path": null,
                    "release_date": ""
                }
            ],
            "total_pages": 44197,
            "total_results": 883938
        }"#;

        let resp: TmdbMovieListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.page, 1);
        assert_eq!(resp.total_pages, 44197);

        let movies = resp.into_summaries();
        assert_eq!(movies.len(), 2);
        assert_eq!(movies[0].id, 693134);
        assert_eq!(movies[0].title, "Dune: Part Two");
        assert_eq!(
            movies[0].poster_path.as_deref(),
            Some("/1pdfLvkbY9ohJlCjQH2CZjjYVvJ.jpg")
        );
        assert!((movies[0].vote_average - 8.2).abs() < f32::EPSILON);
        assert_eq!(movies[0].original_language.as_deref(), Some("en"));

        assert!(movies[1].poster_path.is_none());
        assert!(movies[1].release_date.is_none());
        assert_eq!(movies[1].vote_average, 0.0);
    }

    #[test]
    fn test_deserialize_genre_list() {
        let json = r#"{"genres": [{"id": 28, "name": "Acción"}, {"id": 35, "name": "Comedia"}]}"#;
        let resp: TmdbGenreListResponse = serde_json::from_str(json).unwrap();
        let genres: Vec<Genre> = resp.genres.into_iter().map(Genre::from).collect();
        assert_eq!(genres.len(), 2);
        assert_eq!(genres[1].id, 35);
        assert_eq!(genres[1].name, "Comedia");
    }

    #[test]
    fn test_deserialize_video_list() {
        let json = r#"{
            "id": 693134,
            "results": [
                {"key": "U2Qp5pL3ovA", "site": "YouTube", "type": "Trailer", "name": "Official Trailer 3"},
                {"key": "abc", "site": "Vimeo", "type": "Teaser"}
            ]
        }"#;
        let resp: TmdbVideoListResponse = serde_json::from_str(json).unwrap();
        let videos: Vec<Video> = resp.results.into_iter().map(Video::from).collect();
        assert_eq!(videos[0].kind, "Trailer");
        assert_eq!(videos[0].key, "U2Qp5pL3ovA");
        assert_eq!(videos[1].name, "");
    }

    #[test]
    fn test_deserialize_status_body() {
        let json = r#"{"status_code": 7, "status_message": "Invalid API key: You must be granted a valid key.", "success": false}"#;
        let status: TmdbStatus = serde_json::from_str(json).unwrap();
        assert_eq!(status.status_code, Some(7));
        assert!(status.status_message.starts_with("Invalid API key"));
    }
}
