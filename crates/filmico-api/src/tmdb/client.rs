use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;

use super::error::TmdbError;
use super::types::{
    TmdbGenreListResponse, TmdbMovieListResponse, TmdbStatus, TmdbVideoListResponse,
};
use crate::traits::{Genre, MovieCatalog, MovieSummary, Video};

pub const BASE_URL: &str = "https://api.themoviedb.org/3";

/// Default response language.
pub const DEFAULT_LANGUAGE: &str = "es-ES";

/// TMDB v3 client authenticated with a static `api_key` query parameter.
pub struct TmdbClient {
    api_key: String,
    language: String,
    base_url: String,
    http: Client,
}

impl TmdbClient {
    pub fn new(api_key: String, language: String) -> Self {
        Self {
            api_key,
            language,
            base_url: BASE_URL.to_string(),
            http: Client::new(),
        }
    }

    /// Point the client at a different API root (e.g. a local proxy).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Rebuild the HTTP client with a per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self, TmdbError> {
        self.http = Client::builder().timeout(timeout).build()?;
        Ok(self)
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Check the HTTP response for errors, surfacing TMDB's `status_message`
    /// when the body carries one.
    async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, TmdbError> {
        if resp.status().is_success() {
            Ok(resp)
        } else {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            tracing::warn!(status, "TMDB API error");
            let message = serde_json::from_str::<TmdbStatus>(&body)
                .map(|s| s.status_message)
                .unwrap_or(body);
            Err(TmdbError::Api { status, message })
        }
    }

    /// GET `path` with the credential and language attached, decoding JSON.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, TmdbError> {
        if self.api_key.is_empty() {
            return Err(TmdbError::MissingApiKey);
        }

        tracing::debug!(path, ?params, "TMDB request");
        let resp = self
            .http
            .get(self.endpoint(path))
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("language", self.language.as_str()),
            ])
            .query(params)
            .send()
            .await?;

        let resp = Self::check_response(resp).await?;
        resp.json()
            .await
            .map_err(|e| TmdbError::Parse(e.to_string()))
    }

    async fn get_movies(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<Vec<MovieSummary>, TmdbError> {
        let list: TmdbMovieListResponse = self.get_json(path, params).await?;
        Ok(list.into_summaries())
    }
}

impl MovieCatalog for TmdbClient {
    type Error = TmdbError;

    async fn popular_movies(&self, page: u32) -> Result<Vec<MovieSummary>, TmdbError> {
        self.get_movies("/movie/popular", &[("page", page.max(1).to_string())])
            .await
    }

    async fn search_movies(&self, query: &str) -> Result<Vec<MovieSummary>, TmdbError> {
        self.get_movies("/search/movie", &[("query", query.to_string())])
            .await
    }

    async fn genres(&self) -> Result<Vec<Genre>, TmdbError> {
        let list: TmdbGenreListResponse = self.get_json("/genre/movie/list", &[]).await?;
        Ok(list.genres.into_iter().map(Genre::from).collect())
    }

    async fn movies_by_genre(&self, genre_id: u64) -> Result<Vec<MovieSummary>, TmdbError> {
        self.get_movies("/discover/movie", &[("with_genres", genre_id.to_string())])
            .await
    }

    async fn movie_videos(&self, movie_id: u64) -> Result<Vec<Video>, TmdbError> {
        let list: TmdbVideoListResponse = self
            .get_json(&format!("/movie/{movie_id}/videos"), &[])
            .await?;
        Ok(list.results.into_iter().map(Video::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let client = TmdbClient::new("key".into(), DEFAULT_LANGUAGE.into())
            .with_base_url("http://localhost:8080/3/");
        assert_eq!(
            client.endpoint("/movie/popular"),
            "http://localhost:8080/3/movie/popular"
        );
        assert_eq!(client.language(), "es-ES");
    }

    #[tokio::test]
    async fn test_missing_api_key_fails_before_network() {
        // Unroutable base URL: a request would fail with Http, not MissingApiKey.
        let client = TmdbClient::new(String::new(), DEFAULT_LANGUAGE.into())
            .with_base_url("http://127.0.0.1:9");
        let err = client.popular_movies(1).await.unwrap_err();
        assert!(matches!(err, TmdbError::MissingApiKey));
    }
}
