use filmico_api::traits::{MovieCatalog, Video};

const YOUTUBE_WATCH_URL: &str = "https://www.youtube.com/watch?v=";

/// Watch URL of the first YouTube trailer in `videos`.
pub fn find_trailer(videos: &[Video]) -> Option<String> {
    videos
        .iter()
        .find(|v| v.kind == "Trailer" && v.site == "YouTube")
        .map(|v| format!("{YOUTUBE_WATCH_URL}{}", v.key))
}

/// Look up a movie's trailer. Failures are logged and read as "no trailer".
pub async fn fetch_trailer<C: MovieCatalog>(catalog: &C, movie_id: u64) -> Option<String> {
    match catalog.movie_videos(movie_id).await {
        Ok(videos) => find_trailer(&videos),
        Err(e) => {
            tracing::warn!(movie_id, error = %e, "failed to load movie videos");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video(key: &str, site: &str, kind: &str) -> Video {
        Video {
            key: key.into(),
            site: site.into(),
            kind: kind.into(),
            name: String::new(),
        }
    }

    #[test]
    fn test_first_youtube_trailer_wins() {
        let videos = vec![
            video("teaser", "YouTube", "Teaser"),
            video("vimeo", "Vimeo", "Trailer"),
            video("first", "YouTube", "Trailer"),
            video("second", "YouTube", "Trailer"),
        ];
        assert_eq!(
            find_trailer(&videos).as_deref(),
            Some("https://www.youtube.com/watch?v=first")
        );
    }

    #[test]
    fn test_no_trailer() {
        assert_eq!(find_trailer(&[]), None);
        assert_eq!(find_trailer(&[video("clip", "YouTube", "Clip")]), None);
    }
}
