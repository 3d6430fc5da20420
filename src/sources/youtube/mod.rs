use std::sync::Arc;
use std::time::Duration;

use regex::Regex;
use serde_json::{Value, json};
use tracing::{debug, warn};

use crate::common::cache::TtlCache;
use crate::common::types::AnyResult;
use crate::protocol::tracks::VideoMatch;

pub mod extractor;

/// YouTube InnerTube API base endpoint (googleapis is more stable and avoids
/// some geo-restrictions that www.youtube.com may impose).
const INNERTUBE_API: &str = "https://youtubei.googleapis.com";

const CLIENT_NAME: &str = "WEB";
const CLIENT_ID: &str = "1";
const CLIENT_VERSION: &str = "2.20260114.01.00";
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/143.0.0.0 Safari/537.36";

/// Search filter param restricting results to plain videos.
const SEARCH_PARAMS_VIDEOS: &str = "EgIQAQ%3D%3D";

/// Finds the video matching a free-text query; the first search result
/// wins. Queries are normalized and results cached for the same TTL as
/// resolved stream URLs.
pub struct YouTubeSearch {
    http: Arc<reqwest::Client>,
    cache: TtlCache<VideoMatch>,
    query_filter: Regex,
}

impl YouTubeSearch {
    pub fn new(http: Arc<reqwest::Client>, cache_capacity: usize, cache_ttl: Duration) -> Self {
        Self {
            http,
            cache: TtlCache::new(cache_capacity, cache_ttl),
            query_filter: Regex::new(r"[^\w\s]").unwrap(),
        }
    }

    /// Strip punctuation and collapse whitespace so close-but-not-exact
    /// titles still match.
    pub fn format_query(&self, raw: &str) -> String {
        let cleaned = self.query_filter.replace_all(raw, " ");
        cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    pub async fn search(&self, raw_query: &str) -> Option<VideoMatch> {
        let query = self.format_query(raw_query);
        if query.is_empty() {
            return None;
        }

        if let Some(hit) = self.cache.get(&query) {
            debug!("Search cache hit for '{}'", query);
            return Some(hit);
        }

        debug!("Searching videos for: {}", query);
        match self.request_search(&query).await {
            Ok(Some(video)) => {
                debug!("Selected first result: {} ({})", video.title, video.id);
                self.cache.put(query, video.clone());
                Some(video)
            }
            Ok(None) => {
                debug!("No results found for query: {}", query);
                None
            }
            Err(e) => {
                warn!("Video search failed for '{}': {}", query, e);
                None
            }
        }
    }

    async fn request_search(&self, query: &str) -> AnyResult<Option<VideoMatch>> {
        let body = json!({
            "context": {
                "client": {
                    "clientName": CLIENT_NAME,
                    "clientVersion": CLIENT_VERSION,
                    "platform": "DESKTOP",
                    "hl": "en",
                    "gl": "US"
                }
            },
            "query": query,
            "params": SEARCH_PARAMS_VIDEOS
        });

        let url = format!("{}/youtubei/v1/search?prettyPrint=false", INNERTUBE_API);

        let res = self
            .http
            .post(&url)
            .header("User-Agent", USER_AGENT)
            .header("X-YouTube-Client-Name", CLIENT_ID)
            .header("X-YouTube-Client-Version", CLIENT_VERSION)
            .json(&body)
            .send()
            .await?;

        if !res.status().is_success() {
            return Err(format!("search failed: {}", res.status()).into());
        }

        let response: Value = res.json().await?;
        Ok(extractor::first_video(&response))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn searcher() -> YouTubeSearch {
        YouTubeSearch::new(
            Arc::new(reqwest::Client::new()),
            16,
            Duration::from_secs(3600),
        )
    }

    #[test]
    fn test_format_query_strips_punctuation() {
        let s = searcher();
        assert_eq!(
            s.format_query("The Less I Know The Better (feat. Nobody) - Tame Impala!"),
            "The Less I Know The Better feat Nobody Tame Impala"
        );
    }

    #[test]
    fn test_format_query_collapses_whitespace() {
        let s = searcher();
        assert_eq!(s.format_query("  a   b\t c  "), "a b c");
        assert_eq!(s.format_query("...---..."), "");
    }
}
