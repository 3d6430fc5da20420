use std::sync::Arc;

use async_trait::async_trait;
use regex::Regex;

use crate::protocol::tracks::LoadResult;
use crate::sources::SourcePlugin;

pub mod embed;
pub mod parser;

pub struct SpotifySource {
    client: Arc<reqwest::Client>,
    url_regex: Regex,
    entity_regex: Regex,
    track_resolve_concurrency: usize,
    playlist_load_limit: usize,
}

impl SpotifySource {
    pub fn new(
        config: Option<crate::configs::SpotifyConfig>,
        client: Arc<reqwest::Client>,
    ) -> Result<Self, String> {
        let config = config.unwrap_or_default();

        Ok(Self {
      client,
      url_regex: Regex::new(
        r"https?://(?:open\.)?spotify\.com/(?:intl-[a-z]{2}/)?(track|playlist)/([a-zA-Z0-9]+)",
      ).unwrap(),
      entity_regex: Regex::new(
        r#"(?s)<script id="__NEXT_DATA__" type="application/json"[^>]*>(.*?)</script>"#,
      ).unwrap(),
      track_resolve_concurrency: config.track_resolve_concurrency,
      playlist_load_limit: config.playlist_load_limit,
    })
    }
}

#[async_trait]
impl SourcePlugin for SpotifySource {
    fn name(&self) -> &str {
        "spotify"
    }

    fn can_handle(&self, identifier: &str) -> bool {
        self.url_regex.is_match(identifier)
    }

    async fn load(&self, identifier: &str) -> LoadResult {
        let Some(caps) = self.url_regex.captures(identifier) else {
            return LoadResult::Empty {};
        };
        let type_str = caps.get(1).map(|m| m.as_str()).unwrap_or("");
        let id = caps.get(2).map(|m| m.as_str()).unwrap_or("");

        match type_str {
            "track" => {
                match embed::fetch_track(&self.client, &self.entity_regex, id).await {
                    Some(track_info) => LoadResult::Track(track_info),
                    None => LoadResult::Empty {},
                }
            }
            "playlist" => {
                embed::fetch_playlist(
                    &self.client,
                    &self.entity_regex,
                    id,
                    self.playlist_load_limit,
                    self.track_resolve_concurrency,
                )
                .await
            }
            _ => LoadResult::Empty {},
        }
    }
}
