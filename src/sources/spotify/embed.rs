use std::sync::Arc;

use futures::future::join_all;
use regex::Regex;
use serde_json::Value;
use tokio::sync::Semaphore;
use tracing::{debug, warn};

use crate::protocol::tracks::{LoadResult, PlaylistInfo, TrackInfo};
use crate::sources::spotify::parser::SpotifyParser;

const EMBED_BASE: &str = "https://open.spotify.com/embed";

/// Fetch the embed page for an entity and pull the inline JSON state out
/// of it. The embed pages are served without authentication.
async fn fetch_entity(
    client: &reqwest::Client,
    entity_regex: &Regex,
    kind: &str,
    id: &str,
) -> Option<Value> {
    let url = format!("{}/{}/{}", EMBED_BASE, kind, id);

    let request = client
        .get(&url)
        .header("Accept-Language", "en-US,en;q=0.9")
        .header("Sec-Fetch-Dest", "iframe")
        .header("Sec-Fetch-Mode", "navigate")
        .header("Sec-Fetch-Site", "cross-site");

    let resp = match request.send().await {
        Ok(r) => r,
        Err(e) => {
            warn!("Failed to fetch embed page for {}/{}: {}", kind, id, e);
            return None;
        }
    };

    if !resp.status().is_success() {
        warn!("Embed page for {}/{} returned {}", kind, id, resp.status());
        return None;
    }

    let html = resp.text().await.ok()?;
    let raw = entity_regex.captures(&html)?.get(1)?.as_str();

    let page: Value = match serde_json::from_str(raw) {
        Ok(v) => v,
        Err(e) => {
            warn!("Embed page state for {}/{} did not parse: {}", kind, id, e);
            return None;
        }
    };

    page.pointer("/props/pageProps/state/data/entity").cloned()
}

pub async fn fetch_track(
    client: &reqwest::Client,
    entity_regex: &Regex,
    id: &str,
) -> Option<TrackInfo> {
    let entity = fetch_entity(client, entity_regex, "track", id).await?;
    SpotifyParser::parse_track(&entity)
}

pub async fn fetch_playlist(
    client: &reqwest::Client,
    entity_regex: &Regex,
    id: &str,
    playlist_load_limit: usize,
    track_resolve_concurrency: usize,
) -> LoadResult {
    let Some(entity) = fetch_entity(client, entity_regex, "playlist", id).await else {
        return LoadResult::Empty {};
    };

    let title = entity
        .get("name")
        .or_else(|| entity.get("title"))
        .and_then(|v| v.as_str())
        .unwrap_or("Unknown Playlist")
        .to_string();
    let description = entity
        .get("subtitle")
        .and_then(|v| v.as_str())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string());
    let artwork_url = SpotifyParser::extract_artwork(&entity);

    let items: Vec<Value> = entity
        .get("trackList")
        .and_then(|l| l.as_array())
        .cloned()
        .unwrap_or_default();

    let limit = if playlist_load_limit == 0 {
        usize::MAX
    } else {
        playlist_load_limit
    };

    // Each playlist row only carries title and subtitle; the full per-track
    // metadata comes from the track's own embed page, fetched concurrently
    // under a semaphore. Rows whose fetch fails degrade to the row data.
    let semaphore = Arc::new(Semaphore::new(track_resolve_concurrency.max(1)));
    let futs: Vec<_> = items
        .iter()
        .take(limit)
        .map(|item| {
            let semaphore = semaphore.clone();
            async move {
                let track_id = item
                    .get("uri")
                    .and_then(|v| v.as_str())
                    .and_then(|uri| uri.split(':').next_back())?;

                let _permit = semaphore.acquire().await.unwrap();
                match fetch_track(client, entity_regex, track_id).await {
                    Some(track_info) => Some(track_info),
                    None => {
                        debug!("Falling back to playlist row data for track {}", track_id);
                        SpotifyParser::parse_playlist_item(item)
                    }
                }
            }
        })
        .collect();

    let results = join_all(futs).await;
    let tracks: Vec<TrackInfo> = results.into_iter().flatten().collect();

    if tracks.is_empty() {
        LoadResult::Empty {}
    } else {
        LoadResult::Playlist(PlaylistInfo {
            title,
            description,
            artwork_url,
            uri: format!("https://open.spotify.com/playlist/{}", id),
            tracks,
        })
    }
}
