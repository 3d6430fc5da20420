use serde_json::Value;
use tracing::debug;

use crate::protocol::tracks::TrackInfo;

pub struct SpotifyParser;

impl SpotifyParser {
    /// Parse a track entity from the embed page state.
    pub fn parse_track(entity: &Value) -> Option<TrackInfo> {
        let title = entity
            .get("name")
            .or_else(|| entity.get("title"))
            .and_then(|v| v.as_str())?
            .to_string();

        let id = entity
            .get("uri")
            .and_then(|v| v.as_str())
            .and_then(|uri| uri.split(':').next_back())
            .or_else(|| entity.get("id").and_then(|v| v.as_str()))?;

        Some(TrackInfo {
            title,
            artist: Self::extract_artists(entity),
            date: Self::extract_release_date(entity),
            artwork_url: Self::extract_artwork(entity),
            uri: format!("https://open.spotify.com/track/{}", id),
        })
    }

    /// Degraded parse of a playlist row when the per-track embed fetch
    /// fails: title and artist come from the row itself.
    pub fn parse_playlist_item(item: &Value) -> Option<TrackInfo> {
        let title = item
            .get("title")
            .or_else(|| item.get("name"))
            .and_then(|v| v.as_str())?
            .to_string();
        let id = item
            .get("uri")
            .and_then(|v| v.as_str())
            .and_then(|uri| uri.split(':').next_back())?;

        let artist = item
            .get("subtitle")
            .and_then(|v| v.as_str())
            .filter(|s| !s.is_empty())
            .unwrap_or("Unknown Artist")
            .to_string();

        Some(TrackInfo {
            title,
            artist,
            date: None,
            artwork_url: None,
            uri: format!("https://open.spotify.com/track/{}", id),
        })
    }

    /// Artist name resolution — handles multiple entity shapes.
    pub fn extract_artists(entity: &Value) -> String {
        // Shape 1: artists[] with a plain name (track entity)
        if let Some(artists) = entity.get("artists").and_then(|a| a.as_array()) {
            let names: Vec<_> = artists
                .iter()
                .filter_map(|a| {
                    a.get("name")
                        .or_else(|| a.get("profile").and_then(|p| p.get("name")))
                        .and_then(|v| v.as_str())
                })
                .collect();
            if !names.is_empty() {
                return names.join(", ");
            }
        }

        // Shape 2: pre-joined subtitle string
        if let Some(subtitle) = entity.get("subtitle").and_then(|v| v.as_str()) {
            if !subtitle.is_empty() {
                return subtitle.to_string();
            }
        }

        debug!("No artist field on entity");
        "Unknown Artist".to_string()
    }

    fn extract_release_date(entity: &Value) -> Option<String> {
        let raw = entity
            .pointer("/releaseDate/isoString")
            .or_else(|| entity.get("releaseDate"))
            .or_else(|| entity.get("release_date"))
            .and_then(|v| v.as_str())?;

        // "2015-07-17T00:00:00Z" and "2015-07-17" both reduce to the date.
        Some(raw.split('T').next().unwrap_or(raw).to_string())
    }

    pub fn extract_artwork(entity: &Value) -> Option<String> {
        entity
            .pointer("/coverArt/sources")
            .or_else(|| entity.pointer("/visualIdentity/image"))
            .and_then(|s| s.as_array())
            .and_then(|s| s.first())
            .and_then(|i| i.get("url"))
            .and_then(|v| v.as_str())
            .map(|s| s.to_string())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn track_entity() -> Value {
        serde_json::json!({
            "type": "track",
            "name": "The Less I Know The Better",
            "uri": "spotify:track:6K4t31amVTZDgR3sKmwUJJ",
            "artists": [
                { "name": "Tame Impala", "uri": "spotify:artist:5INjqkS1o8h1imAzPqGZBb" }
            ],
            "coverArt": {
                "sources": [
                    { "url": "https://i.scdn.co/image/ab67616d0000b273", "width": 640, "height": 640 },
                    { "url": "https://i.scdn.co/image/ab67616d00001e02", "width": 300, "height": 300 }
                ]
            },
            "releaseDate": { "isoString": "2015-07-17T00:00:00Z" },
            "duration": 216320
        })
    }

    #[test]
    fn test_parse_track_entity() {
        let track = SpotifyParser::parse_track(&track_entity()).unwrap();

        assert_eq!(track.title, "The Less I Know The Better");
        assert_eq!(track.artist, "Tame Impala");
        assert_eq!(track.date.as_deref(), Some("2015-07-17"));
        assert_eq!(
            track.artwork_url.as_deref(),
            Some("https://i.scdn.co/image/ab67616d0000b273")
        );
        assert_eq!(
            track.uri,
            "https://open.spotify.com/track/6K4t31amVTZDgR3sKmwUJJ"
        );
    }

    #[test]
    fn test_parse_track_joins_multiple_artists() {
        let mut entity = track_entity();
        entity["artists"] = serde_json::json!([
            { "name": "Silk Sonic" },
            { "profile": { "name": "Bruno Mars" } }
        ]);

        let track = SpotifyParser::parse_track(&entity).unwrap();
        assert_eq!(track.artist, "Silk Sonic, Bruno Mars");
    }

    #[test]
    fn test_parse_track_falls_back_to_subtitle_artist() {
        let entity = serde_json::json!({
            "name": "Karma Police",
            "uri": "spotify:track:63OQupATfueTdZMWTxW03A",
            "subtitle": "Radiohead"
        });

        let track = SpotifyParser::parse_track(&entity).unwrap();
        assert_eq!(track.artist, "Radiohead");
        assert_eq!(track.date, None);
        assert_eq!(track.artwork_url, None);
    }

    #[test]
    fn test_parse_track_requires_title_and_id() {
        assert!(SpotifyParser::parse_track(&serde_json::json!({ "uri": "spotify:track:x" })).is_none());
        assert!(SpotifyParser::parse_track(&serde_json::json!({ "name": "Untitled" })).is_none());
    }

    #[test]
    fn test_parse_playlist_item() {
        let item = serde_json::json!({
            "uri": "spotify:track:63OQupATfueTdZMWTxW03A",
            "title": "Karma Police",
            "subtitle": "Radiohead",
            "duration": 264000
        });

        let track = SpotifyParser::parse_playlist_item(&item).unwrap();
        assert_eq!(track.title, "Karma Police");
        assert_eq!(track.artist, "Radiohead");
        assert_eq!(
            track.uri,
            "https://open.spotify.com/track/63OQupATfueTdZMWTxW03A"
        );
    }

    #[test]
    fn test_parse_playlist_item_without_subtitle() {
        let item = serde_json::json!({
            "uri": "spotify:track:63OQupATfueTdZMWTxW03A",
            "title": "Karma Police"
        });

        let track = SpotifyParser::parse_playlist_item(&item).unwrap();
        assert_eq!(track.artist, "Unknown Artist");
    }
}
