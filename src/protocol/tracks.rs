use serde::{Deserialize, Serialize};

/// Catalog metadata for a single track.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TrackInfo {
    pub title: String,
    /// All credited artists, comma-joined.
    pub artist: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artwork_url: Option<String>,
    /// Canonical catalog page URL.
    pub uri: String,
}

/// Playlist metadata plus the tracks it contains.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistInfo {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artwork_url: Option<String>,
    pub uri: String,
    pub tracks: Vec<TrackInfo>,
}

/// Result of loading a catalog identifier.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "camelCase")]
pub enum LoadResult {
    /// A single track was loaded.
    Track(TrackInfo),
    /// A playlist was loaded.
    Playlist(PlaylistInfo),
    /// No source recognized the identifier, or nothing was found.
    Empty {},
}

/// The video-platform result selected for a track.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoMatch {
    pub id: String,
    pub title: String,
    /// Formatted duration, e.g. "3:32". Absent for live streams.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_track() -> TrackInfo {
        TrackInfo {
            title: "The Less I Know The Better".to_string(),
            artist: "Tame Impala".to_string(),
            date: Some("2015-07-17".to_string()),
            artwork_url: Some("https://i.scdn.co/image/ab67616d0000b273".to_string()),
            uri: "https://open.spotify.com/track/6K4t31amVTZDgR3sKmwUJJ".to_string(),
        }
    }

    #[test]
    fn test_track_serializes_camelcase() {
        let json = serde_json::to_value(sample_track()).unwrap();

        assert_eq!(json["title"], "The Less I Know The Better");
        assert_eq!(json["artist"], "Tame Impala");
        assert!(json.get("artworkUrl").is_some(), "expected artworkUrl key");
        assert!(json.get("artwork_url").is_none());
    }

    #[test]
    fn test_track_omits_absent_optionals() {
        let mut track = sample_track();
        track.date = None;
        track.artwork_url = None;

        let json = serde_json::to_value(track).unwrap();
        assert!(json.get("date").is_none());
        assert!(json.get("artworkUrl").is_none());
    }

    #[test]
    fn test_load_result_tagging() {
        let json = serde_json::to_value(LoadResult::Track(sample_track())).unwrap();
        assert_eq!(json["type"], "track");
        assert_eq!(json["data"]["artist"], "Tame Impala");

        let json = serde_json::to_value(LoadResult::Playlist(PlaylistInfo {
            title: "Road Trip".to_string(),
            description: None,
            artwork_url: None,
            uri: "https://open.spotify.com/playlist/37i9dQZF1DX0UrRvztWcAU".to_string(),
            tracks: vec![sample_track()],
        }))
        .unwrap();
        assert_eq!(json["type"], "playlist");
        assert_eq!(json["data"]["tracks"].as_array().unwrap().len(), 1);

        let json = serde_json::to_value(LoadResult::Empty {}).unwrap();
        assert_eq!(json["type"], "empty");
    }

    #[test]
    fn test_video_match_roundtrip() {
        let video = VideoMatch {
            id: "dQw4w9WgXcQ".to_string(),
            title: "Never Gonna Give You Up".to_string(),
            duration: Some("3:32".to_string()),
        };

        let json = serde_json::to_string(&video).unwrap();
        let back: VideoMatch = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, "dQw4w9WgXcQ");
        assert_eq!(back.duration.as_deref(), Some("3:32"));
    }
}
