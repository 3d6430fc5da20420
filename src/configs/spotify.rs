use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SpotifyConfig {
    /// Concurrent per-track metadata fetches while expanding a playlist.
    #[serde(default = "default_track_resolve_concurrency")]
    pub track_resolve_concurrency: usize,
    /// Hard cap on playlist tracks loaded; 0 means no cap.
    #[serde(default = "default_playlist_load_limit")]
    pub playlist_load_limit: usize,
}

fn default_track_resolve_concurrency() -> usize {
    10
}

fn default_playlist_load_limit() -> usize {
    100
}

impl Default for SpotifyConfig {
    fn default() -> Self {
        Self {
            track_resolve_concurrency: default_track_resolve_concurrency(),
            playlist_load_limit: default_playlist_load_limit(),
        }
    }
}
