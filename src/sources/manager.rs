use std::sync::Arc;

use super::plugin::BoxedSource;
use super::spotify::SpotifySource;
use crate::protocol::tracks::LoadResult;

/// Source Manager
pub struct SourceManager {
  pub sources: Vec<BoxedSource>,
}

impl SourceManager {
  /// Create a new SourceManager with all available sources
  pub fn new(config: &crate::configs::Config, client: Arc<reqwest::Client>) -> Self {
    let mut sources: Vec<BoxedSource> = Vec::new();

    match SpotifySource::new(config.spotify.clone(), client) {
      Ok(src) => {
        tracing::info!("Loaded source: Spotify");
        sources.push(Box::new(src));
      }
      Err(e) => {
        tracing::error!("Spotify source failed to initialize: {}", e);
      }
    }

    Self { sources }
  }

  /// Load tracks using the first matching source
  pub async fn load(&self, identifier: &str) -> LoadResult {
    for source in &self.sources {
      if source.can_handle(identifier) {
        tracing::trace!("Loading '{}' with source: {}", identifier, source.name());
        return source.load(identifier).await;
      }
    }

    tracing::debug!("No source could handle identifier: {}", identifier);
    LoadResult::Empty {}
  }

  /// Get names of all registered sources
  pub fn source_names(&self) -> Vec<String> {
    self.sources.iter().map(|s| s.name().to_string()).collect()
  }
}
