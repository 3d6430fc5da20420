use std::sync::Arc;

use crate::configs::Config;
use crate::resolver::StreamResolver;
use crate::sources::SourceManager;
use crate::sources::youtube::YouTubeSearch;

/// Top-level application state.
pub struct AppState {
    pub config: Config,
    pub source_manager: Arc<SourceManager>,
    pub youtube: Arc<YouTubeSearch>,
    pub resolver: Arc<StreamResolver>,
}
