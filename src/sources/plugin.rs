use async_trait::async_trait;

use crate::protocol::tracks::LoadResult;

/// Trait that all catalog sources implement.
///
/// Each source resolves identifiers it recognizes (URLs, prefixed
/// queries) into track or playlist metadata.
#[async_trait]
pub trait SourcePlugin: Send + Sync {
    /// Unique identifier for this source (e.g. "spotify")
    fn name(&self) -> &str;

    /// Check if this source can handle the given identifier.
    fn can_handle(&self, identifier: &str) -> bool;

    /// Resolve the identifier into track(s).
    async fn load(&self, identifier: &str) -> LoadResult;
}

pub type BoxedSource = Box<dyn SourcePlugin>;
