use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use reqwest::StatusCode;
use tracing::{debug, info, warn};

use crate::common::cache::{Clock, SystemClock, TtlCache};
use crate::common::types::VideoId;
use crate::configs::{MirrorsConfig, ResolverConfig};

pub mod client;
pub mod manifest;
pub mod proxy;

pub use client::{HttpMirrorApi, MirrorApi};
pub use manifest::{AdaptiveFormat, Manifest, TARGET_AUDIO_QUALITY, TARGET_AUDIO_TYPE};

/// Everything that can go wrong while resolving one video. All of these
/// are caught and logged inside the sweep; none escape [`StreamResolver::resolve`].
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("host unreachable: {0}")]
    HostUnreachable(String),
    #[error("malformed manifest from {0}")]
    MalformedManifest(String),
    #[error("no audio format matching the target quality and codec")]
    NoMatchingFormat,
    #[error("no reachable stream URL for candidate {0}")]
    ValidationRejected(String),
    #[error("all hosts exhausted after {0} sweeps")]
    AllHostsExhausted(u32),
}

/// Only a full or partial content response proves the URL is streamable.
pub fn status_accepted(status: StatusCode) -> bool {
    status == StatusCode::OK || status == StatusCode::PARTIAL_CONTENT
}

/// Resolves a video identifier to a direct audio stream URL.
///
/// Sweeps the primary hosts in order; a candidate that fails the
/// reachability check is retried through each proxy host before moving
/// on. The whole sweep repeats up to `max_retries` times with a fixed
/// pause in between, and the outcome (present or absent) is cached for
/// the configured TTL.
pub struct StreamResolver {
    api: Arc<dyn MirrorApi>,
    mirrors: MirrorsConfig,
    max_retries: u32,
    retry_delay: Duration,
    cache: TtlCache<Option<String>>,
}

impl StreamResolver {
    pub fn new(api: Arc<dyn MirrorApi>, mirrors: MirrorsConfig, config: &ResolverConfig) -> Self {
        Self::with_clock(api, mirrors, config, Arc::new(SystemClock))
    }

    pub fn with_clock(
        api: Arc<dyn MirrorApi>,
        mirrors: MirrorsConfig,
        config: &ResolverConfig,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            api,
            mirrors,
            max_retries: config.max_retries,
            retry_delay: config.retry_delay(),
            cache: TtlCache::with_clock(config.cache_capacity, config.cache_ttl(), clock),
        }
    }

    /// Resolve one video to a stream URL, or `None` when every host and
    /// proxy combination failed. Repeated calls within the TTL window
    /// return the cached outcome without touching the network.
    pub async fn resolve(&self, video_id: &VideoId) -> Option<String> {
        if let Some(cached) = self.cache.get(video_id) {
            debug!("stream cache hit for {}", video_id);
            return cached;
        }

        let result = self.sweep(video_id).await;
        self.cache.put(video_id.0.clone(), result.clone());
        result
    }

    /// Resolve a batch of videos, each independently. The output maps
    /// every requested id, with `None` for videos that did not resolve.
    pub async fn resolve_many(&self, ids: &[VideoId]) -> BTreeMap<VideoId, Option<String>> {
        let futs = ids
            .iter()
            .map(|id| async move { (id.clone(), self.resolve(id).await) });
        futures::future::join_all(futs).await.into_iter().collect()
    }

    async fn sweep(&self, video_id: &VideoId) -> Option<String> {
        for attempt in 1..=self.max_retries {
            for base in &self.mirrors.api_urls {
                match self.try_host(base, video_id).await {
                    Ok(url) => {
                        info!("resolved {} via {}", video_id, base);
                        return Some(url);
                    }
                    Err(e) => warn!("{}: {}", base, e),
                }
            }

            if attempt < self.max_retries {
                debug!(
                    "retry attempt {} of {} for {}",
                    attempt, self.max_retries, video_id
                );
                tokio::time::sleep(self.retry_delay).await;
            }
        }

        warn!(
            "{} for {}",
            ResolveError::AllHostsExhausted(self.max_retries),
            video_id
        );
        None
    }

    async fn try_host(&self, base: &str, video_id: &VideoId) -> Result<String, ResolveError> {
        let manifest = self.api.fetch_manifest(base, video_id).await?;
        let candidate = manifest
            .select_target_format()
            .ok_or(ResolveError::NoMatchingFormat)?;

        if self.is_reachable(&candidate).await {
            return Ok(candidate);
        }

        for proxy_base in &self.mirrors.proxy_urls {
            let rewritten = match proxy::substitute_host(&candidate, proxy_base) {
                Ok(url) => url,
                Err(e) => {
                    warn!("proxy rewrite via {} failed: {}", proxy_base, e);
                    continue;
                }
            };

            if self.is_reachable(&rewritten).await {
                info!("proxy host accepted: {}", proxy_base);
                return Ok(rewritten);
            }
        }

        Err(ResolveError::ValidationRejected(candidate))
    }

    async fn is_reachable(&self, url: &str) -> bool {
        match self.api.probe(url).await {
            Ok(status) if status_accepted(status) => true,
            Ok(status) if status == StatusCode::FORBIDDEN => {
                warn!("stream URL rejected with 403 Forbidden");
                false
            }
            Ok(status) => {
                debug!("probe rejected with status {}", status);
                false
            }
            Err(e) => {
                debug!("probe failed: {}", e);
                false
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
