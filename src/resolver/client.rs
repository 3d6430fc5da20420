use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;

use super::{Manifest, ResolveError};

/// Header-only probes get a shorter deadline than manifest fetches.
const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Network seam of the resolver.
///
/// Production uses [`HttpMirrorApi`]; tests substitute a recording fake so
/// sweeps run without sockets or real time.
#[async_trait]
pub trait MirrorApi: Send + Sync {
    /// Fetch the format manifest for a video from one primary host.
    async fn fetch_manifest(&self, base: &str, video_id: &str) -> Result<Manifest, ResolveError>;

    /// Existence check against a candidate stream URL; returns the raw
    /// status so the caller decides what counts as reachable.
    async fn probe(&self, url: &str) -> Result<StatusCode, ResolveError>;
}

pub struct HttpMirrorApi {
    http: Arc<reqwest::Client>,
}

impl HttpMirrorApi {
    pub fn new(http: Arc<reqwest::Client>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl MirrorApi for HttpMirrorApi {
    async fn fetch_manifest(&self, base: &str, video_id: &str) -> Result<Manifest, ResolveError> {
        let url = format!("{}/{}", base.trim_end_matches('/'), video_id);

        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| ResolveError::HostUnreachable(format!("{}: {}", base, e)))?;

        if !resp.status().is_success() {
            return Err(ResolveError::HostUnreachable(format!(
                "{} returned {}",
                base,
                resp.status()
            )));
        }

        resp.json::<Manifest>()
            .await
            .map_err(|_| ResolveError::MalformedManifest(base.to_string()))
    }

    async fn probe(&self, url: &str) -> Result<StatusCode, ResolveError> {
        let resp = self
            .http
            .head(url)
            .timeout(PROBE_TIMEOUT)
            .send()
            .await
            .map_err(|e| ResolveError::HostUnreachable(e.to_string()))?;
        Ok(resp.status())
    }
}
