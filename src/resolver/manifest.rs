use serde::Deserialize;

/// Quality label the resolver selects from a manifest.
pub const TARGET_AUDIO_QUALITY: &str = "AUDIO_QUALITY_MEDIUM";
/// Exact codec string the resolver selects; anything else is skipped.
pub const TARGET_AUDIO_TYPE: &str = "audio/mp4; codecs=\"mp4a.40.2\"";

/// Format list returned by a primary host for one video.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    #[serde(default)]
    pub adaptive_formats: Vec<AdaptiveFormat>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdaptiveFormat {
    #[serde(default)]
    pub audio_quality: Option<String>,
    /// MIME type plus codecs parameter, e.g. `audio/mp4; codecs="mp4a.40.2"`.
    #[serde(rename = "type", default)]
    pub format_type: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

impl Manifest {
    /// URL of the first descriptor matching the fixed quality/codec target.
    ///
    /// A matching descriptor without a URL yields no candidate; later
    /// descriptors are not considered.
    pub fn select_target_format(&self) -> Option<String> {
        self.adaptive_formats
            .iter()
            .find(|f| {
                f.audio_quality.as_deref() == Some(TARGET_AUDIO_QUALITY)
                    && f.format_type.as_deref() == Some(TARGET_AUDIO_TYPE)
            })
            .and_then(|f| f.url.clone())
    }
}
