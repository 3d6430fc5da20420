use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ResolverConfig {
    /// Full sweeps over the host pool before giving up.
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    /// Pause between sweeps, in seconds.
    #[serde(default = "default_retry_delay_secs")]
    pub retry_delay_secs: u64,
    /// How long a resolved (or absent) stream URL stays cached, in seconds.
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: usize,
}

fn default_max_retries() -> u32 {
    3
}

fn default_retry_delay_secs() -> u64 {
    5
}

fn default_cache_ttl_secs() -> u64 {
    3600
}

fn default_cache_capacity() -> usize {
    256
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            max_retries: default_max_retries(),
            retry_delay_secs: default_retry_delay_secs(),
            cache_ttl_secs: default_cache_ttl_secs(),
            cache_capacity: default_cache_capacity(),
        }
    }
}

impl ResolverConfig {
    pub fn retry_delay(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.retry_delay_secs)
    }

    pub fn cache_ttl(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.cache_ttl_secs)
    }
}
