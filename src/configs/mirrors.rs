use serde::{Deserialize, Serialize};

/// Mirror pools for stream resolution: primary manifest hosts and the
/// proxy hosts substituted into a stream URL when the primary is
/// unreachable. Both lists are tried strictly in order.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct MirrorsConfig {
    #[serde(default)]
    pub api_urls: Vec<String>,
    #[serde(default)]
    pub proxy_urls: Vec<String>,
}

/// Parse a comma-separated host list from an environment variable value.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_list_trims_and_drops_empty() {
        let urls = split_list("https://a.example, https://b.example ,,https://c.example,");
        assert_eq!(
            urls,
            vec!["https://a.example", "https://b.example", "https://c.example"]
        );
    }

    #[test]
    fn test_split_list_empty_input() {
        assert!(split_list("").is_empty());
        assert!(split_list(" , ,").is_empty());
    }
}
