use dejure_core::DEFAULT_BASE_URL;

/// Browser-like User-Agent; dejure.org serves plain clients less reliably.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/141.0.0.0 Safari/537.36 Edg/141.0.0.0";

/// Connection settings for [`DejureClient`](crate::DejureClient).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Site root without trailing slash, e.g. `https://dejure.org`.
    pub base_url: String,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_live_site() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://dejure.org");
        assert!(config.user_agent.starts_with("Mozilla/5.0"));
    }
}
