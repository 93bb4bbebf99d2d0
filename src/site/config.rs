//! Connection settings the server hands to the browser at `/api/site-config`.

use serde::{Deserialize, Serialize};

pub const DEFAULT_BACKEND_ENDPOINT: &str = "https://nyc.cloud.appwrite.io/v1";
pub const DEFAULT_BACKEND_PROJECT_ID: &str = "6950ebb5001f606d0aec";
pub const PROJECT_HEADER: &str = "X-Appwrite-Project";

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    pub backend_endpoint: String,
    pub backend_project_id: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            backend_endpoint: DEFAULT_BACKEND_ENDPOINT.to_string(),
            backend_project_id: DEFAULT_BACKEND_PROJECT_ID.to_string(),
        }
    }
}

impl SiteConfig {
    pub fn ping_url(&self) -> String {
        format!("{}/ping", self.backend_endpoint.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialises_camel_case() {
        let json = serde_json::to_value(SiteConfig::default()).expect("serialisable");
        assert_eq!(json["backendEndpoint"], DEFAULT_BACKEND_ENDPOINT);
        assert_eq!(json["backendProjectId"], DEFAULT_BACKEND_PROJECT_ID);
    }

    #[test]
    fn ping_url_tolerates_trailing_slash() {
        let config = SiteConfig {
            backend_endpoint: "https://example.test/v1/".to_string(),
            ..SiteConfig::default()
        };
        assert_eq!(config.ping_url(), "https://example.test/v1/ping");
    }
}
