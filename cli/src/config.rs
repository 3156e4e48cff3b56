//! Client-side configuration: where the API lives and what base URL
//! shareable item links are built from.

const DEFAULT_BASE_URL: &str = "http://localhost:5050";
const DEFAULT_WEB_BASE_URL: &str = "http://localhost:3000";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// REST API base URL.
    pub base_url: String,
    /// Base URL encoded into shareable `/item/<id>` links.
    pub web_base_url: String,
}

impl ClientConfig {
    /// Flag beats environment beats default.
    pub fn from_env(base_url_flag: Option<String>) -> Self {
        let base_url = base_url_flag
            .or_else(|| std::env::var("DEPOT_BASE_URL").ok())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let web_base_url = std::env::var("DEPOT_WEB_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_WEB_BASE_URL.to_string());

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            web_base_url: web_base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Shareable URL for one item, as encoded into the QR code.
    pub fn item_url(&self, id: i32) -> String {
        format!("{}/item/{}", self.web_base_url, id)
    }
}
