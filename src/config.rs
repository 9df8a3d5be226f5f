pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5001";
pub const API_BASE_URL_ENV: &str = "TASKFORGE_API_BASE_URL";

/// Runtime configuration for the client.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the extraction backend.
    pub api_base_url: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let api_base_url = std::env::var(API_BASE_URL_ENV)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
        Self { api_base_url }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}
