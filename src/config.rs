/// Application settings
///
/// Everything here is compiled in. The app reads no config files or flags;
/// the only runtime knob is `RUST_LOG`, handled by the logging setup in main.

use std::time::Duration;

/// Window and network settings for the browser
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Title of the single top-level window
    pub window_title: String,
    /// Initial window size (width, height) in logical pixels
    pub window_size: (f32, f32),
    /// Side length of the blank square shown before a cover arrives
    pub placeholder_size: u32,
    /// Upper bound on a single cover request
    pub request_timeout: Duration,
    /// User agent sent with cover requests
    pub user_agent: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_title: "Simple Window".to_string(),
            window_size: (1000.0, 700.0),
            placeholder_size: 100,
            request_timeout: Duration::from_secs(30),
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl Settings {
    /// Build the HTTP client used for every cover download
    pub fn http_client(&self) -> reqwest::Result<reqwest::Client> {
        reqwest::Client::builder()
            .timeout(self.request_timeout)
            .user_agent(self.user_agent.clone())
            .build()
    }
}
