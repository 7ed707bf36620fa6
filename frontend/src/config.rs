use crate::lookup::ticker::TickerCode;

/// Origin of the pricing API when the page is served from a developer machine.
pub const LOCAL_API_ORIGIN: &str = "http://localhost:8000";

const LOCAL_HOSTS: [&str; 2] = ["localhost", "127.0.0.1"];

/// Pick the API base for the page host. Anything that is not a local host goes
/// through the reverse proxy, so requests stay relative to the current origin.
pub fn resolve_api_base(host: &str) -> &'static str {
    if LOCAL_HOSTS.contains(&host) {
        LOCAL_API_ORIGIN
    } else {
        ""
    }
}

/// Where price requests are sent. Resolved once when the widget mounts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    api_base_url: String,
}

impl ApiConfig {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        let api_base_url = api_base_url.into();
        Self {
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn for_host(host: &str) -> Self {
        Self::new(resolve_api_base(host))
    }

    /// Resolve from `window.location`; a page without a readable host is
    /// treated as proxied.
    #[cfg(target_arch = "wasm32")]
    pub fn from_location() -> Self {
        let host = web_sys::window()
            .and_then(|window| window.location().hostname().ok())
            .unwrap_or_default();
        let config = Self::for_host(&host);
        log::debug!("api base for host {host:?}: {:?}", config.api_base_url);
        config
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    /// `<base>/cryptocurrency/<CODE>/`, trailing slash included.
    pub fn prices_url(&self, code: &TickerCode) -> String {
        format!("{}/cryptocurrency/{}/", self.api_base_url, code)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new("")
    }
}
