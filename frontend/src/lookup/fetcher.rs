use async_trait::async_trait;
use gloo_net::http::Request;
use serde::Deserialize;

use crate::config::ApiConfig;

use super::{error::LookupError, prices::PriceMap, ticker::TickerCode};

/// Anything able to answer "what does this coin cost" for one ticker.
#[async_trait(?Send)]
pub trait PriceSource {
    async fn fetch_prices(&self, code: &TickerCode) -> Result<PriceMap, LookupError>;
}

/// Error payload of the pricing API. `detail` is optional and may hold anything.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<serde_json::Value>,
}

/// Turn a finished HTTP exchange into a price map or a lookup error.
pub fn interpret_response(status: u16, body: &str) -> Result<PriceMap, LookupError> {
    if !(200..300).contains(&status) {
        return Err(LookupError::Http {
            status,
            detail: error_detail(body),
        });
    }

    serde_json::from_str(body).map_err(|err| LookupError::NetworkOrParse(err.to_string()))
}

fn error_detail(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    match parsed.detail? {
        serde_json::Value::String(detail) if !detail.is_empty() => Some(detail),
        _ => None,
    }
}

/// Price source backed by the REST endpoint `GET <base>/cryptocurrency/<CODE>/`.
#[derive(Debug, Clone, Default)]
pub struct HttpPriceSource {
    config: ApiConfig,
}

impl HttpPriceSource {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }
}

#[async_trait(?Send)]
impl PriceSource for HttpPriceSource {
    async fn fetch_prices(&self, code: &TickerCode) -> Result<PriceMap, LookupError> {
        let url = self.config.prices_url(code);
        log::debug!("GET {url}");

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|err| LookupError::NetworkOrParse(err.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| LookupError::NetworkOrParse(err.to_string()))?;

        interpret_response(status, &body)
    }
}
