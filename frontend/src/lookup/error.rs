use thiserror::Error;

/// Everything that can end a lookup without rendering prices.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LookupError {
    #[error("empty ticker input")]
    EmptyInput,

    #[error("ticker must be 1-10 ASCII letters or digits")]
    InvalidFormat,

    #[error("pricing API answered with status {status}")]
    Http { status: u16, detail: Option<String> },

    #[error("request failed: {0}")]
    NetworkOrParse(String),

    #[error("no non-null prices in response")]
    NoPriceData,
}

impl LookupError {
    /// Text shown to the user in the error region.
    pub fn user_message(&self) -> String {
        match self {
            LookupError::EmptyInput => {
                "Please enter a cryptocurrency symbol (e.g., BTC, ETH)".to_string()
            }
            LookupError::InvalidFormat => {
                "Invalid cryptocurrency code. Use only letters and numbers (1-10 characters)."
                    .to_string()
            }
            LookupError::Http {
                detail: Some(detail),
                ..
            } => detail.clone(),
            LookupError::Http { status, .. } => format!("HTTP error! status: {status}"),
            LookupError::NetworkOrParse(_) => {
                "Failed to fetch cryptocurrency prices. Please try again.".to_string()
            }
            LookupError::NoPriceData => {
                "No price data available for this cryptocurrency.".to_string()
            }
        }
    }
}
