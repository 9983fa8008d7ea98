use crate::exception::CurrencyCloudException;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] CurrencyCloudException),

    #[error("decode error: {reason}")]
    Decode { reason: String },

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config error: {reason}")]
    Config { reason: String },

    #[cfg(feature = "native")]
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("request to {url} timed out")]
    Timeout { url: String },
}

impl Error {
    /// The decoded remote failure, if this error came from the API.
    pub fn as_api(&self) -> Option<&CurrencyCloudException> {
        match self {
            Self::Api(exception) => Some(exception),
            _ => None,
        }
    }
}
