use std::fmt;

use tracing::{debug, info, warn};

use crate::client::config::ClientConfig;
use crate::client::{AUTH_TOKEN_HEADER, AUTHENTICATE_PATH, CLOSE_SESSION_PATH};
use crate::error::Error;
use crate::exception::decoder::ErrorResponseDecoder;
use crate::types::RequestInfo;

/// Session token returned by a successful login.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthToken(..)")
    }
}

#[derive(serde::Deserialize)]
struct AuthenticateResponse {
    auth_token: String,
}

/// Authentication client for the currency exchange API.
///
/// Every non-2xx response is decoded into a
/// [`CurrencyCloudException`](crate::CurrencyCloudException) and returned as
/// [`Error::Api`].
pub struct Client {
    http: reqwest::Client,
    config: ClientConfig,
}

impl Client {
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()?;
        debug!(base_url = config.base_url(), "initialized client");
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.config.base_url())
    }

    /// Log in with a login id and API key.
    pub async fn authenticate(&self, login_id: &str, api_key: &str) -> Result<AuthToken, Error> {
        let url = self.url(AUTHENTICATE_PATH);
        debug!(login_id, "authenticating");

        let response = self
            .http
            .post(&url)
            .form(&[("login_id", login_id), ("api_key", api_key)])
            .send()
            .await
            .map_err(|e| transport_error(&url, e))?;
        let response = check_response("POST", &url, response).await?;

        let body = response
            .text()
            .await
            .map_err(|e| transport_error(&url, e))?;
        let parsed: AuthenticateResponse = serde_json::from_str(&body)?;

        info!(login_id, "authenticated");
        Ok(AuthToken(parsed.auth_token))
    }

    /// Invalidate a session token.
    pub async fn close_session(&self, token: &AuthToken) -> Result<(), Error> {
        let url = self.url(CLOSE_SESSION_PATH);

        let response = self
            .http
            .post(&url)
            .header(AUTH_TOKEN_HEADER, token.as_str())
            .send()
            .await
            .map_err(|e| transport_error(&url, e))?;
        check_response("POST", &url, response).await?;

        info!("session closed");
        Ok(())
    }
}

/// Pass a 2xx response through; decode anything else into [`Error::Api`].
///
/// A failure body that is not a valid error envelope yields [`Error::Json`]
/// instead.
pub async fn check_response(
    verb: &str,
    url: &str,
    response: reqwest::Response,
) -> Result<reqwest::Response, Error> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response
        .text()
        .await
        .map_err(|e| transport_error(url, e))?;
    let exception = ErrorResponseDecoder::decode(status.as_u16(), &body)
        .inspect_err(|e| {
            warn!(
                http_status = status.as_u16(),
                url,
                error = %e,
                "undecodable error response"
            );
        })?
        .with_request(RequestInfo {
            verb: verb.to_string(),
            url: url.to_string(),
        });

    warn!(
        http_status = status.as_u16(),
        error_code = exception.error_code(),
        url,
        "request failed"
    );
    Err(Error::Api(exception))
}

fn transport_error(url: &str, error: reqwest::Error) -> Error {
    if error.is_timeout() {
        Error::Timeout {
            url: url.to_string(),
        }
    } else {
        Error::Transport(error)
    }
}
