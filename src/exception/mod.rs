pub mod decoder;
pub mod mapping;

use std::collections::BTreeMap;
use std::fmt;

use crate::types::RequestInfo;

/// Broad class of a failed response, derived from its HTTP status.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::AsRefStr,
    strum_macros::EnumIter,
)]
#[strum(serialize_all = "snake_case")]
pub enum ErrorCategory {
    BadRequest,
    Authentication,
    Forbidden,
    NotFound,
    TooManyRequests,
    InternalApplication,
    Unexpected,
}

impl ErrorCategory {
    pub fn from_status(http_status: u16) -> Self {
        mapping::category_for_status(http_status)
    }
}

/// Top-level error codes the API is documented to return.
///
/// The list is not exhaustive; unknown codes parse to [`ErrorCode::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, strum_macros::EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum ErrorCode {
    AuthFailed,
    AuthInvalidUserLoginDetails,
    TooManyRequests,
    InternalApplicationError,
    #[strum(default)]
    Other(String),
}

impl ErrorCode {
    pub fn parse(code: &str) -> Self {
        code.parse()
            .unwrap_or_else(|_| Self::Other(code.to_string()))
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::AuthFailed => "auth_failed",
            Self::AuthInvalidUserLoginDetails => "auth_invalid_user_login_details",
            Self::TooManyRequests => "too_many_requests",
            Self::InternalApplicationError => "internal_application_error",
            Self::Other(code) => code,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parameter value attached to a field-level error.
///
/// Integers are split by width: values that fit in 32 bits are [`ParamValue::Int`],
/// wider ones (request ids, for instance) are [`ParamValue::Long`].
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    Str(String),
    Int(i32),
    Long(i64),
    /// Any other JSON value, kept as compact JSON text.
    Raw(String),
}

impl ParamValue {
    pub fn from_json(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::String(s) => Self::Str(s.clone()),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(wide) => i32::try_from(wide).map_or(Self::Long(wide), Self::Int),
                None => Self::Raw(n.to_string()),
            },
            other => Self::Raw(other.to_string()),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(i64::from(*v)),
            Self::Long(v) => Some(*v),
            Self::Str(_) | Self::Raw(_) => None,
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) | Self::Raw(s) => f.write_str(s),
            Self::Int(v) => write!(f, "{v}"),
            Self::Long(v) => write!(f, "{v}"),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        Self::Int(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        Self::Long(value)
    }
}

/// One validation failure reported against a request field.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ErrorMessage {
    code: String,
    message: String,
    params: BTreeMap<String, ParamValue>,
}

impl ErrorMessage {
    pub fn new(
        code: impl Into<String>,
        message: impl Into<String>,
        params: BTreeMap<String, ParamValue>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            params,
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Always present; empty when the API sent no params.
    pub fn params(&self) -> &BTreeMap<String, ParamValue> {
        &self.params
    }

    pub fn param(&self, name: &str) -> Option<&ParamValue> {
        self.params.get(name)
    }
}

/// A failed API response, decoded.
///
/// Built once per failed response by [`decoder::ErrorResponseDecoder`] and
/// read-only afterwards.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[error("{error_code} (HTTP {http_status_code})")]
#[serde(rename_all = "camelCase")]
pub struct CurrencyCloudException {
    error_code: String,
    http_status_code: u16,
    error_messages: BTreeMap<String, Vec<ErrorMessage>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    request: Option<RequestInfo>,
}

impl CurrencyCloudException {
    pub(crate) fn new(
        error_code: String,
        http_status_code: u16,
        error_messages: BTreeMap<String, Vec<ErrorMessage>>,
    ) -> Self {
        Self {
            error_code,
            http_status_code,
            error_messages,
            request: None,
        }
    }

    pub(crate) fn with_request(mut self, request: RequestInfo) -> Self {
        self.request = Some(request);
        self
    }

    pub fn error_code(&self) -> &str {
        &self.error_code
    }

    pub fn error_code_kind(&self) -> ErrorCode {
        ErrorCode::parse(&self.error_code)
    }

    pub fn http_status_code(&self) -> u16 {
        self.http_status_code
    }

    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_status(self.http_status_code)
    }

    pub fn error_messages(&self) -> &BTreeMap<String, Vec<ErrorMessage>> {
        &self.error_messages
    }

    /// Messages reported for `field`, in the order the API sent them.
    pub fn messages_for(&self, field: &str) -> &[ErrorMessage] {
        self.error_messages.get(field).map_or(&[], Vec::as_slice)
    }

    pub fn request(&self) -> Option<&RequestInfo> {
        self.request.as_ref()
    }
}
