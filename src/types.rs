use std::collections::BTreeMap;

/// The JSON body returned by the API when a request fails.
#[derive(serde::Deserialize)]
pub struct RawErrorEnvelope {
    /// Overall error code, e.g. `"auth_failed"`.
    pub error_code: String,
    /// Field name to the validation failures reported for it.
    /// The live service calls this map `error_messages`.
    #[serde(alias = "error_messages")]
    pub errors: BTreeMap<String, Vec<RawErrorEntry>>,
}

/// One field-level failure inside [`RawErrorEnvelope::errors`].
#[derive(serde::Deserialize)]
pub struct RawErrorEntry {
    /// Machine-readable code, e.g. `"api_key_length_is_invalid"`.
    pub code: String,
    /// Human-readable explanation.
    pub message: String,
    /// Named values interpolated into `message`. May be missing or `null`.
    pub params: Option<serde_json::Map<String, serde_json::Value>>,
}

/// Context of the request that produced a failed response.
///
/// Only the verb and URL are kept; form parameters carry credentials.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct RequestInfo {
    pub verb: String,
    pub url: String,
}
