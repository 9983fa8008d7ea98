use std::collections::BTreeMap;

use serde::Deserialize;
use tracing::debug;

use crate::error::Error;
use crate::exception::{CurrencyCloudException, ErrorMessage, ParamValue, mapping};
use crate::types::{RawErrorEntry, RawErrorEnvelope};

/// Turns the body of a failed response into a [`CurrencyCloudException`].
pub struct ErrorResponseDecoder;

impl ErrorResponseDecoder {
    /// Decode a raw error body.
    ///
    /// Fails with [`Error::Decode`] when `http_status` is not a 4xx/5xx status,
    /// and with [`Error::Json`] when `body` is not a valid error envelope.
    pub fn decode(http_status: u16, body: &str) -> Result<CurrencyCloudException, Error> {
        ensure_failure_status(http_status)?;
        let envelope: RawErrorEnvelope = serde_json::from_str(body)?;
        Ok(Self::from_envelope(http_status, envelope))
    }

    /// Same as [`Self::decode`] for a body that has already been parsed.
    pub fn decode_value(
        http_status: u16,
        body: &serde_json::Value,
    ) -> Result<CurrencyCloudException, Error> {
        ensure_failure_status(http_status)?;
        let envelope = RawErrorEnvelope::deserialize(body)?;
        Ok(Self::from_envelope(http_status, envelope))
    }

    fn from_envelope(http_status: u16, envelope: RawErrorEnvelope) -> CurrencyCloudException {
        let RawErrorEnvelope { error_code, errors } = envelope;

        let error_messages: BTreeMap<String, Vec<ErrorMessage>> = errors
            .into_iter()
            .map(|(field, entries)| {
                let messages = entries.into_iter().map(to_error_message).collect();
                (field, messages)
            })
            .collect();

        debug!(
            http_status,
            error_code = %error_code,
            fields = error_messages.len(),
            "decoded error response"
        );

        CurrencyCloudException::new(error_code, http_status, error_messages)
    }
}

fn ensure_failure_status(http_status: u16) -> Result<(), Error> {
    if mapping::is_failure_status(http_status) {
        Ok(())
    } else {
        Err(Error::Decode {
            reason: format!("status {http_status} is not a failure status"),
        })
    }
}

fn to_error_message(entry: RawErrorEntry) -> ErrorMessage {
    let params = entry
        .params
        .unwrap_or_default()
        .into_iter()
        .map(|(name, value)| (name, ParamValue::from_json(&value)))
        .collect();
    ErrorMessage::new(entry.code, entry.message, params)
}
