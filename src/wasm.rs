use serde::Serialize;
use strum::IntoEnumIterator;
use wasm_bindgen::prelude::*;

use crate::exception::decoder::ErrorResponseDecoder;
use crate::exception::mapping;
use crate::exception::{CurrencyCloudException, ErrorCategory};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = JSON)]
    fn parse(s: &str) -> JsValue;
}

fn to_js(value: &serde_json::Value) -> JsValue {
    match serde_json::to_string(value) {
        Ok(json_str) => parse(&json_str),
        Err(_) => JsValue::NULL,
    }
}

fn error_result(msg: &str) -> JsValue {
    to_js(&serde_json::json!({ "error": msg }))
}

#[derive(Serialize)]
struct DecodedError<'a> {
    #[serde(flatten)]
    exception: &'a CurrencyCloudException,
    category: String,
}

/// Decode a failed response body into
/// `{errorCode, httpStatusCode, category, errorMessages}`, or `{error}`.
///
/// 64-bit params (`ParamValue::Long`) come out as `BigInt` so request ids keep
/// every digit.
#[wasm_bindgen]
pub fn decode_error_response(status: u16, body: &str) -> JsValue {
    let exception = match ErrorResponseDecoder::decode(status, body) {
        Ok(exception) => exception,
        Err(e) => return error_result(&e.to_string()),
    };

    let decoded = DecodedError {
        exception: &exception,
        category: exception.category().to_string(),
    };
    let serializer = serde_wasm_bindgen::Serializer::new()
        .serialize_large_number_types_as_bigints(true)
        .serialize_maps_as_objects(true);
    decoded
        .serialize(&serializer)
        .unwrap_or_else(|e| error_result(&e.to_string()))
}

/// Category name for an HTTP status.
#[wasm_bindgen]
pub fn error_category(status: u16) -> String {
    mapping::category_for_status(status).to_string()
}

/// All categories with the status each one is derived from (`null` for the catch-all).
#[wasm_bindgen]
pub fn get_all_categories() -> JsValue {
    let result: Vec<serde_json::Value> = ErrorCategory::iter()
        .map(|category| {
            serde_json::json!({
                "id": category.as_ref(),
                "status": mapping::status_for_category(category),
            })
        })
        .collect();
    to_js(&serde_json::Value::Array(result))
}
