#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::dbg_macro,
        clippy::print_stdout,
        clippy::print_stderr,
        clippy::panic,
    )
)]

pub mod client;
pub mod error;
pub mod exception;
pub mod types;

#[cfg(feature = "wasm")]
pub mod wasm;

#[cfg(feature = "native")]
pub use client::{AuthToken, Client, check_response};
pub use client::{ClientConfig, Environment};
pub use error::Error;
pub use exception::decoder::ErrorResponseDecoder;
pub use exception::mapping::{category_for_status, is_failure_status, status_for_category};
pub use exception::{CurrencyCloudException, ErrorCategory, ErrorCode, ErrorMessage, ParamValue};
pub use types::{RawErrorEntry, RawErrorEnvelope, RequestInfo};
