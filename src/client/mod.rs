pub mod config;
#[cfg(feature = "native")]
pub mod session;

pub use config::{ClientConfig, Environment};
#[cfg(feature = "native")]
pub use session::{AuthToken, Client, check_response};

pub const AUTHENTICATE_PATH: &str = "/v2/authenticate/api";
pub const CLOSE_SESSION_PATH: &str = "/v2/authenticate/close_session";
pub const AUTH_TOKEN_HEADER: &str = "X-Auth-Token";
