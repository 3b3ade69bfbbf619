//! Request and response bodies of the NITRO config API.

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub(crate) struct LoginRequest<'a> {
    pub login: Login<'a>,
}

#[derive(Debug, Serialize)]
pub(crate) struct Login<'a> {
    pub username: &'a str,
    pub password: &'a str,
    pub session_timeout: u32,
}

#[derive(Debug, Serialize)]
pub(crate) struct LogoutRequest {
    pub logout: Empty,
}

#[derive(Debug, Serialize)]
pub(crate) struct Empty {}

/// Envelope fields every NITRO response carries.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct Status {
    #[serde(default)]
    pub errorcode: i64,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LoginResponse {
    #[serde(flatten)]
    pub status: Status,
    pub sessionid: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RunningConfigResponse {
    #[serde(flatten)]
    pub status: Status,
    pub nsrunningconfig: Option<RunningConfig>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RunningConfig {
    pub response: String,
}
