//! # NITRO Session Client
//!
//! [`SessionClient`] over the appliance's NITRO REST API. Authentication is
//! a `NITRO_AUTH_TOKEN` session cookie obtained from the login endpoint; the
//! running configuration fetch additionally carries the credentials as
//! `X-NITRO-USER`/`X-NITRO-PASS` headers.

mod payload;

use std::net::Ipv6Addr;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{CONTENT_TYPE, COOKIE};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

use nsprune_common::config::{Config, Credentials};
use nsprune_common::error::SessionError;
use nsprune_common::session::{SessionClient, SessionToken};

use payload::{Empty, Login, LoginRequest, LoginResponse, LogoutRequest, RunningConfigResponse, Status};

pub const LOGIN_PATH: &str = "/nitro/v1/config/login";
pub const LOGOUT_PATH: &str = "/nitro/v1/config/logout";
pub const RUNNING_CONFIG_PATH: &str = "/nitro/v1/config/nsrunningconfig";

const AUTH_COOKIE: &str = "NITRO_AUTH_TOKEN";
const USER_HEADER: &str = "X-NITRO-USER";
const PASS_HEADER: &str = "X-NITRO-PASS";

#[derive(Debug, Clone)]
pub struct NitroClient {
    http: Client,
    base_url: String,
    session_timeout: u32,
}

impl NitroClient {
    /// Client for the appliance named by `cfg.device`, over plain HTTP.
    pub fn new(cfg: &Config) -> Result<Self, SessionError> {
        Self::with_base_url(base_url(&cfg.device), cfg.session_timeout, cfg.request_timeout)
    }

    /// Client for an explicit base URL such as `http://10.0.0.5:8080`.
    pub fn with_base_url(
        base_url: impl Into<String>,
        session_timeout: u32,
        request_timeout: Duration,
    ) -> Result<Self, SessionError> {
        let base_url: String = base_url.into().trim_end_matches('/').to_owned();
        // Management traffic goes straight to the appliance.
        let http = Client::builder()
            .timeout(request_timeout)
            .no_proxy()
            .build()
            .map_err(|e| transport(&base_url, e))?;

        Ok(Self {
            http,
            base_url,
            session_timeout,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl SessionClient for NitroClient {
    async fn login(&self, credentials: &Credentials) -> Result<SessionToken, SessionError> {
        let url = self.url(LOGIN_PATH);
        let body = LoginRequest {
            login: Login {
                username: &credentials.username,
                password: &credentials.password,
                session_timeout: self.session_timeout,
            },
        };

        debug!(%url, user = %credentials.username, "logging in");
        let response = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| transport(&url, e))?;

        let login: LoginResponse = read_json(&url, response).await?;
        check_errorcode(&url, &login.status)?;

        match login.sessionid {
            Some(id) if !id.is_empty() => Ok(SessionToken::new(id)),
            _ => Err(SessionError::Payload {
                url,
                reason: "login response carries no sessionid".into(),
            }),
        }
    }

    async fn fetch_running_config(
        &self,
        session: &SessionToken,
        credentials: &Credentials,
    ) -> Result<String, SessionError> {
        let url = self.url(RUNNING_CONFIG_PATH);

        debug!(%url, "fetching running configuration");
        let response = self
            .http
            .get(&url)
            .header(CONTENT_TYPE, "application/json")
            .header(USER_HEADER, &credentials.username)
            .header(PASS_HEADER, &credentials.password)
            .header(COOKIE, auth_cookie(session))
            .send()
            .await
            .map_err(|e| transport(&url, e))?;

        let running: RunningConfigResponse = read_json(&url, response).await?;
        check_errorcode(&url, &running.status)?;

        running
            .nsrunningconfig
            .map(|rc| rc.response)
            .ok_or_else(|| SessionError::Payload {
                url,
                reason: "response carries no nsrunningconfig".into(),
            })
    }

    async fn logout(&self, session: &SessionToken) -> Result<(), SessionError> {
        let url = self.url(LOGOUT_PATH);

        debug!(%url, "logging out");
        let response = self
            .http
            .post(&url)
            .header(COOKIE, auth_cookie(session))
            .json(&LogoutRequest { logout: Empty {} })
            .send()
            .await
            .map_err(|e| transport(&url, e))?;

        ensure_success(&url, response).await.map(|_| ())
    }
}

/// `http://<device>`, bracketing bare IPv6 literals.
fn base_url(device: &str) -> String {
    if device.parse::<Ipv6Addr>().is_ok() {
        format!("http://[{device}]")
    } else {
        format!("http://{device}")
    }
}

fn auth_cookie(session: &SessionToken) -> String {
    format!("{AUTH_COOKIE}={}", session.as_str())
}

fn transport(url: &str, e: reqwest::Error) -> SessionError {
    SessionError::Transport {
        url: url.to_owned(),
        source: Box::new(e),
    }
}

/// Returns the body of a 2xx response, or the appliance's own error message.
async fn ensure_success(url: &str, response: Response) -> Result<String, SessionError> {
    let status = response.status();
    let body = response.text().await.map_err(|e| transport(url, e))?;

    if status.is_success() {
        return Ok(body);
    }

    let message = serde_json::from_str::<Status>(&body)
        .ok()
        .and_then(|s| s.message)
        .or_else(|| Some(body.trim().to_owned()).filter(|b| !b.is_empty()))
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("no details").to_owned());

    Err(SessionError::Status {
        url: url.to_owned(),
        status: status.as_u16(),
        message,
    })
}

async fn read_json<T: DeserializeOwned>(url: &str, response: Response) -> Result<T, SessionError> {
    let body = ensure_success(url, response).await?;
    serde_json::from_str(&body).map_err(|e| SessionError::Payload {
        url: url.to_owned(),
        reason: format!("malformed JSON: {e}"),
    })
}

/// NITRO may report a failure inside a 2xx body.
fn check_errorcode(url: &str, status: &Status) -> Result<(), SessionError> {
    if status.errorcode == 0 {
        return Ok(());
    }
    Err(SessionError::Status {
        url: url.to_owned(),
        status: 200,
        message: format!(
            "errorcode {}: {}",
            status.errorcode,
            status.message.as_deref().unwrap_or("no message")
        ),
    })
}
