use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// Idle timeout requested for the NITRO session at login.
pub const DEFAULT_SESSION_TIMEOUT: u32 = 10;

/// Upper bound on any single request to the appliance.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Everything one audit run needs to know.
#[derive(Debug, Clone)]
pub struct Config {
    /// Management address of the appliance, as typed by the operator.
    ///
    /// Also names the remediation artifact.
    pub device: String,
    pub credentials: Credentials,
    /// Directory the remediation artifact is written into.
    pub output_dir: PathBuf,
    pub session_timeout: u32,
    pub request_timeout: Duration,
    /// Attempt a best-effort logout once the configuration has been fetched.
    pub logout: bool,
}

impl Config {
    /// Builds a config with the default timeouts, writing into the current directory.
    pub fn new(device: impl Into<String>, credentials: Credentials) -> Self {
        Self {
            device: device.into(),
            credentials,
            output_dir: PathBuf::from("."),
            session_timeout: DEFAULT_SESSION_TIMEOUT,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            logout: true,
        }
    }
}

#[derive(Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

// Passwords never end up in logs.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}
