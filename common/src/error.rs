use thiserror::Error;

/// Failures raised at the session boundary while talking to the appliance.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The request never produced a response (refused, timed out, DNS, ...).
    #[error("request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The appliance answered with a non-success status.
    #[error("{url} answered HTTP {status}: {message}")]
    Status {
        url: String,
        status: u16,
        message: String,
    },

    /// A success response did not carry what the caller needed.
    #[error("unexpected response from {url}: {reason}")]
    Payload { url: String, reason: String },
}
