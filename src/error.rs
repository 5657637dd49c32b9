use thiserror::Error;

/// Errors that can occur when calling the inference endpoint.
///
/// Transport failures are classified when converting from [`reqwest::Error`]:
/// deadline overruns become [`Error::Timeout`], unreachable hosts become
/// [`Error::Connection`], and everything else keeps the original error as
/// [`Error::Http`].
#[derive(Error, Debug)]
pub enum Error {
    #[error("The server took too long to respond. Try again later.")]
    Timeout,

    #[error("Could not connect to the inference service. Check your network.")]
    Connection,

    #[error("HTTP error {status}: {detail}")]
    Status {
        status: reqwest::StatusCode,
        detail: String,
    },

    #[error("HTTP request failed: {0}")]
    Http(reqwest::Error),

    #[error("Malformed response body: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl Error {
    pub fn config(message: impl Into<String>) -> Self {
        Error::Config(message.into())
    }

    pub fn status(status: reqwest::StatusCode, detail: impl Into<String>) -> Self {
        Error::Status {
            status,
            detail: detail.into(),
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Error::Timeout
        } else if err.is_connect() {
            Error::Connection
        } else {
            Error::Http(err)
        }
    }
}
