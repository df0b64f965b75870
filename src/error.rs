// Error type shared by the credential loader and the API client.
// `main` wraps these in `anyhow` for the final report; the library keeps
// them typed so callers (and tests) can match on the failure kind.

use reqwest::StatusCode;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required environment variable is unset or empty.
    #[error("{0} environment variable not set")]
    MissingEnv(&'static str),

    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),

    #[error("failed to serialize {what} request body")]
    Serialize {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// The request never produced a response (DNS, connect, TLS, ...).
    #[error("{what} request failed")]
    Transport {
        what: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-200 status and a readable error body.
    #[error("{what} error ({}): {code} - {message}", .status.as_u16())]
    Rejected {
        what: &'static str,
        status: StatusCode,
        code: String,
        message: String,
    },

    #[error("failed to decode {what} response")]
    Decode {
        what: &'static str,
        #[source]
        source: reqwest::Error,
    },
}
