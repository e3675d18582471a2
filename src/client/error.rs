use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum ClientError {
    #[error("Request to {url} failed: {source}")]
    #[diagnostic(
        code(vikunja_mcp::client::transport),
        help("Check that VIKUNJA_URL points to a reachable Vikunja instance.")
    )]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Vikunja API error {status}: {body}")]
    #[diagnostic(code(vikunja_mcp::client::api_error))]
    Api { status: u16, body: String },

    #[error("Invalid response from Vikunja: {source}")]
    #[diagnostic(
        code(vikunja_mcp::client::decode),
        help("The server returned data in an unexpected format. This might indicate a version mismatch.")
    )]
    Decode {
        #[source]
        source: serde_json::Error,
    },

    #[error("{resource} #{id} not found")]
    #[diagnostic(code(vikunja_mcp::client::not_found))]
    NotFound { resource: &'static str, id: i64 },

    #[error("Upload of \"{file_name}\" was rejected: {reason}")]
    #[diagnostic(code(vikunja_mcp::client::upload_rejected))]
    UploadRejected { file_name: String, reason: String },
}

impl ClientError {
    /// HTTP status of a remote API error, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(source: serde_json::Error) -> Self {
        ClientError::Decode { source }
    }
}

pub type ClientResult<T> = Result<T, ClientError>;
