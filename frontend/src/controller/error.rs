use thiserror::Error;

/// Failures below the success envelope: the request never produced a body,
/// or the body was not the JSON we expected.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Request(String),

    #[error("malformed response: {0}")]
    Json(#[from] serde_json::Error),
}

pub type ClientResult<T> = Result<T, ClientError>;
