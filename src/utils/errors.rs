use thiserror::Error;

/// Failure completing a remote model call.
///
/// Recovered at the conversation relay boundary and shown inline to
/// the user; never fatal once startup has succeeded. A single call is
/// a single attempt: retrying is up to the user resubmitting.
#[derive(Error, Debug)]
pub enum RemoteServiceError {
    #[error("network error: {0}")]
    Network(String),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("model returned no text")]
    EmptyReply,
}
