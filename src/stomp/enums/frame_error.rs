use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FrameError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Malformed header: {0}")]
    MalformedHeader(String),

    #[error("Invalid escape sequence in header: {0}")]
    InvalidEscape(String),

    #[error("Invalid content-length: {0}")]
    InvalidContentLength(String),

    #[error("Incomplete frame")]
    Incomplete,

    #[error("Frame is not NUL terminated")]
    MissingTerminator,

    #[error("Frame is not valid UTF-8")]
    InvalidUtf8,
}
