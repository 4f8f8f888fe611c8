use thiserror::Error;

#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("Remote source unavailable: {0}")]
    SourceUnavailable(String),

    #[error("Remote source timed out")]
    Timeout,

    #[error("Malformed record: {0}")]
    MalformedRecord(String),

    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(String),
}
