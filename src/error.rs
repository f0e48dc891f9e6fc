use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("File not found or could not be read: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse JSON input: {0}")]
    DeserializationError(#[from] serde_json::Error),

    #[error("Failed to build billing snapshot: {0}")]
    ModelConstructionError(String),

    #[error("Failed to write delimited line: {0}")]
    Csv(#[from] csv::Error),

    #[error("Formatted line is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("Invalid report configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid date '{value}', expected YYYY-MM-DD: {source}")]
    InvalidDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

impl From<csv::IntoInnerError<csv::Writer<Vec<u8>>>> for Error {
    fn from(err: csv::IntoInnerError<csv::Writer<Vec<u8>>>) -> Self {
        Error::IoError(std::io::Error::new(err.error().kind(), err.to_string()))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
