#[derive(Debug, PartialEq, Eq)]
pub enum StatusServiceError {
    MalformedRecord(String),
    MissingTimestamp(String),
}

impl std::fmt::Display for StatusServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatusServiceError::MalformedRecord(msg) => {
                write!(f, "Malformed game record: {}", msg)
            }
            StatusServiceError::MissingTimestamp(msg) => {
                write!(f, "Missing timestamp: {}", msg)
            }
        }
    }
}

impl std::error::Error for StatusServiceError {}
