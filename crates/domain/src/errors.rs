use crate::lookup_outcome::FailureCode;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Name error (RCODE 3) from server")]
    NameError,

    #[error("Server failure (RCODE 5) from server")]
    ServerFailure,

    #[error("Unexpected response code {0} from server")]
    UnexpectedResponseCode(u8),

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("Transaction ID mismatch: sent {sent}, received {received}")]
    TransactionIdMismatch { sent: u16, received: u16 },

    #[error("Query timeout")]
    QueryTimeout,

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Missing data: {0} section is empty")]
    MissingData(&'static str),

    #[error("No IP address for the server could be found: {0}")]
    ServerAddress(String),
}

impl DomainError {
    /// Coded failure reported for this error, or `None` for setup errors that
    /// abort the run instead of printing a failure line.
    pub fn failure_code(&self) -> Option<FailureCode> {
        match self {
            DomainError::NameError
            | DomainError::InvalidDnsResponse(_)
            | DomainError::InvalidDomainName(_)
            | DomainError::TransactionIdMismatch { .. } => Some(FailureCode::FormatError),
            DomainError::QueryTimeout => Some(FailureCode::Timeout),
            DomainError::ServerFailure
            | DomainError::UnexpectedResponseCode(_)
            | DomainError::IoError(_) => Some(FailureCode::ServerFailure),
            DomainError::MissingData(_) => Some(FailureCode::NoAnswer),
            DomainError::ServerAddress(_) => None,
        }
    }
}
