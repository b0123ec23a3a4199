use super::AddressDecodeError;
use std::sync::Arc;
use thiserror::Error;

/// Status code carried by a rejection reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rejection {
    /// REFUSED.
    Refused,
    /// NXDOMAIN / NAME-ERROR.
    NameError,
}

impl Rejection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rejection::Refused => "REFUSED",
            Rejection::NameError => "NXDOMAIN",
        }
    }
}

/// Why a query was rejected. All variants are client input errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("Malformed query: {0}")]
    MalformedQuery(String),

    #[error("Name {0} is not under an accepted domain")]
    SuffixMismatch(Arc<str>),

    #[error("Invalid address in {name}: {source}")]
    AddressDecodeFailure {
        name: Arc<str>,
        #[source]
        source: AddressDecodeError,
    },
}

impl QueryError {
    pub fn rejection(&self) -> Rejection {
        match self {
            QueryError::MalformedQuery(_) | QueryError::SuffixMismatch(_) => Rejection::Refused,
            QueryError::AddressDecodeFailure { .. } => Rejection::NameError,
        }
    }

    /// Short reason for log lines.
    pub fn reason(&self) -> &'static str {
        match self {
            QueryError::MalformedQuery(_) => "invalid query",
            QueryError::SuffixMismatch(_) => "invalid domain",
            QueryError::AddressDecodeFailure { .. } => "invalid ip",
        }
    }
}
