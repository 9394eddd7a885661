use crate::dns_record::RecordType;
use std::fmt;

/// Numeric failure codes printed in place of a TTL on the failure line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureCode {
    /// Name error (RCODE 3) or an undecodable response.
    FormatError,
    /// Second timeout anywhere in the resolution.
    Timeout,
    /// Attempt budget exhausted.
    AttemptLimit,
    /// RCODE 5, transport failure, or a nameserver address that could not be learned.
    ServerFailure,
    /// Authoritative response without answers.
    NoAnswer,
}

impl FailureCode {
    pub fn code(&self) -> i32 {
        match self {
            FailureCode::FormatError => -1,
            FailureCode::Timeout => -2,
            FailureCode::AttemptLimit => -3,
            FailureCode::ServerFailure => -4,
            FailureCode::NoAnswer => -6,
        }
    }
}

impl fmt::Display for FailureCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    Answered {
        ttl: u32,
        record_type: RecordType,
        addresses: Vec<String>,
    },
    Failed(FailureCode),
}

impl LookupOutcome {
    pub fn is_answered(&self) -> bool {
        matches!(self, LookupOutcome::Answered { .. })
    }
}
