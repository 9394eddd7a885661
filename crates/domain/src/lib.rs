//! Domain layer for the iterative DNS lookup: record model, decoded
//! messages, trace log, failure codes and configuration.
pub mod config;
pub mod dns_message;
pub mod dns_query;
pub mod dns_record;
pub mod errors;
pub mod lookup_outcome;
pub mod trace_log;

pub use config::{CliOverrides, Config, ConfigError, LoggingConfig, ResolverConfig};
pub use dns_message::{DnsMessage, MessageHeader};
pub use dns_query::DnsQuery;
pub use dns_record::{RecordData, RecordType, ResourceRecord};
pub use errors::DomainError;
pub use lookup_outcome::{FailureCode, LookupOutcome};
pub use trace_log::TraceLog;
