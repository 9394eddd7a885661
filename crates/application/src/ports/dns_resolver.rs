use async_trait::async_trait;
use dnslookup_domain::{DomainError, LookupOutcome, RecordType, TraceLog};
use std::sync::Arc;

/// One run of the program: a starting server and the name to resolve.
#[derive(Debug, Clone)]
pub struct LookupRequest {
    /// Host name or literal address of the first server to ask.
    pub server: Arc<str>,
    pub name: Arc<str>,
    pub want_ipv6: bool,
}

impl LookupRequest {
    pub fn new(server: impl Into<Arc<str>>, name: impl Into<Arc<str>>, want_ipv6: bool) -> Self {
        Self {
            server: server.into(),
            name: name.into(),
            want_ipv6,
        }
    }

    /// Type asked for the target name.
    pub fn record_type(&self) -> RecordType {
        RecordType::for_query(self.want_ipv6, false)
    }
}

/// Result of a finished resolution together with every traced round.
#[derive(Debug, Clone)]
pub struct LookupReport {
    pub outcome: LookupOutcome,
    pub trace: TraceLog,
}

impl LookupReport {
    pub fn new(outcome: LookupOutcome, trace: TraceLog) -> Self {
        Self { outcome, trace }
    }
}

#[async_trait]
pub trait DnsResolver: Send + Sync {
    /// Walks the delegation chain for `request`.
    ///
    /// Coded failures come back inside the report so the trace survives;
    /// `Err` is reserved for setup errors such as an unusable server address.
    async fn resolve(&self, request: &LookupRequest) -> Result<LookupReport, DomainError>;
}
