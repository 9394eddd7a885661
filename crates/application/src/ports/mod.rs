mod dns_resolver;

pub use dns_resolver::{DnsResolver, LookupReport, LookupRequest};

// Re-export for convenience
pub use dnslookup_domain::{LookupOutcome, TraceLog};
