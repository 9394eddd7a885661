use crate::ports::{DnsResolver, LookupRequest};
use dnslookup_domain::{DomainError, LookupOutcome, RecordType};
use std::sync::Arc;
use tracing::{debug, info};

pub struct LookupUseCase {
    resolver: Arc<dyn DnsResolver>,
    tracing_on: bool,
}

impl LookupUseCase {
    pub fn new(resolver: Arc<dyn DnsResolver>, tracing_on: bool) -> Self {
        Self {
            resolver,
            tracing_on,
        }
    }

    /// Resolves the request and returns every line the program prints,
    /// trace first when tracing is enabled.
    pub async fn execute(&self, request: &LookupRequest) -> Result<Vec<String>, DomainError> {
        let report = self.resolver.resolve(request).await?;

        match &report.outcome {
            LookupOutcome::Answered { addresses, .. } => {
                info!(name = %request.name, count = addresses.len(), "Lookup answered");
            }
            LookupOutcome::Failed(code) => {
                info!(name = %request.name, code = code.code(), "Lookup failed");
            }
        }

        let mut lines = if self.tracing_on {
            report.trace.into_lines()
        } else {
            debug!(rounds = report.trace.lines().len(), "Trace suppressed");
            Vec::new()
        };
        lines.extend(render_outcome(
            &request.name,
            request.record_type(),
            &report.outcome,
        ));
        Ok(lines)
    }
}

/// Success lines carry the first answer's TTL and type; a failure line puts
/// the code where the TTL goes and the requested type after it.
pub fn render_outcome(fqdn: &str, requested: RecordType, outcome: &LookupOutcome) -> Vec<String> {
    match outcome {
        LookupOutcome::Answered {
            ttl,
            record_type,
            addresses,
        } => {
            let label = address_type_label(*record_type);
            addresses
                .iter()
                .map(|address| format!("{} {} {} {}", fqdn, ttl, label, address))
                .collect()
        }
        LookupOutcome::Failed(code) => {
            vec![format!("{} {} {} 0.0.0.0", fqdn, code, requested)]
        }
    }
}

/// Only address types are named on a success line; anything else is blank.
fn address_type_label(record_type: RecordType) -> String {
    match record_type {
        RecordType::A | RecordType::AAAA => record_type.to_string(),
        _ => String::new(),
    }
}
