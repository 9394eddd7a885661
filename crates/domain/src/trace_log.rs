use crate::dns_message::DnsMessage;
use crate::dns_record::RecordType;
use std::fmt::Display;

/// Per-round trace lines, kept in memory until the run terminates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TraceLog {
    lines: Vec<String>,
}

impl TraceLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the query header for one round followed by the response dump.
    pub fn record_round(
        &mut self,
        query_id: u16,
        name: &str,
        record_type: RecordType,
        server: impl Display,
        response: &DnsMessage,
    ) {
        self.lines.push(String::new());
        self.lines.push(String::new());
        self.lines.push(format!(
            "Query ID     {} {} {}  --> {}",
            query_id, name, record_type, server
        ));
        self.lines.extend(response.dump());
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
