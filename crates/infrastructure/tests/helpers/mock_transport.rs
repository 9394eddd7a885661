#![allow(dead_code)]
use super::ResponseBuilder;
use async_trait::async_trait;
use dnslookup_domain::DomainError;
use dnslookup_infrastructure::dns::transport::DnsTransport;
use std::collections::VecDeque;
use std::net::{IpAddr, SocketAddr};
use std::sync::Mutex;
use std::time::Duration;

#[derive(Debug, Clone)]
pub enum Reply {
    Respond(ResponseBuilder),
    Raw(Vec<u8>),
    Timeout,
    IoFailure,
}

/// A query as the transport saw it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentQuery {
    pub server: SocketAddr,
    pub id: u16,
    pub name: String,
    pub qtype: u16,
}

/// Scripted transport: replies are consumed in order, then `fallback`
/// answers every further query.
pub struct MockTransport {
    script: Mutex<VecDeque<Reply>>,
    fallback: Option<Reply>,
    sent: Mutex<Vec<SentQuery>>,
}

impl MockTransport {
    pub fn scripted(replies: Vec<Reply>) -> Self {
        Self {
            script: Mutex::new(replies.into()),
            fallback: None,
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn always(reply: Reply) -> Self {
        Self {
            script: Mutex::new(VecDeque::new()),
            fallback: Some(reply),
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn sent(&self) -> Vec<SentQuery> {
        self.sent.lock().unwrap().clone()
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    fn next_reply(&self) -> Option<Reply> {
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .or_else(|| self.fallback.clone())
    }
}

fn parse_question(query: &[u8]) -> (String, u16) {
    let mut labels = Vec::new();
    let mut pos = 12;
    while query[pos] != 0 {
        let len = query[pos] as usize;
        labels.push(String::from_utf8_lossy(&query[pos + 1..pos + 1 + len]).to_string());
        pos += 1 + len;
    }
    let qtype = u16::from_be_bytes([query[pos + 1], query[pos + 2]]);
    (labels.join("."), qtype)
}

#[async_trait]
impl DnsTransport for MockTransport {
    async fn exchange(
        &self,
        query: &[u8],
        server: SocketAddr,
        _timeout: Duration,
    ) -> Result<Vec<u8>, DomainError> {
        let (name, qtype) = parse_question(query);
        self.sent.lock().unwrap().push(SentQuery {
            server,
            id: u16::from_be_bytes([query[0], query[1]]),
            name,
            qtype,
        });

        match self.next_reply() {
            Some(Reply::Respond(builder)) => Ok(builder.build_for(query)),
            Some(Reply::Raw(bytes)) => Ok(bytes),
            Some(Reply::Timeout) | None => Err(DomainError::QueryTimeout),
            Some(Reply::IoFailure) => Err(DomainError::IoError("connection refused".to_string())),
        }
    }

    fn protocol_name(&self) -> &'static str {
        "MOCK"
    }

    async fn resolve_server(
        &self,
        host: &str,
        port: u16,
        _timeout: Duration,
    ) -> Result<SocketAddr, DomainError> {
        host.parse::<IpAddr>()
            .map(|ip| SocketAddr::new(ip, port))
            .map_err(|_| DomainError::ServerAddress(host.to_string()))
    }
}
