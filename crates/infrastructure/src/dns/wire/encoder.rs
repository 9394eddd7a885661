use super::{CLASS_IN, HEADER_LEN};
use dnslookup_domain::{DnsQuery, DomainError, RecordType};

const MAX_LABEL_LEN: usize = 63;
const MAX_NAME_WIRE_LEN: usize = 255;

/// A serialized query and what the caller needs to match its response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedQuery {
    pub id: u16,
    pub bytes: Vec<u8>,
    /// Wire length of the question name, terminating zero included.
    pub qname_len: usize,
}

/// Builds single-question queries in wire format.
pub struct QueryEncoder;

impl QueryEncoder {
    /// Build a query with a random transaction id.
    pub fn build_query(query: &DnsQuery) -> Result<EncodedQuery, DomainError> {
        Self::build_query_with_id(fastrand::u16(..), query)
    }

    /// Build a query with a caller-chosen transaction id.
    ///
    /// Every header flag is clear (no recursion desired) and QDCOUNT is 1.
    pub fn build_query_with_id(id: u16, query: &DnsQuery) -> Result<EncodedQuery, DomainError> {
        let qname = encode_name(&query.domain)?;
        let qname_len = qname.len();

        let mut bytes = Vec::with_capacity(HEADER_LEN + qname_len + 4);
        bytes.extend_from_slice(&id.to_be_bytes());
        bytes.extend_from_slice(&[0x00, 0x00]);
        bytes.extend_from_slice(&1u16.to_be_bytes());
        bytes.extend_from_slice(&[0x00; 6]);
        bytes.extend_from_slice(&qname);
        bytes.extend_from_slice(&query.record_type.to_u16().to_be_bytes());
        bytes.extend_from_slice(&CLASS_IN.to_be_bytes());

        Ok(EncodedQuery {
            id,
            bytes,
            qname_len,
        })
    }

    /// Convenience for the resolver: picks A or AAAA the way every round does.
    pub fn build_for(
        name: &str,
        want_ipv6: bool,
        nameserver_lookup: bool,
    ) -> Result<EncodedQuery, DomainError> {
        let record_type = RecordType::for_query(want_ipv6, nameserver_lookup);
        Self::build_query(&DnsQuery::new(name, record_type))
    }
}

/// Length-prefixed labels with a terminating zero byte. A trailing dot is
/// accepted; the root name encodes as a single zero byte.
fn encode_name(domain: &str) -> Result<Vec<u8>, DomainError> {
    let trimmed = domain.strip_suffix('.').unwrap_or(domain);
    let mut out = Vec::with_capacity(trimmed.len() + 2);

    if !trimmed.is_empty() {
        for label in trimmed.split('.') {
            if label.is_empty() {
                return Err(DomainError::InvalidDomainName(format!(
                    "Empty label in '{}'",
                    domain
                )));
            }
            if label.len() > MAX_LABEL_LEN {
                return Err(DomainError::InvalidDomainName(format!(
                    "Label '{}' longer than {} bytes",
                    label, MAX_LABEL_LEN
                )));
            }
            if !label.is_ascii() {
                return Err(DomainError::InvalidDomainName(format!(
                    "Non-ASCII label '{}'",
                    label
                )));
            }
            out.push(label.len() as u8);
            out.extend_from_slice(label.as_bytes());
        }
    }
    out.push(0);

    if out.len() > MAX_NAME_WIRE_LEN {
        return Err(DomainError::InvalidDomainName(format!(
            "'{}' exceeds {} bytes on the wire",
            domain, MAX_NAME_WIRE_LEN
        )));
    }

    Ok(out)
}
