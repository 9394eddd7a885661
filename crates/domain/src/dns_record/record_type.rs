use std::fmt;

/// Record types the resolver understands. Anything else is carried as
/// `Other` with its raw numeric code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    A,
    NS,
    CNAME,
    AAAA,
    Other(u16),
}

impl RecordType {
    pub fn to_u16(&self) -> u16 {
        match self {
            RecordType::A => 1,
            RecordType::NS => 2,
            RecordType::CNAME => 5,
            RecordType::AAAA => 28,
            RecordType::Other(code) => *code,
        }
    }

    pub fn from_u16(value: u16) -> Self {
        match value {
            1 => RecordType::A,
            2 => RecordType::NS,
            5 => RecordType::CNAME,
            28 => RecordType::AAAA,
            other => RecordType::Other(other),
        }
    }

    /// Short tag used in trace dumps: `CN` for CNAME, the number for
    /// unsupported types.
    pub fn trace_tag(&self) -> String {
        match self {
            RecordType::CNAME => "CN".to_string(),
            RecordType::Other(code) => code.to_string(),
            known => known.to_string(),
        }
    }

    /// Query type for one round: AAAA only when the resolution wants IPv6 and
    /// the query is not resolving a nameserver's own address.
    pub fn for_query(want_ipv6: bool, nameserver_lookup: bool) -> Self {
        if want_ipv6 && !nameserver_lookup {
            RecordType::AAAA
        } else {
            RecordType::A
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordType::A => write!(f, "A"),
            RecordType::NS => write!(f, "NS"),
            RecordType::CNAME => write!(f, "CNAME"),
            RecordType::AAAA => write!(f, "AAAA"),
            RecordType::Other(code) => write!(f, "TYPE{}", code),
        }
    }
}
