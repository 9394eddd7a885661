use super::RecordType;
use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};

/// Type-specific payload of a decoded record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordData {
    Ipv4(Ipv4Addr),
    Ipv6(Ipv6Addr),
    /// Target of an NS or CNAME record.
    Name(String),
    Opaque,
}

impl fmt::Display for RecordData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordData::Ipv4(addr) => write!(f, "{}", addr),
            // Eight lower-hex groups, no zero compression.
            RecordData::Ipv6(addr) => {
                let groups: Vec<String> = addr
                    .segments()
                    .iter()
                    .map(|segment| format!("{:x}", segment))
                    .collect();
                write!(f, "{}", groups.join(":"))
            }
            RecordData::Name(name) => write!(f, "{}", name),
            RecordData::Opaque => write!(f, "----"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    pub name: String,

    pub record_type: RecordType,

    /// Decoded but never interpreted.
    pub class: u16,

    pub ttl: u32,

    pub data: RecordData,
}

impl ResourceRecord {
    pub fn new(name: String, record_type: RecordType, ttl: u32, data: RecordData) -> Self {
        Self {
            name,
            record_type,
            class: 1,
            ttl,
            data,
        }
    }

    pub fn data_string(&self) -> String {
        self.data.to_string()
    }
}

impl fmt::Display for ResourceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "       {:<30} {:<10}    {:<4} {}",
            self.name,
            self.ttl,
            self.record_type.trace_tag(),
            self.data
        )
    }
}
