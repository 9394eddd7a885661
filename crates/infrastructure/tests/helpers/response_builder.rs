#![allow(dead_code)]
use std::net::{Ipv4Addr, Ipv6Addr};

/// Plain length-prefixed labels, no compression.
pub fn encode_name(name: &str) -> Vec<u8> {
    let mut out = Vec::new();
    for label in name.trim_end_matches('.').split('.').filter(|l| !l.is_empty()) {
        out.push(label.len() as u8);
        out.extend_from_slice(label.as_bytes());
    }
    out.push(0);
    out
}

/// Assembles synthetic responses. The question section is echoed from the
/// query it answers, so record names may point at offset 12.
#[derive(Debug, Clone, Default)]
pub struct ResponseBuilder {
    id: Option<u16>,
    authoritative: bool,
    rcode: u8,
    answers: Vec<Vec<u8>>,
    authorities: Vec<Vec<u8>>,
    additionals: Vec<Vec<u8>>,
}

impl ResponseBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Authoritative response with the given answers added by the caller.
    pub fn authoritative() -> Self {
        Self {
            authoritative: true,
            ..Self::default()
        }
    }

    /// Referral listing `(ns name, glue)` pairs; `None` glue leaves the
    /// nameserver without an additional record.
    pub fn referral(zone: &str, nameservers: &[(&str, Option<&str>)]) -> Self {
        let mut builder = Self::new();
        for (ns, _) in nameservers {
            builder = builder.authority_ns(zone, ns);
        }
        for (ns, glue) in nameservers {
            if let Some(glue) = glue {
                builder = builder.additional_a(ns, glue);
            }
        }
        builder
    }

    pub fn with_id(mut self, id: u16) -> Self {
        self.id = Some(id);
        self
    }

    pub fn rcode(mut self, rcode: u8) -> Self {
        self.rcode = rcode;
        self
    }

    pub fn answer_a(mut self, name: &str, ttl: u32, addr: &str) -> Self {
        let ip: Ipv4Addr = addr.parse().unwrap();
        self.answers.push(record(&encode_name(name), 1, ttl, &ip.octets()));
        self
    }

    /// A record whose owner is a pointer to the echoed question name.
    pub fn answer_a_compressed(mut self, ttl: u32, addr: &str) -> Self {
        let ip: Ipv4Addr = addr.parse().unwrap();
        self.answers.push(record(&[0xC0, 0x0C], 1, ttl, &ip.octets()));
        self
    }

    pub fn answer_aaaa(mut self, name: &str, ttl: u32, addr: &str) -> Self {
        let ip: Ipv6Addr = addr.parse().unwrap();
        self.answers.push(record(&encode_name(name), 28, ttl, &ip.octets()));
        self
    }

    pub fn answer_cname(mut self, name: &str, ttl: u32, target: &str) -> Self {
        self.answers
            .push(record(&encode_name(name), 5, ttl, &encode_name(target)));
        self
    }

    pub fn answer_raw(mut self, name: &str, rtype: u16, ttl: u32, rdata: &[u8]) -> Self {
        self.answers.push(record(&encode_name(name), rtype, ttl, rdata));
        self
    }

    pub fn authority_ns(mut self, zone: &str, ns: &str) -> Self {
        self.authorities
            .push(record(&encode_name(zone), 2, 172_800, &encode_name(ns)));
        self
    }

    pub fn additional_a(mut self, name: &str, addr: &str) -> Self {
        let ip: Ipv4Addr = addr.parse().unwrap();
        self.additionals
            .push(record(&encode_name(name), 1, 172_800, &ip.octets()));
        self
    }

    pub fn additional_aaaa(mut self, name: &str, addr: &str) -> Self {
        let ip: Ipv6Addr = addr.parse().unwrap();
        self.additionals
            .push(record(&encode_name(name), 28, 172_800, &ip.octets()));
        self
    }

    /// Response to `query`: its id (unless overridden) and its question.
    pub fn build_for(&self, query: &[u8]) -> Vec<u8> {
        let id = self
            .id
            .unwrap_or_else(|| u16::from_be_bytes([query[0], query[1]]));
        self.assemble(id, &query[12..])
    }

    /// Response with a question for `qname`, type A, class IN.
    pub fn build(&self, id: u16, qname: &str) -> Vec<u8> {
        let mut question = encode_name(qname);
        question.extend_from_slice(&[0, 1, 0, 1]);
        self.assemble(self.id.unwrap_or(id), &question)
    }

    fn assemble(&self, id: u16, question: &[u8]) -> Vec<u8> {
        let mut out = id.to_be_bytes().to_vec();
        out.push(0x80 | if self.authoritative { 0x04 } else { 0x00 });
        out.push(self.rcode & 0x0F);
        out.extend_from_slice(&1u16.to_be_bytes());
        out.extend_from_slice(&(self.answers.len() as u16).to_be_bytes());
        out.extend_from_slice(&(self.authorities.len() as u16).to_be_bytes());
        out.extend_from_slice(&(self.additionals.len() as u16).to_be_bytes());
        out.extend_from_slice(question);
        for rr in self
            .answers
            .iter()
            .chain(&self.authorities)
            .chain(&self.additionals)
        {
            out.extend_from_slice(rr);
        }
        out
    }
}

fn record(owner: &[u8], rtype: u16, ttl: u32, rdata: &[u8]) -> Vec<u8> {
    let mut out = owner.to_vec();
    out.extend_from_slice(&rtype.to_be_bytes());
    out.extend_from_slice(&1u16.to_be_bytes());
    out.extend_from_slice(&ttl.to_be_bytes());
    out.extend_from_slice(&(rdata.len() as u16).to_be_bytes());
    out.extend_from_slice(rdata);
    out
}
