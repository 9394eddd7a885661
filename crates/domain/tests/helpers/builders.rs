#![allow(dead_code)]
use dnslookup_domain::{DnsMessage, MessageHeader, RecordData, RecordType, ResourceRecord};

pub struct MessageBuilder {
    header: MessageHeader,
    answers: Vec<ResourceRecord>,
    authorities: Vec<ResourceRecord>,
    additionals: Vec<ResourceRecord>,
}

impl MessageBuilder {
    pub fn new() -> Self {
        Self {
            header: MessageHeader {
                id: 1,
                question_count: 1,
                ..Default::default()
            },
            answers: Vec::new(),
            authorities: Vec::new(),
            additionals: Vec::new(),
        }
    }

    pub fn id(mut self, id: u16) -> Self {
        self.header.id = id;
        self
    }

    pub fn authoritative(mut self, authoritative: bool) -> Self {
        self.header.authoritative = authoritative;
        self
    }

    pub fn answer_a(mut self, name: &str, ttl: u32, addr: &str) -> Self {
        self.answers.push(ResourceRecord::new(
            name.to_string(),
            RecordType::A,
            ttl,
            RecordData::Ipv4(addr.parse().unwrap()),
        ));
        self
    }

    pub fn answer_cname(mut self, name: &str, ttl: u32, target: &str) -> Self {
        self.answers.push(ResourceRecord::new(
            name.to_string(),
            RecordType::CNAME,
            ttl,
            RecordData::Name(target.to_string()),
        ));
        self
    }

    pub fn authority_ns(mut self, zone: &str, ns_name: &str) -> Self {
        self.authorities.push(ResourceRecord::new(
            zone.to_string(),
            RecordType::NS,
            172_800,
            RecordData::Name(ns_name.to_string()),
        ));
        self
    }

    pub fn additional_a(mut self, name: &str, addr: &str) -> Self {
        self.additionals.push(ResourceRecord::new(
            name.to_string(),
            RecordType::A,
            172_800,
            RecordData::Ipv4(addr.parse().unwrap()),
        ));
        self
    }

    pub fn additional_aaaa(mut self, name: &str, addr: &str) -> Self {
        self.additionals.push(ResourceRecord::new(
            name.to_string(),
            RecordType::AAAA,
            172_800,
            RecordData::Ipv6(addr.parse().unwrap()),
        ));
        self
    }

    pub fn build(mut self) -> DnsMessage {
        self.header.answer_count = self.answers.len() as u16;
        self.header.authority_count = self.authorities.len() as u16;
        self.header.additional_count = self.additionals.len() as u16;
        DnsMessage {
            header: self.header,
            answers: self.answers,
            authorities: self.authorities,
            additionals: self.additionals,
        }
    }
}
