use crate::dns_record::{RecordType, ResourceRecord};
use crate::errors::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MessageHeader {
    pub id: u16,
    pub authoritative: bool,
    pub response_code: u8,
    pub question_count: u16,
    pub answer_count: u16,
    pub authority_count: u16,
    pub additional_count: u16,
}

/// A decoded response. Sections keep wire order and are read-only once built.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DnsMessage {
    pub header: MessageHeader,
    pub answers: Vec<ResourceRecord>,
    pub authorities: Vec<ResourceRecord>,
    pub additionals: Vec<ResourceRecord>,
}

impl DnsMessage {
    pub fn is_authoritative(&self) -> bool {
        self.header.authoritative
    }

    /// True when an authoritative answer starts with a CNAME record.
    pub fn has_cname_answer(&self) -> bool {
        self.is_authoritative()
            && self
                .answers
                .first()
                .is_some_and(|record| record.record_type == RecordType::CNAME)
    }

    pub fn first_answer(&self) -> Result<&ResourceRecord, DomainError> {
        self.answers.first().ok_or(DomainError::MissingData("answer"))
    }

    pub fn first_answer_ttl(&self) -> Result<u32, DomainError> {
        Ok(self.first_answer()?.ttl)
    }

    pub fn first_answer_type(&self) -> Result<RecordType, DomainError> {
        Ok(self.first_answer()?.record_type)
    }

    pub fn first_answer_data(&self) -> Result<String, DomainError> {
        Ok(self.first_answer()?.data_string())
    }

    pub fn all_answer_addresses(&self) -> Result<Vec<String>, DomainError> {
        if self.answers.is_empty() {
            return Err(DomainError::MissingData("answer"));
        }
        Ok(self.answers.iter().map(ResourceRecord::data_string).collect())
    }

    /// Data of the first authority record: the nameserver to chase next.
    pub fn first_authority_data(&self) -> Result<String, DomainError> {
        self.authorities
            .first()
            .map(ResourceRecord::data_string)
            .ok_or(DomainError::MissingData("authority"))
    }

    /// First IPv4 glue address for any authority record, in section order.
    ///
    /// Every authority record is checked against every additional record;
    /// only A records match, even when the resolution wants IPv6.
    pub fn find_glue_address(&self) -> Option<String> {
        self.authorities.iter().find_map(|authority| {
            let ns_name = authority.data_string();
            self.additionals
                .iter()
                .find(|additional| {
                    additional.record_type == RecordType::A && additional.name == ns_name
                })
                .map(ResourceRecord::data_string)
        })
    }

    /// Human-readable dump of the header flag and all three sections.
    pub fn dump(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(
            4 + self.answers.len() + self.authorities.len() + self.additionals.len(),
        );
        lines.push(format!(
            "Response ID: {} Authoritative = {}",
            self.header.id, self.header.authoritative
        ));
        lines.push(format!("  Answers ({})", self.header.answer_count));
        lines.extend(self.answers.iter().map(ToString::to_string));
        lines.push(format!("  Nameservers ({})", self.header.authority_count));
        lines.extend(self.authorities.iter().map(ToString::to_string));
        lines.push(format!(
            "  Additional Information ({})",
            self.header.additional_count
        ));
        lines.extend(self.additionals.iter().map(ToString::to_string));
        lines
    }
}
