use super::name::NameReader;
use super::HEADER_LEN;
use dnslookup_domain::{
    DnsMessage, DomainError, MessageHeader, RecordData, RecordType, ResourceRecord,
};
use std::net::{Ipv4Addr, Ipv6Addr};
use tracing::debug;

const RCODE_NAME_ERROR: u8 = 3;
const RCODE_SERVER_FAILURE: u8 = 5;

/// Type, class, TTL and RDLENGTH after each record name.
const RECORD_FIXED_LEN: usize = 10;

/// Decodes responses to queries built by [`QueryEncoder`](super::QueryEncoder).
#[derive(Debug, Clone, Copy)]
pub struct ResponseDecoder {
    max_pointer_hops: usize,
}

impl ResponseDecoder {
    pub fn new(max_pointer_hops: usize) -> Self {
        Self { max_pointer_hops }
    }

    /// Decodes `bytes`, skipping the echoed question by `qname_len`, the wire
    /// length of the name that was sent.
    ///
    /// Name error and server failure codes are returned as errors. Any other
    /// code is left in the header for the caller to judge.
    pub fn decode(&self, bytes: &[u8], qname_len: usize) -> Result<DnsMessage, DomainError> {
        let mut cursor = Cursor::new(bytes);

        let id = cursor.read_u16()?;
        let flags_hi = cursor.read_u8()?;
        let flags_lo = cursor.read_u8()?;
        let question_count = cursor.read_u16()?;
        let answer_count = cursor.read_u16()?;
        let authority_count = cursor.read_u16()?;
        let additional_count = cursor.read_u16()?;

        let header = MessageHeader {
            id,
            authoritative: (flags_hi >> 2) & 0x01 == 1,
            response_code: flags_lo & 0x0F,
            question_count,
            answer_count,
            authority_count,
            additional_count,
        };

        match header.response_code {
            RCODE_NAME_ERROR => return Err(DomainError::NameError),
            RCODE_SERVER_FAILURE => return Err(DomainError::ServerFailure),
            _ => {}
        }

        cursor.seek(HEADER_LEN + qname_len + 4)?;

        let names = NameReader::new(bytes, self.max_pointer_hops);
        let answers = decode_section(&mut cursor, &names, answer_count)?;
        let authorities = decode_section(&mut cursor, &names, authority_count)?;
        let additionals = decode_section(&mut cursor, &names, additional_count)?;

        debug!(
            id,
            authoritative = header.authoritative,
            answers = answers.len(),
            authorities = authorities.len(),
            additionals = additionals.len(),
            "Decoded DNS response"
        );

        Ok(DnsMessage {
            header,
            answers,
            authorities,
            additionals,
        })
    }
}

fn decode_section(
    cursor: &mut Cursor<'_>,
    names: &NameReader<'_>,
    count: u16,
) -> Result<Vec<ResourceRecord>, DomainError> {
    let mut records = Vec::with_capacity(usize::from(count).min(64));
    for _ in 0..count {
        records.push(decode_record(cursor, names)?);
    }
    Ok(records)
}

fn decode_record(
    cursor: &mut Cursor<'_>,
    names: &NameReader<'_>,
) -> Result<ResourceRecord, DomainError> {
    let (name, after_name) = names.read(cursor.pos)?;
    cursor.seek(after_name)?;

    let fixed = cursor.take(RECORD_FIXED_LEN)?;
    let record_type = RecordType::from_u16(u16::from_be_bytes([fixed[0], fixed[1]]));
    let class = u16::from_be_bytes([fixed[2], fixed[3]]);
    let ttl = u32::from_be_bytes([fixed[4], fixed[5], fixed[6], fixed[7]]);
    let rdlength = usize::from(u16::from_be_bytes([fixed[8], fixed[9]]));

    let rdata_at = cursor.pos;
    let rdata = cursor.take(rdlength)?;

    let data = match record_type {
        RecordType::A => {
            let octets: [u8; 4] = rdata
                .try_into()
                .map_err(|_| bad_rdata(record_type, rdlength))?;
            RecordData::Ipv4(Ipv4Addr::from(octets))
        }
        RecordType::AAAA => {
            let octets: [u8; 16] = rdata
                .try_into()
                .map_err(|_| bad_rdata(record_type, rdlength))?;
            RecordData::Ipv6(Ipv6Addr::from(octets))
        }
        RecordType::NS | RecordType::CNAME => {
            let (target, _) = names.read(rdata_at)?;
            RecordData::Name(target)
        }
        RecordType::Other(_) => RecordData::Opaque,
    };

    Ok(ResourceRecord {
        name,
        record_type,
        class,
        ttl,
        data,
    })
}

fn bad_rdata(record_type: RecordType, rdlength: usize) -> DomainError {
    DomainError::InvalidDnsResponse(format!(
        "{} record with {}-byte RDATA",
        record_type, rdlength
    ))
}

/// Bounds-checked read position over the response.
struct Cursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    fn seek(&mut self, pos: usize) -> Result<(), DomainError> {
        if pos > self.buf.len() {
            return Err(DomainError::InvalidDnsResponse(format!(
                "offset {} beyond {}-byte message",
                pos,
                self.buf.len()
            )));
        }
        self.pos = pos;
        Ok(())
    }

    fn take(&mut self, len: usize) -> Result<&'a [u8], DomainError> {
        let end = self.pos + len;
        let slice = self.buf.get(self.pos..end).ok_or_else(|| {
            DomainError::InvalidDnsResponse(format!(
                "need {} bytes at offset {}, message has {}",
                len,
                self.pos,
                self.buf.len()
            ))
        })?;
        self.pos = end;
        Ok(slice)
    }

    fn read_u8(&mut self) -> Result<u8, DomainError> {
        Ok(self.take(1)?[0])
    }

    fn read_u16(&mut self) -> Result<u16, DomainError> {
        let b = self.take(2)?;
        Ok(u16::from_be_bytes([b[0], b[1]]))
    }
}
