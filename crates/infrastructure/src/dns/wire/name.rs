use dnslookup_domain::DomainError;

const POINTER_MASK: u8 = 0xC0;

/// Reads possibly compressed domain names out of a whole response buffer.
///
/// Pointer chains are followed iteratively and capped at `max_hops`, so a
/// response that points back into itself is rejected instead of looping.
#[derive(Debug, Clone, Copy)]
pub struct NameReader<'a> {
    message: &'a [u8],
    max_hops: usize,
}

impl<'a> NameReader<'a> {
    pub fn new(message: &'a [u8], max_hops: usize) -> Self {
        Self { message, max_hops }
    }

    /// Decodes the name starting at `offset`.
    ///
    /// Returns the dotted name (root is the empty string) and the offset just
    /// past the name in the original byte stream, which for a compressed name
    /// is the byte after the first pointer.
    pub fn read(&self, offset: usize) -> Result<(String, usize), DomainError> {
        let mut name = String::new();
        let mut pos = offset;
        let mut resume_at = None;
        let mut hops = 0usize;

        loop {
            let len = *self
                .message
                .get(pos)
                .ok_or_else(|| truncated("name label", pos))?;

            if len & POINTER_MASK == POINTER_MASK {
                let low = *self
                    .message
                    .get(pos + 1)
                    .ok_or_else(|| truncated("compression pointer", pos))?;

                hops += 1;
                if hops > self.max_hops {
                    return Err(DomainError::InvalidDnsResponse(format!(
                        "compression pointer chain exceeds {} hops",
                        self.max_hops
                    )));
                }

                let target = (usize::from(len & !POINTER_MASK) << 8) | usize::from(low);
                if target >= self.message.len() {
                    return Err(DomainError::InvalidDnsResponse(format!(
                        "compression pointer to offset {} outside {}-byte message",
                        target,
                        self.message.len()
                    )));
                }

                resume_at.get_or_insert(pos + 2);
                pos = target;
                continue;
            }

            if len & POINTER_MASK != 0 {
                return Err(DomainError::InvalidDnsResponse(format!(
                    "unsupported label type 0x{:02x} at offset {}",
                    len, pos
                )));
            }

            if len == 0 {
                pos += 1;
                break;
            }

            let start = pos + 1;
            let end = start + usize::from(len);
            let label = self
                .message
                .get(start..end)
                .ok_or_else(|| truncated("label", start))?;

            if !name.is_empty() {
                name.push('.');
            }
            // One character per byte, no charset decoding.
            name.extend(label.iter().map(|&b| char::from(b)));
            pos = end;
        }

        Ok((name, resume_at.unwrap_or(pos)))
    }
}

fn truncated(what: &str, offset: usize) -> DomainError {
    DomainError::InvalidDnsResponse(format!("{} truncated at offset {}", what, offset))
}
