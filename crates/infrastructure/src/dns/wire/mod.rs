//! DNS wire format for the iterative lookup.
//!
//! Queries carry a single IN question with all header flags clear. Responses
//! are decoded into [`DnsMessage`](dnslookup_domain::DnsMessage) with the
//! echoed question skipped by its known wire length.

pub mod decoder;
pub mod encoder;
pub mod name;

pub use decoder::ResponseDecoder;
pub use encoder::{EncodedQuery, QueryEncoder};
pub use name::NameReader;

pub(crate) const HEADER_LEN: usize = 12;
pub(crate) const CLASS_IN: u16 = 1;
