//! Decoder for DNS messages in RFC 1035 wire format.
//!
//! A message is read front to back in a single pass: the 12 byte header,
//! the questions, then the answer, authority and additional records. Record
//! data is decoded through an [`RDataRegistry`]; types it does not know are
//! kept as raw bytes.
//!
//! ```
//! use dns_wire_decoder::{parse_dns_packet, RDataRegistry};
//!
//! let query: &[u8] = &[
//!     0x00, 0x2a, 0x01, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
//!     0x03, b'c', b'o', b'm', 0x00, 0x00, 0x02, 0x00, 0x01,
//! ];
//! let packet = parse_dns_packet(query.to_vec(), &RDataRegistry::standard()).unwrap();
//! assert_eq!(packet.questions[0].name, "com.");
//! ```

use std::sync::OnceLock;

pub mod cli;
pub mod codec;
pub mod constants;
pub mod errors;
pub mod formatter;
pub mod input;
pub mod parsers;
pub mod protocol;
pub mod rdata;
pub mod reader;
pub mod registry;

#[cfg(test)]
pub(crate) mod fixtures;

pub use codec::{DnsCodec, Framing};
pub use errors::{DecodeError, DnsCodecError, InputError};
pub use parsers::{parse_dns_packet, read_dns_packet};
pub use protocol::{DnsPacket, DnsPacketHeader, DnsQuestion, DnsResourceRecord};
pub use rdata::RData;
pub use reader::PacketReader;
pub use registry::{RDataDecoder, RDataRegistry};

/// Process-wide registry with the standard decoders, built on first use.
pub fn standard_registry() -> &'static RDataRegistry {
    static REGISTRY: OnceLock<RDataRegistry> = OnceLock::new();
    REGISTRY.get_or_init(RDataRegistry::standard)
}

/// Decodes one complete message with the standard decoders.
pub fn decode_message(message: &[u8]) -> Result<DnsPacket, DecodeError> {
    parse_dns_packet(bytes::Bytes::copy_from_slice(message), standard_registry())
}
