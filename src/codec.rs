//! DNS message codec for tokio_util
//!
//! This module provides a Decoder implementation that turns buffered wire
//! bytes into decoded DNS messages, either one message per buffer (UDP
//! payloads) or length-prefixed messages back to back (TCP, RFC 1035 4.2.2).

use bytes::{Buf, BytesMut};
use tokio_util::codec::Decoder;
use tracing::{debug, error, warn};

use crate::errors::DnsCodecError;
use crate::parsers::read_dns_packet;
use crate::protocol::DnsPacket;
use crate::reader::PacketReader;
use crate::registry::RDataRegistry;

/// How messages are delimited inside the input buffer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Framing {
    /// The whole buffer is a single message.
    #[default]
    Datagram,
    /// Each message is preceded by its length as a 16-bit big-endian integer.
    Stream,
}

/// DNS message codec for use with tokio_util framed readers
#[derive(Debug, Clone, Default)]
pub struct DnsCodec {
    framing: Framing,
    registry: RDataRegistry,
}

impl DnsCodec {
    /// Create a codec using the standard RDATA decoders
    pub fn new(framing: Framing) -> Self {
        Self::with_registry(framing, RDataRegistry::standard())
    }

    pub fn with_registry(framing: Framing, registry: RDataRegistry) -> Self {
        Self { framing, registry }
    }

    pub fn framing(&self) -> Framing {
        self.framing
    }

    /// Decodes every message in `src`. A partial trailing frame is an error.
    pub fn decode_all(&mut self, mut src: BytesMut) -> Result<Vec<DnsPacket>, DnsCodecError> {
        let mut packets = Vec::new();
        while let Some(packet) = self.decode_eof(&mut src)? {
            packets.push(packet);
        }
        Ok(packets)
    }

    fn decode_message(&self, message: BytesMut) -> Result<DnsPacket, DnsCodecError> {
        let mut reader = PacketReader::new(message.freeze());
        let packet = read_dns_packet(&mut reader, &self.registry).map_err(|e| {
            error!("DNS parsing error: {}", e);
            e
        })?;

        if reader.remaining() > 0 {
            warn!(
                packet_id = packet.header.id,
                "ignoring {} bytes after the last record",
                reader.remaining()
            );
        }
        Ok(packet)
    }
}

impl Decoder for DnsCodec {
    type Item = DnsPacket;
    type Error = DnsCodecError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        match self.framing {
            Framing::Datagram => {
                if src.is_empty() {
                    return Ok(None);
                }
                debug!("Decoding {} byte datagram", src.len());
                let message = src.split();
                self.decode_message(message).map(Some)
            }
            Framing::Stream => {
                if src.len() < 2 {
                    return Ok(None);
                }
                let length = u16::from_be_bytes([src[0], src[1]]) as usize;
                if src.len() < 2 + length {
                    debug!(
                        "Incomplete DNS message, need {} bytes, have {}",
                        2 + length,
                        src.len()
                    );
                    src.reserve(2 + length - src.len());
                    return Ok(None);
                }
                src.advance(2);
                let message = src.split_to(length);
                self.decode_message(message).map(Some)
            }
        }
    }
}
