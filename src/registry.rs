use std::collections::HashMap;

use tracing::trace;

use crate::constants::{
    DNS_TYPE_A, DNS_TYPE_AAAA, DNS_TYPE_CNAME, DNS_TYPE_MX, DNS_TYPE_NS, DNS_TYPE_PTR,
    DNS_TYPE_SOA, DNS_TYPE_SRV, DNS_TYPE_TXT,
};
use crate::errors::DecodeError;
use crate::rdata::{self, check_consumed, RData};
use crate::reader::PacketReader;

/// Decodes the RDATA of one record. Must consume exactly `rdlength` bytes.
pub type RDataDecoder = fn(&mut PacketReader, u16) -> Result<RData, DecodeError>;

/// Maps RR types to their RDATA decoders.
///
/// Built once before decoding starts and only read afterwards, so a single
/// instance can be shared between threads. Types without an entry fall back
/// to [`rdata::decode_unknown`].
#[derive(Debug, Clone)]
pub struct RDataRegistry {
    decoders: HashMap<u16, RDataDecoder>,
}

impl RDataRegistry {
    /// An empty registry: every type decodes through the generic fallback.
    pub fn new() -> Self {
        Self {
            decoders: HashMap::new(),
        }
    }

    /// A registry with decoders for A, NS, CNAME, SOA, PTR, MX, TXT, AAAA and SRV.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register(DNS_TYPE_A, rdata::decode_a);
        registry.register(DNS_TYPE_NS, rdata::decode_ns);
        registry.register(DNS_TYPE_CNAME, rdata::decode_cname);
        registry.register(DNS_TYPE_SOA, rdata::decode_soa);
        registry.register(DNS_TYPE_PTR, rdata::decode_ptr);
        registry.register(DNS_TYPE_MX, rdata::decode_mx);
        registry.register(DNS_TYPE_TXT, rdata::decode_txt);
        registry.register(DNS_TYPE_AAAA, rdata::decode_aaaa);
        registry.register(DNS_TYPE_SRV, rdata::decode_srv);
        registry
    }

    /// Associates `rtype` with `decoder`. The last registration wins; the
    /// replaced decoder, if any, is returned.
    pub fn register(&mut self, rtype: u16, decoder: RDataDecoder) -> Option<RDataDecoder> {
        self.decoders.insert(rtype, decoder)
    }

    pub fn is_registered(&self, rtype: u16) -> bool {
        self.decoders.contains_key(&rtype)
    }

    pub fn len(&self) -> usize {
        self.decoders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decoders.is_empty()
    }

    /// Decodes `rdlength` bytes of RDATA for `rtype` at the reader's cursor.
    pub fn decode(
        &self,
        rtype: u16,
        reader: &mut PacketReader,
        rdlength: u16,
    ) -> Result<RData, DecodeError> {
        let start = reader.offset();
        let rdata = match self.decoders.get(&rtype) {
            Some(decoder) => decoder(reader, rdlength)?,
            None => {
                trace!(rtype, rdlength, "no decoder registered, using generic rdata");
                rdata::decode_unknown(reader, rtype, rdlength)?
            }
        };
        check_consumed(reader, rtype, start, rdlength)?;
        Ok(rdata)
    }
}

impl Default for RDataRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
