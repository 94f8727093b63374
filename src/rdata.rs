//! Type-specific record data.
//!
//! Each decoder consumes exactly RDLENGTH bytes from the reader. Fixed-size
//! types check the declared length up front, self-describing ones compare the
//! cursor movement against it once they are done.

use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};

use bytes::Bytes;

use crate::constants::{
    DNS_TYPE_A, DNS_TYPE_AAAA, DNS_TYPE_CNAME, DNS_TYPE_MX, DNS_TYPE_NS, DNS_TYPE_PTR,
    DNS_TYPE_SOA, DNS_TYPE_SRV, DNS_TYPE_TXT,
};
use crate::errors::DecodeError;
use crate::reader::PacketReader;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mx {
    pub preference: u16,
    pub exchange: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Soa {
    pub mname: String,
    pub rname: String,
    pub serial: u32,
    pub refresh: u32,
    pub retry: u32,
    pub expire: u32,
    pub minimum: u32,
}

/// Service locator, RFC 2782.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Srv {
    pub priority: u16,
    pub weight: u16,
    pub port: u16,
    pub target: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RData {
    A(Ipv4Addr),
    Aaaa(Ipv6Addr),
    Ns(String),
    Cname(String),
    Ptr(String),
    Mx(Mx),
    Txt(Bytes),
    Soa(Soa),
    Srv(Srv),
    /// Any type without a registered decoder, kept as raw bytes.
    Unknown { rtype: u16, data: Bytes },
}

fn check_length(rtype: u16, rdlength: u16, expected: u16) -> Result<(), DecodeError> {
    if rdlength != expected {
        return Err(DecodeError::MalformedRData {
            rtype,
            reason: format!("expected {} bytes, RDLENGTH is {}", expected, rdlength),
        });
    }
    Ok(())
}

pub(crate) fn check_consumed(
    reader: &PacketReader,
    rtype: u16,
    start: usize,
    rdlength: u16,
) -> Result<(), DecodeError> {
    let consumed = reader.offset() - start;
    if consumed != rdlength as usize {
        return Err(DecodeError::MalformedRData {
            rtype,
            reason: format!("consumed {} bytes, RDLENGTH is {}", consumed, rdlength),
        });
    }
    Ok(())
}

pub fn decode_a(reader: &mut PacketReader, rdlength: u16) -> Result<RData, DecodeError> {
    check_length(DNS_TYPE_A, rdlength, 4)?;
    let octets = reader.read_u32()?;
    Ok(RData::A(Ipv4Addr::from(octets)))
}

pub fn decode_aaaa(reader: &mut PacketReader, rdlength: u16) -> Result<RData, DecodeError> {
    check_length(DNS_TYPE_AAAA, rdlength, 16)?;
    let raw = reader.read_bytes(16)?;
    let mut octets = [0u8; 16];
    octets.copy_from_slice(&raw);
    Ok(RData::Aaaa(Ipv6Addr::from(octets)))
}

fn decode_domain(
    reader: &mut PacketReader,
    rtype: u16,
    rdlength: u16,
) -> Result<String, DecodeError> {
    let start = reader.offset();
    let name = reader.read_name(true)?;
    check_consumed(reader, rtype, start, rdlength)?;
    Ok(name)
}

pub fn decode_ns(reader: &mut PacketReader, rdlength: u16) -> Result<RData, DecodeError> {
    decode_domain(reader, DNS_TYPE_NS, rdlength).map(RData::Ns)
}

pub fn decode_cname(reader: &mut PacketReader, rdlength: u16) -> Result<RData, DecodeError> {
    decode_domain(reader, DNS_TYPE_CNAME, rdlength).map(RData::Cname)
}

pub fn decode_ptr(reader: &mut PacketReader, rdlength: u16) -> Result<RData, DecodeError> {
    decode_domain(reader, DNS_TYPE_PTR, rdlength).map(RData::Ptr)
}

pub fn decode_mx(reader: &mut PacketReader, rdlength: u16) -> Result<RData, DecodeError> {
    let start = reader.offset();
    let preference = reader.read_u16()?;
    let exchange = reader.read_name(true)?;
    check_consumed(reader, DNS_TYPE_MX, start, rdlength)?;

    Ok(RData::Mx(Mx {
        preference,
        exchange,
    }))
}

/// TXT data is kept as one opaque run of RDLENGTH bytes.
pub fn decode_txt(reader: &mut PacketReader, rdlength: u16) -> Result<RData, DecodeError> {
    reader.read_bytes(rdlength as usize).map(RData::Txt)
}

pub fn decode_soa(reader: &mut PacketReader, rdlength: u16) -> Result<RData, DecodeError> {
    let start = reader.offset();
    let soa = Soa {
        mname: reader.read_name(true)?,
        rname: reader.read_name(true)?,
        serial: reader.read_u32()?,
        refresh: reader.read_u32()?,
        retry: reader.read_u32()?,
        expire: reader.read_u32()?,
        minimum: reader.read_u32()?,
    };
    check_consumed(reader, DNS_TYPE_SOA, start, rdlength)?;

    Ok(RData::Soa(soa))
}

pub fn decode_srv(reader: &mut PacketReader, rdlength: u16) -> Result<RData, DecodeError> {
    let start = reader.offset();
    let priority = reader.read_u16()?;
    let weight = reader.read_u16()?;
    let port = reader.read_u16()?;
    // RFC 2782: the target must not be compressed.
    let target = reader.read_name(false)?;
    check_consumed(reader, DNS_TYPE_SRV, start, rdlength)?;

    Ok(RData::Srv(Srv {
        priority,
        weight,
        port,
        target,
    }))
}

pub fn decode_unknown(
    reader: &mut PacketReader,
    rtype: u16,
    rdlength: u16,
) -> Result<RData, DecodeError> {
    let data = reader.read_bytes(rdlength as usize)?;
    Ok(RData::Unknown { rtype, data })
}

impl RData {
    /// Numeric RR type this data belongs to.
    pub fn rtype(&self) -> u16 {
        match self {
            RData::A(_) => DNS_TYPE_A,
            RData::Aaaa(_) => DNS_TYPE_AAAA,
            RData::Ns(_) => DNS_TYPE_NS,
            RData::Cname(_) => DNS_TYPE_CNAME,
            RData::Ptr(_) => DNS_TYPE_PTR,
            RData::Mx(_) => DNS_TYPE_MX,
            RData::Txt(_) => DNS_TYPE_TXT,
            RData::Soa(_) => DNS_TYPE_SOA,
            RData::Srv(_) => DNS_TYPE_SRV,
            RData::Unknown { rtype, .. } => *rtype,
        }
    }
}

impl fmt::Display for RData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RData::A(addr) => write!(f, "{}", addr),
            RData::Aaaa(addr) => {
                // Full eight groups, no zero compression.
                for (i, group) in addr.segments().iter().enumerate() {
                    if i > 0 {
                        f.write_str(":")?;
                    }
                    write!(f, "{:04x}", group)?;
                }
                Ok(())
            }
            RData::Ns(name) | RData::Cname(name) | RData::Ptr(name) => f.write_str(name),
            RData::Mx(mx) => write!(f, "{} {}", mx.preference, mx.exchange),
            RData::Txt(text) => {
                for &byte in text.iter() {
                    if (0x20..0x7f).contains(&byte) {
                        write!(f, "{}", byte as char)?;
                    } else {
                        write!(f, "\\{:03}", byte)?;
                    }
                }
                Ok(())
            }
            RData::Soa(soa) => write!(
                f,
                "{} {} {} {} {} {} {}",
                soa.mname, soa.rname, soa.serial, soa.refresh, soa.retry, soa.expire, soa.minimum
            ),
            RData::Srv(srv) => write!(
                f,
                "{} {} {} {}",
                srv.priority, srv.weight, srv.port, srv.target
            ),
            RData::Unknown { data, .. } => {
                write!(f, "unknown rdata({}) hex: [", data.len())?;
                for (i, byte) in data.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{:#04x}", byte)?;
                }
                f.write_str("]")
            }
        }
    }
}
