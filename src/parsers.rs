use bytes::Bytes;
use tracing::{debug, trace};

use crate::constants::{rcode_name, HEADER_LEN};
use crate::errors::DecodeError;
use crate::protocol::{DnsPacket, DnsPacketHeader, DnsQuestion, DnsResourceRecord};
use crate::reader::PacketReader;
use crate::registry::RDataRegistry;

pub fn parse_dns_packet_header(reader: &mut PacketReader) -> Result<DnsPacketHeader, DecodeError> {
    if reader.remaining() < HEADER_LEN {
        return Err(DecodeError::MalformedHeader {
            len: reader.remaining(),
        });
    }

    let id = reader.read_u16()?;
    // 1 bit qr, 4 bits opcode, 1 bit each for aa, tc, rd and ra,
    // 3 bits z and 4 bits rcode
    let flags = reader.read_u16()?;
    let qdcount = reader.read_u16()?;
    let ancount = reader.read_u16()?;
    let nscount = reader.read_u16()?;
    let arcount = reader.read_u16()?;

    Ok(DnsPacketHeader::from_parts(
        id,
        flags,
        [qdcount, ancount, nscount, arcount],
    ))
}

/// Parse a complete DNS question section entry.
pub fn parse_dns_question(reader: &mut PacketReader) -> Result<DnsQuestion, DecodeError> {
    let name = reader.read_name(true)?;
    let qtype = reader.read_u16()?;
    let qclass = reader.read_u16()?;

    Ok(DnsQuestion {
        name,
        qtype,
        qclass,
    })
}

pub fn parse_resource_record(
    reader: &mut PacketReader,
    registry: &RDataRegistry,
) -> Result<DnsResourceRecord, DecodeError> {
    let name = reader.read_name(true)?;
    let rtype = reader.read_u16()?;
    let rclass = reader.read_u16()?;
    let ttl = reader.read_u32()?;
    let rdlength = reader.read_u16()?;
    trace!(%name, rtype, rdlength, offset = reader.offset(), "decoding rdata");
    let rdata = registry.decode(rtype, reader, rdlength)?;

    Ok(DnsResourceRecord {
        name,
        rtype,
        rclass,
        ttl,
        rdlength,
        rdata,
    })
}

fn parse_section(
    reader: &mut PacketReader,
    registry: &RDataRegistry,
    count: u16,
) -> Result<Vec<DnsResourceRecord>, DecodeError> {
    let mut records = Vec::with_capacity(count as usize);
    for _ in 0..count {
        records.push(parse_resource_record(reader, registry)?);
    }
    Ok(records)
}

/// Decodes one message starting at the reader's cursor, leaving the cursor
/// right after its last record.
pub fn read_dns_packet(
    reader: &mut PacketReader,
    registry: &RDataRegistry,
) -> Result<DnsPacket, DecodeError> {
    let header = parse_dns_packet_header(reader)?;

    debug!(
        target: "dns_decoder::packet_details",
        packet_id = header.id,
        query_response = if header.qr { "Response" } else { "Query" },
        opcode = header.opcode,
        authoritative = header.aa,
        truncated = header.tc,
        recursion_desired = header.rd,
        recursion_available = header.ra,
        response_code = rcode_name(header.rcode).unwrap_or("UNKNOWN"),
        question_count = header.qdcount,
        answer_count = header.ancount,
        authority_count = header.nscount,
        additional_count = header.arcount,
        "DNS packet header parsed successfully"
    );

    let mut questions = Vec::with_capacity(header.qdcount as usize);
    for _ in 0..header.qdcount {
        questions.push(parse_dns_question(reader)?);
    }

    let answers = parse_section(reader, registry, header.ancount)?;
    let authorities = parse_section(reader, registry, header.nscount)?;
    let additionals = parse_section(reader, registry, header.arcount)?;

    Ok(DnsPacket {
        header,
        questions,
        answers,
        authorities,
        additionals,
    })
}

/// Parse a complete DNS message held in `message`.
pub fn parse_dns_packet(
    message: impl Into<Bytes>,
    registry: &RDataRegistry,
) -> Result<DnsPacket, DecodeError> {
    let mut reader = PacketReader::new(message);
    read_dns_packet(&mut reader, registry)
}
