// DNS message structures produced by the decoder

use crate::rdata::RData;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DnsPacketHeader {
    pub id: u16,      // Identifier, 16 bits
    pub qr: bool,     // Query or Response, 1 bit
    pub opcode: u8,   // Operation code, 4 bits
    pub aa: bool,     // Authoritative answer, 1 bit
    pub tc: bool,     // Truncated, 1 bit
    pub rd: bool,     // Recursion desired, 1 bit
    pub ra: bool,     // Recursion available, 1 bit
    pub z: u8,        // Reserved for future use, 3 bits
    pub rcode: u8,    // Response code, 4 bits
    pub qdcount: u16, // Number of questions, 16 bits
    pub ancount: u16, // Number of answers, 16 bits
    pub nscount: u16, // Number of authority records, 16 bits
    pub arcount: u16, // Number of additional records, 16 bits
}

impl DnsPacketHeader {
    /// Splits the 16-bit flags word into its fields.
    pub fn from_parts(id: u16, flags: u16, counts: [u16; 4]) -> Self {
        let [qdcount, ancount, nscount, arcount] = counts;
        DnsPacketHeader {
            id,
            // qr (Query/Response): bit 15
            qr: (flags & 0x8000) != 0,
            // opcode: bits 11-14
            opcode: ((flags & 0x7800) >> 11) as u8,
            // aa (Authoritative Answer): bit 10
            aa: (flags & 0x0400) != 0,
            // tc (Truncated): bit 9
            tc: (flags & 0x0200) != 0,
            // rd (Recursion Desired): bit 8
            rd: (flags & 0x0100) != 0,
            // ra (Recursion Available): bit 7
            ra: (flags & 0x0080) != 0,
            // z (Reserved for future use): bits 4-6
            z: ((flags & 0x0070) >> 4) as u8,
            // rcode (Response Code): bits 0-3
            rcode: (flags & 0x000F) as u8,
            qdcount,
            ancount,
            nscount,
            arcount,
        }
    }
}

// Define the DNS question section structure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsQuestion {
    pub name: String, // Fully qualified, always ends with '.'
    pub qtype: u16, // Query type (e.g., A, AAAA, CNAME) https://www.rfc-editor.org/rfc/rfc1035#section-3.2.2
    pub qclass: u16, // Query class (e.g., IN for Internet) https://www.rfc-editor.org/rfc/rfc1035#section-3.2.4
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsResourceRecord {
    pub name: String,  // Fully qualified owner name
    pub rtype: u16,    // Resource type https://www.rfc-editor.org/rfc/rfc1035#section-3.2.2
    pub rclass: u16,   // Resource class (e.g., IN for Internet)
    pub ttl: u32,      // Time to live in seconds
    pub rdlength: u16, // Length of the resource data in bytes
    pub rdata: RData,  // Decoded resource data
}

/// A fully decoded message. Section lengths always equal the header counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsPacket {
    pub header: DnsPacketHeader,
    pub questions: Vec<DnsQuestion>,
    pub answers: Vec<DnsResourceRecord>,
    pub authorities: Vec<DnsResourceRecord>,
    pub additionals: Vec<DnsResourceRecord>,
}
