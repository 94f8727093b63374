//! Wire-format messages shared by the unit tests.

use crate::constants::{
    DNS_CLASS_IN, DNS_TYPE_A, DNS_TYPE_AAAA, DNS_TYPE_CNAME, DNS_TYPE_MX, DNS_TYPE_NS,
    DNS_TYPE_PTR, DNS_TYPE_SOA, DNS_TYPE_SRV, DNS_TYPE_TXT,
};

/// Captured `dig example.com A` exchange: one question, one answer whose
/// owner name is a pointer back to the question.
pub const QUERY_ANSWER: [u8; 45] = [
    0x6d, 0x7c, 0x81, 0x80, 0x00, 0x01, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, // header
    0x07, 0x65, 0x78, 0x61, 0x6d, 0x70, 0x6c, 0x65, 0x03, 0x63, 0x6f, 0x6d, 0x00, // example.com.
    0x00, 0x01, 0x00, 0x01, // A IN
    0xc0, 0x0c, // pointer to offset 12
    0x00, 0x01, 0x00, 0x01, // A IN
    0x00, 0x01, 0x2a, 0x67, // TTL 76391
    0x00, 0x04, 0x5d, 0xb8, 0xd8, 0x22, // 93.184.216.34
];

/// Offset of the question name in every message built by [`WireBuilder`].
pub const QNAME_OFFSET: usize = 12;

/// Appends wire-format fields to a buffer, for composing test messages.
#[derive(Debug, Default)]
pub struct WireBuilder {
    buf: Vec<u8>,
}

impl WireBuilder {
    pub fn header(id: u16, flags: u16, counts: [u16; 4]) -> Self {
        let mut builder = Self::default();
        builder.u16(id).u16(flags);
        for count in counts {
            builder.u16(count);
        }
        builder
    }

    pub fn offset(&self) -> usize {
        self.buf.len()
    }

    pub fn u8(&mut self, value: u8) -> &mut Self {
        self.buf.push(value);
        self
    }

    pub fn u16(&mut self, value: u16) -> &mut Self {
        self.buf.extend_from_slice(&value.to_be_bytes());
        self
    }

    pub fn u32(&mut self, value: u32) -> &mut Self {
        self.buf.extend_from_slice(&value.to_be_bytes());
        self
    }

    pub fn bytes(&mut self, value: &[u8]) -> &mut Self {
        self.buf.extend_from_slice(value);
        self
    }

    fn labels(&mut self, dotted: &str) -> &mut Self {
        for label in dotted.split('.').filter(|l| !l.is_empty()) {
            self.u8(label.len() as u8).bytes(label.as_bytes());
        }
        self
    }

    /// Uncompressed name, terminated by the root label.
    pub fn name(&mut self, dotted: &str) -> &mut Self {
        self.labels(dotted).u8(0)
    }

    /// `prefix` labels followed by a pointer to `target`.
    pub fn compressed(&mut self, prefix: &str, target: usize) -> &mut Self {
        self.labels(prefix).u16(0xC000 | target as u16)
    }

    pub fn question(&mut self, name: &str, qtype: u16, qclass: u16) -> &mut Self {
        self.name(name).u16(qtype).u16(qclass)
    }

    /// Writes TYPE, CLASS, TTL and a length-prefixed RDATA produced by `rdata`.
    pub fn record_body(
        &mut self,
        rtype: u16,
        ttl: u32,
        rdata: impl FnOnce(&mut Self),
    ) -> &mut Self {
        self.u16(rtype).u16(DNS_CLASS_IN).u32(ttl);
        let length_at = self.offset();
        self.u16(0);
        rdata(self);
        let rdlength = (self.offset() - length_at - 2) as u16;
        self.buf[length_at..length_at + 2].copy_from_slice(&rdlength.to_be_bytes());
        self
    }

    pub fn build(&self) -> Vec<u8> {
        self.buf.clone()
    }
}

/// A response exercising every supported RDATA type plus an unknown one.
///
/// Question: example.com. ANY IN. Answers: MX, TXT, SOA, CNAME. Authority:
/// two NS. Additional: SRV, AAAA, PTR and type 99.
pub fn full_response() -> Vec<u8> {
    let q = QNAME_OFFSET;
    let mut b = WireBuilder::header(0xbeef, 0x8580, [1, 4, 2, 4]);
    b.question("example.com", 255, DNS_CLASS_IN);

    b.compressed("", q).record_body(DNS_TYPE_MX, 3600, |b| {
        b.u16(10).compressed("mail", q);
    });
    b.compressed("", q).record_body(DNS_TYPE_TXT, 300, |b| {
        b.bytes(b"v=spf1 -all");
    });
    b.compressed("", q).record_body(DNS_TYPE_SOA, 86400, |b| {
        b.compressed("ns1", q).compressed("hostmaster", q);
        for value in [2024010101, 7200, 3600, 1209600, 300] {
            b.u32(value);
        }
    });
    b.compressed("www", q).record_body(DNS_TYPE_CNAME, 60, |b| {
        b.compressed("", q);
    });

    b.compressed("", q).record_body(DNS_TYPE_NS, 172800, |b| {
        b.compressed("ns1", q);
    });
    b.compressed("", q).record_body(DNS_TYPE_NS, 172800, |b| {
        b.compressed("ns2", q);
    });

    b.compressed("_sip._tcp", q).record_body(DNS_TYPE_SRV, 600, |b| {
        b.u16(10).u16(60).u16(5060).name("sip.example.com");
    });
    b.compressed("ns1", q).record_body(DNS_TYPE_AAAA, 600, |b| {
        b.bytes(&[0x20, 0x01, 0x0d, 0xb8, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x53]);
    });
    b.name("34.216.184.93.in-addr.arpa")
        .record_body(DNS_TYPE_PTR, 600, |b| {
            b.compressed("", q);
        });
    b.compressed("", q).record_body(99, 60, |b| {
        b.bytes(&[0x01, 0x02, 0x03]);
    });

    b.build()
}

/// A single-answer response whose answer RDATA is produced by `rdata`.
pub fn single_answer(rtype: u16, rdata: impl FnOnce(&mut WireBuilder)) -> Vec<u8> {
    let mut b = WireBuilder::header(0x0001, 0x8180, [1, 1, 0, 0]);
    b.question("example.com", rtype, DNS_CLASS_IN);
    b.compressed("", QNAME_OFFSET).record_body(rtype, 60, rdata);
    b.build()
}

/// An A record answer with an explicit, possibly wrong, RDLENGTH.
pub fn a_record_with_rdlength(rdlength: u16, rdata: &[u8]) -> Vec<u8> {
    let mut b = WireBuilder::header(0x0002, 0x8180, [1, 1, 0, 0]);
    b.question("example.com", DNS_TYPE_A, DNS_CLASS_IN);
    b.compressed("", QNAME_OFFSET)
        .u16(DNS_TYPE_A)
        .u16(DNS_CLASS_IN)
        .u32(60)
        .u16(rdlength)
        .bytes(rdata);
    b.build()
}
