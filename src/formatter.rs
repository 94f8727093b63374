//! `dig`-style text rendering of decoded messages.
//!
//! ```text
//! ;; ->>HEADER<<- opcode: QUERY; status: NOERROR; id: 28028
//! ;; Flags: qr rd ra; QUERY: 1; ANSWER: 1; AUTHORITY: 0; ADDITIONAL: 0
//!
//! ;; QUESTION SECTION:
//! ;; example.com.            IN    A
//!
//! ;; ANSWER SECTION:
//! example.com.        76391    IN    A    93.184.216.34
//! ```

use std::fmt;

use crate::constants::Mnemonic;
use crate::protocol::{DnsPacket, DnsPacketHeader, DnsQuestion, DnsResourceRecord};

impl fmt::Display for DnsPacketHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            ";; ->>HEADER<<- opcode: {}; status: {}; id: {}",
            Mnemonic::opcode(self.opcode),
            Mnemonic::rcode(self.rcode),
            self.id
        )?;

        f.write_str(";; Flags:")?;
        let flags = [
            (self.qr, "qr"),
            (self.aa, "aa"),
            (self.tc, "tc"),
            (self.rd, "rd"),
            (self.ra, "ra"),
        ];
        for (_, flag) in flags.iter().filter(|(set, _)| *set) {
            write!(f, " {}", flag)?;
        }
        write!(
            f,
            "; QUERY: {}; ANSWER: {}; AUTHORITY: {}; ADDITIONAL: {}",
            self.qdcount, self.ancount, self.nscount, self.arcount
        )
    }
}

impl fmt::Display for DnsQuestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            ";; {}\t\t\t{}\t{}",
            self.name,
            Mnemonic::class(self.qclass),
            Mnemonic::rtype(self.qtype)
        )
    }
}

impl fmt::Display for DnsResourceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t\t{}\t{}\t{}\t{}",
            self.name,
            self.ttl,
            Mnemonic::class(self.rclass),
            Mnemonic::rtype(self.rtype),
            self.rdata
        )
    }
}

fn write_section(
    f: &mut fmt::Formatter<'_>,
    title: &str,
    records: &[DnsResourceRecord],
) -> fmt::Result {
    if records.is_empty() {
        return Ok(());
    }
    writeln!(f)?;
    writeln!(f, ";; {} SECTION:", title)?;
    for record in records {
        writeln!(f, "{}", record)?;
    }
    Ok(())
}

impl fmt::Display for DnsPacket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.header)?;

        if !self.questions.is_empty() {
            writeln!(f)?;
            writeln!(f, ";; QUESTION SECTION:")?;
            for question in &self.questions {
                writeln!(f, "{}", question)?;
            }
        }

        write_section(f, "ANSWER", &self.answers)?;
        write_section(f, "AUTHORITY", &self.authorities)?;
        write_section(f, "ADDITIONAL", &self.additionals)
    }
}
