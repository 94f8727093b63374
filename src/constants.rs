// DNS Record Type Constants
pub const DNS_TYPE_A: u16 = 1; // IPv4 address
pub const DNS_TYPE_NS: u16 = 2; // Name server
pub const DNS_TYPE_CNAME: u16 = 5; // Canonical name
pub const DNS_TYPE_SOA: u16 = 6; // Start of authority
pub const DNS_TYPE_PTR: u16 = 12; // Pointer record
pub const DNS_TYPE_MX: u16 = 15; // Mail exchange
pub const DNS_TYPE_TXT: u16 = 16; // Text record
pub const DNS_TYPE_AAAA: u16 = 28; // IPv6 address
pub const DNS_TYPE_SRV: u16 = 33; // Service locator

// DNS Class Constants
pub const DNS_CLASS_IN: u16 = 1; // Internet

/// Size of the fixed message header.
pub const HEADER_LEN: usize = 12;

/// Maximum length of a domain name on the wire, RFC 1035 section 2.3.4.
pub const MAX_NAME_LENGTH: usize = 255;

/// Largest label length; the two high bits of a length byte select the label type.
pub const MAX_LABEL_LENGTH: u8 = 63;

/// Mnemonics for RR types and QTYPEs, RFC 1035 section 3.2.2/3.2.3.
const TYPES: &[(u16, &str)] = &[
    (1, "A"),
    (2, "NS"),
    (3, "MD"),
    (4, "MF"),
    (5, "CNAME"),
    (6, "SOA"),
    (7, "MB"),
    (8, "MG"),
    (9, "MR"),
    (10, "NULL"),
    (11, "WKS"),
    (12, "PTR"),
    (13, "HINFO"),
    (14, "MINFO"),
    (15, "MX"),
    (16, "TXT"),
    (28, "AAAA"),
    (33, "SRV"),
    (252, "AXFR"),
    (253, "MAILB"),
    (254, "MAILA"),
    (255, "*"),
];

const CLASSES: &[(u16, &str)] = &[(1, "IN"), (2, "CS"), (3, "CH"), (4, "HS"), (255, "*")];

const OPCODES: &[(u16, &str)] = &[(0, "QUERY"), (1, "IQUERY"), (2, "STATUS")];

const RCODES: &[(u16, &str)] = &[
    (0, "NOERROR"),
    (1, "FORMATERROR"),
    (2, "SERVERFAILURE"),
    (3, "NAMEERROR"),
    (4, "NOTIMPLEMENTED"),
    (5, "REFUSED"),
];

fn lookup(table: &'static [(u16, &'static str)], value: u16) -> Option<&'static str> {
    table
        .iter()
        .find(|(code, _)| *code == value)
        .map(|(_, name)| *name)
}

pub fn type_name(rtype: u16) -> Option<&'static str> {
    lookup(TYPES, rtype)
}

pub fn class_name(class: u16) -> Option<&'static str> {
    lookup(CLASSES, class)
}

pub fn opcode_name(opcode: u8) -> Option<&'static str> {
    lookup(OPCODES, opcode as u16)
}

pub fn rcode_name(rcode: u8) -> Option<&'static str> {
    lookup(RCODES, rcode as u16)
}

/// Renders a table entry by name, or `unknown(<n>)` when the value has no mnemonic.
#[derive(Debug, Clone, Copy)]
pub struct Mnemonic {
    name: Option<&'static str>,
    value: u16,
}

impl Mnemonic {
    pub fn rtype(value: u16) -> Self {
        Self {
            name: type_name(value),
            value,
        }
    }

    pub fn class(value: u16) -> Self {
        Self {
            name: class_name(value),
            value,
        }
    }

    pub fn opcode(value: u8) -> Self {
        Self {
            name: opcode_name(value),
            value: value as u16,
        }
    }

    pub fn rcode(value: u8) -> Self {
        Self {
            name: rcode_name(value),
            value: value as u16,
        }
    }
}

impl std::fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.name {
            Some(name) => f.write_str(name),
            None => write!(f, "unknown({})", self.value),
        }
    }
}
