/// Errors that can occur while decoding a DNS message from wire format.
///
/// Any of these aborts the whole message decode; no partial message is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("Out of bounds at offset {offset}: need {needed} bytes, have {available}")]
    OutOfBounds {
        offset: usize,
        needed: usize,
        available: usize,
    },

    #[error("Domain name starting at offset {offset} exceeds 255 bytes")]
    NameTooLong { offset: usize },

    #[error("Compression pointer at offset {offset} is not allowed here")]
    InvalidCompression { offset: usize },

    #[error("Compression pointer at offset {offset} targets {target}, which is not an earlier name")]
    InvalidPointer { offset: usize, target: usize },

    #[error("Unsupported label type 0x{byte:02x} at offset {offset}")]
    InvalidLabel { offset: usize, byte: u8 },

    #[error("Malformed RDATA for type {rtype}: {reason}")]
    MalformedRData { rtype: u16, reason: String },

    #[error("Message of {len} bytes is shorter than the 12 byte header")]
    MalformedHeader { len: usize },
}

/// Errors produced while turning hex-escaped text into raw message bytes.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("\"{token}\" is not a quoted \\xHH hex string")]
    MalformedToken { token: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur during DNS packet codec operations
#[derive(Debug, thiserror::Error)]
pub enum DnsCodecError {
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
