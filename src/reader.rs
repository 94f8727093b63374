//! Cursor over a fully buffered DNS message.
//!
//! All reads are bounds checked and advance a single logical cursor. Domain
//! names may follow compression pointers backwards through the buffer; when
//! they do, the logical cursor stops right after the first pointer.

use bytes::Bytes;
use nom::{
    bytes::complete::take,
    number::complete::{be_u16, be_u32, be_u8},
    IResult,
};
use tracing::trace;

use crate::constants::{MAX_LABEL_LENGTH, MAX_NAME_LENGTH};
use crate::errors::DecodeError;

#[derive(Debug, Clone)]
pub struct PacketReader {
    buf: Bytes,
    pos: usize,
}

impl PacketReader {
    pub fn new(buf: impl Into<Bytes>) -> Self {
        Self {
            buf: buf.into(),
            pos: 0,
        }
    }

    /// Current logical cursor position.
    pub fn offset(&self) -> usize {
        self.pos
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Bytes left between the cursor and the end of the buffer.
    pub fn remaining(&self) -> usize {
        self.buf.len().saturating_sub(self.pos)
    }

    /// Runs a nom parser on the unread input and advances by what it consumed.
    /// A failed parse leaves the cursor untouched.
    fn read_with<T, F>(&mut self, needed: usize, parser: F) -> Result<T, DecodeError>
    where
        F: FnOnce(&[u8]) -> IResult<&[u8], T>,
    {
        let input = &self.buf[self.pos.min(self.buf.len())..];
        match parser(input) {
            Ok((rest, value)) => {
                let consumed = input.len() - rest.len();
                self.pos += consumed;
                Ok(value)
            }
            Err(_) => Err(DecodeError::OutOfBounds {
                offset: self.pos,
                needed,
                available: input.len(),
            }),
        }
    }

    pub fn read_u8(&mut self) -> Result<u8, DecodeError> {
        self.read_with(1, |i| be_u8(i))
    }

    pub fn read_u16(&mut self) -> Result<u16, DecodeError> {
        self.read_with(2, |i| be_u16(i))
    }

    pub fn read_u32(&mut self) -> Result<u32, DecodeError> {
        self.read_with(4, |i| be_u32(i))
    }

    /// Returns the next `len` bytes as a zero-copy slice of the message.
    pub fn read_bytes(&mut self, len: usize) -> Result<Bytes, DecodeError> {
        let start = self.pos;
        self.read_with(len, |i| take(len)(i).map(|(rest, _)| (rest, ())))?;
        Ok(self.buf.slice(start..start + len))
    }

    fn byte_at(&self, offset: usize) -> Result<u8, DecodeError> {
        self.buf
            .get(offset)
            .copied()
            .ok_or(DecodeError::OutOfBounds {
                offset,
                needed: 1,
                available: 0,
            })
    }

    /// Decodes a domain name at the cursor into its dotted, fully qualified form.
    ///
    /// Every pointer must target an offset strictly before the start of the
    /// label run that contains it, so decoding always terminates.
    pub fn read_name(&mut self, allow_compression: bool) -> Result<String, DecodeError> {
        let start = self.pos;
        let mut name = String::new();
        // The terminating zero-length label counts towards the limit.
        let mut wire_len = 1;
        let mut scan = self.pos;
        let mut segment_start = self.pos;
        let mut resume_at: Option<usize> = None;

        loop {
            let length = self.byte_at(scan)?;
            match length {
                0 => {
                    scan += 1;
                    break;
                }
                l if (l & 0b1100_0000) == 0b1100_0000 => {
                    if !allow_compression {
                        return Err(DecodeError::InvalidCompression { offset: scan });
                    }
                    let next_byte = self.byte_at(scan + 1)?;
                    let target = (u16::from_be_bytes([l, next_byte]) & 0x3FFF) as usize;
                    if target >= segment_start {
                        return Err(DecodeError::InvalidPointer {
                            offset: scan,
                            target,
                        });
                    }
                    trace!(offset = scan, target, "following compression pointer");
                    resume_at.get_or_insert(scan + 2);
                    scan = target;
                    segment_start = target;
                }
                l if l <= MAX_LABEL_LENGTH => {
                    let label_start = scan + 1;
                    let label_end = label_start + l as usize;
                    if label_end > self.buf.len() {
                        return Err(DecodeError::OutOfBounds {
                            offset: label_start,
                            needed: l as usize,
                            available: self.buf.len().saturating_sub(label_start),
                        });
                    }
                    wire_len += 1 + l as usize;
                    if wire_len > MAX_NAME_LENGTH {
                        return Err(DecodeError::NameTooLong { offset: start });
                    }
                    name.push_str(&String::from_utf8_lossy(&self.buf[label_start..label_end]));
                    name.push('.');
                    scan = label_end;
                }
                byte => {
                    return Err(DecodeError::InvalidLabel {
                        offset: scan,
                        byte,
                    })
                }
            }
        }

        self.pos = resume_at.unwrap_or(scan);
        if name.is_empty() {
            name.push('.');
        }
        Ok(name)
    }
}
