//! Hex-escaped text input.
//!
//! Messages are pasted as one or more whitespace separated tokens such as
//! `"\x6d\x7c\x81\x80"`. A lone `\` is a line continuation and is skipped.

use std::io::Read;

use nom::{
    bytes::complete::{tag, take_while_m_n},
    character::complete::char,
    combinator::{all_consuming, map_res},
    multi::many0,
    sequence::{delimited, preceded},
    IResult, Parser,
};

use crate::errors::InputError;

/// Typical upper bound for a UDP message, used to size the output buffer.
pub const UDP_SIZE_LIMIT: usize = 512;

fn hex_byte(input: &str) -> IResult<&str, u8> {
    map_res(
        take_while_m_n(2, 2, |c: char| c.is_ascii_hexdigit()),
        |hex: &str| u8::from_str_radix(hex, 16),
    )
    .parse(input)
}

fn escaped_byte(input: &str) -> IResult<&str, u8> {
    preceded(tag("\\x"), hex_byte).parse(input)
}

fn quoted_token(input: &str) -> IResult<&str, Vec<u8>> {
    delimited(char('"'), many0(escaped_byte), char('"')).parse(input)
}

/// Decodes a single quoted token into raw bytes.
pub fn parse_token(token: &str) -> Result<Vec<u8>, InputError> {
    all_consuming(quoted_token)
        .parse(token)
        .map(|(_, bytes)| bytes)
        .map_err(|_| InputError::MalformedToken {
            token: token.to_string(),
        })
}

/// Concatenates the bytes of every token in `text`.
pub fn parse_hex_stream(text: &str) -> Result<Vec<u8>, InputError> {
    let mut raw = Vec::with_capacity(UDP_SIZE_LIMIT);
    for token in text.split_whitespace() {
        if token == "\\" {
            continue;
        }
        raw.extend(parse_token(token)?);
    }
    Ok(raw)
}

pub fn read_hex_stream<R: Read>(mut reader: R) -> Result<Vec<u8>, InputError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_hex_stream(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_token() {
        assert_eq!(
            parse_token(r#""\x6d\x7c\x81\x80""#).unwrap(),
            vec![0x6d, 0x7c, 0x81, 0x80]
        );
        assert_eq!(parse_token(r#""\xAb""#).unwrap(), vec![0xab]);
        assert!(parse_token(r#""""#).unwrap().is_empty());
    }

    #[test]
    fn test_valid_streams() {
        let cases = [
            (r#""\x6d\x7c\x81\x80\x00\x01" \"#, 6),
            (r#""\x6d\x7c\x81\x80\x00\x01""#, 6),
            ("\n", 0),
            ("\"\\x6d\\x7c\\x81\\x80\\x00\\x01\" \\\n\"\\x6d\\x7c\\x81\\x80\"", 10),
        ];

        for (text, expected_len) in cases {
            let raw = parse_hex_stream(text).unwrap();
            assert_eq!(raw.len(), expected_len, "input {:?}", text);
        }
    }

    #[test]
    fn test_invalid_streams() {
        for text in [r#""\x6""#, "m", "12", r#""\x6p""#, r#""\x6d"#, r#"\x6d""#] {
            assert!(
                matches!(
                    parse_hex_stream(text),
                    Err(InputError::MalformedToken { .. })
                ),
                "input {:?} should be rejected",
                text
            );
        }
    }

    #[test]
    fn test_read_from_reader() {
        let text = b"\"\\x00\\x01\" \\\n  \"\\x02\"\n";
        assert_eq!(read_hex_stream(&text[..]).unwrap(), vec![0, 1, 2]);
    }
}
