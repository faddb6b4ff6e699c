use std::fmt;

use crate::codec::{EOH, EOR};
use crate::record::{AdifRecord, Header};
use crate::types::FieldName;

/// Fatal decode failure for the file being parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// No end-of-header marker anywhere in the input.
    MissingHeaderTerminator,
    /// A `<` with no matching `>` in the same record segment.
    UnterminatedTag {
        /// Byte offset of the opening `<` within its segment.
        offset: usize,
    },
    /// Tag length specifier is not a plain decimal count.
    BadLength {
        /// Raw tag body as written.
        body: String,
    },
    /// Explicit length runs past the end of the record segment.
    LengthOutOfBounds {
        /// Field whose value was being read.
        name: FieldName,
        /// Declared character count.
        length: usize,
    },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingHeaderTerminator => {
                write!(f, "no {EOH} header terminator found")
            }
            Self::UnterminatedTag { offset } => {
                write!(f, "unterminated tag at byte {offset} of record")
            }
            Self::BadLength { body } => {
                write!(f, "malformed length in tag <{body}>")
            }
            Self::LengthOutOfBounds { name, length } => {
                write!(f, "length {length} of field {name} exceeds remaining record text")
            }
        }
    }
}

impl std::error::Error for DecodeError {}

/// A parsed tag marker: canonical field name plus optional explicit length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    /// Canonicalized field name.
    pub name: FieldName,
    /// Explicit character count, when the `<name:N>` form was used.
    pub length: Option<usize>,
}

/// Scans for the next tag at or after byte offset `pos`.
///
/// Returns the tag and the offset just past its closing `>`, or `None`
/// when no further `<` exists. Text between `pos` and the tag opening is
/// skipped; it belongs to the preceding implicit-form value or is filler.
pub fn next_tag(text: &str, pos: usize) -> Result<Option<(Tag, usize)>, DecodeError> {
    let Some(open) = text[pos..].find('<').map(|rel| pos + rel) else {
        return Ok(None);
    };
    let Some(close) = text[open..].find('>').map(|rel| open + rel) else {
        return Err(DecodeError::UnterminatedTag { offset: open });
    };

    let body = &text[open + 1..close];
    let (name, length) = match body.split_once(':') {
        Some((name, length)) => {
            let length = length
                .trim()
                .parse::<usize>()
                .map_err(|_| DecodeError::BadLength {
                    body: body.to_string(),
                })?;
            (name, Some(length))
        }
        None => (body, None),
    };

    Ok(Some((
        Tag {
            name: FieldName::canonical(name),
            length,
        },
        close + 1,
    )))
}

/// Decodes a full ADIF file into its verbatim header and record sequence.
///
/// Records with no fields (blank or tagless segments) are dropped.
pub fn decode(raw: &str) -> Result<(Header, Vec<AdifRecord>), DecodeError> {
    let header_end = find_ascii_ignore_case(raw, EOH)
        .ok_or(DecodeError::MissingHeaderTerminator)?
        + EOH.len();
    let header = Header {
        text: raw[..header_end].to_string(),
    };

    let mut records = Vec::new();
    for segment in split_ascii_ignore_case(&raw[header_end..], EOR) {
        if segment.trim().is_empty() {
            continue;
        }
        let record = decode_record(segment)?;
        if !record.is_empty() {
            records.push(record);
        }
    }

    Ok((header, records))
}

fn decode_record(segment: &str) -> Result<AdifRecord, DecodeError> {
    let mut record = AdifRecord::new();
    let mut pos = 0usize;

    while let Some((tag, after)) = next_tag(segment, pos)? {
        let rest = &segment[after..];
        let (value, next_pos) = match tag.length {
            Some(length) => {
                let end = char_span(rest, length).ok_or_else(|| DecodeError::LengthOutOfBounds {
                    name: tag.name.clone(),
                    length,
                })?;
                (&rest[..end], after + end)
            }
            None => match rest.find('<') {
                Some(idx) => (&rest[..idx], after + idx),
                None => (rest, segment.len()),
            },
        };

        record.set(tag.name, value.trim());
        pos = next_pos;
    }

    Ok(record)
}

/// Byte length of the first `count` characters of `s`, or `None` when `s`
/// is shorter. Counting characters keeps explicit lengths from slicing
/// inside a multi-byte code point.
fn char_span(s: &str, count: usize) -> Option<usize> {
    if count == 0 {
        return Some(0);
    }
    let mut seen = 0usize;
    for (idx, ch) in s.char_indices() {
        seen += 1;
        if seen == count {
            return Some(idx + ch.len_utf8());
        }
    }
    None
}

fn find_ascii_ignore_case(haystack: &str, needle: &str) -> Option<usize> {
    // Needle is ASCII, so a match can only start on a char boundary.
    haystack
        .as_bytes()
        .windows(needle.len())
        .position(|window| window.eq_ignore_ascii_case(needle.as_bytes()))
}

fn split_ascii_ignore_case<'a>(text: &'a str, sep: &str) -> Vec<&'a str> {
    let mut parts = Vec::new();
    let mut rest = text;
    while let Some(idx) = find_ascii_ignore_case(rest, sep) {
        parts.push(&rest[..idx]);
        rest = &rest[idx + sep.len()..];
    }
    parts.push(rest);
    parts
}
