use std::collections::BTreeMap;

use bytes::Bytes;
use tracing::trace;

use crate::error::BencodeError;
use crate::value::Value;

/// Decodes every root element in `data`.
///
/// Bencode allows several elements back to back at the top level, so the
/// decoder keeps reading until the input is exhausted and returns the
/// roots in order. Empty input yields an empty vector.
///
/// # Errors
///
/// Fails with [`BencodeError`] as soon as any part of the input violates
/// the grammar; nothing is returned for roots that decoded cleanly before
/// the bad byte.
///
/// # Examples
///
/// ```
/// use rbenc::{decode, Value};
///
/// let roots = decode(b"i1ei2e").unwrap();
/// assert_eq!(roots, vec![Value::Integer(1), Value::Integer(2)]);
/// ```
pub fn decode(data: &[u8]) -> Result<Vec<Value>, BencodeError> {
    let mut pos = 0;
    let mut roots = Vec::new();

    while pos < data.len() {
        roots.push(decode_value(data, &mut pos)?);
    }

    trace!("decoded {} root element(s) from {} bytes", roots.len(), data.len());
    Ok(roots)
}

/// Decodes exactly one root element.
///
/// Unlike [`decode`], any bytes left over after the first element are an
/// error. This is the right entry point for single-document inputs such
/// as `.torrent` files.
///
/// # Examples
///
/// ```
/// use rbenc::decode_one;
///
/// let value = decode_one(b"4:spam").unwrap();
/// assert_eq!(value.as_str(), Some("spam"));
///
/// assert!(decode_one(b"i42eextra").is_err());
/// ```
pub fn decode_one(data: &[u8]) -> Result<Value, BencodeError> {
    let mut pos = 0;
    let value = decode_value(data, &mut pos)?;

    if pos != data.len() {
        return Err(BencodeError::new(pos, "trailing bytes after root element"));
    }

    Ok(value)
}

fn decode_value(data: &[u8], pos: &mut usize) -> Result<Value, BencodeError> {
    match data.get(*pos).copied() {
        Some(b'i') => decode_integer(data, pos),
        Some(b'l') => decode_list(data, pos),
        Some(b'd') => decode_dict(data, pos),
        Some(b'0'..=b'9') => decode_byte_string(data, pos).map(Value::Bytes),
        Some(c) => Err(BencodeError::new(
            *pos,
            format!("unrecognized token {:?}", c as char),
        )),
        None => Err(BencodeError::new(*pos, "unexpected end of input")),
    }
}

fn decode_integer(data: &[u8], pos: &mut usize) -> Result<Value, BencodeError> {
    let token_start = *pos;
    *pos += 1;

    let literal_start = *pos;
    while *pos < data.len() && data[*pos] != b'e' {
        *pos += 1;
    }
    if *pos >= data.len() {
        return Err(BencodeError::new(
            token_start,
            "integer is missing its 'e' terminator",
        ));
    }

    let literal = &data[literal_start..*pos];
    if literal.is_empty() {
        return Err(BencodeError::new(token_start, "integer literal is empty"));
    }
    // Canonical form: "0" is the only literal that may start with a zero,
    // and "-0" does not exist.
    if literal.starts_with(b"-0") || (literal[0] == b'0' && literal.len() > 1) {
        return Err(BencodeError::new(
            token_start,
            "integer literal has a leading zero",
        ));
    }

    let text = std::str::from_utf8(literal).map_err(|_| {
        BencodeError::new(token_start, "integer literal is not ASCII")
    })?;
    let value: i64 = text.parse().map_err(|e| {
        BencodeError::with_source(
            token_start,
            format!("cannot parse integer literal {text:?}"),
            e,
        )
    })?;

    *pos += 1;
    Ok(Value::Integer(value))
}

fn decode_byte_string(data: &[u8], pos: &mut usize) -> Result<Bytes, BencodeError> {
    let token_start = *pos;
    while *pos < data.len() && data[*pos] != b':' {
        *pos += 1;
    }
    if *pos >= data.len() {
        return Err(BencodeError::new(
            token_start,
            "byte string is missing its ':' length separator",
        ));
    }

    let literal = &data[token_start..*pos];
    let text = std::str::from_utf8(literal).map_err(|_| {
        BencodeError::new(token_start, "byte string length is not ASCII")
    })?;
    let len: usize = text.parse().map_err(|e| {
        BencodeError::with_source(
            token_start,
            format!("cannot parse byte string length {text:?}"),
            e,
        )
    })?;

    *pos += 1;
    let remaining = data.len() - *pos;
    if len > remaining {
        return Err(BencodeError::new(
            token_start,
            format!("byte string length {len} exceeds the {remaining} bytes remaining"),
        ));
    }

    let payload = Bytes::copy_from_slice(&data[*pos..*pos + len]);
    *pos += len;
    Ok(payload)
}

fn decode_list(data: &[u8], pos: &mut usize) -> Result<Value, BencodeError> {
    let token_start = *pos;
    *pos += 1;

    let mut items = Vec::new();
    while *pos < data.len() && data[*pos] != b'e' {
        items.push(decode_value(data, pos)?);
    }
    if *pos >= data.len() {
        return Err(BencodeError::new(
            token_start,
            "list is missing its 'e' terminator",
        ));
    }

    *pos += 1;
    Ok(Value::List(items))
}

fn decode_dict(data: &[u8], pos: &mut usize) -> Result<Value, BencodeError> {
    let token_start = *pos;
    *pos += 1;

    let mut entries = BTreeMap::new();
    while *pos < data.len() && data[*pos] != b'e' {
        if !data[*pos].is_ascii_digit() {
            return Err(BencodeError::new(
                *pos,
                "dictionary key must be a byte string",
            ));
        }
        let key = decode_byte_string(data, pos)?;

        if *pos >= data.len() || data[*pos] == b'e' {
            return Err(BencodeError::new(
                *pos,
                format!(
                    "dictionary key {:?} has no value",
                    String::from_utf8_lossy(&key)
                ),
            ));
        }
        let value = decode_value(data, pos)?;

        // Last value wins if the source repeats a key; the map keeps the
        // keys in ascending byte order regardless of source order.
        entries.insert(key, value);
    }
    if *pos >= data.len() {
        return Err(BencodeError::new(
            token_start,
            "dictionary is missing its 'e' terminator",
        ));
    }

    *pos += 1;
    Ok(Value::Dict(entries))
}
