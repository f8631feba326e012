//! rbenc - Bencode encoding and decoding ([BEP-3]).
//!
//! Bencode is the serialization format BitTorrent uses for structured
//! data, most visibly `.torrent` files and tracker responses. It is
//! self-describing and length-prefixed, built from four element kinds:
//!
//! | Type | Format | Example |
//! |------|--------|---------|
//! | Integer | `i<number>e` | `i42e` → 42 |
//! | Byte String | `<length>:<data>` | `4:spam` → "spam" |
//! | List | `l<items>e` | `l4:spami42ee` → ["spam", 42] |
//! | Dictionary | `d<key><value>...e` | `d3:foo3:bare` → {"foo": "bar"} |
//!
//! # Decoding
//!
//! A buffer may hold several elements back to back; [`decode`] returns
//! them all, [`decode_one`] insists on exactly one:
//!
//! ```
//! use rbenc::{decode, decode_one, Value};
//!
//! let roots = decode(b"i1ei2e").unwrap();
//! assert_eq!(roots, vec![Value::Integer(1), Value::Integer(2)]);
//!
//! let torrent = decode_one(b"d8:announce18:http://example.com4:infod4:name4:demoee").unwrap();
//! assert_eq!(torrent.get(b"announce").and_then(|v| v.as_str()), Some("http://example.com"));
//! ```
//!
//! # Encoding
//!
//! Every [`Value`] serializes to exactly one canonical byte sequence;
//! dictionaries always come out with their keys in ascending byte order,
//! no matter what order they were built in:
//!
//! ```
//! use std::collections::BTreeMap;
//!
//! use bytes::Bytes;
//! use rbenc::Value;
//!
//! let mut dict = BTreeMap::new();
//! dict.insert(Bytes::from_static(b"spam"), Value::string("eggs"));
//! dict.insert(Bytes::from_static(b"cow"), Value::string("moo"));
//!
//! assert_eq!(Value::Dict(dict).encode(), b"d3:cow3:moo4:spam4:eggse");
//! ```
//!
//! # Errors
//!
//! Decoding fails with [`BencodeError`] on the first byte that violates
//! the grammar — an unrecognized token, a missing `:` or `e`, a bad
//! length or integer literal, a truncated payload. The error carries the
//! byte offset of the failure and, where one exists, the underlying
//! cause. Encoding cannot fail.
//!
//! [BEP-3]: http://bittorrent.org/beps/bep_0003.html

mod decode;
mod encode;
mod error;
mod value;

pub use decode::{decode, decode_one};
pub use encode::encode;
pub use error::BencodeError;
pub use value::Value;
