use std::collections::BTreeMap;

use bytes::Bytes;

/// A single bencode element.
///
/// Bencode has four kinds of element: integers, byte strings, lists, and
/// dictionaries. Lists and dictionaries own their children, so a decoded
/// tree is a self-contained value with no sharing between elements.
/// Dictionaries are stored in a [`BTreeMap`] keyed by raw bytes, which
/// keeps the keys in ascending byte order at all times; this is the order
/// the canonical encoding requires, so encoding never has to sort.
///
/// # Examples
///
/// ```
/// use rbenc::Value;
///
/// let announce = Value::string("http://tracker.example.com/announce");
/// assert_eq!(announce.as_str(), Some("http://tracker.example.com/announce"));
///
/// // `From` conversions cover the common payload types.
/// let port: Value = 6881i64.into();
/// assert_eq!(port.as_integer(), Some(6881));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    /// A signed 64-bit integer.
    Integer(i64),
    /// A byte string; arbitrary bytes, not necessarily UTF-8.
    Bytes(Bytes),
    /// A list of elements in insertion order.
    List(Vec<Value>),
    /// A dictionary from byte-string keys to elements, iterated in
    /// ascending byte order of the keys.
    Dict(BTreeMap<Bytes, Value>),
}

impl Value {
    /// Builds a byte-string element from UTF-8 text.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbenc::Value;
    ///
    /// assert_eq!(Value::string("spam").encode(), b"4:spam");
    /// ```
    pub fn string(s: &str) -> Self {
        Value::Bytes(Bytes::copy_from_slice(s.as_bytes()))
    }

    /// The integer payload, if this element is an integer.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// The raw bytes, if this element is a byte string.
    pub fn as_bytes(&self) -> Option<&Bytes> {
        match self {
            Value::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// The payload as text, if this element is a byte string holding
    /// valid UTF-8.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbenc::Value;
    /// use bytes::Bytes;
    ///
    /// assert_eq!(Value::string("moo").as_str(), Some("moo"));
    /// assert_eq!(Value::Bytes(Bytes::from_static(b"\xff")).as_str(), None);
    /// ```
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Bytes(b) => std::str::from_utf8(b).ok(),
            _ => None,
        }
    }

    /// The child elements, if this element is a list.
    pub fn as_list(&self) -> Option<&Vec<Value>> {
        match self {
            Value::List(l) => Some(l),
            _ => None,
        }
    }

    /// The key-value entries, if this element is a dictionary.
    pub fn as_dict(&self) -> Option<&BTreeMap<Bytes, Value>> {
        match self {
            Value::Dict(d) => Some(d),
            _ => None,
        }
    }

    /// Consumes the element and returns the dictionary entries, if it is
    /// a dictionary. Avoids a clone when ownership is needed.
    pub fn into_dict(self) -> Option<BTreeMap<Bytes, Value>> {
        match self {
            Value::Dict(d) => Some(d),
            _ => None,
        }
    }

    /// Looks up `key` if this element is a dictionary.
    ///
    /// Returns `None` both for missing keys and for non-dictionary
    /// elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbenc::decode_one;
    ///
    /// let dict = decode_one(b"d3:cow3:mooe").unwrap();
    /// assert_eq!(dict.get(b"cow").and_then(|v| v.as_str()), Some("moo"));
    /// assert_eq!(dict.get(b"pig"), None);
    /// ```
    pub fn get(&self, key: &[u8]) -> Option<&Value> {
        self.as_dict()?.get(key)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<Bytes> for Value {
    fn from(b: Bytes) -> Self {
        Value::Bytes(b)
    }
}

impl From<Vec<Value>> for Value {
    fn from(l: Vec<Value>) -> Self {
        Value::List(l)
    }
}

impl From<BTreeMap<Bytes, Value>> for Value {
    fn from(d: BTreeMap<Bytes, Value>) -> Self {
        Value::Dict(d)
    }
}
