use crate::value::Value;

/// Encodes a value into its canonical bencoded form.
///
/// Free-function form of [`Value::encode`].
///
/// # Examples
///
/// ```
/// use rbenc::{encode, Value};
///
/// let list = Value::List(vec![Value::Integer(1), Value::string("two")]);
/// assert_eq!(encode(&list), b"li1e3:twoe");
/// ```
pub fn encode(value: &Value) -> Vec<u8> {
    value.encode()
}

impl Value {
    /// Serializes this element into its canonical bencoded form.
    ///
    /// Encoding cannot fail: every representable tree has exactly one
    /// canonical byte sequence. Dictionary entries are emitted in the
    /// map's ascending key order, so the output is canonical no matter
    /// what order the entries were inserted in.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbenc::Value;
    ///
    /// assert_eq!(Value::Integer(-3).encode(), b"i-3e");
    /// assert_eq!(Value::string("spam").encode(), b"4:spam");
    /// ```
    pub fn encode(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        self.encode_into(&mut buf);
        buf
    }

    /// Appends the canonical encoding of this element to `buf`.
    ///
    /// Lists and dictionaries funnel every child through the same buffer,
    /// so one allocation serves an entire tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbenc::Value;
    ///
    /// let mut buf = Vec::new();
    /// Value::Integer(1).encode_into(&mut buf);
    /// Value::Integer(2).encode_into(&mut buf);
    /// assert_eq!(buf, b"i1ei2e");
    /// ```
    pub fn encode_into(&self, buf: &mut Vec<u8>) {
        match self {
            Value::Integer(i) => {
                buf.push(b'i');
                buf.extend_from_slice(i.to_string().as_bytes());
                buf.push(b'e');
            }
            Value::Bytes(b) => push_byte_string(buf, b),
            Value::List(items) => {
                buf.push(b'l');
                for item in items {
                    item.encode_into(buf);
                }
                buf.push(b'e');
            }
            Value::Dict(entries) => {
                buf.push(b'd');
                for (key, value) in entries {
                    push_byte_string(buf, key);
                    value.encode_into(buf);
                }
                buf.push(b'e');
            }
        }
    }
}

fn push_byte_string(buf: &mut Vec<u8>, bytes: &[u8]) {
    buf.extend_from_slice(bytes.len().to_string().as_bytes());
    buf.push(b':');
    buf.extend_from_slice(bytes);
}
