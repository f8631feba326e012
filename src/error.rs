use std::error::Error as StdError;

use thiserror::Error;

/// The error returned when input does not conform to the bencode grammar.
///
/// Decoding has a single failure mode: somewhere in the input, the bytes
/// stopped describing a valid element. The error records what the decoder
/// was reading, the byte offset where it gave up, and, when the failure
/// came out of a lower-level parse (such as an integer literal too large
/// for an `i64`), the underlying cause, reachable through
/// [`std::error::Error::source`].
///
/// # Examples
///
/// ```
/// use rbenc::decode;
///
/// let err = decode(b"i1ex").unwrap_err();
/// assert_eq!(err.offset(), 3);
/// ```
#[derive(Debug, Error)]
#[error("malformed bencode at offset {offset}: {message}")]
pub struct BencodeError {
    message: String,
    offset: usize,
    #[source]
    source: Option<Box<dyn StdError + Send + Sync + 'static>>,
}

impl BencodeError {
    pub(crate) fn new(offset: usize, message: impl Into<String>) -> Self {
        BencodeError {
            message: message.into(),
            offset,
            source: None,
        }
    }

    pub(crate) fn with_source(
        offset: usize,
        message: impl Into<String>,
        source: impl StdError + Send + Sync + 'static,
    ) -> Self {
        BencodeError {
            message: message.into(),
            offset,
            source: Some(Box::new(source)),
        }
    }

    /// The byte offset in the input at which decoding failed.
    pub fn offset(&self) -> usize {
        self.offset
    }
}
