//! Diagram text encoding
//!
//! Turns free-form diagram markup into the URL-safe token the rendering
//! service expects: raw DEFLATE (no zlib header) at maximum compression
//! over the UTF-8 bytes, then the service's own base64 variant. Both
//! halves are a bit-exact external contract; a mismatch produces tokens
//! the service silently fails to decode rather than an error.

mod base64;

use std::io::{Read, Write};

use flate2::read::DeflateDecoder;
use flate2::write::DeflateEncoder;
use flate2::Compression;
use thiserror::Error;

/// Failure modes when decoding a token back into diagram text.
///
/// Encoding has no error type: [`encode`] is total over strings.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The token contains a character outside the encoding alphabet.
    #[error("character {0:?} is not in the encoding alphabet")]
    InvalidCharacter(char),
    /// The decoded bytes are not a valid DEFLATE stream.
    #[error("token does not contain a valid DEFLATE stream: {0}")]
    Corrupt(#[from] std::io::Error),
    /// The decompressed payload is not valid UTF-8.
    #[error("decoded payload is not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Encode diagram markup into a URL-safe token.
///
/// Pure and total: identical input yields an identical token, and every
/// string (including the empty string) encodes successfully. Cost is
/// linear in the input length.
pub fn encode(text: &str) -> String {
    let mut encoder = DeflateEncoder::new(Vec::with_capacity(64), Compression::best());
    // Writing into a Vec-backed encoder cannot fail.
    let _ = encoder.write_all(text.as_bytes());
    let deflated = encoder.finish().unwrap_or_default();
    base64::encode64(&deflated)
}

/// Decode a token back into diagram markup.
///
/// Exact inverse of [`encode`]; also accepts tokens produced by other
/// encoders for the same service (the DEFLATE stream need not be
/// byte-identical to ours, only valid).
pub fn decode(token: &str) -> Result<String, DecodeError> {
    let deflated = base64::decode64(token)?;
    // The trailing zero padding bytes sit past the end of the DEFLATE
    // stream; the decoder stops at the stream terminator and never
    // reads them.
    let mut decoder = DeflateDecoder::new(deflated.as_slice());
    let mut bytes = Vec::new();
    decoder.read_to_end(&mut bytes)?;
    Ok(String::from_utf8(bytes)?)
}
