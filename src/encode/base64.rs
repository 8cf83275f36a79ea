//! PlantUML base64 alphabet
//!
//! The rendering service uses its own 64-character alphabet, `0-9` first,
//! then `A-Z`, `a-z`, `-`, `_`. This is NOT standard base64 with a
//! substituted tail: the whole table is shifted, so a standard codec with
//! a custom alphabet string would still disagree on every character.
//! Partial trailing groups are zero-padded to a full four characters and
//! no padding character is ever emitted.

use super::DecodeError;

/// Map compressed bytes to the service's base64 variant.
pub(super) fn encode64(data: &[u8]) -> String {
    let mut out = String::with_capacity(data.len().div_ceil(3) * 4);
    for chunk in data.chunks(3) {
        let b1 = chunk[0];
        let b2 = chunk.get(1).copied().unwrap_or(0);
        let b3 = chunk.get(2).copied().unwrap_or(0);
        out.push(encode6bit(b1 >> 2));
        out.push(encode6bit(((b1 & 0x03) << 4) | (b2 >> 4)));
        out.push(encode6bit(((b2 & 0x0f) << 2) | (b3 >> 6)));
        out.push(encode6bit(b3 & 0x3f));
    }
    out
}

/// Inverse of [`encode64`]. Tolerates a truncated trailing group by
/// treating missing characters as zero, mirroring the zero-padding on
/// the encode side.
pub(super) fn decode64(token: &str) -> Result<Vec<u8>, DecodeError> {
    let mut sextets = Vec::with_capacity(token.len());
    for &byte in token.as_bytes() {
        sextets.push(decode6bit(byte)?);
    }

    let mut out = Vec::with_capacity(sextets.len().div_ceil(4) * 3);
    for chunk in sextets.chunks(4) {
        let c1 = chunk[0];
        let c2 = chunk.get(1).copied().unwrap_or(0);
        let c3 = chunk.get(2).copied().unwrap_or(0);
        let c4 = chunk.get(3).copied().unwrap_or(0);
        out.push((c1 << 2) | (c2 >> 4));
        out.push(((c2 & 0x0f) << 4) | (c3 >> 2));
        out.push(((c3 & 0x03) << 6) | c4);
    }
    Ok(out)
}

fn encode6bit(b: u8) -> char {
    debug_assert!(b < 64);
    match b {
        0..=9 => (b'0' + b) as char,
        10..=35 => (b'A' + b - 10) as char,
        36..=61 => (b'a' + b - 36) as char,
        62 => '-',
        _ => '_',
    }
}

fn decode6bit(byte: u8) -> Result<u8, DecodeError> {
    match byte {
        b'0'..=b'9' => Ok(byte - b'0'),
        b'A'..=b'Z' => Ok(byte - b'A' + 10),
        b'a'..=b'z' => Ok(byte - b'a' + 36),
        b'-' => Ok(62),
        b'_' => Ok(63),
        _ => Err(DecodeError::InvalidCharacter(byte as char)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_order() {
        // Spot-check the shifted table: 0 -> '0', 10 -> 'A', 36 -> 'a'.
        assert_eq!(encode64(&[0x00]), "0000");
        assert_eq!(encode6bit(0), '0');
        assert_eq!(encode6bit(10), 'A');
        assert_eq!(encode6bit(36), 'a');
        assert_eq!(encode6bit(62), '-');
        assert_eq!(encode6bit(63), '_');
    }

    #[test]
    fn test_partial_groups_zero_padded() {
        // One input byte still produces four characters.
        assert_eq!(encode64(&[0xff]).len(), 4);
        assert_eq!(encode64(&[0xff, 0xff]).len(), 4);
        assert_eq!(encode64(&[0xff, 0xff, 0xff]).len(), 4);
        assert_eq!(encode64(&[0xff, 0xff, 0xff, 0xff]).len(), 8);
    }

    #[test]
    fn test_byte_round_trip() {
        let data: Vec<u8> = (0..=255).collect();
        let token = encode64(&data);
        let decoded = decode64(&token).unwrap();
        // Decoding restores whole 3-byte groups; the tail is zero-padded.
        assert_eq!(&decoded[..data.len()], &data[..]);
        assert!(decoded[data.len()..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_rejects_foreign_characters() {
        assert!(matches!(
            decode64("ab+c"),
            Err(DecodeError::InvalidCharacter('+'))
        ));
        assert!(decode64("abc=").is_err());
        assert!(decode64("ab c").is_err());
    }
}
