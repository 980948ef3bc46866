//! Bit-packing between 8-bit bytes and 5-bit symbols, shared by both alphabets.

use crate::alphabet::PAD;
use crate::{Alphabet, Error, Result};

/// Length of the padded encoding of `len` bytes: `8 * ceil(len / 5)`.
#[inline]
pub const fn encoded_len(len: usize) -> usize {
    len.div_ceil(5) * 8
}

/// Number of symbols in the encoding of `len` bytes before padding,
/// `ceil(len * 8 / 5)`.
pub const fn unpadded_len(len: usize) -> usize {
    let last_chunk = match len % 5 {
        0 => 0,
        1 => 2,
        2 => 4,
        3 => 5,
        4 => 7,
        _ => unreachable!(),
    };
    (len / 5) * 8 + last_chunk
}

/// Number of bytes `decode` yields for `data`, assuming every symbol before the
/// trailing `=` run is valid.
pub fn decoded_len(data: &str) -> usize {
    symbols_decoded_len(strip_padding(data.as_bytes(), PAD).len())
}

#[inline]
const fn symbols_decoded_len(symbols: usize) -> usize {
    (symbols / 8) * 5 + (symbols % 8) * 5 / 8
}

/// Encodes `data` with `alphabet`, padded to a multiple of 8 symbols.
pub fn encode_with(data: &[u8], alphabet: &Alphabet) -> String {
    let mut out = String::with_capacity(encoded_len(data.len()));
    encode_symbols(data, alphabet, |symbol| out.push(char::from(symbol)));

    // Every symbol is ASCII, so byte length is symbol count.
    let pad = char::from(alphabet.pad());
    while out.len() % 8 != 0 {
        out.push(pad);
    }
    out
}

/// Writes the padded encoding of `data` into the front of `out` and returns the
/// number of bytes written, always `encoded_len(data.len())`.
///
/// # Panics
///
/// If `out` is shorter than `encoded_len(data.len())`.
#[inline]
pub fn encode_into(out: &mut [u8], data: &[u8], alphabet: &Alphabet) -> usize {
    let len = encoded_len(data.len());
    let out = &mut out[..len];

    let mut written = 0;
    encode_symbols(data, alphabet, |symbol| {
        out[written] = symbol;
        written += 1;
    });
    out[written..].fill(alphabet.pad());
    len
}

#[inline(always)]
fn encode_symbols(data: &[u8], alphabet: &Alphabet, mut emit: impl FnMut(u8)) {
    // Never holds more than 12 meaningful bits; the rest fall off the top.
    let mut buffer = 0u32;
    let mut bits = 0u32;

    for &byte in data {
        buffer = (buffer << 8) | u32::from(byte);
        bits += 8;

        while bits >= 5 {
            emit(alphabet.symbol((buffer >> (bits - 5)) as u8));
            bits -= 5;
        }
    }

    // Zero-fill the last group on the right.
    if bits > 0 {
        emit(alphabet.symbol((buffer << (5 - bits)) as u8));
    }
}

/// Decodes `data` with `alphabet`. Any run of trailing pad symbols is ignored;
/// every other character must belong to the alphabet.
pub fn decode_with(data: &str, alphabet: &Alphabet) -> Result<Vec<u8>> {
    let symbols = strip_padding(data.as_bytes(), alphabet.pad());
    let mut out = Vec::with_capacity(symbols_decoded_len(symbols.len()));

    let mut buffer = 0u32;
    let mut bits = 0u32;

    for (position, &byte) in symbols.iter().enumerate() {
        let value = alphabet.value(byte).ok_or_else(|| invalid_character(data, position))?;

        buffer = (buffer << 5) | u32::from(value);
        bits += 5;

        if bits >= 8 {
            out.push((buffer >> (bits - 8)) as u8);
            bits -= 8;
        }
    }

    // Up to 4 leftover bits are the encoder's zero fill and are not checked.
    Ok(out)
}

fn strip_padding(bytes: &[u8], pad: u8) -> &[u8] {
    let end = bytes.iter().rposition(|&byte| byte != pad).map_or(0, |i| i + 1);
    &bytes[..end]
}

/// Builds the error for the byte at `position`. Every byte before it was an
/// ASCII symbol, so `position` is a char boundary.
#[cold]
fn invalid_character(data: &str, position: usize) -> Error {
    let character = data
        .get(position..)
        .and_then(|rest| rest.chars().next())
        .unwrap_or(char::REPLACEMENT_CHARACTER);
    Error::InvalidCharacter { character, position }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EXTENDED_HEX, STANDARD};

    #[test]
    fn test_lengths() {
        assert_eq!(encoded_len(0), 0);
        assert_eq!(encoded_len(1), 8);
        assert_eq!(encoded_len(5), 8);
        assert_eq!(encoded_len(6), 16);
        assert_eq!(unpadded_len(0), 0);
        assert_eq!(unpadded_len(1), 2);
        assert_eq!(unpadded_len(4), 7);
        assert_eq!(unpadded_len(6), 10);
        assert_eq!(decoded_len(""), 0);
        assert_eq!(decoded_len("MY======"), 1);
        assert_eq!(decoded_len("MZXW6YTBOI======"), 6);
        assert_eq!(decoded_len("MZXW6YTB"), 5);
    }

    #[test]
    fn test_strip_padding() {
        assert_eq!(strip_padding(b"", b'='), b"");
        assert_eq!(strip_padding(b"====", b'='), b"");
        assert_eq!(strip_padding(b"MY======", b'='), b"MY");
        assert_eq!(strip_padding(b"M=Y=", b'='), b"M=Y");
    }

    #[test]
    fn test_decode_tolerates_any_trailing_padding() {
        assert_eq!(decode_with("MY", &STANDARD).unwrap(), b"f");
        assert_eq!(decode_with("MY=", &STANDARD).unwrap(), b"f");
        assert_eq!(decode_with("MY==============", &STANDARD).unwrap(), b"f");
        assert_eq!(decode_with("========", &STANDARD).unwrap(), b"");
    }

    #[test]
    fn test_decode_discards_leftover_bits() {
        // 'Z' carries two nonzero low bits that the canonical 'Y' does not.
        assert_eq!(decode_with("MZ======", &STANDARD).unwrap(), b"f");
        // A lone symbol holds fewer than 8 bits.
        assert_eq!(decode_with("M", &STANDARD).unwrap(), b"");
    }

    #[test]
    fn test_decode_rejects_interior_padding() {
        assert_eq!(
            decode_with("MY=Y====", &STANDARD).unwrap_err(),
            Error::InvalidCharacter { character: '=', position: 2 }
        );
    }

    #[test]
    fn test_decode_reports_first_invalid_character() {
        assert_eq!(
            decode_with("ABCDEFGHë", &STANDARD).unwrap_err(),
            Error::InvalidCharacter { character: 'ë', position: 8 }
        );
        assert_eq!(
            decode_with("01\u{7}3", &EXTENDED_HEX).unwrap_err(),
            Error::InvalidCharacter { character: '\u{7}', position: 2 }
        );
        assert_eq!(
            decode_with("mzxw6===", &STANDARD).unwrap_err(),
            Error::InvalidCharacter { character: 'm', position: 0 }
        );
    }

    #[test]
    fn test_encode_into_leaves_tail_untouched() {
        let mut out = [b'#'; 12];
        let written = encode_into(&mut out, b"foo", &STANDARD);
        assert_eq!(written, 8);
        assert_eq!(&out, b"MZXW6===####");
    }

    #[test]
    #[should_panic]
    fn test_encode_into_short_buffer_panics() {
        let mut out = [0u8; 7];
        encode_into(&mut out, b"f", &STANDARD);
    }
}
