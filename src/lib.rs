//! RFC 4648 Base32 with the standard (`A`-`Z`, `2`-`7`) and extended hex
//! (`0`-`9`, `A`-`V`) alphabets.
//!
//! Encoding always pads with `=` to a multiple of 8 symbols. Decoding strips
//! any run of trailing `=` and is case sensitive: every other character must be
//! a symbol of the alphabet.
//!
//! ```
//! assert_eq!(base32_rfc4648::encode(b"foobar"), "MZXW6YTBOI======");
//! assert_eq!(base32_rfc4648::decode_hex("CPNMUOJ1E8======").unwrap(), b"foobar");
//! ```

mod alphabet;
mod codec;
mod error;
pub mod nullable;

pub use alphabet::{Alphabet, EXTENDED_HEX, STANDARD};
pub use codec::{decode_with, decoded_len, encode_into, encode_with, encoded_len, unpadded_len};
pub use error::{Error, Result};

/// Encodes `data` with the standard alphabet.
#[inline]
pub fn encode(data: &[u8]) -> String {
    encode_with(data, &STANDARD)
}

/// Decodes a standard alphabet string.
#[inline]
pub fn decode(data: &str) -> Result<Vec<u8>> {
    decode_with(data, &STANDARD)
}

/// Encodes `data` with the extended hex alphabet.
#[inline]
pub fn encode_hex(data: &[u8]) -> String {
    encode_with(data, &EXTENDED_HEX)
}

/// Decodes an extended hex alphabet string.
#[inline]
pub fn decode_hex(data: &str) -> Result<Vec<u8>> {
    decode_with(data, &EXTENDED_HEX)
}
