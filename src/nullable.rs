//! Entry points for callers whose input may be absent, such as values coming
//! across an FFI boundary or out of optional fields. `None` fails with
//! [`Error::NullInput`] before any processing; `Some` behaves exactly like the
//! matching function at the crate root.

use crate::{Error, Result};

pub fn encode(data: Option<&[u8]>) -> Result<String> {
    data.map(crate::encode).ok_or(Error::NullInput)
}

pub fn decode(data: Option<&str>) -> Result<Vec<u8>> {
    crate::decode(data.ok_or(Error::NullInput)?)
}

pub fn encode_hex(data: Option<&[u8]>) -> Result<String> {
    data.map(crate::encode_hex).ok_or(Error::NullInput)
}

pub fn decode_hex(data: Option<&str>) -> Result<Vec<u8>> {
    crate::decode_hex(data.ok_or(Error::NullInput)?)
}
