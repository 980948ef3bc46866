//! The two RFC 4648 Base32 alphabets.

/// Marks a byte that is not a symbol of the alphabet in the reverse table.
const INVALID: u8 = 0xFF;

/// Pad symbol shared by both alphabets.
pub(crate) const PAD: u8 = b'=';

/// RFC 4648 section 6 alphabet (`A`-`Z`, `2`-`7`).
pub static STANDARD: Alphabet = Alphabet::new(b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567", PAD);

/// RFC 4648 section 7 "extended hex" alphabet (`0`-`9`, `A`-`V`). Encoded
/// strings sort in the same order as the bytes they encode.
pub static EXTENDED_HEX: Alphabet = Alphabet::new(b"0123456789ABCDEFGHIJKLMNOPQRSTUV", PAD);

/// A Base32 alphabet: 32 symbols, their reverse lookup table and the pad
/// symbol.
#[derive(Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: [u8; 32],
    /// Maps byte values to 5-bit indices (0-31).
    /// Bytes outside the alphabet, the pad symbol included, hold `INVALID`.
    reverse: [u8; 256],
    pad: u8,
}

impl Alphabet {
    /// Builds the alphabet and its reverse table. Evaluated at compile time for
    /// the two statics above.
    ///
    /// Symbols and pad must be ASCII and pairwise distinct, otherwise encoded
    /// output would not decode back or would miss the 8-symbol block length.
    pub(crate) const fn new(symbols: &[u8; 32], pad: u8) -> Self {
        assert!(pad.is_ascii(), "pad must be ASCII");
        let mut reverse = [INVALID; 256];

        let mut i = 0;
        while i < 32 {
            let symbol = symbols[i];
            assert!(symbol.is_ascii(), "symbols must be ASCII");
            assert!(symbol != pad, "pad must not be a symbol");
            assert!(reverse[symbol as usize] == INVALID, "symbols must be distinct");
            reverse[symbol as usize] = i as u8;
            i += 1;
        }

        Self { symbols: *symbols, reverse, pad }
    }

    /// Symbol for a 5-bit value. Only the low five bits of `value` are used.
    #[inline(always)]
    pub const fn symbol(&self, value: u8) -> u8 {
        self.symbols[(value & 0x1F) as usize]
    }

    /// 5-bit value of `byte`, or `None` if it is not one of the 32 symbols.
    #[inline(always)]
    pub const fn value(&self, byte: u8) -> Option<u8> {
        match self.reverse[byte as usize] {
            INVALID => None,
            value => Some(value),
        }
    }

    #[inline]
    pub const fn contains(&self, byte: u8) -> bool {
        self.reverse[byte as usize] != INVALID
    }

    #[inline]
    pub const fn pad(&self) -> u8 {
        self.pad
    }
}

impl std::fmt::Debug for Alphabet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The reverse table is derived data and 256 entries long.
        f.debug_struct("Alphabet")
            .field("symbols", &String::from_utf8_lossy(&self.symbols))
            .field("pad", &char::from(self.pad))
            .finish()
    }
}
