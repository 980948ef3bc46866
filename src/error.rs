/// Result alias for codec operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The input reference was absent.
    #[error("input is absent")]
    NullInput,
    /// A character outside the alphabet was found before the trailing padding.
    /// `position` is the byte offset of `character` in the input string.
    #[error("invalid base32 character {character:?} at position {position}")]
    InvalidCharacter { character: char, position: usize },
}
