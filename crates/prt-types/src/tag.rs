//! 128-bit foreign type tags.

use std::fmt;

/// Identifies a foreign type. Stored as four 32-bit words.
///
/// The all-zero tag is reserved for the built-in absent type. Uniqueness of
/// every other tag is the provider's responsibility.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct TypeTag {
    words: [u32; 4],
}

impl TypeTag {
    /// Tag of the built-in absent type.
    pub const ABSENT: Self = Self { words: [0; 4] };

    pub const fn from_words(words: [u32; 4]) -> Self {
        Self { words }
    }

    /// Split a 128-bit value into words, most significant first.
    pub const fn from_u128(value: u128) -> Self {
        Self {
            words: [
                (value >> 96) as u32,
                (value >> 64) as u32,
                (value >> 32) as u32,
                value as u32,
            ],
        }
    }

    #[inline]
    pub fn words(self) -> [u32; 4] {
        self.words
    }

    pub fn as_u128(self) -> u128 {
        self.words
            .iter()
            .fold(0u128, |acc, &w| (acc << 32) | u128::from(w))
    }

    /// Whether this is the reserved absent tag.
    #[inline]
    pub fn is_absent(self) -> bool {
        self.words == [0; 4]
    }
}

/// True iff every word of `tag` is zero.
#[inline]
pub fn is_absent_tag(tag: TypeTag) -> bool {
    tag.is_absent()
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.words;
        write!(f, "{a:08x}-{b:08x}-{c:08x}-{d:08x}")
    }
}
