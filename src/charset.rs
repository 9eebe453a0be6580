//! Character classes and the cleaning stage.
//!
//! Cleaning drops every character a format cannot contain and normalizes
//! case. It never caps length; truncation belongs to rendering.

/// Which characters survive cleaning for a format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    /// Keep `0-9` only.
    DigitsOnly,
    /// Keep `[A-Za-z0-9]`, then uppercase.
    AlphanumericUpper,
    /// Keep `[0-9A-Fa-f]`, then uppercase.
    HexUpper,
    /// Keep everything. The renderer does its own filtering.
    Verbatim,
}

impl CharacterClass {
    /// Returns true if `c` survives cleaning under this class.
    ///
    /// For [`Verbatim`](Self::Verbatim) every character is kept by
    /// [`clean`](Self::clean), but only ASCII alphanumerics count as
    /// significant when positioning a caret.
    #[inline]
    pub fn is_significant(&self, c: char) -> bool {
        match self {
            Self::DigitsOnly => c.is_ascii_digit(),
            Self::AlphanumericUpper | Self::Verbatim => c.is_ascii_alphanumeric(),
            Self::HexUpper => c.is_ascii_hexdigit(),
        }
    }

    /// Cleans raw input.
    ///
    /// # Example
    ///
    /// ```
    /// use keymask::CharacterClass;
    ///
    /// assert_eq!(CharacterClass::DigitsOnly.clean("123.456-78"), "12345678");
    /// assert_eq!(CharacterClass::AlphanumericUpper.clean("ab-12 c"), "AB12C");
    /// assert_eq!(CharacterClass::HexUpper.clean("aa:bb:zz"), "AABB");
    /// assert_eq!(CharacterClass::Verbatim.clean("10:30 pm"), "10:30 pm");
    /// ```
    pub fn clean(&self, raw: &str) -> String {
        match self {
            Self::Verbatim => raw.to_string(),
            Self::DigitsOnly => raw.chars().filter(char::is_ascii_digit).collect(),
            Self::AlphanumericUpper | Self::HexUpper => raw
                .chars()
                .filter(|&c| self.is_significant(c))
                .map(|c| c.to_ascii_uppercase())
                .collect(),
        }
    }
}
