//! Display color type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an invalid display color.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid display color: {reason}")]
pub struct InvalidColor {
    reason: &'static str,
}

/// A display color as six hexadecimal digits, e.g. `"4E76BA"`.
///
/// Transit feeds carry route colors in this bare RGB form, without a `#`
/// prefix. This type guarantees that any `Color` value is six uppercase
/// hex digits by construction.
///
/// # Examples
///
/// ```
/// use trip_labeler::domain::Color;
///
/// let blue = Color::parse("4E76BA").unwrap();
/// assert_eq!(blue.as_str(), "4E76BA");
///
/// // Lowercase input is accepted and canonicalized
/// assert_eq!(Color::parse("4e76ba").unwrap(), blue);
///
/// // Wrong length or non-hex digits are rejected
/// assert!(Color::parse("4E76B").is_err());
/// assert!(Color::parse("#4E76BA").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color([u8; 6]);

impl Color {
    /// Parse a color from a six-hex-digit string.
    ///
    /// Accepts either case; the stored form is uppercase.
    pub fn parse(s: &str) -> Result<Self, InvalidColor> {
        let bytes = s.as_bytes();

        if bytes.len() != 6 {
            return Err(InvalidColor {
                reason: "must be exactly 6 characters",
            });
        }

        let mut digits = [0u8; 6];
        for (i, &b) in bytes.iter().enumerate() {
            if !b.is_ascii_hexdigit() {
                return Err(InvalidColor {
                    reason: "must be hexadecimal digits 0-9, A-F",
                });
            }
            digits[i] = b.to_ascii_uppercase();
        }

        Ok(Color(digits))
    }

    /// Returns the color as a six-hex-digit string slice.
    pub fn as_str(&self) -> &str {
        // SAFETY: We only store ASCII hex digits
        std::str::from_utf8(&self.0).unwrap()
    }
}

impl TryFrom<String> for Color {
    type Error = InvalidColor;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Color::parse(&s)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.as_str().to_string()
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color({})", self.as_str())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
