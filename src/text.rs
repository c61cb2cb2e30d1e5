use std::borrow::Cow;
use std::fmt;
use std::str;
use std::sync::Arc;

use crate::error::Error;
use crate::fragment;

/// An immutable run of bytes holding text.
///
/// The content is usually UTF-8 but is not required to be: appending an
/// unpaired surrogate code unit through the builder produces bytes no `&str`
/// can hold. `Text` therefore exposes its content as bytes first and offers
/// fallible or lossy views for callers that need `str`.
///
/// Cloning is cheap; the bytes live behind an [`Arc`]. Equality, ordering and
/// hashing are byte-wise.
///
/// # Examples
///
/// ```
/// use bytetext::Text;
///
/// let text = Text::from("café");
/// assert_eq!(text.len(), 5);
/// assert_eq!(text.as_str()?, "café");
/// # Ok::<(), bytetext::Error>(())
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Text {
    bytes: Arc<[u8]>,
}

impl Text {
    /// The empty text.
    pub fn new() -> Self {
        Self::from_bytes(&[])
    }

    /// Copies `bytes` into a new text. No validation is performed.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            bytes: Arc::from(bytes),
        }
    }

    /// Length in bytes, not characters.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The byte at `index`, or `None` past the end.
    pub fn byte_at(&self, index: usize) -> Option<u8> {
        self.bytes.get(index).copied()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Borrows the content as `&str`, failing if it is not valid UTF-8.
    pub fn as_str(&self) -> crate::Result<&str> {
        str::from_utf8(&self.bytes).map_err(Error::from)
    }

    /// Borrows the content as `str` when valid, otherwise allocates with
    /// U+FFFD replacing each malformed sequence.
    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.bytes)
    }
}

impl Default for Text {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_string_lossy())
    }
}

impl fmt::Debug for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Text({:?})", self.to_string_lossy())
    }
}

impl From<&str> for Text {
    fn from(value: &str) -> Self {
        Self::from_bytes(value.as_bytes())
    }
}

impl From<String> for Text {
    fn from(value: String) -> Self {
        Self {
            bytes: Arc::from(value.into_bytes()),
        }
    }
}

impl From<&[u8]> for Text {
    fn from(value: &[u8]) -> Self {
        Self::from_bytes(value)
    }
}

impl From<Vec<u8>> for Text {
    fn from(value: Vec<u8>) -> Self {
        Self {
            bytes: Arc::from(value),
        }
    }
}

impl TryFrom<Text> for String {
    type Error = Error;

    fn try_from(text: Text) -> Result<Self, Error> {
        text.as_str().map(str::to_owned)
    }
}

impl AsRef<[u8]> for Text {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl PartialEq<str> for Text {
    fn eq(&self, other: &str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<&str> for Text {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<[u8]> for Text {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_bytes() == other
    }
}

/// Conversion into [`Text`], the hook behind
/// [`append_value`](crate::TextBuilder::append_value).
///
/// Primitive implementations render exactly like the dedicated `append_*`
/// method for the same type.
pub trait ToText {
    fn to_text(&self) -> Text;
}

impl ToText for Text {
    fn to_text(&self) -> Text {
        self.clone()
    }
}

impl ToText for str {
    fn to_text(&self) -> Text {
        Text::from(self)
    }
}

impl ToText for String {
    fn to_text(&self) -> Text {
        Text::from(self.as_str())
    }
}

impl ToText for bool {
    fn to_text(&self) -> Text {
        Text::from(if *self { "true" } else { "false" })
    }
}

impl ToText for i8 {
    fn to_text(&self) -> Text {
        i32::from(*self).to_text()
    }
}

impl ToText for i16 {
    fn to_text(&self) -> Text {
        i32::from(*self).to_text()
    }
}

impl ToText for i32 {
    fn to_text(&self) -> Text {
        Text::from_bytes(&fragment::decimal::signed_decimal(*self))
    }
}

impl ToText for f32 {
    fn to_text(&self) -> Text {
        Text::from_bytes(&fragment::float::fixed_point(*self))
    }
}

impl ToText for char {
    fn to_text(&self) -> Text {
        Text::from_bytes(&fragment::utf8::scalar(*self))
    }
}

impl<T: ToText + ?Sized> ToText for &T {
    fn to_text(&self) -> Text {
        (**self).to_text()
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use std::fmt;

    use serde::de::{self, Visitor};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::Text;

    impl Serialize for Text {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            match self.as_str() {
                Ok(valid) => serializer.serialize_str(valid),
                Err(_) => serializer.serialize_bytes(self.as_bytes()),
            }
        }
    }

    struct TextVisitor;

    impl<'de> Visitor<'de> for TextVisitor {
        type Value = Text;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            formatter.write_str("a string or byte sequence")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Text, E> {
            Ok(Text::from(value))
        }

        fn visit_string<E: de::Error>(self, value: String) -> Result<Text, E> {
            Ok(Text::from(value))
        }

        fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Text, E> {
            Ok(Text::from_bytes(value))
        }

        fn visit_byte_buf<E: de::Error>(self, value: Vec<u8>) -> Result<Text, E> {
            Ok(Text::from(value))
        }
    }

    impl<'de> Deserialize<'de> for Text {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Text, D::Error> {
            deserializer.deserialize_str(TextVisitor)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[rstest::rstest]
    fn test_bytes_and_length() {
        let text = Text::from("café");
        assert_eq!(text.len(), 5);
        assert!(!text.is_empty());
        assert_eq!(text.byte_at(0), Some(b'c'));
        assert_eq!(text.byte_at(3), Some(0xC3));
        assert_eq!(text.byte_at(4), Some(0xA9));
        assert_eq!(text.byte_at(5), None);
        assert_eq!(Text::new().len(), 0);
    }

    #[rstest::rstest]
    fn test_str_views_reject_malformed_bytes() {
        let valid = Text::from("ok");
        assert_eq!(valid.as_str().unwrap(), "ok");

        let broken = Text::from_bytes(&[b'a', 0xED, 0xA0, 0x80]);
        let err = broken.as_str().unwrap_err();
        assert_eq!(err.valid_up_to(), Some(1));
        // Maximal-subpart substitution: each of the three bytes is replaced.
        assert_eq!(broken.to_string_lossy(), "a\u{FFFD}\u{FFFD}\u{FFFD}");
        assert!(String::try_from(broken).is_err());
    }

    #[rstest::rstest]
    fn test_byte_wise_comparison() {
        assert_eq!(Text::from("abc"), Text::from_bytes(b"abc"));
        assert_eq!(Text::from("abc"), "abc");
        assert!(Text::from("abd") > Text::from("abc"));
        assert!(Text::from_bytes(&[0xFF]) > Text::from("z"));
    }

    #[rstest::rstest]
    fn test_primitive_to_text_renderings() {
        assert_eq!(42i32.to_text(), "42");
        assert_eq!((-3i8).to_text(), "-3");
        assert_eq!(i16::MIN.to_text(), "-32768");
        assert_eq!(true.to_text(), "true");
        assert_eq!(1.5f32.to_text(), "1.50000");
        assert_eq!('é'.to_text(), "é");
        assert_eq!("abc".to_text(), "abc");
        assert_eq!(String::from("owned").to_text(), "owned");
    }
}
