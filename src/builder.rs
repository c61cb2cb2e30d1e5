use std::fmt;

use crate::fragment;
use crate::options::{BuilderOptions, Growth};
use crate::text::{Text, ToText};

/// Bytes substituted when an absent text is appended.
const NULL_LITERAL: &[u8] = b"null";

/// An append-only accumulator of text bytes.
///
/// Every `append_*` method renders its argument into the buffer and returns
/// `&mut Self`, so calls chain:
///
/// ```
/// use bytetext::TextBuilder;
///
/// let mut builder = TextBuilder::new();
/// builder
///     .append_str("sensor ")
///     .append_i32(3)
///     .append_str(" ready: ")
///     .append_bool(true);
/// assert_eq!(builder.to_text(), "sensor 3 ready: true");
/// ```
///
/// Appending never fails. Content that is not valid UTF-8, such as an
/// unpaired surrogate from [`append_code_unit`](Self::append_code_unit), is
/// carried as raw bytes and only surfaces when the materialized [`Text`] is
/// viewed as `str`.
///
/// By default every append reallocates the buffer to exactly the combined
/// length. [`Growth::Amortized`] keeps spare capacity instead; the two modes
/// produce identical bytes.
pub struct TextBuilder {
    bytes: Vec<u8>,
    options: BuilderOptions,
}

impl TextBuilder {
    /// Creates an empty builder with [`Growth::Exact`].
    pub fn new() -> Self {
        Self::with_options(BuilderOptions::default())
    }

    pub fn with_options(options: BuilderOptions) -> Self {
        Self {
            bytes: Vec::new(),
            options,
        }
    }

    /// Appends raw bytes. Every other appender funnels through here.
    ///
    /// Under [`Growth::Exact`] a fresh buffer of exactly the combined length
    /// is filled and then swapped in, so the builder is never observable in a
    /// half-appended state. Under [`Growth::Amortized`] the bytes are
    /// appended in place.
    pub fn append_bytes(&mut self, addition: &[u8]) -> &mut Self {
        match self.options.growth {
            Growth::Exact => {
                let mut grown = Vec::with_capacity(self.bytes.len() + addition.len());
                grown.extend_from_slice(&self.bytes);
                grown.extend_from_slice(addition);
                self.bytes = grown;
            }
            Growth::Amortized => self.bytes.extend_from_slice(addition),
        }
        self
    }

    /// Appends `text`, or the literal `null` when absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use bytetext::{Text, TextBuilder};
    ///
    /// let mut builder = TextBuilder::new();
    /// builder.append_text(Some(&Text::from("id="))).append_text(None);
    /// assert_eq!(builder.to_text(), "id=null");
    /// ```
    pub fn append_text(&mut self, text: Option<&Text>) -> &mut Self {
        match text {
            Some(text) => self.append_bytes(text.as_bytes()),
            None => self.append_bytes(NULL_LITERAL),
        }
    }

    /// Appends the bytes of `s`.
    pub fn append_str(&mut self, s: &str) -> &mut Self {
        self.append_bytes(s.as_bytes())
    }

    /// Appends one 16-bit code unit as UTF-8, one to three bytes.
    ///
    /// An unpaired surrogate (`0xD800..=0xDFFF`) is encoded like any other
    /// unit in the three-byte range; the buffer then holds bytes that are not
    /// valid UTF-8, and [`Text::as_str`] on the result reports where.
    pub fn append_code_unit(&mut self, unit: u16) -> &mut Self {
        self.append_bytes(&fragment::utf8::code_unit(unit))
    }

    /// Appends any Unicode scalar as UTF-8, one to four bytes.
    pub fn append_char(&mut self, ch: char) -> &mut Self {
        self.append_bytes(&fragment::utf8::scalar(ch))
    }

    /// Appends `value` in decimal.
    ///
    /// # Examples
    ///
    /// ```
    /// use bytetext::TextBuilder;
    ///
    /// let mut builder = TextBuilder::new();
    /// builder.append_i32(-42).append_str("/").append_i32(0);
    /// assert_eq!(builder.to_text(), "-42/0");
    /// ```
    pub fn append_i32(&mut self, value: i32) -> &mut Self {
        self.append_bytes(&fragment::decimal::signed_decimal(value))
    }

    /// Appends `value` in decimal, widening to 32 bits first.
    pub fn append_i16(&mut self, value: i16) -> &mut Self {
        self.append_i32(i32::from(value))
    }

    /// Appends `value` in decimal, widening to 32 bits first.
    pub fn append_i8(&mut self, value: i8) -> &mut Self {
        self.append_i32(i32::from(value))
    }

    /// Appends `value` in decimal via [`itoa`].
    pub fn append_usize(&mut self, value: usize) -> &mut Self {
        let mut buf = itoa::Buffer::new();
        self.append_bytes(buf.format(value as u64).as_bytes())
    }

    /// Appends `true` or `false`.
    pub fn append_bool(&mut self, value: bool) -> &mut Self {
        self.append_bytes(if value { b"true" } else { b"false" })
    }

    /// Appends `value` as fixed-point decimal text.
    ///
    /// The rendering carries exactly five truncated fractional digits. A
    /// nonzero magnitude below `0.001` or at or above `100000` is rescaled
    /// into `[1, 10)` with a trailing `*10^exp` marker. NaN and the
    /// infinities render as `NaN`, `Infinity` and `-Infinity`. The whole
    /// rendering is staged first and committed as a single append.
    ///
    /// # Examples
    ///
    /// ```
    /// use bytetext::TextBuilder;
    ///
    /// let mut builder = TextBuilder::new();
    /// builder.append_f32(1.5);
    /// assert_eq!(builder.to_text(), "1.50000");
    ///
    /// let mut builder = TextBuilder::new();
    /// builder.append_f32(2500000.0);
    /// assert_eq!(builder.to_text(), "2.50000*10^6");
    /// ```
    pub fn append_f32(&mut self, value: f32) -> &mut Self {
        self.append_bytes(&fragment::float::fixed_point(value))
    }

    /// Appends `value` with the shortest decimal digits that parse back to
    /// the same bits, via [`ryu`]. Non-finite spellings match
    /// [`append_f32`](Self::append_f32).
    pub fn append_f32_shortest(&mut self, value: f32) -> &mut Self {
        self.append_bytes(&fragment::float::shortest(value))
    }

    /// Appends the [`ToText`] rendering of `value`.
    ///
    /// Unlike [`append_text`](Self::append_text) there is no absent case
    /// here; a caller holding an optional value picks its own policy first.
    ///
    /// # Examples
    ///
    /// ```
    /// use bytetext::{Text, TextBuilder, ToText};
    ///
    /// struct Celsius(i32);
    ///
    /// impl ToText for Celsius {
    ///     fn to_text(&self) -> Text {
    ///         let mut builder = TextBuilder::new();
    ///         builder.append_i32(self.0).append_str("°C");
    ///         builder.to_text()
    ///     }
    /// }
    ///
    /// let mut builder = TextBuilder::new();
    /// builder.append_str("outside: ").append_value(&Celsius(21));
    /// assert_eq!(builder.to_text(), "outside: 21°C");
    /// ```
    pub fn append_value<T: ToText + ?Sized>(&mut self, value: &T) -> &mut Self {
        let rendered = value.to_text();
        self.append_bytes(rendered.as_bytes())
    }

    /// Current length in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The accumulated bytes so far.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Materializes the current content as an immutable [`Text`].
    ///
    /// The builder is unchanged: calling this repeatedly yields equal values,
    /// and later appends behave as if it had never been called.
    pub fn to_text(&self) -> Text {
        Text::from_bytes(&self.bytes)
    }
}

impl Default for TextBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Write for TextBuilder {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.append_str(s);
        Ok(())
    }

    fn write_char(&mut self, ch: char) -> fmt::Result {
        self.append_char(ch);
        Ok(())
    }
}

impl fmt::Debug for TextBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextBuilder")
            .field("len", &self.bytes.len())
            .field("growth", &self.options.growth)
            .finish()
    }
}
