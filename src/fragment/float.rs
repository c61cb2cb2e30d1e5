use crate::fragment::{decimal, Fragment};

/// Number of fractional digits emitted after the decimal point.
pub(crate) const FRACTION_DIGITS: usize = 5;

/// Magnitudes below this bound are rescaled into `[1, 10)`.
const NORMALIZE_BELOW: f32 = 0.001;
/// Magnitudes at or above this bound are rescaled into `[1, 10)`.
const NORMALIZE_AT: f32 = 100_000.0;

/// Formats `value` as fixed-point decimal text.
///
/// The sign is peeled first. A nonzero magnitude outside
/// `[NORMALIZE_BELOW, NORMALIZE_AT)` is then scaled by powers of ten into
/// `[1, 10)` and the scale recorded as a trailing `*10^exp`; zero is never
/// rescaled. Exactly [`FRACTION_DIGITS`] fractional digits follow the point,
/// produced by repeated multiply-by-ten truncation, so the result is
/// truncated rather than rounded. Non-finite values come out as `NaN`,
/// `Infinity` and `-Infinity`.
pub(crate) fn fixed_point(value: f32) -> Fragment {
    let mut out = Fragment::new();

    if value.is_nan() {
        out.extend_from_slice(b"NaN");
        return out;
    }

    let mut f = value;
    if f < 0.0 {
        out.push(b'-');
        f = -f;
    }

    if f.is_infinite() {
        out.extend_from_slice(b"Infinity");
        return out;
    }

    let mut exponent = 0i32;
    if f != 0.0 && (f < NORMALIZE_BELOW || f >= NORMALIZE_AT) {
        while f >= 10.0 {
            exponent += 1;
            f /= 10.0;
        }
        while f < 1.0 {
            exponent -= 1;
            f *= 10.0;
        }
    }

    out.extend_from_slice(&decimal::signed_decimal(f as i32));
    out.push(b'.');
    for _ in 0..FRACTION_DIGITS {
        f -= f as i32 as f32;
        f *= 10.0;
        let digit = f as i32;
        debug_assert!((0..=9).contains(&digit), "fraction digit out of range: {digit}");
        out.push(b'0' + digit as u8);
    }

    if exponent != 0 {
        out.extend_from_slice(b"*10^");
        out.extend_from_slice(&decimal::signed_decimal(exponent));
    }

    out
}

/// Formats `value` with the shortest digit run that parses back to the same
/// bits, via [`ryu`]. Non-finite spellings match [`fixed_point`].
pub(crate) fn shortest(value: f32) -> Fragment {
    let mut out = Fragment::new();

    if value.is_nan() {
        out.extend_from_slice(b"NaN");
        return out;
    }
    if value.is_infinite() {
        if value < 0.0 {
            out.push(b'-');
        }
        out.extend_from_slice(b"Infinity");
        return out;
    }

    let mut buf = ryu::Buffer::new();
    out.extend_from_slice(buf.format_finite(value).as_bytes());
    out
}
