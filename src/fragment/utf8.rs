use crate::fragment::Fragment;

/// Encodes one 16-bit code unit as UTF-8.
///
/// Units below `0x80` take one byte, units below `0x800` two bytes, and the
/// rest of the 16-bit range three bytes. Surrogate code units
/// (`0xD800..=0xDFFF`) go through the three-byte arm unchanged; an unpaired
/// half therefore lands in the buffer as its WTF-8 spelling.
pub(crate) fn code_unit(unit: u16) -> Fragment {
    let cp = u32::from(unit);
    let mut out = Fragment::new();
    if cp < 0x80 {
        out.push(cp as u8);
    } else if cp < 0x800 {
        out.push((0xC0 | (cp >> 6)) as u8);
        out.push((0x80 | (cp & 0x3F)) as u8);
    } else {
        out.push((0xE0 | (cp >> 12)) as u8);
        out.push((0x80 | ((cp >> 6) & 0x3F)) as u8);
        out.push((0x80 | (cp & 0x3F)) as u8);
    }
    out
}

/// Encodes a full Unicode scalar value, extending the code unit table with a
/// four-byte arm for the astral planes.
pub(crate) fn scalar(ch: char) -> Fragment {
    let cp = u32::from(ch);
    if cp < 0x1_0000 {
        return code_unit(cp as u16);
    }
    let mut out = Fragment::new();
    out.push((0xF0 | (cp >> 18)) as u8);
    out.push((0x80 | ((cp >> 12) & 0x3F)) as u8);
    out.push((0x80 | ((cp >> 6) & 0x3F)) as u8);
    out.push((0x80 | (cp & 0x3F)) as u8);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[rstest::rstest]
    fn test_encoding_width_boundaries() {
        assert_eq!(code_unit(0x0000).as_slice(), &[0x00]);
        assert_eq!(code_unit(0x007F).as_slice(), &[0x7F]);
        assert_eq!(code_unit(0x0080).as_slice(), &[0xC2, 0x80]);
        assert_eq!(code_unit(0x07FF).as_slice(), &[0xDF, 0xBF]);
        assert_eq!(code_unit(0x0800).as_slice(), &[0xE0, 0xA0, 0x80]);
        assert_eq!(code_unit(0xFFFF).as_slice(), &[0xEF, 0xBF, 0xBF]);
    }

    #[rstest::rstest]
    fn test_three_byte_sequences() {
        assert_eq!(code_unit(0x20AC).as_slice(), &[0xE2, 0x82, 0xAC]);
        assert_eq!(code_unit(0xD800).as_slice(), &[0xED, 0xA0, 0x80]);
        assert_eq!(code_unit(0xDFFF).as_slice(), &[0xED, 0xBF, 0xBF]);
    }

    #[rstest::rstest]
    fn test_matches_std_encoding_outside_surrogates() {
        for cp in [0x41u32, 0x7F, 0x80, 0x7FF, 0x800, 0x20AC, 0xFFFD, 0xFFFF] {
            let ch = char::from_u32(cp).unwrap();
            let mut std_buf = [0u8; 4];
            let std_bytes = ch.encode_utf8(&mut std_buf).as_bytes();
            assert_eq!(code_unit(cp as u16).as_slice(), std_bytes);
        }
    }

    #[rstest::rstest]
    fn test_astral_scalars() {
        assert_eq!(scalar('\u{1F980}').as_slice(), &[0xF0, 0x9F, 0xA6, 0x80]);
        assert_eq!(scalar('A').as_slice(), b"A");
    }
}
