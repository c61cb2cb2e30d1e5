use crate::fragment::Fragment;

/// Formats `value` as decimal ASCII digits with a leading `-` for negatives.
///
/// The digit count is discovered by repeated division, the fragment is sized
/// exactly, and digits are filled back to front. The magnitude is taken as
/// `u32` before anything else, so `i32::MIN` needs no special case.
pub(crate) fn signed_decimal(value: i32) -> Fragment {
    let negative = value < 0;
    let magnitude = value.unsigned_abs();

    let mut len = 0usize;
    let mut scratch = magnitude;
    loop {
        len += 1;
        scratch /= 10;
        if scratch == 0 {
            break;
        }
    }
    if negative {
        len += 1;
    }

    let mut out = Fragment::from_elem(0, len);
    let mut cursor = len;
    let mut rest = magnitude;
    loop {
        cursor -= 1;
        out[cursor] = b'0' + (rest % 10) as u8;
        rest /= 10;
        if rest == 0 {
            break;
        }
    }
    if negative {
        out[0] = b'-';
    }
    out
}
