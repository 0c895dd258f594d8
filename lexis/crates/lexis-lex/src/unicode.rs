//! Character classification and UTF-8 helpers for the scanners.

/// ASCII letter or digit or `_`: the identifier body of the built-in
/// grammars, and the set that may not directly follow a literal.
#[inline]
pub fn is_ascii_ident_body(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

#[inline]
pub fn is_ascii_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Value of `c` as a digit in `base` (2, 8, 10 or 16).
pub fn digit_value(c: char, base: u32) -> Option<u32> {
    match base {
        2 | 8 | 10 | 16 => c.to_digit(base),
        _ => None,
    }
}

#[inline]
pub fn hex_digit_value(c: char) -> Option<u32> {
    c.to_digit(16)
}

#[inline]
pub fn is_high_surrogate(unit: u32) -> bool {
    (0xD800..=0xDBFF).contains(&unit)
}

#[inline]
pub fn is_low_surrogate(unit: u32) -> bool {
    (0xDC00..=0xDFFF).contains(&unit)
}

/// Codepoint encoded by a UTF-16 surrogate pair.
pub fn combine_surrogates(high: u32, low: u32) -> u32 {
    0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00)
}

/// Append the UTF-8 encoding of `codepoint` to `buffer`.
///
/// Encodes whatever it is given; keeping surrogates and values above
/// U+10FFFF out is the caller's job.
pub fn append_utf8(buffer: &mut Vec<u8>, codepoint: u32) {
    if codepoint < 0x80 {
        buffer.push(codepoint as u8);
        return;
    }

    let (continuation_bytes, lead_marker) = if codepoint < 0x800 {
        (1, 0xC0)
    } else if codepoint < 0x10000 {
        (2, 0xE0)
    } else {
        (3, 0xF0)
    };

    buffer.push(lead_marker | (codepoint >> (6 * continuation_bytes)) as u8);
    for shift in (0..continuation_bytes).rev() {
        buffer.push(0x80 | ((codepoint >> (6 * shift)) & 0x3F) as u8);
    }
}
