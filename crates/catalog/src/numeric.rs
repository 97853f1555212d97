//! Number text as users type it and as the showroom prints it.

use std::borrow::Cow;

/// Drop `_` digit-group separators (`"1_000"`).
///
/// Each `_` must sit between two ASCII digits; anything else returns `None`
/// so the caller reports the text as unparsable.
pub(crate) fn strip_digit_separators(text: &str) -> Option<Cow<'_, str>> {
    if !text.contains('_') {
        return Some(Cow::Borrowed(text));
    }
    let bytes = text.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        if b != b'_' {
            continue;
        }
        let before = i.checked_sub(1).map(|j| bytes[j]);
        let after = bytes.get(i + 1).copied();
        if !matches!(before, Some(d) if d.is_ascii_digit())
            || !matches!(after, Some(d) if d.is_ascii_digit())
        {
            return None;
        }
    }
    Some(Cow::Owned(text.replace('_', "")))
}

/// Two-decimal amount. NaN prints lowercase, like the infinities do.
pub(crate) fn fmt_amount(value: f64, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    if value.is_nan() {
        return f.write_str("nan");
    }
    write!(f, "{value:.2}")
}
