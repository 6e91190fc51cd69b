/// Digit-group separator (U+00A0 NO-BREAK SPACE).
pub const GROUP_SEPARATOR: char = '\u{a0}';
/// Currency glyph appended to every price.
pub const CURRENCY: char = '₽';
/// Marker appended to shortened text.
pub const ELLIPSIS: char = '…';

/// Display form of a price: the integer part grouped by three from the right, then the currency.
///
/// The fraction is truncated, never rounded. Negative and non-finite inputs display as zero;
/// validation rejects them before rendering.
pub fn format_price(amount: f64) -> String {
    let digits = if amount.is_finite() && amount >= 1.0 {
        format!("{:.0}", amount.trunc())
    } else {
        "0".to_owned()
    };
    let mut out = String::with_capacity(digits.len() * 2 + 4);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i).is_multiple_of(3) {
            out.push(GROUP_SEPARATOR);
        }
        out.push(ch);
    }
    out.push(' ');
    out.push(CURRENCY);
    out
}

/// Keep at most `max_chars` characters, replacing the tail with an ellipsis when shortened.
pub fn ellipsize(text: &str, max_chars: usize) -> String {
    let count = text.chars().count();
    if count <= max_chars {
        return text.to_owned();
    }
    if max_chars == 0 {
        return String::new();
    }
    let mut out: String = text.chars().take(max_chars - 1).collect();
    let trimmed = out.trim_end().len();
    out.truncate(trimmed);
    out.push(ELLIPSIS);
    out
}

#[cfg(test)]
#[path = "../../tests/unit/canvas/format.rs"]
mod tests;
