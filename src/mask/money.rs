//! Monetary mask: digits in, pt-BR currency out.

use crate::format::format_money;
use crate::mask::strip_digits;

/// Re-render a monetary field from whatever it currently holds.
///
/// Non-digits are stripped and the remainder is read as integer cents, so
/// typing `12345` displays `R$ 123,45`. A field that holds no digits at
/// all renders as zero, matching the web build.
pub fn mask_money(raw: &str) -> String {
    let digits = strip_digits(raw);
    let cents = digits.parse::<i64>().unwrap_or(0);
    format_money(cents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_digits_as_cents() {
        assert_eq!(mask_money("12345"), "R$ 123,45");
        assert_eq!(mask_money("7"), "R$ 0,07");
    }

    #[test]
    fn strips_existing_punctuation_before_reformatting() {
        assert_eq!(mask_money("R$ 123,45"), "R$ 123,45");
        assert_eq!(mask_money("R$ 1.234,56"), "R$ 1.234,56");
    }

    #[test]
    fn renders_zero_when_no_digits_remain() {
        assert_eq!(mask_money("abc"), "R$ 0,00");
        assert_eq!(mask_money("R$ ,"), "R$ 0,00");
    }
}
