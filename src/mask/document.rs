//! CPF/CNPJ progressive mask.
//!
//! The punctuation is inserted by a fixed sequence of first-occurrence
//! regex replacements over the bare digits, carried over unchanged from
//! the web build. That sequence is the ground truth for partially typed
//! values: an 11-digit value reads `000.000.000-00`, anything longer
//! switches to `00.000.000/0000-00`, and shorter values get however much
//! punctuation the replacements manage to place. No validation happens
//! here; a masked value is still just what the user typed.

use regex::Regex;
use std::sync::OnceLock;

use crate::mask::strip_digits;

static CPF_STEPS: OnceLock<[Regex; 3]> = OnceLock::new();
static CNPJ_STEPS: OnceLock<[Regex; 4]> = OnceLock::new();

/// Re-render an identification field from whatever it currently holds.
pub fn mask_document(raw: &str) -> String {
    let digits = strip_digits(raw);
    if digits.len() <= 11 {
        mask_cpf(&digits)
    } else {
        mask_cnpj(&digits)
    }
}

fn mask_cpf(digits: &str) -> String {
    let steps = CPF_STEPS.get_or_init(|| {
        [
            Regex::new(r"(\d{3})(\d)").unwrap(),
            Regex::new(r"(\d{3})(\d)").unwrap(),
            Regex::new(r"(\d{3})(\d{1,2})$").unwrap(),
        ]
    });
    let value = steps[0].replace(digits, "${1}.${2}");
    let value = steps[1].replace(&value, "${1}.${2}");
    steps[2].replace(&value, "${1}-${2}").into_owned()
}

fn mask_cnpj(digits: &str) -> String {
    let steps = CNPJ_STEPS.get_or_init(|| {
        [
            Regex::new(r"^(\d{2})(\d)").unwrap(),
            Regex::new(r"^(\d{2})\.(\d{3})(\d)").unwrap(),
            Regex::new(r"\.(\d{3})(\d)").unwrap(),
            Regex::new(r"(\d{4})(\d)").unwrap(),
        ]
    });
    let value = steps[0].replace(digits, "${1}.${2}");
    let value = steps[1].replace(&value, "${1}.${2}.${3}");
    let value = steps[2].replace(&value, ".${1}/${2}");
    steps[3].replace(&value, "${1}-${2}").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eleven_digits_format_as_cpf() {
        assert_eq!(mask_document("12345678901"), "123.456.789-01");
    }

    #[test]
    fn fourteen_digits_format_as_cnpj() {
        assert_eq!(mask_document("12345678901234"), "12.345.678/9012-34");
        assert_eq!(mask_document("12345678000195"), "12.345.678/0001-95");
    }

    #[test]
    fn partial_cpf_gains_punctuation_progressively() {
        assert_eq!(mask_document("1"), "1");
        assert_eq!(mask_document("123"), "123");
        assert_eq!(mask_document("1234"), "123.4");
        assert_eq!(mask_document("1234567"), "123.456.7");
        // no dash until a tenth digit shows up
        assert_eq!(mask_document("123456789"), "123.456.789");
        assert_eq!(mask_document("1234567890"), "123.456.789-0");
    }

    #[test]
    fn partial_cnpj_gains_punctuation_progressively() {
        assert_eq!(mask_document("123456789012"), "12.345.678/9012");
        assert_eq!(mask_document("1234567890123"), "12.345.678/9012-3");
    }

    #[test]
    fn ignores_anything_that_is_not_a_digit() {
        assert_eq!(mask_document("123.456.789-01"), "123.456.789-01");
        assert_eq!(mask_document("12a345b678c901"), "123.456.789-01");
    }
}
