//! Stateless formatting helpers shared by the UI and the input masks.

use chrono::NaiveDate;

/// Format a value in integer cents as pt-BR currency.
///
/// `123456` becomes `R$ 1.234,56`.
pub fn format_money(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    let reais = abs / 100;
    let centavos = abs % 100;
    format!("{}R$ {},{:02}", sign, group_thousands(reais), centavos)
}

/// Format a date the pt-BR way: `dd/mm/aaaa`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_cents_as_currency() {
        assert_eq!(format_money(12345), "R$ 123,45");
        assert_eq!(format_money(123456789), "R$ 1.234.567,89");
        assert_eq!(format_money(5), "R$ 0,05");
        assert_eq!(format_money(0), "R$ 0,00");
    }

    #[test]
    fn formats_negative_amounts() {
        assert_eq!(format_money(-98700), "-R$ 987,00");
    }

    #[test]
    fn groups_thousands_with_dots() {
        assert_eq!(group_thousands(1), "1");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1.000");
        assert_eq!(group_thousands(1234567), "1.234.567");
    }

    #[test]
    fn formats_dates_day_first() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();
        assert_eq!(format_date(date), "07/08/2026");
    }
}
