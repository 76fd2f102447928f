/// Format `num` with commas between groups of three digits, counted from the right.
///
/// `1234567` becomes `"1,234,567"`; values below 1000 have no separator.
#[must_use]
pub fn format_number(num: u64) -> String {
    let digits = num.to_string();
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_numbers_have_no_separator() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(7), "7");
        assert_eq!(format_number(42), "42");
        assert_eq!(format_number(999), "999");
    }

    #[test]
    fn groups_of_three_from_the_right() {
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(12_345), "12,345");
        assert_eq!(format_number(123_456), "123,456");
        assert_eq!(format_number(1_234_567), "1,234,567");
        assert_eq!(format_number(u64::MAX), "18,446,744,073,709,551,615");
    }

    #[test]
    fn separator_count_matches_digit_count() {
        for n in [1_u64, 10, 100, 1_000, 10_000, 100_000, 1_000_000, 987_654_321_012] {
            let formatted = format_number(n);
            let digits = n.to_string().len();
            let commas = formatted.chars().filter(|c| *c == ',').count();
            assert_eq!(commas, (digits - 1) / 3, "{n}");
            assert_eq!(formatted.replace(',', ""), n.to_string());
            assert!(!formatted.starts_with(','));
        }
    }
}
