//! Parsing and formatting of rupiah amounts.
//!
//! Wage amounts arrive as loosely typed text (`"Rp 4.500.000"`,
//! `"4,500,000"`, `" 4500000 "`) and are displayed with a period as the
//! thousands separator.

/// Extracts a whole amount from arbitrary text.
///
/// Every character that is not an ASCII digit is dropped and the remaining
/// digits are read as a base-10 number. Empty input, or input with no
/// digits, yields 0. Amounts too large for an `i64` saturate at
/// `i64::MAX`.
///
/// # Examples
///
/// ```
/// use wage_shortfall::calculation::sanitize;
///
/// assert_eq!(sanitize("Rp 1.234.000"), 1_234_000);
/// assert_eq!(sanitize("abc"), 0);
/// assert_eq!(sanitize(""), 0);
/// ```
pub fn sanitize(text: &str) -> i64 {
    text.bytes()
        .filter(u8::is_ascii_digit)
        .fold(0i64, |acc, digit| {
            acc.saturating_mul(10)
                .saturating_add(i64::from(digit - b'0'))
        })
}

/// Renders an amount with `.` as the thousands separator.
///
/// # Examples
///
/// ```
/// use wage_shortfall::calculation::format_with_dots;
///
/// assert_eq!(format_with_dots(4_901_798), "4.901.798");
/// assert_eq!(format_with_dots(-901_798), "-901.798");
/// assert_eq!(format_with_dots(0), "0");
/// ```
pub fn format_with_dots(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if amount < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}
