//! Thousands separators

use std::fmt::Display;

use crate::regex;

const SEPARATOR: char = ',';

/// Write a number with `,` between every group of three integer digits
///
/// Only the integer part is grouped. The sign, fractional part and exponent
/// are kept as they are, and text that does not start like a number is
/// returned unchanged.
///
/// ```
/// use tintshade::delimit;
/// assert_eq!(delimit(1234567), "1,234,567");
/// assert_eq!(delimit(-1000), "-1,000");
/// assert_eq!(delimit(1234.5678), "1,234.5678");
/// assert_eq!(delimit("n/a"), "n/a");
/// ```
pub fn delimit(number: impl Display) -> String {
    let s = number.to_string();
    let re = regex!(r"\A([+-]?)([0-9]+)(.*)\z");
    let Some(caps) = re.captures(&s) else {
        return s;
    };

    let sign = &caps[1];
    let digits = &caps[2];
    let rest = &caps[3];

    let mut out = String::with_capacity(s.len() + digits.len() / 3);
    out.push_str(sign);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(SEPARATOR);
        }
        out.push(c);
    }
    out.push_str(rest);
    out
}
