//! 12-hour clock times with a meridiem token.

/// Digits in `HHMM`.
pub const TIME_12H_DIGITS: usize = 4;

fn is_meridiem_letter(c: char) -> bool {
    matches!(c, 'A' | 'a' | 'P' | 'p' | 'M' | 'm')
}

/// Finds the first run of one or two meridiem letters (`A`, `P`, `M` in any
/// case) anywhere in the input and returns it uppercased.
pub fn meridiem(raw: &str) -> Option<String> {
    let mut chars = raw.chars().skip_while(|&c| !is_meridiem_letter(c));
    let first = chars.next()?;
    let mut token = String::with_capacity(2);
    token.push(first.to_ascii_uppercase());
    if let Some(second) = chars.next().filter(|&c| is_meridiem_letter(c)) {
        token.push(second.to_ascii_uppercase());
    }
    Some(token)
}

/// Renders `HH:MM` followed by the meridiem token.
///
/// The token is appended after a space no matter where it was typed; the
/// digits are taken in order, capped at four.
///
/// # Example
///
/// ```
/// use keymask::clock::render_time_12h;
///
/// assert_eq!(render_time_12h("1030pm"), "10:30 PM");
/// assert_eq!(render_time_12h("am 0945"), "09:45 AM");
/// assert_eq!(render_time_12h("103"), "10:3");
/// ```
pub fn render_time_12h(raw: &str) -> String {
    let digits: String = raw
        .chars()
        .filter(char::is_ascii_digit)
        .take(TIME_12H_DIGITS)
        .collect();

    let mut result = String::with_capacity(digits.len() + 4);
    if digits.len() <= 2 {
        result.push_str(&digits);
    } else {
        let (hours, minutes) = digits.split_at(2);
        result.push_str(hours);
        result.push(':');
        result.push_str(minutes);
    }

    if let Some(token) = meridiem(raw) {
        result.push(' ');
        result.push_str(&token);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meridiem() {
        assert_eq!(meridiem("10:30 pm").as_deref(), Some("PM"));
        assert_eq!(meridiem("10:30 a").as_deref(), Some("A"));
        assert_eq!(meridiem("Am pm").as_deref(), Some("AM"));
        assert_eq!(meridiem("mAP").as_deref(), Some("MA"));
        assert_eq!(meridiem("10:30"), None);
        assert_eq!(meridiem(""), None);
    }

    #[test]
    fn test_digits_only() {
        assert_eq!(render_time_12h(""), "");
        assert_eq!(render_time_12h("1"), "1");
        assert_eq!(render_time_12h("10"), "10");
        assert_eq!(render_time_12h("103"), "10:3");
        assert_eq!(render_time_12h("1030"), "10:30");
        assert_eq!(render_time_12h("103045"), "10:30");
    }

    #[test]
    fn test_with_meridiem() {
        assert_eq!(render_time_12h("10:30 pm"), "10:30 PM");
        assert_eq!(render_time_12h("9a"), "9 A");
        assert_eq!(render_time_12h("pm"), " PM");
    }

    #[test]
    fn test_token_position_does_not_matter() {
        assert_eq!(render_time_12h("p1m030"), "10:30 P");
        assert_eq!(render_time_12h("PM 11:59"), "11:59 PM");
    }

    #[test]
    fn test_reformatting_is_stable() {
        let once = render_time_12h("0745am");
        assert_eq!(once, "07:45 AM");
        assert_eq!(render_time_12h(&once), once);
    }
}
