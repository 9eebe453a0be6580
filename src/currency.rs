//! Money amounts typed right-to-left.
//!
//! Digits fill the amount from the cents up, the way a cash register or a
//! banking app does: typing `1`, `2`, `3` shows `$0.01`, `$0.12`, `$1.23`.
//! The last two digits are always the decimal part; everything before them is
//! the integer part, grouped in threes from the right.

/// Symbol and separators of one currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyStyle {
    /// Written before the amount, including any trailing space.
    pub symbol: &'static str,
    /// Between groups of three integer digits.
    pub thousands: &'static str,
    /// Between the integer and decimal parts.
    pub decimal: &'static str,
}

/// `R$ 1.234,56`
pub const BRAZILIAN_REAL: CurrencyStyle = CurrencyStyle {
    symbol: "R$ ",
    thousands: ".",
    decimal: ",",
};

/// `$1,234.56`
pub const US_DOLLAR: CurrencyStyle = CurrencyStyle {
    symbol: "$",
    thousands: ",",
    decimal: ".",
};

/// `€1.234,56`
pub const EURO: CurrencyStyle = CurrencyStyle {
    symbol: "€",
    thousands: ".",
    decimal: ",",
};

impl CurrencyStyle {
    /// Renders raw input. Every non-digit is ignored; there is no length cap.
    ///
    /// # Example
    ///
    /// ```
    /// use keymask::currency::US_DOLLAR;
    ///
    /// assert_eq!(US_DOLLAR.render(""), "");
    /// assert_eq!(US_DOLLAR.render("5"), "$0.05");
    /// assert_eq!(US_DOLLAR.render("123456"), "$1,234.56");
    /// assert_eq!(US_DOLLAR.render("$1,234.56"), "$1,234.56");
    /// ```
    pub fn render(&self, raw: &str) -> String {
        let digits: Vec<char> = raw.chars().filter(char::is_ascii_digit).collect();
        if digits.is_empty() {
            return String::new();
        }

        let split = digits.len().saturating_sub(2);
        let (integer, decimal) = digits.split_at(split);

        let mut result = String::with_capacity(self.symbol.len() + digits.len() * 2 + 4);
        result.push_str(self.symbol);
        if integer.is_empty() {
            result.push('0');
        } else {
            push_grouped(&mut result, integer, self.thousands);
        }
        result.push_str(self.decimal);
        for _ in decimal.len()..2 {
            result.push('0');
        }
        result.extend(decimal);
        result
    }
}

/// Appends `digits` with `separator` between groups of three, counted from
/// the right.
fn push_grouped(out: &mut String, digits: &[char], separator: &str) {
    let len = digits.len();
    for (i, &c) in digits.iter().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(c);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(BRAZILIAN_REAL.render(""), "");
        assert_eq!(BRAZILIAN_REAL.render("R$ ,"), "");
    }

    #[test]
    fn test_cents_only() {
        assert_eq!(US_DOLLAR.render("5"), "$0.05");
        assert_eq!(US_DOLLAR.render("50"), "$0.50");
        assert_eq!(EURO.render("7"), "€0,07");
    }

    #[test]
    fn test_grouping() {
        assert_eq!(US_DOLLAR.render("100"), "$1.00");
        assert_eq!(US_DOLLAR.render("123456"), "$1,234.56");
        assert_eq!(US_DOLLAR.render("12345678"), "$123,456.78");
        assert_eq!(US_DOLLAR.render("123456789"), "$1,234,567.89");
        assert_eq!(BRAZILIAN_REAL.render("123456"), "R$ 1.234,56");
        assert_eq!(EURO.render("100000000"), "€1.000.000,00");
    }

    #[test]
    fn test_leading_zeros_are_kept() {
        assert_eq!(US_DOLLAR.render("0005"), "$00.05");
        assert_eq!(US_DOLLAR.render("000123"), "$0,001.23");
    }

    #[test]
    fn test_reformatting_is_stable() {
        let once = BRAZILIAN_REAL.render("98765432");
        assert_eq!(once, "R$ 987.654,32");
        assert_eq!(BRAZILIAN_REAL.render(&once), once);
    }

    #[test]
    fn test_no_length_cap() {
        let amount = US_DOLLAR.render(&"1".repeat(20));
        assert_eq!(amount, "$111,111,111,111,111,111.11");
    }
}
