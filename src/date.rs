//! Long-form dates with month names.
//!
//! While the user is still typing, a long date looks exactly like the short
//! `DD/MM/YYYY` mask. Once all eight digits are in and the month is real, it
//! is re-rendered with the month spelled out:
//!
//! ```
//! use keymask::date::{LongDate, DateOrder, ENGLISH_MONTHS};
//!
//! const US: LongDate = LongDate {
//!     months: &ENGLISH_MONTHS,
//!     order: DateOrder::MonthDayYear,
//!     first_joiner: " ",
//!     second_joiner: ", ",
//! };
//!
//! assert_eq!(US.render("1225"), "12/25");
//! assert_eq!(US.render("12252024"), "December 25, 2024");
//! assert_eq!(US.render("13252024"), "13/25/2024");
//! ```

use crate::segment::{Lead, Segment, SegmentPattern};

/// `DD/MM/YYYY` or `MM/DD/YYYY`, depending on which digits the user types
/// first.
pub const SHORT_DATE: SegmentPattern = SegmentPattern::new(
    Lead::None,
    &[
        Segment { width: 2, separator: "" },
        Segment { width: 2, separator: "/" },
        Segment { width: 4, separator: "/" },
    ],
);

/// Digits in a complete date.
pub const DATE_DIGITS: usize = 8;

/// English month names.
pub const ENGLISH_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Portuguese month names.
pub const PORTUGUESE_MONTHS: [&str; 12] = [
    "Janeiro",
    "Fevereiro",
    "Março",
    "Abril",
    "Maio",
    "Junho",
    "Julho",
    "Agosto",
    "Setembro",
    "Outubro",
    "Novembro",
    "Dezembro",
];

/// Which of the first two digit pairs is the month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateOrder {
    /// `DDMMYYYY`, rendered `{day}{first}{Month}{second}{year}`.
    DayMonthYear,
    /// `MMDDYYYY`, rendered `{Month}{first}{day}{second}{year}`.
    MonthDayYear,
}

/// Locale description of a long date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LongDate {
    /// Month names, January first.
    pub months: &'static [&'static str; 12],
    /// Digit order.
    pub order: DateOrder,
    /// Text between the first and second components.
    pub first_joiner: &'static str,
    /// Text between the second component and the year.
    pub second_joiner: &'static str,
}

impl LongDate {
    /// Renders a cleaned digit string.
    pub fn render(&self, cleaned: &str) -> String {
        let chars: Vec<char> = cleaned.chars().take(DATE_DIGITS).collect();
        if chars.len() < DATE_DIGITS {
            return SHORT_DATE.render(cleaned);
        }

        let first: String = chars[..2].iter().collect();
        let second: String = chars[2..4].iter().collect();
        let year: String = chars[4..].iter().collect();
        let (day, month) = match self.order {
            DateOrder::DayMonthYear => (first, second),
            DateOrder::MonthDayYear => (second, first),
        };

        match self.month_name(&month) {
            Some(name) => match self.order {
                DateOrder::DayMonthYear => format!(
                    "{day}{}{name}{}{year}",
                    self.first_joiner, self.second_joiner
                ),
                DateOrder::MonthDayYear => format!(
                    "{name}{}{day}{}{year}",
                    self.first_joiner, self.second_joiner
                ),
            },
            None => SHORT_DATE.render(cleaned),
        }
    }

    /// Name of a 1-based two-digit month, or `None` outside `01..=12`.
    fn month_name(&self, month: &str) -> Option<&'static str> {
        let number: usize = month.parse().ok()?;
        number
            .checked_sub(1)
            .and_then(|index| self.months.get(index))
            .copied()
    }
}
