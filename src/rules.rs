//! The format rule table.
//!
//! Every [`FormatId`] maps to exactly one [`FormatRule`]: which characters
//! survive cleaning, how many of them are kept, and how they are laid out.
//! The table is a `static` built at compile time; adding a format means
//! adding one variant to [`FormatId`] and one entry here.

use crate::charset::CharacterClass;
use crate::currency::{CurrencyStyle, BRAZILIAN_REAL, EURO, US_DOLLAR};
use crate::date::{DateOrder, LongDate, DATE_DIGITS, ENGLISH_MONTHS, PORTUGUESE_MONTHS, SHORT_DATE};
use crate::segment::{self, Lead, Segment, SegmentPattern, Step};
use crate::{clock, network, FormatId};

/// How a cleaned value is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Renderer {
    /// One fixed-width pattern.
    Segmented(SegmentPattern),
    /// A pattern chosen by the value's length.
    Ladder(&'static [Step]),
    /// Uniform groups of `width` joined by `separator`.
    Chunked {
        /// Characters per group.
        width: usize,
        /// Written between groups.
        separator: &'static str,
    },
    /// Short date while typing, month name once complete.
    LongDate(&'static LongDate),
    /// Right-to-left money amount.
    Currency(&'static CurrencyStyle),
    /// Dot-delimited IPv4 address.
    Ipv4,
    /// Colon-delimited IPv6 address.
    Ipv6,
    /// `HH:MM` plus meridiem token.
    Time12h,
}

/// Cleaning and rendering rules of one format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatRule {
    /// The format this rule belongs to.
    pub id: FormatId,
    /// Characters kept by cleaning.
    pub class: CharacterClass,
    /// Most cleaned characters rendered, or `None` when the renderer bounds
    /// its own input.
    pub max_length: Option<usize>,
    /// Layout.
    pub renderer: Renderer,
}

impl FormatRule {
    /// Renders an already-cleaned value.
    pub fn render(&self, cleaned: &str) -> String {
        let cleaned = match self.max_length {
            Some(max) => truncate_chars(cleaned, max),
            None => cleaned,
        };
        match self.renderer {
            Renderer::Segmented(pattern) => pattern.render(cleaned),
            Renderer::Ladder(steps) => segment::render_ladder(steps, cleaned),
            Renderer::Chunked { width, separator } => {
                segment::render_chunked(cleaned, width, separator)
            }
            Renderer::LongDate(style) => style.render(cleaned),
            Renderer::Currency(style) => style.render(cleaned),
            Renderer::Ipv4 => network::render_ipv4(cleaned),
            Renderer::Ipv6 => network::render_ipv6(cleaned),
            Renderer::Time12h => clock::render_time_12h(cleaned),
        }
    }

    /// Returns true for the fixed-width and ladder masks.
    pub fn is_segmented(&self) -> bool {
        matches!(self.renderer, Renderer::Segmented(_) | Renderer::Ladder(_))
    }

    /// Every literal this format's mask can write around the cleaned
    /// characters.
    pub fn literals(&self) -> Vec<&'static str> {
        let mut literals: Vec<&'static str> = match self.renderer {
            Renderer::Segmented(pattern) => pattern.literals().collect(),
            Renderer::Ladder(steps) => steps.iter().flat_map(|s| s.pattern.literals()).collect(),
            Renderer::Chunked { separator, .. } => vec![separator],
            Renderer::LongDate(_) => SHORT_DATE.literals().collect(),
            Renderer::Currency(style) => vec![style.symbol, style.thousands, style.decimal],
            Renderer::Ipv4 => vec!["."],
            Renderer::Ipv6 => vec![":"],
            Renderer::Time12h => vec![":", " "],
        };
        literals.sort_unstable();
        literals.dedup();
        literals
    }
}

/// Slices `s` to its first `max` characters.
fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((index, _)) => &s[..index],
        None => s,
    }
}

/// Returns the rule for a format.
///
/// # Example
///
/// ```
/// use keymask::{rules, CharacterClass, FormatId};
///
/// let rule = rules::rule(FormatId::Cpf);
/// assert_eq!(rule.class, CharacterClass::DigitsOnly);
/// assert_eq!(rule.max_length, Some(11));
/// ```
#[inline]
pub fn rule(id: FormatId) -> &'static FormatRule {
    &RULES[id as usize]
}

/// Iterates over the whole table in [`FormatId::ALL`] order.
pub fn all() -> impl Iterator<Item = &'static FormatRule> {
    RULES.iter()
}

use CharacterClass::{AlphanumericUpper as ALNUM, DigitsOnly as DIGITS, HexUpper as HEX, Verbatim as VERBATIM};

/// Builds `&[Segment]` from `first sep width sep width ...`.
macro_rules! segments {
    ($first:literal $($sep:literal $width:literal)*) => {
        &[
            Segment { width: $first, separator: "" },
            $(Segment { width: $width, separator: $sep },)*
        ]
    };
}

const fn segmented(
    id: FormatId,
    class: CharacterClass,
    lead: Lead,
    segments: &'static [Segment],
) -> FormatRule {
    let pattern = SegmentPattern::new(lead, segments);
    FormatRule {
        id,
        class,
        max_length: Some(pattern.capacity()),
        renderer: Renderer::Segmented(pattern),
    }
}

const fn plain(id: FormatId, class: CharacterClass, segments: &'static [Segment]) -> FormatRule {
    segmented(id, class, Lead::None, segments)
}

const fn ladder(id: FormatId, class: CharacterClass, steps: &'static [Step]) -> FormatRule {
    FormatRule {
        id,
        class,
        max_length: Some(steps[steps.len() - 1].up_to),
        renderer: Renderer::Ladder(steps),
    }
}

const fn short_date(id: FormatId) -> FormatRule {
    FormatRule {
        id,
        class: DIGITS,
        max_length: Some(DATE_DIGITS),
        renderer: Renderer::Segmented(SHORT_DATE),
    }
}

const fn long_date(id: FormatId, style: &'static LongDate) -> FormatRule {
    FormatRule {
        id,
        class: DIGITS,
        max_length: Some(DATE_DIGITS),
        renderer: Renderer::LongDate(style),
    }
}

const fn free_form(id: FormatId, renderer: Renderer) -> FormatRule {
    FormatRule {
        id,
        class: VERBATIM,
        max_length: None,
        renderer,
    }
}

const PHONE_BR: &[Step] = &[
    Step {
        up_to: 7,
        pattern: SegmentPattern::new(Lead::Open("("), segments![2 ") " 5]),
    },
    Step {
        up_to: 10,
        pattern: SegmentPattern::new(Lead::Open("("), segments![2 ") " 4 "-" 4]),
    },
    Step {
        up_to: 11,
        pattern: SegmentPattern::new(Lead::Open("("), segments![2 ") " 5 "-" 4]),
    },
];

const PERSONNUMMER_SE: &[Step] = &[
    Step {
        up_to: 10,
        pattern: SegmentPattern::new(Lead::None, segments![6 "-" 4]),
    },
    Step {
        up_to: 12,
        pattern: SegmentPattern::new(Lead::None, segments![8 "-" 4]),
    },
];

const DATE_BR_FULL: LongDate = LongDate {
    months: &PORTUGUESE_MONTHS,
    order: DateOrder::DayMonthYear,
    first_joiner: " de ",
    second_joiner: " de ",
};

const DATE_US_FULL: LongDate = LongDate {
    months: &ENGLISH_MONTHS,
    order: DateOrder::MonthDayYear,
    first_joiner: " ",
    second_joiner: ", ",
};

const DATE_EU_FULL: LongDate = LongDate {
    months: &ENGLISH_MONTHS,
    order: DateOrder::DayMonthYear,
    first_joiner: " ",
    second_joiner: " ",
};

/// Indexed by `FormatId as usize`; the order must match the enum.
static RULES: [FormatRule; FormatId::COUNT] = [
    // Brazil
    plain(FormatId::Cpf, DIGITS, segments![3 "." 3 "." 3 "-" 2]),
    plain(FormatId::Rg, DIGITS, segments![2 "." 3 "." 3 "-" 1]),
    plain(FormatId::Cnpj, DIGITS, segments![2 "." 3 "." 3 "/" 4 "-" 2]),
    plain(FormatId::Cep, DIGITS, segments![5 "-" 3]),
    ladder(FormatId::PhoneBr, DIGITS, PHONE_BR),
    short_date(FormatId::DateBr),
    short_date(FormatId::DateBrShort),
    long_date(FormatId::DateBrFull, &DATE_BR_FULL),
    // United States
    plain(FormatId::Ssn, DIGITS, segments![3 "-" 2 "-" 4]),
    segmented(FormatId::PhoneUs, DIGITS, Lead::Open("("), segments![3 ") " 3 "-" 4]),
    short_date(FormatId::DateUs),
    short_date(FormatId::DateUsShort),
    long_date(FormatId::DateUsFull, &DATE_US_FULL),
    plain(FormatId::DriversLicenseUs, ALNUM, segments![13]),
    // Europe
    plain(FormatId::NifEs, DIGITS, segments![8 "-" 1]),
    plain(FormatId::NifPt, DIGITS, segments![3 " " 3 " " 3]),
    plain(FormatId::NieEs, DIGITS, segments![1 "-" 7 "-" 1]),
    plain(FormatId::NirFr, ALNUM, segments![1 " " 2 " " 2 " " 2 " " 3 " " 2 " " 1]),
    plain(FormatId::SteuerIdDe, ALNUM, segments![2 " " 3 " " 3 " " 2 " " 1]),
    plain(FormatId::CodiceFiscaleIt, ALNUM, segments![16]),
    plain(FormatId::NinoUk, ALNUM, segments![2 " " 2 " " 2 " " 2 " " 1]),
    plain(FormatId::BsnNl, ALNUM, segments![4 "." 2 "." 3]),
    plain(FormatId::NissBe, ALNUM, segments![2 "." 2 "." 2 "-" 3 "." 2]),
    plain(FormatId::AvsCh, DIGITS, segments![3 "." 4 "." 4 "." 2]),
    plain(FormatId::SvnrAt, DIGITS, segments![4 " " 2 " " 2 " " 2]),
    ladder(FormatId::PersonnummerSe, ALNUM, PERSONNUMMER_SE),
    plain(FormatId::FodselsnummerNo, ALNUM, segments![6 " " 5]),
    plain(FormatId::PeselPl, ALNUM, segments![11]),
    plain(FormatId::AmkaGr, DIGITS, segments![6 " " 5]),
    plain(FormatId::PassportEu, ALNUM, segments![9]),
    short_date(FormatId::DateEu),
    short_date(FormatId::DateEuShort),
    long_date(FormatId::DateEuFull, &DATE_EU_FULL),
    segmented(FormatId::PhoneEu, DIGITS, Lead::Open("+"), segments![2 " (" 2 ") " 4 "-" 5]),
    // Latin America
    plain(FormatId::CurpMx, ALNUM, segments![18]),
    plain(FormatId::RfcMx, ALNUM, segments![9 "-" 4]),
    plain(FormatId::CuitAr, DIGITS, segments![2 "-" 8 "-" 1]),
    plain(FormatId::CuitCuilAr, DIGITS, segments![2 "-" 8 "-" 1]),
    plain(FormatId::DniAr, DIGITS, segments![2 "." 3 "." 3]),
    plain(FormatId::RutCl, DIGITS, segments![1 "." 3 "." 3 "-" 2]),
    plain(FormatId::NitCo, DIGITS, segments![3 "." 3 "." 3 "-" 1]),
    plain(FormatId::CcCo, DIGITS, segments![2 "." 3 "." 3 "-" 2]),
    plain(FormatId::DniPe, DIGITS, segments![8]),
    plain(FormatId::RucPe, DIGITS, segments![10 "-" 1]),
    segmented(FormatId::CiVe, DIGITS, Lead::Replace("V-"), segments![1 "" 8 "-" 1]),
    plain(FormatId::CiEc, DIGITS, segments![10]),
    plain(FormatId::CiUy, DIGITS, segments![1 "." 3 "." 3 "-" 1]),
    plain(FormatId::CiPy, DIGITS, segments![7 "-" 1]),
    plain(FormatId::CiBo, DIGITS, segments![7 "-" 1]),
    segmented(FormatId::PhoneMx, DIGITS, Lead::Replace("+52 ("), segments![2 "" 2 ") " 4 "-" 4]),
    segmented(FormatId::PhoneAr, DIGITS, Lead::Replace("+54 ("), segments![2 "" 2 ") " 4 "-" 4]),
    segmented(FormatId::PhoneCl, DIGITS, Lead::Replace("+56 "), segments![2 "" 1 " " 4 "-" 4]),
    segmented(FormatId::PhoneCo, DIGITS, Lead::Replace("+57 "), segments![2 "" 3 " " 3 "-" 5]),
    // Asia
    plain(FormatId::MyNumberJp, DIGITS, segments![4 "-" 4 "-" 4]),
    plain(FormatId::IdCardCn, DIGITS, segments![6 " " 8 " " 4]),
    plain(FormatId::AadhaarIn, DIGITS, segments![4 " " 4 " " 4]),
    plain(FormatId::PanIn, ALNUM, segments![10]),
    segmented(FormatId::PhoneJp, DIGITS, Lead::Replace("+81 "), segments![2 "" 2 "-" 4 "-" 4]),
    segmented(FormatId::PhoneCn, DIGITS, Lead::Replace("+86 "), segments![2 "" 3 " " 4 " " 4]),
    segmented(FormatId::PhoneIn, DIGITS, Lead::Replace("+91 "), segments![2 "" 4 "-" 3 "-" 3]),
    // Other countries
    plain(FormatId::SinCa, DIGITS, segments![3 "-" 3 "-" 3]),
    plain(FormatId::TfnAu, DIGITS, segments![3 " " 3 " " 3]),
    plain(FormatId::AbnAu, DIGITS, segments![2 " " 3 " " 3 " " 2 " " 1]),
    plain(FormatId::IdZa, DIGITS, segments![6 " " 4 " " 2 " " 1]),
    segmented(FormatId::PhoneCa, DIGITS, Lead::Replace("+1 ("), segments![1 "" 3 ") " 3 "-" 4]),
    segmented(FormatId::PhoneAu, DIGITS, Lead::Replace("+61 "), segments![2 "" 1 " " 4 " " 4]),
    // Universal
    plain(FormatId::CreditCard, DIGITS, segments![4 " " 4 " " 4 " " 4]),
    FormatRule {
        id: FormatId::Iban,
        class: ALNUM,
        max_length: Some(34),
        renderer: Renderer::Chunked {
            width: 4,
            separator: " ",
        },
    },
    plain(FormatId::SwiftBic, ALNUM, segments![4 " " 2 " " 2 " " 3]),
    plain(FormatId::Isbn10, ALNUM, segments![1 "-" 3 "-" 5 "-" 1]),
    plain(FormatId::Isbn13, ALNUM, segments![3 "-" 1 "-" 3 "-" 5 "-" 1]),
    plain(FormatId::Uuid, ALNUM, segments![8 "-" 4 "-" 4 "-" 4 "-" 12]),
    plain(FormatId::MacAddress, HEX, segments![2 ":" 2 ":" 2 ":" 2 ":" 2 ":" 2]),
    free_form(FormatId::Ipv4, Renderer::Ipv4),
    free_form(FormatId::Ipv6, Renderer::Ipv6),
    plain(FormatId::Ean13, DIGITS, segments![13]),
    plain(FormatId::UpcA, DIGITS, segments![12]),
    // Currency
    free_form(FormatId::CurrencyBr, Renderer::Currency(&BRAZILIAN_REAL)),
    free_form(FormatId::CurrencyUs, Renderer::Currency(&US_DOLLAR)),
    free_form(FormatId::CurrencyEu, Renderer::Currency(&EURO)),
    // Time
    plain(FormatId::Time24h, DIGITS, segments![2 ":" 2 ":" 2]),
    free_form(FormatId::Time12h, Renderer::Time12h),
    // Other countries
    plain(FormatId::SnilsRu, DIGITS, segments![3 "-" 3 "-" 3 " " 2]),
    plain(FormatId::TcKimlikTr, DIGITS, segments![11]),
    plain(FormatId::TeudatZehutIl, DIGITS, segments![9]),
];
