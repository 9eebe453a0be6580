//! Fixed-width segmented masks.
//!
//! A [`SegmentPattern`] is an ordered list of [`Segment`]s, each consuming a
//! fixed number of cleaned characters and optionally preceded by a separator:
//!
//! ```text
//! CPF   3 "." 3 "." 3 "-" 2   12345678901  ->  123.456.789-01
//! ```
//!
//! Rendering stops as soon as the input runs out, so a partial value never
//! carries a dangling separator:
//!
//! ```
//! use keymask::segment::{Lead, Segment, SegmentPattern};
//!
//! const CPF: SegmentPattern = SegmentPattern::new(
//!     Lead::None,
//!     &[
//!         Segment { width: 3, separator: "" },
//!         Segment { width: 3, separator: "." },
//!         Segment { width: 3, separator: "." },
//!         Segment { width: 2, separator: "-" },
//!     ],
//! );
//!
//! assert_eq!(CPF.render("1234"), "123.4");
//! assert_eq!(CPF.render("123456"), "123.456");
//! assert_eq!(CPF.render("12345678901"), "123.456.789-01");
//! ```
//!
//! The first segment never gets a separator. Instead a pattern can carry a
//! [`Lead`]: a literal written in front of the first segment (`(11) 9...`) or
//! one that stands in for it (`+52 (55) ...`, `V-12345678`), shown only once
//! the value spills past the first segment.

/// One fixed-width slice of a mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    /// Number of cleaned characters consumed.
    pub width: usize,
    /// Emitted before the segment's first character. Ignored on the first
    /// segment of a pattern.
    pub separator: &'static str,
}

/// Decoration of the first segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lead {
    /// No decoration.
    None,
    /// Literal written before the first segment once input extends past it.
    Open(&'static str),
    /// Literal written instead of the first segment once input extends past
    /// it. The first segment's characters are consumed but not shown.
    Replace(&'static str),
}

/// A complete fixed-width mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentPattern {
    /// First-segment decoration.
    pub lead: Lead,
    /// Segments in order.
    pub segments: &'static [Segment],
}

impl SegmentPattern {
    /// Creates a pattern.
    pub const fn new(lead: Lead, segments: &'static [Segment]) -> Self {
        Self { lead, segments }
    }

    /// Sum of all segment widths: the most cleaned characters the pattern
    /// can show.
    pub const fn capacity(&self) -> usize {
        let mut total = 0;
        let mut i = 0;
        while i < self.segments.len() {
            total += self.segments[i].width;
            i += 1;
        }
        total
    }

    /// Renders a cleaned value, truncating it to [`capacity`](Self::capacity).
    pub fn render(&self, cleaned: &str) -> String {
        let chars: Vec<char> = cleaned.chars().take(self.capacity()).collect();
        let total = chars.len();

        let spills = self
            .segments
            .first()
            .is_some_and(|first| total > first.width);

        let mut result = String::with_capacity(total * 2);
        let mut pos = 0;

        for (i, segment) in self.segments.iter().enumerate() {
            if pos >= total {
                break;
            }
            let end = (pos + segment.width).min(total);

            if i == 0 {
                match self.lead {
                    Lead::Open(text) if spills => {
                        result.push_str(text);
                        result.extend(&chars[pos..end]);
                    }
                    Lead::Replace(text) if spills => result.push_str(text),
                    _ => result.extend(&chars[pos..end]),
                }
            } else {
                result.push_str(segment.separator);
                result.extend(&chars[pos..end]);
            }

            pos = end;
        }

        result
    }

    /// Iterates over every separator and lead literal of the pattern.
    pub fn literals(&self) -> impl Iterator<Item = &'static str> + '_ {
        let lead = match self.lead {
            Lead::None => None,
            Lead::Open(text) | Lead::Replace(text) => Some(text),
        };
        lead.into_iter().chain(
            self.segments
                .iter()
                .skip(1)
                .map(|s| s.separator)
                .filter(|s| !s.is_empty()),
        )
    }
}

/// One rung of a length-threshold ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// The pattern applies to values of at most this many characters.
    pub up_to: usize,
    /// Pattern used in that length range.
    pub pattern: SegmentPattern,
}

/// Renders with the first step whose `up_to` covers the value's length.
///
/// Values longer than the last step are truncated to it.
pub fn render_ladder(steps: &[Step], cleaned: &str) -> String {
    let Some(last) = steps.last() else {
        return String::new();
    };
    let len = cleaned.chars().count().min(last.up_to);
    let step = steps.iter().find(|s| len <= s.up_to).unwrap_or(last);
    let truncated: String = cleaned.chars().take(last.up_to).collect();
    step.pattern.render(&truncated)
}

/// Splits a value into `width`-sized groups joined by `separator`.
///
/// # Example
///
/// ```
/// use keymask::segment::render_chunked;
///
/// assert_eq!(render_chunked("DE89370400440532013000", 4, " "), "DE89 3704 0044 0532 0130 00");
/// ```
pub fn render_chunked(cleaned: &str, width: usize, separator: &str) -> String {
    if width == 0 {
        return cleaned.to_string();
    }
    let chars: Vec<char> = cleaned.chars().collect();
    let mut result = String::with_capacity(chars.len() + chars.len() / width * separator.len());
    for (i, group) in chars.chunks(width).enumerate() {
        if i > 0 {
            result.push_str(separator);
        }
        result.extend(group);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    const SSN: SegmentPattern = SegmentPattern::new(
        Lead::None,
        &[
            Segment { width: 3, separator: "" },
            Segment { width: 2, separator: "-" },
            Segment { width: 4, separator: "-" },
        ],
    );

    const PHONE_US: SegmentPattern = SegmentPattern::new(
        Lead::Open("("),
        &[
            Segment { width: 3, separator: "" },
            Segment { width: 3, separator: ") " },
            Segment { width: 4, separator: "-" },
        ],
    );

    const PHONE_MX: SegmentPattern = SegmentPattern::new(
        Lead::Replace("+52 ("),
        &[
            Segment { width: 2, separator: "" },
            Segment { width: 2, separator: "" },
            Segment { width: 4, separator: ") " },
            Segment { width: 4, separator: "-" },
        ],
    );

    #[test]
    fn test_capacity() {
        assert_eq!(SSN.capacity(), 9);
        assert_eq!(PHONE_US.capacity(), 10);
        assert_eq!(PHONE_MX.capacity(), 12);
    }

    #[test]
    fn test_partial_values() {
        assert_eq!(SSN.render(""), "");
        assert_eq!(SSN.render("1"), "1");
        assert_eq!(SSN.render("123"), "123");
        assert_eq!(SSN.render("1234"), "123-4");
        assert_eq!(SSN.render("12345"), "123-45");
        assert_eq!(SSN.render("123456"), "123-45-6");
        assert_eq!(SSN.render("123456789"), "123-45-6789");
    }

    #[test]
    fn test_truncates_to_capacity() {
        assert_eq!(SSN.render("1234567890000"), "123-45-6789");
    }

    #[test]
    fn test_first_separator_is_never_emitted() {
        const LEADING: SegmentPattern = SegmentPattern::new(
            Lead::None,
            &[
                Segment { width: 2, separator: "#" },
                Segment { width: 2, separator: "-" },
            ],
        );
        assert_eq!(LEADING.render("12"), "12");
        assert_eq!(LEADING.render("1234"), "12-34");
    }

    #[test]
    fn test_open_lead() {
        assert_eq!(PHONE_US.render("555"), "555");
        assert_eq!(PHONE_US.render("5551"), "(555) 1");
        assert_eq!(PHONE_US.render("5551234567"), "(555) 123-4567");
    }

    #[test]
    fn test_replace_lead() {
        assert_eq!(PHONE_MX.render("5"), "5");
        assert_eq!(PHONE_MX.render("52"), "52");
        assert_eq!(PHONE_MX.render("525"), "+52 (5");
        assert_eq!(PHONE_MX.render("525512345678"), "+52 (55) 1234-5678");
    }

    #[test]
    fn test_multibyte_characters_are_counted_once() {
        assert_eq!(SSN.render("ááááá"), "ááá-áá");
    }

    #[test]
    fn test_literals() {
        let literals: Vec<_> = PHONE_US.literals().collect();
        assert_eq!(literals, vec!["(", ") ", "-"]);
        let literals: Vec<_> = PHONE_MX.literals().collect();
        assert_eq!(literals, vec!["+52 (", ") ", "-"]);
    }

    #[test]
    fn test_ladder() {
        const SHORT: &[Segment] = &[
            Segment { width: 2, separator: "" },
            Segment { width: 2, separator: "-" },
        ];
        const LONG: &[Segment] = &[
            Segment { width: 3, separator: "" },
            Segment { width: 2, separator: "-" },
        ];
        const STEPS: &[Step] = &[
            Step { up_to: 4, pattern: SegmentPattern::new(Lead::None, SHORT) },
            Step { up_to: 5, pattern: SegmentPattern::new(Lead::None, LONG) },
        ];

        assert_eq!(render_ladder(STEPS, "123"), "12-3");
        assert_eq!(render_ladder(STEPS, "1234"), "12-34");
        assert_eq!(render_ladder(STEPS, "12345"), "123-45");
        assert_eq!(render_ladder(STEPS, "1234567"), "123-45");
        assert_eq!(render_ladder(&[], "1234567"), "");
    }

    #[test]
    fn test_chunked() {
        assert_eq!(render_chunked("", 4, " "), "");
        assert_eq!(render_chunked("GB", 4, " "), "GB");
        assert_eq!(render_chunked("GB82", 4, " "), "GB82");
        assert_eq!(render_chunked("GB82W", 4, " "), "GB82 W");
        assert_eq!(render_chunked("ABC", 0, " "), "ABC");
    }
}
