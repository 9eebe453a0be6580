//! Dispatch: clean, then render.
//!
//! The engine is a pure function of `(format, raw)`. It holds no state, so
//! it can be called from any thread and a caller reformatting on every
//! keystroke must pass the full current value each time.

use crate::error::FormatError;
use crate::rules;
use crate::FormatId;

/// Applies the format's character class to raw input.
///
/// Verbatim formats get the input back unchanged; their renderers do their
/// own filtering.
#[inline]
pub fn clean(id: FormatId, raw: &str) -> String {
    rules::rule(id).class.clean(raw)
}

/// Lays out an already-cleaned value.
#[inline]
pub fn render(id: FormatId, cleaned: &str) -> String {
    rules::rule(id).render(cleaned)
}

/// Masks raw input.
///
/// Never fails: empty, over-long or malformed input yields a partial or
/// empty mask.
///
/// # Example
///
/// ```
/// use keymask::{format, FormatId};
///
/// assert_eq!(format(FormatId::Cpf, "12345678901"), "123.456.789-01");
/// assert_eq!(format(FormatId::Cpf, "123.456.78"), "123.456.78");
/// assert_eq!(format(FormatId::Cpf, ""), "");
/// ```
pub fn format(id: FormatId, raw: &str) -> String {
    let rule = rules::rule(id);
    rule.render(&rule.class.clean(raw))
}

/// Masks raw input for a format given by its tag.
///
/// # Errors
///
/// Returns [`FormatError::UnknownFormat`] if the tag names no format.
///
/// # Example
///
/// ```
/// use keymask::{format_str, FormatError};
///
/// assert_eq!(format_str("ssn", "123456789").unwrap(), "123-45-6789");
/// assert!(matches!(
///     format_str("zip-xx", "123"),
///     Err(FormatError::UnknownFormat { .. })
/// ));
/// ```
pub fn format_str(id: &str, raw: &str) -> Result<String, FormatError> {
    let id: FormatId = id.parse()?;
    Ok(format(id, raw))
}

/// Masks raw input, passing it through untouched when the tag names no
/// format.
///
/// # Example
///
/// ```
/// use keymask::format_lenient;
///
/// assert_eq!(format_lenient("cep", "01310100"), "01310-100");
/// assert_eq!(format_lenient("zip-xx", "1234 5"), "1234 5");
/// ```
pub fn format_lenient(id: &str, raw: &str) -> String {
    match id.parse::<FormatId>() {
        Ok(id) => format(id, raw),
        Err(_e) => {
            #[cfg(feature = "tracing")]
            tracing::warn!(error = %_e, "passing value through unformatted");
            raw.to_string()
        }
    }
}
