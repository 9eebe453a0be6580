//! Attaching a format to a text field.
//!
//! The engine only turns strings into strings. This module is the glue a UI
//! layer needs on top of it: a [`Formatter`] configured once with a format
//! and an optional callback, and a [`Binding`] that owns a field for as long
//! as it is attached.
//!
//! Most formats keep the caret after the same significant character it
//! followed before reformatting. Money fills from the right, so there the
//! caret keeps the same number of digits after it. Formats whose lead stands
//! in for the first segment (`+52 (`, `V-`) hide those characters from the
//! field; the binding remembers them so typing on keeps the whole value.
//!
//! ```
//! use keymask::binding::{Formatter, FormatterOptions, TextBuffer, TextInput};
//! use keymask::FormatId;
//!
//! let formatter = Formatter::new(FormatterOptions::new(FormatId::PhoneUs));
//! let mut binding = formatter.attach(TextBuffer::default());
//!
//! for key in "5551234567".chars() {
//!     binding.field_mut().insert(key);
//!     binding.handle_input();
//! }
//!
//! let field = binding.detach();
//! assert_eq!(field.text(), "(555) 123-4567");
//! assert_eq!(field.caret(), Some(14));
//! ```

use std::fmt;

use crate::charset::CharacterClass;
use crate::engine;
use crate::rules::{self, FormatRule, Renderer};
use crate::segment::Lead;
use crate::FormatId;

/// A text field a [`Binding`] can read and rewrite.
///
/// Caret positions are character offsets, not byte offsets.
pub trait TextInput {
    /// The field's full current text.
    fn value(&self) -> String;

    /// Replaces the field's text.
    fn set_value(&mut self, value: &str);

    /// Current caret position, if the field has one.
    fn caret(&self) -> Option<usize> {
        None
    }

    /// Moves the caret. Fields without a caret ignore this.
    fn set_caret(&mut self, _caret: usize) {}
}

impl TextInput for String {
    fn value(&self) -> String {
        self.clone()
    }

    fn set_value(&mut self, value: &str) {
        self.clear();
        self.push_str(value);
    }
}

/// An in-memory field with a caret, for driving a binding without a UI.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    text: String,
    caret: usize,
}

impl TextBuffer {
    /// Creates a buffer holding `text` with the caret at the end.
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            caret: text.chars().count(),
        }
    }

    /// The buffer's text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Types one character at the caret.
    pub fn insert(&mut self, c: char) {
        let at = self.byte_offset(self.caret);
        self.text.insert(at, c);
        self.caret += 1;
    }

    /// Deletes the character before the caret.
    pub fn backspace(&mut self) {
        if self.caret == 0 {
            return;
        }
        let at = self.byte_offset(self.caret - 1);
        self.text.remove(at);
        self.caret -= 1;
    }

    fn byte_offset(&self, chars: usize) -> usize {
        self.text
            .char_indices()
            .nth(chars)
            .map_or(self.text.len(), |(index, _)| index)
    }
}

impl TextInput for TextBuffer {
    fn value(&self) -> String {
        self.text.clone()
    }

    fn set_value(&mut self, value: &str) {
        self.text = value.to_string();
        self.caret = self.caret.min(self.text.chars().count());
    }

    fn caret(&self) -> Option<usize> {
        Some(self.caret)
    }

    fn set_caret(&mut self, caret: usize) {
        self.caret = caret.min(self.text.chars().count());
    }
}

/// Callback invoked with every masked value a binding writes.
pub type FormatCallback = Box<dyn Fn(&str) + Send + Sync>;

/// Construction-time configuration of a [`Formatter`].
pub struct FormatterOptions {
    /// The format applied to the field.
    pub format_id: FormatId,
    /// Called once per handled input or paste, with the masked value.
    pub on_format: Option<FormatCallback>,
}

impl FormatterOptions {
    /// Options with no callback.
    pub fn new(format_id: FormatId) -> Self {
        Self {
            format_id,
            on_format: None,
        }
    }

    /// Sets the callback.
    pub fn on_format<F>(mut self, callback: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.on_format = Some(Box::new(callback));
        self
    }
}

impl fmt::Debug for FormatterOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormatterOptions")
            .field("format_id", &self.format_id)
            .field("on_format", &self.on_format.is_some())
            .finish()
    }
}

/// A format plus its callback, ready to be attached to fields.
#[derive(Debug)]
pub struct Formatter {
    options: FormatterOptions,
}

impl Formatter {
    /// Creates a formatter.
    pub fn new(options: FormatterOptions) -> Self {
        Self { options }
    }

    /// The configured format.
    pub fn format_id(&self) -> FormatId {
        self.options.format_id
    }

    /// Masks a value. The callback is not invoked.
    pub fn format(&self, raw: &str) -> String {
        engine::format(self.options.format_id, raw)
    }

    /// Takes ownership of `field` until the returned binding is detached or
    /// dropped.
    pub fn attach<T: TextInput>(&self, field: T) -> Binding<'_, T> {
        Binding {
            formatter: self,
            field,
            hidden: String::new(),
        }
    }

    fn notify(&self, masked: &str) {
        if let Some(callback) = &self.options.on_format {
            callback(masked);
        }
    }
}

/// A field attached to a [`Formatter`].
#[derive(Debug)]
pub struct Binding<'f, T> {
    formatter: &'f Formatter,
    field: T,
    /// Characters consumed by a replacing lead on the last write.
    hidden: String,
}

impl<'f, T: TextInput> Binding<'f, T> {
    /// The attached field.
    pub fn field(&self) -> &T {
        &self.field
    }

    /// The attached field, for applying edits before [`handle_input`](Self::handle_input).
    pub fn field_mut(&mut self) -> &mut T {
        &mut self.field
    }

    /// Reformats the field's full current text after a keystroke.
    ///
    /// The caret, if the field has one, is kept next to the same significant
    /// character it was next to before formatting. Money fills from the
    /// right, so there the caret keeps its distance from the last digit.
    pub fn handle_input(&mut self) -> String {
        let raw = self.field.value();
        let caret = self.field.caret();
        let masked = self.mask(&raw);

        self.field.set_value(&masked);
        if let Some(caret) = caret {
            let rule = rules::rule(self.formatter.format_id());
            self.field.set_caret(place_caret(rule, &raw, caret, &masked));
        }

        self.formatter.notify(&masked);
        masked
    }

    /// Replaces the field's text with the masked form of `text` and puts the
    /// caret at the end.
    pub fn handle_paste(&mut self, text: &str) -> String {
        self.hidden.clear();
        let masked = self.mask(text);
        self.field.set_value(&masked);
        self.field.set_caret(masked.chars().count());
        self.formatter.notify(&masked);
        masked
    }

    /// Releases the field.
    pub fn detach(self) -> T {
        self.field
    }

    /// Masks `raw`, restoring the characters a replacing lead hid on the
    /// previous write.
    ///
    /// A lead such as `"+52 ("` or `"V-"` is shown in place of the first
    /// segment, so the field no longer holds those characters. While the
    /// field still starts with the lead, they are put back before cleaning.
    fn mask(&mut self, raw: &str) -> String {
        let id = self.formatter.format_id();
        let rule = rules::rule(id);
        let Some((lead, width)) = replacing_lead(rule) else {
            return engine::format(id, raw);
        };

        let input = match raw.strip_prefix(lead) {
            Some(rest) if !self.hidden.is_empty() => format!("{}{}", self.hidden, rest),
            _ => raw.to_string(),
        };
        let cleaned = rule.class.clean(&input);
        let masked = rule.render(&cleaned);

        self.hidden = if cleaned.chars().count() > width {
            cleaned.chars().take(width).collect()
        } else {
            String::new()
        };
        masked
    }
}

/// The literal and first-segment width of a format whose lead replaces the
/// first segment.
fn replacing_lead(rule: &FormatRule) -> Option<(&'static str, usize)> {
    match rule.renderer {
        Renderer::Segmented(pattern) => match (pattern.lead, pattern.segments.first()) {
            (Lead::Replace(text), Some(first)) => Some((text, first.width)),
            _ => None,
        },
        _ => None,
    }
}

fn place_caret(rule: &FormatRule, raw: &str, caret: usize, masked: &str) -> usize {
    match rule.renderer {
        Renderer::Currency(_) => caret_before_trailing_digits(raw, caret, masked),
        _ => caret_after_format(rule.class, raw, caret, masked),
    }
}

/// Where the caret belongs after a right-filled `raw` was rewritten to
/// `masked`.
///
/// Counts the ASCII digits after `caret` in `raw` and returns the offset just
/// past the digit that has that many digits after it in `masked`. Symbols,
/// letters and separators are never counted. If `masked` has too few digits
/// the caret goes before its first digit. All offsets are in characters.
///
/// # Example
///
/// ```
/// use keymask::binding::caret_before_trailing_digits;
///
/// // First key of an empty money field
/// assert_eq!(caret_before_trailing_digits("1", 1, "$0.01"), 5);
/// // "9" typed after the "1" of "$1,234.56"
/// assert_eq!(caret_before_trailing_digits("$19,234.56", 3, "$19,234.56"), 3);
/// // "9" typed after the "2", which moves the group separator
/// assert_eq!(caret_before_trailing_digits("$1,2934.56", 5, "$12,934.56"), 5);
/// ```
pub fn caret_before_trailing_digits(raw: &str, caret: usize, masked: &str) -> usize {
    let trailing = raw.chars().skip(caret).filter(char::is_ascii_digit).count();
    let chars: Vec<char> = masked.chars().collect();

    let mut seen = 0;
    for (index, c) in chars.iter().enumerate().rev() {
        if c.is_ascii_digit() {
            if seen == trailing {
                return index + 1;
            }
            seen += 1;
        }
    }
    chars.iter().position(char::is_ascii_digit).unwrap_or(0)
}

/// Where the caret belongs after `raw` was rewritten to `masked`.
///
/// Counts the significant characters before `caret` in `raw` and returns the
/// offset just past the same number of significant characters in `masked`,
/// or the end of `masked` if it has fewer. All offsets are in characters.
///
/// # Example
///
/// ```
/// use keymask::binding::caret_after_format;
/// use keymask::CharacterClass;
///
/// // Typing "4" after the "3" of "123-5" gives "1234-5", masked as "123-45"
/// assert_eq!(caret_after_format(CharacterClass::DigitsOnly, "1234-5", 4, "123-45"), 5);
/// assert_eq!(caret_after_format(CharacterClass::DigitsOnly, "1234", 4, "123-4"), 5);
/// ```
pub fn caret_after_format(class: CharacterClass, raw: &str, caret: usize, masked: &str) -> usize {
    let significant = raw
        .chars()
        .take(caret)
        .filter(|&c| class.is_significant(c))
        .count();
    if significant == 0 {
        return 0;
    }

    let mut seen = 0;
    for (index, c) in masked.chars().enumerate() {
        if class.is_significant(c) {
            seen += 1;
            if seen == significant {
                return index + 1;
            }
        }
    }
    masked.chars().count()
}
