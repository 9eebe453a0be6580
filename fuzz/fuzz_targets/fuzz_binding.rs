//! Fuzz target for keystroke handling.
//!
//! Types arbitrary keys into a bound buffer, with arbitrary backspaces, and
//! checks the caret always stays inside the text.

#![no_main]

use arbitrary::Arbitrary;
use keymask::binding::{Formatter, FormatterOptions, TextBuffer, TextInput};
use keymask::FormatId;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum Key {
    Char(char),
    Backspace,
    Move(u8),
}

#[derive(Debug, Arbitrary)]
struct Session {
    format: u8,
    keys: Vec<Key>,
}

fuzz_target!(|session: Session| {
    let id = FormatId::ALL[session.format as usize % FormatId::COUNT];
    let formatter = Formatter::new(FormatterOptions::new(id));
    let mut binding = formatter.attach(TextBuffer::default());

    for key in session.keys {
        match key {
            Key::Char(c) => binding.field_mut().insert(c),
            Key::Backspace => binding.field_mut().backspace(),
            Key::Move(to) => binding.field_mut().set_caret(to as usize),
        }
        let masked = binding.handle_input();
        let caret = binding.field().caret().unwrap_or(0);
        assert!(caret <= masked.chars().count());
    }
});
