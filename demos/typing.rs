//! Simulates a user typing into masked fields.
//!
//! Run with: `cargo run --example typing`

use std::sync::{Arc, Mutex};

use keymask::binding::{Formatter, FormatterOptions, TextBuffer, TextInput};
use keymask::FormatId;

fn show(field: &TextBuffer) -> String {
    let caret = field.caret().unwrap_or(0);
    let head: String = field.text().chars().take(caret).collect();
    let tail: String = field.text().chars().skip(caret).collect();
    format!("{}|{}", head, tail)
}

fn type_keys(id: FormatId, keys: &str) {
    println!("Typing {:?} into {}:", keys, id.name());

    let formatter = Formatter::new(FormatterOptions::new(id));
    let mut binding = formatter.attach(TextBuffer::default());
    for key in keys.chars() {
        binding.field_mut().insert(key);
        binding.handle_input();
        println!("  {:>3}  {}", key, show(binding.field()));
    }
    println!();
}

fn main() {
    println!("=== As-You-Type Masking ===\n");

    type_keys(FormatId::Cpf, "12345678901");
    type_keys(FormatId::PhoneUs, "5551234567");
    type_keys(FormatId::CurrencyBr, "123456");
    type_keys(FormatId::Time12h, "1030pm");

    // Editing in the middle keeps the caret next to the same digit
    println!("Deleting inside a phone number:");
    let formatter = Formatter::new(FormatterOptions::new(FormatId::PhoneUs));
    let mut binding = formatter.attach(TextBuffer::new("5551234567"));
    binding.handle_input();
    println!("  start   {}", show(binding.field()));
    binding.field_mut().set_caret(4);
    binding.field_mut().backspace();
    binding.handle_input();
    println!("  delete  {}", show(binding.field()));
    println!();

    // Pasting moves the caret to the end
    println!("Pasting a CNPJ:");
    let formatter = Formatter::new(FormatterOptions::new(FormatId::Cnpj));
    let mut binding = formatter.attach(TextBuffer::default());
    binding.handle_paste("11222333000181");
    println!("  paste   {}", show(binding.field()));
    println!();

    // Observe every value the field shows
    println!("Observing a date field:");
    let seen = Arc::new(Mutex::new(Vec::new()));
    let recorder = Arc::clone(&seen);
    let formatter = Formatter::new(FormatterOptions::new(FormatId::DateUsFull).on_format(
        move |value| {
            if let Ok(mut values) = recorder.lock() {
                values.push(value.to_string());
            }
        },
    ));
    let mut binding = formatter.attach(TextBuffer::default());
    for key in "12252024".chars() {
        binding.field_mut().insert(key);
        binding.handle_input();
    }
    let values = seen.lock().map(|values| values.clone()).unwrap_or_default();
    for value in values {
        println!("  {}", value);
    }
}
