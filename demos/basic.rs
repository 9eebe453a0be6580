//! Basic input masking example.
//!
//! Run with: `cargo run --example basic`

use keymask::{format, format_lenient, format_str, FormatId, Region};

fn main() {
    println!("=== Basic Input Masking ===\n");

    // Example 1: Mask complete values
    let samples = [
        (FormatId::Cpf, "12345678901"),
        (FormatId::Cnpj, "11222333000181"),
        (FormatId::Ssn, "123456789"),
        (FormatId::PhoneUs, "5551234567"),
        (FormatId::PhoneMx, "525512345678"),
        (FormatId::Iban, "DE89370400440532013000"),
        (FormatId::Uuid, "550e8400e29b41d4a716446655440000"),
    ];

    println!("Complete values:");
    for (id, raw) in samples {
        println!("  {:<12} {:<34} -> {}", id.as_str(), raw, format(id, raw));
    }
    println!();

    // Example 2: Partial input renders only what was typed
    println!("Partial values:");
    for raw in ["1", "123", "1234", "123456", "12345678901"] {
        println!("  cpf {:<12} -> {}", raw, format(FormatId::Cpf, raw));
    }
    println!();

    // Example 3: Special renderers
    println!("Special formats:");
    println!("  currency-us 123456   -> {}", format(FormatId::CurrencyUs, "123456"));
    println!("  currency-br 5        -> {}", format(FormatId::CurrencyBr, "5"));
    println!("  date-us-full         -> {}", format(FormatId::DateUsFull, "12252024"));
    println!("  date-br-full         -> {}", format(FormatId::DateBrFull, "25122024"));
    println!("  ipv4                 -> {}", format(FormatId::Ipv4, "192.168.1.1"));
    println!("  ipv6                 -> {}", format(FormatId::Ipv6, "2001:db8::1"));
    println!("  time-12h             -> {}", format(FormatId::Time12h, "1030pm"));
    println!();

    // Example 4: Formats by tag
    println!("Formats by tag:");
    for tag in ["phone-br", "PHONE-BR", "zip-xx"] {
        match format_str(tag, "11987654321") {
            Ok(masked) => println!("  {:<10} -> {}", tag, masked),
            Err(e) => println!("  {:<10} -> error: {}", tag, e),
        }
    }
    println!("  lenient zip-xx -> {}", format_lenient("zip-xx", "11987654321"));
    println!();

    // Example 5: Formats per region
    println!("Formats per region:");
    for region in Region::ALL {
        println!("  {:<16} {}", region.tag(), FormatId::in_region(*region).count());
    }
}
