//! Batch masking example.
//!
//! Run with: `cargo run --example batch`

use keymask::{batch, stream::FormatExt, BatchFormatter, FormatId};

fn main() {
    println!("=== Batch Masking ===\n");

    // Phone numbers as they might arrive from an import
    let phones = vec![
        "11987654321",     // Mobile
        "1187654321",      // Landline
        "(11) 98765-4321", // Already masked
        "11 9 8765 4321",  // Spaces
        "119",             // Partial
        "",                // Empty
    ];

    // Method 1: BatchFormatter
    println!("Using BatchFormatter:");
    let formatter = BatchFormatter::new(FormatId::PhoneBr);
    for (input, masked) in formatter.format_pairs(&phones) {
        println!("  {:<18} -> {}", format!("{:?}", input), masked);
    }
    println!();

    // Method 2: Count values that were already masked
    let (already, changed) = batch::count_masked(FormatId::PhoneBr, &phones);
    println!("Already masked: {}, changed: {}", already, changed);
    println!();

    // Method 3: Stream processing
    println!("Using stream:");
    let insurance_numbers = ["ab123456c", "QQ 12 34 56 A", "ab12"];
    for (idx, masked) in insurance_numbers.iter().mask_indexed(FormatId::NinoUk) {
        println!("  [{}] {}", idx, masked);
    }
    println!();

    // Method 4: Parallel processing (requires 'parallel' feature)
    #[cfg(feature = "parallel")]
    {
        println!("Using parallel processing:");
        let cpfs: Vec<String> = (0..10_000).map(|i| format!("{:011}", i)).collect();
        let masked = batch::format_batch_parallel(FormatId::Cpf, &cpfs);
        println!("  Masked {} values, last: {}", masked.len(), masked[masked.len() - 1]);
    }

    #[cfg(not(feature = "parallel"))]
    {
        println!("Parallel processing: enable with --features parallel");
    }
}
