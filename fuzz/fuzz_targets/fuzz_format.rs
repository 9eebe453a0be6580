//! Fuzz target for the masking engine.
//!
//! Every format must accept any input without panicking, and fixed-width
//! masks must never show more characters than their rule allows.

#![no_main]

use keymask::{format, rules, FormatId};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    for &id in FormatId::ALL {
        let masked = format(id, data);
        let rule = rules::rule(id);

        if rule.is_segmented() {
            if let Some(max) = rule.max_length {
                let kept = rule.class.clean(&masked).chars().count();
                assert!(kept <= max, "{} showed {} characters, max {}", id, kept, max);
            }
        }
    }

    let _ = keymask::format_str(data, data);
    let _ = keymask::format_lenient(data, data);
});
