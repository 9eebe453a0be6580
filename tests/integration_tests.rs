//! Integration tests for keymask.
//!
//! Every format gets at least one complete value, plus typing, pasting and
//! batch scenarios that go through the public API only.

use keymask::{
    batch::BatchFormatter,
    binding::{caret_after_format, Formatter, FormatterOptions, TextBuffer, TextInput},
    format, format_lenient, format_str,
    rules,
    stream::FormatExt,
    CharacterClass, FormatError, FormatId, Region,
};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

fn check(cases: &[(FormatId, &str, &str)]) {
    for &(id, raw, expected) in cases {
        assert_eq!(format(id, raw), expected, "{} on {:?}", id, raw);
    }
}

// =============================================================================
// ONE COMPLETE VALUE PER FORMAT
// =============================================================================

#[test]
fn test_brazil() {
    check(&[
        (FormatId::Cpf, "12345678901", "123.456.789-01"),
        (FormatId::Rg, "123456789", "12.345.678-9"),
        (FormatId::Cnpj, "11222333000181", "11.222.333/0001-81"),
        (FormatId::Cep, "01310100", "01310-100"),
        (FormatId::PhoneBr, "11987654321", "(11) 98765-4321"),
        (FormatId::DateBr, "25122024", "25/12/2024"),
        (FormatId::DateBrShort, "25122024", "25/12/2024"),
        (FormatId::DateBrFull, "25122024", "25 de Dezembro de 2024"),
    ]);
}

#[test]
fn test_united_states() {
    check(&[
        (FormatId::Ssn, "123456789", "123-45-6789"),
        (FormatId::PhoneUs, "5551234567", "(555) 123-4567"),
        (FormatId::DateUs, "12252024", "12/25/2024"),
        (FormatId::DateUsShort, "12252024", "12/25/2024"),
        (FormatId::DateUsFull, "12252024", "December 25, 2024"),
        (FormatId::DriversLicenseUs, "d1234-5678-9012", "D123456789012"),
    ]);
}

#[test]
fn test_europe() {
    check(&[
        (FormatId::NifEs, "123456789", "12345678-9"),
        (FormatId::NifPt, "123456789", "123 456 789"),
        (FormatId::NieEs, "123456789", "1-2345678-9"),
        (FormatId::NirFr, "1850578006084", "1 85 05 78 006 08 4"),
        (FormatId::SteuerIdDe, "12345678901", "12 345 678 90 1"),
        (FormatId::CodiceFiscaleIt, "rssmra85t10a562s", "RSSMRA85T10A562S"),
        (FormatId::NinoUk, "ab123456c", "AB 12 34 56 C"),
        (FormatId::BsnNl, "123456782", "1234.56.782"),
        (FormatId::NissBe, "85073003328", "85.07.30-033.28"),
        (FormatId::AvsCh, "7561234567897", "756.1234.5678.97"),
        (FormatId::SvnrAt, "1234010180", "1234 01 01 80"),
        (FormatId::PersonnummerSe, "8112189876", "811218-9876"),
        (FormatId::FodselsnummerNo, "01129955131", "011299 55131"),
        (FormatId::PeselPl, "44051401359", "44051401359"),
        (FormatId::AmkaGr, "01019912345", "010199 12345"),
        (FormatId::PassportEu, "ab1234567", "AB1234567"),
        (FormatId::DateEu, "14072024", "14/07/2024"),
        (FormatId::DateEuShort, "14072024", "14/07/2024"),
        (FormatId::DateEuFull, "14072024", "14 July 2024"),
        (FormatId::PhoneEu, "4930123456789", "+49 (30) 1234-56789"),
    ]);
}

#[test]
fn test_latin_america() {
    check(&[
        (FormatId::CurpMx, "gode561231hdfabc09", "GODE561231HDFABC09"),
        (FormatId::RfcMx, "gode561231gr8", "GODE56123-1GR8"),
        (FormatId::CuitAr, "20123456789", "20-12345678-9"),
        (FormatId::CuitCuilAr, "20123456789", "20-12345678-9"),
        (FormatId::DniAr, "12345678", "12.345.678"),
        (FormatId::RutCl, "123456789", "1.234.567-89"),
        (FormatId::NitCo, "9001234567", "900.123.456-7"),
        (FormatId::CcCo, "1234567890", "12.345.678-90"),
        (FormatId::DniPe, "12345678", "12345678"),
        (FormatId::RucPe, "20123456789", "2012345678-9"),
        (FormatId::CiVe, "0123456789", "V-12345678-9"),
        (FormatId::CiEc, "1712345678", "1712345678"),
        (FormatId::CiUy, "12345678", "1.234.567-8"),
        (FormatId::CiPy, "12345678", "1234567-8"),
        (FormatId::CiBo, "12345678", "1234567-8"),
        (FormatId::PhoneMx, "525512345678", "+52 (55) 1234-5678"),
        (FormatId::PhoneAr, "541123456789", "+54 (11) 2345-6789"),
        (FormatId::PhoneCl, "56912345678", "+56 9 1234-5678"),
        (FormatId::PhoneCo, "5730012345678", "+57 300 123-45678"),
    ]);
}

#[test]
fn test_asia() {
    check(&[
        (FormatId::MyNumberJp, "123456789012", "1234-5678-9012"),
        (FormatId::IdCardCn, "110105194912310021", "110105 19491231 0021"),
        (FormatId::AadhaarIn, "123456789012", "1234 5678 9012"),
        (FormatId::PanIn, "abcde1234f", "ABCDE1234F"),
        (FormatId::PhoneJp, "819012345678", "+81 90-1234-5678"),
        (FormatId::PhoneCn, "8613812345678", "+86 138 1234 5678"),
        (FormatId::PhoneIn, "919876543210", "+91 9876-543-210"),
    ]);
}

#[test]
fn test_other_countries() {
    check(&[
        (FormatId::SinCa, "123456789", "123-456-789"),
        (FormatId::TfnAu, "123456789", "123 456 789"),
        (FormatId::AbnAu, "51824753556", "51 824 753 55 6"),
        (FormatId::IdZa, "8001015009087", "800101 5009 08 7"),
        (FormatId::PhoneCa, "14165551234", "+1 (416) 555-1234"),
        (FormatId::PhoneAu, "61412345678", "+61 4 1234 5678"),
        (FormatId::SnilsRu, "11223344595", "112-233-445 95"),
        (FormatId::TcKimlikTr, "10000000146", "10000000146"),
        (FormatId::TeudatZehutIl, "123456782", "123456782"),
    ]);
}

#[test]
fn test_universal() {
    check(&[
        (FormatId::CreditCard, "4111111111111111", "4111 1111 1111 1111"),
        (FormatId::Iban, "gb82 west 1234 5698 7654 32", "GB82 WEST 1234 5698 7654 32"),
        (FormatId::SwiftBic, "deutdeff500", "DEUT DE FF 500"),
        (FormatId::Isbn10, "0306406152", "0-306-40615-2"),
        (FormatId::Isbn13, "9780306406157", "978-0-306-40615-7"),
        (
            FormatId::Uuid,
            "550e8400e29b41d4a716446655440000",
            "550E8400-E29B-41D4-A716-446655440000",
        ),
        (FormatId::MacAddress, "001a2b3c4d5e", "00:1A:2B:3C:4D:5E"),
        (FormatId::Ipv4, "192.168.1.1", "192.168.1.1"),
        (
            FormatId::Ipv6,
            "2001:db8:85a3:0:0:8a2e:370:7334",
            "2001:0DB8:85A3:0000:0000:8A2E:0370:7334",
        ),
        (FormatId::Ean13, "4006381333931", "4006381333931"),
        (FormatId::UpcA, "036000291452", "036000291452"),
    ]);
}

#[test]
fn test_currency_and_time() {
    check(&[
        (FormatId::CurrencyBr, "123456", "R$ 1.234,56"),
        (FormatId::CurrencyUs, "123456", "$1,234.56"),
        (FormatId::CurrencyEu, "123456", "€1.234,56"),
        (FormatId::Time24h, "235959", "23:59:59"),
        (FormatId::Time12h, "1030pm", "10:30 PM"),
    ]);
}

#[test]
fn test_formats_per_region() {
    let counts: Vec<(Region, usize)> = Region::ALL
        .iter()
        .map(|&r| (r, FormatId::in_region(r).count()))
        .collect();
    assert_eq!(
        counts,
        vec![
            (Region::Brazil, 8),
            (Region::UnitedStates, 6),
            (Region::Europe, 20),
            (Region::LatinAmerica, 19),
            (Region::Asia, 7),
            (Region::OtherCountries, 9),
            (Region::Universal, 11),
            (Region::Currency, 3),
            (Region::Time, 2),
        ]
    );
}

// =============================================================================
// PARTIAL INPUT
// =============================================================================

#[test]
fn test_partial_values_have_no_dangling_separators() {
    check(&[
        (FormatId::Cpf, "123", "123"),
        (FormatId::Cpf, "1234", "123.4"),
        (FormatId::Cnpj, "112223330", "11.222.333/0"),
        (FormatId::PhoneUs, "555", "555"),
        (FormatId::PhoneUs, "5551", "(555) 1"),
        (FormatId::MacAddress, "001", "00:1"),
        (FormatId::Time24h, "23", "23"),
        (FormatId::Time24h, "235", "23:5"),
    ]);
}

#[test]
fn test_brazilian_phone_ladder() {
    check(&[
        (FormatId::PhoneBr, "1", "1"),
        (FormatId::PhoneBr, "11", "11"),
        (FormatId::PhoneBr, "119", "(11) 9"),
        (FormatId::PhoneBr, "1198765", "(11) 98765"),
        (FormatId::PhoneBr, "11987654", "(11) 9876-54"),
        (FormatId::PhoneBr, "1187654321", "(11) 8765-4321"),
        (FormatId::PhoneBr, "11987654321", "(11) 98765-4321"),
        (FormatId::PhoneBr, "119876543210000", "(11) 98765-4321"),
    ]);
}

#[test]
fn test_swedish_personnummer_ladder() {
    check(&[
        (FormatId::PersonnummerSe, "811218", "811218"),
        (FormatId::PersonnummerSe, "8112189", "811218-9"),
        (FormatId::PersonnummerSe, "19811218987", "19811218-987"),
        (FormatId::PersonnummerSe, "198112189876", "19811218-9876"),
    ]);
}

#[test]
fn test_country_code_prefix_appears_after_first_segment() {
    check(&[
        (FormatId::PhoneMx, "5", "5"),
        (FormatId::PhoneMx, "52", "52"),
        (FormatId::PhoneMx, "525", "+52 (5"),
        (FormatId::PhoneMx, "52551", "+52 (55) 1"),
        (FormatId::CiVe, "1", "1"),
        (FormatId::CiVe, "12", "V-2"),
        (FormatId::PhoneCa, "1416", "+1 (416"),
    ]);
}

#[test]
fn test_long_date_while_typing() {
    check(&[
        (FormatId::DateBrFull, "2", "2"),
        (FormatId::DateBrFull, "251", "25/1"),
        (FormatId::DateBrFull, "2512202", "25/12/202"),
        (FormatId::DateBrFull, "25122024", "25 de Dezembro de 2024"),
        (FormatId::DateBrFull, "25132024", "25/13/2024"),
        (FormatId::DateUsFull, "13252024", "13/25/2024"),
        (FormatId::DateEuFull, "01012000", "01 January 2000"),
    ]);
}

#[test]
fn test_iban_lengths() {
    check(&[
        (FormatId::Iban, "", ""),
        (FormatId::Iban, "gb8", "GB8"),
        (FormatId::Iban, "gb82w", "GB82 W"),
        (
            FormatId::Iban,
            "MT84MALT011000012345MTLCAST001SXXXXX",
            "MT84 MALT 0110 0001 2345 MTLC AST0 01SX XX",
        ),
    ]);
}

#[test]
fn test_free_form_renderers() {
    check(&[
        (FormatId::Ipv4, "19216811", "192"),
        (FormatId::Ipv4, "192.", "192"),
        (FormatId::Ipv4, "192..1", "192..1"),
        (FormatId::Ipv4, "10.0.0.1.9", "10.0.0.1"),
        (FormatId::Ipv6, "", ":::::::"),
        (FormatId::Ipv6, "fe80", "FE80:::::::"),
        (FormatId::CurrencyUs, "5", "$0.05"),
        (FormatId::CurrencyUs, "", ""),
        (FormatId::CurrencyBr, "R$ 1.234,567", "R$ 12.345,67"),
        (FormatId::Time12h, "pm", " PM"),
        (FormatId::Time12h, "930a", "93:0 A"),
    ]);
}

// =============================================================================
// CLEANING
// =============================================================================

#[test]
fn test_reformatting_a_mask_is_stable() {
    let values = [
        (FormatId::Cpf, "12345678901"),
        (FormatId::PhoneBr, "11987654321"),
        (FormatId::PhoneUs, "5551234567"),
        (FormatId::Iban, "DE89370400440532013000"),
        (FormatId::CurrencyEu, "98765"),
        (FormatId::Ipv6, "::1"),
        (FormatId::Time12h, "0745am"),
    ];
    for (id, raw) in values {
        let once = format(id, raw);
        assert_eq!(format(id, &once), once, "{}", id);
    }
}

#[test]
fn test_lowercase_and_uppercase_agree() {
    for &id in FormatId::ALL {
        let rule = rules::rule(id);
        if rule.class == CharacterClass::AlphanumericUpper {
            assert_eq!(
                format(id, "ab12cd34ef56gh78ij90kl"),
                format(id, "AB12CD34EF56GH78IJ90KL"),
                "{}",
                id
            );
        }
    }
}

#[test]
fn test_non_ascii_digits_are_dropped() {
    assert_eq!(format(FormatId::Cep, "０１３１０１００"), "");
    assert_eq!(format(FormatId::Cep, "0131-0100 ñ"), "01310-100");
}

#[test]
fn test_pathological_length() {
    let raw = "7".repeat(10_000);
    assert_eq!(format(FormatId::Cpf, &raw), "777.777.777-77");
    assert_eq!(format(FormatId::Ipv4, &raw), "777");
    assert_eq!(format(FormatId::CurrencyUs, &raw).len(), 1 + 9998 + 3332 + 3);
}

// =============================================================================
// TAGS AND ERRORS
// =============================================================================

#[test]
fn test_every_tag_parses_back() {
    let mut seen = HashSet::new();
    for &id in FormatId::ALL {
        assert_eq!(id.as_str().parse::<FormatId>(), Ok(id));
        assert!(seen.insert(id.as_str()));
    }
}

#[test]
fn test_unknown_tag_policies() {
    let err = format_str("postcode-xx", "12345").unwrap_err();
    assert_eq!(
        err,
        FormatError::UnknownFormat {
            id: "postcode-xx".to_string()
        }
    );
    assert!(err.to_string().contains("postcode-xx"));
    assert_eq!(format_lenient("postcode-xx", "12345"), "12345");
}

#[test]
fn test_error_is_std_error() {
    let err: Box<dyn std::error::Error> = Box::new(format_str("?", "").unwrap_err());
    assert!(err.to_string().starts_with("unknown format"));
}

#[cfg(feature = "serde")]
#[test]
fn test_format_id_serializes_as_tag() {
    let json = serde_json::to_string(&FormatId::PhoneUs).unwrap();
    assert_eq!(json, "\"phone-us\"");
    let id: FormatId = serde_json::from_str("\"iban\"").unwrap();
    assert_eq!(id, FormatId::Iban);
    assert!(serde_json::from_str::<FormatId>("\"nope\"").is_err());
}

// =============================================================================
// BINDING SCENARIOS
// =============================================================================

fn type_keys(id: FormatId, keys: &str) -> Vec<String> {
    let formatter = Formatter::new(FormatterOptions::new(id));
    let mut binding = formatter.attach(TextBuffer::default());
    keys.chars()
        .map(|key| {
            binding.field_mut().insert(key);
            binding.handle_input()
        })
        .collect()
}

#[test]
fn test_typing_cpf() {
    let steps = type_keys(FormatId::Cpf, "12345678901");
    assert_eq!(steps[2], "123");
    assert_eq!(steps[3], "123.4");
    assert_eq!(steps[6], "123.456.7");
    assert_eq!(steps[10], "123.456.789-01");
}

#[test]
fn test_typing_currency() {
    let steps = type_keys(FormatId::CurrencyUs, "123456");
    assert_eq!(
        steps,
        vec!["$0.01", "$0.12", "$1.23", "$12.34", "$123.45", "$1,234.56"]
    );
}

#[test]
fn test_typing_currency_keeps_caret_at_end() {
    let formatter = Formatter::new(FormatterOptions::new(FormatId::CurrencyBr));
    let mut binding = formatter.attach(TextBuffer::default());
    for key in "98765".chars() {
        binding.field_mut().insert(key);
        let masked = binding.handle_input();
        assert_eq!(binding.field().caret(), Some(masked.chars().count()));
    }
    assert_eq!(binding.field().text(), "R$ 987,65");
}

#[test]
fn test_typing_behind_a_replacing_lead() {
    assert_eq!(
        type_keys(FormatId::PhoneCa, "14165551234").last().map(String::as_str),
        Some("+1 (416) 555-1234")
    );
    assert_eq!(
        type_keys(FormatId::CiVe, "1234567890").last().map(String::as_str),
        Some("V-23456789-0")
    );
}

#[test]
fn test_typing_time_12h() {
    let steps = type_keys(FormatId::Time12h, "1030pm");
    assert_eq!(steps.last().map(String::as_str), Some("10:30 PM"));
}

#[test]
fn test_typing_extra_keys_is_ignored() {
    let steps = type_keys(FormatId::Cep, "01310100999");
    assert_eq!(steps.last().map(String::as_str), Some("01310-100"));
}

#[test]
fn test_callback_sees_every_write() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let formatter = Formatter::new(
        FormatterOptions::new(FormatId::Ssn).on_format(move |v| sink.lock().unwrap().push(v.to_string())),
    );

    let mut binding = formatter.attach(TextBuffer::default());
    binding.handle_paste("123 45 6789");
    binding.field_mut().backspace();
    binding.handle_input();
    drop(binding);

    assert_eq!(*seen.lock().unwrap(), vec!["123-45-6789", "123-45-678"]);
}

#[test]
fn test_edit_in_the_middle_keeps_caret_after_typed_digit() {
    let formatter = Formatter::new(FormatterOptions::new(FormatId::PhoneUs));
    let mut binding = formatter.attach(TextBuffer::new("(555) 123-4567"));

    // Caret after "(555", delete the last 5
    binding.field_mut().set_caret(4);
    binding.field_mut().backspace();
    binding.handle_input();
    assert_eq!(binding.field().text(), "(551) 234-567");
    assert_eq!(binding.field().caret(), Some(3));

    binding.field_mut().insert('9');
    binding.handle_input();
    assert_eq!(binding.field().text(), "(559) 123-4567");
    assert_eq!(binding.field().caret(), Some(4));
}

#[test]
fn test_caret_for_replace_lead() {
    // Typing the third digit of a Mexican phone turns "52" into "+52 (5"
    assert_eq!(caret_after_format(CharacterClass::DigitsOnly, "525", 3, "+52 (5"), 6);
}

// =============================================================================
// BATCH AND STREAM
// =============================================================================

#[test]
fn test_batch_and_stream_agree() {
    let values = ["01310100", "2004002", "", "abc"];
    let batch = BatchFormatter::new(FormatId::Cep).format_all(&values);
    let streamed: Vec<String> = values.iter().mask_with(FormatId::Cep).collect();
    assert_eq!(batch, streamed);
    assert_eq!(batch, vec!["01310-100", "20040-02", "", ""]);
}

#[test]
fn test_indexed_stream_positions() {
    let values = vec!["1".to_string(), "12".to_string(), "123".to_string()];
    let indexed: Vec<(usize, String)> = values.iter().mask_indexed(FormatId::PhoneMx).collect();
    assert_eq!(
        indexed,
        vec![
            (0, "1".to_string()),
            (1, "12".to_string()),
            (2, "+52 (3".to_string())
        ]
    );
}
