//! Node.js bindings for keymask.
//!
//! This crate provides native Node.js bindings using napi-rs.
//!
//! # Usage
//!
//! ```javascript
//! const { formatValue, listFormats, isKnownFormat } = require('keymask');
//!
//! formatValue('cpf', '12345678901');      // '123.456.789-01'
//! formatValue('currency-br', '123456');   // 'R$ 1.234,56'
//!
//! if (isKnownFormat('phone-mx')) {
//!     input.value = formatValue('phone-mx', input.value);
//! }
//!
//! listFormats().filter(f => f.region === 'brazil').map(f => f.id);
//! ```

use napi::bindgen_prelude::*;
use napi_derive::napi;

use keymask::{batch, format_str, FormatId};

/// Description of one format.
#[napi(object)]
pub struct FormatInfo {
    pub id: String,
    pub name: String,
    pub region: String,
}

fn parse_format(format_id: &str) -> Result<FormatId> {
    format_id
        .parse()
        .map_err(|e: keymask::FormatError| Error::new(Status::InvalidArg, e.to_string()))
}

/// Masks a value.
///
/// @param formatId - Format tag, e.g. "cpf" or "phone-us"
/// @param value - Raw input
/// @returns The masked value
/// @throws If the tag names no format
#[napi]
pub fn format_value(format_id: String, value: String) -> Result<String> {
    format_str(&format_id, &value).map_err(|e| Error::new(Status::InvalidArg, e.to_string()))
}

/// Masks many values with one format.
///
/// @param formatId - Format tag
/// @param values - Raw inputs
/// @returns Masked values, in input order
#[napi]
pub fn format_values(format_id: String, values: Vec<String>) -> Result<Vec<String>> {
    let id = parse_format(&format_id)?;
    Ok(batch::format_batch(id, &values))
}

/// Checks whether a tag names a supported format.
#[napi]
pub fn is_known_format(format_id: String) -> bool {
    format_id.parse::<FormatId>().is_ok()
}

/// Lists every supported format.
#[napi]
pub fn list_formats() -> Vec<FormatInfo> {
    FormatId::ALL
        .iter()
        .map(|id| FormatInfo {
            id: id.as_str().to_string(),
            name: id.name().to_string(),
            region: id.region().tag().to_string(),
        })
        .collect()
}
