//! WebAssembly bindings.
//!
//! # Usage from JavaScript
//!
//! ```javascript
//! import init, { format_value, list_formats } from 'keymask';
//!
//! await init();
//!
//! input.addEventListener('input', () => {
//!     input.value = format_value('phone-br', input.value);
//! });
//!
//! for (const f of list_formats()) {
//!     console.log(`${f.id}: ${f.name} (${f.region})`);
//! }
//! ```

#![cfg(feature = "wasm")]

use wasm_bindgen::prelude::*;

use crate::FormatId;

/// Description of one format, returned to JavaScript.
#[wasm_bindgen]
pub struct FormatInfo {
    id: FormatId,
}

#[wasm_bindgen]
impl FormatInfo {
    #[wasm_bindgen(getter)]
    pub fn id(&self) -> String {
        self.id.as_str().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn name(&self) -> String {
        self.id.name().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn region(&self) -> String {
        self.id.region().name().to_string()
    }
}

/// Masks `value` with the format tagged `format_id`.
///
/// Throws if the tag names no format.
///
/// # Example
/// ```javascript
/// format_value("cpf", "12345678901")  // "123.456.789-01"
/// ```
#[wasm_bindgen]
pub fn format_value(format_id: &str, value: &str) -> Result<String, JsValue> {
    crate::format_str(format_id, value).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Returns true if `format_id` names a supported format.
#[wasm_bindgen]
pub fn is_known_format(format_id: &str) -> bool {
    format_id.parse::<FormatId>().is_ok()
}

/// Lists every supported format.
#[wasm_bindgen]
pub fn list_formats() -> js_sys::Array {
    let formats = js_sys::Array::new();
    for &id in FormatId::ALL {
        formats.push(&JsValue::from(FormatInfo { id }));
    }
    formats
}

/// Masks every string in `values`. Non-string entries are skipped.
#[wasm_bindgen]
pub fn format_values(format_id: &str, values: js_sys::Array) -> Result<js_sys::Array, JsValue> {
    let id: FormatId = format_id
        .parse()
        .map_err(|e: crate::FormatError| JsValue::from_str(&e.to_string()))?;

    let results = js_sys::Array::new();
    for value in values.iter() {
        if let Some(raw) = value.as_string() {
            results.push(&JsValue::from_str(&crate::format(id, &raw)));
        }
    }
    Ok(results)
}
