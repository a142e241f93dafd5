use wasm_bindgen::JsValue;
use gloo_utils::errors::JsError;

/// Human-readable message for a rejected promise or thrown JS value
pub(crate) fn error_message(value: JsValue) -> String {
    match JsError::try_from(value) {
        Ok(err) => err.to_string(),
        Err(not_error) => not_error.to_string(),
    }
}
