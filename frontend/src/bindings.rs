//! Sanitizer entry points for JavaScript callers. Anything that is not a
//! string sanitizes to `""` and validates as `false`.

use wasm_bindgen::prelude::*;

use crate::sanitize;

fn with_string(value: JsValue, f: fn(&str) -> String) -> String {
    value.as_string().map(|text| f(&text)).unwrap_or_default()
}

fn check_string(value: JsValue, f: fn(&str) -> bool) -> bool {
    value.as_string().map(|text| f(&text)).unwrap_or(false)
}

#[wasm_bindgen(js_name = sanitizeInput)]
pub fn sanitize_input(value: JsValue) -> String {
    with_string(value, sanitize::sanitize_input)
}

#[wasm_bindgen(js_name = sanitizeEmail)]
pub fn sanitize_email(value: JsValue) -> String {
    with_string(value, sanitize::sanitize_email)
}

#[wasm_bindgen(js_name = sanitizeName)]
pub fn sanitize_name(value: JsValue) -> String {
    with_string(value, sanitize::sanitize_name)
}

#[wasm_bindgen(js_name = sanitizePassword)]
pub fn sanitize_password(value: JsValue) -> String {
    with_string(value, sanitize::sanitize_password)
}

#[wasm_bindgen(js_name = sanitizePostContent)]
pub fn sanitize_post_content(value: JsValue) -> String {
    with_string(value, sanitize::sanitize_post_content)
}

#[wasm_bindgen(js_name = sanitizeHtml)]
pub fn sanitize_html(value: JsValue) -> String {
    with_string(value, sanitize::sanitize_html)
}

#[wasm_bindgen(js_name = isValidEmail)]
pub fn is_valid_email(value: JsValue) -> bool {
    check_string(value, sanitize::is_valid_email)
}

#[wasm_bindgen(js_name = isValidPassword)]
pub fn is_valid_password(value: JsValue) -> bool {
    check_string(value, sanitize::is_valid_password)
}

#[wasm_bindgen(js_name = isValidName)]
pub fn is_valid_name(value: JsValue) -> bool {
    check_string(value, sanitize::is_valid_name)
}
