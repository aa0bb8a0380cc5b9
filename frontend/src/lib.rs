// Foo-rum: a social feed kept entirely in the browser's local storage.
extern crate console_error_panic_hook;
extern crate serde;
#[macro_use]
extern crate serde_derive;

pub mod auth;
pub mod bindings;
pub mod clock;
pub mod config;
pub mod feed;
pub mod local_store;
pub mod models;
pub mod pages;
pub mod sanitize;
pub mod seed;
pub mod storage;

use wasm_bindgen::prelude::*;

use web_sys::{Document, Element};

pub use crate::config::ROOT_SELECTOR;

#[wasm_bindgen]
pub fn bootstrap() -> Result<(), JsValue> {
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));
    init_logging();

    let store = pages::browser_store()?;
    auth::ensure_seed_users(&store);

    pages::render_page_feed(store.get_current_user())
}

/// Routes `log` records to the console method matching their level.
pub fn init_logging() {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
}

pub fn document_and_root() -> Result<(Document, Element), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let root = document
        .query_selector(ROOT_SELECTOR)?
        .ok_or_else(|| JsValue::from_str("missing root element"))?;

    Ok((document, root))
}
