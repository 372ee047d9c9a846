//! # client
//!
//! Leptos + WASM frontend for the loan approval predictor.
//!
//! One page, one form: the applicant fills in income, loan amount, credit
//! history and employment type, and the page renders the prediction
//! service's verdict. All form logic lives in the `predict` crate; this
//! crate only binds it to signals and DOM events.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod util;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
