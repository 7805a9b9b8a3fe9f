pub mod app;
pub mod client;
pub mod components;
pub mod models;
pub mod pages;

pub mod api;
pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod mailer;
pub mod otp;
pub mod rate_limit;
pub mod state;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount_to_body(App);
}
