//! Pet Heaven - Leptos Frontend
//!
//! Client-side rendered site for the Pet Heaven adoption charity.
//! Everything runs in the browser: the pet roster is fixed at startup
//! and form submissions stay in memory.

// Dependencies used in lib.rs submodules, acknowledged here for bin target
use gloo_timers as _;
use leptos_meta as _;
use leptos_router as _;
use petheaven_types as _;
use serde as _;
use serde_json as _;
use wasm_bindgen as _;
use web_sys as _;

use leptos::prelude::*;
use petheaven_leptos::app::App;

fn main() {
    // Initialize panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging (ignore error if already initialized)
    drop(console_log::init_with_level(log::Level::Debug));

    log::info!("Pet Heaven (Leptos) starting...");

    // Mount the app
    mount_to_body(App);
}
