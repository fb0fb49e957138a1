//! LightCraft
//!
//! Shop management frontend for a retail and wholesale lighting business,
//! built with Leptos (WASM).
//!
//! # Features
//!
//! - Product inventory with search, sorting, and image uploads
//! - Point-of-sale invoice creation with a live cart
//! - Invoice history with printable sale documents
//! - Sales dashboard with low-stock alerts
//! - Company profile and user management
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All persistent data lives behind the LightCraft REST API; the
//! app keeps only the session token and API address in local storage.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;
mod util;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
