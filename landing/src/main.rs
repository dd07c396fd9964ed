// Ladja Landing Page - Leptos 0.8 Edition
// Developed with 💀 by The Ladja Team (c)2025

use ladja_core::SiteConfig;
use ladja_landing::{App, site_config};
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    let config = site_config().unwrap_or_else(|e| {
        log::warn!("[ladja] {e:#}; using built-in defaults");
        SiteConfig::default()
    });
    log::info!("[ladja] mounting landing page");

    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}
