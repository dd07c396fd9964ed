// Ladja Landing Page - Leptos 0.8 Edition
// Developed with 💀 by The Ladja Team (c)2025

pub mod browser;
pub mod icons;
pub mod sections;
pub mod store;
pub mod styles;

use anyhow::Context;
use ladja_core::SiteConfig;
use leptos::prelude::*;
use sections::*;
use store::PageStore;

/// `site.toml`, baked into the binary.
const SITE_TOML: &str = include_str!("../site.toml");

/// Parse and validate the embedded site configuration.
pub fn site_config() -> anyhow::Result<SiteConfig> {
    let config = SiteConfig::from_toml_str(SITE_TOML).context("parsing embedded site.toml")?;
    config.validate().context("validating site.toml")?;
    Ok(config)
}

/// Page container: owns the state store and renders every section in order.
#[component]
pub fn App(config: SiteConfig) -> impl IntoView {
    let store = PageStore::new(&config);

    browser::track_scroll(store);

    view! {
        <style>{styles::LANDING_CSS}</style>
        <Nav store=store logo_url=config.assets.logo_url.clone() />
        <main>
            <Hero store=store background_url=config.assets.hero_background_url.clone() />
            <About />
            <Divisions />
            <Impact store=store visibility_threshold=config.stats.visibility_threshold />
            <Partners />
            <CtaBand store=store />
        </main>
        <Footer store=store />
    }
}
