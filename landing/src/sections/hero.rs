use ladja_core::SectionId;
use ladja_core::content::HERO;
use leptos::prelude::*;

use crate::store::PageStore;

#[component]
pub fn Hero(store: PageStore, background_url: String) -> impl IntoView {
    let [primary, secondary] = HERO.actions;

    view! {
        <section id=SectionId::Hero.as_str() class="hero">
            <div class="hero-bg">
                <img src=background_url alt="Hero Background" />
            </div>

            <div class="hero-content">
                <h1 class="hero-title">{HERO.title}</h1>
                <p class="hero-subtitle">{HERO.subtitle}</p>

                <div class="hero-actions">
                    <button
                        class="btn btn-primary"
                        on:click=move |_| store.navigate(primary.target.as_str())
                    >
                        {primary.label}
                    </button>
                    <button
                        class="btn btn-outline"
                        on:click=move |_| store.navigate(secondary.target.as_str())
                    >
                        {secondary.label}
                    </button>
                </div>
            </div>
        </section>
    }
}
