use ladja_core::SectionId;
use ladja_core::content::{COMPANY, IconKind};
use leptos::prelude::*;

use crate::icons::Icon;
use crate::store::PageStore;

#[component]
pub fn Nav(store: PageStore, logo_url: String) -> impl IntoView {
    let logo_alt = format!("{COMPANY} Logo");

    view! {
        <nav class=move || if store.is_scrolled.get() { "nav nav-solid" } else { "nav" }>
            <div class="nav-inner">
                <a
                    href="#hero"
                    class="nav-brand"
                    on:click=move |ev| {
                        ev.prevent_default();
                        store.navigate(SectionId::Hero.as_str());
                    }
                >
                    <img src=logo_url alt=logo_alt width="48" height="48" />
                </a>

                <div class="nav-links">
                    {SectionId::NAV
                        .into_iter()
                        .map(|id| view! { <NavLink store=store id=id /> })
                        .collect_view()}
                </div>

                <button
                    class="nav-toggle"
                    aria-label="Toggle navigation"
                    aria-expanded=move || store.menu_open.get().to_string()
                    on:click=move |_| store.toggle_menu()
                >
                    <span class=move || if store.menu_open.get() { "chevron open" } else { "chevron" }>
                        <Icon kind=IconKind::ChevronDown />
                    </span>
                </button>
            </div>

            // Collapsed menu (small screens)
            <Show when=move || store.menu_open.get()>
                <div class="nav-mobile">
                    {SectionId::NAV
                        .into_iter()
                        .map(|id| view! { <NavLink store=store id=id /> })
                        .collect_view()}
                </div>
            </Show>
        </nav>
    }
}

/// Link to one section; highlighted while that section is active.
#[component]
fn NavLink(store: PageStore, id: SectionId) -> impl IntoView {
    let active = move || store.active_section.get() == id;

    view! {
        <button
            class=move || if active() { "nav-link active" } else { "nav-link" }
            aria-current=move || active().then_some("page")
            on:click=move |_| store.navigate(id.as_str())
        >
            {id.label()}
        </button>
    }
}
