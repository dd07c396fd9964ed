use ladja_core::content::CTA_BAND;
use leptos::prelude::*;

use crate::store::PageStore;

/// Call-to-action band between the partner grid and the footer.
#[component]
pub fn CtaBand(store: PageStore) -> impl IntoView {
    let action = CTA_BAND.action;

    view! {
        <div class="cta-band">
            <div class="container">
                <h2>{CTA_BAND.heading}</h2>
                <p>{CTA_BAND.body}</p>
                <button class="btn btn-outline" on:click=move |_| store.navigate(action.target.as_str())>
                    {action.label}
                </button>
            </div>
        </div>
    }
}
