use ladja_core::SectionId;
use ladja_core::content::partners;
use leptos::prelude::*;

#[component]
pub fn Partners() -> impl IntoView {
    view! {
        <section id=SectionId::Partners.as_str() class="section partners">
            <div class="container">
                <h2 class="section-title">"Our " <span class="accent">"Partners"</span></h2>
                <div class="partner-grid">
                    {partners()
                        .into_iter()
                        .map(|name| view! { <div class="partner-card">{name}</div> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
