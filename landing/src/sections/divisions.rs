use ladja_core::SectionId;
use ladja_core::content::{DIVISIONS, Division};
use leptos::prelude::*;

use crate::icons::Icon;

#[component]
pub fn Divisions() -> impl IntoView {
    view! {
        <section id=SectionId::Divisions.as_str() class="section divisions">
            <div class="container">
                <h2 class="section-title">"Our " <span class="accent">"Divisions"</span></h2>
                <p class="section-lead">
                    "Four specialised divisions, one mission: infrastructure that connects a continent."
                </p>
                <div class="division-grid">
                    {DIVISIONS
                        .into_iter()
                        .map(|division| view! { <DivisionCard division=division /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn DivisionCard(division: Division) -> impl IntoView {
    view! {
        <div class="division-card">
            <div class="icon">
                <Icon kind=division.icon size="40" />
            </div>
            <h3>{division.title}</h3>
            <p>{division.description}</p>
        </div>
    }
}
