use ladja_core::SectionId;
use ladja_core::content::{ABOUT_HEADING, ABOUT_PARAGRAPHS};
use leptos::prelude::*;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id=SectionId::About.as_str() class="section about">
            <div class="container">
                <h2 class="section-title">{ABOUT_HEADING}</h2>
                {ABOUT_PARAGRAPHS
                    .into_iter()
                    .map(|text| view! { <p class="section-lead">{text}</p> })
                    .collect_view()}
            </div>
        </section>
    }
}
