use ladja_core::SectionId;
use ladja_core::content::{COMPANY, CONTACT_LINES, ContactLine, IconKind, SOCIAL_LINKS};
use leptos::prelude::*;

use crate::icons::Icon;
use crate::store::PageStore;

#[component]
pub fn Footer(store: PageStore) -> impl IntoView {
    view! {
        <footer id=SectionId::Contact.as_str() class="footer">
            <div class="container">
                <div class="footer-grid">
                    <div>
                        <h3>"Contact Us"</h3>
                        {CONTACT_LINES
                            .into_iter()
                            .map(|line| view! { <ContactRow line=line /> })
                            .collect_view()}
                    </div>
                    <div>
                        <h3>"Follow"</h3>
                        <div class="social-links">
                            {SOCIAL_LINKS
                                .into_iter()
                                .map(|link| {
                                    view! {
                                        <a href=link.href target="_blank" rel="noopener noreferrer" aria-label=link.label>
                                            <Icon kind=link.icon />
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>

                <div class="footer-bottom">
                    <span>{format!("© 2025 {COMPANY}. All rights reserved.")}</span>
                    <button class="back-to-top" on:click=move |_| store.navigate(SectionId::Hero.as_str())>
                        "Back to top"
                        <Icon kind=IconKind::ArrowUpRight size="14" />
                    </button>
                </div>
            </div>
        </footer>
    }
}

#[component]
fn ContactRow(line: ContactLine) -> impl IntoView {
    let text = match line.href {
        Some(href) => view! { <a href=href>{line.text}</a> }.into_any(),
        None => view! { <span>{line.text}</span> }.into_any(),
    };

    view! {
        <div class="contact-line">
            <Icon kind=line.icon size="18" />
            {text}
        </div>
    }
}
