use ladja_core::SectionId;
use ladja_core::content::{IMPACT_CARDS, ImpactCard};
use ladja_core::counter::Statistic;
use leptos::html::Section;
use leptos::prelude::*;

use crate::browser;
use crate::icons::Icon;
use crate::store::PageStore;

/// Impact panel. The counters start the first time the panel is at least
/// `visibility_threshold` visible and never restart.
#[component]
pub fn Impact(store: PageStore, visibility_threshold: f64) -> impl IntoView {
    let panel = NodeRef::<Section>::new();
    browser::watch_stats_panel(store, panel, visibility_threshold);

    view! {
        <section id=SectionId::Impact.as_str() class="section impact" node_ref=panel>
            <div class="container">
                <h2 class="section-title">"Our " <span class="accent">"Impact"</span></h2>

                <div class="stat-grid">
                    {Statistic::ALL
                        .into_iter()
                        .map(|stat| {
                            let value = Signal::derive(move || store.stats.get().display(stat));
                            view! { <StatCard value=value label=stat.label() /> }
                        })
                        .collect_view()}
                </div>

                <div class="impact-grid">
                    {IMPACT_CARDS
                        .into_iter()
                        .map(|card| view! { <ImpactTile card=card /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

/// Animated figure with a trailing `+`.
#[component]
pub fn StatCard(
    /// Formatted counter value
    #[prop(into)]
    value: Signal<String>,
    /// Caption under the number
    label: &'static str,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-value">{move || format!("{}+", value.get())}</div>
            <div class="stat-label">{label}</div>
        </div>
    }
}

#[component]
fn ImpactTile(card: ImpactCard) -> impl IntoView {
    view! {
        <div class="impact-card">
            <div class="icon">
                <Icon kind=card.icon size="32" />
            </div>
            <h3>{card.title}</h3>
            <p>{card.description}</p>
        </div>
    }
}
