//! Reusable statistic card for dashboard summary grids.

use leptos::prelude::*;

use crate::util::format::format_points;

/// A labelled point statistic with an optional footnote.
#[component]
pub fn StatCard(
    label: &'static str,
    value: i64,
    #[prop(optional_no_strip)] hint: Option<String>,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-card__label">{label}</span>
            <span class="stat-card__value">{format_points(value)} " points"</span>
            {hint.map(|hint| view! { <span class="stat-card__hint">{hint}</span> })}
        </div>
    }
}
