//! Info card component for the home page

use leptos::prelude::*;

#[component]
pub fn InfoCard(
    #[prop(into)] icon: String,
    #[prop(into)] title: String,
    #[prop(into)] description: String,
) -> impl IntoView {
    view! {
        <div class="info-card">
            <div class="info-card__icon">{icon}</div>
            <h3 class="info-card__title">{title}</h3>
            <p class="info-card__description">{description}</p>
        </div>
    }
}
