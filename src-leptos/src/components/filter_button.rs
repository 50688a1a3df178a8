//! Filter tab button for the pet listing

use leptos::prelude::*;

#[component]
pub fn FilterButton(
    /// Tab text content
    #[prop(into)]
    label: String,
    /// Whether this tab is the selected one
    #[prop(into)]
    active: Signal<bool>,
    /// Click handler
    on_click: impl Fn() + 'static + Clone,
) -> impl IntoView {
    view! {
        <button
            class=move || {
                format!("filter-btn {}", if active.get() { "active" } else { "" })
            }
            on:click=move |_| on_click()
        >
            {label}
        </button>
    }
}
