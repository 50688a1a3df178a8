//! Pet listing page with species tabs and free-text search

use crate::app::AppState;
use crate::components::{FilterButton, PetCard};
use leptos::prelude::*;
use petheaven_types::{filter_pets, PetFilter};

#[component]
pub fn PetsPage() -> impl IntoView {
    let state = expect_context::<AppState>();

    let filter = RwSignal::new(PetFilter::All);
    let search_query = RwSignal::new(String::new());

    let filtered = Memo::new(move |_| {
        filter_pets(&state.pets, filter.get(), &search_query.get())
    });

    view! {
        <div class="page page-pets">
            <h2 class="page-title">"Available Pets for Adoption"</h2>

            <div class="search-bar">
                <input
                    type="text"
                    class="search-input"
                    placeholder="Search by name, breed, or description..."
                    prop:value=move || search_query.get()
                    on:input=move |ev| search_query.set(event_target_value(&ev))
                />
            </div>

            <div class="filter-tabs">
                {PetFilter::TABS.into_iter().map(|tab| {
                    view! {
                        <FilterButton
                            label=tab.label()
                            active=Signal::derive(move || filter.get() == tab)
                            on_click=move || filter.set(tab)
                        />
                    }
                }).collect_view()}
            </div>

            <Show
                when=move || !filtered.get().is_empty()
                fallback=|| view! {
                    <p class="empty-state">"No pets found matching your search criteria."</p>
                }
            >
                <div class="pets-grid">
                    <For
                        each=move || filtered.get()
                        key=|pet| pet.id
                        children=move |pet| view! { <PetCard pet=pet /> }
                    />
                </div>
            </Show>
        </div>
    }
}
