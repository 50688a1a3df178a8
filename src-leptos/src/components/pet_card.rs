//! Pet card component for the listing grid

use leptos::prelude::*;
use petheaven_types::Pet;

#[component]
pub fn PetCard(#[prop(into)] pet: Pet) -> impl IntoView {
    let years = if pet.age == 1 { "year" } else { "years" };

    view! {
        <div class="pet-card">
            <div class="pet-card-image">{pet.glyph.clone()}</div>
            <div class="pet-card-content">
                <h3 class="pet-card-name">{pet.name.clone()}</h3>
                <p class="pet-card-info">
                    <strong>"Type: "</strong>
                    {pet.kind.label()}
                </p>
                <p class="pet-card-info">
                    <strong>"Breed: "</strong>
                    {pet.breed.clone()}
                </p>
                <p class="pet-card-info">
                    <strong>"Age: "</strong>
                    {format!("{} {}", pet.age, years)}
                </p>
                <p class="pet-card-description">{pet.description.clone()}</p>
                <a href="/adopt" class="btn btn--primary pet-card-adopt">
                    "Adopt Me"
                </a>
            </div>
        </div>
    }
}
