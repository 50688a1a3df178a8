//! Main App component with routing

use crate::components::{Footer, Navbar};
use crate::pages::{AdoptPage, ContactPage, HomePage, PetsPage, RegisterPage, ReleasePage};
use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use petheaven_types::{Pet, ShelterInfo};

/// Global application state: the pet roster and the shelter's own
/// details. Pages read it from context; nothing mutates it after
/// startup.
#[derive(Clone)]
pub struct AppState {
    pub pets: Vec<Pet>,
    pub shelter: ShelterInfo,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            pets: Pet::roster(),
            shelter: ShelterInfo::default(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Root App component
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Create global state
    let state = AppState::new();
    provide_context(state.clone());

    log::info!("Roster loaded with {} pets", state.pets.len());

    view! {
        <Router>
            <Title text="Pet Heaven" />
            <div class="app-container">
                <Navbar />
                <main class="main-content">
                    // Unknown paths show the home page rather than a 404
                    <Routes fallback=|| view! { <HomePage /> }>
                        <Route path=path!("/") view=HomePage />
                        <Route path=path!("/pets") view=PetsPage />
                        <Route path=path!("/register") view=RegisterPage />
                        <Route path=path!("/release") view=ReleasePage />
                        <Route path=path!("/adopt") view=AdoptPage />
                        <Route path=path!("/contact") view=ContactPage />
                    </Routes>
                </main>
                <Footer />
            </div>
        </Router>
    }
}
