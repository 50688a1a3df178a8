//! Site footer with the shelter's identity and contact line

use crate::app::AppState;
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let state = expect_context::<AppState>();
    let shelter = state.shelter;

    view! {
        <footer class="footer">
            <div class="footer-content">
                <div class="footer-logo">
                    <span class="logo-icon">"💗"</span>
                    <span class="footer-title">{shelter.name.clone()}</span>
                </div>
                <p class="footer-tagline">{shelter.tagline.clone()}</p>
                <p class="footer-contact">"✉️ "{shelter.email.clone()}</p>
                <p class="footer-copyright">
                    {format!("© 2025 {}. All rights reserved.", shelter.name)}
                </p>
            </div>
        </footer>
    }
}
