//! Top navigation bar component

use leptos::prelude::*;
use leptos_router::hooks::use_location;
use petheaven_types::Page;

#[component]
pub fn Navbar() -> impl IntoView {
    let location = use_location();

    view! {
        <header class="navbar">
            <div class="navbar-content">
                <a href="/" class="logo">
                    <span class="logo-icon">"💗"</span>
                    <span class="logo-text">"Pet Heaven"</span>
                </a>

                <nav class="nav-menu">
                    {Page::NAV.into_iter().map(|page| {
                        let current_path = location.pathname;
                        let is_active = move || Page::from_path(&current_path.get()) == page;

                        view! {
                            <a
                                href=page.path()
                                class=move || format!("nav-item {}", if is_active() { "active" } else { "" })
                            >
                                <span class="nav-icon">{page.icon()}</span>
                                <span class="nav-label">{page.label()}</span>
                            </a>
                        }
                    }).collect_view()}
                </nav>
            </div>
        </header>
    }
}
