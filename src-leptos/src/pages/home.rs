//! Home page with the rotating hero banner

use crate::components::InfoCard;
use gloo_timers::callback::Interval;
use leptos::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

/// Hero background images, shown in rotation.
const HERO_IMAGES: [&str; 3] = [
    "https://images.unsplash.com/photo-1450778869180-41d0601e046e?w=1200&h=400&fit=crop",
    "https://images.unsplash.com/photo-1415369629372-26f2fe60c467?w=1200&h=400&fit=crop",
    "https://images.unsplash.com/photo-1548199973-03cce0bbc87b?w=1200&h=400&fit=crop",
];

/// Milliseconds each hero image stays on screen.
const HERO_ROTATE_MS: u32 = 5000;

/// Next hero index, wrapping to the start after the last image.
fn advance(index: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (index + 1) % len
}

#[component]
pub fn HomePage() -> impl IntoView {
    let hero_index = RwSignal::new(0usize);

    // The interval handle lives inside the effect closure, so leaving
    // the page drops it and stops the rotation
    let rotator = Rc::new(RefCell::new(None::<Interval>));
    Effect::new(move |_| {
        if rotator.borrow().is_none() {
            let interval = Interval::new(HERO_ROTATE_MS, move || {
                hero_index.update(|index| *index = advance(*index, HERO_IMAGES.len()));
            });
            *rotator.borrow_mut() = Some(interval);
        }
    });

    view! {
        <div class="page page-home">
            <section class="hero">
                <div
                    class="hero-background"
                    style=move || format!("background-image: url({})", HERO_IMAGES[hero_index.get()])
                ></div>
                <div class="hero-overlay"></div>
                <div class="hero-content">
                    <h2 class="hero-title">"Welcome to Pet Heaven"</h2>
                    <p class="hero-subtitle">
                        "A charitable society dedicated to caring for abandoned pets and finding them loving forever homes"
                    </p>
                </div>
            </section>

            <section class="info-cards">
                <InfoCard
                    icon="💗"
                    title="Our Mission"
                    description="We provide shelter, care, and love to abandoned cats and dogs while working to find them perfect families."
                />
                <InfoCard
                    icon="🐾"
                    title="Our Facilities"
                    description="Modern, clean facilities with veterinary care, comfortable housing, and play areas for all our pets."
                />
                <InfoCard
                    icon="👤"
                    title="Get Involved"
                    description="Become a member, adopt a pet, or help us care for animals in need. Every contribution matters."
                />
            </section>

            <section class="cta-section">
                <a href="/pets" class="btn btn--primary btn--lg">
                    "View Available Pets"
                </a>
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_wraps_after_the_last_image() {
        assert_eq!(advance(0, 3), 1);
        assert_eq!(advance(1, 3), 2);
        assert_eq!(advance(2, 3), 0);
    }

    #[test]
    fn test_advance_stays_in_range() {
        for start in 0..HERO_IMAGES.len() {
            assert!(advance(start, HERO_IMAGES.len()) < HERO_IMAGES.len());
        }
        assert_eq!(advance(7, 0), 0);
    }
}
