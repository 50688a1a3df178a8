//! Reusable UI components

mod confirmation;
mod filter_button;
mod footer;
mod form_controls;
mod info_card;
mod navbar;
mod pet_card;

pub use confirmation::ConfirmationDialog;
pub use filter_button::FilterButton;
pub use footer::Footer;
pub use form_controls::{FormInput, FormSelect, FormTextarea};
pub use info_card::InfoCard;
pub use navbar::Navbar;
pub use pet_card::PetCard;
