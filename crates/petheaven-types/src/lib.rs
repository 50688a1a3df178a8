//! # Pet Heaven Types
//!
//! Core types, models, and form validation for the Pet Heaven site.
//!
//! This crate provides the foundational type system for Pet Heaven:
//!
//! - **`models`** - Domain models (Pet, Page, ShelterInfo)
//! - **`forms`** - Form field state and the validation engine
//!
//! ## Architecture Role
//!
//! `petheaven-types` sits at the bottom of the dependency graph:
//!
//! ```text
//!     petheaven-types (this crate)
//!             │
//!             ▼
//!     petheaven-leptos (CSR frontend)
//! ```
//!
//! All types are designed to be:
//! - **Serializable** via serde
//! - **Clone** for cheap sharing into reactive closures
//! - **PartialEq** for testing and comparison

pub mod forms;
pub mod models;

// Re-export form types for convenience
pub use forms::{
    adoption_confirmation, AdoptErrors, AdoptForm, ContactErrors, ContactForm, FieldError,
    FormErrors, FormState, RegisterErrors, RegisterForm, ReleaseErrors, ReleaseForm,
    CONTACT_CONFIRMATION, REGISTER_CONFIRMATION, RELEASE_CONFIRMATION,
};

// Re-export core model types
pub use models::{filter_pets, Page, Pet, PetFilter, PetKind, ShelterInfo};
