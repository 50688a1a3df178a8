//! Core domain models for Pet Heaven.
//!
//! This module contains the data structures shared between the page
//! components and the tests.

mod page;
mod pet;
mod shelter;

// Re-export all models
pub use page::Page;
pub use pet::{filter_pets, Pet, PetFilter, PetKind};
pub use shelter::ShelterInfo;
