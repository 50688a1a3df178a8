//! Pet model, the adoption roster, and listing filters.

use serde::{Deserialize, Serialize};

/// Species of a pet. The shelter takes cats and dogs only.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PetKind {
    #[default]
    Dog,
    Cat,
}

impl PetKind {
    /// Both kinds, in selector order.
    pub const ALL: [PetKind; 2] = [PetKind::Dog, PetKind::Cat];

    /// Form control value ("dog" / "cat").
    pub const fn as_str(self) -> &'static str {
        match self {
            PetKind::Dog => "dog",
            PetKind::Cat => "cat",
        }
    }

    /// Display label ("Dog" / "Cat").
    pub const fn label(self) -> &'static str {
        match self {
            PetKind::Dog => "Dog",
            PetKind::Cat => "Cat",
        }
    }

    /// Parse a form control value, falling back to the default for
    /// anything outside the known set.
    pub fn from_value(value: &str) -> Self {
        match value {
            "cat" => PetKind::Cat,
            _ => PetKind::Dog,
        }
    }
}

/// A pet available for adoption.
///
/// The roster is fixed at startup and never mutated during a session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pet {
    /// Unique identifier within the roster
    pub id: u32,
    /// Display name
    pub name: String,
    /// Species
    pub kind: PetKind,
    /// Breed
    pub breed: String,
    /// Age in whole years
    pub age: u8,
    /// Glyph shown in place of a photo on the listing card
    pub glyph: String,
    /// Short free-text description
    pub description: String,
}

impl Pet {
    fn new(
        id: u32,
        name: &str,
        kind: PetKind,
        breed: &str,
        age: u8,
        glyph: &str,
        description: &str,
    ) -> Self {
        Self {
            id,
            name: name.to_string(),
            kind,
            breed: breed.to_string(),
            age,
            glyph: glyph.to_string(),
            description: description.to_string(),
        }
    }

    /// The six pets currently in the shelter's care.
    pub fn roster() -> Vec<Pet> {
        vec![
            Pet::new(1, "Buddy", PetKind::Dog, "Golden Retriever", 3, "🐕", "Friendly and energetic"),
            Pet::new(2, "Whiskers", PetKind::Cat, "Persian", 2, "🐱", "Calm and affectionate"),
            Pet::new(3, "Max", PetKind::Dog, "Labrador", 5, "🐕", "Great with kids"),
            Pet::new(4, "Luna", PetKind::Cat, "Siamese", 1, "🐱", "Playful and curious"),
            Pet::new(5, "Charlie", PetKind::Dog, "Beagle", 4, "🐕", "Loves to play fetch"),
            Pet::new(6, "Mittens", PetKind::Cat, "Tabby", 3, "🐱", "Independent and sweet"),
        ]
    }

    /// Case-insensitive substring match across name, breed, and
    /// description. An empty query matches every pet.
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.name.to_lowercase().contains(&query)
            || self.breed.to_lowercase().contains(&query)
            || self.description.to_lowercase().contains(&query)
    }
}

/// Species facet applied to the listing page.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PetFilter {
    /// Every pet regardless of species
    #[default]
    All,
    /// Dogs only
    Dogs,
    /// Cats only
    Cats,
}

impl PetFilter {
    /// Filter tabs in display order.
    pub const TABS: [PetFilter; 3] = [PetFilter::All, PetFilter::Dogs, PetFilter::Cats];

    /// Tab label.
    pub const fn label(self) -> &'static str {
        match self {
            PetFilter::All => "All",
            PetFilter::Dogs => "Dogs",
            PetFilter::Cats => "Cats",
        }
    }

    /// Whether a pet of the given species passes this facet.
    pub const fn accepts(self, kind: PetKind) -> bool {
        match self {
            PetFilter::All => true,
            PetFilter::Dogs => matches!(kind, PetKind::Dog),
            PetFilter::Cats => matches!(kind, PetKind::Cat),
        }
    }
}

/// Apply the species facet and the free-text query to a roster.
///
/// Both conditions must hold for a pet to be included. Input order is
/// preserved.
pub fn filter_pets(pets: &[Pet], filter: PetFilter, query: &str) -> Vec<Pet> {
    pets.iter()
        .filter(|pet| filter.accepts(pet.kind) && pet.matches_query(query))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dogs_with_fetch_query_matches_only_charlie() {
        let pets = Pet::roster();
        let result = filter_pets(&pets, PetFilter::Dogs, "fetch");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Charlie");
    }

    #[test]
    fn test_empty_query_keeps_roster_order() {
        let pets = Pet::roster();
        let result = filter_pets(&pets, PetFilter::All, "");
        assert_eq!(result.len(), 6);
        let ids: Vec<u32> = result.iter().map(|pet| pet.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_facet_and_query_must_both_hold() {
        let pets = Pet::roster();
        // "affectionate" describes Whiskers the cat, so the Dogs facet hides her
        assert!(filter_pets(&pets, PetFilter::Dogs, "affectionate").is_empty());
        assert_eq!(filter_pets(&pets, PetFilter::Cats, "affectionate").len(), 1);
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let pets = Pet::roster();
        assert_eq!(filter_pets(&pets, PetFilter::All, "SIAMESE")[0].name, "Luna");
        assert_eq!(filter_pets(&pets, PetFilter::All, "buddy")[0].name, "Buddy");
    }

    #[test]
    fn test_query_searches_breed_and_description() {
        let pets = Pet::roster();
        assert_eq!(filter_pets(&pets, PetFilter::All, "beagle").len(), 1);
        assert_eq!(filter_pets(&pets, PetFilter::All, "kids")[0].name, "Max");
    }

    #[test]
    fn test_species_facets_split_the_roster() {
        let pets = Pet::roster();
        assert_eq!(filter_pets(&pets, PetFilter::Dogs, "").len(), 3);
        assert_eq!(filter_pets(&pets, PetFilter::Cats, "").len(), 3);
    }

    #[test]
    fn test_unmatched_query_yields_empty() {
        let pets = Pet::roster();
        assert!(filter_pets(&pets, PetFilter::All, "parrot").is_empty());
    }

    #[test]
    fn test_kind_form_values_round_trip() {
        assert_eq!(PetKind::from_value("cat"), PetKind::Cat);
        assert_eq!(PetKind::from_value("dog"), PetKind::Dog);
        assert_eq!(PetKind::from_value("hamster"), PetKind::Dog);
        assert_eq!(serde_json::to_string(&PetKind::Cat).unwrap(), "\"cat\"");
    }
}
