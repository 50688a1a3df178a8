//! Static identity and contact details for the shelter.

use serde::{Deserialize, Serialize};

/// Contact details and identity copy shown on the contact page and in
/// the footer. This is site content, not user input.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShelterInfo {
    /// Organization name
    pub name: String,
    /// Footer tagline
    pub tagline: String,
    /// Public contact email
    pub email: String,
    /// Public phone number
    pub phone: String,
    /// Postal address
    pub address: String,
}

impl Default for ShelterInfo {
    fn default() -> Self {
        Self {
            name: "Pet Heaven".to_string(),
            tagline: "Caring for abandoned pets, finding forever homes".to_string(),
            email: "contact@petheaven.org".to_string(),
            phone: "+65 9230 2250".to_string(),
            address: "851 Hougang Central, Block 851, Singapore 530851".to_string(),
        }
    }
}
