//! Page components

mod adopt;
mod contact;
mod home;
mod pets;
mod register;
mod release;

pub use adopt::AdoptPage;
pub use contact::ContactPage;
pub use home::HomePage;
pub use pets::PetsPage;
pub use register::RegisterPage;
pub use release::ReleasePage;
