pub mod book;
pub mod contact;

pub use book::{AddOutcome, ContactBook, Toggle};
pub use contact::Contact;
