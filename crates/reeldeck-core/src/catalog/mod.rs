pub mod models;
pub mod provider;
pub mod sample;

pub use models::{Movie, NavEntry, NavIcon, PlayedMovie};
pub use provider::Catalog;
