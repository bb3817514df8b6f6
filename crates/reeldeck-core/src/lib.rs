pub mod carousel;
pub mod catalog;
pub mod config;
pub mod error;
pub mod nav;

pub use carousel::{CarouselState, Emphasis, EMPHASIZED_SCALE, REGULAR_SCALE};
pub use catalog::Catalog;
pub use config::{AnimationConfig, AppConfig, CarouselConfig, EasingType};
pub use error::{Error, Result};
pub use nav::NavSelection;
