pub mod executor;

pub use executor::{generate, ColorImageError};
