pub mod executor;
pub mod intent;

pub use executor::{handle, AssistantContext, AssistantError};
pub use intent::{interpret, Intent};
