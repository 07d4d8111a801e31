//! Core game module containing shared components, constants, and messages.

mod components;
mod constants;
mod events;

pub use components::*;
pub use constants::*;
pub use events::*;
