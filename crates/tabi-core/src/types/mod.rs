//! Core data types.

pub mod event;
pub mod intent;

pub use event::{Event, NO_TRAVEL};
pub use intent::Intent;
