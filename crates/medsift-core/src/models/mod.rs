//! Domain models for the medsift engine.

mod medication;
mod sources;

pub use medication::*;
pub use sources::*;
