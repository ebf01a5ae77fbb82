//! Provia core: the profile state machine behind the 45-day exam
//! roadmap, its currency economy, and the static study content.
//!
//! The presentation layer reads a `Profile` through a `ProfileStore`,
//! dispatches user intents back into it, and re-reads.

pub mod clock;
pub mod config;
pub mod content;
pub mod error;
pub mod profile;
pub mod profile_store;
pub mod rng;
pub mod rules;
pub mod store;
pub mod types;

pub use error::{ProviaError, ProviaResult};
pub use profile::{Profile, ProfileUpdate, SelectedMode};
pub use profile_store::ProfileStore;
