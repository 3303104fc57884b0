//! Bacterial foraging optimization.
//!
//! This module provides the per-iteration operators and the engine that
//! sequences them:
//! - **Profile**: entropy-based conservation weights that bias gap placement
//! - **Chemotaxis**: random gap insertion followed by padding
//! - **Interaction**: attraction and repulsion signaling between candidates
//! - **Selection**: fitness aggregation and elitist replacement

pub mod builder;
pub mod chemotaxis;
pub mod config;
pub mod engine;
pub mod interaction;
pub mod profile;
pub mod selection;

pub use builder::EngineBuilder;
pub use config::{IterationConfig, IterationOutcome};
pub use engine::Engine;
pub use interaction::Kernel;
pub use profile::ConservationProfile;
pub use selection::{ScoreTables, Selection};
