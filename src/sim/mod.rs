//! Deterministic round simulation
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Driven by the caller (one `tick` per frame, one call per input event)
//! - No rendering or platform dependencies; results are intents for the renderer

pub mod engine;
pub mod knockback;
pub mod selection;
pub mod state;
pub mod submit;
pub mod tick;

pub use engine::RoundEngine;
pub use state::{HelpState, RngState, Round, Slot, SubmitState};
