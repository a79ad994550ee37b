//! Gesture-action interpreter
//!
//! Interprets declarative [`gesture_model::GestureAction`] trees against a
//! live accessibility tree:
//! - resolves anchors through the selector-engine collaborator
//! - computes clamped screen geometry from anchor rectangles
//! - dispatches taps and swipes through the two-tier input backend chain
//! - polls for state conditions with a fixed interval and hard deadline
//! - sequences composite chains fail-fast
//!
//! Failures never escape as errors: every outcome is an
//! [`gesture_model::ActionResult`] tagged with the originating kind.

pub mod bridge;
pub mod errors;
mod executor;
pub mod policy;
mod types;

pub use bridge::*;
pub use errors::*;
pub use executor::*;
pub use types::*;
