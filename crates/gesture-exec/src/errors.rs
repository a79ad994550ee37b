//! Interpreter error types
//!
//! These never cross the `perform` boundary; the executor folds them into
//! failed results and logs them.

use gesture_model::GestureKind;
use thiserror::Error;

/// Failure taxonomy of one gesture action.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GestureError {
    /// Descriptor is missing a field its kind requires.
    #[error("{kind} action is missing required field `{field}`")]
    MissingField {
        kind: GestureKind,
        field: &'static str,
    },

    /// Chain descriptor carries an empty step list.
    #[error("gesture chain has no steps")]
    EmptyChain,

    /// Selector text did not parse.
    #[error("selector failed to parse: {0}")]
    SelectorParse(String),

    /// Anchor selector parsed but matched no node.
    #[error("anchor not found: {0}")]
    AnchorNotFound(String),

    /// No foreground window root is available to query.
    #[error("no active window root")]
    NoActiveRoot,

    /// Await deadline elapsed without a match.
    #[error("state condition not met after {0}ms")]
    StateTimeout(u64),

    /// Both backend tiers refused the gesture.
    #[error("both input tiers refused the gesture")]
    BackendRejected,

    /// The caller cancelled execution.
    #[error("execution cancelled")]
    Interrupted,

    /// Tag not recognized by this build.
    #[error("unsupported action kind `{0}`")]
    UnsupportedKind(GestureKind),
}
