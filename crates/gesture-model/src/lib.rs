//! Declarative gesture descriptors and execution results
//!
//! A [`GestureAction`] is an immutable, acyclic tree describing one of five
//! gesture operations: relative swipes, long-press drags, offset clicks,
//! fail-fast chains, and state waits. Trees are supplied by an external
//! configuration loader and interpreted by the `gesture-exec` crate; this
//! crate only models them and exposes the selector pre-validation traversal.

mod action;
mod result;

pub use action::*;
pub use result::*;
