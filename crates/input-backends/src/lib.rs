//! Two-tier input injection
//!
//! Primitive taps and swipes reach the device through one of two providers of
//! differing privilege:
//!
//! 1. [`InputInjector`] - an out-of-process channel injecting real input
//!    events through a system-level service
//! 2. [`GestureDispatcher`] - the accessibility framework's synthetic-touch
//!    request API, fed a timed point path
//!
//! [`InputDispatcher`] tries them strictly in that order and stops at the
//! first success. Either tier answering `false` may mean "unavailable" or
//! "rejected"; callers cannot and must not distinguish the two.

mod backends;
mod dispatcher;
mod types;

pub use backends::*;
pub use dispatcher::*;
pub use types::*;
