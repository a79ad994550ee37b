//! Execution context

use tapflow_core_types::{ActionId, MatchOptions};
use tokio_util::sync::CancellationToken;

/// Per-invocation context for one `perform` call.
///
/// Carries the caller's cancellation token, the selector match options passed
/// through to the engine unmodified, and a unique action id for tracing. No
/// state in here outlives the invocation.
#[derive(Debug, Clone)]
pub struct ExecCtx {
    /// Cancellation token for cooperative cancellation. Checked between chain
    /// steps and raced against every poll sleep.
    pub cancel_token: CancellationToken,

    /// Opaque matching configuration forwarded to the selector engine.
    pub match_options: MatchOptions,

    /// Unique identifier for this invocation.
    pub action_id: ActionId,
}

impl ExecCtx {
    /// Create a context with a fresh token and action id.
    pub fn new(match_options: MatchOptions) -> Self {
        Self {
            cancel_token: CancellationToken::new(),
            match_options,
            action_id: ActionId::new(),
        }
    }

    /// Use the caller's cancellation token, e.g. one tied to rule-engine
    /// teardown.
    pub fn with_cancel_token(mut self, cancel_token: CancellationToken) -> Self {
        self.cancel_token = cancel_token;
        self
    }

    /// Check whether the caller has cancelled this invocation.
    pub fn is_cancelled(&self) -> bool {
        self.cancel_token.is_cancelled()
    }
}

impl Default for ExecCtx {
    fn default() -> Self {
        Self::new(MatchOptions::default())
    }
}
