//! Collaborator contracts
//!
//! Seams to the machinery this interpreter consumes but does not own: the
//! selector-matching engine, the accessibility root snapshot, and live screen
//! metrics. All handles crossing these seams are transient; see
//! [`tapflow_core_types::UiNode`].

use tapflow_core_types::{MatchOptions, ScreenRect, Selector, UiNode};

/// Selector parse/query contract.
pub trait SelectorEngine: Send + Sync {
    /// Validate selector text. `None` means unparsable.
    fn parse(&self, source: &str) -> Option<Selector>;

    /// Match a selector under `root`. Single-match contract: the engine picks
    /// the node or reports none, there is no disambiguation here.
    fn query(
        &self,
        root: &dyn UiNode,
        selector: &Selector,
        options: &MatchOptions,
    ) -> Option<Box<dyn UiNode>>;
}

/// Provider of the current foreground accessibility root.
///
/// Returns a fresh snapshot handle on every call; `None` when no foreground
/// window or accessibility service is available.
pub trait ActiveRootProvider: Send + Sync {
    fn active_root(&self) -> Option<Box<dyn UiNode>>;
}

/// Live screen dimensions in pixels, queried per call (display rotation and
/// size changes must be visible immediately, so implementations do not cache).
pub trait ScreenMetrics: Send + Sync {
    fn width(&self) -> f32;

    fn height(&self) -> f32;
}

/// Fixed screen metrics, for embeddings whose display cannot rotate and for
/// tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedScreenMetrics {
    pub width: f32,
    pub height: f32,
}

impl FixedScreenMetrics {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl ScreenMetrics for FixedScreenMetrics {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }
}
