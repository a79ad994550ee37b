//! Shared value types for the gesture layer: screen geometry, selector
//! handles, and the transient accessibility-node contract.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for one executor invocation, used for trace correlation.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct ActionId(pub String);

impl ActionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl Default for ActionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A point in screen coordinates (pixels).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}

/// A node's bounding rectangle in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl ScreenRect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Exact center of the rectangle.
    pub fn center(&self) -> Point {
        Point::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

/// A selector whose source text has been validated by the selector engine.
///
/// Construction goes through `SelectorEngine::parse`; the engine re-reads the
/// source at query time, so this carries no engine internals.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Selector {
    source: String,
}

impl Selector {
    /// Wrap validated selector text. Only selector engines should call this.
    pub fn from_validated(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.source)
    }
}

/// Selector-matching configuration, passed through to the engine unmodified.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchOptions {
    /// Allow the engine's indexed fast path.
    pub quick_find: bool,

    /// Restrict matching to cached node properties.
    pub fast_query: bool,
}

/// Transient handle to a live accessibility node.
///
/// Handles are borrowed for the duration of a single query/use. The
/// underlying tree can change between accesses, so they must never be cached
/// across poll iterations or across calls.
pub trait UiNode: Send + Sync {
    /// The node's bounding rectangle in screen coordinates.
    fn bounds_in_screen(&self) -> ScreenRect;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_center_is_exact() {
        let rect = ScreenRect::new(100.0, 200.0, 50.0, 30.0);
        assert_eq!(rect.center(), Point::new(125.0, 215.0));
    }

    #[test]
    fn action_ids_are_unique() {
        assert_ne!(ActionId::new(), ActionId::new());
    }

    #[test]
    fn match_options_wire_names() {
        let options = MatchOptions {
            quick_find: true,
            fast_query: false,
        };
        let json = serde_json::to_value(options).unwrap();
        assert_eq!(json["quickFind"], true);
        assert_eq!(json["fastQuery"], false);
    }
}
