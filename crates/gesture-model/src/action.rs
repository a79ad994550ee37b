//! Gesture descriptor tree

use std::fmt;

use serde::{Deserialize, Serialize};

/// Operation kind of a gesture descriptor.
///
/// The wire tag is an open string; tags this build does not know deserialize
/// to [`GestureKind::Unknown`] and fail deterministically at execution time
/// instead of rejecting the whole configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GestureKind {
    /// Swipe from an anchor's center along one axis.
    SwipeRelative,

    /// Hold on the anchor, then drag along one axis.
    LongPressThenSwipe,

    /// Tap at a ratio offset inside the anchor's rectangle.
    OffsetClick,

    /// Execute child steps in order, stopping at the first failure.
    GestureChain,

    /// Poll the active window until a selector matches or a deadline passes.
    AwaitState,

    /// Tag not recognized by this build.
    #[serde(other)]
    Unknown,
}

impl GestureKind {
    /// Wire name of the kind, as it appears in the `type` tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            GestureKind::SwipeRelative => "swipeRelative",
            GestureKind::LongPressThenSwipe => "longPressThenSwipe",
            GestureKind::OffsetClick => "offsetClick",
            GestureKind::GestureChain => "gestureChain",
            GestureKind::AwaitState => "awaitState",
            GestureKind::Unknown => "unknown",
        }
    }
}

impl fmt::Display for GestureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Swipe direction, relative to the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GestureDirection {
    Up,
    Down,
    Left,
    Right,
}

impl fmt::Display for GestureDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GestureDirection::Up => "up",
            GestureDirection::Down => "down",
            GestureDirection::Left => "left",
            GestureDirection::Right => "right",
        };
        f.write_str(name)
    }
}

/// One node of a declarative gesture tree.
///
/// All fields besides the kind tag are optional; which ones a node requires
/// depends on its kind and is enforced by the executor, not here. A node
/// exclusively owns its `steps` children and the tree is never mutated after
/// construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GestureAction {
    /// Operation kind tag.
    #[serde(rename = "type")]
    pub kind: GestureKind,

    /// Selector resolving the node the gesture is computed against. When
    /// absent, geometry is taken from the caller-supplied context node.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anchor: Option<String>,

    /// Await target selector (`AwaitState` only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selector: Option<String>,

    /// Swipe direction (`SwipeRelative` / `LongPressThenSwipe`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<GestureDirection>,

    /// Swipe distance as a fraction of the anchor dimension.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_ratio: Option<f32>,

    /// Horizontal tap offset as a fraction of the anchor width.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_ratio: Option<f32>,

    /// Vertical tap offset as a fraction of the anchor height.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_ratio: Option<f32>,

    /// Ordered child steps (`GestureChain` only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<GestureAction>>,

    /// Await deadline in milliseconds (`AwaitState` only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u64>,

    /// Long-press hold duration in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hold_ms: Option<u64>,

    /// Gesture movement duration in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
}

impl GestureAction {
    /// Create a descriptor of the given kind with every field unset.
    pub fn new(kind: GestureKind) -> Self {
        Self {
            kind,
            anchor: None,
            selector: None,
            direction: None,
            distance_ratio: None,
            x_ratio: None,
            y_ratio: None,
            steps: None,
            timeout_ms: None,
            hold_ms: None,
            duration_ms: None,
        }
    }

    /// Set the anchor selector.
    pub fn with_anchor(mut self, anchor: impl Into<String>) -> Self {
        self.anchor = Some(anchor.into());
        self
    }

    /// Set the await-target selector.
    pub fn with_selector(mut self, selector: impl Into<String>) -> Self {
        self.selector = Some(selector.into());
        self
    }

    /// Set the swipe direction.
    pub fn with_direction(mut self, direction: GestureDirection) -> Self {
        self.direction = Some(direction);
        self
    }

    /// Set the swipe distance ratio.
    pub fn with_distance_ratio(mut self, ratio: f32) -> Self {
        self.distance_ratio = Some(ratio);
        self
    }

    /// Set the tap offset ratios.
    pub fn with_offset(mut self, x_ratio: f32, y_ratio: f32) -> Self {
        self.x_ratio = Some(x_ratio);
        self.y_ratio = Some(y_ratio);
        self
    }

    /// Set the child steps.
    pub fn with_steps(mut self, steps: Vec<GestureAction>) -> Self {
        self.steps = Some(steps);
        self
    }

    /// Set the await deadline.
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = Some(timeout_ms);
        self
    }

    /// Set the hold duration.
    pub fn with_hold_ms(mut self, hold_ms: u64) -> Self {
        self.hold_ms = Some(hold_ms);
        self
    }

    /// Set the movement duration.
    pub fn with_duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }

    /// Every selector string referenced anywhere in this tree, in depth-first
    /// order: each node emits its `anchor` then its `selector`, followed by
    /// the strings of each child in listed order.
    ///
    /// The configuration loader runs these through the selector engine before
    /// a tree is ever executed. Traversal is iterative so arbitrarily deep
    /// chains cannot overflow the stack.
    pub fn collect_selectors(&self) -> Vec<String> {
        let mut collected = Vec::new();
        let mut pending = vec![self];
        while let Some(action) = pending.pop() {
            if let Some(anchor) = &action.anchor {
                collected.push(anchor.clone());
            }
            if let Some(selector) = &action.selector {
                collected.push(selector.clone());
            }
            if let Some(steps) = &action.steps {
                for step in steps.iter().rev() {
                    pending.push(step);
                }
            }
        }
        collected
    }
}
