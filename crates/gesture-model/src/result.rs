//! Execution result value object

use serde::{Deserialize, Serialize};
use tapflow_core_types::Point;

use crate::GestureKind;

/// Outcome of interpreting one gesture descriptor.
///
/// Produced fresh per invocation and never mutated afterwards; carries no
/// identity. Composite nodes report the kind of the node that produced the
/// result, not of the child that failed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionResult {
    /// Kind of the descriptor this result belongs to.
    pub action: GestureKind,

    /// Whether the operation succeeded.
    pub success: bool,

    /// True when the privileged backend handled the gesture.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub used_privileged: bool,

    /// Clamped screen point the gesture started at, when one was computed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Point>,

    /// Diagnostic message for failures.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ActionResult {
    /// Create a successful result.
    pub fn success(action: GestureKind) -> Self {
        Self {
            action,
            success: true,
            used_privileged: false,
            position: None,
            error: None,
        }
    }

    /// Create a failed result.
    pub fn failure(action: GestureKind) -> Self {
        Self {
            action,
            success: false,
            used_privileged: false,
            position: None,
            error: None,
        }
    }

    /// Record the gesture's starting point.
    pub fn with_position(mut self, position: Point) -> Self {
        self.position = Some(position);
        self
    }

    /// Record which backend tier answered.
    pub fn with_privileged(mut self, used_privileged: bool) -> Self {
        self.used_privileged = used_privileged;
        self
    }

    /// Attach a diagnostic message.
    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_defaults() {
        let result = ActionResult::success(GestureKind::OffsetClick);
        assert!(result.success);
        assert!(!result.used_privileged);
        assert_eq!(result.position, None);
        assert_eq!(result.error, None);
    }

    #[test]
    fn serializes_minimal_failure() {
        let result = ActionResult::failure(GestureKind::AwaitState).with_error("deadline");
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["action"], "awaitState");
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "deadline");
        assert!(json.get("usedPrivileged").is_none());
        assert!(json.get("position").is_none());
    }

    #[test]
    fn serializes_privileged_position() {
        let result = ActionResult::success(GestureKind::SwipeRelative)
            .with_privileged(true)
            .with_position(Point::new(540.0, 960.0));
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["usedPrivileged"], true);
        assert_eq!(json["position"]["x"], 540.0);
    }
}
