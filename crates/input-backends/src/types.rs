//! Value types shared by the backend tiers

use serde::{Deserialize, Serialize};
use tapflow_core_types::Point;

/// Input timing constants of the host platform's view configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformTimings {
    /// Minimum press duration recognized as a long press.
    pub long_press_timeout_ms: u64,

    /// Duration of a synthesized tap stroke.
    pub tap_timeout_ms: u64,
}

impl Default for PlatformTimings {
    fn default() -> Self {
        // Stock view-configuration values; the embedding service overrides
        // these with the device's live settings.
        Self {
            long_press_timeout_ms: 400,
            tap_timeout_ms: 100,
        }
    }
}

/// A timed point path for the accessibility gesture-dispatch tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GestureStroke {
    /// Path vertices in screen coordinates. A single point synthesizes a
    /// stationary press.
    pub points: Vec<Point>,

    /// Total stroke duration in milliseconds.
    pub duration_ms: u64,
}

impl GestureStroke {
    /// Straight-line stroke from `from` to `to`.
    pub fn line(from: Point, to: Point, duration_ms: u64) -> Self {
        Self {
            points: vec![from, to],
            duration_ms,
        }
    }

    /// Single-point stroke, used to synthesize taps.
    pub fn tap(at: Point, duration_ms: u64) -> Self {
        Self {
            points: vec![at],
            duration_ms,
        }
    }

    /// First vertex of the path.
    pub fn start(&self) -> Option<Point> {
        self.points.first().copied()
    }
}

/// Which tier answered a dispatch, and how.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DispatchOutcome {
    /// Whether the answering tier accepted the gesture.
    pub accepted: bool,

    /// True when the privileged tier handled it.
    pub privileged: bool,
}

impl DispatchOutcome {
    /// The privileged tier accepted the gesture.
    pub fn privileged() -> Self {
        Self {
            accepted: true,
            privileged: true,
        }
    }

    /// The fallback tier answered; its verdict is final.
    pub fn fallback(accepted: bool) -> Self {
        Self {
            accepted,
            privileged: false,
        }
    }
}
