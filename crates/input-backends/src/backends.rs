//! Backend capability contracts

use async_trait::async_trait;

use crate::GestureStroke;

/// Privileged input channel: injects real input events through an
/// out-of-process system service.
///
/// Every method reports plain acceptance. `false` covers both "channel not
/// available" and "event rejected"; the distinction is opaque to callers and
/// either answer sends the dispatcher to the next tier. Connection lifecycle
/// is owned elsewhere.
#[async_trait]
pub trait InputInjector: Send + Sync {
    /// Inject a tap at screen coordinates.
    async fn tap(&self, x: f32, y: f32) -> bool;

    /// Inject a swipe. `drag_drop` asks the service to synthesize a press,
    /// drag and release instead of a fling; hold timing is the service's own.
    async fn swipe(
        &self,
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        duration_ms: u64,
        drag_drop: bool,
    ) -> bool;

    /// Inject a key event by platform key code.
    async fn key(&self, key_code: i32) -> bool;
}

/// Accessibility gesture-dispatch tier: asks the accessibility framework to
/// replay a timed point path as a synthetic touch.
///
/// Acceptance means the framework took the request, not that the gesture
/// completed on the device.
#[async_trait]
pub trait GestureDispatcher: Send + Sync {
    /// Dispatch one stroke.
    async fn dispatch(&self, stroke: GestureStroke) -> bool;
}
