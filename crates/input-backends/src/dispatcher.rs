//! Ordered two-tier dispatch

use std::sync::Arc;

use tapflow_core_types::Point;
use tracing::debug;

use crate::{DispatchOutcome, GestureDispatcher, GestureStroke, InputInjector, PlatformTimings};

/// Dispatches primitive gestures through the privileged tier first, falling
/// back to accessibility gesture dispatch when it refuses.
///
/// One attempt per tier, no retries; the fallback tier's verdict is final.
pub struct InputDispatcher {
    injector: Arc<dyn InputInjector>,
    gestures: Arc<dyn GestureDispatcher>,
    timings: PlatformTimings,
}

impl InputDispatcher {
    /// Create a dispatcher over the two tiers.
    pub fn new(
        injector: Arc<dyn InputInjector>,
        gestures: Arc<dyn GestureDispatcher>,
        timings: PlatformTimings,
    ) -> Self {
        Self {
            injector,
            gestures,
            timings,
        }
    }

    /// Platform timing constants this dispatcher synthesizes strokes with.
    pub fn timings(&self) -> PlatformTimings {
        self.timings
    }

    /// Tap at a screen point.
    pub async fn tap(&self, at: Point) -> DispatchOutcome {
        if self.injector.tap(at.x, at.y).await {
            debug!(%at, "tap handled by privileged injector");
            return DispatchOutcome::privileged();
        }

        let stroke = GestureStroke::tap(at, self.timings.tap_timeout_ms);
        let accepted = self.gestures.dispatch(stroke).await;
        debug!(%at, accepted, "tap fell back to gesture dispatch");
        DispatchOutcome::fallback(accepted)
    }

    /// Swipe between two screen points.
    ///
    /// The privileged tier receives the raw movement duration plus the
    /// drag-drop flag and times any hold itself. The fallback tier has no
    /// such notion, so for drag-drop the hold is folded into a single stroke
    /// of `duration_ms + hold_ms`.
    pub async fn swipe(
        &self,
        from: Point,
        to: Point,
        duration_ms: u64,
        hold_ms: u64,
        drag_drop: bool,
    ) -> DispatchOutcome {
        if self
            .injector
            .swipe(from.x, from.y, to.x, to.y, duration_ms, drag_drop)
            .await
        {
            debug!(%from, %to, duration_ms, drag_drop, "swipe handled by privileged injector");
            return DispatchOutcome::privileged();
        }

        let stroke_ms = if drag_drop && hold_ms > 0 {
            duration_ms + hold_ms
        } else {
            duration_ms
        };
        let stroke = GestureStroke::line(from, to, stroke_ms);
        let accepted = self.gestures.dispatch(stroke).await;
        debug!(%from, %to, stroke_ms, accepted, "swipe fell back to gesture dispatch");
        DispatchOutcome::fallback(accepted)
    }

    /// Inject a key event. Only the privileged tier can synthesize keys, so
    /// its refusal is final.
    pub async fn key(&self, key_code: i32) -> DispatchOutcome {
        if self.injector.key(key_code).await {
            return DispatchOutcome::privileged();
        }
        debug!(key_code, "privileged injector refused key event; no fallback tier");
        DispatchOutcome::fallback(false)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;

    struct StubInjector {
        accept: bool,
        taps: AtomicUsize,
        swipes: Mutex<Vec<(f32, f32, f32, f32, u64, bool)>>,
        keys: AtomicUsize,
    }

    impl StubInjector {
        fn new(accept: bool) -> Self {
            Self {
                accept,
                taps: AtomicUsize::new(0),
                swipes: Mutex::new(Vec::new()),
                keys: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl InputInjector for StubInjector {
        async fn tap(&self, _x: f32, _y: f32) -> bool {
            self.taps.fetch_add(1, Ordering::SeqCst);
            self.accept
        }

        async fn swipe(
            &self,
            x1: f32,
            y1: f32,
            x2: f32,
            y2: f32,
            duration_ms: u64,
            drag_drop: bool,
        ) -> bool {
            self.swipes
                .lock()
                .unwrap()
                .push((x1, y1, x2, y2, duration_ms, drag_drop));
            self.accept
        }

        async fn key(&self, _key_code: i32) -> bool {
            self.keys.fetch_add(1, Ordering::SeqCst);
            self.accept
        }
    }

    struct StubGestures {
        accept: bool,
        strokes: Mutex<Vec<GestureStroke>>,
    }

    impl StubGestures {
        fn new(accept: bool) -> Self {
            Self {
                accept,
                strokes: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl GestureDispatcher for StubGestures {
        async fn dispatch(&self, stroke: GestureStroke) -> bool {
            self.strokes.lock().unwrap().push(stroke);
            self.accept
        }
    }

    fn dispatcher(
        injector_accepts: bool,
        gestures_accept: bool,
    ) -> (InputDispatcher, Arc<StubInjector>, Arc<StubGestures>) {
        let injector = Arc::new(StubInjector::new(injector_accepts));
        let gestures = Arc::new(StubGestures::new(gestures_accept));
        let dispatcher = InputDispatcher::new(
            injector.clone(),
            gestures.clone(),
            PlatformTimings::default(),
        );
        (dispatcher, injector, gestures)
    }

    #[tokio::test]
    async fn privileged_success_skips_fallback() {
        let (dispatcher, _, gestures) = dispatcher(true, false);

        let outcome = dispatcher.tap(Point::new(10.0, 20.0)).await;

        assert!(outcome.accepted);
        assert!(outcome.privileged);
        assert_eq!(gestures.strokes.lock().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn privileged_refusal_falls_back_exactly_once() {
        let (dispatcher, injector, gestures) = dispatcher(false, true);

        let outcome = dispatcher.tap(Point::new(10.0, 20.0)).await;

        assert!(outcome.accepted);
        assert!(!outcome.privileged);
        assert_eq!(injector.taps.load(Ordering::SeqCst), 1);
        assert_eq!(gestures.strokes.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn fallback_refusal_is_final() {
        let (dispatcher, _, gestures) = dispatcher(false, false);

        let outcome = dispatcher
            .swipe(Point::new(0.0, 0.0), Point::new(100.0, 0.0), 350, 0, false)
            .await;

        assert!(!outcome.accepted);
        assert!(!outcome.privileged);
        assert_eq!(gestures.strokes.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn fallback_tap_uses_platform_tap_timeout() {
        let (dispatcher, _, gestures) = dispatcher(false, true);

        dispatcher.tap(Point::new(5.0, 5.0)).await;

        let strokes = gestures.strokes.lock().unwrap();
        assert_eq!(strokes[0].points.len(), 1);
        assert_eq!(strokes[0].duration_ms, PlatformTimings::default().tap_timeout_ms);
    }

    #[tokio::test]
    async fn drag_drop_folds_hold_into_fallback_stroke() {
        let (dispatcher, injector, gestures) = dispatcher(false, true);

        dispatcher
            .swipe(Point::new(0.0, 0.0), Point::new(0.0, 200.0), 350, 500, true)
            .await;

        // Privileged tier saw the raw duration plus the flag.
        let swipes = injector.swipes.lock().unwrap();
        assert_eq!(swipes[0].4, 350);
        assert!(swipes[0].5);

        // Fallback stroke carries movement plus hold.
        let strokes = gestures.strokes.lock().unwrap();
        assert_eq!(strokes[0].duration_ms, 850);
        assert_eq!(strokes[0].points.len(), 2);
    }

    #[tokio::test]
    async fn plain_swipe_keeps_raw_duration_on_fallback() {
        let (dispatcher, _, gestures) = dispatcher(false, true);

        dispatcher
            .swipe(Point::new(0.0, 0.0), Point::new(0.0, 200.0), 350, 500, false)
            .await;

        assert_eq!(gestures.strokes.lock().unwrap()[0].duration_ms, 350);
    }

    #[tokio::test]
    async fn key_has_no_fallback_tier() {
        let (dispatcher, injector, gestures) = dispatcher(false, true);

        let outcome = dispatcher.key(4).await;

        assert!(!outcome.accepted);
        assert!(!outcome.privileged);
        assert_eq!(injector.keys.load(Ordering::SeqCst), 1);
        assert_eq!(gestures.strokes.lock().unwrap().len(), 0);
    }
}
