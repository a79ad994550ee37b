//! Recursive gesture interpreter

use std::sync::Arc;
use std::time::Instant;

use async_recursion::async_recursion;
use gesture_model::{ActionResult, GestureAction, GestureKind};
use input_backends::{DispatchOutcome, InputDispatcher};
use tapflow_core_types::{Point, ScreenRect, UiNode};
use tokio::time::sleep;
use tracing::{debug, info, warn};

use crate::{
    bridge::{ActiveRootProvider, ScreenMetrics, SelectorEngine},
    errors::GestureError,
    policy,
    types::ExecCtx,
};

/// Interprets gesture descriptor trees against the live accessibility tree.
///
/// One `perform` call is one logical task: internally sequential, suspending
/// only at poll sleeps and backend dispatches, and cancellable through the
/// context's token at every suspension point. The executor holds no state
/// across calls; collaborators are re-queried fresh each time they are
/// needed.
pub struct GestureExecutor {
    selectors: Arc<dyn SelectorEngine>,
    roots: Arc<dyn ActiveRootProvider>,
    screen: Arc<dyn ScreenMetrics>,
    input: InputDispatcher,
}

impl GestureExecutor {
    /// Create an executor over the given collaborators and backend chain.
    pub fn new(
        selectors: Arc<dyn SelectorEngine>,
        roots: Arc<dyn ActiveRootProvider>,
        screen: Arc<dyn ScreenMetrics>,
        input: InputDispatcher,
    ) -> Self {
        Self {
            selectors,
            roots,
            screen,
            input,
        }
    }

    /// Interpret `action` with geometry relative to `node`.
    ///
    /// Never fails with an error: every outcome, including malformed
    /// descriptors and exhausted backends, is an [`ActionResult`] echoing the
    /// originating kind.
    pub async fn perform(
        &self,
        action: &GestureAction,
        node: &dyn UiNode,
        ctx: &ExecCtx,
    ) -> ActionResult {
        info!(
            action_id = %ctx.action_id,
            kind = %action.kind,
            "performing gesture action"
        );
        self.dispatch(action, node, ctx).await
    }

    /// Dispatch one node of the tree. This is the single seam where internal
    /// errors become failed results.
    #[async_recursion]
    async fn dispatch(
        &self,
        action: &GestureAction,
        node: &dyn UiNode,
        ctx: &ExecCtx,
    ) -> ActionResult {
        let outcome = if ctx.is_cancelled() {
            Err(GestureError::Interrupted)
        } else {
            match action.kind {
                GestureKind::GestureChain => self.perform_chain(action, node, ctx).await,
                GestureKind::AwaitState => self.perform_await_state(action, ctx).await,
                GestureKind::SwipeRelative => {
                    self.perform_swipe_relative(action, node, ctx, false).await
                }
                GestureKind::LongPressThenSwipe => {
                    self.perform_swipe_relative(action, node, ctx, true).await
                }
                GestureKind::OffsetClick => self.perform_offset_click(action, node, ctx).await,
                GestureKind::Unknown => Err(GestureError::UnsupportedKind(action.kind)),
            }
        };

        match outcome {
            Ok(result) => result,
            Err(err) => {
                warn!(
                    action_id = %ctx.action_id,
                    kind = %action.kind,
                    error = %err,
                    "gesture action failed"
                );
                ActionResult::failure(action.kind).with_error(err.to_string())
            }
        }
    }

    /// Execute chain children strictly in order against the same context
    /// node, stopping at the first failure. Earlier, already-dispatched steps
    /// are not undone.
    async fn perform_chain(
        &self,
        action: &GestureAction,
        node: &dyn UiNode,
        ctx: &ExecCtx,
    ) -> Result<ActionResult, GestureError> {
        let steps = action.steps.as_deref().ok_or(GestureError::MissingField {
            kind: action.kind,
            field: "steps",
        })?;
        if steps.is_empty() {
            return Err(GestureError::EmptyChain);
        }

        for (index, step) in steps.iter().enumerate() {
            debug!(
                action_id = %ctx.action_id,
                step = index,
                kind = %step.kind,
                "executing chain step"
            );
            let result = self.dispatch(step, node, ctx).await;
            if !result.success {
                let reason = result
                    .error
                    .unwrap_or_else(|| format!("step {index} ({}) failed", step.kind));
                return Ok(ActionResult::failure(action.kind).with_error(reason));
            }
        }

        Ok(ActionResult::success(action.kind))
    }

    /// Poll the active window until the selector matches or the deadline
    /// passes. The root handle is re-fetched every iteration and dropped
    /// before the sleep; nothing from one poll survives into the next.
    async fn perform_await_state(
        &self,
        action: &GestureAction,
        ctx: &ExecCtx,
    ) -> Result<ActionResult, GestureError> {
        let source = action.selector.as_deref().ok_or(GestureError::MissingField {
            kind: action.kind,
            field: "selector",
        })?;
        let selector = self
            .selectors
            .parse(source)
            .ok_or_else(|| GestureError::SelectorParse(source.to_string()))?;

        let timeout_ms = policy::await_timeout_ms(action.timeout_ms);
        let started = Instant::now();

        loop {
            if let Some(root) = self.roots.active_root() {
                if self
                    .selectors
                    .query(root.as_ref(), &selector, &ctx.match_options)
                    .is_some()
                {
                    debug!(
                        action_id = %ctx.action_id,
                        selector = %selector,
                        elapsed_ms = started.elapsed().as_millis() as u64,
                        "await condition met"
                    );
                    return Ok(ActionResult::success(action.kind));
                }
            }

            if started.elapsed().as_millis() as u64 >= timeout_ms {
                return Err(GestureError::StateTimeout(timeout_ms));
            }

            tokio::select! {
                _ = ctx.cancel_token.cancelled() => return Err(GestureError::Interrupted),
                _ = sleep(policy::AWAIT_POLL_INTERVAL) => {}
            }
        }
    }

    /// Shared body of `SwipeRelative` and `LongPressThenSwipe`; the two
    /// differ only in the drag-drop flag and hold handling.
    async fn perform_swipe_relative(
        &self,
        action: &GestureAction,
        node: &dyn UiNode,
        ctx: &ExecCtx,
        drag_drop: bool,
    ) -> Result<ActionResult, GestureError> {
        let direction = action.direction.ok_or(GestureError::MissingField {
            kind: action.kind,
            field: "direction",
        })?;

        let rect = self.anchor_bounds(action.anchor.as_deref(), node, ctx)?;
        let ratio = policy::distance_ratio(action.distance_ratio);
        let (start, end) = policy::swipe_span(&rect, direction, ratio);
        let start = self.clamp_to_screen(start);
        let end = self.clamp_to_screen(end);

        let duration_ms = policy::swipe_duration_ms(action.duration_ms);
        let hold_ms = if drag_drop {
            policy::hold_duration_ms(action.hold_ms, self.input.timings().long_press_timeout_ms)
        } else {
            0
        };

        debug!(
            action_id = %ctx.action_id,
            %direction,
            %start,
            %end,
            duration_ms,
            hold_ms,
            drag_drop,
            "dispatching swipe"
        );
        let outcome = self
            .input
            .swipe(start, end, duration_ms, hold_ms, drag_drop)
            .await;
        Ok(dispatch_result(action.kind, outcome, start))
    }

    /// Tap at a ratio offset inside the anchor rectangle.
    async fn perform_offset_click(
        &self,
        action: &GestureAction,
        node: &dyn UiNode,
        ctx: &ExecCtx,
    ) -> Result<ActionResult, GestureError> {
        let x_ratio = action.x_ratio.ok_or(GestureError::MissingField {
            kind: action.kind,
            field: "xRatio",
        })?;
        let y_ratio = action.y_ratio.ok_or(GestureError::MissingField {
            kind: action.kind,
            field: "yRatio",
        })?;

        let rect = self.anchor_bounds(action.anchor.as_deref(), node, ctx)?;
        let point = self.clamp_to_screen(policy::offset_point(&rect, x_ratio, y_ratio));

        debug!(action_id = %ctx.action_id, %point, "dispatching tap");
        let outcome = self.input.tap(point).await;
        Ok(dispatch_result(action.kind, outcome, point))
    }

    /// Bounds of the node a gesture is computed against: the context node, or
    /// the single match of an explicit anchor selector under the current
    /// active root. The resolved handle lives only long enough to read its
    /// rectangle.
    fn anchor_bounds(
        &self,
        anchor: Option<&str>,
        node: &dyn UiNode,
        ctx: &ExecCtx,
    ) -> Result<ScreenRect, GestureError> {
        let Some(source) = anchor else {
            return Ok(node.bounds_in_screen());
        };

        let selector = self
            .selectors
            .parse(source)
            .ok_or_else(|| GestureError::SelectorParse(source.to_string()))?;
        let root = self.roots.active_root().ok_or(GestureError::NoActiveRoot)?;
        let hit = self
            .selectors
            .query(root.as_ref(), &selector, &ctx.match_options)
            .ok_or_else(|| GestureError::AnchorNotFound(source.to_string()))?;
        Ok(hit.bounds_in_screen())
    }

    /// Clamp a computed point into the screen, querying metrics fresh so
    /// rotation or display changes are picked up per call.
    fn clamp_to_screen(&self, point: Point) -> Point {
        policy::clamp_point(point, self.screen.width(), self.screen.height())
    }
}

/// Fold a backend outcome into a tagged result. Rejected dispatches keep the
/// starting point for diagnostics, like accepted ones.
fn dispatch_result(kind: GestureKind, outcome: DispatchOutcome, position: Point) -> ActionResult {
    let result = if outcome.accepted {
        ActionResult::success(kind)
    } else {
        ActionResult::failure(kind).with_error(GestureError::BackendRejected.to_string())
    };
    result
        .with_privileged(outcome.privileged)
        .with_position(position)
}
