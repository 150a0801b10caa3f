use super::profile::VisualState;
use super::threshold::Threshold;
use super::tween::TransitionSpec;

/// Called with `true` when the element enters its trigger region and
/// `false` when it leaves.
pub type VisibilityCallback = Box<dyn FnMut(bool)>;

/// Called once a transition has applied its final frame.
pub type CompletionCallback = Box<dyn FnOnce()>;

/// Capabilities the reveal controller needs from its host.
///
/// Implementations are single-threaded and must never invoke a callback
/// synchronously from inside `observe` or `schedule_transition`: callbacks
/// run later, from event or frame handlers, so a binding can safely call
/// back into the platform while it is being notified.
pub trait RevealPlatform: 'static {
    type Element: Clone + 'static;
    /// Registration token for an observed element.
    type Watch;
    /// Handle to a running or pending transition.
    type Tween;

    /// Direct children of `container`, in document order.
    fn children(&self, container: &Self::Element) -> Vec<Self::Element>;

    /// Presents `state` on `element` immediately.
    fn apply(&self, element: &Self::Element, state: &VisualState);

    fn observe(
        &self,
        element: &Self::Element,
        threshold: Threshold,
        on_change: VisibilityCallback,
    ) -> Self::Watch;

    fn unobserve(&self, watch: Self::Watch);

    /// Monotonic clock in seconds.
    fn now(&self) -> f64;

    /// Runs `spec` on `element`, measuring its delay from `started_at` on the
    /// [`now`](Self::now) clock.
    fn schedule_transition(
        &self,
        element: &Self::Element,
        spec: TransitionSpec,
        started_at: f64,
        on_complete: CompletionCallback,
    ) -> Self::Tween;

    /// Stops a transition before its next frame. Returns the last state it
    /// applied, or `None` if it never got past its delay.
    fn cancel_transition(&self, tween: Self::Tween) -> Option<VisualState>;
}
