//! Browser implementation of [`RevealPlatform`].
//!
//! Two thread-local registries back it. The viewport watcher re-checks
//! observed elements against their thresholds on `scroll` and `resize`,
//! coalescing all events of a frame into one check on the next animation
//! frame. The ticker advances scheduled transitions once per animation frame
//! and writes them to the elements' inline `opacity` and `transform`.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use log::{debug, info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, HtmlElement};

use super::binding::ScrollReveal;
use super::platform::{CompletionCallback, RevealPlatform, VisibilityCallback};
use super::profile::VisualState;
use super::threshold::Threshold;
use super::tween::TransitionSpec;

struct Watcher {
    element: HtmlElement,
    threshold: Threshold,
    inside: bool,
    on_change: Rc<RefCell<VisibilityCallback>>,
}

#[derive(Default)]
struct Watchers {
    entries: HashMap<u32, Watcher>,
    next_id: u32,
}

struct ActiveTween {
    element: HtmlElement,
    spec: TransitionSpec,
    started_at: f64,
    last: Option<VisualState>,
    on_complete: Option<CompletionCallback>,
}

/// Lets one request through per frame: after a successful `request`, later
/// ones are refused until the scheduled frame calls `fire`.
struct FrameGate {
    pending: Cell<bool>,
}

impl FrameGate {
    const fn new() -> Self {
        Self {
            pending: Cell::new(false),
        }
    }

    fn request(&self) -> bool {
        !self.pending.replace(true)
    }

    fn fire(&self) {
        self.pending.set(false);
    }
}

#[derive(Default)]
struct Ticker {
    tweens: HashMap<u32, ActiveTween>,
    next_id: u32,
    running: bool,
}

thread_local! {
    static INSTALLED: Cell<bool> = Cell::new(false);
    static LISTENER: RefCell<Option<Closure<dyn FnMut()>>> = RefCell::new(None);
    static CHECK_GATE: FrameGate = FrameGate::new();
    static WATCHERS: RefCell<Watchers> = RefCell::new(Watchers::default());
    static TICKER: RefCell<Ticker> = RefCell::new(Ticker::default());
}

/// Registers the shared scroll/resize listener. Only the first call does
/// anything; later calls return `false`.
pub fn install() -> bool {
    if INSTALLED.with(|installed| installed.get()) {
        return false;
    }
    let Some(window) = web_sys::window() else {
        warn!("no window, scroll reveal disabled");
        return false;
    };

    let listener = Closure::<dyn FnMut()>::new(schedule_check);
    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    for event in ["scroll", "resize"] {
        if let Err(err) = window.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            listener.as_ref().unchecked_ref(),
            &options,
        ) {
            warn!("failed to listen for {}: {:?}", event, err);
        }
    }

    LISTENER.with(|slot| *slot.borrow_mut() = Some(listener));
    INSTALLED.with(|installed| installed.set(true));
    info!("Scroll reveal installed");
    true
}

/// Reveal controller backed by the live document.
pub fn dom_reveal() -> ScrollReveal<DomPlatform> {
    ScrollReveal::new(Rc::new(DomPlatform))
}

/// Runs `callback` on the next animation frame. Returns `false` if the frame
/// could not be requested.
pub(crate) fn request_frame(callback: impl FnOnce(f64) + 'static) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let closure = Closure::once_into_js(callback);
    match window.request_animation_frame(closure.unchecked_ref()) {
        Ok(_) => true,
        Err(err) => {
            warn!("requestAnimationFrame failed: {:?}", err);
            false
        }
    }
}

/// Monotonic clock in seconds.
pub(crate) fn now_seconds() -> f64 {
    web_sys::window()
        .and_then(|window| window.performance())
        .map(|performance| performance.now() / 1000.0)
        .unwrap_or(0.0)
}

fn viewport_height() -> Option<f64> {
    web_sys::window()?.inner_height().ok()?.as_f64()
}

fn schedule_check() {
    if !CHECK_GATE.with(FrameGate::request) {
        return;
    }
    let requested = request_frame(|_| {
        CHECK_GATE.with(FrameGate::fire);
        check_watchers();
    });
    if !requested {
        CHECK_GATE.with(FrameGate::fire);
    }
}

fn check_watchers() {
    let Some(height) = viewport_height() else {
        return;
    };
    let changed: Vec<_> = WATCHERS.with(|watchers| {
        watchers
            .borrow_mut()
            .entries
            .values_mut()
            .filter_map(|watcher| {
                // Detached elements report an all-zero box.
                if !watcher.element.is_connected() {
                    return None;
                }
                let rect = watcher.element.get_bounding_client_rect();
                let inside = watcher.threshold.contains(rect.top(), rect.bottom(), height);
                if inside == watcher.inside {
                    return None;
                }
                watcher.inside = inside;
                Some((watcher.on_change.clone(), inside))
            })
            .collect()
    });

    for (callback, inside) in changed {
        match callback.try_borrow_mut() {
            Ok(mut callback) => (*callback)(inside),
            Err(_) => debug!("visibility callback re-entered, skipping"),
        }
    }
}

fn apply_style(element: &HtmlElement, state: &VisualState) {
    let style = element.style();
    if let Err(err) = style.set_property("opacity", &state.opacity_css()) {
        debug!("failed to set opacity: {:?}", err);
    }
    if let Err(err) = style.set_property("transform", &state.transform()) {
        debug!("failed to set transform: {:?}", err);
    }
}

fn start_ticker() {
    let start = TICKER.with(|ticker| {
        let mut ticker = ticker.borrow_mut();
        !std::mem::replace(&mut ticker.running, true)
    });
    if start && !request_frame(tick) {
        TICKER.with(|ticker| ticker.borrow_mut().running = false);
    }
}

fn tick(_timestamp: f64) {
    let now = now_seconds();
    let (frames, done, more) = TICKER.with(|ticker| {
        let mut ticker = ticker.borrow_mut();
        let mut frames = Vec::new();
        let mut done = Vec::new();
        ticker.tweens.retain(|_, tween| {
            let elapsed = now - tween.started_at;
            if let Some(state) = tween.spec.sample(elapsed) {
                tween.last = Some(state);
                frames.push((tween.element.clone(), state));
            }
            if !tween.spec.is_finished(elapsed) {
                return true;
            }
            if let Some(on_complete) = tween.on_complete.take() {
                done.push(on_complete);
            }
            false
        });
        let more = !ticker.tweens.is_empty();
        ticker.running = more;
        (frames, done, more)
    });

    for (element, state) in &frames {
        apply_style(element, state);
    }
    for on_complete in done {
        on_complete();
    }
    if more && !request_frame(tick) {
        TICKER.with(|ticker| ticker.borrow_mut().running = false);
    }
}

#[derive(Debug)]
pub struct WatchId(u32);

#[derive(Debug)]
pub struct TweenId(u32);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DomPlatform;

impl RevealPlatform for DomPlatform {
    type Element = HtmlElement;
    type Watch = WatchId;
    type Tween = TweenId;

    fn children(&self, container: &HtmlElement) -> Vec<HtmlElement> {
        let collection = container.children();
        (0..collection.length())
            .filter_map(|index| collection.item(index))
            .filter_map(|element| element.dyn_into::<HtmlElement>().ok())
            .collect()
    }

    fn apply(&self, element: &HtmlElement, state: &VisualState) {
        apply_style(element, state);
    }

    fn observe(
        &self,
        element: &HtmlElement,
        threshold: Threshold,
        on_change: VisibilityCallback,
    ) -> WatchId {
        install();
        let id = WATCHERS.with(|watchers| {
            let mut watchers = watchers.borrow_mut();
            let id = watchers.next_id;
            watchers.next_id = watchers.next_id.wrapping_add(1);
            watchers.entries.insert(
                id,
                Watcher {
                    element: element.clone(),
                    threshold,
                    inside: false,
                    on_change: Rc::new(RefCell::new(on_change)),
                },
            );
            id
        });
        // Elements already on screen reveal without waiting for a scroll.
        schedule_check();
        WatchId(id)
    }

    fn unobserve(&self, watch: WatchId) {
        WATCHERS.with(|watchers| watchers.borrow_mut().entries.remove(&watch.0));
    }

    fn now(&self) -> f64 {
        now_seconds()
    }

    fn schedule_transition(
        &self,
        element: &HtmlElement,
        spec: TransitionSpec,
        started_at: f64,
        on_complete: CompletionCallback,
    ) -> TweenId {
        let id = TICKER.with(|ticker| {
            let mut ticker = ticker.borrow_mut();
            let id = ticker.next_id;
            ticker.next_id = ticker.next_id.wrapping_add(1);
            ticker.tweens.insert(
                id,
                ActiveTween {
                    element: element.clone(),
                    spec,
                    started_at,
                    last: None,
                    on_complete: Some(on_complete),
                },
            );
            id
        });
        start_ticker();
        TweenId(id)
    }

    fn cancel_transition(&self, tween: TweenId) -> Option<VisualState> {
        TICKER
            .with(|ticker| ticker.borrow_mut().tweens.remove(&tween.0))
            .and_then(|tween| tween.last)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_gate_coalesces_requests() {
        let gate = FrameGate::new();
        // a burst of scroll and resize events within one frame
        let granted = (0..12).filter(|_| gate.request()).count();
        assert_eq!(granted, 1);

        gate.fire();
        assert!(gate.request());
        assert!(!gate.request());
    }

    #[test]
    fn test_frame_gate_reopens_when_frame_unavailable() {
        let gate = FrameGate::new();
        assert!(gate.request());
        // schedule_check fires the gate itself when no frame could be requested
        gate.fire();
        assert!(gate.request());
    }
}
