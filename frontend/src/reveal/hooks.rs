use std::cell::{Cell, RefCell};
use std::rc::Rc;

use web_sys::HtmlElement;
use yew::functional::UseStateSetter;
use yew::prelude::*;

use super::dom::{dom_reveal, now_seconds, request_frame, DomPlatform, WatchId};
use super::easing::Easing;
use super::options::RevealConfig;
use super::platform::RevealPlatform;
use super::threshold::{Edge, Threshold};

/// Reveals the element the returned ref is attached to. The binding lives
/// as long as the component and is rebuilt when `config` changes.
#[hook]
pub fn use_scroll_reveal(config: RevealConfig) -> NodeRef {
    let node = use_node_ref();
    {
        let node = node.clone();
        use_effect_with_deps(
            move |config| {
                let handle = dom_reveal().attach(node.cast::<HtmlElement>().as_ref(), config);
                move || handle.release()
            },
            config,
        );
    }
    node
}

/// Reveals the direct children of the element the returned ref is attached
/// to, one after another.
#[hook]
pub fn use_stagger_reveal(config: RevealConfig) -> NodeRef {
    let node = use_node_ref();
    {
        let node = node.clone();
        use_effect_with_deps(
            move |config| {
                let handle = dom_reveal().attach_group(node.cast::<HtmlElement>().as_ref(), config);
                move || handle.release()
            },
            config,
        );
    }
    node
}

/// Counter trigger line: the element's centre on the bottom edge of the
/// viewport, i.e. half of it on screen.
const HALF_VISIBLE: Threshold = Threshold {
    edge: Edge::Center,
    viewport_fraction: 1.0,
};

/// Passes the first entry through and nothing after it.
#[derive(Debug, Default)]
struct OnceTrigger {
    fired: Cell<bool>,
}

impl OnceTrigger {
    fn fire(&self, inside: bool) -> bool {
        inside && !self.fired.replace(true)
    }
}

/// Value shown `elapsed_ms` into a count from 0 to `end`.
pub fn count_at(end: u32, elapsed_ms: f64, duration_ms: f64) -> u32 {
    if duration_ms <= 0.0 {
        return end;
    }
    let progress = Easing::Linear.apply(elapsed_ms / duration_ms);
    (progress * end as f64).floor() as u32
}

fn run_count(
    end: u32,
    duration_ms: f64,
    started_at: f64,
    count: UseStateSetter<u32>,
    alive: Rc<Cell<bool>>,
) {
    request_frame(move |_| {
        if !alive.get() {
            return;
        }
        let elapsed_ms = (now_seconds() - started_at) * 1000.0;
        count.set(count_at(end, elapsed_ms, duration_ms));
        if elapsed_ms < duration_ms {
            run_count(end, duration_ms, started_at, count, alive);
        }
    });
}

/// Counts from 0 up to `end` over `duration_ms` once the element is half
/// visible. Returns the ref to attach and the current value.
#[hook]
pub fn use_count_up(end: u32, duration_ms: u32) -> (NodeRef, u32) {
    let node = use_node_ref();
    let count = use_state(|| 0u32);
    {
        let node = node.clone();
        let setter = count.setter();
        use_effect_with_deps(
            move |&(end, duration_ms)| {
                let alive = Rc::new(Cell::new(true));
                let slot: Rc<RefCell<Option<WatchId>>> = Rc::new(RefCell::new(None));
                if let Some(element) = node.cast::<HtmlElement>() {
                    let alive = alive.clone();
                    let own_slot = slot.clone();
                    let trigger = OnceTrigger::default();
                    let watch = DomPlatform.observe(
                        &element,
                        HALF_VISIBLE,
                        Box::new(move |inside| {
                            if !trigger.fire(inside) {
                                return;
                            }
                            // Counted once, so stop checking this element on scroll.
                            let watch = own_slot.borrow_mut().take();
                            if let Some(watch) = watch {
                                DomPlatform.unobserve(watch);
                            }
                            run_count(end, duration_ms as f64, now_seconds(), setter.clone(), alive.clone());
                        }),
                    );
                    *slot.borrow_mut() = Some(watch);
                }
                move || {
                    alive.set(false);
                    let watch = slot.borrow_mut().take();
                    if let Some(watch) = watch {
                        DomPlatform.unobserve(watch);
                    }
                }
            },
            (end, duration_ms),
        );
    }
    (node, *count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_starts_when_half_visible() {
        let viewport = 800.0;
        // 200px tall element whose top is 700px down: exactly half on screen
        assert!(HALF_VISIBLE.contains(700.0, 900.0, viewport));
        assert!(HALF_VISIBLE.contains(650.0, 850.0, viewport));
        assert!(!HALF_VISIBLE.contains(701.0, 901.0, viewport));
        assert!(!HALF_VISIBLE.contains(900.0, 1100.0, viewport));
    }

    #[test]
    fn test_counter_trigger_fires_once() {
        let trigger = OnceTrigger::default();
        assert!(!trigger.fire(false));
        assert!(trigger.fire(true));
        assert!(!trigger.fire(false));
        assert!(!trigger.fire(true));
        assert!(!trigger.fire(true));
    }

    #[test]
    fn test_count_at_floors_progress() {
        assert_eq!(count_at(300, 0.0, 2000.0), 0);
        assert_eq!(count_at(300, 1000.0, 2000.0), 150);
        assert_eq!(count_at(300, 1999.0, 2000.0), 299);
        assert_eq!(count_at(300, 2500.0, 2000.0), 300);
        assert_eq!(count_at(50, 10.0, 0.0), 50);
        assert_eq!(count_at(7, -5.0, 100.0), 0);
    }
}
