//! The reveal controller: binds elements to viewport triggers and drives their
//! entrance transitions.
//!
//! Every binding walks the phases
//! `Hidden -> Revealing -> Revealed (-> Hiding -> Hidden when repeatable)`.
//! A [`RevealHandle`] owns its binding; dropping or releasing the handle
//! cancels pending transitions and deregisters the trigger.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use super::easing::Easing;
use super::options::{RevealConfig, ELEMENT_DURATION, GROUP_DURATION};
use super::platform::RevealPlatform;
use super::profile::{VisualState, ELEMENT_OFFSET, GROUP_OFFSET};
use super::tween::TransitionSpec;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealPhase {
    Hidden,
    Revealing,
    Revealed,
    Hiding,
}

/// One animated element and the transition currently driving it.
struct Slot<P: RevealPlatform> {
    element: P::Element,
    tween: Option<P::Tween>,
    from: VisualState,
    to: VisualState,
}

struct Binding<P: RevealPlatform> {
    me: Weak<RefCell<Binding<P>>>,
    platform: Rc<P>,
    config: RevealConfig,
    hidden: VisualState,
    shown: VisualState,
    slots: Vec<Slot<P>>,
    watch: Option<P::Watch>,
    phase: RevealPhase,
    // Bumped on every change of direction so stale completions are ignored.
    generation: u64,
    pending: usize,
    released: bool,
}

impl<P: RevealPlatform> Binding<P> {
    fn on_visibility(&mut self, inside: bool) {
        if self.released {
            return;
        }
        match (inside, self.phase) {
            (true, RevealPhase::Hidden | RevealPhase::Hiding) => self.play(true),
            (false, RevealPhase::Revealing | RevealPhase::Revealed) if self.config.repeatable => {
                self.play(false)
            }
            _ => {}
        }
    }

    /// Starts every slot towards the shown (`forward`) or hidden state from
    /// wherever it currently is.
    fn play(&mut self, forward: bool) {
        self.generation += 1;
        let generation = self.generation;
        let target = if forward { self.shown } else { self.hidden };
        // One clock read so group offsets are exactly `stagger * index`.
        let started_at = self.platform.now();

        for index in 0..self.slots.len() {
            let current = self.halt(index);
            // Reversing runs every child at once.
            let delay = if forward {
                self.config.delay + self.config.stagger * index as f64
            } else {
                0.0
            };
            let spec = TransitionSpec {
                from: current,
                to: target,
                delay,
                duration: self.config.duration,
                easing: Easing::Power3Out,
            };

            let me = self.me.clone();
            let on_complete = Box::new(move || {
                if let Some(binding) = me.upgrade() {
                    binding.borrow_mut().finish(index, generation);
                }
            });
            let tween = self
                .platform
                .schedule_transition(&self.slots[index].element, spec, started_at, on_complete);

            let slot = &mut self.slots[index];
            slot.tween = Some(tween);
            slot.from = current;
            slot.to = target;
        }

        self.pending = self.slots.len();
        self.phase = if forward {
            RevealPhase::Revealing
        } else {
            RevealPhase::Hiding
        };
        log::debug!("reveal binding now {:?}", self.phase);
    }

    /// Cancels the slot's transition and returns the state it was left in.
    fn halt(&mut self, index: usize) -> VisualState {
        let platform = &self.platform;
        let slot = &mut self.slots[index];
        match slot.tween.take() {
            Some(tween) => platform.cancel_transition(tween).unwrap_or(slot.from),
            None => slot.to,
        }
    }

    fn finish(&mut self, index: usize, generation: u64) {
        if self.released || generation != self.generation {
            return;
        }
        let slot = &mut self.slots[index];
        if slot.tween.take().is_none() {
            return;
        }
        slot.from = slot.to;

        self.pending = self.pending.saturating_sub(1);
        if self.pending > 0 {
            return;
        }
        self.phase = match self.phase {
            RevealPhase::Revealing => RevealPhase::Revealed,
            RevealPhase::Hiding => RevealPhase::Hidden,
            phase => phase,
        };

        // Play-once bindings have nothing left to react to.
        if self.phase == RevealPhase::Revealed && !self.config.repeatable {
            if let Some(watch) = self.watch.take() {
                self.platform.unobserve(watch);
            }
        }
    }

    fn release(&mut self) {
        if self.released {
            return;
        }
        self.released = true;
        for slot in self.slots.iter_mut() {
            if let Some(tween) = slot.tween.take() {
                self.platform.cancel_transition(tween);
            }
        }
        if let Some(watch) = self.watch.take() {
            self.platform.unobserve(watch);
        }
    }
}

/// Owner of one reveal binding. Releases the binding when dropped.
pub struct RevealHandle<P: RevealPlatform> {
    binding: Option<Rc<RefCell<Binding<P>>>>,
}

impl<P: RevealPlatform> RevealHandle<P> {
    /// A handle with nothing bound, returned when there was nothing to animate.
    pub fn inert() -> Self {
        Self { binding: None }
    }

    #[cfg(test)]
    pub fn is_inert(&self) -> bool {
        self.binding.is_none()
    }

    /// Current phase, or `None` for an inert handle.
    #[cfg(test)]
    pub fn phase(&self) -> Option<RevealPhase> {
        self.binding.as_ref().map(|binding| binding.borrow().phase)
    }

    /// Cancels pending transitions and deregisters the trigger. Safe to call
    /// any number of times.
    pub fn release(&self) {
        if let Some(binding) = &self.binding {
            binding.borrow_mut().release();
        }
    }
}

impl<P: RevealPlatform> Drop for RevealHandle<P> {
    fn drop(&mut self) {
        self.release();
    }
}

/// Entry point for creating reveal bindings on a platform.
pub struct ScrollReveal<P: RevealPlatform> {
    platform: Rc<P>,
}

impl<P: RevealPlatform> Clone for ScrollReveal<P> {
    fn clone(&self) -> Self {
        Self {
            platform: self.platform.clone(),
        }
    }
}

impl<P: RevealPlatform> ScrollReveal<P> {
    pub fn new(platform: Rc<P>) -> Self {
        Self { platform }
    }

    /// Reveals a single element when it crosses `config.threshold`.
    /// A missing target yields an inert handle.
    pub fn attach(&self, target: Option<&P::Element>, config: &RevealConfig) -> RevealHandle<P> {
        let Some(target) = target else {
            log::debug!("reveal target missing, nothing to attach");
            return RevealHandle::inert();
        };
        let config = config.sanitized(ELEMENT_DURATION);
        let hidden = config.profile.initial(ELEMENT_OFFSET);
        self.bind(vec![target.clone()], target, config, hidden)
    }

    /// Reveals the direct children of `container` one after another, all
    /// keyed to the container's trigger. Empty containers yield an inert handle.
    pub fn attach_group(
        &self,
        container: Option<&P::Element>,
        config: &RevealConfig,
    ) -> RevealHandle<P> {
        let Some(container) = container else {
            log::debug!("reveal container missing, nothing to attach");
            return RevealHandle::inert();
        };
        let children = self.platform.children(container);
        if children.is_empty() {
            log::debug!("reveal container has no children");
            return RevealHandle::inert();
        }
        let config = config.sanitized(GROUP_DURATION);
        let hidden = config.profile.initial(GROUP_OFFSET);
        self.bind(children, container, config, hidden)
    }

    fn bind(
        &self,
        elements: Vec<P::Element>,
        trigger: &P::Element,
        config: RevealConfig,
        hidden: VisualState,
    ) -> RevealHandle<P> {
        for element in &elements {
            self.platform.apply(element, &hidden);
        }

        let shown = config.profile.final_state();
        let threshold = config.threshold;
        let slots = elements
            .into_iter()
            .map(|element| Slot {
                element,
                tween: None,
                from: hidden,
                to: hidden,
            })
            .collect();

        let binding = Rc::new_cyclic(|me| {
            RefCell::new(Binding {
                me: me.clone(),
                platform: self.platform.clone(),
                config,
                hidden,
                shown,
                slots,
                watch: None,
                phase: RevealPhase::Hidden,
                generation: 0,
                pending: 0,
                released: false,
            })
        });

        let weak = Rc::downgrade(&binding);
        let watch = self.platform.observe(
            trigger,
            threshold,
            Box::new(move |inside| {
                if let Some(binding) = weak.upgrade() {
                    binding.borrow_mut().on_visibility(inside);
                }
            }),
        );
        binding.borrow_mut().watch = Some(watch);

        RevealHandle {
            binding: Some(binding),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::collections::HashMap;

    use super::*;
    use crate::reveal::platform::{CompletionCallback, VisibilityCallback};
    use crate::reveal::profile::RevealProfile;
    use crate::reveal::threshold::Threshold;

    const FPS: f64 = 60.0;

    struct FakeTween {
        id: usize,
        element: usize,
        spec: TransitionSpec,
        scheduled_at: f64,
        last: Option<VisualState>,
        on_complete: Option<CompletionCallback>,
    }

    /// In-memory platform with a frame clock advanced by hand.
    #[derive(Default)]
    struct FakePlatform {
        frame: Cell<u64>,
        clock_reads: Cell<usize>,
        children: HashMap<usize, Vec<usize>>,
        applied: RefCell<Vec<(usize, VisualState, f64)>>,
        watches: RefCell<HashMap<usize, (usize, Rc<RefCell<VisibilityCallback>>)>>,
        next_id: Cell<usize>,
        tweens: RefCell<Vec<FakeTween>>,
        scheduled: RefCell<Vec<(usize, TransitionSpec, f64)>>,
    }

    impl FakePlatform {
        fn with_children(container: usize, children: Vec<usize>) -> Self {
            let mut platform = Self::default();
            platform.children.insert(container, children);
            platform
        }

        fn clock(&self) -> f64 {
            self.frame.get() as f64 / FPS
        }

        fn id(&self) -> usize {
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            id
        }

        fn is_observed(&self, element: usize) -> bool {
            self.watches.borrow().values().any(|(e, _)| *e == element)
        }

        fn cross(&self, element: usize, inside: bool) {
            let callbacks: Vec<_> = self
                .watches
                .borrow()
                .values()
                .filter(|(e, _)| *e == element)
                .map(|(_, cb)| cb.clone())
                .collect();
            for callback in callbacks {
                let mut callback = callback.borrow_mut();
                (*callback)(inside);
            }
        }

        fn advance(&self, frames: u64) {
            for _ in 0..frames {
                self.frame.set(self.frame.get() + 1);
                let now = self.clock();
                let mut done = Vec::new();
                {
                    let mut tweens = self.tweens.borrow_mut();
                    for tween in tweens.iter_mut() {
                        let elapsed = now - tween.scheduled_at;
                        if let Some(state) = tween.spec.sample(elapsed) {
                            tween.last = Some(state);
                            self.applied.borrow_mut().push((tween.element, state, now));
                        }
                        if tween.spec.is_finished(elapsed) {
                            if let Some(cb) = tween.on_complete.take() {
                                done.push(cb);
                            }
                        }
                    }
                    tweens.retain(|t| t.on_complete.is_some());
                }
                for cb in done {
                    cb();
                }
            }
        }

        fn applied_count(&self, element: usize) -> usize {
            self.applied.borrow().iter().filter(|(e, _, _)| *e == element).count()
        }

        fn last_state(&self, element: usize) -> Option<VisualState> {
            self.applied
                .borrow()
                .iter()
                .rev()
                .find(|(e, _, _)| *e == element)
                .map(|(_, s, _)| *s)
        }

        fn transitions_for(&self, element: usize) -> Vec<(TransitionSpec, f64)> {
            self.scheduled
                .borrow()
                .iter()
                .filter(|(e, _, _)| *e == element)
                .map(|(_, spec, at)| (*spec, *at))
                .collect()
        }
    }

    impl RevealPlatform for FakePlatform {
        type Element = usize;
        type Watch = usize;
        type Tween = usize;

        fn children(&self, container: &usize) -> Vec<usize> {
            self.children.get(container).cloned().unwrap_or_default()
        }

        fn apply(&self, element: &usize, state: &VisualState) {
            self.applied.borrow_mut().push((*element, *state, self.clock()));
        }

        fn observe(&self, element: &usize, _threshold: Threshold, on_change: VisibilityCallback) -> usize {
            let id = self.id();
            self.watches
                .borrow_mut()
                .insert(id, (*element, Rc::new(RefCell::new(on_change))));
            id
        }

        fn unobserve(&self, watch: usize) {
            self.watches.borrow_mut().remove(&watch);
        }

        fn now(&self) -> f64 {
            self.clock_reads.set(self.clock_reads.get() + 1);
            self.clock()
        }

        fn schedule_transition(
            &self,
            element: &usize,
            spec: TransitionSpec,
            started_at: f64,
            on_complete: CompletionCallback,
        ) -> usize {
            let id = self.id();
            self.scheduled.borrow_mut().push((*element, spec, started_at));
            self.tweens.borrow_mut().push(FakeTween {
                id,
                element: *element,
                spec,
                scheduled_at: started_at,
                last: None,
                on_complete: Some(on_complete),
            });
            id
        }

        fn cancel_transition(&self, tween: usize) -> Option<VisualState> {
            let mut tweens = self.tweens.borrow_mut();
            let index = tweens.iter().position(|t| t.id == tween)?;
            tweens.remove(index).last
        }
    }

    fn setup(platform: FakePlatform) -> (Rc<FakePlatform>, ScrollReveal<FakePlatform>) {
        let platform = Rc::new(platform);
        (platform.clone(), ScrollReveal::new(platform))
    }

    #[test]
    fn test_initial_state_applied_at_attach() {
        for profile in RevealProfile::ALL {
            let (platform, reveal) = setup(FakePlatform::default());
            let _handle = reveal.attach(Some(&1), &RevealConfig::new(profile));
            assert_eq!(platform.last_state(1), Some(profile.initial(ELEMENT_OFFSET)));
            assert_eq!(platform.applied_count(1), 1);
            assert!(platform.scheduled.borrow().is_empty());
            assert!(platform.is_observed(1));
        }
    }

    #[test]
    fn test_fade_up_reveals_within_duration_and_only_once() {
        let (platform, reveal) = setup(FakePlatform::default());
        let handle = reveal.attach(Some(&1), &RevealConfig::default().start("top 85%"));
        assert_eq!(handle.phase(), Some(RevealPhase::Hidden));

        platform.cross(1, true);
        assert_eq!(handle.phase(), Some(RevealPhase::Revealing));
        platform.advance(48); // 0.8s

        let last = platform.last_state(1).unwrap();
        assert_eq!(last.opacity, 1.0);
        assert_eq!(last.y, 0.0);
        assert_eq!(handle.phase(), Some(RevealPhase::Revealed));

        let mutations = platform.applied_count(1);
        platform.cross(1, false);
        platform.cross(1, true);
        platform.advance(120);
        assert_eq!(platform.applied_count(1), mutations);
        assert_eq!(platform.transitions_for(1).len(), 1);
        assert!(!platform.is_observed(1));
    }

    #[test]
    fn test_play_once_ignores_exit_while_revealing() {
        let (platform, reveal) = setup(FakePlatform::default());
        let handle = reveal.attach(Some(&1), &RevealConfig::default());

        platform.cross(1, true);
        platform.advance(10);
        platform.cross(1, false);
        platform.cross(1, true);
        assert_eq!(handle.phase(), Some(RevealPhase::Revealing));
        platform.advance(60);

        assert_eq!(platform.transitions_for(1).len(), 1);
        let reached_final = platform
            .applied
            .borrow()
            .iter()
            .filter(|(_, s, _)| *s == VisualState::RESTING)
            .count();
        assert_eq!(reached_final, 1);
    }

    #[test]
    fn test_repeatable_alternates_through_every_phase() {
        let (platform, reveal) = setup(FakePlatform::default());
        let config = RevealConfig::new(RevealProfile::FadeLeft).repeatable(true);
        let handle = reveal.attach(Some(&1), &config);
        let hidden = RevealProfile::FadeLeft.initial(ELEMENT_OFFSET);

        for _ in 0..2 {
            platform.cross(1, true);
            assert_eq!(handle.phase(), Some(RevealPhase::Revealing));
            platform.advance(60);
            assert_eq!(handle.phase(), Some(RevealPhase::Revealed));
            assert_eq!(platform.last_state(1), Some(VisualState::RESTING));

            platform.cross(1, false);
            assert_eq!(handle.phase(), Some(RevealPhase::Hiding));
            platform.advance(60);
            assert_eq!(handle.phase(), Some(RevealPhase::Hidden));
            assert_eq!(platform.last_state(1), Some(hidden));
        }
        assert!(platform.is_observed(1));
    }

    #[test]
    fn test_reverse_starts_from_current_state() {
        let (platform, reveal) = setup(FakePlatform::default());
        let handle = reveal.attach(Some(&1), &RevealConfig::default().repeatable(true));

        platform.cross(1, true);
        platform.advance(18);
        let midway = platform.last_state(1).unwrap();

        platform.cross(1, false);
        assert_eq!(handle.phase(), Some(RevealPhase::Hiding));
        let transitions = platform.transitions_for(1);
        let (reverse, _) = transitions.last().unwrap();
        assert_eq!(reverse.from, midway);
        assert_eq!(reverse.to, RevealProfile::FadeUp.initial(ELEMENT_OFFSET));
        assert_eq!(reverse.delay, 0.0);

        // re-entering mid reverse goes straight back to revealing
        platform.advance(6);
        platform.cross(1, true);
        assert_eq!(handle.phase(), Some(RevealPhase::Revealing));
        platform.advance(60);
        assert_eq!(handle.phase(), Some(RevealPhase::Revealed));
    }

    #[test]
    fn test_group_children_start_staggered() {
        let (platform, reveal) = setup(FakePlatform::with_children(10, vec![11, 12, 13]));
        let handle = reveal.attach_group(Some(&10), &RevealConfig::group().stagger(0.1));

        for child in [11, 12, 13] {
            assert_eq!(
                platform.last_state(child),
                Some(RevealProfile::FadeUp.initial(GROUP_OFFSET))
            );
        }
        assert!(platform.is_observed(10));
        assert!(!platform.is_observed(11));

        platform.advance(7);
        let crossed_at = platform.clock();
        let reads = platform.clock_reads.get();
        platform.cross(10, true);
        // the whole group is timed from a single clock read
        assert_eq!(platform.clock_reads.get(), reads + 1);
        for (k, child) in [11, 12, 13].into_iter().enumerate() {
            let transitions = platform.transitions_for(child);
            assert_eq!(transitions.len(), 1);
            let (spec, scheduled_at) = transitions[0];
            assert_eq!(scheduled_at, crossed_at);
            let start = scheduled_at + spec.delay - crossed_at;
            assert!((start - 0.1 * k as f64).abs() < 1e-9, "child {} starts at {}", k, start);
            assert_eq!(spec.duration, 0.6);
        }

        platform.advance(30);
        assert_eq!(handle.phase(), Some(RevealPhase::Revealing));
        platform.advance(30);
        assert_eq!(handle.phase(), Some(RevealPhase::Revealed));
        for child in [11, 12, 13] {
            assert_eq!(platform.last_state(child), Some(VisualState::RESTING));
        }
    }

    #[test]
    fn test_missing_targets_are_inert() {
        let (platform, reveal) = setup(FakePlatform::with_children(10, vec![]));

        let single = reveal.attach(None, &RevealConfig::default());
        let group = reveal.attach_group(None, &RevealConfig::group());
        let empty = reveal.attach_group(Some(&10), &RevealConfig::group());

        for handle in [&single, &group, &empty] {
            assert!(handle.is_inert());
            assert_eq!(handle.phase(), None);
            handle.release();
        }
        assert!(platform.applied.borrow().is_empty());
        assert!(platform.watches.borrow().is_empty());
    }

    #[test]
    fn test_release_before_trigger_applies_nothing_further() {
        let (platform, reveal) = setup(FakePlatform::default());
        let handle = reveal.attach(Some(&1), &RevealConfig::default());
        handle.release();

        assert!(!platform.is_observed(1));
        platform.cross(1, true);
        platform.advance(120);
        assert_eq!(platform.applied_count(1), 1);
        assert!(platform.scheduled.borrow().is_empty());
    }

    #[test]
    fn test_release_mid_transition_halts_updates() {
        let (platform, reveal) = setup(FakePlatform::with_children(10, vec![11, 12]));
        let handle = reveal.attach_group(Some(&10), &RevealConfig::group().repeatable(true));

        platform.cross(10, true);
        platform.advance(12);
        let before = platform.applied.borrow().len();

        handle.release();
        handle.release();
        platform.advance(120);
        platform.cross(10, false);

        assert_eq!(platform.applied.borrow().len(), before);
        assert!(platform.tweens.borrow().is_empty());
        assert!(!platform.is_observed(10));
    }

    #[test]
    fn test_dropping_handle_releases_binding() {
        let (platform, reveal) = setup(FakePlatform::default());
        {
            let _handle = reveal.attach(Some(&1), &RevealConfig::default());
            platform.cross(1, true);
            platform.advance(6);
        }
        assert!(!platform.is_observed(1));
        assert!(platform.tweens.borrow().is_empty());
    }

    #[test]
    fn test_invalid_timings_fall_back() {
        let (platform, reveal) = setup(FakePlatform::default());
        let _handle = reveal.attach(Some(&1), &RevealConfig::default().duration(-2.0).delay(f64::NAN));
        platform.cross(1, true);
        let (spec, _) = platform.transitions_for(1)[0];
        assert_eq!(spec.duration, ELEMENT_DURATION);
        assert_eq!(spec.delay, 0.0);
    }
}
