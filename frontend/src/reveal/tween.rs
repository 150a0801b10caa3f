use super::easing::Easing;
use super::profile::VisualState;

/// A timed move from one visual state to another. Times are in seconds,
/// measured from the moment the transition is scheduled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionSpec {
    pub from: VisualState,
    pub to: VisualState,
    pub delay: f64,
    pub duration: f64,
    pub easing: Easing,
}

impl TransitionSpec {
    /// Progress in [0, 1], or `None` while the transition is still waiting
    /// out its delay.
    pub fn progress(&self, elapsed: f64) -> Option<f64> {
        let running = elapsed - self.delay;
        if running < 0.0 {
            return None;
        }
        if self.duration <= 0.0 {
            return Some(1.0);
        }
        Some((running / self.duration).min(1.0))
    }

    /// State to present `elapsed` seconds after scheduling.
    pub fn sample(&self, elapsed: f64) -> Option<VisualState> {
        self.progress(elapsed)
            .map(|t| self.from.lerp(&self.to, self.easing.apply(t)))
    }

    #[inline]
    pub fn is_finished(&self, elapsed: f64) -> bool {
        elapsed >= self.delay + self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reveal::profile::RevealProfile;

    fn fade_up(delay: f64) -> TransitionSpec {
        TransitionSpec {
            from: RevealProfile::FadeUp.initial(60.0),
            to: VisualState::RESTING,
            delay,
            duration: 0.8,
            easing: Easing::Power3Out,
        }
    }

    #[test]
    fn test_waits_out_delay() {
        let spec = fade_up(0.2);
        assert_eq!(spec.sample(0.1), None);
        assert_eq!(spec.sample(0.2), Some(spec.from));
        assert!(!spec.is_finished(0.9));
        assert!(spec.is_finished(1.0));
    }

    #[test]
    fn test_reaches_target_at_end() {
        let spec = fade_up(0.0);
        assert_eq!(spec.sample(0.8), Some(VisualState::RESTING));
        assert_eq!(spec.sample(5.0), Some(VisualState::RESTING));
        let mid = spec.sample(0.4).unwrap();
        assert!(mid.opacity > 0.5 && mid.opacity < 1.0);
    }
}
