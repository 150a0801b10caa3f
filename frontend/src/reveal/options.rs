use super::profile::RevealProfile;
use super::threshold::Threshold;

pub const ELEMENT_DURATION: f64 = 0.8;
pub const GROUP_DURATION: f64 = 0.6;
pub const STAGGER_INTERVAL: f64 = 0.1;

/// Options for one reveal binding. Times are in seconds.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealConfig {
    pub profile: RevealProfile,
    pub delay: f64,
    pub duration: f64,
    /// Start offset between successive children. Only used by group reveals.
    pub stagger: f64,
    pub threshold: Threshold,
    /// Reverse on leaving the trigger region and replay on re-entry.
    pub repeatable: bool,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            profile: RevealProfile::FadeUp,
            delay: 0.0,
            duration: ELEMENT_DURATION,
            stagger: STAGGER_INTERVAL,
            threshold: Threshold::default(),
            repeatable: false,
        }
    }
}

impl RevealConfig {
    pub fn new(profile: RevealProfile) -> Self {
        Self {
            profile,
            ..Self::default()
        }
    }

    /// Defaults for a staggered group reveal.
    pub fn group() -> Self {
        Self {
            duration: GROUP_DURATION,
            ..Self::default()
        }
    }

    pub fn profile(mut self, profile: RevealProfile) -> Self {
        self.profile = profile;
        self
    }

    pub fn delay(mut self, seconds: f64) -> Self {
        self.delay = seconds;
        self
    }

    pub fn duration(mut self, seconds: f64) -> Self {
        self.duration = seconds;
        self
    }

    pub fn stagger(mut self, seconds: f64) -> Self {
        self.stagger = seconds;
        self
    }

    /// Sets the threshold from a descriptor such as `"top 80%"`.
    pub fn start(mut self, descriptor: &str) -> Self {
        self.threshold = Threshold::parse_or_default(descriptor);
        self
    }

    #[cfg(test)]
    pub fn repeatable(mut self, repeatable: bool) -> Self {
        self.repeatable = repeatable;
        self
    }

    /// Replaces out-of-range timings with usable values: negative or
    /// non-finite delays become 0, non-positive durations and stagger
    /// intervals fall back to `fallback_duration` and the default interval.
    pub(crate) fn sanitized(&self, fallback_duration: f64) -> Self {
        let mut config = self.clone();
        if !(config.delay.is_finite() && config.delay >= 0.0) {
            config.delay = 0.0;
        }
        if !(config.duration.is_finite() && config.duration > 0.0) {
            log::debug!("reveal duration {} out of range", config.duration);
            config.duration = fallback_duration;
        }
        if !(config.stagger.is_finite() && config.stagger > 0.0) {
            config.stagger = STAGGER_INTERVAL;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let single = RevealConfig::default();
        assert_eq!(single.profile, RevealProfile::FadeUp);
        assert_eq!(single.duration, 0.8);
        assert_eq!(single.delay, 0.0);
        assert!(!single.repeatable);
        assert_eq!(single.threshold, Threshold::default());

        let group = RevealConfig::group();
        assert_eq!(group.duration, 0.6);
        assert_eq!(group.stagger, 0.1);
    }

    #[test]
    fn test_builder_overrides() {
        let config = RevealConfig::new(RevealProfile::ScaleIn)
            .delay(0.4)
            .duration(0.9)
            .start("top 80%")
            .repeatable(true);
        assert_eq!(config.profile, RevealProfile::ScaleIn);
        assert_eq!(config.delay, 0.4);
        assert_eq!(config.duration, 0.9);
        assert!((config.threshold.viewport_fraction - 0.8).abs() < 1e-9);
        assert!(config.repeatable);
    }

    #[test]
    fn test_sanitized_replaces_bad_timings() {
        let config = RevealConfig::group()
            .delay(-1.0)
            .duration(0.0)
            .stagger(f64::NAN)
            .sanitized(GROUP_DURATION);
        assert_eq!(config.delay, 0.0);
        assert_eq!(config.duration, GROUP_DURATION);
        assert_eq!(config.stagger, STAGGER_INTERVAL);
    }
}
