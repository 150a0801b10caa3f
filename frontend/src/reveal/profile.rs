//! Reveal profiles: the (initial, final) visual state pairs a reveal moves between.

/// Travel distance for single element reveals, in px.
pub const ELEMENT_OFFSET: f64 = 60.0;
/// Travel distance for each child of a staggered group, in px.
pub const GROUP_OFFSET: f64 = 40.0;

const SCALE_IN_FROM: f64 = 0.9;

/// The animated presentation of one element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualState {
    pub opacity: f64,
    pub x: f64,
    pub y: f64,
    pub scale: f64,
}

impl VisualState {
    /// Fully visible, untransformed.
    pub const RESTING: VisualState = VisualState {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
    };

    /// Linear interpolation towards `to`; `t` is clamped into [0, 1].
    pub fn lerp(&self, to: &VisualState, t: f64) -> VisualState {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: f64, b: f64| a + (b - a) * t;
        VisualState {
            opacity: mix(self.opacity, to.opacity),
            x: mix(self.x, to.x),
            y: mix(self.y, to.y),
            scale: mix(self.scale, to.scale),
        }
    }

    /// Inline `transform` value for this state.
    pub fn transform(&self) -> String {
        format!(
            "translate3d({:.2}px, {:.2}px, 0px) scale({:.4})",
            self.x, self.y, self.scale
        )
    }

    /// Inline `opacity` value for this state.
    pub fn opacity_css(&self) -> String {
        format!("{:.4}", self.opacity)
    }
}

/// Named entrance animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealProfile {
    #[default]
    FadeUp,
    FadeIn,
    FadeLeft,
    FadeRight,
    ScaleIn,
}

impl RevealProfile {
    #[cfg(test)]
    pub const ALL: [RevealProfile; 5] = [
        RevealProfile::FadeUp,
        RevealProfile::FadeIn,
        RevealProfile::FadeLeft,
        RevealProfile::FadeRight,
        RevealProfile::ScaleIn,
    ];

    /// Looks a profile up by name. Unknown names fall back to `FadeUp`.
    #[allow(dead_code)]
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().replace(['-', '_'], "").as_str() {
            "fadeup" => RevealProfile::FadeUp,
            "fadein" => RevealProfile::FadeIn,
            "fadeleft" => RevealProfile::FadeLeft,
            "faderight" => RevealProfile::FadeRight,
            "scalein" => RevealProfile::ScaleIn,
            other => {
                log::debug!("unknown reveal profile {:?}, using fade-up", other);
                RevealProfile::FadeUp
            }
        }
    }

    /// Hidden state the element starts in, travelling `offset` px where the
    /// profile moves the element.
    pub fn initial(self, offset: f64) -> VisualState {
        let hidden = VisualState {
            opacity: 0.0,
            ..VisualState::RESTING
        };
        match self {
            RevealProfile::FadeUp => VisualState { y: offset, ..hidden },
            RevealProfile::FadeIn => hidden,
            RevealProfile::FadeLeft => VisualState { x: -offset, ..hidden },
            RevealProfile::FadeRight => VisualState { x: offset, ..hidden },
            RevealProfile::ScaleIn => VisualState {
                scale: SCALE_IN_FROM,
                ..hidden
            },
        }
    }

    /// Resting state the element ends in. Identical for every profile.
    pub fn final_state(self) -> VisualState {
        VisualState::RESTING
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_profile_starts_hidden_and_ends_visible() {
        for profile in RevealProfile::ALL {
            let from = profile.initial(ELEMENT_OFFSET);
            let to = profile.final_state();
            assert_eq!(from.opacity, 0.0, "{:?}", profile);
            assert_eq!(to, VisualState::RESTING, "{:?}", profile);
        }
    }

    #[test]
    fn test_profile_offsets() {
        assert_eq!(RevealProfile::FadeUp.initial(60.0).y, 60.0);
        assert_eq!(RevealProfile::FadeLeft.initial(60.0).x, -60.0);
        assert_eq!(RevealProfile::FadeRight.initial(40.0).x, 40.0);
        assert_eq!(RevealProfile::ScaleIn.initial(60.0).scale, 0.9);

        let fade_in = RevealProfile::FadeIn.initial(60.0);
        assert_eq!((fade_in.x, fade_in.y, fade_in.scale), (0.0, 0.0, 1.0));
    }

    #[test]
    fn test_unknown_names_fall_back_to_fade_up() {
        assert_eq!(RevealProfile::from_name("scale-in"), RevealProfile::ScaleIn);
        assert_eq!(RevealProfile::from_name("fadeLeft"), RevealProfile::FadeLeft);
        assert_eq!(RevealProfile::from_name("stagger"), RevealProfile::FadeUp);
        assert_eq!(RevealProfile::from_name(""), RevealProfile::FadeUp);
    }

    #[test]
    fn test_lerp_clamps() {
        let from = RevealProfile::FadeUp.initial(60.0);
        let to = VisualState::RESTING;
        assert_eq!(from.lerp(&to, 2.0), to);
        assert_eq!(from.lerp(&to, -1.0), from);
        let half = from.lerp(&to, 0.5);
        assert!((half.opacity - 0.5).abs() < 1e-9);
        assert!((half.y - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_css_formatting() {
        let state = RevealProfile::FadeLeft.initial(60.0);
        assert_eq!(state.transform(), "translate3d(-60.00px, 0.00px, 0px) scale(1.0000)");
        assert_eq!(state.opacity_css(), "0.0000");
    }
}
