//! Viewport position rule deciding when a reveal trigger is active.
//!
//! Descriptors read like `"top 85%"`: the trigger starts once the element's
//! top edge reaches the line 85% down the viewport. The trigger stays active
//! until the element's bottom edge scrolls above the top of the viewport.

use std::fmt;
use std::str::FromStr;

/// Which edge of the element is compared against the viewport line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Center,
    Bottom,
}

impl Edge {
    fn parse(word: &str) -> Option<Self> {
        match word {
            "top" => Some(Edge::Top),
            "center" => Some(Edge::Center),
            "bottom" => Some(Edge::Bottom),
            _ => None,
        }
    }

    fn fraction(self) -> f64 {
        match self {
            Edge::Top => 0.0,
            Edge::Center => 0.5,
            Edge::Bottom => 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Threshold {
    pub edge: Edge,
    /// Position of the trigger line as a fraction of the viewport height.
    pub viewport_fraction: f64,
}

impl Default for Threshold {
    fn default() -> Self {
        Self {
            edge: Edge::Top,
            viewport_fraction: 0.85,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseThresholdError(String);

impl fmt::Display for ParseThresholdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid threshold descriptor {:?}", self.0)
    }
}

impl std::error::Error for ParseThresholdError {}

impl FromStr for Threshold {
    type Err = ParseThresholdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseThresholdError(s.to_string());
        let lowered = s.trim().to_ascii_lowercase();
        let mut words = lowered.split_whitespace();
        let edge = words.next().and_then(Edge::parse).ok_or_else(err)?;
        let position = words.next().ok_or_else(err)?;
        if words.next().is_some() {
            return Err(err());
        }

        let viewport_fraction = match position.strip_suffix('%') {
            Some(percent) => {
                let value: f64 = percent.parse().map_err(|_| err())?;
                if !value.is_finite() {
                    return Err(err());
                }
                value / 100.0
            }
            None => Edge::parse(position).ok_or_else(err)?.fraction(),
        };

        Ok(Self {
            edge,
            viewport_fraction,
        })
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let edge = match self.edge {
            Edge::Top => "top",
            Edge::Center => "center",
            Edge::Bottom => "bottom",
        };
        write!(f, "{} {}%", edge, self.viewport_fraction * 100.0)
    }
}

impl Threshold {
    /// Parses a descriptor, falling back to the default `"top 85%"`.
    pub fn parse_or_default(descriptor: &str) -> Self {
        descriptor.parse().unwrap_or_else(|e| {
            log::warn!("{}, using default", e);
            Self::default()
        })
    }

    /// Whether an element with the given viewport-relative box is inside the
    /// trigger region of a viewport `viewport_height` px tall.
    pub fn contains(&self, top: f64, bottom: f64, viewport_height: f64) -> bool {
        let anchor = top + (bottom - top) * self.edge.fraction();
        let line = viewport_height * self.viewport_fraction;
        anchor <= line && bottom >= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_percentages_and_keywords() {
        let t: Threshold = "top 85%".parse().unwrap();
        assert_eq!(t, Threshold::default());

        let t: Threshold = "center 50%".parse().unwrap();
        assert_eq!(t.edge, Edge::Center);
        assert!((t.viewport_fraction - 0.5).abs() < 1e-9);

        let t: Threshold = "Top Bottom".parse().unwrap();
        assert_eq!((t.edge, t.viewport_fraction), (Edge::Top, 1.0));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for bad in ["", "top", "left 50%", "top abc%", "top 50% extra", "top middle"] {
            assert!(bad.parse::<Threshold>().is_err(), "{:?}", bad);
        }
        assert_eq!(Threshold::parse_or_default("nonsense"), Threshold::default());
    }

    #[test]
    fn test_contains_top_85() {
        let t = Threshold::default();
        // 1000px viewport: the line sits at 850px.
        assert!(!t.contains(900.0, 1300.0, 1000.0));
        assert!(t.contains(840.0, 1240.0, 1000.0));
        assert!(t.contains(-100.0, 300.0, 1000.0));
        // scrolled completely past the top
        assert!(!t.contains(-500.0, -10.0, 1000.0));
    }

    #[test]
    fn test_contains_center_edge() {
        let t: Threshold = "center 50%".parse().unwrap();
        assert!(!t.contains(400.0, 800.0, 1000.0));
        assert!(t.contains(300.0, 700.0, 1000.0));
    }

    #[test]
    fn test_display_round_trips() {
        let t: Threshold = "bottom 50%".parse().unwrap();
        assert_eq!(t.to_string().parse::<Threshold>().unwrap(), t);
    }
}
