//! Easing curves mapping linear progress in [0, 1] onto eased progress in [0, 1].

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    /// Decelerating cubic: f(t) = 1 - (1-t)³
    #[default]
    Power3Out,
}

impl Easing {
    #[inline]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::Power3Out => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_easing_boundaries() {
        for easing in [Easing::Linear, Easing::Power3Out] {
            assert!(easing.apply(0.0).abs() < 1e-9, "{:?} at t=0", easing);
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-9, "{:?} at t=1", easing);
            assert!((easing.apply(4.0) - 1.0).abs() < 1e-9, "{:?} past end", easing);
        }
    }

    #[test]
    fn test_power3_out_decelerates() {
        let early = Easing::Power3Out.apply(0.1) - Easing::Power3Out.apply(0.0);
        let late = Easing::Power3Out.apply(1.0) - Easing::Power3Out.apply(0.9);
        assert!(early > late);
        assert!(Easing::Power3Out.apply(0.5) > 0.5);
    }

    #[test]
    fn test_easing_monotonic() {
        let mut prev = 0.0;
        for i in 0..=20 {
            let v = Easing::Power3Out.apply(i as f64 / 20.0);
            assert!(v >= prev);
            prev = v;
        }
    }
}
