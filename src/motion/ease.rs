/// Easing curves, named after the GSAP eases the site was designed with.
///
/// `power1` is quadratic and `power2` cubic.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Ease {
    Linear,
    #[default]
    Power1Out,
    Power1InOut,
    Power2Out,
    Power2InOut,
    /// Overshoots past the end before settling. The value is the overshoot amount.
    BackOut(f64),
}

impl Ease {
    /// Maps linear progress `t` in `[0, 1]` to eased progress. Endpoints are fixed:
    /// `apply(0.0) == 0.0` and `apply(1.0) == 1.0` for every curve.
    pub fn apply(self, t: f64) -> f64 {
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        match self {
            Ease::Linear => t,
            Ease::Power1Out => 1.0 - (1.0 - t).powi(2),
            Ease::Power1InOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Ease::Power2Out => 1.0 - (1.0 - t).powi(3),
            Ease::Power2InOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Ease::BackOut(s) => {
                let u = t - 1.0;
                1.0 + (s + 1.0) * u.powi(3) + s * u.powi(2)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Ease; 6] = [
        Ease::Linear,
        Ease::Power1Out,
        Ease::Power1InOut,
        Ease::Power2Out,
        Ease::Power2InOut,
        Ease::BackOut(1.7),
    ];

    #[test]
    fn test_endpoints() {
        for ease in ALL {
            assert!(ease.apply(0.0).abs() < 1e-9, "{ease:?} at 0");
            assert!((ease.apply(1.0) - 1.0).abs() < 1e-9, "{ease:?} at 1");
        }
    }

    #[test]
    fn test_out_curves_lead() {
        assert!(Ease::Power2Out.apply(0.5) > Ease::Power1Out.apply(0.5));
        assert!(Ease::Power1Out.apply(0.5) > Ease::Linear.apply(0.5));
        assert!((Ease::Power2InOut.apply(0.5) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_back_overshoots() {
        let peak = (1..100)
            .map(|i| Ease::BackOut(1.7).apply(i as f64 / 100.0))
            .fold(f64::MIN, f64::max);
        assert!(peak > 1.0);
    }

    #[test]
    fn test_clamped_input() {
        assert_eq!(Ease::Power2Out.apply(-1.0), 0.0);
        assert_eq!(Ease::Power2Out.apply(2.0), 1.0);
    }
}
