use super::{Ease, Props};

// absorbs float error when a playhead lands exactly on a step's end
const EPSILON: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Repeat {
    #[default]
    Never,
    /// Extra cycles after the first one.
    Times(u32),
    Forever,
}

/// Timing options for a tween, GSAP style.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TweenSpec {
    pub duration: f64,
    pub ease: Ease,
    pub delay: f64,
    pub stagger: f64,
    pub repeat: Repeat,
    pub yoyo: bool,
}

impl TweenSpec {
    pub fn new(duration: f64) -> Self {
        Self {
            duration,
            ease: Ease::default(),
            delay: 0.0,
            stagger: 0.0,
            repeat: Repeat::Never,
            yoyo: false,
        }
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    pub fn delay(mut self, delay: f64) -> Self {
        self.delay = delay;
        self
    }

    /// Per-target start offset when the spec is applied to a list of targets.
    pub fn stagger(mut self, stagger: f64) -> Self {
        self.stagger = stagger;
        self
    }

    pub fn repeat(mut self, repeat: Repeat) -> Self {
        self.repeat = repeat;
        self
    }

    pub fn yoyo(mut self, yoyo: bool) -> Self {
        self.yoyo = yoyo;
        self
    }
}

/// Interpolation of a set of properties between two poses.
#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    pub from: Props,
    pub to: Props,
    pub duration: f64,
    pub ease: Ease,
    pub repeat: Repeat,
    pub yoyo: bool,
}

impl Tween {
    pub fn new(from: Props, to: Props, spec: &TweenSpec) -> Self {
        Self {
            from,
            to,
            duration: spec.duration.max(0.0),
            ease: spec.ease,
            repeat: spec.repeat,
            yoyo: spec.yoyo,
        }
    }

    fn cycles(&self) -> Option<u32> {
        match self.repeat {
            Repeat::Never => Some(1),
            Repeat::Times(n) => Some(n.saturating_add(1)),
            Repeat::Forever => None,
        }
    }

    /// Length including repeats; infinite for `Repeat::Forever`.
    pub fn total(&self) -> f64 {
        match self.cycles() {
            Some(n) => self.duration * n as f64,
            None => f64::INFINITY,
        }
    }

    pub fn is_infinite(&self) -> bool {
        self.cycles().is_none()
    }

    /// Eased progress at local time `t`, accounting for repeats and yoyo.
    pub fn progress_at(&self, t: f64) -> f64 {
        let t = t.max(0.0);
        if self.duration <= 0.0 {
            return self.end_progress();
        }
        if t >= self.total() - EPSILON {
            return self.end_progress();
        }
        let cycle = (t / self.duration).floor();
        let local = (t - cycle * self.duration) / self.duration;
        let backwards = self.yoyo && (cycle as u64) % 2 == 1;
        if backwards {
            self.ease.apply(1.0 - local)
        } else {
            self.ease.apply(local)
        }
    }

    fn end_progress(&self) -> f64 {
        match self.cycles() {
            Some(n) if self.yoyo && n % 2 == 0 => 0.0,
            _ => 1.0,
        }
    }

    /// Values of the animated properties at local time `t`.
    pub fn sample(&self, t: f64) -> Props {
        let k = self.progress_at(t);
        let mut out = Props::new();
        for (prop, end) in self.to.iter() {
            let start = self.from.value(prop);
            out.set(prop, start + (end - start) * k);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::Prop;

    fn fade(spec: TweenSpec) -> Tween {
        Tween::new(Props::new().opacity(0.0), Props::new().opacity(1.0), &spec)
    }

    #[test]
    fn test_plain_tween() {
        let t = fade(TweenSpec::new(1.0).ease(Ease::Linear));
        assert_eq!(t.total(), 1.0);
        assert_eq!(t.sample(0.0).get(Prop::Opacity), Some(0.0));
        assert_eq!(t.sample(0.5).value(Prop::Opacity), 0.5);
        assert_eq!(t.sample(3.0).value(Prop::Opacity), 1.0);
    }

    #[test]
    fn test_yoyo_repeat_ends_at_start() {
        // up, down, up, down
        let t = fade(TweenSpec::new(0.5).repeat(Repeat::Times(3)).yoyo(true));
        assert_eq!(t.total(), 2.0);
        assert_eq!(t.progress_at(0.5), 1.0);
        assert!(t.progress_at(0.75) < 1.0);
        assert_eq!(t.progress_at(2.0), 0.0);
    }

    #[test]
    fn test_yoyo_single_repeat_pulse() {
        let t = Tween::new(
            Props::new().scale(1.0),
            Props::new().scale(1.1),
            &TweenSpec::new(0.2).repeat(Repeat::Times(1)).yoyo(true),
        );
        assert!((t.total() - 0.4).abs() < 1e-9);
        assert_eq!(t.sample(0.4).value(Prop::Scale), 1.0);
    }

    #[test]
    fn test_forever() {
        let t = fade(TweenSpec::new(3.0).repeat(Repeat::Forever).yoyo(true));
        assert!(t.is_infinite());
        assert!(t.total().is_infinite());
        assert_eq!(t.progress_at(3.0), 1.0);
        assert_eq!(t.progress_at(6.0), 0.0);
    }

    #[test]
    fn test_untouched_from_uses_rest() {
        let t = Tween::new(
            Props::new(),
            Props::new().scale(1.05),
            &TweenSpec::new(0.3).ease(Ease::Linear),
        );
        let mid = t.sample(0.15).value(Prop::Scale);
        assert!((mid - 1.025).abs() < 1e-9);
    }

    #[test]
    fn test_zero_duration() {
        let t = fade(TweenSpec::new(0.0));
        assert_eq!(t.progress_at(0.0), 1.0);
    }
}
