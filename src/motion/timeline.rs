use std::collections::BTreeMap;

use super::{Action, Props, Tween, TweenSpec};

/// Index of an element a timeline animates. The DOM side owns the mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TargetId(pub usize);

/// Where a step is placed relative to what is already on the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Position {
    /// Right after the current end of the timeline.
    #[default]
    End,
    /// This many seconds before the current end (GSAP `"-=0.5"`).
    Overlap(f64),
    /// This many seconds after the current end (GSAP `"+=0.5"`).
    Gap(f64),
    /// Absolute time, measured after the timeline delay.
    At(f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayState {
    Idle,
    Playing,
    Paused,
    Finished,
    Killed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineEvent {
    /// Reached the end playing forward.
    Completed,
    /// Reached the start playing backward.
    ReverseCompleted,
}

#[derive(Debug, Clone)]
struct Track {
    target: TargetId,
    start: f64,
    tween: Tween,
    /// `from_to` steps show their start values before they begin.
    immediate: bool,
}

/// A sequence of tweens over a set of targets with a single playhead.
///
/// Styles are a pure function of the playhead: playing forward to the end and then
/// backward to zero renders exactly the initial state again.
#[derive(Debug, Clone)]
pub struct Timeline {
    delay: f64,
    end: f64,
    infinite: bool,
    tracks: Vec<Track>,
    base: BTreeMap<TargetId, Props>,
    // state each target is left in by the steps added so far
    cursor: BTreeMap<TargetId, Props>,
    time: f64,
    direction: Direction,
    state: PlayState,
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new()
    }
}

impl Timeline {
    pub fn new() -> Self {
        Self::with_delay(0.0)
    }

    /// Timeline whose first step starts `delay` seconds in.
    pub fn with_delay(delay: f64) -> Self {
        let delay = delay.max(0.0);
        Self {
            delay,
            end: delay,
            infinite: false,
            tracks: Vec::new(),
            base: BTreeMap::new(),
            cursor: BTreeMap::new(),
            time: 0.0,
            direction: Direction::Forward,
            state: PlayState::Idle,
        }
    }

    /// Sets values instantly, before any step runs.
    pub fn set(&mut self, target: TargetId, props: Props) -> &mut Self {
        self.base.entry(target).or_default().merge(&props);
        self.cursor.entry(target).or_default().merge(&props);
        self
    }

    pub fn set_each(&mut self, targets: &[TargetId], props: Props) -> &mut Self {
        for t in targets {
            self.set(*t, props);
        }
        self
    }

    pub fn from_to(
        &mut self,
        target: TargetId,
        from: Props,
        to: Props,
        spec: TweenSpec,
        position: Position,
    ) -> &mut Self {
        self.add(&[target], Some(from), to, spec, position)
    }

    pub fn from_to_each(
        &mut self,
        targets: &[TargetId],
        from: Props,
        to: Props,
        spec: TweenSpec,
        position: Position,
    ) -> &mut Self {
        self.add(targets, Some(from), to, spec, position)
    }

    /// Tweens from wherever the earlier steps leave the target.
    pub fn to(&mut self, target: TargetId, to: Props, spec: TweenSpec, position: Position) -> &mut Self {
        self.add(&[target], None, to, spec, position)
    }

    /// Like [`Timeline::to`] for several targets, staggered in slice order.
    pub fn to_each(
        &mut self,
        targets: &[TargetId],
        to: Props,
        spec: TweenSpec,
        position: Position,
    ) -> &mut Self {
        self.add(targets, None, to, spec, position)
    }

    fn add(
        &mut self,
        targets: &[TargetId],
        from: Option<Props>,
        to: Props,
        spec: TweenSpec,
        position: Position,
    ) -> &mut Self {
        let anchor = self.resolve(position);
        let mut group_end = self.end;
        for (i, target) in targets.iter().enumerate() {
            let start = anchor + spec.delay + spec.stagger * i as f64;
            let from_props = from.unwrap_or_else(|| self.cursor_from(*target, &to));
            let tween = Tween::new(from_props, to, &spec);
            if tween.is_infinite() {
                self.infinite = true;
                group_end = group_end.max(start + tween.duration);
            } else {
                group_end = group_end.max(start + tween.total());
            }
            let settled = tween.sample(tween.total());
            self.cursor.entry(*target).or_default().merge(&settled);
            self.tracks.push(Track {
                target: *target,
                start,
                tween,
                immediate: from.is_some(),
            });
        }
        self.end = group_end;
        self
    }

    fn cursor_from(&self, target: TargetId, to: &Props) -> Props {
        let current = self.cursor.get(&target).copied().unwrap_or_default();
        let mut from = Props::new();
        for (prop, _) in to.iter() {
            from.set(prop, current.value(prop));
        }
        from
    }

    fn resolve(&self, position: Position) -> f64 {
        match position {
            Position::End => self.end,
            Position::Overlap(d) => (self.end - d).max(self.delay),
            Position::Gap(d) => self.end + d,
            Position::At(t) => self.delay + t.max(0.0),
        }
    }

    /// Total length including the delay; infinite if any step repeats forever.
    pub fn duration(&self) -> f64 {
        if self.infinite {
            f64::INFINITY
        } else {
            self.end
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Start time of each step, in the order they were added.
    pub fn starts(&self) -> Vec<(TargetId, f64)> {
        self.tracks.iter().map(|t| (t.target, t.start)).collect()
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn state(&self) -> PlayState {
        self.state
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_active(&self) -> bool {
        self.state == PlayState::Playing
    }

    pub fn is_killed(&self) -> bool {
        self.state == PlayState::Killed
    }

    pub fn style_of(&self, target: TargetId) -> Props {
        let mut style = self.base.get(&target).copied().unwrap_or_default();
        for track in self.tracks.iter().filter(|t| t.target == target) {
            if self.time >= track.start {
                style.merge(&track.tween.sample(self.time - track.start));
            } else if track.immediate {
                style.merge(&track.tween.from);
            }
        }
        style
    }

    /// Current style of every target.
    pub fn styles(&self) -> Vec<(TargetId, Props)> {
        self.cursor
            .keys()
            .map(|t| (*t, self.style_of(*t)))
            .collect()
    }

    #[cfg(test)]
    pub fn seek(&mut self, time: f64) {
        self.time = time.clamp(0.0, self.duration());
    }

    pub fn play(&mut self) {
        if self.is_killed() {
            return;
        }
        self.direction = Direction::Forward;
        self.state = if self.time < self.duration() {
            PlayState::Playing
        } else {
            PlayState::Finished
        };
    }

    pub fn reverse(&mut self) {
        if self.is_killed() {
            return;
        }
        self.direction = Direction::Backward;
        self.state = if self.time > 0.0 {
            PlayState::Playing
        } else {
            PlayState::Finished
        };
    }

    pub fn restart(&mut self) {
        if self.is_killed() {
            return;
        }
        self.time = 0.0;
        self.play();
    }

    pub fn pause(&mut self) {
        if self.state == PlayState::Playing {
            self.state = PlayState::Paused;
        }
    }

    pub fn resume(&mut self) {
        if self.state == PlayState::Paused {
            self.state = PlayState::Playing;
        }
    }

    /// Back to the start, paused.
    pub fn reset(&mut self) {
        if self.is_killed() {
            return;
        }
        self.time = 0.0;
        self.state = PlayState::Paused;
    }

    /// Jumps to the end. No-op for infinite timelines.
    pub fn complete(&mut self) {
        if self.is_killed() || self.infinite {
            return;
        }
        self.time = self.end;
        self.state = PlayState::Finished;
    }

    /// Stops the timeline for good; nothing it does afterwards has any effect.
    pub fn kill(&mut self) {
        self.state = PlayState::Killed;
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Play => self.play(),
            Action::Pause => self.pause(),
            Action::Resume => self.resume(),
            Action::Reverse => self.reverse(),
            Action::Restart => self.restart(),
            Action::Reset => self.reset(),
            Action::Complete => self.complete(),
        }
    }

    /// Moves the playhead by `dt` seconds in the current direction.
    pub fn advance(&mut self, dt: f64) -> Option<TimelineEvent> {
        if self.state != PlayState::Playing {
            return None;
        }
        match self.direction {
            Direction::Forward => {
                self.time += dt;
                let duration = self.duration();
                if self.time >= duration {
                    self.time = duration;
                    self.state = PlayState::Finished;
                    return Some(TimelineEvent::Completed);
                }
            }
            Direction::Backward => {
                self.time -= dt;
                if self.time <= 0.0 {
                    self.time = 0.0;
                    self.state = PlayState::Finished;
                    return Some(TimelineEvent::ReverseCompleted);
                }
            }
        }
        None
    }
}
