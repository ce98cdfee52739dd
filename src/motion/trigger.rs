#[cfg(test)]
use std::str::FromStr;

#[cfg(test)]
use thiserror::Error;

/// What a scroll trigger does to its timeline on a toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Action {
    #[default]
    None,
    Play,
    Pause,
    Resume,
    Reverse,
    Restart,
    Reset,
    Complete,
}

/// Rejected `toggleActions` string.
#[cfg(test)]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseActionsError {
    #[error("unknown toggle action: {0}")]
    UnknownAction(String),
    #[error("expected 4 toggle actions, got {0}")]
    WrongCount(usize),
}

#[cfg(test)]
impl FromStr for Action {
    type Err = ParseActionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::None),
            "play" => Ok(Self::Play),
            "pause" => Ok(Self::Pause),
            "resume" => Ok(Self::Resume),
            "reverse" => Ok(Self::Reverse),
            "restart" => Ok(Self::Restart),
            "reset" => Ok(Self::Reset),
            "complete" => Ok(Self::Complete),
            other => Err(ParseActionsError::UnknownAction(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    /// Scrolled down past the start.
    Enter,
    /// Scrolled down past the end.
    Leave,
    /// Scrolled up past the end.
    EnterBack,
    /// Scrolled up past the start.
    LeaveBack,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleActions {
    pub on_enter: Action,
    pub on_leave: Action,
    pub on_enter_back: Action,
    pub on_leave_back: Action,
}

impl ToggleActions {
    /// `play none none reverse`: reveal on the way down, hide again when scrolled back
    /// above the start. Every section on the page uses this.
    pub const REVEAL: ToggleActions = ToggleActions {
        on_enter: Action::Play,
        on_leave: Action::None,
        on_enter_back: Action::None,
        on_leave_back: Action::Reverse,
    };

    pub fn for_toggle(&self, toggle: Toggle) -> Action {
        match toggle {
            Toggle::Enter => self.on_enter,
            Toggle::Leave => self.on_leave,
            Toggle::EnterBack => self.on_enter_back,
            Toggle::LeaveBack => self.on_leave_back,
        }
    }
}

impl Default for ToggleActions {
    fn default() -> Self {
        Self {
            on_enter: Action::Play,
            on_leave: Action::None,
            on_enter_back: Action::None,
            on_leave_back: Action::None,
        }
    }
}

#[cfg(test)]
impl FromStr for ToggleActions {
    type Err = ParseActionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = s
            .split_whitespace()
            .map(Action::from_str)
            .collect::<Result<Vec<_>, _>>()?;
        match parts.as_slice() {
            [on_enter, on_leave, on_enter_back, on_leave_back] => Ok(Self {
                on_enter: *on_enter,
                on_leave: *on_leave,
                on_enter_back: *on_enter_back,
                on_leave_back: *on_leave_back,
            }),
            _ => Err(ParseActionsError::WrongCount(parts.len())),
        }
    }
}

/// Which edge of the trigger element an anchor refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Bottom,
}

impl Edge {
    fn offset(self, height: f64) -> f64 {
        match self {
            Edge::Top => 0.0,
            Edge::Bottom => height,
        }
    }
}

/// An element edge meeting a line at some percentage down the viewport, e.g. "top 80%".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    pub edge: Edge,
    pub viewport_percent: f64,
}

impl Anchor {
    pub const fn new(edge: Edge, viewport_percent: f64) -> Self {
        Self {
            edge,
            viewport_percent,
        }
    }
}

/// Start and end anchors of a scroll trigger.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriggerBand {
    pub start: Anchor,
    pub end: Anchor,
}

impl TriggerBand {
    pub const fn new(start: Anchor, end: Anchor) -> Self {
        Self { start, end }
    }

    /// Band ending when the element's bottom leaves the top of the viewport.
    pub const fn starting_at(start: Anchor) -> Self {
        Self::new(start, Anchor::new(Edge::Bottom, 0.0))
    }
}

/// Geometry a trigger is measured against, in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub top: f64,
    pub height: f64,
    pub viewport_height: f64,
}

impl Layout {
    /// Scroll offset at which `anchor` is met.
    pub fn scroll_at(&self, anchor: Anchor) -> f64 {
        self.top + anchor.edge.offset(self.height)
            - self.viewport_height * anchor.viewport_percent / 100.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Zone {
    Before,
    Inside,
    After,
}

/// Turns scroll positions into toggles for one trigger element.
#[derive(Debug, Clone)]
pub struct ScrollTrigger {
    band: TriggerBand,
    actions: ToggleActions,
    start: f64,
    end: f64,
    zone: Zone,
    measured: bool,
}

impl ScrollTrigger {
    pub fn new(band: TriggerBand, actions: ToggleActions) -> Self {
        Self {
            band,
            actions,
            start: 0.0,
            end: 0.0,
            zone: Zone::Before,
            measured: false,
        }
    }

    /// Recomputes the scroll range from fresh measurements.
    pub fn refresh(&mut self, layout: &Layout) {
        self.start = layout.scroll_at(self.band.start);
        self.end = layout.scroll_at(self.band.end).max(self.start);
        self.measured = true;
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    pub fn is_active(&self) -> bool {
        self.zone == Zone::Inside
    }

    fn zone_of(&self, scroll: f64) -> Zone {
        if scroll < self.start {
            Zone::Before
        } else if scroll > self.end {
            Zone::After
        } else {
            Zone::Inside
        }
    }

    /// Toggles crossed since the last update. Jumping over the whole band yields both
    /// crossings in order. Unmeasured triggers never toggle.
    pub fn update(&mut self, scroll: f64) -> Vec<Toggle> {
        if !self.measured {
            return Vec::new();
        }
        let zone = self.zone_of(scroll);
        let toggles = match (self.zone, zone) {
            (Zone::Before, Zone::Inside) => vec![Toggle::Enter],
            (Zone::Before, Zone::After) => vec![Toggle::Enter, Toggle::Leave],
            (Zone::Inside, Zone::After) => vec![Toggle::Leave],
            (Zone::After, Zone::Inside) => vec![Toggle::EnterBack],
            (Zone::After, Zone::Before) => vec![Toggle::EnterBack, Toggle::LeaveBack],
            (Zone::Inside, Zone::Before) => vec![Toggle::LeaveBack],
            _ => Vec::new(),
        };
        self.zone = zone;
        toggles
    }

    /// Timeline actions for the toggles crossed by moving to `scroll`.
    pub fn actions_for(&mut self, scroll: f64) -> Vec<Action> {
        let actions = self.actions;
        self.update(scroll)
            .into_iter()
            .map(|t| actions.for_toggle(t))
            .filter(|a| *a != Action::None)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn about_layout() -> Layout {
        Layout {
            top: 1000.0,
            height: 800.0,
            viewport_height: 1000.0,
        }
    }

    #[test]
    fn test_parse_actions() {
        let a: ToggleActions = "play none none reverse".parse().unwrap();
        assert_eq!(a, ToggleActions::REVEAL);
        assert_eq!(
            "play none".parse::<ToggleActions>(),
            Err(ParseActionsError::WrongCount(2))
        );
        assert_eq!(
            "play none none rewind".parse::<ToggleActions>(),
            Err(ParseActionsError::UnknownAction("rewind".to_string()))
        );
    }

    #[test]
    fn test_band_positions() {
        // "top 80%" / "bottom 20%"
        let mut t = ScrollTrigger::new(
            TriggerBand::new(Anchor::new(Edge::Top, 80.0), Anchor::new(Edge::Bottom, 20.0)),
            ToggleActions::REVEAL,
        );
        t.refresh(&about_layout());
        assert_eq!(t.start(), 200.0);
        assert_eq!(t.end(), 1600.0);

        let mut d = ScrollTrigger::new(
            TriggerBand::starting_at(Anchor::new(Edge::Top, 50.0)),
            ToggleActions::default(),
        );
        d.refresh(&about_layout());
        assert_eq!(d.start(), 500.0);
        assert_eq!(d.end(), 1800.0);
    }

    #[test]
    fn test_toggle_sequence() {
        let mut t = ScrollTrigger::new(
            TriggerBand::new(Anchor::new(Edge::Top, 80.0), Anchor::new(Edge::Bottom, 20.0)),
            ToggleActions::REVEAL,
        );
        assert!(t.update(500.0).is_empty(), "unmeasured");
        t.refresh(&about_layout());

        assert!(t.update(0.0).is_empty());
        assert_eq!(t.update(250.0), vec![Toggle::Enter]);
        assert!(t.is_active());
        assert_eq!(t.update(2000.0), vec![Toggle::Leave]);
        assert_eq!(t.update(1000.0), vec![Toggle::EnterBack]);
        assert_eq!(t.update(100.0), vec![Toggle::LeaveBack]);
        assert_eq!(t.update(5000.0), vec![Toggle::Enter, Toggle::Leave]);
        assert_eq!(t.update(0.0), vec![Toggle::EnterBack, Toggle::LeaveBack]);
    }

    #[test]
    fn test_reveal_actions() {
        let mut t = ScrollTrigger::new(
            TriggerBand::starting_at(Anchor::new(Edge::Top, 90.0)),
            ToggleActions::REVEAL,
        );
        t.refresh(&about_layout());
        assert_eq!(t.actions_for(150.0), vec![Action::Play]);
        assert!(t.actions_for(1900.0).is_empty());
        assert!(t.actions_for(500.0).is_empty());
        assert_eq!(t.actions_for(0.0), vec![Action::Reverse]);
    }

    #[test]
    fn test_already_inside_on_first_update() {
        let mut t = ScrollTrigger::new(
            TriggerBand::starting_at(Anchor::new(Edge::Top, 80.0)),
            ToggleActions::REVEAL,
        );
        t.refresh(&Layout {
            top: 400.0,
            height: 600.0,
            viewport_height: 1000.0,
        });
        assert!(t.start() < 0.0);
        assert_eq!(t.actions_for(0.0), vec![Action::Play]);
    }
}
