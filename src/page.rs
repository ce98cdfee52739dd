use crate::scroll::ScrollSource;

/// Sections reachable from the navigation, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Home,
    About,
    Projects,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 4] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Projects,
        SectionId::Contact,
    ];

    /// The element id the section is rendered with.
    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Projects => "projects",
            SectionId::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Projects => "Projects",
            SectionId::Contact => "Contact",
        }
    }

    pub fn parse(id: &str) -> Option<SectionId> {
        Self::ALL.into_iter().find(|s| s.as_str() == id)
    }
}

/// One-way latch for the splash screen handoff.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadGate {
    loaded: bool,
}

impl LoadGate {
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Marks the page loaded. True only for the call that flipped the gate.
    pub fn complete(&mut self) -> bool {
        let first = !self.loaded;
        self.loaded = true;
        first
    }
}

/// Navigation bar state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavState {
    pub scrolled: bool,
    pub menu_open: bool,
    threshold: f64,
}

impl Default for NavState {
    fn default() -> Self {
        Self::new(100.0)
    }
}

impl NavState {
    pub fn new(threshold: f64) -> Self {
        Self {
            scrolled: false,
            menu_open: false,
            threshold,
        }
    }

    /// Recomputes `scrolled` from the observed offset. Returns whether it changed.
    pub fn on_scroll(&mut self, source: &impl ScrollSource) -> bool {
        let scrolled = source.offset() > self.threshold;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }

    /// Picking a destination always closes the menu.
    pub fn choose(&mut self, section: SectionId) -> SectionId {
        self.menu_open = false;
        section
    }
}
