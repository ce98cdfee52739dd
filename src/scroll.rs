use serde::{Deserialize, Serialize};

/// Anything that can report a vertical scroll offset.
pub trait ScrollSource {
    fn offset(&self) -> f64;
}

impl ScrollSource for f64 {
    fn offset(&self) -> f64 {
        *self
    }
}

/// Finds where a page section starts, in document coordinates.
pub trait SectionLocator {
    fn section_top(&self, id: &str) -> Option<f64>;
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmoothScrollOptions {
    /// Fraction of the remaining distance covered per 60 Hz frame.
    pub lerp: f64,
    pub multiplier: f64,
    pub touch_multiplier: f64,
    pub smooth_touch: bool,
}

impl Default for SmoothScrollOptions {
    fn default() -> Self {
        Self {
            lerp: 0.1,
            multiplier: 1.0,
            touch_multiplier: 2.0,
            smooth_touch: true,
        }
    }
}

// below this distance (px) the offset snaps to the target
const SETTLE_DISTANCE: f64 = 0.1;
/// Arrow key step (px).
pub const KEY_STEP: f64 = 120.0;
// kept visible from the previous page on page-wise moves, and around revealed elements
const PAGE_OVERLAP: f64 = 40.0;

/// Keyboard scrolling commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollKey {
    Up,
    Down,
    PageUp,
    PageDown,
    Home,
    End,
}

impl ScrollKey {
    /// Maps a `KeyboardEvent.key` value. Space pages down, or up with shift.
    pub fn from_key(key: &str, shift: bool) -> Option<Self> {
        let k = match key {
            "ArrowUp" => ScrollKey::Up,
            "ArrowDown" => ScrollKey::Down,
            "PageUp" => ScrollKey::PageUp,
            "PageDown" => ScrollKey::PageDown,
            " " | "Spacebar" if shift => ScrollKey::PageUp,
            " " | "Spacebar" => ScrollKey::PageDown,
            "Home" => ScrollKey::Home,
            "End" => ScrollKey::End,
            _ => return None,
        };
        Some(k)
    }
}

/// Smoothed, decoupled scroll position.
///
/// Input moves a target offset; [`VirtualScroll::tick`] eases the visible offset
/// towards it once per frame. The offset is always within `[0, limit]`.
#[derive(Debug, Clone)]
pub struct VirtualScroll {
    options: SmoothScrollOptions,
    current: f64,
    target: f64,
    content_height: f64,
    viewport_height: f64,
    destroyed: bool,
}

impl VirtualScroll {
    pub fn new(options: SmoothScrollOptions) -> Self {
        Self {
            options,
            current: 0.0,
            target: 0.0,
            content_height: 0.0,
            viewport_height: 0.0,
            destroyed: false,
        }
    }

    pub fn offset(&self) -> f64 {
        self.current
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    /// Largest reachable offset.
    pub fn limit(&self) -> f64 {
        (self.content_height - self.viewport_height).max(0.0)
    }

    pub fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    pub fn is_scrolling(&self) -> bool {
        self.current != self.target
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    fn clamp(&self, offset: f64) -> f64 {
        offset.clamp(0.0, self.limit())
    }

    /// Mouse wheel input. Returns whether the target moved.
    pub fn wheel(&mut self, delta_y: f64) -> bool {
        self.push(delta_y * self.options.multiplier)
    }

    /// Touch drag input (`delta_y` positive when dragging upwards).
    pub fn touch(&mut self, delta_y: f64) -> bool {
        let delta = delta_y * self.options.touch_multiplier;
        if self.options.smooth_touch {
            self.push(delta)
        } else {
            let before = self.target;
            self.scroll_to(self.target + delta, true);
            self.target != before
        }
    }

    /// Keyboard input. Returns whether the target moved.
    pub fn key(&mut self, key: ScrollKey) -> bool {
        let page = (self.viewport_height - PAGE_OVERLAP).max(KEY_STEP);
        match key {
            ScrollKey::Up => self.push(-KEY_STEP),
            ScrollKey::Down => self.push(KEY_STEP),
            ScrollKey::PageUp => self.push(-page),
            ScrollKey::PageDown => self.push(page),
            ScrollKey::Home => self.push(-self.target),
            ScrollKey::End => self.push(self.limit() - self.target),
        }
    }

    /// Brings the range `[top, top + height)` (document coordinates) into view with the
    /// least movement. Returns whether the target moved.
    pub fn reveal(&mut self, top: f64, height: f64) -> bool {
        let bottom = top + height;
        let view_bottom = self.target + self.viewport_height;
        let delta = if top < self.target || height > self.viewport_height {
            top - PAGE_OVERLAP - self.target
        } else if bottom > view_bottom {
            bottom + PAGE_OVERLAP - view_bottom
        } else {
            return false;
        };
        self.push(delta)
    }

    fn push(&mut self, delta: f64) -> bool {
        if self.destroyed {
            return false;
        }
        let before = self.target;
        self.target = self.clamp(self.target + delta);
        self.target != before
    }

    /// Moves to `offset`, easing there unless `immediate`.
    pub fn scroll_to(&mut self, offset: f64, immediate: bool) {
        if self.destroyed {
            return;
        }
        self.target = self.clamp(offset);
        if immediate {
            self.current = self.target;
        }
    }

    /// Eases to the section `id`. Unknown sections leave the position untouched.
    pub fn jump_to(&mut self, locator: &impl SectionLocator, id: &str) -> bool {
        match locator.section_top(id) {
            Some(top) => {
                self.scroll_to(top, false);
                true
            }
            None => {
                log::debug!("no section with id {id:?}");
                false
            }
        }
    }

    /// Records new content and viewport heights. Returns whether the layout changed, in
    /// which case anything measured against the old layout must be recomputed.
    pub fn resize(&mut self, content_height: f64, viewport_height: f64) -> bool {
        if self.destroyed {
            return false;
        }
        if content_height == self.content_height && viewport_height == self.viewport_height {
            return false;
        }
        self.content_height = content_height.max(0.0);
        self.viewport_height = viewport_height.max(0.0);
        self.target = self.clamp(self.target);
        self.current = self.clamp(self.current);
        true
    }

    /// Advances the eased offset by `dt` seconds. Returns the new offset if it moved.
    pub fn tick(&mut self, dt: f64) -> Option<f64> {
        if self.destroyed || !self.is_scrolling() {
            return None;
        }
        let frames = (dt * 60.0).max(0.0);
        let k = 1.0 - (1.0 - self.options.lerp.clamp(0.0, 1.0)).powf(frames);
        self.current += (self.target - self.current) * k;
        if (self.target - self.current).abs() < SETTLE_DISTANCE {
            self.current = self.target;
        }
        Some(self.current)
    }

    /// Releases the controller. Every later call is a no-op.
    pub fn destroy(&mut self) {
        self.destroyed = true;
        self.target = self.current;
    }
}

impl ScrollSource for VirtualScroll {
    fn offset(&self) -> f64 {
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> VirtualScroll {
        let mut vs = VirtualScroll::new(SmoothScrollOptions::default());
        assert!(vs.resize(5000.0, 1000.0));
        vs
    }

    fn settle(vs: &mut VirtualScroll) -> usize {
        let mut frames = 0;
        while vs.tick(1.0 / 60.0).is_some() {
            frames += 1;
            assert!(frames < 1000, "never settled");
        }
        frames
    }

    #[test]
    fn test_wheel_is_clamped() {
        let mut vs = controller();
        assert_eq!(vs.limit(), 4000.0);
        assert!(!vs.wheel(-200.0));
        assert_eq!(vs.target(), 0.0);
        assert!(vs.wheel(10_000.0));
        assert_eq!(vs.target(), 4000.0);
    }

    #[test]
    fn test_eases_towards_target() {
        let mut vs = controller();
        vs.wheel(300.0);
        let first = vs.tick(1.0 / 60.0).unwrap();
        assert!((first - 30.0).abs() < 1e-9);
        assert!(vs.is_scrolling());
        settle(&mut vs);
        assert_eq!(vs.offset(), 300.0);
        assert_eq!(vs.tick(1.0 / 60.0), None);
    }

    #[test]
    fn test_frame_rate_independent() {
        let mut a = controller();
        let mut b = controller();
        a.wheel(500.0);
        b.wheel(500.0);
        a.tick(1.0 / 30.0);
        b.tick(1.0 / 60.0);
        b.tick(1.0 / 60.0);
        assert!((a.offset() - b.offset()).abs() < 1e-6);
    }

    #[test]
    fn test_scroll_to() {
        let mut vs = controller();
        vs.scroll_to(1234.0, true);
        assert_eq!(vs.offset(), 1234.0);
        vs.scroll_to(99_999.0, false);
        assert_eq!(vs.target(), 4000.0);
        assert_eq!(vs.offset(), 1234.0);
    }

    #[test]
    fn test_resize_reports_changes() {
        let mut vs = controller();
        vs.scroll_to(3500.0, true);
        assert!(!vs.resize(5000.0, 1000.0));
        assert!(vs.resize(3000.0, 1000.0));
        assert_eq!(vs.offset(), 2000.0);
    }

    #[test]
    fn test_touch() {
        let mut vs = controller();
        vs.touch(50.0);
        assert_eq!(vs.target(), 100.0);
        assert_eq!(vs.offset(), 0.0);

        let mut snappy = VirtualScroll::new(SmoothScrollOptions {
            smooth_touch: false,
            ..SmoothScrollOptions::default()
        });
        snappy.resize(5000.0, 1000.0);
        assert!(snappy.touch(50.0));
        assert_eq!(snappy.offset(), 100.0);
    }

    #[test]
    fn test_destroy_releases() {
        let mut vs = controller();
        vs.wheel(400.0);
        vs.tick(1.0 / 60.0);
        vs.destroy();
        assert!(vs.is_destroyed());
        assert!(!vs.wheel(100.0));
        assert!(!vs.resize(100.0, 10.0));
        assert_eq!(vs.tick(1.0 / 60.0), None);
        let frozen = vs.offset();
        vs.scroll_to(0.0, true);
        assert_eq!(vs.offset(), frozen);
    }

    #[test]
    fn test_jump_to_section() {
        struct Sections;
        impl SectionLocator for Sections {
            fn section_top(&self, id: &str) -> Option<f64> {
                (id == "contact").then_some(3200.0)
            }
        }

        let mut vs = controller();
        vs.scroll_to(500.0, true);
        assert!(!vs.jump_to(&Sections, "nowhere"));
        assert_eq!(vs.target(), 500.0);
        assert_eq!(vs.offset(), 500.0);

        assert!(vs.jump_to(&Sections, "contact"));
        assert_eq!(vs.target(), 3200.0);
        settle(&mut vs);
        assert_eq!(vs.offset(), 3200.0);
    }

    #[test]
    fn test_keys() {
        assert_eq!(ScrollKey::from_key("ArrowDown", false), Some(ScrollKey::Down));
        assert_eq!(ScrollKey::from_key(" ", false), Some(ScrollKey::PageDown));
        assert_eq!(ScrollKey::from_key(" ", true), Some(ScrollKey::PageUp));
        assert_eq!(ScrollKey::from_key("End", false), Some(ScrollKey::End));
        assert_eq!(ScrollKey::from_key("Tab", false), None);
        assert_eq!(ScrollKey::from_key("a", false), None);

        let mut vs = controller();
        assert!(vs.key(ScrollKey::Down));
        assert_eq!(vs.target(), KEY_STEP);
        assert!(vs.key(ScrollKey::PageDown));
        assert_eq!(vs.target(), KEY_STEP + 960.0);
        assert!(vs.key(ScrollKey::Up));
        assert_eq!(vs.target(), 960.0);
        assert!(vs.key(ScrollKey::End));
        assert_eq!(vs.target(), 4000.0);
        assert!(!vs.key(ScrollKey::PageDown));
        assert!(vs.key(ScrollKey::Home));
        assert_eq!(vs.target(), 0.0);
        assert!(!vs.key(ScrollKey::PageUp));

        settle(&mut vs);
        vs.destroy();
        assert!(!vs.key(ScrollKey::End));
    }

    #[test]
    fn test_reveal_focused_range() {
        let mut vs = controller();
        vs.scroll_to(1000.0, true);
        // already visible
        assert!(!vs.reveal(1200.0, 50.0));
        assert_eq!(vs.target(), 1000.0);
        // below the fold: bottom edge lands just inside
        assert!(vs.reveal(2500.0, 60.0));
        assert_eq!(vs.target(), 2500.0 + 60.0 + 40.0 - 1000.0);
        // above: top edge lands just inside
        assert!(vs.reveal(300.0, 60.0));
        assert_eq!(vs.target(), 260.0);
        // never past the ends
        assert!(vs.reveal(4900.0, 80.0));
        assert_eq!(vs.target(), 4000.0);
    }

    #[test]
    fn test_scroll_source() {
        fn read(source: &impl ScrollSource) -> f64 {
            source.offset()
        }
        assert_eq!(read(&42.0), 42.0);
        let mut vs = controller();
        vs.scroll_to(10.0, true);
        assert_eq!(read(&vs), 10.0);
    }
}
