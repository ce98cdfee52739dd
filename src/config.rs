use serde::Deserialize;
use std::time::Duration;

use crate::scroll::SmoothScrollOptions;

/// Behavior knobs for the page, read from the `settings` block of `content/site.json`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Scroll offset past which the navigation bar switches to its scrolled style.
    pub nav_scroll_threshold: f64,
    /// How long the simulated contact delivery takes.
    pub submit_delay_ms: u64,
    pub smooth_scroll: SmoothScrollOptions,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            nav_scroll_threshold: 100.0,
            submit_delay_ms: 2000,
            smooth_scroll: SmoothScrollOptions::default(),
        }
    }
}

impl SiteConfig {
    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_settings() {
        let cfg: SiteConfig = serde_json::from_str(r#"{ "submit_delay_ms": 10 }"#).unwrap();
        assert_eq!(cfg.submit_delay(), Duration::from_millis(10));
        assert_eq!(cfg.nav_scroll_threshold, 100.0);
        assert_eq!(cfg.smooth_scroll, SmoothScrollOptions::default());
    }
}
