use std::sync::OnceLock;

static ENGINE: OnceLock<EngineSettings> = OnceLock::new();

/// Process-wide animation settings, installed once before anything animates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineSettings {
    /// Frame deltas above this (ms) are treated as a stall, e.g. a hidden tab.
    pub lag_threshold_ms: f64,
    /// Delta used in place of a stalled frame (ms).
    pub adjusted_lag_ms: f64,
    pub time_scale: f64,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            lag_threshold_ms: 500.0,
            adjusted_lag_ms: 33.0,
            time_scale: 1.0,
        }
    }
}

impl EngineSettings {
    /// Seconds to advance timelines by for a raw frame delta in milliseconds.
    pub fn frame_delta(&self, delta_ms: f64) -> f64 {
        let ms = if delta_ms > self.lag_threshold_ms {
            self.adjusted_lag_ms
        } else {
            delta_ms.max(0.0)
        };
        ms / 1000.0 * self.time_scale
    }
}

/// Installs the engine settings. Only the first call has any effect; returns whether
/// this call was the one that installed them.
pub fn register(settings: EngineSettings) -> bool {
    let installed = ENGINE.set(settings).is_ok();
    if installed {
        log::debug!("animation engine registered: {settings:?}");
    }
    installed
}

pub fn settings() -> &'static EngineSettings {
    ENGINE.get_or_init(EngineSettings::default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_is_idempotent() {
        register(EngineSettings::default());
        assert!(!register(EngineSettings {
            time_scale: 4.0,
            ..EngineSettings::default()
        }));
        assert_eq!(*settings(), EngineSettings::default());
    }

    #[test]
    fn test_lag_smoothing() {
        let s = EngineSettings::default();
        assert!((s.frame_delta(16.0) - 0.016).abs() < 1e-12);
        assert!((s.frame_delta(4000.0) - 0.033).abs() < 1e-12);
        assert_eq!(s.frame_delta(-3.0), 0.0);
    }
}
