//! Extension methods over the core animation config.

use std::time::Duration;

// Re-export config types from core
pub use reeldeck_core::{AnimationConfig, EasingType};

/// Extension trait for AnimationConfig with utility methods
pub trait AnimationConfigExt {
    /// Get animation duration as Duration
    fn duration(&self) -> Duration;

    /// Get tick duration for the animation frame rate
    fn tick_duration(&self) -> Duration;

    /// Check if scale animation is effectively enabled
    fn is_animated(&self) -> bool;
}

impl AnimationConfigExt for AnimationConfig {
    #[inline]
    fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    #[inline]
    fn tick_duration(&self) -> Duration {
        if self.fps == 0 {
            Duration::from_millis(16) // ~60fps fallback
        } else {
            Duration::from_millis(1000 / self.fps as u64)
        }
    }

    #[inline]
    fn is_animated(&self) -> bool {
        self.enabled && self.duration_ms > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AnimationConfig::default();
        assert!(config.enabled);
        assert_eq!(config.duration_ms, 150);
        assert_eq!(config.easing, EasingType::Cubic);
        assert_eq!(config.fps, 60);
    }

    #[test]
    fn test_duration() {
        let config = AnimationConfig {
            duration_ms: 200,
            ..Default::default()
        };
        assert_eq!(config.duration(), Duration::from_millis(200));
    }

    #[test]
    fn test_is_animated() {
        let mut config = AnimationConfig::default();
        assert!(config.is_animated());

        config.enabled = false;
        assert!(!config.is_animated());

        config.enabled = true;
        config.duration_ms = 0;
        assert!(!config.is_animated());
    }

    #[test]
    fn test_zero_fps_falls_back() {
        let config = AnimationConfig {
            fps: 0,
            ..Default::default()
        };
        assert_eq!(config.tick_duration(), Duration::from_millis(16));
    }
}
