//! Per-card scale animation controller.
//!
//! Combines the easing and timing atoms into the animator each carousel
//! card owns. The renderer retargets it every frame with the scale the
//! carousel math wants; the animator tweens toward it and reports the
//! interpolated value.

use std::time::{Duration, Instant};

use super::config::AnimationConfigExt;
use super::easing::{EasingType, EasingTypeExt};
use super::timing::{is_complete, lerp, progress};
use reeldeck_core::AnimationConfig;

/// Scale targets closer than this are considered equal.
const SCALE_EPSILON: f32 = 1e-4;

/// Active scale animation state
#[derive(Debug, Clone)]
struct ActiveAnimation {
    /// Animation start time
    start: Instant,
    /// Starting scale
    from: f32,
    /// Target scale
    to: f32,
    /// Animation duration
    duration: Duration,
    /// Easing function
    easing: EasingType,
}

/// Scale animation controller for one carousel card.
///
/// Call `set_target()` whenever the emphasis decision changes, then
/// `update()` each frame to get the interpolated scale.
#[derive(Debug, Clone)]
pub struct ScaleAnimator {
    /// Current active animation (if any)
    animation: Option<ActiveAnimation>,
    /// Configuration
    config: AnimationConfig,
    /// Current scale (always up-to-date)
    current: f32,
}

impl ScaleAnimator {
    /// Create an animator resting at `initial`.
    pub fn new(config: AnimationConfig, initial: f32) -> Self {
        Self {
            animation: None,
            config,
            current: initial,
        }
    }

    /// Update configuration
    pub fn set_config(&mut self, config: AnimationConfig) {
        self.config = config;
    }

    /// Check if an animation is currently active
    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Current interpolated scale.
    #[inline]
    pub fn current(&self) -> f32 {
        self.current
    }

    /// The scale this animator is heading toward.
    pub fn target(&self) -> f32 {
        self.animation.as_ref().map(|a| a.to).unwrap_or(self.current)
    }

    /// Set scale immediately (no animation)
    pub fn set(&mut self, scale: f32) {
        self.animation = None;
        self.current = scale;
    }

    /// Head toward a new target scale.
    ///
    /// When animation is disabled the scale snaps to the target. A target
    /// equal to the current heading is a no-op, so callers can retarget
    /// unconditionally every frame. Retargeting mid-flight restarts the
    /// tween from the current interpolated scale, keeping the motion
    /// continuous when emphasis flips back early.
    pub fn set_target(&mut self, target: f32) {
        if !self.config.is_animated() {
            self.current = target;
            self.animation = None;
            return;
        }

        if (self.target() - target).abs() < SCALE_EPSILON {
            return;
        }

        if (self.current - target).abs() < SCALE_EPSILON {
            self.animation = None;
            self.current = target;
            return;
        }

        self.animation = Some(ActiveAnimation {
            start: Instant::now(),
            from: self.current,
            to: target,
            duration: self.config.duration(),
            easing: self.config.easing,
        });
    }

    /// Advance the animation and return the current scale.
    ///
    /// Call this every frame while `is_animating()`.
    pub fn update(&mut self) -> f32 {
        if let Some(ref anim) = self.animation {
            if is_complete(anim.start, anim.duration) {
                self.current = anim.to;
                self.animation = None;
            } else {
                let t = progress(anim.start, anim.duration);
                let eased_t = anim.easing.apply(t);
                self.current = lerp(anim.from, anim.to, eased_t);
            }
        }
        self.current
    }

    /// Cancel any active animation and stop at the current scale.
    pub fn cancel(&mut self) {
        self.animation = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn animated_config(duration_ms: u64) -> AnimationConfig {
        AnimationConfig {
            enabled: true,
            duration_ms,
            ..Default::default()
        }
    }

    #[test]
    fn test_snap_when_disabled() {
        let config = AnimationConfig {
            enabled: false,
            ..Default::default()
        };
        let mut animator = ScaleAnimator::new(config, 0.9);

        animator.set_target(1.1);
        assert!((animator.current() - 1.1).abs() < 0.0001);
        assert!(!animator.is_animating());
    }

    #[test]
    fn test_animation_starts_on_flip() {
        let mut animator = ScaleAnimator::new(animated_config(100), 0.9);

        animator.set_target(1.1);
        assert!(animator.is_animating());
        assert!((animator.target() - 1.1).abs() < 0.0001);
        // Still near the starting scale right after the flip.
        assert!(animator.update() < 1.1);
    }

    #[test]
    fn test_same_target_is_noop() {
        let mut animator = ScaleAnimator::new(animated_config(100), 0.9);

        animator.set_target(0.9);
        assert!(!animator.is_animating());

        animator.set_target(1.1);
        let started = animator.is_animating();
        animator.set_target(1.1);
        // Retargeting with the same value must not restart the tween.
        assert_eq!(animator.is_animating(), started);
    }

    #[test]
    fn test_retarget_restarts_from_current() {
        let mut animator = ScaleAnimator::new(animated_config(10_000), 0.9);

        animator.set_target(1.1);
        let mid = animator.update();
        animator.set_target(0.9);
        // The new tween departs from wherever the old one was.
        let now = animator.update();
        assert!((now - mid).abs() < 0.05);
        assert!((animator.target() - 0.9).abs() < 0.0001);
    }

    #[test]
    fn test_completes_at_target() {
        let mut animator = ScaleAnimator::new(animated_config(10), 0.9);

        animator.set_target(1.1);
        std::thread::sleep(Duration::from_millis(50));
        let scale = animator.update();
        assert!((scale - 1.1).abs() < 0.0001);
        assert!(!animator.is_animating());
    }
}
