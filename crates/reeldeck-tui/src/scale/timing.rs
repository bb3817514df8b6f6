//! Progress and interpolation helpers for scale animations.

use std::time::{Duration, Instant};

/// Animation progress in [0, 1] from start time and duration.
/// A zero duration reports complete immediately.
#[inline]
pub fn progress(start: Instant, duration: Duration) -> f32 {
    if duration.is_zero() {
        return 1.0;
    }
    let elapsed = start.elapsed();
    let ratio = elapsed.as_secs_f32() / duration.as_secs_f32();
    ratio.clamp(0.0, 1.0)
}

/// Check if animation is complete
#[inline]
pub fn is_complete(start: Instant, duration: Duration) -> bool {
    start.elapsed() >= duration
}

/// Linear interpolation between two scale values
#[inline]
pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp() {
        assert!((lerp(0.9, 1.1, 0.0) - 0.9).abs() < 0.0001);
        assert!((lerp(0.9, 1.1, 0.5) - 1.0).abs() < 0.0001);
        assert!((lerp(0.9, 1.1, 1.0) - 1.1).abs() < 0.0001);
    }

    #[test]
    fn test_progress_zero_duration() {
        let start = Instant::now();
        assert!((progress(start, Duration::ZERO) - 1.0).abs() < 0.001);
    }
}
