//! Card scale animation for the featured carousel.
//!
//! When the emphasis decision flips (a card enters or leaves the center
//! band) its render scale does not jump between 0.9 and 1.1; it tweens
//! there over a configurable duration and easing curve. Each card owns a
//! [`ScaleAnimator`], retargeted every frame with the scale the carousel
//! math asks for.
//!
//! - `easing` - pure easing functions (cubic, quintic, exponential)
//! - `timing` - progress and interpolation helpers
//! - `config` - extension methods over the core animation config
//! - `animation` - the per-card animator combining the above
//!
//! ```ignore
//! use reeldeck_tui::scale::ScaleAnimator;
//!
//! let mut animator = ScaleAnimator::new(config.ui.animation.clone(), 0.9);
//! animator.set_target(1.1);
//! // each frame:
//! let scale = animator.update();
//! ```

pub mod animation;
pub mod config;
pub mod easing;
pub mod timing;

pub use animation::ScaleAnimator;
pub use config::AnimationConfigExt;
pub use easing::{EasingType, EasingTypeExt};
