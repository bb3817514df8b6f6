//! Scroll-driven emphasis for the featured-movies carousel.
//!
//! The carousel measures everything in sub-cell units so that card widths,
//! scroll steps and the center band share one integer domain
//! ([`UNITS_PER_CELL`] units per terminal column). As the row scrolls, the
//! card just past the first visible one grows toward [`EMPHASIZED_SCALE`]
//! while every other card settles at [`REGULAR_SCALE`]; outside the center
//! band no card is emphasized at all. The decision is a pure function of
//! three integers and never fails: out-of-range candidates simply match
//! nothing.

/// Sub-cell units per terminal column.
pub const UNITS_PER_CELL: u32 = 4;

/// Half-width of the center band, in units.
pub const CENTER_BAND: u32 = 70;

/// Scale target for the emphasized card.
pub const EMPHASIZED_SCALE: f32 = 1.1;

/// Scale target for every other card.
pub const REGULAR_SCALE: f32 = 0.9;

/// Convert a width in terminal columns to carousel units.
#[inline]
pub fn cells_to_units(cells: u16) -> u32 {
    cells as u32 * UNITS_PER_CELL
}

/// Whether the scroll position sits inside the center band.
///
/// `center = viewport_width / 2` (integer division); the band is the
/// closed interval `[center - 70, center + 70]`, tested against
/// `scroll_offset / 2`.
#[inline]
pub fn is_centered(scroll_offset: u32, viewport_width: u32) -> bool {
    let center = (viewport_width / 2) as i64;
    let band = CENTER_BAND as i64;
    let half_offset = (scroll_offset / 2) as i64;
    (center - band..=center + band).contains(&half_offset)
}

/// The card eligible for emphasis: the one past the first visible card.
#[inline]
pub fn candidate_index(first_visible_index: usize) -> usize {
    first_visible_index + 1
}

/// Emphasis decision for one rendered frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Emphasis {
    /// Whether the scroll position sits inside the center band.
    pub centered: bool,
    /// Index of the card eligible for emphasis.
    pub candidate: usize,
}

impl Emphasis {
    /// True iff the card at `index` (of `item_count` cards) renders at the
    /// emphasized scale. At most one index can satisfy this per frame.
    pub fn applies_to(&self, index: usize, item_count: usize) -> bool {
        self.centered && index == self.candidate && index < item_count
    }
}

/// Scroll state for the featured carousel.
///
/// `scroll_offset` is the total scrolled distance in units, clamped to
/// `[0, content_width - viewport_width]`; `first_visible_index` derives
/// from it by the card stride. Updated on every scroll event, re-clamped
/// on every resize.
#[derive(Debug, Clone)]
pub struct CarouselState {
    scroll_offset: u32,
    first_visible_index: usize,
    viewport_width: u32,
    item_count: usize,
    stride: u32,
}

impl CarouselState {
    /// Create state for a row of `item_count` cards. Geometry starts at
    /// zero and is supplied by the renderer via [`set_geometry`].
    ///
    /// [`set_geometry`]: CarouselState::set_geometry
    pub fn new(item_count: usize) -> Self {
        Self {
            scroll_offset: 0,
            first_visible_index: 0,
            viewport_width: 0,
            item_count,
            stride: 0,
        }
    }

    /// Current scroll offset in units.
    #[inline]
    pub fn scroll_offset(&self) -> u32 {
        self.scroll_offset
    }

    /// Index of the first (possibly partially) visible card.
    #[inline]
    pub fn first_visible_index(&self) -> usize {
        self.first_visible_index
    }

    /// Viewport width in units.
    #[inline]
    pub fn viewport_width(&self) -> u32 {
        self.viewport_width
    }

    /// Number of cards in the row.
    #[inline]
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Card stride (card width plus gap) in units.
    #[inline]
    pub fn stride(&self) -> u32 {
        self.stride
    }

    /// Update viewport width and card stride (both in units), re-deriving
    /// the clamp range and first visible index. Called whenever the
    /// terminal resizes or the card width rule yields a new stride.
    pub fn set_geometry(&mut self, viewport_width: u32, stride: u32) {
        self.viewport_width = viewport_width;
        self.stride = stride;
        self.scroll_offset = self.scroll_offset.min(self.max_scroll());
        self.refresh_first_visible();
    }

    /// Replace the card count (e.g. a different catalog), snapping the
    /// offset back into range.
    pub fn set_item_count(&mut self, item_count: usize) {
        self.item_count = item_count;
        self.scroll_offset = self.scroll_offset.min(self.max_scroll());
        self.refresh_first_visible();
    }

    /// Largest valid scroll offset.
    pub fn max_scroll(&self) -> u32 {
        let content = self.stride.saturating_mul(self.item_count as u32);
        content.saturating_sub(self.viewport_width)
    }

    /// Scroll by a signed amount of units, clamping at either end.
    pub fn scroll_by(&mut self, delta: i32) {
        let next = self.scroll_offset as i64 + delta as i64;
        self.scroll_offset = next.clamp(0, self.max_scroll() as i64) as u32;
        self.refresh_first_visible();
    }

    /// Jump to the very start of the row.
    pub fn jump_to_start(&mut self) {
        self.scroll_offset = 0;
        self.refresh_first_visible();
    }

    /// Jump to the very end of the row.
    pub fn jump_to_end(&mut self) {
        self.scroll_offset = self.max_scroll();
        self.refresh_first_visible();
    }

    /// The emphasis decision for the current scroll position.
    pub fn emphasis(&self) -> Emphasis {
        Emphasis {
            centered: is_centered(self.scroll_offset, self.viewport_width),
            candidate: candidate_index(self.first_visible_index),
        }
    }

    /// Scale target for the card at `index`: [`EMPHASIZED_SCALE`] for the
    /// centered candidate, [`REGULAR_SCALE`] for everything else
    /// (including out-of-range indices).
    pub fn scale_target(&self, index: usize) -> f32 {
        if self.emphasis().applies_to(index, self.item_count) {
            EMPHASIZED_SCALE
        } else {
            REGULAR_SCALE
        }
    }

    fn refresh_first_visible(&mut self) {
        self.first_visible_index = if self.stride == 0 {
            0
        } else {
            (self.scroll_offset / self.stride) as usize
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(item_count: usize, viewport: u32, stride: u32, offset: u32) -> CarouselState {
        let mut s = CarouselState::new(item_count);
        s.set_geometry(viewport, stride);
        s.scroll_by(offset as i32);
        s
    }

    #[test]
    fn test_not_centered_at_half_band_distance() {
        // viewport 400 -> center 200, band [130, 270]; offset 200 -> 100.
        assert!(!is_centered(200, 400));
    }

    #[test]
    fn test_centered_at_full_offset() {
        // viewport 400 -> center 200; offset 400 -> 200, inside [130, 270].
        assert!(is_centered(400, 400));
    }

    #[test]
    fn test_band_is_closed_interval() {
        // Lower edge: offset 260 -> 130 is in; 259 -> 129 is out.
        assert!(is_centered(260, 400));
        assert!(!is_centered(258, 400));
        // Upper edge: offset 540 -> 270 is in; 542 -> 271 is out.
        assert!(is_centered(540, 400));
        assert!(!is_centered(542, 400));
    }

    #[test]
    fn test_candidate_follows_first_visible() {
        assert_eq!(candidate_index(0), 1);
        assert_eq!(candidate_index(1), 2);
    }

    #[test]
    fn test_emphasized_item_from_worked_example() {
        // viewport 400, offset 400, first visible 1 (stride 300):
        // centered and candidate 2 -> card 2 at 1.1, the rest at 0.9.
        let s = state(4, 400, 300, 400);
        assert_eq!(s.first_visible_index(), 1);
        let emphasis = s.emphasis();
        assert!(emphasis.centered);
        assert_eq!(emphasis.candidate, 2);
        assert_eq!(s.scale_target(2), EMPHASIZED_SCALE);
        assert_eq!(s.scale_target(0), REGULAR_SCALE);
        assert_eq!(s.scale_target(1), REGULAR_SCALE);
        assert_eq!(s.scale_target(3), REGULAR_SCALE);
    }

    #[test]
    fn test_no_emphasis_outside_band() {
        // viewport 400, offset 200 -> not centered, no card emphasized.
        let s = state(4, 400, 300, 200);
        for i in 0..4 {
            assert_eq!(s.scale_target(i), REGULAR_SCALE);
        }
    }

    #[test]
    fn test_at_most_one_emphasized_over_sweep() {
        for offset in (0..1200).step_by(7) {
            for stride in [120, 232, 300] {
                let s = state(5, 400, stride, offset);
                let emphasized = (0..5)
                    .filter(|&i| s.scale_target(i) == EMPHASIZED_SCALE)
                    .count();
                assert!(
                    emphasized <= 1,
                    "offset {offset} stride {stride} emphasized {emphasized}"
                );
            }
        }
    }

    #[test]
    fn test_short_list_never_matches() {
        // With one card the candidate index is out of range; the decision
        // degrades to "no emphasis" without erroring.
        let s = state(1, 400, 300, 400);
        assert!(s.emphasis().centered);
        assert_eq!(s.scale_target(0), REGULAR_SCALE);
        assert_eq!(s.scale_target(1), REGULAR_SCALE);
    }

    #[test]
    fn test_scroll_clamps_to_content() {
        let mut s = CarouselState::new(4);
        s.set_geometry(400, 176);
        s.scroll_by(10_000);
        assert_eq!(s.scroll_offset(), s.max_scroll());
        s.scroll_by(-10_000);
        assert_eq!(s.scroll_offset(), 0);
        assert_eq!(s.first_visible_index(), 0);
    }

    #[test]
    fn test_first_visible_derivation() {
        let mut s = CarouselState::new(6);
        s.set_geometry(400, 176);
        s.scroll_by(176);
        assert_eq!(s.first_visible_index(), 1);
        s.scroll_by(175);
        assert_eq!(s.first_visible_index(), 1);
        s.scroll_by(1);
        assert_eq!(s.first_visible_index(), 2);
    }

    #[test]
    fn test_resize_reclamps_offset() {
        let mut s = CarouselState::new(4);
        s.set_geometry(200, 176);
        s.jump_to_end();
        let at_end = s.scroll_offset();
        // Growing the viewport shrinks the scrollable range.
        s.set_geometry(600, 176);
        assert!(s.scroll_offset() <= s.max_scroll());
        assert!(s.scroll_offset() <= at_end);
    }

    #[test]
    fn test_zero_stride_is_inert() {
        let mut s = CarouselState::new(4);
        s.set_geometry(400, 0);
        s.scroll_by(50);
        assert_eq!(s.scroll_offset(), 0);
        assert_eq!(s.first_visible_index(), 0);
    }

    #[test]
    fn test_jump_to_ends() {
        let mut s = CarouselState::new(4);
        s.set_geometry(320, 176);
        s.jump_to_end();
        assert_eq!(s.scroll_offset(), s.max_scroll());
        s.jump_to_start();
        assert_eq!(s.scroll_offset(), 0);
    }
}
