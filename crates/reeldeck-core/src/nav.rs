//! Bottom navigation selection.

/// Which destination in the bottom bar is active.
///
/// Exactly one index is selected at all times. Selecting an index that is
/// already active is a no-op; selecting past the end of the bar is a
/// programming error and panics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavSelection {
    selected: usize,
    len: usize,
}

impl NavSelection {
    /// A bar of `len` destinations with the first one active.
    pub fn new(len: usize) -> Self {
        assert!(len > 0, "navigation bar cannot be empty");
        Self { selected: 0, len }
    }

    /// Index of the active destination.
    #[inline]
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Number of destinations in the bar.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether `index` is the active destination.
    #[inline]
    pub fn is_selected(&self, index: usize) -> bool {
        self.selected == index
    }

    /// Activate the destination at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`; callers map their inputs into range
    /// before selecting.
    pub fn select(&mut self, index: usize) {
        assert!(
            index < self.len,
            "nav index {index} out of range for bar of {}",
            self.len
        );
        self.selected = index;
    }

    /// Activate the next destination, wrapping past the end.
    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % self.len;
    }

    /// Activate the previous destination, wrapping past the start.
    pub fn select_prev(&mut self) {
        self.selected = (self.selected + self.len - 1) % self.len;
    }
}
