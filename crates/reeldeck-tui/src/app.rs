use std::sync::Arc;

use ratatui::layout::Rect;
use reeldeck_core::carousel::cells_to_units;
use reeldeck_core::{AppConfig, Catalog, CarouselState, NavSelection, REGULAR_SCALE};

use crate::poster::PosterCache;
use crate::scale::ScaleAnimator;
use crate::theme::Theme;
use crate::themes::load_theme;

/// Which interactive strip owns key input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Featured,
    Watching,
    NavBar,
}

/// Application mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Normal browsing mode
    Normal,
    /// Help overlay
    Help,
}

/// Application state
pub struct App {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// The content being browsed
    pub catalog: Catalog,
    /// Active color theme
    pub theme: Theme,
    /// Name of the active theme (for cycling)
    pub theme_name: String,
    /// Scroll state of the featured carousel
    pub carousel: CarouselState,
    /// One scale animator per featured card
    pub card_scales: Vec<ScaleAnimator>,
    /// "+NN Casts" counts, rolled once at startup
    pub extra_casts: Vec<u8>,
    /// Selected row in the continue-watching list
    pub watching_selected: usize,
    /// Bottom bar selection
    pub nav: NavSelection,
    /// Current focus strip
    pub focus: Focus,
    /// Current application mode
    pub mode: Mode,
    /// Whether posters are downloaded and drawn
    pub posters_enabled: bool,
    /// Decoded poster images keyed by URL
    pub poster_cache: PosterCache,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Status message
    pub status_message: Option<String>,
    /// Pending key for multi-key sequences (e.g., 'gg')
    pub pending_key: Option<char>,
    /// Carousel strip area from the last render, for wheel hit-testing
    pub carousel_area: Rect,
    /// Clickable nav entry areas from the last render
    pub nav_hitboxes: Vec<(Rect, usize)>,
}

impl App {
    pub fn new(config: Arc<AppConfig>, catalog: Catalog) -> Self {
        let theme = load_theme(&config.ui.theme);
        let theme_name = config.ui.theme.name.clone();
        let carousel = CarouselState::new(catalog.movies.len());
        let card_scales = catalog
            .movies
            .iter()
            .map(|_| ScaleAnimator::new(config.ui.animation.clone(), REGULAR_SCALE))
            .collect();
        let extra_casts = catalog.roll_extra_casts();
        let nav = NavSelection::new(catalog.nav_entries.len());
        let posters_enabled = config.ui.posters;

        Self {
            config,
            catalog,
            theme,
            theme_name,
            carousel,
            card_scales,
            extra_casts,
            watching_selected: 0,
            nav,
            focus: Focus::Featured,
            mode: Mode::Normal,
            posters_enabled,
            poster_cache: PosterCache::new(),
            should_quit: false,
            status_message: None,
            pending_key: None,
            carousel_area: Rect::default(),
            nav_hitboxes: Vec::new(),
        }
    }

    /// Card width in cells for a carousel viewport of `viewport_cells`.
    pub fn card_width_cells(&self, viewport_cells: u16) -> u16 {
        (viewport_cells as u32 * self.config.carousel.card_width_percent as u32 / 100).max(1) as u16
    }

    /// Feed the current viewport width (in cells) into the carousel,
    /// deriving the card stride from config. Called on every draw so a
    /// resize re-clamps the scroll offset immediately.
    pub fn update_carousel_geometry(&mut self, viewport_cells: u16) {
        let card = self.card_width_cells(viewport_cells);
        let stride = cells_to_units(card + self.config.carousel.gap_cells);
        self.carousel
            .set_geometry(cells_to_units(viewport_cells), stride);
    }

    /// Point every card's animator at the scale the carousel math wants.
    pub fn retarget_card_scales(&mut self) {
        for (i, animator) in self.card_scales.iter_mut().enumerate() {
            animator.set_target(self.carousel.scale_target(i));
        }
    }

    /// Advance all scale animations. Returns true while any card is still
    /// tweening, which the run loop uses to switch to the animation frame
    /// rate.
    pub fn update_animations(&mut self) -> bool {
        let mut animating = false;
        for animator in &mut self.card_scales {
            animator.update();
            animating |= animator.is_animating();
        }
        animating
    }

    /// Whether any card scale is still mid-tween
    pub fn cards_animating(&self) -> bool {
        self.card_scales.iter().any(|a| a.is_animating())
    }

    /// The featured card that activate/scroll-context refers to: the
    /// emphasized card when one exists, the first visible one otherwise.
    pub fn featured_cursor(&self) -> usize {
        let emphasis = self.carousel.emphasis();
        if emphasis.applies_to(emphasis.candidate, self.carousel.item_count()) {
            emphasis.candidate
        } else {
            self.carousel.first_visible_index()
        }
    }

    /// Move focus to the strip below
    pub fn focus_down(&mut self) {
        self.focus = match self.focus {
            Focus::Featured => Focus::Watching,
            Focus::Watching => Focus::NavBar,
            Focus::NavBar => Focus::NavBar,
        };
    }

    /// Move focus to the strip above
    pub fn focus_up(&mut self) {
        self.focus = match self.focus {
            Focus::Featured => Focus::Featured,
            Focus::Watching => Focus::Featured,
            Focus::NavBar => Focus::Watching,
        };
    }

    /// Cycle focus forward through the strips
    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            Focus::Featured => Focus::Watching,
            Focus::Watching => Focus::NavBar,
            Focus::NavBar => Focus::Featured,
        };
    }

    /// Cycle focus backward through the strips
    pub fn focus_prev(&mut self) {
        self.focus = match self.focus {
            Focus::Featured => Focus::NavBar,
            Focus::Watching => Focus::Featured,
            Focus::NavBar => Focus::Watching,
        };
    }

    /// Step right within the focused strip
    pub fn move_right(&mut self) {
        match self.focus {
            Focus::Featured => {
                let step = self.config.carousel.scroll_step as i32;
                self.carousel.scroll_by(step);
            }
            Focus::Watching => {
                let len = self.catalog.played_movies.len();
                if len > 0 && self.watching_selected < len - 1 {
                    self.watching_selected += 1;
                }
            }
            Focus::NavBar => self.nav.select_next(),
        }
    }

    /// Step left within the focused strip
    pub fn move_left(&mut self) {
        match self.focus {
            Focus::Featured => {
                let step = self.config.carousel.scroll_step as i32;
                self.carousel.scroll_by(-step);
            }
            Focus::Watching => {
                self.watching_selected = self.watching_selected.saturating_sub(1);
            }
            Focus::NavBar => self.nav.select_prev(),
        }
    }

    /// Jump to the start of the focused strip
    pub fn jump_to_start(&mut self) {
        match self.focus {
            Focus::Featured => self.carousel.jump_to_start(),
            Focus::Watching => self.watching_selected = 0,
            Focus::NavBar => self.nav.select(0),
        }
    }

    /// Jump to the end of the focused strip
    pub fn jump_to_end(&mut self) {
        match self.focus {
            Focus::Featured => self.carousel.jump_to_end(),
            Focus::Watching => {
                self.watching_selected = self.catalog.played_movies.len().saturating_sub(1);
            }
            Focus::NavBar => self.nav.select(self.nav.len() - 1),
        }
    }

    /// Activate the focused item
    pub fn activate(&mut self) {
        match self.focus {
            Focus::Featured => {
                if let Some(movie) = self.catalog.movies.get(self.featured_cursor()) {
                    let title = movie.title.clone();
                    self.set_status(format!("Playing {title}"));
                }
            }
            Focus::Watching => {
                if let Some(played) = self.catalog.played_movies.get(self.watching_selected) {
                    let msg = format!("Resuming {} ({} left)", played.title, played.time);
                    self.set_status(msg);
                }
            }
            Focus::NavBar => {
                let title = self.catalog.nav_entries[self.nav.selected()].title.clone();
                self.set_status(format!("Switched to {title}"));
            }
        }
    }

    /// Activate a bottom-bar destination directly. `index` must name an
    /// existing entry; digit keys and mouse hits are range-checked before
    /// they get here.
    pub fn select_nav(&mut self, index: usize) {
        self.nav.select(index);
        let title = self.catalog.nav_entries[index].title.clone();
        self.set_status(format!("Switched to {title}"));
    }

    /// Switch to the next built-in theme
    pub fn cycle_theme(&mut self) {
        let themes = crate::themes::available_themes();
        let current = themes
            .iter()
            .position(|&name| name == self.theme_name)
            .unwrap_or(0);
        let next = themes[(current + 1) % themes.len()];
        self.theme_name = next.to_string();
        let mut theme_config = self.config.ui.theme.clone();
        theme_config.name = next.to_string();
        self.theme = load_theme(&theme_config);
        self.set_status(format!("Theme: {next}"));
    }

    /// Toggle poster rendering. Turning posters off drops the cache, so
    /// turning them back on refetches everything.
    pub fn toggle_posters(&mut self) {
        self.posters_enabled = !self.posters_enabled;
        if self.posters_enabled {
            self.set_status("Posters on");
        } else {
            self.poster_cache.clear();
            self.set_status("Posters off");
        }
    }

    /// Every image URL on screen that still needs a download
    pub fn poster_urls_needing_load(&self) -> Vec<String> {
        if !self.posters_enabled {
            return Vec::new();
        }

        let mut urls = Vec::new();
        let mut push = |url: &String| {
            if !url.is_empty() && self.poster_cache.needs_fetch(url) && !urls.contains(url) {
                urls.push(url.clone());
            }
        };

        for movie in &self.catalog.movies {
            push(&movie.image_url);
        }
        for played in &self.catalog.played_movies {
            push(&played.image_url);
        }
        for avatar in &self.catalog.cast_avatars {
            push(avatar);
        }

        urls
    }

    /// Nav entry under the given screen position, if any
    pub fn hit_test_nav(&self, x: u16, y: u16) -> Option<usize> {
        self.nav_hitboxes
            .iter()
            .find(|(area, _)| {
                x >= area.x && x < area.x + area.width && y >= area.y && y < area.y + area.height
            })
            .map(|&(_, index)| index)
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Clear the pending key
    pub fn clear_pending_key(&mut self) {
        self.pending_key = None;
    }
}
