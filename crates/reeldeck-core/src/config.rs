use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub carousel: CarouselConfig,
    #[serde(default)]
    pub keymap: KeymapConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            ui: UiConfig::default(),
            carousel: CarouselConfig::default(),
            keymap: KeymapConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Catalog JSON file to load instead of the built-in sample
    #[serde(default)]
    pub catalog_file: Option<PathBuf>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            catalog_file: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Download and render poster images
    #[serde(default = "default_true")]
    pub posters: bool,
    /// Render bottom-bar icons with Nerd Font glyphs
    #[serde(default = "default_true")]
    pub nerd_font: bool,
    /// Theme configuration
    #[serde(default)]
    pub theme: ThemeConfig,
    /// Card scale animation
    #[serde(default)]
    pub animation: AnimationConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            posters: default_true(),
            nerd_font: default_true(),
            theme: ThemeConfig::default(),
            animation: AnimationConfig::default(),
        }
    }
}

/// Geometry and stepping of the featured carousel.
///
/// Distances are measured in sub-cell units (4 units per terminal column)
/// so scale math stays in one integer domain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarouselConfig {
    /// Units scrolled per key press or wheel notch
    #[serde(default = "default_scroll_step")]
    pub scroll_step: u32,
    /// Card width as a percentage of the carousel viewport
    #[serde(default = "default_card_width_percent")]
    pub card_width_percent: u16,
    /// Gap between cards in terminal columns
    #[serde(default = "default_gap_cells")]
    pub gap_cells: u16,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            scroll_step: default_scroll_step(),
            card_width_percent: default_card_width_percent(),
            gap_cells: default_gap_cells(),
        }
    }
}

/// Easing function for the card scale animation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingType {
    /// No interpolation, jump at the end
    None,
    /// Constant speed
    Linear,
    /// Cubic ease-out
    Cubic,
    /// Quintic ease-out
    Quintic,
    /// Exponential ease-out
    EaseOut,
}

/// Card scale animation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationConfig {
    /// Animate scale changes (false = snap to target)
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Animation duration in milliseconds
    #[serde(default = "default_animation_duration")]
    pub duration_ms: u64,
    /// Frame rate while a scale animation is active
    #[serde(default = "default_animation_fps")]
    pub fps: u16,
    /// Easing function
    #[serde(default = "default_easing")]
    pub easing: EasingType,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            duration_ms: default_animation_duration(),
            fps: default_animation_fps(),
            easing: default_easing(),
        }
    }
}

/// Theme configuration
/// Can be specified as a simple string (theme name) or as a full struct with overrides
#[derive(Debug, Clone, Serialize)]
pub struct ThemeConfig {
    /// Theme name (e.g., "midnight", "daylight")
    pub name: String,
    /// Optional color overrides for semantic colors
    pub colors: ThemeColorOverrides,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: default_theme_name(),
            colors: ThemeColorOverrides::default(),
        }
    }
}

// Custom deserializer to accept either a string or a struct
impl<'de> Deserialize<'de> for ThemeConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::{self, MapAccess, Visitor};
        use std::fmt;

        struct ThemeConfigVisitor;

        impl<'de> Visitor<'de> for ThemeConfigVisitor {
            type Value = ThemeConfig;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter
                    .write_str("a string (theme name) or a map with 'name' and optional 'colors'")
            }

            // Accept a simple string as just the theme name
            fn visit_str<E>(self, value: &str) -> Result<ThemeConfig, E>
            where
                E: de::Error,
            {
                Ok(ThemeConfig {
                    name: value.to_string(),
                    colors: ThemeColorOverrides::default(),
                })
            }

            // Accept a map/struct with 'name' and optional 'colors'
            fn visit_map<M>(self, mut map: M) -> Result<ThemeConfig, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut name: Option<String> = None;
                let mut colors: Option<ThemeColorOverrides> = None;

                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "name" => {
                            name = Some(map.next_value()?);
                        }
                        "colors" => {
                            colors = Some(map.next_value()?);
                        }
                        _ => {
                            // Ignore unknown fields
                            let _: serde::de::IgnoredAny = map.next_value()?;
                        }
                    }
                }

                Ok(ThemeConfig {
                    name: name.unwrap_or_else(default_theme_name),
                    colors: colors.unwrap_or_default(),
                })
            }
        }

        deserializer.deserialize_any(ThemeConfigVisitor)
    }
}

fn default_theme_name() -> String {
    "midnight".to_string()
}

/// Optional color overrides for theme customization
/// Each color is a hex string (e.g., "#ff0000" or "ff0000")
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemeColorOverrides {
    /// Primary background
    pub bg0: Option<String>,
    /// Secondary background (cards, bars)
    pub bg1: Option<String>,
    /// Tertiary background (emphasized card)
    pub bg2: Option<String>,
    /// Primary foreground
    pub fg0: Option<String>,
    /// Secondary foreground (subtitles, dimmed text)
    pub fg1: Option<String>,
    /// Accent color (active destination, emphasized border)
    pub accent: Option<String>,
    /// Selection background
    pub selection: Option<String>,
    /// Star rating color
    pub rating: Option<String>,
    /// Error color
    pub error: Option<String>,
    /// Success color
    pub success: Option<String>,
    /// Warning color
    pub warning: Option<String>,
    /// Info color
    pub info: Option<String>,
}

/// Keymap configuration using Vim-style notation
/// Format: "j", "k", "<C-j>" (Ctrl+j), "<S-g>" (Shift+g), "<CR>" (Enter), "<Esc>", "<Tab>", "<Space>"
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeymapConfig {
    /// Quit the application
    #[serde(default = "default_key_quit")]
    pub quit: String,

    // Focus between rows
    /// Focus the row below
    #[serde(default = "default_key_move_down")]
    pub move_down: String,
    /// Focus the row above
    #[serde(default = "default_key_move_up")]
    pub move_up: String,

    // Movement within the focused row
    /// Scroll or step right
    #[serde(default = "default_key_move_right")]
    pub move_right: String,
    /// Scroll or step left
    #[serde(default = "default_key_move_left")]
    pub move_left: String,
    /// Jump to the start of the row
    #[serde(default = "default_key_jump_to_start")]
    pub jump_to_start: String,
    /// Jump to the end of the row
    #[serde(default = "default_key_jump_to_end")]
    pub jump_to_end: String,

    // Actions
    /// Activate the focused item
    #[serde(default = "default_key_select")]
    pub select: String,
    /// Activate the next bottom-bar destination
    #[serde(default = "default_key_nav_next")]
    pub nav_next: String,
    /// Activate the previous bottom-bar destination
    #[serde(default = "default_key_nav_prev")]
    pub nav_prev: String,
    /// Toggle poster downloads on or off
    #[serde(default = "default_key_toggle_posters")]
    pub toggle_posters: String,
    /// Cycle through built-in themes
    #[serde(default = "default_key_cycle_theme")]
    pub cycle_theme: String,
    /// Show the key help overlay
    #[serde(default = "default_key_help")]
    pub help: String,
}

impl Default for KeymapConfig {
    fn default() -> Self {
        Self {
            quit: default_key_quit(),
            move_down: default_key_move_down(),
            move_up: default_key_move_up(),
            move_right: default_key_move_right(),
            move_left: default_key_move_left(),
            jump_to_start: default_key_jump_to_start(),
            jump_to_end: default_key_jump_to_end(),
            select: default_key_select(),
            nav_next: default_key_nav_next(),
            nav_prev: default_key_nav_prev(),
            toggle_posters: default_key_toggle_posters(),
            cycle_theme: default_key_cycle_theme(),
            help: default_key_help(),
        }
    }
}

// Default keymap values (Vim-style notation)
fn default_key_quit() -> String { "q".to_string() }
fn default_key_move_down() -> String { "j".to_string() }
fn default_key_move_up() -> String { "k".to_string() }
fn default_key_move_right() -> String { "l".to_string() }
fn default_key_move_left() -> String { "h".to_string() }
fn default_key_jump_to_start() -> String { "gg".to_string() }
fn default_key_jump_to_end() -> String { "G".to_string() }
fn default_key_select() -> String { "<CR>".to_string() }
fn default_key_nav_next() -> String { "]".to_string() }
fn default_key_nav_prev() -> String { "[".to_string() }
fn default_key_toggle_posters() -> String { "i".to_string() }
fn default_key_cycle_theme() -> String { "t".to_string() }
fn default_key_help() -> String { "?".to_string() }

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_tick_rate() -> u64 {
    250
}

fn default_scroll_step() -> u32 {
    28
}

fn default_card_width_percent() -> u16 {
    54
}

fn default_gap_cells() -> u16 {
    2
}

fn default_animation_duration() -> u64 {
    150
}

fn default_animation_fps() -> u16 {
    60
}

fn default_easing() -> EasingType {
    EasingType::Cubic
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(&config_path, content)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/reeldeck/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("reeldeck")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.ui.tick_rate_ms, 250);
        assert!(config.ui.posters);
        assert_eq!(config.carousel.scroll_step, 28);
        assert_eq!(config.carousel.card_width_percent, 54);
        assert_eq!(config.ui.animation.duration_ms, 150);
        assert_eq!(config.ui.animation.easing, EasingType::Cubic);
        assert_eq!(config.ui.theme.name, "midnight");
    }

    #[test]
    fn test_theme_as_string() {
        let config: AppConfig = toml::from_str(
            r#"
            [ui]
            theme = "daylight"
            "#,
        )
        .unwrap();
        assert_eq!(config.ui.theme.name, "daylight");
        assert!(config.ui.theme.colors.accent.is_none());
    }

    #[test]
    fn test_theme_as_table_with_overrides() {
        let config: AppConfig = toml::from_str(
            r##"
            [ui.theme]
            name = "midnight"
            [ui.theme.colors]
            accent = "#ff8800"
            bg0 = "101010"
            "##,
        )
        .unwrap();
        assert_eq!(config.ui.theme.name, "midnight");
        assert_eq!(config.ui.theme.colors.accent.as_deref(), Some("#ff8800"));
        assert_eq!(config.ui.theme.colors.bg0.as_deref(), Some("101010"));
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [carousel]
            scroll_step = 40
            "#,
        )
        .unwrap();
        assert_eq!(config.carousel.scroll_step, 40);
        assert_eq!(config.carousel.gap_cells, 2);
        assert_eq!(config.keymap.quit, "q");
    }

    #[test]
    fn test_easing_names() {
        let config: AppConfig = toml::from_str(
            r#"
            [ui.animation]
            easing = "ease_out"
            enabled = false
            "#,
        )
        .unwrap();
        assert_eq!(config.ui.animation.easing, EasingType::EaseOut);
        assert!(!config.ui.animation.enabled);
    }
}
