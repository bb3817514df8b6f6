use serde::{Deserialize, Serialize};

/// A featured movie shown in the carousel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub title: String,
    /// Director or studio line shown under the title
    pub subtitle: String,
    /// Display rating, kept as the source string (e.g. "4.5")
    pub rate: String,
    pub image_url: String,
}

/// A partially watched movie in the continue-watching row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayedMovie {
    pub title: String,
    /// Remaining time label (e.g. "30min")
    pub time: String,
    pub image_url: String,
}

/// Icon identity for a bottom-bar destination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavIcon {
    Explore,
    Play,
    Favorite,
    Account,
}

impl NavIcon {
    /// Single-glyph rendering of the icon
    pub fn glyph(&self) -> &'static str {
        match self {
            NavIcon::Explore => "\u{f002}",
            NavIcon::Play => "\u{f04b}",
            NavIcon::Favorite => "\u{f004}",
            NavIcon::Account => "\u{f007}",
        }
    }

    /// ASCII fallback for terminals without patched fonts
    pub fn ascii(&self) -> &'static str {
        match self {
            NavIcon::Explore => "*",
            NavIcon::Play => ">",
            NavIcon::Favorite => "+",
            NavIcon::Account => "@",
        }
    }
}

/// A destination in the bottom navigation bar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavEntry {
    pub title: String,
    pub icon: NavIcon,
}

impl NavEntry {
    pub fn new(title: impl Into<String>, icon: NavIcon) -> Self {
        Self {
            title: title.into(),
            icon,
        }
    }
}

impl Movie {
    /// Rating clamped into the five-star scale for display
    pub fn rating_value(&self) -> f32 {
        self.rate.parse::<f32>().unwrap_or(0.0).clamp(0.0, 5.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_parses_source_string() {
        let movie = Movie {
            title: "Moon Knight".into(),
            subtitle: "Marvel Studio".into(),
            rate: "4.5".into(),
            image_url: String::new(),
        };
        assert!((movie.rating_value() - 4.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_rating_handles_garbage() {
        let movie = Movie {
            title: "x".into(),
            subtitle: "y".into(),
            rate: "not a number".into(),
            image_url: String::new(),
        };
        assert_eq!(movie.rating_value(), 0.0);
    }

    #[test]
    fn test_nav_icon_serde_names() {
        let json = serde_json::to_string(&NavIcon::Favorite).unwrap();
        assert_eq!(json, "\"favorite\"");
        let icon: NavIcon = serde_json::from_str("\"explore\"").unwrap();
        assert_eq!(icon, NavIcon::Explore);
    }
}
