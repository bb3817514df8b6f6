//! Midnight theme, the dark default

use crate::theme::Theme;
use ratatui::style::Color;

pub fn default() -> Theme {
    Theme {
        bg0: Color::Rgb(0x12, 0x17, 0x21), // Screen background
        bg1: Color::Rgb(0x1e, 0x25, 0x30), // Cards, toolbar, nav bar
        bg2: Color::Rgb(0x2a, 0x33, 0x42), // Emphasized card surface
        fg0: Color::Rgb(0xec, 0xef, 0xf4), // Titles
        fg1: Color::Rgb(0x9a, 0xa5, 0xb5), // Subtitles (60% white feel)
        grey0: Color::Rgb(0x4c, 0x56, 0x6a), // Borders, collapsed icons
        selection: Color::Rgb(0x2a, 0x33, 0x42),
        accent: Color::Rgb(0x5e, 0x81, 0xf4),
        rating: Color::Rgb(0xf2, 0xc1, 0x4e),
        error: Color::Rgb(0xe0, 0x6c, 0x75),
        success: Color::Rgb(0x98, 0xc3, 0x79),
        warning: Color::Rgb(0xe5, 0xa5, 0x6b),
        info: Color::Rgb(0x61, 0xaf, 0xef),
    }
}
