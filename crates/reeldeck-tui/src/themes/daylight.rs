//! Daylight theme, the light counterpart

use crate::theme::Theme;
use ratatui::style::Color;

pub fn default() -> Theme {
    Theme {
        bg0: Color::Rgb(0xf4, 0xf5, 0xf7),
        bg1: Color::Rgb(0xff, 0xff, 0xff),
        bg2: Color::Rgb(0xe8, 0xeb, 0xf2),
        fg0: Color::Rgb(0x1c, 0x24, 0x33),
        fg1: Color::Rgb(0x6b, 0x76, 0x87),
        grey0: Color::Rgb(0xc0, 0xc7, 0xd4),
        selection: Color::Rgb(0xdd, 0xe3, 0xee),
        accent: Color::Rgb(0x3d, 0x5a, 0xf1),
        rating: Color::Rgb(0xe0, 0xa8, 0x0d), // Darker yellow for light backgrounds
        error: Color::Rgb(0xd4, 0x49, 0x4e),
        success: Color::Rgb(0x3f, 0x9d, 0x58),
        warning: Color::Rgb(0xc7, 0x7d, 0x2e),
        info: Color::Rgb(0x2f, 0x7f, 0xd1),
    }
}
