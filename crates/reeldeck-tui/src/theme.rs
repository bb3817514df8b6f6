use ratatui::style::Color;

/// Runtime theme with configurable colors
#[derive(Debug, Clone)]
pub struct Theme {
    // Background colors
    pub bg0: Color,
    pub bg1: Color,
    pub bg2: Color,

    // Foreground colors
    pub fg0: Color,
    pub fg1: Color,
    pub grey0: Color,

    // Semantic colors
    pub selection: Color,
    pub accent: Color,
    pub rating: Color,
    pub error: Color,
    pub success: Color,
    pub warning: Color,
    pub info: Color,
}

impl Default for Theme {
    fn default() -> Self {
        // Default to Midnight
        Self {
            bg0: Color::Rgb(0x12, 0x17, 0x21),
            bg1: Color::Rgb(0x1e, 0x25, 0x30),
            bg2: Color::Rgb(0x2a, 0x33, 0x42),
            fg0: Color::Rgb(0xec, 0xef, 0xf4),
            fg1: Color::Rgb(0x9a, 0xa5, 0xb5),
            grey0: Color::Rgb(0x4c, 0x56, 0x6a),
            selection: Color::Rgb(0x2a, 0x33, 0x42),
            accent: Color::Rgb(0x5e, 0x81, 0xf4),
            rating: Color::Rgb(0xf2, 0xc1, 0x4e),
            error: Color::Rgb(0xe0, 0x6c, 0x75),
            success: Color::Rgb(0x98, 0xc3, 0x79),
            warning: Color::Rgb(0xe5, 0xa5, 0x6b),
            info: Color::Rgb(0x61, 0xaf, 0xef),
        }
    }
}
