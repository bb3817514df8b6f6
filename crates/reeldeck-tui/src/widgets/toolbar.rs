use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::App;

const ICON_BOX_WIDTH: u16 = 5;
const ICON_BOX_HEIGHT: u16 = 3;

/// Top strip: menu and search buttons plus the headline
pub struct ToolbarWidget;

impl ToolbarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;

        let (menu_glyph, search_glyph) = if app.config.ui.nerd_font {
            ("\u{f0c9}", "\u{f002}")
        } else {
            ("=", "/")
        };

        // Menu button pinned left, search pinned right
        if area.height >= ICON_BOX_HEIGHT && area.width >= 2 * ICON_BOX_WIDTH + 4 {
            let menu_area = Rect::new(area.x + 2, area.y, ICON_BOX_WIDTH, ICON_BOX_HEIGHT);
            let search_area = Rect::new(
                area.x + area.width - ICON_BOX_WIDTH - 2,
                area.y,
                ICON_BOX_WIDTH,
                ICON_BOX_HEIGHT,
            );
            Self::render_icon_button(frame, menu_area, menu_glyph, app);
            Self::render_icon_button(frame, search_area, search_glyph, app);
        }

        // Headline below the buttons
        if area.height >= ICON_BOX_HEIGHT + 2 {
            let headline_area = Rect::new(
                area.x + 4,
                area.y + ICON_BOX_HEIGHT,
                area.width.saturating_sub(8),
                2,
            );
            let headline = Paragraph::new(vec![
                Line::styled(
                    "Explore new",
                    Style::default()
                        .fg(theme.fg0)
                        .add_modifier(Modifier::BOLD),
                ),
                Line::styled(
                    "release movies...",
                    Style::default()
                        .fg(theme.fg0)
                        .add_modifier(Modifier::BOLD),
                ),
            ]);
            frame.render_widget(headline, headline_area);
        }
    }

    fn render_icon_button(frame: &mut Frame, area: Rect, glyph: &str, app: &App) {
        let theme = &app.theme;
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.grey0));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let icon = Paragraph::new(Line::styled(glyph, Style::default().fg(theme.fg0)))
            .centered();
        frame.render_widget(icon, inner);
    }
}
