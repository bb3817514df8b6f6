use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::{App, Focus};

/// Bottom navigation bar. The selected destination is expanded to its
/// label plus an underline indicator; every other destination collapses
/// to its icon glyph. Entry areas are recorded for mouse hit-testing.
pub struct NavBarWidget;

impl NavBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &mut App) {
        app.nav_hitboxes.clear();
        if area.width < 12 || area.height < 4 {
            return;
        }
        let theme = &app.theme;
        let is_focused = app.focus == Focus::NavBar;

        let bar_area = Rect::new(area.x + 2, area.y, area.width - 4, area.height);
        let border_style = if is_focused {
            Style::default().fg(theme.accent)
        } else {
            Style::default().fg(theme.grey0)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .style(Style::default().bg(theme.bg1));
        let inner = block.inner(bar_area);
        frame.render_widget(block, bar_area);

        let count = app.catalog.nav_entries.len();
        if count == 0 || inner.width as usize / count == 0 {
            return;
        }
        let chunk_w = inner.width / count as u16;

        let mut hitboxes = Vec::with_capacity(count);
        for (i, entry) in app.catalog.nav_entries.iter().enumerate() {
            let chunk = Rect::new(inner.x + i as u16 * chunk_w, inner.y, chunk_w, inner.height);

            let lines = if app.nav.is_selected(i) {
                vec![
                    Line::styled(
                        entry.title.clone(),
                        Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD),
                    ),
                    Line::styled("━━━━", Style::default().fg(theme.accent)),
                ]
            } else {
                let glyph = if app.config.ui.nerd_font {
                    entry.icon.glyph()
                } else {
                    entry.icon.ascii()
                };
                vec![Line::styled(glyph, Style::default().fg(theme.fg1))]
            };
            frame.render_widget(Paragraph::new(lines).centered(), chunk);

            // Hit targets cover the full bar height for easier clicking.
            hitboxes.push((
                Rect::new(chunk.x, bar_area.y, chunk.width, bar_area.height),
                i,
            ));
        }
        app.nav_hitboxes = hitboxes;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use ratatui::{backend::TestBackend, Terminal};
    use reeldeck_core::{AppConfig, Catalog};

    fn draw(app: &mut App, width: u16, height: u16) -> ratatui::buffer::Buffer {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                NavBarWidget::render(frame, frame.area(), app);
            })
            .unwrap();
        terminal.backend().buffer().clone()
    }

    #[test]
    fn test_exactly_one_entry_expanded() {
        let mut app = App::new(Arc::new(AppConfig::default()), Catalog::sample());
        let buf = draw(&mut app, 60, 4);
        let text = format!("{:?}", buf);

        assert!(text.contains("Explore"));
        assert!(!text.contains("Play"));
        assert!(!text.contains("Favorite"));
        assert!(!text.contains("Account"));
        assert_eq!(text.matches("━━━━").count(), 1);
    }

    #[test]
    fn test_selection_moves_expansion() {
        let mut app = App::new(Arc::new(AppConfig::default()), Catalog::sample());
        app.nav.select(2);
        let buf = draw(&mut app, 60, 4);
        let text = format!("{:?}", buf);

        assert!(text.contains("Favorite"));
        assert!(!text.contains("Explore"));
        assert_eq!(text.matches("━━━━").count(), 1);
    }

    #[test]
    fn test_records_one_hitbox_per_entry() {
        let mut app = App::new(Arc::new(AppConfig::default()), Catalog::sample());
        draw(&mut app, 60, 4);
        assert_eq!(app.nav_hitboxes.len(), 4);

        // A click inside the second chunk resolves to entry 1.
        let (rect, index) = app.nav_hitboxes[1];
        assert_eq!(index, 1);
        assert_eq!(app.hit_test_nav(rect.x + 1, rect.y + 1), Some(1));
    }

    #[test]
    fn test_tiny_area_clears_hitboxes() {
        let mut app = App::new(Arc::new(AppConfig::default()), Catalog::sample());
        draw(&mut app, 60, 4);
        assert!(!app.nav_hitboxes.is_empty());
        draw(&mut app, 8, 2);
        assert!(app.nav_hitboxes.is_empty());
    }

    #[test]
    fn test_render_is_pure() {
        let mut app = App::new(Arc::new(AppConfig::default()), Catalog::sample());
        assert_eq!(draw(&mut app, 60, 4), draw(&mut app, 60, 4));
    }
}
