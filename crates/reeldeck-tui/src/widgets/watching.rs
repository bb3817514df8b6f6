use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use reeldeck_core::catalog::PlayedMovie;

use crate::app::{App, Focus};
use crate::poster::render_halfblocks_cover;

const CARD_WIDTH: u16 = 32;
const THUMB_WIDTH: u16 = 8;

/// "Continue Watching" header plus a row of partially-watched movies
pub struct WatchingWidget;

impl WatchingWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        if area.height < 2 || area.width < 8 {
            return;
        }
        let theme = &app.theme;
        let is_focused = app.focus == Focus::Watching;

        let header = Paragraph::new(Line::styled(
            "Continue Watching",
            Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(
            header,
            Rect::new(area.x + 4, area.y, area.width.saturating_sub(4), 1),
        );

        let cards_y = area.y + 1;
        let cards_h = area.height - 1;
        let card_w = CARD_WIDTH.min(area.width.saturating_sub(4));
        if cards_h < 4 || card_w < 16 {
            return;
        }

        // Keep the selected card on screen when the row overflows.
        let visible = (area.width.saturating_sub(2) / (card_w + 2)).max(1) as usize;
        let start = app
            .watching_selected
            .saturating_sub(visible.saturating_sub(1));

        let mut x = area.x + 2;
        for (index, played) in app
            .catalog
            .played_movies
            .iter()
            .enumerate()
            .skip(start)
            .take(visible)
        {
            if x + card_w > area.x + area.width {
                break;
            }
            let selected = is_focused && index == app.watching_selected;
            let card_area = Rect::new(x, cards_y, card_w, cards_h);
            Self::render_card(frame, card_area, app, played, selected);
            x += card_w + 2;
        }
    }

    fn render_card(frame: &mut Frame, area: Rect, app: &App, movie: &PlayedMovie, selected: bool) {
        let theme = &app.theme;

        let border_style = if selected {
            Style::default().fg(theme.accent)
        } else {
            Style::default().fg(theme.grey0)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .style(Style::default().bg(theme.bg1));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if inner.width < THUMB_WIDTH + 10 || inner.height == 0 {
            return;
        }

        let thumb_area = Rect::new(inner.x + 1, inner.y, THUMB_WIDTH, inner.height);
        let mut thumb_drawn = false;
        if app.posters_enabled {
            if let Some(img) = app.poster_cache.get(&movie.image_url) {
                let lines = render_halfblocks_cover(img, THUMB_WIDTH, inner.height);
                frame.render_widget(Paragraph::new(lines), thumb_area);
                thumb_drawn = true;
            }
        }
        if !thumb_drawn {
            frame.render_widget(
                Block::default().style(Style::default().bg(theme.bg2)),
                thumb_area,
            );
        }

        let text_area = Rect::new(
            inner.x + THUMB_WIDTH + 2,
            inner.y + inner.height.saturating_sub(2) / 2,
            inner.width.saturating_sub(THUMB_WIDTH + 2 + 4),
            2,
        );
        let text = Paragraph::new(vec![
            Line::styled(
                movie.title.clone(),
                Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD),
            ),
            Line::styled(movie.time.clone(), Style::default().fg(theme.fg1)),
        ]);
        frame.render_widget(text, text_area);

        let play = if app.config.ui.nerd_font {
            "\u{f04b}"
        } else {
            ">"
        };
        let play_area = Rect::new(
            inner.x + inner.width.saturating_sub(4),
            inner.y + inner.height / 2,
            3,
            1,
        );
        frame.render_widget(
            Paragraph::new(Line::styled(
                format!(" {play} "),
                Style::default().fg(theme.bg0).bg(theme.accent),
            )),
            play_area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use ratatui::{backend::TestBackend, Terminal};
    use reeldeck_core::{AppConfig, Catalog};

    fn draw(app: &App, width: u16, height: u16) -> ratatui::buffer::Buffer {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                WatchingWidget::render(frame, frame.area(), app);
            })
            .unwrap();
        terminal.backend().buffer().clone()
    }

    #[test]
    fn test_renders_header_and_cards() {
        let app = App::new(Arc::new(AppConfig::default()), Catalog::sample());
        let buf = draw(&app, 80, 8);
        let text = format!("{:?}", buf);
        assert!(text.contains("Continue Watching"));
        assert!(text.contains("Morbius"));
        assert!(text.contains("30min"));
        assert!(text.contains("Shang Chi"));
    }

    #[test]
    fn test_narrow_row_keeps_selection_visible() {
        let mut app = App::new(Arc::new(AppConfig::default()), Catalog::sample());
        app.watching_selected = 1;
        // One card fits, so the row scrolls to the selected entry.
        let buf = draw(&app, 40, 8);
        let text = format!("{:?}", buf);
        assert!(text.contains("Shang Chi"));
        assert!(!text.contains("Morbius"));
    }

    #[test]
    fn test_render_is_pure() {
        let app = App::new(Arc::new(AppConfig::default()), Catalog::sample());
        assert_eq!(draw(&app, 80, 8), draw(&app, 80, 8));
    }

    #[test]
    fn test_tiny_area_does_not_panic() {
        let app = App::new(Arc::new(AppConfig::default()), Catalog::sample());
        draw(&app, 6, 1);
        draw(&app, 20, 3);
    }
}
