use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, Focus, Mode};

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;

        let mode_str = match app.mode {
            Mode::Normal => "NORMAL",
            Mode::Help => "HELP",
        };

        let focus_str = match app.focus {
            Focus::Featured => "Featured",
            Focus::Watching => "Watching",
            Focus::NavBar => "Nav",
        };

        let status_text = if let Some(msg) = &app.status_message {
            format!(" {}", msg)
        } else {
            format!(
                " {} | {} | Movies: {} | Watching: {}",
                mode_str,
                focus_str,
                app.catalog.movies.len(),
                app.catalog.played_movies.len()
            )
        };

        let help_hint = " q:quit Tab:focus h/l:scroll ?:help ";
        let padding_len = area
            .width
            .saturating_sub(status_text.len() as u16 + help_hint.len() as u16)
            as usize;

        let line = Line::from(vec![
            Span::styled(
                status_text,
                Style::default().fg(theme.fg0).bg(theme.bg2),
            ),
            Span::styled(" ".repeat(padding_len), Style::default().bg(theme.bg2)),
            Span::styled(
                help_hint,
                Style::default().fg(theme.fg1).bg(theme.bg2),
            ),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use ratatui::{backend::TestBackend, Terminal};
    use reeldeck_core::{AppConfig, Catalog};

    fn draw(app: &App, width: u16) -> String {
        let backend = TestBackend::new(width, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                StatusBarWidget::render(frame, frame.area(), app);
            })
            .unwrap();
        format!("{:?}", terminal.backend().buffer())
    }

    #[test]
    fn test_shows_mode_and_counts() {
        let app = App::new(Arc::new(AppConfig::default()), Catalog::sample());
        let text = draw(&app, 80);
        assert!(text.contains("NORMAL"));
        assert!(text.contains("Featured"));
        assert!(text.contains("Movies: 4"));
        assert!(text.contains("Watching: 2"));
    }

    #[test]
    fn test_status_message_takes_over() {
        let mut app = App::new(Arc::new(AppConfig::default()), Catalog::sample());
        app.set_status("Playing Umma");
        let text = draw(&app, 80);
        assert!(text.contains("Playing Umma"));
        assert!(!text.contains("NORMAL"));
    }
}
