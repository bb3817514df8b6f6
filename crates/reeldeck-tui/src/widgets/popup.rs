use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::App;

pub struct PopupWidget;

impl PopupWidget {
    /// Render the help overlay listing the active key bindings
    pub fn render_help(frame: &mut Frame, app: &App) {
        let theme = &app.theme;
        let area = frame.area();

        let popup_width = 46u16.min(area.width.saturating_sub(4));
        let popup_height = 17u16.min(area.height.saturating_sub(2));
        let popup_area = centered_rect(popup_width, popup_height, area);

        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(" Help ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.accent))
            .style(Style::default().bg(theme.bg1));
        let inner = block.inner(popup_area);
        frame.render_widget(block, popup_area);

        let keys = &app.config.keymap;
        let rows = [
            (keys.quit.clone(), "quit"),
            ("Tab".to_string(), "cycle focus"),
            (
                format!("{}/{}", keys.move_down, keys.move_up),
                "focus strip below/above",
            ),
            (
                format!("{}/{}", keys.move_left, keys.move_right),
                "scroll within the strip",
            ),
            (
                format!("{}/{}", keys.jump_to_start, keys.jump_to_end),
                "jump to start/end",
            ),
            (keys.select.clone(), "play / open selection"),
            ("1-4".to_string(), "switch destination"),
            (
                format!("{}/{}", keys.nav_prev, keys.nav_next),
                "previous/next destination",
            ),
            (keys.toggle_posters.clone(), "toggle posters"),
            (keys.cycle_theme.clone(), "switch theme"),
            ("Esc".to_string(), "dismiss"),
        ];

        let mut lines: Vec<Line> = rows
            .iter()
            .map(|(key, desc)| {
                Line::from(vec![
                    Span::styled(
                        format!("  {:<8}", key),
                        Style::default()
                            .fg(theme.accent)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(desc.to_string(), Style::default().fg(theme.fg0)),
                ])
            })
            .collect();
        lines.push(Line::raw(""));
        lines.push(
            Line::styled("press any key to close", Style::default().fg(theme.fg1))
                .alignment(Alignment::Center),
        );

        frame.render_widget(Paragraph::new(lines), inner);
    }
}

/// Helper function to create a centered rect
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}
