use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use reeldeck_core::carousel::{EMPHASIZED_SCALE, UNITS_PER_CELL};

use crate::app::App;
use crate::poster::{render_halfblocks_cover, render_halfblocks_fit};

/// The featured-movies carousel strip.
///
/// Cards are laid out on a fixed stride and scaled around their slot
/// center by the per-card animators, so the emphasized card grows over
/// its neighbours the way the source material does. Cards are painted
/// onto an off-screen canvas and blitted with clipping because the strip
/// scrolls at cell granularity and cards enter and leave half-shown.
pub struct FeaturedWidget;

impl FeaturedWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &mut App) {
        if area.width < 10 || area.height < 4 {
            return;
        }

        // Geometry feeds the emphasis math; the area is kept for wheel
        // hit-testing.
        app.update_carousel_geometry(area.width);
        app.carousel_area = area;
        app.retarget_card_scales();

        let card_w = app.card_width_cells(area.width);
        let stride_cells = card_w + app.config.carousel.gap_cells;
        // The emphasized card fills the strip height; everything else
        // scales down from there.
        let card_h = (area.height as f32 / EMPHASIZED_SCALE).floor() as u16;
        let scroll_cells = (app.carousel.scroll_offset() / UNITS_PER_CELL) as i32;

        // Draw the emphasized card last so it overlaps its neighbours.
        let emphasis = app.carousel.emphasis();
        let item_count = app.carousel.item_count();
        let mut order: Vec<usize> = (0..app.catalog.movies.len()).collect();
        order.sort_by_key(|&i| emphasis.applies_to(i, item_count));

        let buf = frame.buffer_mut();
        for i in order {
            let scale = app.card_scales[i].current().min(EMPHASIZED_SCALE);
            let w = ((card_w as f32 * scale).round() as u16).max(1);
            let h = ((card_h as f32 * scale).round() as u16).max(1);

            let slot_x = area.x as i32 + i as i32 * stride_cells as i32 - scroll_cells;
            let x = slot_x + (card_w as i32 - w as i32) / 2;
            let y = area.y as i32 + (area.height.saturating_sub(h) / 2) as i32;

            if x + w as i32 <= area.x as i32 || x >= (area.x + area.width) as i32 {
                continue;
            }

            let canvas = Self::build_card(app, i, w, h);
            canvas.blit(buf, x, y, area);
        }
    }

    /// Paint one movie card at its current animated size.
    fn build_card(app: &App, index: usize, w: u16, h: u16) -> CardCanvas {
        let theme = &app.theme;
        let movie = &app.catalog.movies[index];
        let mut canvas = CardCanvas::new(w, h, Style::default().fg(theme.fg1).bg(theme.bg1));

        if app.posters_enabled {
            if let Some(img) = app.poster_cache.get(&movie.image_url) {
                canvas.paint_lines(0, 0, &render_halfblocks_cover(img, w, h));
            }
        }

        if h < 6 || w < 12 {
            return canvas;
        }

        // Bottom overlay: title, subtitle and cast row on the left,
        // rating and play button on the right.
        let overlay_top = h - 5;
        let text_w = w.saturating_sub(10) as usize;
        canvas.draw_text(
            2,
            overlay_top,
            &truncate_str(&movie.title, text_w),
            Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD),
        );
        canvas.draw_text(
            2,
            overlay_top + 1,
            &truncate_str(&movie.subtitle, text_w),
            Style::default().fg(theme.fg1),
        );

        let mut casts_x = 2;
        for avatar in &app.catalog.cast_avatars {
            if app.posters_enabled {
                if let Some(img) = app.poster_cache.get(avatar) {
                    canvas.paint_lines(casts_x, h - 2, &render_halfblocks_fit(img, 2, 1));
                    casts_x += 2;
                    continue;
                }
            }
            canvas.draw_text(casts_x, h - 2, "●", Style::default().fg(theme.fg1));
            casts_x += 2;
        }
        let extra = app.extra_casts.get(index).copied().unwrap_or(0);
        canvas.draw_text(
            casts_x + 1,
            h - 2,
            &format!("+{extra} Casts"),
            Style::default().fg(theme.fg1),
        );

        let rate = format!("★ {}", movie.rate);
        let rate_x = w.saturating_sub(rate.chars().count() as u16 + 2);
        canvas.draw_text(rate_x, overlay_top, &rate, Style::default().fg(theme.rating));

        let play = if app.config.ui.nerd_font {
            "\u{f04b}"
        } else {
            ">"
        };
        canvas.draw_text(
            w.saturating_sub(5),
            overlay_top + 2,
            &format!(" {play} "),
            Style::default().fg(theme.bg0).bg(theme.accent),
        );

        canvas
    }
}

/// Off-screen cell grid for one card, blitted into the frame with
/// clipping against the strip area.
struct CardCanvas {
    width: u16,
    height: u16,
    cells: Vec<(char, Style)>,
}

impl CardCanvas {
    fn new(width: u16, height: u16, fill: Style) -> Self {
        Self {
            width,
            height,
            cells: vec![(' ', fill); width as usize * height as usize],
        }
    }

    fn set(&mut self, x: u16, y: u16, ch: char, style: Style) {
        if x < self.width && y < self.height {
            self.cells[y as usize * self.width as usize + x as usize] = (ch, style);
        }
    }

    fn draw_text(&mut self, x: u16, y: u16, text: &str, style: Style) {
        for (dx, ch) in text.chars().enumerate() {
            self.set(x + dx as u16, y, ch, style);
        }
    }

    fn paint_lines(&mut self, x: u16, y: u16, lines: &[Line]) {
        for (dy, line) in lines.iter().enumerate() {
            let mut dx = 0u16;
            for span in &line.spans {
                for ch in span.content.chars() {
                    self.set(x + dx, y + dy as u16, ch, span.style);
                    dx += 1;
                }
            }
        }
    }

    fn blit(&self, buf: &mut Buffer, origin_x: i32, origin_y: i32, clip: Rect) {
        for y in 0..self.height {
            let sy = origin_y + y as i32;
            if sy < clip.y as i32 || sy >= clip.bottom() as i32 {
                continue;
            }
            for x in 0..self.width {
                let sx = origin_x + x as i32;
                if sx < clip.x as i32 || sx >= clip.right() as i32 {
                    continue;
                }
                let (ch, style) = self.cells[y as usize * self.width as usize + x as usize];
                if let Some(cell) = buf.cell_mut((sx as u16, sy as u16)) {
                    cell.set_char(ch);
                    cell.set_style(style);
                }
            }
        }
    }
}

/// Truncate a string to a display width with ellipsis
fn truncate_str(s: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(s) <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return s.chars().take(max_width).collect();
    }

    let budget = max_width - 3;
    let mut truncated = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let ch_width = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(1);
        if used + ch_width > budget {
            break;
        }
        truncated.push(ch);
        used += ch_width;
    }
    format!("{}...", truncated)
}
