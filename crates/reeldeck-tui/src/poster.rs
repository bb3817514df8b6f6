//! Poster download, cache, and half-block rendering.
//!
//! Posters and avatars are fetched in the background (spawned by the run
//! loop), decoded off the hot path, and rendered as `▀` half blocks so a
//! card can be redrawn at any size every animation frame. The cache is
//! keyed by source URL: when a card's image source changes, the lookup
//! simply misses and the new URL is fetched, replacing what the slot
//! showed before.

use std::collections::HashMap;

use bytes::Bytes;
use image::{DynamicImage, GenericImageView};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

const MAX_POSTER_BYTES: usize = 10 * 1024 * 1024;

/// Poster loading state
pub enum PosterState {
    /// Download in flight
    Loading,
    /// Decoded and ready to render
    Loaded(DynamicImage),
    /// Download or decode failed
    Failed(String),
}

/// In-memory poster cache keyed by source URL
#[derive(Default)]
pub struct PosterCache {
    posters: HashMap<String, PosterState>,
}

impl PosterCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the poster is decoded and ready
    pub fn is_ready(&self, url: &str) -> bool {
        matches!(self.posters.get(url), Some(PosterState::Loaded(_)))
    }

    /// Check if a download is already in flight
    pub fn is_loading(&self, url: &str) -> bool {
        matches!(self.posters.get(url), Some(PosterState::Loading))
    }

    /// Whether this URL needs a download kicked off
    pub fn needs_fetch(&self, url: &str) -> bool {
        !self.posters.contains_key(url)
    }

    /// Get the decoded image for a URL
    pub fn get(&self, url: &str) -> Option<&DynamicImage> {
        match self.posters.get(url) {
            Some(PosterState::Loaded(img)) => Some(img),
            _ => None,
        }
    }

    /// Mark a download as started
    pub fn start_loading(&mut self, url: &str) {
        self.posters
            .entry(url.to_string())
            .or_insert(PosterState::Loading);
    }

    /// Store a decoded image
    pub fn set_loaded(&mut self, url: &str, image: DynamicImage) {
        self.posters
            .insert(url.to_string(), PosterState::Loaded(image));
    }

    /// Record a failure so the URL is not retried every frame
    pub fn set_failed(&mut self, url: &str, error: String) {
        self.posters
            .insert(url.to_string(), PosterState::Failed(error));
    }

    /// Drop everything (e.g. posters toggled off and back on)
    pub fn clear(&mut self) {
        self.posters.clear();
    }

    /// Status line for a URL that has no renderable image
    pub fn status(&self, url: &str) -> Option<String> {
        match self.posters.get(url) {
            Some(PosterState::Loading) => Some("loading...".to_string()),
            Some(PosterState::Failed(err)) => Some(format!("failed: {err}")),
            _ => None,
        }
    }
}

/// Download a poster and decode it off the async runtime threads
pub async fn download_poster(url: &str) -> Result<DynamicImage, String> {
    let bytes = download_bytes(url).await?;
    tokio::task::spawn_blocking(move || decode_poster_bytes(&bytes))
        .await
        .map_err(|e| format!("Decode task failed: {}", e))?
}

/// Some poster hosts reject requests without a browser user agent and a
/// same-origin referer.
async fn download_bytes(url: &str) -> Result<Bytes, String> {
    let referer = url::Url::parse(url)
        .ok()
        .map(|u| format!("{}://{}/", u.scheme(), u.host_str().unwrap_or("")))
        .unwrap_or_default();

    let client = reqwest::Client::builder()
        .user_agent("Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36")
        .timeout(std::time::Duration::from_secs(15))
        .redirect(reqwest::redirect::Policy::limited(10))
        .build()
        .map_err(|e| format!("Client error: {}", e))?;

    let response = client
        .get(url)
        .header("Accept", "image/png,image/jpeg,image/gif,image/*;q=0.8")
        .header("Referer", &referer)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.status().is_success() {
        return Err(format!("HTTP {}", response.status()));
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| format!("Read error: {}", e))?;

    if bytes.len() > MAX_POSTER_BYTES {
        return Err(format!("Poster too large ({} bytes)", bytes.len()));
    }

    Ok(bytes)
}

/// Decode image bytes with format detection
fn decode_poster_bytes(bytes: &[u8]) -> Result<DynamicImage, String> {
    if bytes.is_empty() {
        return Err("Empty data".to_string());
    }

    // Try auto-detection first
    if let Ok(img) = image::load_from_memory(bytes) {
        return Ok(img);
    }

    // Try based on magic bytes
    if bytes.len() >= 8 {
        if bytes.starts_with(b"\x89PNG\r\n\x1a\n") {
            return image::load_from_memory_with_format(bytes, image::ImageFormat::Png)
                .map_err(|e| format!("PNG: {}", e));
        }
        if bytes.starts_with(b"\xff\xd8\xff") {
            return image::load_from_memory_with_format(bytes, image::ImageFormat::Jpeg)
                .map_err(|e| format!("JPEG: {}", e));
        }
        if bytes.starts_with(b"RIFF") && bytes.len() >= 12 && &bytes[8..12] == b"WEBP" {
            return image::load_from_memory_with_format(bytes, image::ImageFormat::WebP)
                .map_err(|e| format!("WebP: {}", e));
        }
    }

    Err("Unrecognized image format".to_string())
}

/// Resize-then-crop geometry for filling a cell area completely.
///
/// Returns `(resize_w, resize_h, crop_x, crop_y)` in pixel space, where
/// the crop window is `target_w` by `target_h` pixels. `target_h` is
/// already in pixels (two per cell row), not cell rows.
fn cover_geometry(img_w: u32, img_h: u32, target_w: u32, target_h: u32) -> (u32, u32, u32, u32) {
    let scale_w = target_w as f32 / img_w as f32;
    let scale_h = target_h as f32 / img_h as f32;
    let scale = scale_w.max(scale_h);

    let resize_w = ((img_w as f32 * scale).round() as u32).max(target_w);
    let resize_h = ((img_h as f32 * scale).round() as u32).max(target_h);

    let crop_x = (resize_w - target_w) / 2;
    let crop_y = (resize_h - target_h) / 2;

    (resize_w, resize_h, crop_x, crop_y)
}

/// Render an image to fill `width` x `height` cells, cropping overflow.
///
/// Uses ▀ (upper half block) with fg=top pixel, bg=bottom pixel, so one
/// cell carries two vertical pixels. Movie cards use this: the art always
/// covers the card no matter the card's animated size.
pub fn render_halfblocks_cover<'a>(img: &DynamicImage, width: u16, height: u16) -> Vec<Line<'a>> {
    if width == 0 || height == 0 {
        return Vec::new();
    }

    let target_w = width as u32;
    let target_h = height as u32 * 2;

    let (img_w, img_h) = img.dimensions();
    let (resize_w, resize_h, crop_x, crop_y) = cover_geometry(img_w, img_h, target_w, target_h);

    // Nearest keeps per-frame resizes cheap
    let resized = img.resize_exact(resize_w, resize_h, image::imageops::FilterType::Nearest);
    let cropped = resized.crop_imm(crop_x, crop_y, target_w, target_h);
    let rgba = cropped.to_rgba8();

    let mut lines = Vec::with_capacity(height as usize);

    // Process 2 rows at a time (top pixel = fg, bottom pixel = bg)
    for y in (0..target_h).step_by(2) {
        let mut spans: Vec<Span<'a>> = Vec::with_capacity(target_w as usize);

        for x in 0..target_w {
            let top_pixel = rgba.get_pixel(x, y);
            let bottom_pixel = if y + 1 < target_h {
                rgba.get_pixel(x, y + 1)
            } else {
                top_pixel
            };

            let top_color = Color::Rgb(top_pixel[0], top_pixel[1], top_pixel[2]);
            let bottom_color = Color::Rgb(bottom_pixel[0], bottom_pixel[1], bottom_pixel[2]);

            spans.push(Span::styled(
                "▀",
                Style::default().fg(top_color).bg(bottom_color),
            ));
        }

        lines.push(Line::from(spans));
    }

    lines
}

/// Render an image inside `width` x `height` cells, preserving aspect
/// ratio and centering horizontally. Used for the small thumbnails where
/// cropping would cut faces (continue-watching row, avatars).
pub fn render_halfblocks_fit<'a>(img: &DynamicImage, width: u16, height: u16) -> Vec<Line<'a>> {
    if width == 0 || height == 0 {
        return Vec::new();
    }

    let target_w = width as u32;
    let char_height = height as u32 * 2;

    let (img_w, img_h) = img.dimensions();
    let scale_w = target_w as f32 / img_w as f32;
    let scale_h = char_height as f32 / img_h as f32;
    let scale = scale_w.min(scale_h);

    let new_width = ((img_w as f32 * scale) as u32).max(1);
    let new_height = ((img_h as f32 * scale) as u32).max(1);

    let resized = img.resize_exact(new_width, new_height, image::imageops::FilterType::Nearest);
    let rgba = resized.to_rgba8();

    // Center the image horizontally
    let x_offset = (target_w.saturating_sub(new_width)) / 2;
    let padding = " ".repeat(x_offset as usize);

    let mut lines = Vec::with_capacity((new_height / 2 + 1) as usize);

    for y in (0..new_height).step_by(2) {
        let mut spans: Vec<Span<'a>> = Vec::with_capacity(new_width as usize + 1);

        if x_offset > 0 {
            spans.push(Span::raw(padding.clone()));
        }

        for x in 0..new_width {
            let top_pixel = rgba.get_pixel(x, y);
            let bottom_pixel = if y + 1 < new_height {
                rgba.get_pixel(x, y + 1)
            } else {
                top_pixel
            };

            let top_color = Color::Rgb(top_pixel[0], top_pixel[1], top_pixel[2]);
            let bottom_color = Color::Rgb(bottom_pixel[0], bottom_pixel[1], bottom_pixel[2]);

            spans.push(Span::styled(
                "▀",
                Style::default().fg(top_color).bg(bottom_color),
            ));
        }

        lines.push(Line::from(spans));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbaImage;

    fn solid_image(w: u32, h: u32) -> DynamicImage {
        DynamicImage::ImageRgba8(RgbaImage::from_pixel(w, h, image::Rgba([10, 20, 30, 255])))
    }

    #[test]
    fn test_cover_geometry_wide_source() {
        // 400x100 into 40x40: height drives the scale, width overflows.
        let (rw, rh, cx, cy) = cover_geometry(400, 100, 40, 40);
        assert_eq!(rh, 40);
        assert_eq!(rw, 160);
        assert_eq!(cx, 60);
        assert_eq!(cy, 0);
    }

    #[test]
    fn test_cover_geometry_tall_source() {
        let (rw, rh, cx, cy) = cover_geometry(100, 400, 40, 40);
        assert_eq!(rw, 40);
        assert_eq!(rh, 160);
        assert_eq!(cx, 0);
        assert_eq!(cy, 60);
    }

    #[test]
    fn test_cover_fills_exact_cell_grid() {
        let img = solid_image(123, 457);
        let lines = render_halfblocks_cover(&img, 20, 10);
        assert_eq!(lines.len(), 10);
        // Every line carries exactly one span per column.
        for line in &lines {
            assert_eq!(line.spans.len(), 20);
        }
    }

    #[test]
    fn test_fit_preserves_aspect() {
        // A wide image in a square area leaves vertical slack, not overflow.
        let img = solid_image(200, 50);
        let lines = render_halfblocks_fit(&img, 20, 10);
        assert!(lines.len() <= 10);
        assert!(!lines.is_empty());
    }

    #[test]
    fn test_zero_area_renders_nothing() {
        let img = solid_image(10, 10);
        assert!(render_halfblocks_cover(&img, 0, 5).is_empty());
        assert!(render_halfblocks_fit(&img, 5, 0).is_empty());
    }

    #[test]
    fn test_cache_states() {
        let mut cache = PosterCache::new();
        let url = "https://example.com/poster.jpg";

        assert!(cache.needs_fetch(url));
        cache.start_loading(url);
        assert!(cache.is_loading(url));
        assert!(!cache.needs_fetch(url));
        assert_eq!(cache.status(url).as_deref(), Some("loading..."));

        cache.set_loaded(url, solid_image(2, 2));
        assert!(cache.is_ready(url));
        assert!(cache.get(url).is_some());
        assert!(cache.status(url).is_none());

        cache.set_failed(url, "boom".to_string());
        assert!(!cache.is_ready(url));
        assert!(!cache.needs_fetch(url));
    }

    #[test]
    fn test_new_source_misses_cache() {
        // A slot that changes its URL falls back to needs_fetch, which is
        // what replaces the old art.
        let mut cache = PosterCache::new();
        cache.set_loaded("https://example.com/a.jpg", solid_image(2, 2));
        assert!(cache.needs_fetch("https://example.com/b.jpg"));
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(decode_poster_bytes(&[]).is_err());
        assert!(decode_poster_bytes(b"definitely not an image").is_err());
    }
}
