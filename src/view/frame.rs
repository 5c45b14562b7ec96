//! Frame abstraction for drawing primitives
//!
//! Provides a simple, safe API for pixel buffer operations instead of
//! direct buffer indexing scattered throughout rendering code.

use crate::model::Rect;

/// Blend a foreground color onto a background color using alpha compositing.
///
/// Both colors are in ARGB format (0xAARRGGBB). The alpha value from the
/// foreground color determines the blend ratio.
///
/// Returns the blended color with full opacity (alpha = 0xFF).
#[inline]
pub fn blend_colors(bg: u32, fg: u32, alpha: f32) -> u32 {
    let bg_r = ((bg >> 16) & 0xFF) as f32;
    let bg_g = ((bg >> 8) & 0xFF) as f32;
    let bg_b = (bg & 0xFF) as f32;

    let fg_r = ((fg >> 16) & 0xFF) as f32;
    let fg_g = ((fg >> 8) & 0xFF) as f32;
    let fg_b = (fg & 0xFF) as f32;

    let final_r = (bg_r * (1.0 - alpha) + fg_r * alpha) as u32;
    let final_g = (bg_g * (1.0 - alpha) + fg_g * alpha) as u32;
    let final_b = (bg_b * (1.0 - alpha) + fg_b * alpha) as u32;

    0xFF000000 | (final_r << 16) | (final_g << 8) | final_b
}

/// Clipping rectangle in pixel coordinates (inclusive start, exclusive end).
#[derive(Clone, Copy, Debug)]
struct ClipRect {
    x0: usize,
    y0: usize,
    x1: usize,
    y1: usize,
}

/// A frame buffer wrapper providing safe drawing primitives.
///
/// All coordinates are in pixels. Out-of-bounds operations are safely
/// clipped, including rects with negative origin or extent.
pub struct Frame<'a> {
    buffer: &'a mut [u32],
    width: usize,
    height: usize,
    clip: Option<ClipRect>,
}

impl<'a> Frame<'a> {
    /// Create a new frame from a mutable pixel buffer
    ///
    /// If the buffer is smaller than width*height, dimensions are adjusted
    /// to match the actual buffer size to prevent out-of-bounds access.
    pub fn new(buffer: &'a mut [u32], width: usize, height: usize) -> Self {
        let expected_size = width * height;
        let actual_size = buffer.len();

        let (width, height) = if actual_size < expected_size && width > 0 {
            (width, actual_size / width)
        } else {
            (width, height)
        };

        Self {
            buffer,
            width,
            height,
            clip: None,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Read one pixel, `None` outside the frame
    pub fn pixel(&self, x: usize, y: usize) -> Option<u32> {
        (x < self.width && y < self.height).then(|| self.buffer[y * self.width + x])
    }

    /// Constrain subsequent drawing to `rect`
    pub fn set_clip(&mut self, rect: Rect) {
        let (x0, y0, x1, y1) = self.to_pixels(rect);
        self.clip = Some(ClipRect { x0, y0, x1, y1 });
    }

    /// Remove the clipping rectangle, restoring full-frame drawing.
    pub fn clear_clip(&mut self) {
        self.clip = None;
    }

    /// Clamp a rect to the frame (and the clip, if set) as pixel spans
    fn span(&self, rect: Rect) -> (usize, usize, usize, usize) {
        let (mut x0, mut y0, mut x1, mut y1) = self.to_pixels(rect);
        if let Some(clip) = self.clip {
            x0 = x0.max(clip.x0);
            y0 = y0.max(clip.y0);
            x1 = x1.min(clip.x1);
            y1 = y1.min(clip.y1);
        }
        (x0, y0, x1.max(x0), y1.max(y0))
    }

    fn to_pixels(&self, rect: Rect) -> (usize, usize, usize, usize) {
        let clamp = |v: i64, max: usize| v.clamp(0, max as i64) as usize;
        let left = rect.x as i64;
        let top = rect.y as i64;
        let right = left + rect.width.max(0) as i64;
        let bottom = top + rect.height.max(0) as i64;
        (
            clamp(left, self.width),
            clamp(top, self.height),
            clamp(right, self.width),
            clamp(bottom, self.height),
        )
    }

    /// Clear the buffer (or the clip rect, if set) with a solid color
    pub fn clear(&mut self, color: u32) {
        match self.clip {
            None => self.buffer.fill(color),
            Some(clip) => self.fill_rect(
                Rect::new(
                    clip.x0 as i32,
                    clip.y0 as i32,
                    (clip.x1 - clip.x0) as i32,
                    (clip.y1 - clip.y0) as i32,
                ),
                color,
            ),
        }
    }

    /// Fill a rectangle with a solid color (no alpha blending)
    pub fn fill_rect(&mut self, rect: Rect, color: u32) {
        let (x0, y0, x1, y1) = self.span(rect);
        for y in y0..y1 {
            let row_start = y * self.width;
            self.buffer[row_start + x0..row_start + x1].fill(color);
        }
    }

    /// Fill a rectangle with alpha blending (ARGB format)
    pub fn blend_rect(&mut self, rect: Rect, color: u32) {
        let alpha = ((color >> 24) & 0xFF) as f32 / 255.0;
        if alpha <= 0.0 {
            return;
        }
        if alpha >= 1.0 {
            return self.fill_rect(rect, color);
        }

        let (x0, y0, x1, y1) = self.span(rect);
        for y in y0..y1 {
            let row_start = y * self.width;
            for pixel in &mut self.buffer[row_start + x0..row_start + x1] {
                *pixel = blend_colors(*pixel, color, alpha);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_rect_clips_to_frame() {
        let mut buffer = vec![0u32; 16];
        let mut frame = Frame::new(&mut buffer, 4, 4);
        frame.fill_rect(Rect::new(-2, 2, 10, 10), 0xFFFF0000);
        assert_eq!(frame.pixel(0, 1), Some(0));
        assert_eq!(frame.pixel(0, 2), Some(0xFFFF0000));
        assert_eq!(frame.pixel(3, 3), Some(0xFFFF0000));
    }

    #[test]
    fn test_negative_extent_draws_nothing() {
        let mut buffer = vec![0u32; 16];
        let mut frame = Frame::new(&mut buffer, 4, 4);
        frame.fill_rect(Rect::new(2, 2, -5, 1), 0xFFFFFFFF);
        assert!(buffer.iter().all(|&p| p == 0));
    }

    #[test]
    fn test_clip_limits_clear() {
        let mut buffer = vec![0u32; 16];
        let mut frame = Frame::new(&mut buffer, 4, 4);
        frame.set_clip(Rect::new(1, 1, 2, 2));
        frame.clear(7);
        frame.clear_clip();
        assert_eq!(frame.pixel(0, 0), Some(0));
        assert_eq!(frame.pixel(1, 1), Some(7));
        assert_eq!(frame.pixel(2, 2), Some(7));
        assert_eq!(frame.pixel(3, 3), Some(0));
    }

    #[test]
    fn test_blend_half_alpha() {
        let mut buffer = vec![0xFF000000u32; 1];
        let mut frame = Frame::new(&mut buffer, 1, 1);
        frame.blend_rect(Rect::new(0, 0, 1, 1), 0x80FFFFFF);
        let pixel = frame.pixel(0, 0).unwrap();
        let red = (pixel >> 16) & 0xFF;
        assert!((127..=129).contains(&red), "red = {}", red);
    }

    #[test]
    fn test_transparent_blend_is_noop() {
        let mut buffer = vec![5u32; 4];
        let mut frame = Frame::new(&mut buffer, 2, 2);
        frame.blend_rect(Rect::new(0, 0, 2, 2), 0x00FFFFFF);
        assert!(buffer.iter().all(|&p| p == 5));
    }
}
