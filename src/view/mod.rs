//! View module - paints the container into a pixel buffer
//!
//! [`paint`] works on any `&mut [u32]` so it can be exercised without a
//! window. [`Renderer`] owns the softbuffer surface and a persistent back
//! buffer for partial repaints.

pub mod frame;

pub use frame::{blend_colors, Frame};

use anyhow::Result;
use softbuffer::Surface;
use std::num::NonZeroU32;
use std::rc::Rc;
use winit::window::Window;

use crate::commands::Damage;
use crate::model::{AppModel, DividerId};

/// Paint regions and divider highlights for the given damage
pub fn paint(frame: &mut Frame, model: &AppModel, damage: &Damage) {
    match damage {
        Damage::None => {}
        Damage::Full => {
            frame.clear_clip();
            paint_all(frame, model);
        }
        Damage::Areas(areas) => {
            for &area in areas {
                frame.set_clip(area);
                paint_all(frame, model);
            }
            frame.clear_clip();
        }
    }
}

fn paint_all(frame: &mut Frame, model: &AppModel) {
    let theme = &model.theme;
    frame.clear(theme.background.to_argb_u32());

    for region in model.container.visible_regions() {
        frame.fill_rect(region.geometry, theme.region_color(region.id).to_argb_u32());
    }

    // Dividers paint over the regions they straddle
    for id in DividerId::ALL {
        match model.container.divider(id).highlight_fill() {
            Some((rect, color)) if !color.is_transparent() => {
                frame.blend_rect(rect, color.to_argb_u32())
            }
            _ => {}
        }
    }
}

pub struct Renderer {
    surface: Surface<Rc<Window>, Rc<Window>>,
    /// Persistent back buffer for partial rendering.
    /// Softbuffer doesn't guarantee buffer contents are preserved between frames,
    /// so we maintain our own buffer and copy to the surface on present.
    back_buffer: Vec<u32>,
    width: u32,
    height: u32,
}

fn non_zero(v: u32) -> NonZeroU32 {
    NonZeroU32::new(v).unwrap_or(NonZeroU32::MIN)
}

impl Renderer {
    pub fn new(window: Rc<Window>, context: &softbuffer::Context<Rc<Window>>) -> Result<Self> {
        let size = window.inner_size();
        let (width, height) = (size.width, size.height);

        let mut surface = Surface::new(context, Rc::clone(&window))
            .map_err(|e| anyhow::anyhow!("Failed to create surface: {}", e))?;

        // Explicitly resize the surface to match window dimensions
        surface
            .resize(non_zero(width), non_zero(height))
            .map_err(|e| anyhow::anyhow!("Failed to resize surface: {}", e))?;

        Ok(Self {
            surface,
            back_buffer: vec![0u32; (width as usize) * (height as usize)],
            width,
            height,
        })
    }

    pub fn render(&mut self, model: &AppModel, damage: &Damage) -> Result<()> {
        if !damage.needs_redraw() {
            return Ok(());
        }

        let (width, height) = model.window_size();
        let resized = self.width != width || self.height != height;
        if resized {
            self.width = width;
            self.height = height;
            self.back_buffer
                .resize((width as usize) * (height as usize), 0);
            self.surface
                .resize(non_zero(width), non_zero(height))
                .map_err(|e| anyhow::anyhow!("Failed to resize surface: {}", e))?;
        }

        // A resized back buffer holds stale rows; only a full repaint is valid
        let damage = if resized { &Damage::Full } else { damage };
        {
            let mut frame = Frame::new(&mut self.back_buffer, width as usize, height as usize);
            paint(&mut frame, model, damage);
        }

        if width == 0 || height == 0 {
            return Ok(());
        }

        let mut buffer = self
            .surface
            .buffer_mut()
            .map_err(|e| anyhow::anyhow!("Failed to get surface buffer: {}", e))?;
        buffer.copy_from_slice(&self.back_buffer);
        buffer
            .present()
            .map_err(|e| anyhow::anyhow!("Failed to present buffer: {}", e))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LayoutConfig;
    use crate::model::{DividerEvent, Rect, RegionId, Size};
    use crate::theme::Color;

    fn model(width: i32, height: i32) -> AppModel {
        let config = LayoutConfig {
            window: Size::new(width, height),
            viewer_minimum: Size::new(10, 10),
            ..LayoutConfig::default()
        };
        AppModel::new(config, None)
    }

    fn render(model: &AppModel, damage: &Damage) -> Vec<u32> {
        let (w, h) = model.window_size();
        let mut buffer = vec![0u32; (w * h) as usize];
        let mut frame = Frame::new(&mut buffer, w as usize, h as usize);
        paint(&mut frame, model, damage);
        buffer
    }

    fn at(buffer: &[u32], width: i32, x: i32, y: i32) -> u32 {
        buffer[(y * width + x) as usize]
    }

    #[test]
    fn test_full_paint_fills_regions() {
        let model = model(400, 300);
        let buffer = render(&model, &Damage::Full);

        let viewer = model.container.region(RegionId::Viewer).geometry;
        assert_eq!(
            at(&buffer, 400, viewer.x + 5, viewer.y + 5),
            model.theme.viewer.to_argb_u32()
        );
        assert_eq!(at(&buffer, 400, 2, 2), model.theme.toolbar.to_argb_u32());
    }

    #[test]
    fn test_hovered_divider_is_highlighted() {
        let mut model = model(400, 300);
        model.theme.divider_highlight = Color::rgb(255, 0, 0);
        for divider in model.container.dividers_mut() {
            divider.set_highlight_color(Color::rgb(255, 0, 0));
        }
        model
            .container
            .handle_divider_event(DividerId::Panel, DividerEvent::Enter);

        let highlight = model.container.divider(DividerId::Panel).highlight_rect();
        let buffer = render(&model, &Damage::Full);
        assert_eq!(
            at(&buffer, 400, highlight.x, highlight.y + 10),
            0xFFFF0000
        );
    }

    #[test]
    fn test_transparent_highlight_leaves_regions_untouched() {
        let mut model = model(400, 300);
        for divider in model.container.dividers_mut() {
            divider.set_highlight_color(Color::TRANSPARENT);
        }
        model
            .container
            .handle_divider_event(DividerId::Panel, DividerEvent::Enter);

        let highlight = model.container.divider(DividerId::Panel).highlight_rect();
        let buffer = render(&model, &Damage::Full);
        let panel = model.container.region(RegionId::SidePanel).geometry;
        let expected = if highlight.x >= panel.x {
            model.theme.panel
        } else {
            model.theme.viewer
        };
        assert_eq!(
            at(&buffer, 400, highlight.x, highlight.y + 10),
            expected.to_argb_u32()
        );
    }

    #[test]
    fn test_partial_paint_stays_inside_areas() {
        let model = model(400, 300);
        let buffer = render(&model, &Damage::Areas(vec![Rect::new(0, 0, 10, 10)]));
        assert_ne!(at(&buffer, 400, 5, 5), 0);
        assert_eq!(at(&buffer, 400, 200, 200), 0);
    }
}
