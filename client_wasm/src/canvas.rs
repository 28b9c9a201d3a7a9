//! Canvas 2D renderer

use crate::ClientError;
use game_core::{DrawCommand, Scene};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, ClientError> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or(ClientError::ContextUnavailable)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| ClientError::ContextUnavailable)?;
        Ok(Self { ctx })
    }

    /// Execute a scene's draw commands in order
    pub fn draw(&self, scene: &Scene) -> Result<(), ClientError> {
        for command in &scene.commands {
            match command {
                DrawCommand::Clear { width, height } => {
                    self.ctx.clear_rect(0.0, 0.0, *width as f64, *height as f64);
                }
                DrawCommand::FillRect {
                    x,
                    y,
                    width,
                    height,
                    color,
                } => {
                    self.ctx.set_fill_style_str(color.css());
                    self.ctx
                        .fill_rect(*x as f64, *y as f64, *width as f64, *height as f64);
                }
                DrawCommand::FillText {
                    text,
                    x,
                    y,
                    font,
                    color,
                } => {
                    self.ctx.set_font(font);
                    self.ctx.set_fill_style_str(color.css());
                    self.ctx.fill_text(text, *x as f64, *y as f64)?;
                }
            }
        }
        Ok(())
    }
}
