//! Canvas2D backend

use std::f64::consts::TAU;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::scene::DrawCommand;

pub struct CanvasRenderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    pub fn new(canvas: HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self { canvas, ctx })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    pub fn resize(&self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    /// Clear and draw one frame
    pub fn draw(&self, commands: &[DrawCommand]) {
        let ctx = &self.ctx;
        let width = self.canvas.width() as f64;
        let height = self.canvas.height() as f64;
        ctx.clear_rect(0.0, 0.0, width, height);

        for command in commands {
            match *command {
                DrawCommand::Circle {
                    center,
                    radius,
                    color,
                    alpha,
                    glow,
                    glow_color,
                } => {
                    ctx.set_global_alpha(alpha as f64);
                    ctx.set_shadow_blur(glow as f64);
                    ctx.set_shadow_color(glow_color);
                    ctx.set_fill_style_str(color);
                    ctx.begin_path();
                    if ctx
                        .arc(center.x as f64, center.y as f64, radius.max(0.0) as f64, 0.0, TAU)
                        .is_ok()
                    {
                        ctx.fill();
                    }
                }
                DrawCommand::Flash { color, alpha } => {
                    ctx.set_global_alpha(alpha as f64);
                    ctx.set_shadow_blur(0.0);
                    ctx.set_fill_style_str(color);
                    ctx.fill_rect(0.0, 0.0, width, height);
                }
            }
        }

        ctx.set_global_alpha(1.0);
        ctx.set_shadow_blur(0.0);
    }
}
