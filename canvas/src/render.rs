//! Rendering: paints a backdrop [`Scene`] to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`;
//! [`CanvasPainter`] logs them to the console and carries on with the next frame.

use std::f64::consts::TAU;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::animator::{Painter, Scene};
use crate::consts::GRADIENT_RADIUS_RATIO;

/// Draw one frame: solid background, radial overlay, then dots.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails.
pub fn draw(ctx: &CanvasRenderingContext2d, scene: &Scene<'_>) -> Result<(), JsValue> {
    let width = scene.bounds.width;
    let height = scene.bounds.height;

    // Layer 1: background.
    ctx.set_fill_style_str(&scene.palette.background.to_rgb().css());
    ctx.fill_rect(0.0, 0.0, width, height);

    // Layer 2: gradient.
    draw_gradient(ctx, scene)?;

    // Layer 3: dots.
    draw_dots(ctx, scene)
}

#[allow(clippy::cast_possible_truncation)]
fn draw_gradient(ctx: &CanvasRenderingContext2d, scene: &Scene<'_>) -> Result<(), JsValue> {
    let cx = scene.bounds.width * 0.5;
    let cy = scene.bounds.height * 0.5;
    let radius = scene.bounds.width.max(scene.bounds.height) * GRADIENT_RADIUS_RATIO;

    let gradient = ctx.create_radial_gradient(cx, cy, 0.0, cx, cy, radius)?;
    for stop in &scene.gradient {
        gradient.add_color_stop(stop.offset as f32, &stop.css())?;
    }
    ctx.set_fill_style_canvas_gradient(&gradient);
    ctx.fill_rect(0.0, 0.0, scene.bounds.width, scene.bounds.height);
    Ok(())
}

fn draw_dots(ctx: &CanvasRenderingContext2d, scene: &Scene<'_>) -> Result<(), JsValue> {
    let ink = scene.palette.foreground.to_rgb();
    for dot in scene.dots {
        ctx.begin_path();
        ctx.set_fill_style_str(&ink.css_alpha(dot.opacity));
        ctx.arc(dot.x, dot.y, dot.radius, 0.0, TAU)?;
        ctx.fill();
    }
    Ok(())
}

/// [`Painter`] over a live 2D context.
pub struct CanvasPainter {
    ctx: CanvasRenderingContext2d,
}

impl CanvasPainter {
    #[must_use]
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl Painter for CanvasPainter {
    fn paint(&mut self, scene: &Scene<'_>) {
        if let Err(err) = draw(&self.ctx, scene) {
            web_sys::console::error_2(&JsValue::from_str("backdrop: draw failed"), &err);
        }
    }
}
