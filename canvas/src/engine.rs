//! Browser-facing backdrop: canvas sizing, context lookup, and the rAF loop.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::animator::{BackdropCore, BackgroundAnimator};
use crate::dot::{Bounds, DotConfig};
use crate::palette::ResolvedTheme;
use crate::render::CanvasPainter;
use crate::scheduler::{LoopPhase, RafScheduler};

/// The animated backdrop bound to a canvas element.
///
/// Owns the element and a `requestAnimationFrame` loop. Dropping it stops the
/// loop and cancels any pending frame.
pub struct Backdrop {
    canvas: HtmlCanvasElement,
    animator: BackgroundAnimator<RafScheduler>,
}

impl Backdrop {
    /// Size `canvas` to `width` x `height`, populate dots, and start animating.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the element has no 2D context.
    pub fn mount(
        canvas: HtmlCanvasElement,
        width: f64,
        height: f64,
        theme: impl Fn() -> ResolvedTheme + 'static,
    ) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        let bounds = Bounds::new(width, height);
        set_canvas_size(&canvas, bounds);

        let core = BackdropCore::new(bounds, DotConfig::default(), random_seed());
        let animator = BackgroundAnimator::new(RafScheduler, core, CanvasPainter::new(ctx), theme);
        animator.start();
        Ok(Self { canvas, animator })
    }

    /// Match the canvas to a new viewport size.
    pub fn resize(&self, width: f64, height: f64) {
        let bounds = Bounds::new(width, height);
        set_canvas_size(&self.canvas, bounds);
        self.animator.resize(bounds);
    }

    /// Stop animating. Idempotent.
    pub fn stop(&self) {
        self.animator.stop();
    }

    #[must_use]
    pub fn phase(&self) -> LoopPhase {
        self.animator.phase()
    }
}

impl Drop for Backdrop {
    fn drop(&mut self) {
        self.animator.stop();
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn set_canvas_size(canvas: &HtmlCanvasElement, bounds: Bounds) {
    canvas.set_width(bounds.width.round() as u32);
    canvas.set_height(bounds.height.round() as u32);
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn random_seed() -> u64 {
    (js_sys::Math::random() * 9_007_199_254_740_992.0) as u64
}
