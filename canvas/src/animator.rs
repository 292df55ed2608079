//! The backdrop animation: dot field state plus a frame loop that paints it.
//!
//! [`BackdropCore`] holds everything that does not touch the browser so it
//! can be stepped in unit tests. [`BackgroundAnimator`] ties a core to a
//! [`FrameScheduler`] and a [`Painter`]; each frame it steps the dots, reads
//! the current theme, and hands a [`Scene`] to the painter.

#[cfg(test)]
#[path = "animator_test.rs"]
mod animator_test;

use std::cell::RefCell;
use std::rc::Rc;

use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::dot::{Bounds, Dot, DotConfig, DotField};
use crate::palette::{ColorPalette, GradientStop, ResolvedTheme, backdrop_gradient};
use crate::scheduler::{FrameLoop, FrameScheduler, LoopPhase};

/// Read-only view of one frame.
#[derive(Debug)]
pub struct Scene<'a> {
    pub theme: ResolvedTheme,
    pub palette: ColorPalette,
    pub bounds: Bounds,
    pub dots: &'a [Dot],
    pub gradient: [GradientStop; 3],
}

/// Draws a [`Scene`] to some surface.
pub trait Painter {
    fn paint(&mut self, scene: &Scene<'_>);
}

/// Dot field and RNG, independent of any canvas element.
pub struct BackdropCore {
    field: DotField,
    rng: SmallRng,
}

impl BackdropCore {
    /// Populate a field for `bounds` from a fixed seed.
    #[must_use]
    pub fn new(bounds: Bounds, config: DotConfig, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let field = DotField::populate(&mut rng, bounds, config);
        Self { field, rng }
    }

    #[must_use]
    pub fn field(&self) -> &DotField {
        &self.field
    }

    pub fn resize(&mut self, bounds: Bounds) {
        self.field.resize(bounds);
    }

    pub fn step(&mut self) {
        self.field.step(&mut self.rng);
    }

    /// Snapshot the current frame for `theme`.
    #[must_use]
    pub fn scene(&self, theme: ResolvedTheme) -> Scene<'_> {
        let palette = ColorPalette::for_theme(theme);
        Scene {
            theme,
            palette,
            bounds: self.field.bounds(),
            dots: self.field.dots(),
            gradient: backdrop_gradient(theme, &palette),
        }
    }
}

/// Steps and paints a [`BackdropCore`] once per scheduled frame.
///
/// The theme is read through `theme` on every frame, so a theme change shows
/// up on the next frame without restarting the loop.
pub struct BackgroundAnimator<S: FrameScheduler + 'static> {
    core: Rc<RefCell<BackdropCore>>,
    frames: FrameLoop<S>,
}

impl<S: FrameScheduler + 'static> BackgroundAnimator<S> {
    pub fn new<P>(scheduler: S, core: BackdropCore, painter: P, theme: impl Fn() -> ResolvedTheme + 'static) -> Self
    where
        P: Painter + 'static,
    {
        let core = Rc::new(RefCell::new(core));
        let tick_core = Rc::clone(&core);
        let mut painter = painter;
        let frames = FrameLoop::new(scheduler, move |_timestamp_ms| {
            let mut core = tick_core.borrow_mut();
            core.step();
            painter.paint(&core.scene(theme()));
        });
        Self { core, frames }
    }

    /// Begin animating. Returns `false` if already started or stopped.
    pub fn start(&self) -> bool {
        self.frames.start()
    }

    /// Cancel the pending frame. No tick runs after this returns.
    pub fn stop(&self) {
        self.frames.stop();
    }

    #[must_use]
    pub fn phase(&self) -> LoopPhase {
        self.frames.phase()
    }

    #[must_use]
    pub fn has_pending_frame(&self) -> bool {
        self.frames.has_pending_frame()
    }

    /// Adopt new bounds. Dots are re-wrapped, not regenerated.
    pub fn resize(&self, bounds: Bounds) {
        self.core.borrow_mut().resize(bounds);
    }

    #[must_use]
    pub fn bounds(&self) -> Bounds {
        self.core.borrow().field().bounds()
    }

    #[cfg(test)]
    pub(crate) fn dot_count(&self) -> usize {
        self.core.borrow().field().dots().len()
    }
}
