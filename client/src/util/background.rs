//! Host for the animated backdrop.
//!
//! Keeps a backdrop sized to the viewport through a resize listener. Dropping
//! the host removes the listener and stops the backdrop. The browser build
//! plugs in `canvas::engine::Backdrop` and the window; tests plug in fakes.

#[cfg(test)]
#[path = "background_test.rs"]
mod background_test;

use std::rc::Rc;

/// Something that follows the viewport size and can be stopped.
pub trait Resizable {
    fn resize(&self, width: f64, height: f64);
    fn stop(&self);
}

/// Source of the viewport size and its changes.
pub trait ViewportSource {
    /// RAII handle; dropping it removes the listener.
    type Listener;

    fn size(&self) -> (f64, f64);

    /// Call `on_resize` with the new size after every viewport change.
    /// Returns `None` when resizes cannot be observed.
    fn listen(&self, on_resize: Box<dyn Fn(f64, f64)>) -> Option<Self::Listener>;
}

pub struct BackgroundHost<B: Resizable, V: ViewportSource> {
    resize: Option<V::Listener>,
    target: Rc<B>,
}

impl<B: Resizable + 'static, V: ViewportSource> BackgroundHost<B, V> {
    /// Forward viewport resizes to `target` until the host is dropped.
    pub fn attach(target: B, viewport: &V) -> Self {
        let target = Rc::new(target);
        let on_resize = Rc::clone(&target);
        let resize = viewport.listen(Box::new(move |width, height| on_resize.resize(width, height)));
        if resize.is_none() {
            log::debug!("background: viewport resizes not observable");
        }
        Self { resize, target }
    }
}

impl<B: Resizable, V: ViewportSource> Drop for BackgroundHost<B, V> {
    fn drop(&mut self) {
        drop(self.resize.take());
        self.target.stop();
    }
}

#[cfg(feature = "hydrate")]
mod browser {
    use canvas::engine::Backdrop;
    use gloo_events::EventListener;
    use web_sys::HtmlCanvasElement;

    use super::{BackgroundHost, Resizable, ViewportSource};
    use crate::state::theme::ResolvedTheme;

    impl Resizable for Backdrop {
        fn resize(&self, width: f64, height: f64) {
            Backdrop::resize(self, width, height);
        }

        fn stop(&self) {
            Backdrop::stop(self);
        }
    }

    /// The browser window.
    pub struct WindowViewport {
        window: web_sys::Window,
    }

    impl WindowViewport {
        pub fn current() -> Option<Self> {
            web_sys::window().map(|window| Self { window })
        }
    }

    fn window_size(window: &web_sys::Window) -> (f64, f64) {
        let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        (width, height)
    }

    impl ViewportSource for WindowViewport {
        type Listener = EventListener;

        fn size(&self) -> (f64, f64) {
            window_size(&self.window)
        }

        fn listen(&self, on_resize: Box<dyn Fn(f64, f64)>) -> Option<EventListener> {
            let window = self.window.clone();
            Some(EventListener::new(&self.window, "resize", move |_| {
                let (width, height) = window_size(&window);
                on_resize(width, height);
            }))
        }
    }

    pub type BrowserBackground = BackgroundHost<Backdrop, WindowViewport>;

    /// Mount on `canvas` and start animating. Returns `None` when there is
    /// no window or the element has no 2D context.
    pub fn mount(canvas: HtmlCanvasElement, theme: impl Fn() -> ResolvedTheme + 'static) -> Option<BrowserBackground> {
        let viewport = WindowViewport::current()?;
        let (width, height) = viewport.size();
        match Backdrop::mount(canvas, width, height, theme) {
            Ok(backdrop) => Some(BackgroundHost::attach(backdrop, &viewport)),
            Err(err) => {
                log::warn!("background: not mounted: {err:?}");
                None
            }
        }
    }
}

#[cfg(feature = "hydrate")]
pub use browser::{BrowserBackground, WindowViewport, mount};
