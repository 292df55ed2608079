//! Shared numeric constants for the canvas crate.

// ── Population ──────────────────────────────────────────────────

/// Canvas area, in square CSS pixels, that earns one dot.
pub const DOT_AREA_PX2: f64 = 15_000.0;

// ── Dot appearance ──────────────────────────────────────────────

/// Smallest dot radius in CSS pixels.
pub const DOT_RADIUS_MIN: f64 = 0.4;

/// Largest dot radius in CSS pixels.
pub const DOT_RADIUS_MAX: f64 = 1.6;

/// Lower edge of the opacity band.
pub const DOT_OPACITY_MIN: f64 = 0.08;

/// Upper edge of the opacity band.
pub const DOT_OPACITY_MAX: f64 = 0.55;

/// Largest per-frame opacity change (twinkle), either direction.
pub const TWINKLE_DELTA_MAX: f64 = 0.015;

// ── Dot motion ──────────────────────────────────────────────────

/// Slowest drift in CSS pixels per frame.
pub const DOT_SPEED_MIN: f64 = 0.05;

/// Fastest drift in CSS pixels per frame.
pub const DOT_SPEED_MAX: f64 = 0.3;

/// Chance per frame that a dot bends its heading.
pub const DIRECTION_CHANGE_PROBABILITY: f64 = 0.02;

/// Largest heading change in radians when a dot bends, either direction.
pub const DIRECTION_JITTER_MAX: f64 = 0.3;

// ── Gradient ────────────────────────────────────────────────────

/// Radial gradient radius as a fraction of the larger canvas side.
pub const GRADIENT_RADIUS_RATIO: f64 = 0.75;
