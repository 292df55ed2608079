//! Dot particles: spawning, per-frame drift and twinkle, toroidal wrap.
//!
//! Everything here is pure and seeded by the caller's RNG, so the motion laws
//! (position inside bounds, opacity inside its band) are unit-testable
//! without a browser.

#[cfg(test)]
#[path = "dot_test.rs"]
mod dot_test;

use std::f64::consts::TAU;

use rand::Rng;

use crate::consts::{
    DIRECTION_CHANGE_PROBABILITY, DIRECTION_JITTER_MAX, DOT_AREA_PX2, DOT_OPACITY_MAX, DOT_OPACITY_MIN, DOT_RADIUS_MAX,
    DOT_RADIUS_MIN, DOT_SPEED_MAX, DOT_SPEED_MIN, TWINKLE_DELTA_MAX,
};

/// Canvas extent in CSS pixels. Each axis is at least one pixel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width: sanitize_extent(width), height: sanitize_extent(height) }
    }

    #[must_use]
    pub fn area(self) -> f64 {
        self.width * self.height
    }

    #[cfg(test)]
    pub(crate) fn contains(self, x: f64, y: f64) -> bool {
        (0.0..self.width).contains(&x) && (0.0..self.height).contains(&y)
    }
}

fn sanitize_extent(value: f64) -> f64 {
    if value.is_finite() { value.max(1.0) } else { 1.0 }
}

/// Tunables for dot population, appearance, and motion.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DotConfig {
    /// Square pixels of canvas per dot.
    pub area_per_dot: f64,
    pub radius_min: f64,
    pub radius_max: f64,
    pub opacity_min: f64,
    pub opacity_max: f64,
    pub speed_min: f64,
    pub speed_max: f64,
    pub direction_change_probability: f64,
    pub direction_jitter_max: f64,
    pub twinkle_delta_max: f64,
}

impl Default for DotConfig {
    fn default() -> Self {
        Self {
            area_per_dot: DOT_AREA_PX2,
            radius_min: DOT_RADIUS_MIN,
            radius_max: DOT_RADIUS_MAX,
            opacity_min: DOT_OPACITY_MIN,
            opacity_max: DOT_OPACITY_MAX,
            speed_min: DOT_SPEED_MIN,
            speed_max: DOT_SPEED_MAX,
            direction_change_probability: DIRECTION_CHANGE_PROBABILITY,
            direction_jitter_max: DIRECTION_JITTER_MAX,
            twinkle_delta_max: TWINKLE_DELTA_MAX,
        }
    }
}

impl DotConfig {
    /// Number of dots for a canvas of the given size.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn population(&self, bounds: Bounds) -> usize {
        if self.area_per_dot <= 0.0 {
            return 0;
        }
        (bounds.area() / self.area_per_dot).floor() as usize
    }
}

/// A single animated particle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dot {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub opacity: f64,
    /// Pixels advanced per frame.
    pub speed: f64,
    /// Heading in radians, kept in `[0, TAU)`.
    pub direction: f64,
}

impl Dot {
    /// Spawn a dot at a random position inside `bounds`.
    pub fn spawn<R: Rng>(rng: &mut R, bounds: Bounds, config: &DotConfig) -> Self {
        Self {
            x: wrap(rng.random::<f64>() * bounds.width, bounds.width),
            y: wrap(rng.random::<f64>() * bounds.height, bounds.height),
            radius: sample(rng, config.radius_min, config.radius_max),
            opacity: sample(rng, config.opacity_min, config.opacity_max),
            speed: sample(rng, config.speed_min, config.speed_max),
            direction: rng.random::<f64>() * TAU,
        }
    }

    /// Advance one frame: drift, occasional heading change, twinkle, wrap.
    pub fn step<R: Rng>(&mut self, rng: &mut R, bounds: Bounds, config: &DotConfig) {
        let x = self.x + self.direction.cos() * self.speed;
        let y = self.y + self.direction.sin() * self.speed;

        if config.direction_change_probability > 0.0
            && rng.random::<f64>() < config.direction_change_probability
        {
            let jitter = symmetric(rng, config.direction_jitter_max);
            self.direction = (self.direction + jitter).rem_euclid(TAU);
        }

        let twinkle = symmetric(rng, config.twinkle_delta_max);
        self.opacity = clamp_band(self.opacity + twinkle, config.opacity_min, config.opacity_max);

        self.x = wrap(x, bounds.width);
        self.y = wrap(y, bounds.height);
    }

    /// Re-wrap into new bounds after a resize.
    pub fn rewrap(&mut self, bounds: Bounds) {
        self.x = wrap(self.x, bounds.width);
        self.y = wrap(self.y, bounds.height);
    }
}

/// Map `value` into `[0, extent)`, entering from the opposite edge on exit.
#[must_use]
pub fn wrap(value: f64, extent: f64) -> f64 {
    if !value.is_finite() || extent <= 0.0 {
        return 0.0;
    }
    let wrapped = value.rem_euclid(extent);
    // rem_euclid can round up to `extent` for tiny negative inputs.
    if wrapped >= extent { 0.0 } else { wrapped }
}

fn clamp_band(value: f64, min: f64, max: f64) -> f64 {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    value.clamp(lo, hi)
}

fn sample<R: Rng>(rng: &mut R, min: f64, max: f64) -> f64 {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    lo + rng.random::<f64>() * (hi - lo)
}

fn symmetric<R: Rng>(rng: &mut R, max: f64) -> f64 {
    (rng.random::<f64>() * 2.0 - 1.0) * max.abs()
}

/// The full dot population and the bounds it wraps within.
#[derive(Clone, Debug)]
pub struct DotField {
    dots: Vec<Dot>,
    bounds: Bounds,
    config: DotConfig,
}

impl DotField {
    /// Generate `config.population(bounds)` dots.
    pub fn populate<R: Rng>(rng: &mut R, bounds: Bounds, config: DotConfig) -> Self {
        let count = config.population(bounds);
        let dots = (0..count).map(|_| Dot::spawn(rng, bounds, &config)).collect();
        Self { dots, bounds, config }
    }

    #[must_use]
    pub fn dots(&self) -> &[Dot] {
        &self.dots
    }

    #[must_use]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    #[must_use]
    pub fn config(&self) -> &DotConfig {
        &self.config
    }

    /// Advance every dot by one frame.
    pub fn step<R: Rng>(&mut self, rng: &mut R) {
        let bounds = self.bounds;
        let config = self.config;
        for dot in &mut self.dots {
            dot.step(rng, bounds, &config);
        }
    }

    /// Change the wrap bounds. The population is kept as-is.
    pub fn resize(&mut self, bounds: Bounds) {
        self.bounds = bounds;
        for dot in &mut self.dots {
            dot.rewrap(bounds);
        }
    }
}
