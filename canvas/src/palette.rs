//! Theme palettes: HSL design tokens keyed by resolved theme.
//!
//! The same tokens feed two consumers: the backdrop painter (as RGB strings)
//! and the page stylesheet (as CSS custom properties).

#[cfg(test)]
#[path = "palette_test.rs"]
mod palette_test;

/// Concrete appearance applied to the document. Never "system".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ResolvedTheme {
    #[default]
    Dark,
    Light,
}

impl ResolvedTheme {
    /// Lowercase name used for the root class, `data-theme`, and `color-scheme`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// The other appearance.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    #[must_use]
    pub fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }
}

/// An 8-bit RGB triple.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// `rgb(r, g, b)` for canvas fill styles.
    #[must_use]
    pub fn css(self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    /// `rgba(r, g, b, a)` with `alpha` clamped to `[0, 1]`.
    #[must_use]
    pub fn css_alpha(self, alpha: f64) -> String {
        format!("rgba({}, {}, {}, {:.3})", self.r, self.g, self.b, alpha.clamp(0.0, 1.0))
    }
}

/// A design token in HSL space: hue in degrees, saturation and lightness in percent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    #[must_use]
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Token form used by the stylesheet: `hsl(var(--name))` expects `H S% L%`.
    #[must_use]
    pub fn token(self) -> String {
        format!("{} {}% {}%", self.h, self.s, self.l)
    }

    /// Convert to 8-bit RGB.
    #[must_use]
    pub fn to_rgb(self) -> Rgb {
        let h = (self.h / 360.0).rem_euclid(1.0);
        let s = (self.s / 100.0).clamp(0.0, 1.0);
        let l = (self.l / 100.0).clamp(0.0, 1.0);

        if s == 0.0 {
            let v = channel(l);
            return Rgb { r: v, g: v, b: v };
        }

        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        Rgb {
            r: channel(hue_to_channel(p, q, h + 1.0 / 3.0)),
            g: channel(hue_to_channel(p, q, h)),
            b: channel(hue_to_channel(p, q, h - 1.0 / 3.0)),
        }
    }
}

fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn channel(unit: f64) -> u8 {
    (unit.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Named color tokens for one resolved theme.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorPalette {
    pub background: Hsl,
    pub foreground: Hsl,
    pub card: Hsl,
    pub card_foreground: Hsl,
    pub primary: Hsl,
    pub primary_foreground: Hsl,
    pub secondary: Hsl,
    pub secondary_foreground: Hsl,
    pub muted: Hsl,
    pub muted_foreground: Hsl,
    pub accent: Hsl,
    pub accent_foreground: Hsl,
    pub border: Hsl,
    pub ring: Hsl,
    pub prose_links: Hsl,
}

const DARK: ColorPalette = ColorPalette {
    background: Hsl::new(222.0, 84.0, 4.9),
    foreground: Hsl::new(210.0, 40.0, 98.0),
    card: Hsl::new(222.0, 84.0, 4.9),
    card_foreground: Hsl::new(210.0, 40.0, 98.0),
    primary: Hsl::new(210.0, 40.0, 98.0),
    primary_foreground: Hsl::new(222.0, 47.4, 11.2),
    secondary: Hsl::new(217.0, 32.6, 17.5),
    secondary_foreground: Hsl::new(210.0, 40.0, 98.0),
    muted: Hsl::new(217.0, 32.6, 17.5),
    muted_foreground: Hsl::new(215.0, 20.2, 65.1),
    accent: Hsl::new(217.0, 32.6, 17.5),
    accent_foreground: Hsl::new(210.0, 40.0, 98.0),
    border: Hsl::new(217.0, 32.6, 17.5),
    ring: Hsl::new(212.7, 26.8, 83.9),
    prose_links: Hsl::new(210.0, 100.0, 70.0),
};

const LIGHT: ColorPalette = ColorPalette {
    background: Hsl::new(0.0, 0.0, 100.0),
    foreground: Hsl::new(222.0, 84.0, 4.9),
    card: Hsl::new(0.0, 0.0, 100.0),
    card_foreground: Hsl::new(222.0, 84.0, 4.9),
    primary: Hsl::new(222.0, 47.4, 11.2),
    primary_foreground: Hsl::new(210.0, 40.0, 98.0),
    secondary: Hsl::new(210.0, 40.0, 96.1),
    secondary_foreground: Hsl::new(222.0, 47.4, 11.2),
    muted: Hsl::new(210.0, 40.0, 96.1),
    muted_foreground: Hsl::new(215.0, 16.3, 46.9),
    accent: Hsl::new(210.0, 40.0, 96.1),
    accent_foreground: Hsl::new(222.0, 47.4, 11.2),
    border: Hsl::new(214.3, 31.8, 91.4),
    ring: Hsl::new(222.0, 84.0, 4.9),
    prose_links: Hsl::new(240.0, 60.0, 50.0),
};

impl ColorPalette {
    /// Palette for a resolved theme.
    #[must_use]
    pub fn for_theme(theme: ResolvedTheme) -> Self {
        match theme {
            ResolvedTheme::Dark => DARK,
            ResolvedTheme::Light => LIGHT,
        }
    }

    /// Every token with its CSS custom-property name, in declaration order.
    #[must_use]
    pub fn tokens(&self) -> [(&'static str, Hsl); 15] {
        [
            ("background", self.background),
            ("foreground", self.foreground),
            ("card", self.card),
            ("card-foreground", self.card_foreground),
            ("primary", self.primary),
            ("primary-foreground", self.primary_foreground),
            ("secondary", self.secondary),
            ("secondary-foreground", self.secondary_foreground),
            ("muted", self.muted),
            ("muted-foreground", self.muted_foreground),
            ("accent", self.accent),
            ("accent-foreground", self.accent_foreground),
            ("border", self.border),
            ("ring", self.ring),
            ("prose-links", self.prose_links),
        ]
    }

    /// Declarations `--name: H S% L%;`, one per line.
    #[must_use]
    pub fn css_variables(&self) -> String {
        self.tokens()
            .iter()
            .map(|(name, value)| format!("--{name}: {};\n", value.token()))
            .collect()
    }
}

/// One color stop of the backdrop's radial gradient.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    /// Position along the gradient, `0.0` at the center.
    pub offset: f64,
    pub color: Rgb,
    pub alpha: f64,
}

impl GradientStop {
    #[must_use]
    pub fn css(&self) -> String {
        self.color.css_alpha(self.alpha)
    }
}

/// Radial overlay stops for the backdrop.
///
/// Dark concentrates the accent tone near the center; light keeps a faint
/// muted wash. Both fade to a transparent background at the rim.
#[must_use]
pub fn backdrop_gradient(theme: ResolvedTheme, palette: &ColorPalette) -> [GradientStop; 3] {
    match theme {
        ResolvedTheme::Dark => [
            GradientStop { offset: 0.0, color: palette.accent.to_rgb(), alpha: 0.55 },
            GradientStop { offset: 0.45, color: palette.muted.to_rgb(), alpha: 0.25 },
            GradientStop { offset: 1.0, color: palette.background.to_rgb(), alpha: 0.0 },
        ],
        ResolvedTheme::Light => [
            GradientStop { offset: 0.0, color: palette.muted.to_rgb(), alpha: 0.35 },
            GradientStop { offset: 0.6, color: palette.accent.to_rgb(), alpha: 0.15 },
            GradientStop { offset: 1.0, color: palette.background.to_rgb(), alpha: 0.0 },
        ],
    }
}
