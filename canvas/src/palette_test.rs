#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// ResolvedTheme
// =============================================================

#[test]
fn resolved_theme_defaults_to_dark() {
    assert_eq!(ResolvedTheme::default(), ResolvedTheme::Dark);
}

#[test]
fn resolved_theme_names_are_lowercase() {
    assert_eq!(ResolvedTheme::Dark.as_str(), "dark");
    assert_eq!(ResolvedTheme::Light.as_str(), "light");
}

#[test]
fn resolved_theme_toggles_both_ways() {
    assert_eq!(ResolvedTheme::Dark.toggled(), ResolvedTheme::Light);
    assert_eq!(ResolvedTheme::Light.toggled(), ResolvedTheme::Dark);
}

#[test]
fn resolved_theme_from_prefers_dark() {
    assert_eq!(ResolvedTheme::from_prefers_dark(true), ResolvedTheme::Dark);
    assert_eq!(ResolvedTheme::from_prefers_dark(false), ResolvedTheme::Light);
}

// =============================================================
// Color conversion
// =============================================================

#[test]
fn hsl_white_is_white() {
    assert_eq!(Hsl::new(0.0, 0.0, 100.0).to_rgb(), Rgb { r: 255, g: 255, b: 255 });
}

#[test]
fn hsl_pure_red() {
    assert_eq!(Hsl::new(0.0, 100.0, 50.0).to_rgb(), Rgb { r: 255, g: 0, b: 0 });
}

#[test]
fn hsl_dark_background() {
    assert_eq!(Hsl::new(222.0, 84.0, 4.9).to_rgb(), Rgb { r: 2, g: 8, b: 23 });
}

#[test]
fn hsl_hue_wraps_past_360() {
    assert_eq!(Hsl::new(360.0, 100.0, 50.0).to_rgb(), Hsl::new(0.0, 100.0, 50.0).to_rgb());
}

#[test]
fn hsl_token_format() {
    assert_eq!(Hsl::new(217.0, 32.6, 17.5).token(), "217 32.6% 17.5%");
}

#[test]
fn rgb_css_strings() {
    let c = Rgb { r: 1, g: 2, b: 3 };
    assert_eq!(c.css(), "rgb(1, 2, 3)");
    assert_eq!(c.css_alpha(0.5), "rgba(1, 2, 3, 0.500)");
}

#[test]
fn rgb_css_alpha_is_clamped() {
    let c = Rgb { r: 0, g: 0, b: 0 };
    assert_eq!(c.css_alpha(3.0), "rgba(0, 0, 0, 1.000)");
    assert_eq!(c.css_alpha(-1.0), "rgba(0, 0, 0, 0.000)");
}

// =============================================================
// Palettes
// =============================================================

#[test]
fn palettes_differ_by_theme() {
    let dark = ColorPalette::for_theme(ResolvedTheme::Dark);
    let light = ColorPalette::for_theme(ResolvedTheme::Light);
    assert_ne!(dark.background, light.background);
    assert_eq!(dark.background, light.foreground);
}

#[test]
fn css_variables_has_one_line_per_token() {
    let css = ColorPalette::for_theme(ResolvedTheme::Light).css_variables();
    assert_eq!(css.lines().count(), 15);
    assert!(css.contains("--background: 0 0% 100%;"));
    assert!(css.contains("--prose-links: 240 60% 50%;"));
}

#[test]
fn token_names_are_unique() {
    let tokens = ColorPalette::for_theme(ResolvedTheme::Dark).tokens();
    let mut names: Vec<&str> = tokens.iter().map(|(name, _)| *name).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), tokens.len());
}

// =============================================================
// Gradient
// =============================================================

#[test]
fn gradient_offsets_increase_and_end_transparent() {
    for theme in [ResolvedTheme::Dark, ResolvedTheme::Light] {
        let palette = ColorPalette::for_theme(theme);
        let stops = backdrop_gradient(theme, &palette);
        assert_eq!(stops[0].offset, 0.0);
        assert_eq!(stops[2].offset, 1.0);
        assert!(stops[0].offset < stops[1].offset && stops[1].offset < stops[2].offset);
        assert_eq!(stops[2].alpha, 0.0);
        assert_eq!(stops[2].color, palette.background.to_rgb());
    }
}

#[test]
fn dark_gradient_is_stronger_than_light() {
    let dark = backdrop_gradient(ResolvedTheme::Dark, &ColorPalette::for_theme(ResolvedTheme::Dark));
    let light = backdrop_gradient(ResolvedTheme::Light, &ColorPalette::for_theme(ResolvedTheme::Light));
    assert!(dark[0].alpha > light[0].alpha);
}

#[test]
fn gradient_stop_css_uses_alpha() {
    let stop = GradientStop { offset: 0.0, color: Rgb { r: 10, g: 20, b: 30 }, alpha: 0.25 };
    assert_eq!(stop.css(), "rgba(10, 20, 30, 0.250)");
}
