//! Theme stylesheet generated from the shared palette.
//!
//! Emits the design tokens as CSS custom properties scoped to the root
//! class set by the resolver, so markup and the canvas backdrop read colors
//! from one source. A root without a theme class gets the dark tokens.

#[cfg(test)]
#[path = "theme_css_test.rs"]
mod theme_css_test;

use canvas::palette::ColorPalette;

use crate::state::theme::ResolvedTheme;

fn block(selector: &str, theme: ResolvedTheme) -> String {
    let body: String = ColorPalette::for_theme(theme)
        .css_variables()
        .lines()
        .map(|line| format!("  {line}\n"))
        .collect();
    format!("{selector} {{\n  color-scheme: {};\n{body}}}\n", theme.as_str())
}

/// Custom-property declarations for both themes.
#[must_use]
pub fn stylesheet() -> String {
    let dark = ResolvedTheme::Dark;
    let light = ResolvedTheme::Light;
    let mut css = block(&format!(":root, :root.{}", dark.as_str()), dark);
    css.push_str(&block(&format!(":root.{}", light.as_str()), light));
    css
}
