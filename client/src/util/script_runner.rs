//! Runs the pre-paint script in an embedded JS engine against a fake
//! `document` and `window`, and reports what it applied to the root.

use boa_engine::{Context, Source};

use super::bootstrap::script;

/// What the script left on `document.documentElement`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Applied {
    pub data_theme: String,
    pub classes: String,
    pub color_scheme: String,
}

/// Cookie jar the fake document exposes.
#[derive(Debug, Clone, Copy)]
pub enum Cookies<'a> {
    Header(&'a str),
    Throws,
}

fn js_literal(value: &str) -> String {
    serde_json::to_string(value).expect("string literal")
}

/// Run `script()` with `cookies` and an OS signal (`None` = no `matchMedia`).
/// The root starts with classes `site`, `dark` and `light`.
pub fn run(cookies: Cookies<'_>, os_prefers_dark: Option<bool>) -> Applied {
    let cookie_setup = match cookies {
        Cookies::Header(header) => format!("document.cookie = {};", js_literal(header)),
        Cookies::Throws => {
            "Object.defineProperty(document, \"cookie\", { get: function () { throw new Error(\"blocked\"); } });"
                .to_owned()
        }
    };
    let window_setup = match os_prefers_dark {
        Some(dark) => format!(
            "var window = {{ matchMedia: function (q) {{ return {{ matches: q === \"(prefers-color-scheme: dark)\" && {dark} }}; }} }};"
        ),
        None => "var window = {};".to_owned(),
    };

    let prelude = format!(
        r#"
var root = {{
  classes: ["site", "dark", "light"],
  attrs: {{}},
  style: {{}},
  setAttribute: function (k, v) {{ this.attrs[k] = v; }}
}};
root.classList = {{
  add: function (c) {{ if (root.classes.indexOf(c) < 0) root.classes.push(c); }},
  remove: function () {{
    for (var i = 0; i < arguments.length; i++) {{
      var at = root.classes.indexOf(arguments[i]);
      if (at >= 0) root.classes.splice(at, 1);
    }}
  }}
}};
var document = {{ documentElement: root }};
{cookie_setup}
{window_setup}
"#
    );
    let readback = r#"[root.attrs["data-theme"], root.classes.join(","), root.style.colorScheme].join("|")"#;

    let mut context = Context::default();
    for code in [prelude.as_str(), script().as_str()] {
        context.eval(Source::from_bytes(code)).expect("script evaluates");
    }
    let result = context.eval(Source::from_bytes(readback)).expect("readback evaluates");
    let text = result.to_string(&mut context).expect("readback is a string").to_std_string_escaped();

    let mut parts = text.split('|').map(str::to_owned);
    let mut next = || parts.next().unwrap_or_default();
    Applied { data_theme: next(), classes: next(), color_scheme: next() }
}
