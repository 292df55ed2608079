//! Markdown rendering and reading-time estimate.

#[cfg(test)]
#[path = "markdown_test.rs"]
mod markdown_test;

use pulldown_cmark::{Event, Options, Parser, html};

/// Average reading speed used for the estimate.
pub const WORDS_PER_MINUTE: usize = 200;

/// Render a post body to HTML. Posts are author-controlled, so raw HTML
/// blocks pass through.
///
/// `$…$` and `$$…$$` become `<span class="math math-inline">` and
/// `<span class="math math-display">` holding the escaped TeX source;
/// KaTeX typesets them in the browser.
pub fn render_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_MATH);

    let parser = Parser::new_ext(markdown, options);
    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

/// Words of prose in the body, ignoring markup.
pub fn word_count(markdown: &str) -> usize {
    Parser::new(markdown)
        .map(|event| match event {
            Event::Text(text) | Event::Code(text) | Event::InlineMath(text) | Event::DisplayMath(text) => {
                text.split_whitespace().count()
            }
            _ => 0,
        })
        .sum()
}

/// `"N min read"`, at least one minute.
pub fn read_time_label(markdown: &str) -> String {
    let minutes = word_count(markdown).div_ceil(WORDS_PER_MINUTE).max(1);
    format!("{minutes} min read")
}
