//! Markdown rendering

use pulldown_cmark::{html, Options, Parser};

/// Renders chapter Markdown into HTML fragments.
///
/// Rendering is pure and deterministic, and it never fails: malformed
/// input degrades to literal or partially rendered output instead of
/// aborting an assembly.
pub struct MarkdownRenderer {
    /// Whether to enable tables extension
    enable_tables: bool,
    /// Whether to enable strikethrough extension
    enable_strikethrough: bool,
    /// Whether to enable footnotes extension
    enable_footnotes: bool,
}

impl MarkdownRenderer {
    pub fn new() -> Self {
        Self {
            enable_tables: true,
            enable_strikethrough: true,
            enable_footnotes: true,
        }
    }

    /// Enable or disable table rendering
    pub fn with_tables(mut self, enable: bool) -> Self {
        self.enable_tables = enable;
        self
    }

    /// Enable or disable strikethrough rendering
    pub fn with_strikethrough(mut self, enable: bool) -> Self {
        self.enable_strikethrough = enable;
        self
    }

    /// Enable or disable footnote rendering
    pub fn with_footnotes(mut self, enable: bool) -> Self {
        self.enable_footnotes = enable;
        self
    }

    fn parser_options(&self) -> Options {
        let mut options = Options::empty();
        if self.enable_tables {
            options.insert(Options::ENABLE_TABLES);
        }
        if self.enable_strikethrough {
            options.insert(Options::ENABLE_STRIKETHROUGH);
        }
        if self.enable_footnotes {
            options.insert(Options::ENABLE_FOOTNOTES);
        }
        options
    }

    /// Render a Markdown fragment to HTML
    pub fn render(&self, markdown: &str) -> String {
        let parser = Parser::new_ext(markdown, self.parser_options());
        let mut html = String::new();
        html::push_html(&mut html, parser);
        html
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}
