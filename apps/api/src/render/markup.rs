//! Minimal HTML writer that escapes interpolated text by default.
//!
//! Markup structure (tags, classes, fixed labels) can only come from
//! `&'static str`; anything runtime-provided goes through [`escape`].

use std::fmt::Write;

/// Escapes text for use in element content and double-quoted attributes.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[derive(Debug, Default)]
pub struct Markup {
    buf: String,
}

impl Markup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Static markup, never user text.
    pub fn raw(&mut self, html: &'static str) -> &mut Self {
        self.buf.push_str(html);
        self
    }

    pub fn text(&mut self, text: &str) -> &mut Self {
        self.buf.push_str(&escape(text));
        self
    }

    pub fn open(&mut self, tag: &'static str, class: &'static str) -> &mut Self {
        if class.is_empty() {
            let _ = write!(self.buf, "<{tag}>");
        } else {
            let _ = write!(self.buf, "<{tag} class=\"{class}\">");
        }
        self
    }

    pub fn close(&mut self, tag: &'static str) -> &mut Self {
        self.close_inline(tag);
        self.buf.push('\n');
        self
    }

    /// Closes without a line break, for inline runs such as tag chips.
    pub fn close_inline(&mut self, tag: &'static str) -> &mut Self {
        let _ = write!(self.buf, "</{tag}>");
        self
    }

    /// `<tag class="…">text</tag>`
    pub fn element(&mut self, tag: &'static str, class: &'static str, text: &str) -> &mut Self {
        self.open(tag, class).text(text).close(tag)
    }

    pub fn link(&mut self, href: &str, text: &str) -> &mut Self {
        let _ = write!(self.buf, "<a href=\"{}\">{}</a>", escape(href), escape(text));
        self
    }

    pub fn into_string(self) -> String {
        self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(escape("<script>"), "&lt;script&gt;");
        assert_eq!(escape("a & b"), "a &amp; b");
        assert_eq!(escape(r#"say "hi""#), "say &quot;hi&quot;");
        assert_eq!(escape("it's"), "it&#39;s");
        assert_eq!(escape("plain ✓"), "plain ✓");
    }

    #[test]
    fn test_element_escapes_text() {
        let mut m = Markup::new();
        m.element("div", "title", "<b>Lead</b>");
        assert_eq!(
            m.into_string(),
            "<div class=\"title\">&lt;b&gt;Lead&lt;/b&gt;</div>\n"
        );
    }

    #[test]
    fn test_link_escapes_href() {
        let mut m = Markup::new();
        m.link("https://x.dev/\"onmouseover=\"alert(1)", "site");
        let html = m.into_string();
        assert!(html.starts_with("<a href=\"https://x.dev/&quot;onmouseover=&quot;"));
        assert!(!html.contains("\"onmouseover"));
    }

    #[test]
    fn test_open_without_class() {
        let mut m = Markup::new();
        m.open("span", "").text("x").close("span");
        assert_eq!(m.into_string(), "<span>x</span>\n");
    }

    #[test]
    fn test_close_inline_keeps_run_on_one_line() {
        let mut m = Markup::new();
        m.open("span", "skill").text("Go").close_inline("span");
        m.open("span", "skill").text("Rust").close_inline("span");
        assert_eq!(
            m.into_string(),
            "<span class=\"skill\">Go</span><span class=\"skill\">Rust</span>"
        );
    }
}
