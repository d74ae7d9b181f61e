use std::sync::LazyLock;

use pulldown_cmark::{CodeBlockKind, CowStr, Event, Tag, TagEnd};
use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::highlighted_html_for_string;
use syntect::parsing::{SyntaxReference, SyntaxSet};

const THEME_NAME: &str = "base16-ocean.dark";

static HIGHLIGHTER: LazyLock<PulldownHighlighter> = LazyLock::new(PulldownHighlighter::new);

/// Loading syntect's syntax and theme dumps is slow, so one instance is shared.
pub struct PulldownHighlighter {
    syntaxset: SyntaxSet,
    theme: Theme,
}

impl PulldownHighlighter {
    pub fn new() -> PulldownHighlighter {
        let syntaxset = SyntaxSet::load_defaults_newlines();
        let theme = ThemeSet::load_defaults()
            .themes
            .remove(THEME_NAME)
            .unwrap_or_default();
        PulldownHighlighter { syntaxset, theme }
    }

    fn syntax_for(&self, kind: &CodeBlockKind) -> &SyntaxReference {
        let plain = self.syntaxset.find_syntax_plain_text();
        match kind {
            CodeBlockKind::Fenced(lang) if !lang.is_empty() => {
                self.syntaxset.find_syntax_by_token(lang).unwrap_or(plain)
            }
            _ => plain,
        }
    }

    /// Replaces every code block in `events` with pre-highlighted HTML; all
    /// other events pass through untouched.
    pub fn highlight<'a, It>(&self, events: It) -> Result<Vec<Event<'a>>, syntect::Error>
    where
        It: Iterator<Item = Event<'a>>,
    {
        let mut block: Option<(&SyntaxReference, String)> = None;
        let mut out_events = Vec::new();

        for event in events {
            match event {
                Event::Start(Tag::CodeBlock(kind)) => {
                    block = Some((self.syntax_for(&kind), String::new()));
                }
                Event::End(TagEnd::CodeBlock) => {
                    if let Some((syntax, code)) = block.take() {
                        let html =
                            highlighted_html_for_string(&code, &self.syntaxset, syntax, &self.theme)?;
                        out_events.push(Event::Html(CowStr::from(html)));
                    }
                }
                Event::Text(t) => match block.as_mut() {
                    Some((_, code)) => code.push_str(&t),
                    None => out_events.push(Event::Text(t)),
                },
                e => out_events.push(e),
            }
        }

        Ok(out_events)
    }
}

impl Default for PulldownHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

/// Highlights code blocks using the shared highlighter.
pub fn highlight<'a, It>(events: It) -> Result<Vec<Event<'a>>, syntect::Error>
where
    It: Iterator<Item = Event<'a>>,
{
    HIGHLIGHTER.highlight(events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulldown_cmark::Parser;

    fn render(md: &str) -> String {
        let events = highlight(Parser::new(md)).unwrap();
        let mut html = String::new();
        pulldown_cmark::html::push_html(&mut html, events.into_iter());
        html
    }

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(render("halo *dunia*"), "<p>halo <em>dunia</em></p>\n");
    }

    #[test]
    fn fenced_block_becomes_styled_pre() {
        let html = render("```rust\nlet x = 1;\n```\n");
        assert!(html.starts_with("<pre style="));
        assert!(html.contains("let"));
        assert!(!html.contains("<code"));
    }

    #[test]
    fn unknown_language_still_renders() {
        let html = render("```nosuchlang\nsesuatu\n```\n");
        assert!(html.contains("sesuatu"));
    }
}
