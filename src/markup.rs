//! The normalized description markup tree.
//!
//! `Component::description` stores a small paragraph/list AST rather than
//! raw HTML. Both codecs parse into this tree and can emit it back to
//! their own wire shape; rendering to HTML is left to the consumer.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// An inline run of text within a paragraph or list item.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Inline {
    /// Plain text.
    Text(String),
    /// `<em>`-style emphasis.
    Emphasis(String),
    /// `<code>`-style inline code.
    Code(String),
}

impl Inline {
    fn plain_text(&self) -> &str {
        match self {
            Inline::Text(s) | Inline::Emphasis(s) | Inline::Code(s) => s,
        }
    }

    fn to_markdown(&self) -> String {
        match self {
            Inline::Text(s) => s.clone(),
            Inline::Emphasis(s) => format!("*{s}*"),
            Inline::Code(s) => format!("`{s}`"),
        }
    }
}

/// A single block of a description: a paragraph, or an ordered/unordered
/// list of items (each item itself a run of inline content).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Block {
    /// `<p>`.
    Paragraph(Vec<Inline>),
    /// `<ul><li>…</li></ul>`.
    UnorderedList(Vec<Vec<Inline>>),
    /// `<ol><li>…</li></ol>`.
    OrderedList(Vec<Vec<Inline>>),
}

/// A normalized description: an ordered sequence of blocks.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Markup(pub Vec<Block>);

impl Markup {
    /// A single-paragraph markup document made of plain text, convenient
    /// for tests and simple ingestion paths.
    pub fn paragraph(text: impl Into<String>) -> Self {
        Self(vec![Block::Paragraph(vec![Inline::Text(text.into())])])
    }

    /// Whether this markup carries no content at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Flattens the tree to plain text: paragraphs separated by a blank
    /// line, list items each on their own line prefixed with `-`/`1.`.
    pub fn to_plain_text(&self) -> String {
        let mut out = String::new();
        for block in &self.0 {
            match block {
                Block::Paragraph(inlines) => {
                    for inline in inlines {
                        out.push_str(inline.plain_text());
                    }
                    out.push_str("\n\n");
                }
                Block::UnorderedList(items) => {
                    for item in items {
                        out.push_str("- ");
                        for inline in item {
                            out.push_str(inline.plain_text());
                        }
                        out.push('\n');
                    }
                    out.push('\n');
                }
                Block::OrderedList(items) => {
                    for (i, item) in items.iter().enumerate() {
                        out.push_str(&format!("{}. ", i + 1));
                        for inline in item {
                            out.push_str(inline.plain_text());
                        }
                        out.push('\n');
                    }
                    out.push('\n');
                }
            }
        }
        out.trim_end().to_string()
    }

    /// Converts the tree to a Markdown rendering.
    pub fn to_markdown(&self) -> String {
        let mut out = String::new();
        for block in &self.0 {
            match block {
                Block::Paragraph(inlines) => {
                    for inline in inlines {
                        out.push_str(&inline.to_markdown());
                    }
                    out.push_str("\n\n");
                }
                Block::UnorderedList(items) => {
                    for item in items {
                        out.push_str("* ");
                        for inline in item {
                            out.push_str(&inline.to_markdown());
                        }
                        out.push('\n');
                    }
                    out.push('\n');
                }
                Block::OrderedList(items) => {
                    for (i, item) in items.iter().enumerate() {
                        out.push_str(&format!("{}. ", i + 1));
                        for inline in item {
                            out.push_str(&inline.to_markdown());
                        }
                        out.push('\n');
                    }
                    out.push('\n');
                }
            }
        }
        out.trim_end().to_string()
    }
}

/// A locale-tagged description: a `Markup` tree per locale.
pub type Description = BTreeMap<String, Markup>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_flattens_paragraphs_and_lists() {
        let markup = Markup(vec![
            Block::Paragraph(vec![Inline::Text("Intro.".into())]),
            Block::UnorderedList(vec![
                vec![Inline::Text("First".into())],
                vec![Inline::Text("Second".into())],
            ]),
        ]);
        assert_eq!(markup.to_plain_text(), "Intro.\n\n- First\n- Second");
    }

    #[test]
    fn markdown_wraps_emphasis_and_code() {
        let markup = Markup(vec![Block::Paragraph(vec![
            Inline::Text("See ".into()),
            Inline::Code("foo()".into()),
            Inline::Text(" for ".into()),
            Inline::Emphasis("details".into()),
        ])]);
        assert_eq!(markup.to_markdown(), "See `foo()` for *details*");
    }
}
