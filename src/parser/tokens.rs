//! Block-level tokenization of markdown source.
//!
//! Rule documentation is inspected one top-level block at a time. Only
//! headings and paragraphs carry meaning for option extraction; every other
//! block collapses to [`Token::Other`].
//!
//! Token text is the raw inline source of the block, sliced straight from the
//! input, so inline code keeps its backticks and emphasis keeps its markers.

use pulldown_cmark::{Event, Options, Parser, Tag};
use std::ops::Range;

/// A top-level markdown block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// ATX or setext heading
    Heading {
        /// Heading level (1-6)
        depth: usize,
        /// Raw inline source of the heading
        text: String,
    },
    /// Paragraph with its raw inline source
    Paragraph { text: String },
    /// Any other block (lists, code, tables, rules, html)
    Other,
}

impl Token {
    /// Heading depth, if this token is a heading.
    pub fn heading_depth(&self) -> Option<usize> {
        match self {
            Token::Heading { depth, .. } => Some(*depth),
            _ => None,
        }
    }
}

#[derive(Debug)]
enum BlockKind {
    Heading(usize),
    Paragraph,
}

#[derive(Debug)]
struct OpenBlock {
    kind: BlockKind,
    span: Option<Range<usize>>,
}

impl OpenBlock {
    fn new(kind: BlockKind) -> Self {
        Self { kind, span: None }
    }

    fn extend(&mut self, range: Range<usize>) {
        self.span = Some(match self.span.take() {
            Some(span) => span.start.min(range.start)..span.end.max(range.end),
            None => range,
        });
    }

    fn finish(self, source: &str) -> Token {
        let text = self
            .span
            .and_then(|span| source.get(span))
            .unwrap_or_default()
            .to_string();

        match self.kind {
            BlockKind::Heading(depth) => Token::Heading { depth, text },
            BlockKind::Paragraph => Token::Paragraph { text },
        }
    }
}

fn options() -> Options {
    Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS
}

/// Split markdown source into its top-level blocks, in document order.
///
/// Paragraphs nested inside lists, block quotes or other containers are not
/// emitted; the container itself becomes a single [`Token::Other`].
///
/// # Examples
///
/// ```
/// use lintdoc::parser::tokens::{lex, Token};
///
/// let tokens = lex("## Configuration\n\ntype: `boolean`\n");
/// assert_eq!(
///     tokens[1],
///     Token::Paragraph { text: "type: `boolean`".to_string() }
/// );
/// ```
pub fn lex(markdown: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut nesting = 0usize;
    let mut open: Option<OpenBlock> = None;

    for (event, range) in Parser::new_ext(markdown, options()).into_offset_iter() {
        match event {
            Event::Start(tag) => {
                if nesting == 0 {
                    open = match tag {
                        Tag::Heading { level, .. } => {
                            Some(OpenBlock::new(BlockKind::Heading(level as usize)))
                        }
                        Tag::Paragraph => Some(OpenBlock::new(BlockKind::Paragraph)),
                        _ => {
                            tokens.push(Token::Other);
                            None
                        }
                    };
                } else if let Some(block) = open.as_mut() {
                    block.extend(range);
                }
                nesting += 1;
            }
            Event::End(_) => {
                nesting = nesting.saturating_sub(1);
                if nesting == 0 {
                    if let Some(block) = open.take() {
                        tokens.push(block.finish(markdown));
                    }
                } else if let Some(block) = open.as_mut() {
                    block.extend(range);
                }
            }
            _ => {
                if nesting == 0 {
                    tokens.push(Token::Other);
                } else if let Some(block) = open.as_mut() {
                    block.extend(range);
                }
            }
        }
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn heading(depth: usize, text: &str) -> Token {
        Token::Heading {
            depth,
            text: text.to_string(),
        }
    }

    fn paragraph(text: &str) -> Token {
        Token::Paragraph {
            text: text.to_string(),
        }
    }

    #[test]
    fn test_headings_and_paragraphs() {
        let md = r#"# no-debugger

## Configuration

### allowList

type: `string[]`
"#;
        let tokens = lex(md);
        assert_eq!(
            tokens,
            vec![
                heading(1, "no-debugger"),
                heading(2, "Configuration"),
                heading(3, "allowList"),
                paragraph("type: `string[]`"),
            ]
        );
    }

    #[test]
    fn test_paragraph_keeps_inline_markup() {
        let tokens = lex("**Type:** `\"always\" | \"never\"`");
        assert_eq!(tokens, vec![paragraph("**Type:** `\"always\" | \"never\"`")]);
    }

    #[test]
    fn test_heading_keeps_brackets() {
        let tokens = lex("#### allowList[n]");
        assert_eq!(tokens, vec![heading(4, "allowList[n]")]);
    }

    #[test]
    fn test_nested_blocks_are_other() {
        let md = r#"Intro

- item one

  nested paragraph

> quoted

```json
{ "a": 1 }
```
"#;
        let tokens = lex(md);
        assert_eq!(
            tokens,
            vec![paragraph("Intro"), Token::Other, Token::Other, Token::Other]
        );
    }

    #[test]
    fn test_setext_heading() {
        let tokens = lex("Configuration\n-------------\n\nbody");
        assert_eq!(tokens, vec![heading(2, "Configuration"), paragraph("body")]);
    }

    #[test]
    fn test_empty_input() {
        assert!(lex("").is_empty());
    }

    #[test]
    fn test_heading_depth_accessor() {
        assert_eq!(heading(3, "x").heading_depth(), Some(3));
        assert_eq!(paragraph("x").heading_depth(), None);
        assert_eq!(Token::Other.heading_depth(), None);
    }
}
