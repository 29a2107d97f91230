//! Configuration section isolation and option tree construction.
//!
//! Options are documented as nested headings under the configuration
//! section, each optionally followed by `type:` and `default:` paragraphs.
//! The heading hierarchy is rebuilt with an explicit stack of open nodes held
//! in an [`indextree`] arena, then materialized into owned [`ConfigNode`]s.

use indextree::{Arena, NodeId};
use serde_json::Value;

use super::tokens::Token;
use super::utils::normalize_label;
use super::value::parse_value;

/// One documented option.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigNode {
    /// Trimmed heading text (e.g. `allowList`, `1st option`, `loc.x`)
    pub name: String,
    /// Heading level
    pub depth: usize,
    /// Free-text annotation from a `type:` paragraph
    pub type_annotation: Option<String>,
    /// Parsed value of a `default:` paragraph
    pub default: Option<Value>,
    /// Sub-options, in document order
    pub children: Vec<ConfigNode>,
}

impl ConfigNode {
    pub fn new(name: &str, depth: usize) -> Self {
        Self {
            name: name.trim().to_string(),
            depth,
            ..Self::default()
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Apply a `type:` or `default:` paragraph to this node.
    ///
    /// A default is read with whatever type is known when it is seen, so the
    /// `type:` paragraph has to come first.
    fn annotate(&mut self, paragraph: &str) {
        let text = normalize_label(paragraph.trim());

        if let Some(rest) = strip_label(&text, "type:") {
            self.type_annotation = Some(rest.trim().to_string());
        }
        if let Some(rest) = strip_label(&text, "default:") {
            self.default = parse_value(rest.trim(), self.type_annotation.as_deref());
        }
    }
}

/// Case-insensitive prefix match returning the remainder.
fn strip_label<'a>(text: &'a str, label: &str) -> Option<&'a str> {
    let head = text.get(..label.len())?;
    head.eq_ignore_ascii_case(label)
        .then(|| &text[label.len()..])
}

/// Tokens between the section heading and the next heading of the same depth.
///
/// Returns an empty slice when the document has no such heading.
pub fn extract_section<'a>(tokens: &'a [Token], heading: &str, depth: usize) -> &'a [Token] {
    let start = tokens.iter().position(|token| {
        matches!(token, Token::Heading { depth: d, text } if *d == depth && text.trim() == heading)
    });
    let Some(start) = start else {
        return &[];
    };

    let body = &tokens[start + 1..];
    let end = body
        .iter()
        .position(|token| token.heading_depth() == Some(depth))
        .unwrap_or(body.len());
    &body[..end]
}

/// Rebuild the option hierarchy from a section's tokens.
///
/// A heading closes every open heading at the same or a deeper level; it
/// becomes a child of whatever remains open, or a root. Paragraphs annotate
/// the innermost open heading and are ignored before the first heading.
pub fn build_tree(tokens: &[Token]) -> Vec<ConfigNode> {
    let mut arena: Arena<ConfigNode> = Arena::new();
    let mut stack: Vec<NodeId> = Vec::new();
    let mut roots: Vec<NodeId> = Vec::new();

    for token in tokens {
        match token {
            Token::Heading { depth, text } => {
                while stack
                    .last()
                    .is_some_and(|open| arena[*open].get().depth >= *depth)
                {
                    stack.pop();
                }

                let id = arena.new_node(ConfigNode::new(text, *depth));
                match stack.last() {
                    Some(&parent) => parent.append(id, &mut arena),
                    None => roots.push(id),
                }
                stack.push(id);
            }
            Token::Paragraph { text } => {
                if let Some(&current) = stack.last() {
                    arena[current].get_mut().annotate(text);
                }
            }
            Token::Other => {}
        }
    }

    roots
        .into_iter()
        .map(|id| materialize(&mut arena, id))
        .collect()
}

fn materialize(arena: &mut Arena<ConfigNode>, id: NodeId) -> ConfigNode {
    let children: Vec<NodeId> = id.children(arena).collect();
    let mut node = std::mem::take(arena[id].get_mut());
    node.children = children
        .into_iter()
        .map(|child| materialize(arena, child))
        .collect();
    node
}
