//! Rule documentation parsing.
//!
//! This module turns a lint rule's markdown documentation into a
//! configuration schema and default options, and pulls the rule's short
//! description out of the same page.
//!
//! Option extraction tokenizes with `pulldown-cmark` so annotations keep
//! their inline markup; description extraction is delegated to
//! `turbovault-parser` block parsing.

pub mod content;
pub mod output;
pub mod rule_doc;
pub mod schema;
pub mod tokens;
pub mod tree;
pub mod types;
pub mod utils;
pub mod value;

pub use content::extract_description;
pub use output::{ParsedRuleDoc, RuleRecord};
pub use rule_doc::{RuleDocParser, is_tuple_rule};
pub use schema::{JsonSchema, SchemaItems, SchemaType};
pub use tokens::{Token, lex};
pub use tree::ConfigNode;
pub use types::TypeAnnotation;

pub(crate) use turbovault_parser::ContentBlock as Block;

use std::path::Path;

/// Parse a rule documentation file with the default conventions.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn parse_file(path: &Path) -> std::io::Result<ParsedRuleDoc> {
    let content = std::fs::read_to_string(path)?;
    Ok(parse_rule_doc(&content))
}

/// Parse rule documentation with the default conventions.
///
/// # Examples
///
/// ```
/// use lintdoc::parse_rule_doc;
///
/// let doc = parse_rule_doc("## Configuration\n\n### allow\n\ntype: `string`\n");
/// assert!(doc.has_options());
/// assert!(doc.default_options.is_empty());
/// ```
pub fn parse_rule_doc(markdown: &str) -> ParsedRuleDoc {
    RuleDocParser::default().parse(markdown)
}
