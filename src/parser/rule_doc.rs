//! The rule documentation parser.
//!
//! Turns one rule's documentation page into a [`ParsedRuleDoc`]:
//! tokenize, isolate the configuration section, rebuild the option tree,
//! then emit either a positional (tuple) schema or a named-property
//! (object) schema together with the default options.
//!
//! Documentation that does not follow the expected layout degrades to an
//! empty schema or absent defaults; parsing never fails.

use indexmap::IndexMap;
use serde_json::{Map, Value};

use super::output::ParsedRuleDoc;
use super::schema::{JsonSchema, SchemaItems, build_default, build_schema};
use super::tokens::{Token, lex};
use super::tree::{ConfigNode, build_tree, extract_section};
use crate::config::ParserConfig;

/// Whether top-level options are positional arguments (`1st option`, `2nd option`, ...).
pub fn is_tuple_rule(roots: &[ConfigNode], marker: &str) -> bool {
    roots.iter().any(|node| node.name.contains(marker))
}

/// Extracts option schemas from rule documentation.
#[derive(Debug, Clone, Default)]
pub struct RuleDocParser {
    config: ParserConfig,
}

impl RuleDocParser {
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Parse a documentation page from its markdown source.
    pub fn parse(&self, markdown: &str) -> ParsedRuleDoc {
        self.parse_tokens(&lex(markdown))
    }

    /// Parse an already tokenized documentation page.
    pub fn parse_tokens(&self, tokens: &[Token]) -> ParsedRuleDoc {
        let section = extract_section(
            tokens,
            &self.config.section_heading,
            self.config.section_depth,
        );
        if section.is_empty() {
            tracing::debug!("no configuration section");
            return ParsedRuleDoc::empty();
        }

        let roots = build_tree(section);
        if is_tuple_rule(&roots, &self.config.tuple_marker) {
            tracing::debug!(options = roots.len(), "positional options");
            tuple_doc(&roots)
        } else {
            tracing::debug!(options = roots.len(), "named options");
            object_doc(&roots)
        }
    }
}

/// One schema slot per positional option; defaults skip options without one.
fn tuple_doc(roots: &[ConfigNode]) -> ParsedRuleDoc {
    let items = roots.iter().map(build_schema).collect();
    let default_options = roots.iter().filter_map(build_default).collect();

    ParsedRuleDoc {
        schema: JsonSchema::array(SchemaItems::Tuple(items)),
        default_options,
    }
}

/// One property per option; defaults form a single options object.
fn object_doc(roots: &[ConfigNode]) -> ParsedRuleDoc {
    let mut properties = IndexMap::new();
    let mut defaults = Map::new();

    for node in roots {
        properties.insert(node.name.clone(), build_schema(node));
        if let Some(value) = build_default(node) {
            defaults.insert(node.name.clone(), value);
        }
    }

    let default_options = if defaults.is_empty() {
        Vec::new()
    } else {
        vec![Value::Object(defaults)]
    };

    ParsedRuleDoc {
        schema: JsonSchema::object(properties),
        default_options,
    }
}
