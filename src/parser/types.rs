//! The type annotation lexicon.
//!
//! Option documentation states its type as free text (`type: \`boolean\``,
//! `type: \`"always" | "never"\``, `type: \`Record<string, string>\``). The
//! handful of spellings the extractor understands are modeled as a closed
//! enum; everything else is [`TypeAnnotation::Unknown`].

use regex::Regex;
use std::sync::OnceLock;

use super::schema::{JsonSchema, SchemaType};

/// A recognized option type annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeAnnotation {
    Boolean,
    String,
    Number,
    Integer,
    Object,
    Array,
    /// `Record<K, V>`
    Record,
    /// `T[]` or a bare `[]`
    List,
    /// Anything containing `|`, with its quoted string literals in order of appearance
    Union(Vec<String>),
    Unknown,
}

impl TypeAnnotation {
    /// Classify a raw annotation, ignoring inline-code backticks and surrounding whitespace.
    ///
    /// # Examples
    ///
    /// ```
    /// use lintdoc::parser::types::TypeAnnotation;
    ///
    /// assert_eq!(TypeAnnotation::parse("`boolean`"), TypeAnnotation::Boolean);
    /// assert_eq!(
    ///     TypeAnnotation::parse(r#"`"always" | "never"`"#),
    ///     TypeAnnotation::Union(vec!["always".into(), "never".into()])
    /// );
    /// ```
    pub fn parse(raw: &str) -> Self {
        let text = strip_code(raw);
        let text = text.trim();

        if text.contains('|') {
            return TypeAnnotation::Union(quoted_literals(text));
        }

        match text {
            "boolean" => TypeAnnotation::Boolean,
            "string" => TypeAnnotation::String,
            "number" => TypeAnnotation::Number,
            "integer" => TypeAnnotation::Integer,
            "object" => TypeAnnotation::Object,
            "array" => TypeAnnotation::Array,
            t if t.starts_with("Record<") => TypeAnnotation::Record,
            t if t.ends_with("[]") => TypeAnnotation::List,
            _ => TypeAnnotation::Unknown,
        }
    }

    /// Whether a default written under this annotation is a JSON collection literal.
    pub fn is_collection(&self) -> bool {
        matches!(
            self,
            TypeAnnotation::Array
                | TypeAnnotation::Object
                | TypeAnnotation::Record
                | TypeAnnotation::List
        )
    }

    /// Schema for an option that has no documented sub-options.
    ///
    /// Unions become string enums when they name at least one quoted literal.
    /// Record types, `T[]` spellings and unknown text stay unconstrained.
    pub fn leaf_schema(&self) -> JsonSchema {
        match self {
            TypeAnnotation::Boolean => JsonSchema::of(SchemaType::Boolean),
            TypeAnnotation::String => JsonSchema::of(SchemaType::String),
            TypeAnnotation::Number => JsonSchema::of(SchemaType::Number),
            TypeAnnotation::Integer => JsonSchema::of(SchemaType::Integer),
            TypeAnnotation::Object => JsonSchema::of(SchemaType::Object),
            TypeAnnotation::Array => JsonSchema::of(SchemaType::Array),
            TypeAnnotation::Union(literals) if !literals.is_empty() => {
                JsonSchema::string_enum(literals.clone())
            }
            TypeAnnotation::Union(_)
            | TypeAnnotation::Record
            | TypeAnnotation::List
            | TypeAnnotation::Unknown => JsonSchema::empty(),
        }
    }
}

/// Remove every inline-code backtick.
pub(crate) fn strip_code(text: &str) -> String {
    text.replace('`', "")
}

fn quoted_literals(text: &str) -> Vec<String> {
    static QUOTED: OnceLock<Regex> = OnceLock::new();
    let re = QUOTED.get_or_init(|| Regex::new(r#""([^"]+)""#).unwrap());

    re.captures_iter(text)
        .filter_map(|cap| cap.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}
