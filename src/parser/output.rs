//! JSON output types for extracted rule options
//!
//! Field names follow the camelCase layout consumed by the rules viewer.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::schema::JsonSchema;

/// Schema and default options extracted from one rule's documentation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedRuleDoc {
    pub schema: JsonSchema,
    /// Argument list an example configuration would pass to the rule
    #[serde(rename = "defaultOptions")]
    pub default_options: Vec<Value>,
}

impl ParsedRuleDoc {
    /// Result for documentation without a configuration section
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn has_options(&self) -> bool {
        !self.schema.is_empty()
    }
}

/// One rule in the aggregated rules file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleRecord {
    /// Rule identifier
    pub rule: String,
    /// First paragraph of the rule's description
    pub description: String,
    /// Link to the rule's documentation page
    pub url: String,
    pub options: ParsedRuleDoc,
}
