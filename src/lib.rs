//! # lintdoc
//!
//! Derive configuration schemas and default options from lint rule documentation.
//!
//! Lint rules often document their options only in prose: a `## Configuration`
//! section with one heading per option, each followed by `type:` and `default:`
//! lines. This library reads that prose back into a JSON-Schema-like structure
//! and the default argument list a configuration example would pass.
//!
//! ## Features
//!
//! - Named-property and positional (`1st option`, `2nd option`) rule options
//! - Nested options from heading depth or dotted names (`loc.x`)
//! - Homogeneous arrays documented as `name[n]`
//! - String enums from quoted unions (`"always" | "never"`)
//! - Batch generation of a rules file from a documentation tree
//!
//! ## Example
//!
//! ```rust
//! use lintdoc::parse_rule_doc;
//!
//! let markdown = "## Configuration\n\n### allowCall\n\ntype: `boolean`\n\ndefault: `false`\n";
//!
//! let doc = parse_rule_doc(markdown);
//! let json = serde_json::to_value(&doc).unwrap();
//! assert_eq!(json["schema"]["properties"]["allowCall"]["type"], "boolean");
//! assert_eq!(json["defaultOptions"][0]["allowCall"], false);
//! ```

/// Configuration module for documentation conventions and batch settings.
pub mod config;

/// Parser module for rule documentation.
///
/// Provides the option extractor, the schema model and description extraction.
pub mod parser;

/// Batch generation of the aggregated rules file.
pub mod catalog;

// Re-export commonly used types for convenience
pub use config::Config;
pub use parser::{JsonSchema, ParsedRuleDoc, RuleDocParser, RuleRecord, parse_file, parse_rule_doc};
