//! Batch generation of the aggregated rules file.
//!
//! The linter's rule listing (`--rules -f json`) names every rule with its
//! scope and documentation URL. Each rule's markdown page is read from a
//! local documentation tree laid out as `<docs_dir>/<scope>/<rule>.md`,
//! parsed, and collected into one [`RuleRecord`] per rule, in listing order.

use color_eyre::Result;
use color_eyre::eyre::WrapErr;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use crate::config::{Config, DescriptionConfig};
use crate::parser::{RuleDocParser, RuleRecord, extract_description};

/// One entry of the linter's rule listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleEntry {
    pub scope: String,
    /// Rule name
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default)]
    pub type_aware: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fix: Option<String>,
    /// Enabled by default
    #[serde(default)]
    pub default: bool,
    pub docs_url: String,
}

/// Parse a rule listing from JSON text.
pub fn parse_rules(json: &str) -> Result<Vec<RuleEntry>> {
    serde_json::from_str(json).wrap_err("invalid rule listing")
}

/// Read a rule listing from a file, or from stdin when `path` is `-`.
pub fn load_rules(path: &Path) -> Result<Vec<RuleEntry>> {
    let json = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .wrap_err("failed to read rule listing from stdin")?;
        buf
    } else {
        fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read rule listing {}", path.display()))?
    };
    parse_rules(&json)
}

/// Location of a rule's documentation page.
pub fn doc_path(docs_dir: &Path, rule: &RuleEntry) -> PathBuf {
    docs_dir.join(&rule.scope).join(format!("{}.md", rule.value))
}

/// Builds rule records from a documentation tree.
#[derive(Debug, Clone)]
pub struct Generator {
    parser: RuleDocParser,
    description: DescriptionConfig,
    docs_dir: PathBuf,
    skip_missing: bool,
}

impl Generator {
    pub fn new(config: &Config, docs_dir: impl Into<PathBuf>) -> Self {
        Self {
            parser: RuleDocParser::new(config.parser.clone()),
            description: config.description.clone(),
            docs_dir: docs_dir.into(),
            skip_missing: config.catalog.skip_missing,
        }
    }

    /// Build the record for one rule from its documentation source.
    pub fn record(&self, rule: &RuleEntry, markdown: &str) -> RuleRecord {
        RuleRecord {
            rule: rule.value.clone(),
            description: extract_description(markdown, &self.description),
            url: rule.docs_url.clone(),
            options: self.parser.parse(markdown),
        }
    }

    /// Build records for every rule in the listing.
    ///
    /// # Errors
    ///
    /// Fails on the first unreadable documentation page, unless missing
    /// pages are configured to be skipped.
    pub fn generate(&self, rules: &[RuleEntry]) -> Result<Vec<RuleRecord>> {
        let mut records = Vec::with_capacity(rules.len());

        for rule in rules {
            let path = doc_path(&self.docs_dir, rule);
            let markdown = match fs::read_to_string(&path) {
                Ok(markdown) => markdown,
                Err(err) if self.skip_missing && err.kind() == std::io::ErrorKind::NotFound => {
                    tracing::warn!(rule = %rule.value, path = %path.display(), "documentation missing, skipping");
                    continue;
                }
                Err(err) => {
                    return Err(err).wrap_err_with(|| {
                        format!("failed to read documentation for {}", rule.value)
                    });
                }
            };

            let record = self.record(rule, &markdown);
            tracing::info!(rule = %record.rule, options = record.options.has_options(), "parsed rule");
            records.push(record);
        }

        Ok(records)
    }
}

/// Serialize records as pretty-printed JSON.
pub fn to_json(records: &[RuleRecord]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Write records to `path` atomically, creating parent directories.
pub fn write_records(path: &Path, records: &[RuleRecord]) -> Result<()> {
    let json = to_json(records)?;

    let parent_dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)
        .wrap_err_with(|| format!("failed to create {}", parent_dir.display()))?;

    // Write to a temp file in the same directory, then rename over the target
    let mut temp_file =
        tempfile::NamedTempFile::new_in(parent_dir).wrap_err("failed to create temp file")?;
    temp_file
        .write_all(json.as_bytes())
        .wrap_err("failed to write temp file")?;
    temp_file.flush().wrap_err("failed to flush temp file")?;
    temp_file
        .persist(path)
        .wrap_err_with(|| format!("failed to save {}", path.display()))?;

    tracing::info!(path = %path.display(), rules = records.len(), "wrote rules file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING: &str = r#"[
        {
            "scope": "eslint",
            "value": "no-debugger",
            "category": "correctness",
            "type_aware": false,
            "fix": "fixable_suggestion",
            "default": true,
            "docs_url": "https://oxc.rs/docs/guide/usage/linter/rules/eslint/no-debugger.html"
        },
        {
            "scope": "unicorn",
            "value": "filename-case",
            "docs_url": "https://oxc.rs/docs/guide/usage/linter/rules/unicorn/filename-case.html"
        }
    ]"#;

    #[test]
    fn test_parse_rules() {
        let rules = parse_rules(LISTING).unwrap();
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0].category.as_deref(), Some("correctness"));
        assert!(rules[0].default);
        assert_eq!(rules[1].fix, None);
        assert!(!rules[1].type_aware);
    }

    #[test]
    fn test_parse_rules_rejects_garbage() {
        assert!(parse_rules("{ not json").is_err());
    }

    #[test]
    fn test_doc_path() {
        let rules = parse_rules(LISTING).unwrap();
        assert_eq!(
            doc_path(Path::new("docs"), &rules[1]),
            Path::new("docs").join("unicorn").join("filename-case.md")
        );
    }

    #[test]
    fn test_missing_doc_fails_by_default() {
        let dir = tempfile::tempdir().unwrap();
        let rules = parse_rules(LISTING).unwrap();
        let generator = Generator::new(&Config::default(), dir.path());

        let err = generator.generate(&rules).unwrap_err();
        assert!(format!("{err}").contains("no-debugger"));
    }

    #[test]
    fn test_missing_doc_skipped_when_configured() {
        let dir = tempfile::tempdir().unwrap();
        let scope = dir.path().join("unicorn");
        fs::create_dir_all(&scope).unwrap();
        fs::write(
            scope.join("filename-case.md"),
            "### What it does\n\nEnforces a case style for filenames.\n",
        )
        .unwrap();

        let mut config = Config::default();
        config.catalog.skip_missing = true;
        let rules = parse_rules(LISTING).unwrap();
        let records = Generator::new(&config, dir.path()).generate(&rules).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].rule, "filename-case");
        assert_eq!(records[0].description, "Enforces a case style for filenames.");
        assert!(!records[0].options.has_options());
    }

    #[test]
    fn test_write_records_replaces_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("rules.json");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "stale").unwrap();

        write_records(&path, &[]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
    }
}
