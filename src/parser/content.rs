//! Rule description extraction
//!
//! The description shown for a rule is the first paragraph following its
//! "What it does" heading. Block parsing is delegated to turbovault-parser,
//! which is code-block aware, so headings inside fenced examples never match.

use turbovault_parser::InlineElement;

use super::Block;
use super::utils::clean_text;
use crate::config::DescriptionConfig;

/// Parse markdown content into structured blocks.
///
/// # Arguments
///
/// * `markdown` - The markdown content to parse
/// * `start_line` - Starting line number for position tracking
pub fn parse_content(markdown: &str, start_line: usize) -> Vec<Block> {
    turbovault_parser::parse_blocks_from_line(markdown, start_line)
}

/// Extract a rule's description as plain text.
///
/// Finds the heading matching `config.heading` at `config.depth` and returns
/// the visible text of the first paragraph after it: link text without its
/// target, code spans without backticks, typographic spaces normalized.
/// Returns an empty string when either is missing.
///
/// # Examples
///
/// ```
/// use lintdoc::config::DescriptionConfig;
/// use lintdoc::parser::content::extract_description;
///
/// let md = "### What it does\n\nDisallows the use of debugger.\n";
/// assert_eq!(
///     extract_description(md, &DescriptionConfig::default()),
///     "Disallows the use of debugger."
/// );
/// ```
pub fn extract_description(markdown: &str, config: &DescriptionConfig) -> String {
    let blocks = parse_content(markdown, 0);

    let after_heading = blocks.iter().skip_while(|block| {
        !matches!(
            block,
            Block::Heading { level, content, .. }
                if *level as usize == config.depth && content.trim() == config.heading
        )
    });

    after_heading
        .skip(1)
        .find_map(|block| match block {
            Block::Paragraph { inline, .. } => Some(plain_text(inline)),
            _ => None,
        })
        .map(|text| clean_text(&text).trim().to_string())
        .unwrap_or_default()
}

/// Concatenate the rendered text of inline elements.
fn plain_text(inline: &[InlineElement]) -> String {
    inline.iter().map(InlineElement::to_plain_text).collect()
}
