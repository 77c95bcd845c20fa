/*!
 * Inline markup translation.
 *
 * Rewrites the small Markdown subset accepted in subtitle scripts into ASS
 * override codes and wraps CJK runs in fallback-font overrides.
 *
 * - `rules`: the ordered rewrite passes
 * - `scripts`: codepoint classification tables
 */

pub mod rules;
pub mod scripts;

pub use rules::{MarkupRule, BRACE_LITERAL, MARKUP_RULES};
pub use scripts::{classify, ScriptRange, SCRIPT_RANGES};

/// Marker opening an author-facing comment line
pub const COMMENT_MARKER: &str = "//";

/// Translates body lines of a subtitle script
pub struct MarkupTranslator;

impl MarkupTranslator {
    /// Translate a single raw body line.
    ///
    /// Brace literals are copied out verbatim minus their braces; the rules
    /// run on the text between them. Must be applied exactly once per line:
    /// the output contains brace override codes that a second pass would
    /// treat as literals.
    pub fn translate(line: &str) -> String {
        let mut out = String::with_capacity(line.len());
        let mut last = 0;

        for literal in BRACE_LITERAL.find_iter(line) {
            out.push_str(&rules::apply_rules(&line[last..literal.start()]));
            // Braces are single-byte
            out.push_str(&line[literal.start() + 1..literal.end() - 1]);
            last = literal.end();
        }
        out.push_str(&rules::apply_rules(&line[last..]));

        out
    }

    /// Names of the rules in the order they are applied outside literals
    pub fn rule_names() -> Vec<&'static str> {
        MARKUP_RULES.iter().map(|rule| rule.name).collect()
    }
}

/// Return the comment text if `line` is a comment line.
///
/// The marker must start the line; one space after it is dropped too.
pub fn comment_text(line: &str) -> Option<&str> {
    let rest = line.strip_prefix(COMMENT_MARKER)?;
    Some(rest.strip_prefix(' ').unwrap_or(rest))
}
