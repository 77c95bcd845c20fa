/*!
 * Ordered rewrite rules turning inline Markdown into ASS override codes.
 *
 * Rules are not commutative: each one runs on the output of the previous
 * ones. Brace literals are cut out of the line before any rule runs and are
 * emitted without their braces; no rule ever sees their content.
 */

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

use super::scripts::SCRIPT_RANGES;

/// Monospace font for inline code spans
pub const CODE_FONT: &str = "Fira Code";

/// Inline code colour in ASS BGR notation (RGB B7F5F7)
pub const CODE_COLOUR: &str = "&HF7F5B7&";

/// A single pattern rewrite pass
#[derive(Debug)]
pub struct MarkupRule {
    /// Stable rule name
    pub name: &'static str,

    /// Pattern, matched globally and non-overlapping
    pub pattern: Regex,

    /// Replacement template in `regex` syntax (`${1}` etc.)
    pub template: String,
}

impl MarkupRule {
    fn new(name: &'static str, pattern: &str, template: impl Into<String>) -> Self {
        MarkupRule {
            name,
            pattern: Regex::new(pattern).unwrap_or_else(|e| panic!("Invalid pattern for rule {}: {}", name, e)),
            template: template.into(),
        }
    }

    /// Apply this rule to a whole line
    pub fn apply<'a>(&self, text: &'a str) -> Cow<'a, str> {
        self.pattern.replace_all(text, self.template.as_str())
    }
}

/// Brace literal, `{raw}` is emitted as `raw`
pub static BRACE_LITERAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{.*?\}").expect("Invalid brace literal regex"));

/// Run every rule, in order, over text that holds no brace literal
pub fn apply_rules(text: &str) -> String {
    MARKUP_RULES
        .iter()
        .fold(text.to_string(), |text, rule| rule.apply(&text).into_owned())
}

/// All markup rules in evaluation order
pub static MARKUP_RULES: Lazy<Vec<MarkupRule>> = Lazy::new(|| {
    let mut rules = vec![
        MarkupRule::new("bold", r"\*\*(.*?)\*\*", r"{\b1}${1}{\b0}"),
        // Legacy bold opener, only at a word boundary
        MarkupRule::new("bold_legacy", r"\b__(.*?)\*\*", r"{\b1}${1}{\b0}"),
        MarkupRule::new("italic", r"\*(.*?)\*", r"{\i1}${1}{\i0}"),
        // Underscores inside identifiers are not italics
        MarkupRule::new("italic_underscore", r"\b_(.+?)_\b", r"{\i1}${1}{\i0}"),
        MarkupRule::new("strikeout", r"~~(.*?)~~", r"{\s1}${1}{\s0}"),
        MarkupRule::new(
            "code",
            r"`(.*?)`",
            format!(r"{{\fn{}}}{{\c{}}}${{1}}{{\r}}", CODE_FONT, CODE_COLOUR),
        ),
    ];

    for script in SCRIPT_RANGES.iter() {
        rules.push(MarkupRule::new(
            script.name,
            &format!("({}+)", script.char_class()),
            format!(r"{{\fn{}}}${{1}}{{\r}}", script.font),
        ));
    }

    rules
});
