/*!
 * Tests for inline markup translation
 */

use mdsub::markup::{classify, MarkupTranslator, SCRIPT_RANGES};
use mdsub::{CommentPolicy, CueParser};

const OVERRIDE_CODES: [&str; 8] = [r"{\b1}", r"{\i1}", r"{\s1}", r"{\fn", r"{\c", r"{\r}", r"{\b0}", r"{\i0}"];

/// Test the documented bold/italic example
#[test]
fn test_translate_withBoldAndItalic_shouldMatchExample() {
    assert_eq!(
        MarkupTranslator::translate("**bold** and *italic* text"),
        r"{\b1}bold{\b0} and {\i1}italic{\i0} text"
    );
}

/// Test that brace literals lose their braces and are not re-wrapped
#[test]
fn test_translate_withBraceLiteral_shouldPassThrough() {
    let out = MarkupTranslator::translate(r"{\k100}raw");
    assert_eq!(out, r"\k100raw");
    assert!(!out.contains('{'));
}

/// Test that markup and CJK text inside braces survive untouched
#[test]
fn test_translate_withMarkupAndHanInsideBraces_shouldEmitContentVerbatim() {
    assert_eq!(MarkupTranslator::translate(r"{**raw**}"), "**raw**");
    assert_eq!(MarkupTranslator::translate("{_a_}"), "_a_");
    assert_eq!(MarkupTranslator::translate(r"{\fn微软雅黑}x"), r"\fn微软雅黑x");
    assert_eq!(
        MarkupTranslator::translate(r"{\fn微软雅黑}你好 `x` {~~y~~}"),
        r"\fn微软雅黑{\fnGlowSansSC Normal Medium}你好{\r} {\fnFira Code}{\c&HF7F5B7&}x{\r} ~~y~~"
    );
}

/// Test that override codes emitted by one rule are not matched by a later one
#[test]
fn test_translate_withAllConstructs_shouldNotCorruptEarlierCodes() {
    let out = MarkupTranslator::translate("**a** *b* _c_ ~~d~~ `e` 中");
    assert_eq!(
        out,
        r"{\b1}a{\b0} {\i1}b{\i0} {\i1}c{\i0} {\s1}d{\s0} {\fnFira Code}{\c&HF7F5B7&}e{\r} {\fnGlowSansSC Normal Medium}中{\r}"
    );
}

/// Test the legacy bold opener
#[test]
fn test_translate_withLegacyBold_shouldWrapBold() {
    assert_eq!(
        MarkupTranslator::translate("a __loud** b"),
        r"a {\b1}loud{\b0} b"
    );
}

/// Test that identifiers with underscores are left alone
#[test]
fn test_translate_withSnakeCase_shouldNotItalicize() {
    assert_eq!(MarkupTranslator::translate("use my_var_name"), "use my_var_name");
}

/// Test that every script run is wrapped exactly once
#[test]
fn test_translate_withPureScriptRuns_shouldWrapOnceEach() {
    for script in SCRIPT_RANGES.iter() {
        for &(lo, hi) in script.ranges {
            let run: String = [lo, hi, lo].iter().collect();
            let out = MarkupTranslator::translate(&run);
            assert_eq!(out, format!("{{\\fn{}}}{}{{\\r}}", script.font, run), "script {}", script.name);
            assert_eq!(classify(lo).map(|s| s.name), Some(script.name));
        }
    }
}

/// Test that comment lines never carry override codes
#[test]
fn test_commentLine_withMarkup_shouldNeverContainOverrideCodes() {
    let body_line = "// **bold** *it* ~~s~~ `c` 中文 {\\b1}";
    for policy in [CommentPolicy::Strip, CommentPolicy::Passthrough] {
        let content = format!("1\n00:00:01,000 --> 00:00:02,000\n{}\n", body_line);
        let doc = CueParser::new("T", "Plain", policy).parse_str(&content);
        let body = &doc.cues[0].body;
        for code in OVERRIDE_CODES {
            assert!(!body.contains(code), "{:?} leaked {} into {:?}", policy, code, body);
        }
    }
}
