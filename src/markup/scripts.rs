/*!
 * Unicode script classification for font fallback.
 *
 * Each entry of [`SCRIPT_RANGES`] is a set of codepoints that the default
 * subtitle font cannot render and that must be wrapped in a font override.
 * The sets are pairwise disjoint and never contain ASCII, so one script
 * pass can never match override codes emitted by another.
 */

/// A named set of codepoint ranges sharing a fallback font
#[derive(Debug)]
pub struct ScriptRange {
    /// Rule name used in logs and rule listings
    pub name: &'static str,

    /// Inclusive codepoint ranges
    pub ranges: &'static [(char, char)],

    /// Font selected with `\fn` for runs of this script
    pub font: &'static str,
}

impl ScriptRange {
    /// Check whether a codepoint belongs to this script set
    pub fn contains(&self, c: char) -> bool {
        self.ranges.iter().any(|&(lo, hi)| lo <= c && c <= hi)
    }

    /// Regex character class matching exactly this set, e.g. `[\x{3400}-\x{4DBF}]`
    pub fn char_class(&self) -> String {
        let mut class = String::from("[");
        for &(lo, hi) in self.ranges {
            if lo == hi {
                class.push_str(&format!("\\x{{{:X}}}", lo as u32));
            } else {
                class.push_str(&format!("\\x{{{:X}}}-\\x{{{:X}}}", lo as u32, hi as u32));
            }
        }
        class.push(']');
        class
    }
}

/// Font used for simplified Chinese and its extension blocks
pub const HAN_FONT: &str = "GlowSansSC Normal Medium";

/// Font used for CJK Extension G, which the Han font does not cover
pub const HAN_EXT_G_FONT: &str = "TH-Tshyn-P1";

/// Script sets in the order their passes run
pub static SCRIPT_RANGES: [ScriptRange; 4] = [
    // CJK unified ideographs plus CJK and full-width punctuation
    ScriptRange {
        name: "han",
        ranges: &[
            ('\u{2014}', '\u{2014}'),
            ('\u{2026}', '\u{2026}'),
            ('\u{3001}', '\u{3002}'),
            ('\u{3007}', '\u{3011}'),
            ('\u{3014}', '\u{301B}'),
            ('\u{30FB}', '\u{30FB}'),
            ('\u{4E00}', '\u{9FA5}'),
            ('\u{FF01}', '\u{FF65}'),
        ],
        font: HAN_FONT,
    },
    // Extension A, late additions to the unified block, compatibility ideographs
    ScriptRange {
        name: "han_rare",
        ranges: &[
            ('\u{3400}', '\u{4DBF}'),
            ('\u{9FA6}', '\u{9FFC}'),
            ('\u{FA0E}', '\u{FA0F}'),
            ('\u{FA11}', '\u{FA11}'),
            ('\u{FA13}', '\u{FA14}'),
            ('\u{FA1F}', '\u{FA1F}'),
            ('\u{FA21}', '\u{FA21}'),
            ('\u{FA23}', '\u{FA24}'),
            ('\u{FA27}', '\u{FA29}'),
        ],
        font: HAN_FONT,
    },
    ScriptRange {
        name: "han_ext_b",
        ranges: &[('\u{20000}', '\u{2A6DF}')],
        font: HAN_FONT,
    },
    ScriptRange {
        name: "han_ext_g",
        ranges: &[('\u{30000}', '\u{3134F}')],
        font: HAN_EXT_G_FONT,
    },
];

/// Find the script set a codepoint belongs to, if any
pub fn classify(c: char) -> Option<&'static ScriptRange> {
    SCRIPT_RANGES.iter().find(|script| script.contains(c))
}
