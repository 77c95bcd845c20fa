use std::fmt;

use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::app_config::{CommentPolicy, Config};
use crate::markup::{self, MarkupTranslator};
use crate::timecode::{self, Timestamp};

// @module: Segmentation of annotated subtitle scripts into cues

// @const: Title heading on the first line
static HEADING_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^#\s+(\S.*?)\s*$").unwrap()
});

/// ASS hard line break used between body lines
pub const LINE_BREAK: &str = r"\N";

/// Title used when the script has no heading line
pub const DEFAULT_TITLE: &str = "Mdsub Default Title";

// @struct: One finished subtitle cue
#[derive(Debug, Clone, PartialEq)]
pub struct Cue {
    // @field: Start time
    pub start: Timestamp,

    // @field: End time
    pub end: Timestamp,

    // @field: Style the cue is rendered with
    pub style_name: String,

    // @field: Translated body, lines joined with LINE_BREAK
    pub body: String,

    // @field: Comment lines of the block, marker stripped
    pub comments: Vec<String>,
}

impl fmt::Display for Cue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{} --> {}] {}", self.start, self.end, self.body)
    }
}

/// Title and cues of a converted script, in input order
#[derive(Debug, Clone, PartialEq)]
pub struct CueDocument {
    /// Document title
    pub title: String,

    /// Cues in the order they appeared
    pub cues: Vec<Cue>,
}

impl CueDocument {
    /// Create an empty document
    pub fn new(title: impl Into<String>) -> Self {
        CueDocument {
            title: title.into(),
            cues: Vec::new(),
        }
    }

    /// Append a cue; no reordering or deduplication is done
    pub fn push(&mut self, cue: Cue) {
        self.cues.push(cue);
    }

    pub fn len(&self) -> usize {
        self.cues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cues.is_empty()
    }
}

impl fmt::Display for CueDocument {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Cue Document")?;
        writeln!(f, "Title: {}", self.title)?;
        writeln!(f, "Cues: {}", self.cues.len())?;
        Ok(())
    }
}

/// Phase of the segmentation state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseState {
    /// Nothing read yet; the first line may be a title heading
    Init,
    /// Title consumed, expecting the blank line that opens the first block
    AwaitBlank,
    /// Between blocks, expecting a cue index
    AwaitIndex,
    /// Index read, expecting the timecode line
    AwaitTimecode,
    /// Timecode read, expecting the first body line
    BodyFirst,
    /// Inside the body of a cue
    BodyContinue,
}

// Cue under construction
#[derive(Debug)]
struct PendingCue {
    start: Timestamp,
    end: Timestamp,
    lines: Vec<String>,
    comments: Vec<String>,
}

/// Line-oriented parser turning a script into a [`CueDocument`]
#[derive(Debug)]
pub struct CueParser {
    state: ParseState,
    document: CueDocument,
    pending: Option<PendingCue>,
    style_name: String,
    comment_policy: CommentPolicy,
    line_number: usize,
    skipped_lines: usize,
}

impl CueParser {
    /// Create a parser.
    ///
    /// `default_title` is used when the first line is not a heading.
    pub fn new(default_title: &str, style_name: &str, comment_policy: CommentPolicy) -> Self {
        CueParser {
            state: ParseState::Init,
            document: CueDocument::new(default_title),
            pending: None,
            style_name: style_name.to_string(),
            comment_policy,
            line_number: 0,
            skipped_lines: 0,
        }
    }

    /// Create a parser from the application configuration
    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.default_title, &config.style.name, config.comment_policy)
    }

    /// Current state, mainly for diagnostics and tests
    pub fn state(&self) -> ParseState {
        self.state
    }

    /// Feed one raw line (line terminator optional)
    pub fn feed_line(&mut self, line: &str) {
        self.line_number += 1;
        let line = line.trim_end_matches(['\n', '\r']);

        if self.state == ParseState::Init {
            let first = line.strip_prefix('\u{feff}').unwrap_or(line);
            if let Some(caps) = HEADING_REGEX.captures(first) {
                self.document.title = caps[1].to_string();
                debug!("Script title: {}", self.document.title);
                self.state = ParseState::AwaitBlank;
                return;
            }

            debug!("No title heading, using '{}'", self.document.title);
            // Re-read the same line as ordinary content
            self.state = ParseState::AwaitIndex;
            self.feed_content_line(first);
            return;
        }

        self.feed_content_line(line);
    }

    fn feed_content_line(&mut self, line: &str) {
        if line.trim().is_empty() {
            self.flush();
            self.state = ParseState::AwaitIndex;
            return;
        }

        match self.state {
            ParseState::Init | ParseState::AwaitBlank | ParseState::AwaitIndex => {
                if is_index_line(line) {
                    self.state = ParseState::AwaitTimecode;
                } else {
                    self.skip_line(line);
                }
            }
            ParseState::AwaitTimecode => match timecode::parse_timecode_line(line) {
                Some(Ok((start, end))) => {
                    self.pending = Some(PendingCue {
                        start,
                        end,
                        lines: Vec::new(),
                        comments: Vec::new(),
                    });
                    self.state = ParseState::BodyFirst;
                }
                Some(Err(e)) => {
                    warn!("Line {}: unusable timecode, waiting for another: {}", self.line_number, e);
                    self.skipped_lines += 1;
                }
                None => self.skip_line(line),
            },
            ParseState::BodyFirst | ParseState::BodyContinue => {
                self.push_body_line(line);
                self.state = ParseState::BodyContinue;
            }
        }
    }

    fn skip_line(&mut self, line: &str) {
        debug!("Line {}: ignoring '{}' in state {:?}", self.line_number, line, self.state);
        self.skipped_lines += 1;
    }

    fn push_body_line(&mut self, line: &str) {
        let policy = self.comment_policy;
        let Some(pending) = self.pending.as_mut() else {
            return;
        };
        let line = line.trim_end();

        match markup::comment_text(line) {
            Some(comment) => {
                pending.comments.push(comment.to_string());
                if policy == CommentPolicy::Passthrough {
                    pending.lines.push(escape_braces(comment));
                }
            }
            None => pending.lines.push(MarkupTranslator::translate(line)),
        }
    }

    fn flush(&mut self) {
        let Some(pending) = self.pending.take() else {
            return;
        };

        let cue = Cue {
            start: pending.start,
            end: pending.end,
            style_name: self.style_name.clone(),
            body: pending.lines.join(LINE_BREAK),
            comments: pending.comments,
        };
        debug!("Cue {}: {}", self.document.len() + 1, cue);
        self.document.push(cue);
    }

    /// Finish parsing, flushing a cue left open at end of input
    pub fn finish(mut self) -> CueDocument {
        self.flush();
        if self.skipped_lines > 0 {
            debug!("Skipped {} line(s) outside of cue blocks", self.skipped_lines);
        }
        self.document
    }

    /// Parse a whole script
    pub fn parse_str(mut self, content: &str) -> CueDocument {
        for line in content.lines() {
            self.feed_line(line);
        }
        self.finish()
    }
}

/// A cue index is a line made only of ASCII digits
fn is_index_line(line: &str) -> bool {
    let trimmed = line.trim();
    !trimmed.is_empty() && trimmed.bytes().all(|b| b.is_ascii_digit())
}

// Comment text is shown literally; braces would otherwise open override blocks
fn escape_braces(text: &str) -> String {
    text.replace('{', r"\{").replace('}', r"\}")
}
