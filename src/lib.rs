/*!
 * # mdsub - Markdown-annotated subtitles to ASS
 *
 * A Rust library for turning lightly Markdown-annotated SRT scripts into
 * styled Advanced SubStation Alpha subtitles.
 *
 * ## Features
 *
 * - Optional `# Title` heading used as the script title
 * - Lenient SRT-style block segmentation (malformed lines are skipped)
 * - Inline markup: `**bold**`, `*italic*`, `_italic_`, `~~strikeout~~`,
 *   `` `code` ``, `{literal}` and `// comment` lines
 * - Automatic font fallback for CJK text, including supplementary planes
 * - Configurable style row and script flags
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `subtitle_processor`: Cue segmentation state machine and cue document
 * - `markup`: Ordered markup rewrite rules and script classification:
 *   - `markup::rules`: Rewrite passes
 *   - `markup::scripts`: Codepoint ranges and fallback fonts
 * - `timecode`: SRT to ASS timestamp normalization
 * - `ass_writer`: Typed ASS document model and serializer
 * - `app_config`: Configuration management
 * - `file_utils`: File system operations
 * - `app_controller`: Main application controller
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod ass_writer;
pub mod errors;
pub mod file_utils;
pub mod markup;
pub mod subtitle_processor;
pub mod timecode;

// Re-export main types for easier usage
pub use app_config::{CommentPolicy, Config};
pub use app_controller::Controller;
pub use ass_writer::{AssDocument, AssWriter};
pub use errors::{ConfigError, SubtitleError};
pub use markup::MarkupTranslator;
pub use subtitle_processor::{Cue, CueDocument, CueParser};
pub use timecode::Timestamp;
