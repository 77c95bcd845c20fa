/*!
 * SRT to ASS timecode normalization.
 *
 * SRT timestamps carry milliseconds (`HH:MM:SS,mmm`) while ASS uses
 * centiseconds (`H:MM:SS.cc`). The conversion works on the digits as text:
 * one leading `0` is dropped from the hour field and the last millisecond
 * digit is dropped. Nothing is rounded and the hour field is never parsed,
 * so any number of hour digits is accepted.
 */

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::SubtitleError;

// @const: SRT timecode line, hours may be empty or have any number of digits
static TIMECODE_LINE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(\d*):(\d{2}):(\d{2}),(\d{3})\s*-->\s*(\d*):(\d{2}):(\d{2}),(\d{3})")
        .expect("Invalid timecode line regex")
});

/// A point in time at ASS precision
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Timestamp {
    /// Hour digits as written in the output, never empty
    pub hours: String,
    pub minutes: u8,
    pub seconds: u8,
    pub centiseconds: u8,
}

impl Timestamp {
    /// Build a timestamp from the textual fields of an SRT timecode.
    ///
    /// `hours` may hold any number of digits; one leading `0` is dropped and
    /// an hour field left empty renders as `0`. `millis` must be three
    /// digits; its least significant digit is dropped.
    pub fn from_srt_fields(
        hours: &str,
        minutes: &str,
        seconds: &str,
        millis: &str,
    ) -> Result<Self, SubtitleError> {
        if !hours.bytes().all(|b| b.is_ascii_digit()) {
            return Err(SubtitleError::InvalidTimecode {
                component: "hours",
                value: hours.to_string(),
            });
        }
        let hours = match hours.strip_prefix('0').unwrap_or(hours) {
            "" => "0".to_string(),
            kept => kept.to_string(),
        };

        let minutes: u8 = parse_field("minutes", minutes)?;
        let seconds: u8 = parse_field("seconds", seconds)?;
        let millis: u16 = parse_field("milliseconds", millis)?;

        if millis >= 1000 {
            return Err(SubtitleError::InvalidTimecode {
                component: "milliseconds",
                value: millis.to_string(),
            });
        }

        Ok(Timestamp {
            hours,
            minutes,
            seconds,
            // Truncate, e.g. 259 -> 25
            centiseconds: (millis / 10) as u8,
        })
    }
}

fn parse_field<T: std::str::FromStr>(component: &'static str, value: &str) -> Result<T, SubtitleError> {
    value.parse().map_err(|_| SubtitleError::InvalidTimecode {
        component,
        value: value.to_string(),
    })
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{:02}:{:02}.{:02}",
            self.hours, self.minutes, self.seconds, self.centiseconds
        )
    }
}

/// Check whether a line has the shape of an SRT timecode line
pub fn is_timecode_line(line: &str) -> bool {
    TIMECODE_LINE_REGEX.is_match(line)
}

/// Parse an SRT timecode line (`H*:MM:SS,mmm --> H*:MM:SS,mmm`).
///
/// Returns `None` when the line does not look like a timecode at all, and
/// `Some(Err(..))` when it does but a field cannot be represented.
pub fn parse_timecode_line(line: &str) -> Option<Result<(Timestamp, Timestamp), SubtitleError>> {
    let caps = TIMECODE_LINE_REGEX.captures(line)?;
    let field = |i: usize| caps.get(i).map_or("", |m| m.as_str());

    let range = Timestamp::from_srt_fields(field(1), field(2), field(3), field(4)).and_then(|start| {
        Timestamp::from_srt_fields(field(5), field(6), field(7), field(8)).map(|end| (start, end))
    });

    Some(range)
}
