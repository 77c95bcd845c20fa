/*!
 * Typed ASS (Advanced SubStation Alpha v4+) document model and writer.
 *
 * A converted script is turned into an [`AssDocument`] once and then
 * serialized by [`AssWriter`]; nothing else in the crate knows the section
 * layout of the output format.
 */

use std::fmt;
use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::app_config::ScriptInfoConfig;
use crate::errors::ConfigError;
use crate::subtitle_processor::{Cue, CueDocument};
use crate::timecode::Timestamp;

/// Column order of `Style:` rows
pub const STYLE_FORMAT: &str = "Name, Fontname, Fontsize, PrimaryColour, SecondaryColour, OutlineColour, BackColour, Bold, Italic, Underline, StrikeOut, ScaleX, ScaleY, Spacing, Angle, BorderStyle, Outline, Shadow, Alignment, MarginL, MarginR, MarginV, Encoding";

/// Column order of `Dialogue:` rows
pub const EVENT_FORMAT: &str = "Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text";

/// A `[V4+ Styles]` entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Style {
    pub name: String,
    pub fontname: String,
    pub fontsize: f32,
    pub primary_colour: String,
    pub secondary_colour: String,
    pub outline_colour: String,
    pub back_colour: String,
    pub bold: i32,
    pub italic: i32,
    pub underline: i32,
    pub strike_out: i32,
    pub scale_x: f32,
    pub scale_y: f32,
    pub spacing: f32,
    pub angle: f32,
    pub border_style: u8,
    pub outline: f32,
    pub shadow: f32,
    pub alignment: u8,
    pub margin_l: i32,
    pub margin_r: i32,
    pub margin_v: i32,
    pub encoding: i32,
}

impl Default for Style {
    fn default() -> Self {
        Style {
            name: "Plain".to_string(),
            fontname: "Candara".to_string(),
            fontsize: 14.0,
            primary_colour: "&H00FFFFFF".to_string(),
            secondary_colour: "&H000000FF".to_string(),
            outline_colour: "&H66000000".to_string(),
            back_colour: "&HFF000000".to_string(),
            bold: 0,
            italic: 0,
            underline: 0,
            strike_out: 0,
            scale_x: 100.0,
            scale_y: 100.0,
            spacing: 0.0,
            angle: 0.0,
            border_style: 3,
            outline: 1.0,
            shadow: 0.0,
            alignment: 2,
            margin_l: 5,
            margin_r: 5,
            margin_v: 10,
            encoding: 1,
        }
    }
}

impl Style {
    /// Reject values that would produce an unreadable style row
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::InvalidStyle("style name is empty".to_string()));
        }
        if self.name.contains(',') || self.fontname.contains(',') {
            return Err(ConfigError::InvalidStyle(format!(
                "'{}' / '{}' must not contain commas",
                self.name, self.fontname
            )));
        }
        if self.fontsize <= 0.0 {
            return Err(ConfigError::InvalidStyle(format!(
                "font size must be positive, got {}",
                self.fontsize
            )));
        }
        Ok(())
    }

    /// Comma separated values in [`STYLE_FORMAT`] order
    pub fn to_row(&self) -> String {
        [
            self.name.clone(),
            self.fontname.clone(),
            self.fontsize.to_string(),
            self.primary_colour.clone(),
            self.secondary_colour.clone(),
            self.outline_colour.clone(),
            self.back_colour.clone(),
            self.bold.to_string(),
            self.italic.to_string(),
            self.underline.to_string(),
            self.strike_out.to_string(),
            self.scale_x.to_string(),
            self.scale_y.to_string(),
            self.spacing.to_string(),
            self.angle.to_string(),
            self.border_style.to_string(),
            self.outline.to_string(),
            self.shadow.to_string(),
            self.alignment.to_string(),
            self.margin_l.to_string(),
            self.margin_r.to_string(),
            self.margin_v.to_string(),
            self.encoding.to_string(),
        ]
        .join(",")
    }
}

/// The `[Script Info]` section
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptInfo {
    pub title: String,
    pub script_type: String,
    pub collisions: String,
    pub wrap_style: u8,
    pub scaled_border_and_shadow: bool,
    pub ycbcr_matrix: String,
}

impl ScriptInfo {
    pub fn new(title: &str, config: &ScriptInfoConfig) -> Self {
        ScriptInfo {
            title: title.to_string(),
            script_type: config.script_type.clone(),
            collisions: config.collisions.clone(),
            wrap_style: config.wrap_style,
            scaled_border_and_shadow: config.scaled_border_and_shadow,
            ycbcr_matrix: config.ycbcr_matrix.clone(),
        }
    }
}

/// One `Dialogue:` event row
#[derive(Debug, Clone, PartialEq)]
pub struct Dialogue {
    pub layer: i32,
    pub start: Timestamp,
    pub end: Timestamp,
    pub style: String,
    pub name: String,
    pub margin_l: i32,
    pub margin_r: i32,
    pub margin_v: i32,
    pub effect: String,
    pub text: String,
}

impl Dialogue {
    /// Event for a cue: layer 0, no actor, zero margins, no effect
    pub fn from_cue(cue: &Cue) -> Self {
        Dialogue {
            layer: 0,
            start: cue.start.clone(),
            end: cue.end.clone(),
            style: cue.style_name.clone(),
            name: String::new(),
            margin_l: 0,
            margin_r: 0,
            margin_v: 0,
            effect: String::new(),
            text: cue.body.clone(),
        }
    }
}

impl fmt::Display for Dialogue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{},{},{},{},{},{},{},{},{},{}",
            self.layer,
            self.start,
            self.end,
            self.style,
            self.name,
            self.margin_l,
            self.margin_r,
            self.margin_v,
            self.effect,
            self.text
        )
    }
}

/// A complete ASS document
#[derive(Debug, Clone, PartialEq)]
pub struct AssDocument {
    pub script_info: ScriptInfo,
    pub styles: Vec<Style>,
    pub events: Vec<Dialogue>,
}

impl AssDocument {
    /// Build the document for converted cues, rendered with a single style
    pub fn from_cues(document: &CueDocument, style: &Style, script_info: &ScriptInfoConfig) -> Self {
        AssDocument {
            script_info: ScriptInfo::new(&document.title, script_info),
            styles: vec![style.clone()],
            events: document.cues.iter().map(Dialogue::from_cue).collect(),
        }
    }
}

/// Serializer for [`AssDocument`]
pub struct AssWriter;

impl AssWriter {
    /// Write the document section by section
    pub fn write<W: Write>(document: &AssDocument, out: &mut W) -> io::Result<()> {
        let info = &document.script_info;
        writeln!(out, "[Script Info]")?;
        writeln!(out, "Title: {}", info.title)?;
        writeln!(out, "ScriptType: {}", info.script_type)?;
        writeln!(out, "Collisions: {}", info.collisions)?;
        writeln!(out, "WrapStyle: {}", info.wrap_style)?;
        writeln!(
            out,
            "ScaledBorderAndShadow: {}",
            if info.scaled_border_and_shadow { "yes" } else { "no" }
        )?;
        writeln!(out, "YCbCr Matrix: {}", info.ycbcr_matrix)?;
        writeln!(out)?;

        writeln!(out, "[V4+ Styles]")?;
        writeln!(out, "Format: {}", STYLE_FORMAT)?;
        for style in &document.styles {
            writeln!(out, "Style: {}", style.to_row())?;
        }
        writeln!(out)?;

        writeln!(out, "[Events]")?;
        writeln!(out, "Format: {}", EVENT_FORMAT)?;
        for event in &document.events {
            writeln!(out, "Dialogue: {}", event)?;
        }

        Ok(())
    }

    /// Render the document to a string
    pub fn to_string(document: &AssDocument) -> io::Result<String> {
        let mut buffer = Vec::new();
        Self::write(document, &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}
