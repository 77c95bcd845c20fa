/*!
 * End-to-end tests for converting script files into ASS documents
 */

use anyhow::Result;
use std::fs;
use mdsub::app_config::{CommentPolicy, Config};
use mdsub::app_controller::{ConversionOutcome, FolderSummary};
use mdsub::Controller;
use crate::common;

/// Test converting the sample script writes a complete ASS file
#[test]
fn test_run_withSampleScript_shouldWriteAssFile() -> Result<()> {
    common::init_test_logger();
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_sample_script(temp_dir.path(), "talk.srt")?;
    let controller = Controller::with_config(Config::default())?;

    let outcome = controller.run(&input, temp_dir.path(), false)?;

    let output = temp_dir.path().join("talk.ass");
    assert_eq!(outcome, ConversionOutcome::Converted { output: output.clone(), cues: 3 });

    let ass = fs::read_to_string(&output)?;
    assert!(ass.starts_with("[Script Info]\nTitle: Sample Talk\n"));
    assert!(ass.contains("Style: Plain,Candara,14,"));
    assert!(ass.contains(r"Dialogue: 0,0:00:01.50,0:00:03.25,Plain,,0,0,0,,{\b1}Welcome{\b0} to the {\i1}show{\i0}"));
    assert!(!ass.contains("timing checked"));
    assert_eq!(ass.lines().filter(|l| l.starts_with("Dialogue: ")).count(), 3);

    Ok(())
}

/// Test that existing outputs are skipped unless forced
#[test]
fn test_run_withExistingOutput_shouldSkipUnlessForced() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_sample_script(temp_dir.path(), "talk.srt")?;
    let existing = common::create_test_file(temp_dir.path(), "talk.ass", "old")?;
    let controller = Controller::with_config(Config::default())?;

    let skipped = controller.run(&input, temp_dir.path(), false)?;
    assert_eq!(skipped, ConversionOutcome::Skipped { output: existing.clone() });
    assert_eq!(fs::read_to_string(&existing)?, "old");

    let forced = controller.run(&input, temp_dir.path(), true)?;
    assert!(matches!(forced, ConversionOutcome::Converted { cues: 3, .. }));
    assert_ne!(fs::read_to_string(&existing)?, "old");

    Ok(())
}

/// Test that passthrough comments survive as plain text
#[test]
fn test_run_withPassthroughPolicy_shouldKeepCommentText() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_sample_script(temp_dir.path(), "talk.md")?;
    let config = Config {
        comment_policy: CommentPolicy::Passthrough,
        ..Config::default()
    };
    let controller = Controller::with_config(config)?;

    controller.run(&input, &temp_dir.path().join("out"), false)?;

    let ass = fs::read_to_string(temp_dir.path().join("out/talk.ass"))?;
    assert!(ass.contains(r",,timing checked on 2024 cut\N{\fnGlowSansSC Normal Medium}"));

    Ok(())
}

/// Test that a script without any valid block still yields a document
#[test]
fn test_run_withGarbageInput_shouldWriteEmptyEvents() -> Result<()> {
    common::init_test_logger();
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_test_file(temp_dir.path(), "junk.srt", "hello\nworld\n\n--> ?\n")?;
    let controller = Controller::with_config(Config::default())?;

    let outcome = controller.run(&input, temp_dir.path(), false)?;
    assert!(matches!(outcome, ConversionOutcome::Converted { cues: 0, .. }));

    let ass = fs::read_to_string(temp_dir.path().join("junk.ass"))?;
    assert!(ass.contains("Title: Mdsub Default Title"));
    assert!(ass.trim_end().ends_with("Format: Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text"));

    Ok(())
}

/// Test that a missing input file is an error
#[test]
fn test_run_withMissingInput_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let controller = Controller::with_config(Config::default())?;

    let result = controller.run(&temp_dir.path().join("nope.srt"), temp_dir.path(), false);
    assert!(result.is_err());

    Ok(())
}

/// Test that an output path equal to the input is refused
#[test]
fn test_run_withSameInputAndOutput_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_sample_script(temp_dir.path(), "talk.srt")?;
    let config = Config {
        output_extension: "srt".to_string(),
        ..Config::default()
    };
    let controller = Controller::with_config(config)?;

    assert!(controller.run(&input, temp_dir.path(), true).is_err());
    assert_eq!(fs::read_to_string(&input)?, common::SAMPLE_SCRIPT);

    Ok(())
}

/// Test converting a whole folder
#[test]
fn test_run_folder_withMixedFiles_shouldConvertScriptsOnly() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    common::create_sample_script(temp_dir.path(), "one.srt")?;
    common::create_sample_script(temp_dir.path(), "season/two.md")?;
    common::create_test_file(temp_dir.path(), "notes.txt", "ignored")?;
    common::create_test_file(temp_dir.path(), "season/three.ass", "existing")?;
    let controller = Controller::with_config(Config::default())?;

    let summary = controller.run_folder(temp_dir.path(), false)?;

    assert_eq!(summary, FolderSummary { converted: 2, skipped: 0, failed: 0 });
    assert!(temp_dir.path().join("one.ass").exists());
    assert!(temp_dir.path().join("season/two.ass").exists());
    assert!(!temp_dir.path().join("notes.ass").exists());

    let again = controller.run_folder(temp_dir.path(), false)?;
    assert_eq!(again, FolderSummary { converted: 0, skipped: 2, failed: 0 });

    Ok(())
}

/// Test that an empty folder is reported
#[test]
fn test_run_folder_withNoScripts_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let controller = Controller::with_config(Config::default())?;

    assert!(controller.run_folder(temp_dir.path(), false).is_err());

    Ok(())
}

/// Test that an invalid configuration is refused by the controller
#[test]
fn test_with_config_withInvalidConfig_shouldFail() {
    let mut config = Config::default();
    config.style.fontsize = -1.0;

    assert!(Controller::with_config(config).is_err());
}

/// Test in-memory conversion and rendering
#[test]
fn test_convert_str_and_render_shouldRoundTripThroughWriter() -> Result<()> {
    let controller = Controller::with_config(Config::default())?;

    let document = controller.convert_str("1\n00:00:01,500 --> 00:00:03,250\n~~x~~\n");
    let ass = controller.render(&document)?;

    assert!(ass.ends_with("Dialogue: 0,0:00:01.50,0:00:03.25,Plain,,0,0,0,,{\\s1}x{\\s0}\n"));

    Ok(())
}
