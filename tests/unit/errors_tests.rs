/*!
 * Tests for error types and conversions
 */

use mdsub::errors::{ConfigError, SubtitleError};
use mdsub::{Config, Controller, Timestamp};

#[test]
fn test_subtitleError_invalidTimecode_shouldDisplayComponentAndValue() {
    let error = SubtitleError::InvalidTimecode {
        component: "hours",
        value: "99999999999".to_string(),
    };
    let display = format!("{}", error);
    assert!(display.contains("hours"));
    assert!(display.contains("99999999999"));
}

#[test]
fn test_configError_invalidExtension_shouldDisplayValue() {
    let error = ConfigError::InvalidExtension(".".to_string());
    assert_eq!(format!("{}", error), "Invalid output extension: '.'");
}

#[test]
fn test_controller_withInvalidConfig_shouldKeepConfigErrorAsSource() {
    let mut config = Config::default();
    config.output_extension = String::new();

    let error = match Controller::with_config(config) {
        Ok(_) => panic!("empty extension should be rejected"),
        Err(e) => e,
    };
    assert!(error.to_string().contains("Configuration validation failed"));
    assert_eq!(
        error.downcast_ref::<ConfigError>(),
        Some(&ConfigError::InvalidExtension(String::new()))
    );
}

#[test]
fn test_timestamp_withNonDigitField_shouldReturnSubtitleError() {
    let error = Timestamp::from_srt_fields("1", "ab", "00", "000").unwrap_err();
    assert_eq!(
        error,
        SubtitleError::InvalidTimecode {
            component: "minutes",
            value: "ab".to_string(),
        }
    );
}
