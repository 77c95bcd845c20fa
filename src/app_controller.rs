use anyhow::{anyhow, Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, error, info, warn};
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use crate::ass_writer::{AssDocument, AssWriter};
use crate::file_utils::{FileManager, SCRIPT_EXTENSIONS};
use crate::subtitle_processor::{CueDocument, CueParser};

// @module: Application controller for script conversion

/// Result of converting a single file
#[derive(Debug, Clone, PartialEq)]
pub enum ConversionOutcome {
    /// Output written
    Converted { output: PathBuf, cues: usize },
    /// Output already existed and overwrite was not forced
    Skipped { output: PathBuf },
}

/// Counters for a folder run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FolderSummary {
    pub converted: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Main application controller for subtitle script conversion
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate().context("Configuration validation failed")?;
        Ok(Self { config })
    }

    /// Configuration in use
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Segment and translate a script held in memory
    pub fn convert_str(&self, content: &str) -> CueDocument {
        CueParser::from_config(&self.config).parse_str(content)
    }

    /// Serialize converted cues to ASS text
    pub fn render(&self, document: &CueDocument) -> Result<String> {
        let ass = AssDocument::from_cues(document, &self.config.style, &self.config.script_info);
        AssWriter::to_string(&ass).context("Failed to serialize ASS document")
    }

    /// Convert one script file into `output_dir`
    pub fn run(&self, input_file: &Path, output_dir: &Path, force_overwrite: bool) -> Result<ConversionOutcome> {
        if !FileManager::file_exists(input_file) {
            return Err(anyhow!("Input file does not exist: {:?}", input_file));
        }
        if !FileManager::is_script_file(input_file) {
            warn!("Unexpected script extension, converting anyway: {:?}", input_file);
        }

        let output = FileManager::generate_output_path(input_file, output_dir, &self.config.output_extension);
        if output.as_path() == input_file {
            return Err(anyhow!("Output would overwrite the input file: {:?}", input_file));
        }

        if output.exists() && !force_overwrite {
            warn!("Output file already exists: {:?}. Use -f to force overwrite.", output);
            return Ok(ConversionOutcome::Skipped { output });
        }

        let content = FileManager::read_to_string(input_file)?;
        let document = self.convert_str(&content);
        if document.is_empty() {
            warn!("No cues found in {:?}", input_file);
        }
        debug!("{}", document);

        let rendered = self.render(&document)?;
        FileManager::write_to_file(&output, &rendered)?;
        info!("Converted {} cue(s): {:?}", document.len(), output);

        Ok(ConversionOutcome::Converted {
            output,
            cues: document.len(),
        })
    }

    /// Convert every script file below `input_dir`, writing next to each input
    pub fn run_folder(&self, input_dir: &Path, force_overwrite: bool) -> Result<FolderSummary> {
        let start_time = std::time::Instant::now();

        if !FileManager::dir_exists(input_dir) {
            return Err(anyhow!("Input directory does not exist: {:?}", input_dir));
        }

        let mut scripts = Vec::new();
        for ext in SCRIPT_EXTENSIONS {
            scripts.append(&mut FileManager::find_files(input_dir, ext)?);
        }

        if scripts.is_empty() {
            return Err(anyhow!("No subtitle scripts found in directory: {:?}", input_dir));
        }

        let folder_pb = ProgressBar::new(scripts.len() as u64);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        folder_pb.set_style(style);

        let mut summary = FolderSummary::default();

        for script in &scripts {
            let file_name = script
                .file_name()
                .map(|f| f.to_string_lossy().to_string())
                .unwrap_or_else(|| "unknown".to_string());
            folder_pb.set_message(file_name);

            let output_dir = script.parent().unwrap_or(input_dir);
            match self.run(script, output_dir, force_overwrite) {
                Ok(ConversionOutcome::Converted { .. }) => summary.converted += 1,
                Ok(ConversionOutcome::Skipped { .. }) => summary.skipped += 1,
                Err(e) => {
                    error!("Error processing {:?}: {}", script, e);
                    summary.failed += 1;
                }
            }
            folder_pb.inc(1);
        }

        folder_pb.finish_and_clear();
        info!(
            "Finished in {:.1}s: {} converted, {} skipped, {} failed",
            start_time.elapsed().as_secs_f64(),
            summary.converted,
            summary.skipped,
            summary.failed
        );

        Ok(summary)
    }
}
