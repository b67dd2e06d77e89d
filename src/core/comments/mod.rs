//! Comment reflow: merge runs of `//` line comments into `/* */` blocks
//! wrapped to a fixed column width.
//!
//! - `reflow` - the line scanner and block emitter
//! - `wrap` - greedy word wrapping

mod reflow;
pub mod wrap;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::utils::io;

pub use reflow::{reflow_lines, MergedBlock, ReflowedLines};

pub const DEFAULT_MAX_WIDTH: usize = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReflowConfig {
    #[serde(default = "default_max_width")]
    pub max_width: usize,
}

fn default_max_width() -> usize {
    DEFAULT_MAX_WIDTH
}

impl Default for ReflowConfig {
    fn default() -> Self {
        Self {
            max_width: DEFAULT_MAX_WIDTH,
        }
    }
}

impl ReflowConfig {
    pub fn new(max_width: usize) -> Result<Self> {
        let config = Self { max_width };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_width == 0 {
            return Err(Error::config_invalid_value(
                "max_width",
                Some(self.max_width.to_string()),
                "Maximum comment width must be greater than zero",
            ));
        }
        Ok(())
    }
}

/// Result of reflowing a whole text buffer.
#[derive(Debug, Clone)]
pub struct ReflowedText {
    pub text: String,
    pub lines_read: usize,
    pub lines_written: usize,
    pub blocks: Vec<MergedBlock>,
}

/// `\r\n` when the text contains any, `\n` otherwise.
pub fn detect_line_ending(text: &str) -> &'static str {
    if text.contains("\r\n") {
        "\r\n"
    } else {
        "\n"
    }
}

/// Reflow a text buffer, keeping its line ending style.
///
/// Every output line is terminated, including the last one.
pub fn reflow_text(text: &str, config: &ReflowConfig) -> Result<ReflowedText> {
    let ending = detect_line_ending(text);
    let lines: Vec<&str> = text.lines().collect();
    let reflowed = reflow_lines(&lines, config)?;

    let mut out = String::with_capacity(text.len());
    for line in &reflowed.lines {
        out.push_str(line);
        out.push_str(ending);
    }

    Ok(ReflowedText {
        text: out,
        lines_read: lines.len(),
        lines_written: reflowed.lines.len(),
        blocks: reflowed.blocks,
    })
}

/// Where `format_file` sends its result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatTarget {
    /// Rewrite the input file.
    InPlace,
    /// Write to another file.
    File(String),
    /// Keep the result in memory only (check mode, stdout).
    Memory,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatReport {
    pub input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    pub max_width: usize,
    pub lines_read: usize,
    pub lines_written: usize,
    pub blocks_merged: usize,
    pub blocks: Vec<MergedBlock>,
    pub written: bool,
    #[serde(skip)]
    pub content: String,
}

fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).to_string())
}

/// Reflow the comments of a source file.
pub fn format_file(
    input: &str,
    target: FormatTarget,
    config: &ReflowConfig,
) -> Result<FormatReport> {
    config.validate()?;

    let input_path = expand_path(input);
    let source = io::read_file(&input_path, &format!("read {}", input_path.display()))?;

    crate::log_status!(
        "comments",
        "Formatting comments for: {}",
        input_path.display()
    );

    let reflowed = reflow_text(&source, config)?;

    let output_path = match &target {
        FormatTarget::InPlace => Some(input_path.clone()),
        FormatTarget::File(path) => Some(expand_path(path)),
        FormatTarget::Memory => None,
    };

    if let Some(path) = &output_path {
        io::write_file_atomic(path, &reflowed.text, &format!("write {}", path.display()))?;
        crate::log_status!(
            "comments",
            "Merged {} comment block(s) into {}",
            reflowed.blocks.len(),
            path.display()
        );
    }

    Ok(FormatReport {
        input: input_path.display().to_string(),
        output: output_path.as_ref().map(|p| p.display().to_string()),
        max_width: config.max_width,
        lines_read: reflowed.lines_read,
        lines_written: reflowed.lines_written,
        blocks_merged: reflowed.blocks.len(),
        blocks: reflowed.blocks,
        written: output_path.is_some(),
        content: reflowed.text,
    })
}
