//! `run` command - execute a prompt file and write a Markdown report.
//!
//! The prompt file is YAML:
//!
//! ```yaml
//! prompt: |
//!   Explain ownership in Rust in two sentences.
//! models:
//!   - openai/gpt-4o-mini
//!   - anthropic/claude-3.5-haiku
//! ```

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use futures_util::StreamExt;
use promptlab_core::{FanOutExecutor, ModelOutcome, RunEvent, RunRequest, render_markdown};
use serde::Deserialize;
use tracing::debug;

use crate::error::CliError;

/// Characters of an error message shown on the progress line.
const ERROR_PREVIEW_CHARS: usize = 50;

/// Contents of a prompt file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RunConfig {
    pub prompt: String,
    pub models: Vec<String>,
}

/// Arguments for the run command.
#[derive(Debug, Clone)]
pub struct RunArgs {
    pub config_path: PathBuf,
    pub output_dir: PathBuf,
    pub max_tokens: Option<u32>,
}

/// Read and parse a prompt file.
pub fn load_run_config(path: &Path) -> Result<RunConfig, CliError> {
    let text = fs::read_to_string(path)
        .map_err(|e| CliError::Io(format!("{}: {e}", path.display())))?;
    serde_yaml::from_str(&text)
        .map_err(|e| CliError::Arguments(format!("Invalid run config {}: {e}", path.display())))
}

/// `{stem}_{YYYY-MM-DD_HH-MM}.md`
pub fn report_file_name(stem: &str, at: &DateTime<Local>) -> String {
    format!("{stem}_{}.md", at.format("%Y-%m-%d_%H-%M"))
}

/// Progress line suffix for one finished model.
pub fn outcome_summary(outcome: &ModelOutcome) -> String {
    match outcome.error() {
        None => format!("OK ({} tokens)", outcome.output_tokens()),
        Some(error) => format!(
            "FAILED: {}",
            error.chars().take(ERROR_PREVIEW_CHARS).collect::<String>()
        ),
    }
}

/// Run the prompt file and write the report; returns the report path.
///
/// Progress is written to `out` as each model starts and finishes.
pub async fn execute(
    executor: &FanOutExecutor,
    args: &RunArgs,
    out: &mut impl Write,
) -> Result<PathBuf, CliError> {
    let config = load_run_config(&args.config_path)?;
    let title = args
        .config_path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("run")
        .to_string();
    let model_count = config.models.len();

    let mut request = RunRequest::new(config.prompt.clone(), config.models);
    request.max_tokens = args.max_tokens;
    let mut events = executor.stream(request)?;

    writeln!(out, "Running prompt on {model_count} models...")?;
    writeln!(out)?;

    let mut outcomes = Vec::with_capacity(model_count);
    while let Some(event) = events.next().await {
        match event {
            RunEvent::Status { model, .. } => {
                write!(out, "  {model}... ")?;
                out.flush()?;
            }
            RunEvent::Result(outcome) => {
                writeln!(out, "{}", outcome_summary(&outcome))?;
                outcomes.push(outcome);
            }
            RunEvent::Done => break,
        }
    }
    writeln!(out)?;

    let markdown = render_markdown(&title, &config.prompt, &outcomes);
    fs::create_dir_all(&args.output_dir)?;
    let path = args
        .output_dir
        .join(report_file_name(&title, &Local::now()));
    fs::write(&path, markdown)?;
    debug!(path = %path.display(), "Report written");

    writeln!(out, "Results saved to: {}", path.display())?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_report_file_name() {
        let at = Local.with_ymd_and_hms(2026, 3, 7, 9, 5, 0).unwrap();
        assert_eq!(
            report_file_name("greeting", &at),
            "greeting_2026-03-07_09-05.md"
        );
    }

    #[test]
    fn test_outcome_summary() {
        assert_eq!(
            outcome_summary(&ModelOutcome::completed("m/a", "Hi!", 3, 2)),
            "OK (2 tokens)"
        );

        let long = format!("HTTP 500: {}", "x".repeat(100));
        let summary = outcome_summary(&ModelOutcome::failed("m/b", long));
        assert_eq!(summary.len(), "FAILED: ".len() + ERROR_PREVIEW_CHARS);
        assert!(summary.starts_with("FAILED: HTTP 500: xxx"));
    }

    #[test]
    fn test_load_run_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("greeting.yaml");
        fs::write(&path, "prompt: |\n  Say hi\nmodels:\n  - m/a\n  - m/b\n").unwrap();

        let config = load_run_config(&path).unwrap();
        assert_eq!(config.prompt, "Say hi\n");
        assert_eq!(config.models, vec!["m/a", "m/b"]);
    }

    #[test]
    fn test_load_run_config_errors() {
        let dir = tempfile::tempdir().unwrap();

        let missing = load_run_config(&dir.path().join("nope.yaml")).unwrap_err();
        assert!(matches!(missing, CliError::Io(_)));

        let path = dir.path().join("bad.yaml");
        fs::write(&path, "prompt: only\n").unwrap();
        let invalid = load_run_config(&path).unwrap_err();
        assert!(matches!(invalid, CliError::Arguments(_)));
    }
}
