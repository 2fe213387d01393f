//! Generate command executor

use std::fs;
use std::path::Path;

use console::{Term, style};
use miette::{IntoDiagnostic, Result, WrapErr};

use crate::cli::ReportFormat;
use crate::config::{AiSettings, GenerateConfig, OutputTarget};
use crate::error::MonomapError;
use crate::executors::{CommandExecutor, discover};
use crate::progress::ProgressReporter;
use crate::reports::{
    JsonReportGenerator, MarkdownReportGenerator, ReportGenerator, WorkspaceSnapshot,
};
use crate::summarizer::{
    LocalSummarizer, OpenAiSummarizer, Summarizer, summarize_or_fallback, summary_prompt,
};

pub struct GenerateExecutor;

impl CommandExecutor for GenerateExecutor {
    type Config = GenerateConfig;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!(
            "{} Mapping workspace in {}...",
            style("🗺").cyan(),
            style(config.root.display()).bold()
        );

        if let OutputTarget::File(path) = &config.output
            && !overwrite_allowed(path, config.force, &Term::stderr())?
        {
            eprintln!("{} Left {} untouched", style("ℹ").blue(), path.display());
            return Ok(());
        }

        let mut progress = ProgressReporter::for_terminal();
        let analyzer = discover(&config.root, &config.method, &config.ignore, progress.as_mut())?;

        if analyzer.projects().is_empty() {
            eprintln!(
                "{} No workspace projects found; the document will be empty",
                style("ℹ").blue()
            );
        }

        let snapshot = WorkspaceSnapshot::build(
            analyzer.projects().to_vec(),
            config.direction,
            config.exclude_dev,
        )
        .wrap_err("Failed to map the workspace")?;

        let overview = overview(config.ai.as_ref(), &snapshot, progress.as_mut());

        let document = match config.format {
            ReportFormat::Markdown => MarkdownReportGenerator::new(&config.title, overview)
                .generate_report(&snapshot)
                .wrap_err("Failed to generate Markdown document")?,
            ReportFormat::Json => JsonReportGenerator::new(&config.title, overview)
                .generate_report(&snapshot)
                .wrap_err("Failed to generate JSON report")?,
        };

        match config.output {
            OutputTarget::Stdout => print!("{document}"),
            OutputTarget::File(path) => {
                if let Some(parent) = path.parent()
                    && !parent.as_os_str().is_empty()
                {
                    fs::create_dir_all(parent).into_diagnostic().wrap_err_with(|| {
                        format!("Failed to create directory '{}'", parent.display())
                    })?;
                }
                fs::write(&path, document)
                    .into_diagnostic()
                    .wrap_err_with(|| format!("Failed to write '{}'", path.display()))?;

                eprintln!(
                    "{} Document written to {}",
                    style("✓").green(),
                    style(path.display()).bold()
                );
            }
        }

        Ok(())
    }
}

/// Whether `path` may be written
///
/// A missing file or `--force` always allows it. An existing file needs an
/// explicit "yes" on an interactive terminal; without one it is an error.
fn overwrite_allowed(path: &Path, force: bool, term: &Term) -> Result<bool, MonomapError> {
    if force || !path.exists() {
        return Ok(true);
    }

    if !term.is_term() {
        return Err(MonomapError::ConfigurationError {
            message: format!(
                "'{}' already exists; pass --force to overwrite it",
                path.display()
            ),
        });
    }

    term.write_str(&format!(
        "{} '{}' already exists. Overwrite? [y/N] ",
        style("?").yellow(),
        path.display()
    ))?;
    let answer = term.read_line()?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

fn overview(
    ai: Option<&AiSettings>,
    snapshot: &WorkspaceSnapshot,
    progress: Option<&mut ProgressReporter>,
) -> String {
    let local = LocalSummarizer::new(snapshot);
    let Some(settings) = ai else {
        return local.summarize("").unwrap_or_default();
    };

    let remote = match OpenAiSummarizer::from_env(&settings.endpoint, &settings.model) {
        Ok(remote) => remote,
        Err(e) => {
            eprintln!(
                "{} AI overview unavailable ({e}); using the local overview",
                style("⚠").yellow()
            );
            return local.summarize("").unwrap_or_default();
        }
    };

    let prompt = summary_prompt(snapshot);
    let result = match progress {
        Some(p) => {
            p.start_summarizing(remote.model());
            let result = summarize_or_fallback(&remote, &local, &prompt);
            p.finish_summarizing();
            result
        }
        None => summarize_or_fallback(&remote, &local, &prompt),
    };

    if let Some(e) = result.remote_error {
        eprintln!(
            "{} AI overview unavailable ({e}); using the local overview",
            style("⚠").yellow()
        );
    }

    result.text
}
