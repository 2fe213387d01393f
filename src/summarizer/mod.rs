//! Overview paragraph for the structure document
//!
//! A [`Summarizer`] turns a prompt describing the workspace into a short prose
//! overview. [`OpenAiSummarizer`] asks an OpenAI-compatible chat endpoint;
//! [`LocalSummarizer`] derives a plain description from the snapshot itself
//! and never fails, which makes it the fallback for every remote error.

mod openai;

use std::fmt::Write;

pub use openai::OpenAiSummarizer;

use crate::error::MonomapError;
use crate::reports::WorkspaceSnapshot;
use crate::utils::string::pluralize;

pub trait Summarizer {
    fn summarize(&self, text: &str) -> Result<String, MonomapError>;
}

/// Deterministic overview built from project and subgraph counts
#[derive(Debug, Clone)]
pub struct LocalSummarizer {
    project_count: usize,
    folders: Vec<String>,
    dependencies: Vec<(String, Vec<String>)>,
    root_project: Option<String>,
}

impl LocalSummarizer {
    pub fn new(snapshot: &WorkspaceSnapshot) -> Self {
        let graph = snapshot.graph();
        Self {
            project_count: snapshot.projects().len(),
            folders: graph.subgraphs().map(|s| s.key().to_string()).collect(),
            dependencies: graph
                .subgraphs()
                .map(|s| {
                    let targets: Vec<String> = graph
                        .depends_on(s.key())
                        .into_iter()
                        .map(|(target, _)| target.key().to_string())
                        .collect();
                    (s.key().to_string(), targets)
                })
                .filter(|(_, targets)| !targets.is_empty())
                .collect(),
            root_project: graph.ungrouped().first().map(|p| p.name().to_string()),
        }
    }
}

impl Summarizer for LocalSummarizer {
    fn summarize(&self, _text: &str) -> Result<String, MonomapError> {
        let mut overview = String::new();

        if self.project_count == 0 {
            write!(overview, "No workspace projects were found in this repository.")?;
            return Ok(overview);
        }

        write!(
            overview,
            "This repository contains {} workspace {}",
            self.project_count,
            pluralize("project", self.project_count)
        )?;
        if !self.folders.is_empty() {
            let folders: Vec<String> = self.folders.iter().map(|f| format!("`{f}`")).collect();
            write!(
                overview,
                " across {} top-level {} ({})",
                self.folders.len(),
                pluralize("folder", self.folders.len()),
                folders.join(", ")
            )?;
        }
        write!(overview, ".")?;

        if let Some(root) = &self.root_project {
            write!(overview, " The repository root is itself the project `{root}`.")?;
        }

        if self.dependencies.is_empty() {
            if self.folders.len() > 1 {
                write!(overview, " No folder depends on another.")?;
            }
        } else {
            let sentences: Vec<String> = self
                .dependencies
                .iter()
                .map(|(from, targets)| {
                    let targets: Vec<String> = targets.iter().map(|t| format!("`{t}`")).collect();
                    format!("`{from}` depends on {}", targets.join(" and "))
                })
                .collect();
            write!(overview, " {}.", sentences.join("; "))?;
        }

        Ok(overview)
    }
}

/// Text of an overview along with the remote error that forced a fallback
#[derive(Debug)]
pub struct Overview {
    pub text: String,
    pub remote_error: Option<MonomapError>,
}

/// Ask `remote` first and fall back to `local` on any failure
///
/// Never fails: a remote error is handed back alongside the local text so the
/// caller can report it.
pub fn summarize_or_fallback(
    remote: &dyn Summarizer,
    local: &LocalSummarizer,
    text: &str,
) -> Overview {
    match remote.summarize(text) {
        Ok(summary) if !summary.trim().is_empty() => Overview {
            text: summary.trim().to_string(),
            remote_error: None,
        },
        Ok(_) => Overview {
            text: local_text(local, text),
            remote_error: Some(MonomapError::SummarizeError {
                message: "the model returned an empty overview".to_string(),
            }),
        },
        Err(e) => Overview {
            text: local_text(local, text),
            remote_error: Some(e),
        },
    }
}

fn local_text(local: &LocalSummarizer, text: &str) -> String {
    local.summarize(text).unwrap_or_default()
}

/// Prompt handed to a remote summarizer
pub fn summary_prompt(snapshot: &WorkspaceSnapshot) -> String {
    format!(
        "Write a short overview paragraph (at most five sentences) of a JavaScript \
         monorepo for its architecture document. Describe what the top-level folders \
         contain and how they depend on each other. Do not use headings or lists.\n\n\
         Folder tree:\n{}\nDependency graph between top-level folders (Mermaid):\n{}",
        snapshot.tree_text(),
        snapshot.graph_text()
    )
}
