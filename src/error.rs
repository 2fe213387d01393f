use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
#[error("Invalid JSON in '{file}'")]
#[diagnostic(
    code(monomap::json_parse_error),
    help("Check the JSON syntax near the highlighted position")
)]
pub struct JsonParseError {
    pub file: String,
    #[source_code]
    pub source_code: NamedSource<String>,
    #[label("syntax error here")]
    pub span: Option<SourceSpan>,
    #[source]
    pub source: serde_json::Error,
}

#[derive(Error, Debug, Diagnostic)]
#[error("Invalid TOML syntax in '{file}'")]
#[diagnostic(
    code(monomap::toml_parse_error),
    help("Check the TOML syntax near the highlighted position")
)]
pub struct TomlParseError {
    pub file: String,
    #[source_code]
    pub source_code: NamedSource<String>,
    #[label("syntax error here")]
    pub span: Option<SourceSpan>,
    #[source]
    pub source: toml::de::Error,
}

#[derive(Error, Debug, Diagnostic)]
pub enum MonomapError {
    #[error("Malformed project record: {message}")]
    #[diagnostic(
        code(monomap::malformed_input),
        help("Every workspace project needs a unique, non-empty name and a path inside the repository")
    )]
    MalformedInput { message: String },

    #[error("Ambiguous path '{path}' at segment '{segment}'")]
    #[diagnostic(
        code(monomap::ambiguous_path),
        help("Two projects resolve to the same location in the folder tree")
    )]
    AmbiguousPath { path: String, segment: String },

    #[error("Failed to read file '{path}'")]
    #[diagnostic(
        code(monomap::io_error),
        help("Check if the file exists and you have read permissions")
    )]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    JsonParseError(Box<JsonParseError>),

    #[error(transparent)]
    #[diagnostic(transparent)]
    TomlParseError(Box<TomlParseError>),

    #[error("Workspace discovery failed running '{command}': {message}")]
    #[diagnostic(
        code(monomap::discovery_error),
        help("Make sure pnpm is installed, or use --source manifests to read package.json files directly")
    )]
    DiscoveryError { command: String, message: String },

    #[error("Summarization failed: {message}")]
    #[diagnostic(
        code(monomap::summarize_error),
        help("Check OPENAI_API_KEY and the configured endpoint, or drop --ai")
    )]
    SummarizeError { message: String },

    #[error("JSON serialization error")]
    #[diagnostic(
        code(monomap::json_error),
        help("This is likely an internal error - please report it")
    )]
    Json(#[from] serde_json::Error),

    #[error("String formatting error")]
    #[diagnostic(
        code(monomap::fmt_error),
        help("This is likely an internal error - please report it")
    )]
    Fmt(#[from] std::fmt::Error),

    #[error("IO error")]
    #[diagnostic(
        code(monomap::io_error),
        help("Check file permissions and disk space")
    )]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(monomap::config_error),
        help("Check your command arguments and monomap.toml")
    )]
    ConfigurationError { message: String },
}

impl MonomapError {
    pub(crate) fn malformed(message: impl Into<String>) -> Self {
        MonomapError::MalformedInput {
            message: message.into(),
        }
    }
}

/// Byte offset of a 1-based line/column pair, as reported by `serde_json`.
pub(crate) fn offset_of(content: &str, line: usize, column: usize) -> usize {
    let line_start: usize = content
        .split_inclusive('\n')
        .take(line.saturating_sub(1))
        .map(str::len)
        .sum();
    (line_start + column.saturating_sub(1)).min(content.len())
}

#[cfg(test)]
mod tests {
    use std::io;

    use miette::NamedSource;

    use super::*;

    #[test]
    fn test_toml_parse_error_display() {
        let source_code = "invalid = toml content";
        let toml_err = toml::from_str::<toml::Value>(source_code).unwrap_err();

        let error = TomlParseError {
            file: "monomap.toml".to_string(),
            source_code: NamedSource::new("monomap.toml", source_code.to_string()),
            span: Some((10, 4).into()),
            source: toml_err,
        };

        assert_eq!(error.to_string(), "Invalid TOML syntax in 'monomap.toml'");
    }

    #[test]
    fn test_json_parse_error_display() {
        let source_code = "[{\"name\": }]";
        let json_err = serde_json::from_str::<serde_json::Value>(source_code).unwrap_err();

        let error = JsonParseError {
            file: "pnpm-list.json".to_string(),
            source_code: NamedSource::new("pnpm-list.json", source_code.to_string()),
            span: Some((offset_of(source_code, json_err.line(), json_err.column()), 1).into()),
            source: json_err,
        };

        assert_eq!(error.to_string(), "Invalid JSON in 'pnpm-list.json'");
    }

    #[test]
    fn test_malformed_input_display() {
        let error = MonomapError::malformed("record #2 has an empty name");
        assert_eq!(
            error.to_string(),
            "Malformed project record: record #2 has an empty name"
        );
    }

    #[test]
    fn test_ambiguous_path_display() {
        let error = MonomapError::AmbiguousPath {
            path: "packages/a".to_string(),
            segment: "a".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Ambiguous path 'packages/a' at segment 'a'"
        );
    }

    #[test]
    fn test_file_read_error() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let error = MonomapError::FileReadError {
            path: PathBuf::from("/tmp/missing.json"),
            source: io_err,
        };

        assert_eq!(error.to_string(), "Failed to read file '/tmp/missing.json'");
    }

    #[test]
    fn test_error_codes() {
        let error = MonomapError::DiscoveryError {
            command: "pnpm list".to_string(),
            message: "not found".to_string(),
        };

        use miette::Diagnostic;
        assert!(error.code().is_some());
        assert!(error.help().is_some());
    }

    #[test]
    fn test_error_conversion_from_io() {
        let io_err = io::Error::other("some io error");
        let err: MonomapError = io_err.into();

        match err {
            MonomapError::Io(_) => {}
            _ => panic!("Expected Io variant"),
        }
    }

    #[test]
    fn test_offset_of() {
        let content = "ab\ncde\nf";
        assert_eq!(offset_of(content, 1, 1), 0);
        assert_eq!(offset_of(content, 2, 2), 4);
        assert_eq!(offset_of(content, 3, 1), 7);
        assert_eq!(offset_of(content, 9, 9), content.len());
    }
}
