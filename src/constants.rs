//! Configuration constants for monomap
//!
//! Built-in defaults. Most of them can be overridden through `monomap.toml`,
//! `MONOMAP_*` environment variables or command-line flags.

use std::time::Duration;

/// Progress spinner configuration
pub mod progress {
    use super::*;

    /// Duration between spinner updates
    pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

    /// Spinner frames
    pub const SPINNER_FRAMES: &[&str] = &["◐", "◓", "◑", "◒"];
}

/// Text-art used by the folder tree
pub mod tree {
    pub const BRANCH: &str = "├── ";
    pub const CORNER: &str = "└── ";
    pub const VERTICAL: &str = "│   ";
    pub const BLANK: &str = "    ";

    /// Label for a root node that carries no project name
    pub const ROOT_PLACEHOLDER: &str = ".";
}

/// Mermaid output
pub mod graph {
    pub const INDENT: &str = "    ";

    /// Characters Mermaid will not accept inside a node identifier
    pub const RESERVED_ID_CHARS: &[char] = &['@', '/', '-'];

    /// Prepended to a subgraph id that a node or another subgraph already uses
    pub const CONTAINER_ID_PREFIX: &str = "sg_";
}

/// Document assembly and discovery defaults
pub mod output {
    pub const DEFAULT_FILE: &str = "ARCHITECTURE.md";
    pub const DEFAULT_TITLE: &str = "Repository Structure";
    pub const CONFIG_FILE: &str = "monomap.toml";
}

pub mod discovery {
    pub const PNPM_PROGRAM: &str = "pnpm";
    pub const PNPM_ARGS: &[&str] = &["list", "--recursive", "--depth", "0", "--json"];
    pub const MANIFEST_FILE: &str = "package.json";

    /// Directories never scanned for manifests
    pub const SKIPPED_DIRS: &[&str] = &["node_modules", ".git", "dist", "build", ".turbo"];
}

pub mod ai {
    use super::*;

    pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
    pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
    pub const API_KEY_ENV: &str = "OPENAI_API_KEY";
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
    pub const READ_TIMEOUT: Duration = Duration::from_secs(60);
}
