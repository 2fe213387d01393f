use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};
use std::process::Command;

use rayon::prelude::*;
use walkdir::WalkDir;

use crate::constants::discovery::{MANIFEST_FILE, PNPM_ARGS, PNPM_PROGRAM, SKIPPED_DIRS};
use crate::error::MonomapError;
use crate::manifest_parser::{self, RawPackage};
use crate::progress::ProgressReporter;

/// Where the raw package list comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiscoveryMethod {
    /// `pnpm list --recursive --json` run in the repository root
    Pnpm,
    /// `package.json` files found on disk
    Manifests,
    /// A previously recorded `pnpm list --json` document
    Recorded(PathBuf),
}

pub struct WorkspaceDiscovery {
    ignore: Vec<glob::Pattern>,
}

impl WorkspaceDiscovery {
    /// Create a discovery pass; `ignore` globs are matched against paths
    /// relative to the repository root
    pub fn new(ignore: &[String]) -> Result<Self, MonomapError> {
        let ignore = ignore
            .iter()
            .map(|pattern| {
                glob::Pattern::new(pattern).map_err(|e| MonomapError::ConfigurationError {
                    message: format!("Invalid ignore pattern '{pattern}': {e}"),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { ignore })
    }

    /// Collect every workspace package under `root`
    pub fn discover(
        &self,
        root: &Path,
        method: &DiscoveryMethod,
        progress: Option<&ProgressReporter>,
    ) -> Result<Vec<RawPackage>, MonomapError> {
        let packages = match method {
            DiscoveryMethod::Pnpm => self.run_pnpm(root)?,
            DiscoveryMethod::Manifests => self.read_manifests(root, progress)?,
            // Ignore globs apply once the recorded list has a root
            DiscoveryMethod::Recorded(file) => return manifest_parser::parse_package_list_file(file),
        };

        Ok(self.without_ignored(root, packages))
    }

    /// Drop packages whose path relative to `root` matches an ignore glob
    pub fn without_ignored(&self, root: &Path, packages: Vec<RawPackage>) -> Vec<RawPackage> {
        packages
            .into_iter()
            .filter(|package| !self.is_ignored(root, package.path.as_deref()))
            .collect()
    }

    fn run_pnpm(&self, root: &Path) -> Result<Vec<RawPackage>, MonomapError> {
        let command_line = format!("{PNPM_PROGRAM} {}", PNPM_ARGS.join(" "));

        let output = Command::new(PNPM_PROGRAM)
            .args(PNPM_ARGS)
            .current_dir(root)
            .output()
            .map_err(|e| MonomapError::DiscoveryError {
                command: command_line.clone(),
                message: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(MonomapError::DiscoveryError {
                command: command_line,
                message: format!(
                    "exited with {}: {}",
                    output.status,
                    String::from_utf8_lossy(&output.stderr).trim()
                ),
            });
        }

        manifest_parser::parse_package_list(&String::from_utf8_lossy(&output.stdout), &command_line)
    }

    fn read_manifests(
        &self,
        root: &Path,
        progress: Option<&ProgressReporter>,
    ) -> Result<Vec<RawPackage>, MonomapError> {
        let root_manifest_path = root.join(MANIFEST_FILE);
        let root_manifest = if root_manifest_path.is_file() {
            Some(manifest_parser::parse_package_json(&root_manifest_path)?)
        } else {
            None
        };

        let globs = root_manifest
            .as_ref()
            .map(RawPackage::workspace_globs)
            .unwrap_or_default();

        let member_dirs = if globs.is_empty() {
            self.walk_manifest_dirs(root)
        } else {
            self.expand_workspace_globs(root, &globs)?
        };

        let mut packages: Vec<RawPackage> = member_dirs
            .into_par_iter()
            .map(|dir| {
                let manifest = dir.join(MANIFEST_FILE);
                if let Some(p) = progress {
                    p.checking_manifest(&manifest);
                }
                let mut package = manifest_parser::parse_package_json(&manifest)?;
                package.path = Some(dir);
                Ok(package)
            })
            .collect::<Result<Vec<_>, MonomapError>>()?;

        // Sort by path for consistent output
        packages.sort_by(|a, b| a.path.cmp(&b.path));

        // A nameless root manifest only declares the workspace layout
        if let Some(mut root_package) = root_manifest
            && root_package.name.is_some()
        {
            root_package.path = Some(root.to_path_buf());
            packages.insert(0, root_package);
        }

        Ok(packages)
    }

    fn walk_manifest_dirs(&self, root: &Path) -> Vec<PathBuf> {
        WalkDir::new(root)
            .into_iter()
            .filter_entry(|e| {
                let name = e.file_name().to_string_lossy();
                !(e.file_type().is_dir() && SKIPPED_DIRS.iter().any(|skipped| name == *skipped))
            })
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file() && e.file_name() == MANIFEST_FILE)
            .filter_map(|e| e.path().parent().map(Path::to_path_buf))
            .filter(|dir| dir != root)
            .collect()
    }

    fn expand_workspace_globs(
        &self,
        root: &Path,
        globs: &[String],
    ) -> Result<Vec<PathBuf>, MonomapError> {
        let (negated, positive): (Vec<&String>, Vec<&String>) =
            globs.iter().partition(|g| g.starts_with('!'));

        let excluded = negated
            .iter()
            .map(|g| {
                glob::Pattern::new(g.trim_start_matches('!')).map_err(|e| {
                    MonomapError::ConfigurationError {
                        message: format!("Invalid workspace pattern '{g}': {e}"),
                    }
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut seen = HashSet::new();
        let mut dirs = Vec::new();

        for pattern in positive {
            let full_pattern = root.join(pattern);
            let paths = glob::glob(&full_pattern.to_string_lossy()).map_err(|e| {
                MonomapError::ConfigurationError {
                    message: format!("Invalid workspace pattern '{pattern}': {e}"),
                }
            })?;

            for dir in paths.flatten() {
                if !dir.join(MANIFEST_FILE).is_file() {
                    continue;
                }
                let relative = relative_str(root, &dir);
                if excluded.iter().any(|p| p.matches(&relative)) {
                    continue;
                }
                if seen.insert(dir.clone()) {
                    dirs.push(dir);
                }
            }
        }

        Ok(dirs)
    }

    fn is_ignored(&self, root: &Path, path: Option<&Path>) -> bool {
        let Some(path) = path else {
            return false;
        };
        let relative = relative_str(root, path);
        !relative.is_empty() && self.ignore.iter().any(|p| p.matches(&relative))
    }
}

fn relative_str(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .components()
        .filter_map(|c| match c {
            Component::Normal(segment) => Some(segment.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn write_manifest(dir: &Path, body: &str) {
        fs::create_dir_all(dir).unwrap();
        fs::write(dir.join(MANIFEST_FILE), body).unwrap();
    }

    fn create_test_repo(with_workspaces: bool) -> TempDir {
        let temp = TempDir::new().unwrap();
        let root = temp.path();

        let root_manifest = if with_workspaces {
            r#"{ "name": "monorepo", "private": true, "workspaces": ["packages/*", "!packages/legacy"] }"#
        } else {
            r#"{ "name": "monorepo", "private": true }"#
        };
        write_manifest(root, root_manifest);
        write_manifest(
            &root.join("packages/core"),
            r#"{ "name": "@x/core", "dependencies": { "lodash": "^4.17.0" } }"#,
        );
        write_manifest(
            &root.join("packages/legacy"),
            r#"{ "name": "@x/legacy" }"#,
        );
        write_manifest(
            &root.join("services/api"),
            r#"{ "name": "@x/api", "dependencies": { "@x/core": "workspace:*" } }"#,
        );
        write_manifest(
            &root.join("services/api/node_modules/left-pad"),
            r#"{ "name": "left-pad" }"#,
        );

        temp
    }

    fn names(packages: &[RawPackage]) -> Vec<&str> {
        packages.iter().filter_map(|p| p.name.as_deref()).collect()
    }

    #[test]
    fn test_walk_skips_node_modules() {
        let temp = create_test_repo(false);
        let discovery = WorkspaceDiscovery::new(&[]).unwrap();

        let packages = discovery
            .discover(temp.path(), &DiscoveryMethod::Manifests, None)
            .unwrap();

        assert_eq!(names(&packages), ["monorepo", "@x/core", "@x/legacy", "@x/api"]);
        assert_eq!(packages[0].path.as_deref(), Some(temp.path()));
    }

    #[test]
    fn test_workspace_globs_restrict_members() {
        let temp = create_test_repo(true);
        let discovery = WorkspaceDiscovery::new(&[]).unwrap();

        let packages = discovery
            .discover(temp.path(), &DiscoveryMethod::Manifests, None)
            .unwrap();

        assert_eq!(names(&packages), ["monorepo", "@x/core"]);
    }

    #[test]
    fn test_ignore_patterns() {
        let temp = create_test_repo(false);
        let discovery = WorkspaceDiscovery::new(&["services/*".to_string()]).unwrap();

        let packages = discovery
            .discover(temp.path(), &DiscoveryMethod::Manifests, None)
            .unwrap();

        assert!(!names(&packages).contains(&"@x/api"));
    }

    #[test]
    fn test_invalid_ignore_pattern() {
        let result = WorkspaceDiscovery::new(&["[".to_string()]);
        assert!(matches!(
            result,
            Err(MonomapError::ConfigurationError { .. })
        ));
    }

    #[test]
    fn test_recorded_package_list() {
        let temp = TempDir::new().unwrap();
        let recorded = temp.path().join("pnpm-list.json");
        fs::write(
            &recorded,
            r#"[{ "name": "@x/core", "path": "/repo/packages/core" }]"#,
        )
        .unwrap();

        let discovery = WorkspaceDiscovery::new(&[]).unwrap();
        let packages = discovery
            .discover(
                Path::new("/repo"),
                &DiscoveryMethod::Recorded(recorded),
                None,
            )
            .unwrap();

        assert_eq!(names(&packages), ["@x/core"]);
    }
}
