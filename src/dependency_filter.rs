//! Dependency filtering functionality

use crate::core::Project;

/// Decides which declared dependencies take part in graph building
#[derive(Debug, Clone, Copy, Default)]
pub struct DependencyFilter {
    exclude_dev: bool,
}

impl DependencyFilter {
    pub fn new(exclude_dev: bool) -> Self {
        Self { exclude_dev }
    }

    /// Check if dev dependencies should be included
    pub fn include_dev(&self) -> bool {
        !self.exclude_dev
    }

    /// Dependency names of `project` that pass the filter, regular ones first
    pub fn dependencies_of<'a>(&self, project: &'a Project) -> Box<dyn Iterator<Item = &'a str> + 'a> {
        if self.include_dev() {
            Box::new(project.all_dependencies())
        } else {
            Box::new(project.dependencies().iter().map(String::as_str))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dev_dependencies_toggle() {
        let project = Project::new(
            "@x/web",
            "apps/web",
            vec!["@x/ui".into()],
            vec!["@x/testing".into()],
            0,
        )
        .unwrap();

        let all: Vec<&str> = DependencyFilter::default().dependencies_of(&project).collect();
        assert_eq!(all, ["@x/ui", "@x/testing"]);

        let prod: Vec<&str> = DependencyFilter::new(true).dependencies_of(&project).collect();
        assert_eq!(prod, ["@x/ui"]);
    }
}
