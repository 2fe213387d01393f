use super::types::{PathForest, TreeNode};
use crate::core::Project;
use crate::error::MonomapError;

/// Folds project paths into a folder tree
///
/// Siblings keep the order in which they were first seen; nothing is sorted.
#[derive(Debug, Default)]
pub struct PathTreeBuilder;

impl PathTreeBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Build a fresh forest from projects in discovery order
    pub fn build(&self, projects: &[Project]) -> Result<PathForest, MonomapError> {
        projects
            .iter()
            .try_fold(PathForest::default(), |forest, project| {
                Self::with_project(forest, project)
            })
    }

    fn with_project(mut forest: PathForest, project: &Project) -> Result<PathForest, MonomapError> {
        if project.is_root() {
            child(&mut forest.nodes, "", true, project)?.claim(project)?;
            return Ok(forest);
        }

        let segments: Vec<&str> = project.segments().collect();
        let mut level = &mut forest.nodes;
        for (i, segment) in segments.iter().enumerate() {
            if segment.is_empty() {
                return Err(MonomapError::malformed(format!(
                    "'{}' has an empty segment in path '{}'",
                    project.name(),
                    project.path()
                )));
            }

            let node = child(level, segment, false, project)?;
            if i == segments.len() - 1 {
                node.claim(project)?;
                break;
            }
            level = node.inner_mut();
        }

        Ok(forest)
    }
}

/// The sibling named `segment`, created at the end of `level` if missing
fn child<'a>(
    level: &'a mut Vec<TreeNode>,
    segment: &str,
    root: bool,
    project: &Project,
) -> Result<&'a mut TreeNode, MonomapError> {
    let position = match level.iter().position(|n| n.name() == segment) {
        Some(position) if level[position].is_root() != root => {
            return Err(MonomapError::AmbiguousPath {
                path: project.path().to_string(),
                segment: segment.to_string(),
            });
        }
        Some(position) => position,
        None => {
            level.push(TreeNode::new(segment, root));
            level.len() - 1
        }
    };

    Ok(&mut level[position])
}
