//! Folder tree types

use crate::core::Project;
use crate::error::MonomapError;

/// One path segment in the folder tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    name: String,
    inner: Vec<TreeNode>,
    project_name: Option<String>,
    root: bool,
}

impl TreeNode {
    pub(crate) fn new(name: impl Into<String>, root: bool) -> Self {
        Self {
            name: name.into(),
            inner: Vec::new(),
            project_name: None,
            root,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Children in first-insertion order
    pub fn inner(&self) -> &[TreeNode] {
        &self.inner
    }

    pub(crate) fn inner_mut(&mut self) -> &mut Vec<TreeNode> {
        &mut self.inner
    }

    /// Name of the project living exactly at this node, if any
    pub fn project_name(&self) -> Option<&str> {
        self.project_name.as_deref()
    }

    pub fn is_root(&self) -> bool {
        self.root
    }

    pub fn is_leaf(&self) -> bool {
        self.inner.is_empty()
    }

    /// Mark this node as the location of `project`
    pub(crate) fn claim(&mut self, project: &Project) -> Result<(), MonomapError> {
        match &self.project_name {
            Some(existing) if existing != project.name() => Err(MonomapError::AmbiguousPath {
                path: project.path().to_string(),
                segment: self.name.clone(),
            }),
            _ => {
                self.project_name = Some(project.name().to_string());
                Ok(())
            }
        }
    }
}

/// Top-level nodes of the folder tree
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathForest {
    pub(crate) nodes: Vec<TreeNode>,
}

impl PathForest {
    pub fn nodes(&self) -> &[TreeNode] {
        &self.nodes
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Follow `path` segment by segment from the top level
    pub fn find(&self, path: &str) -> Option<&TreeNode> {
        if path.is_empty() {
            return self.nodes.iter().find(|n| n.is_root());
        }

        let mut level = self.nodes.as_slice();
        let mut found = None;
        for segment in path.split('/') {
            let node = level.iter().find(|n| !n.is_root() && n.name() == segment)?;
            level = node.inner();
            found = Some(node);
        }
        found
    }
}
