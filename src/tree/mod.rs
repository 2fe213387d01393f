//! # Folder Tree Module
//!
//! Folds the flat list of project paths into a tree of path segments and
//! renders it as directory text-art.
//!
//! ## Example
//!
//! ```
//! use monomap::core::Project;
//! use monomap::tree::{PathTreeBuilder, TreeRenderer};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let projects = vec![
//!     Project::new("root", "", vec![], vec![], 0)?,
//!     Project::new("pkg-a", "packages/a", vec![], vec![], 1)?,
//! ];
//!
//! let forest = PathTreeBuilder::new().build(&projects)?;
//! let text = TreeRenderer::new().render(&forest)?;
//!
//! assert_eq!(text, "root\n└── packages\n    └── a (pkg-a)\n");
//! # Ok(())
//! # }
//! ```

mod builder;
mod renderer;
mod types;

pub use builder::PathTreeBuilder;
pub use renderer::TreeRenderer;
pub use types::{PathForest, TreeNode};
