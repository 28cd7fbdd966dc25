use crate::shared::Result;
use std::path::{Path, PathBuf};

/// Project name and directory pairs, in the order they were discovered
pub type DiscoveredProjects = Vec<(String, PathBuf)>;

/// ProjectDiscoverer port for finding the projects inside a solution
pub trait ProjectDiscoverer {
    /// Lists the projects under `root` in discovery order
    ///
    /// Names are unique; the first project found under a name wins. An empty
    /// list means nothing under `root` looks like a project.
    fn discover_projects(&self, root: &Path) -> Result<DiscoveredProjects>;
}
