//! Case-insensitive filename search over synced projects.

use crate::types::SyncedProject;

/// True when the project's filename contains `term`, ignoring case.
///
/// An empty term matches every project.
pub fn matches_search(project: &SyncedProject, term: &str) -> bool {
    project
        .filename
        .to_lowercase()
        .contains(&term.to_lowercase())
}

/// Keep the projects matching `term`, preserving listing order.
pub fn filter_projects(projects: &[SyncedProject], term: &str) -> Vec<SyncedProject> {
    projects
        .iter()
        .filter(|p| matches_search(p, term))
        .cloned()
        .collect()
}
