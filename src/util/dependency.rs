use tracing::debug;

use crate::api::{
    gateway::Gateway,
    modrinth::{Dependency, DependencyTarget, DependencyType, ModrinthAPI},
};

/// Figures out what a user supplied dependency string refers to.
///
/// Tried in order: a project id or slug, then a version id, and anything else
/// is taken as a literal file name. A file name that happens to match a
/// project or version will be picked up as that instead.
pub fn resolve_dependency<G: Gateway>(api: &ModrinthAPI<G>, token: &str, kind: DependencyType) -> Dependency {
    let target = match api.resolve_project(token) {
        Ok(project) => DependencyTarget::ProjectId(project.id),
        Err(_) => match api.resolve_version(token) {
            Ok(version) => DependencyTarget::VersionId(version.id),
            Err(_) => DependencyTarget::FileName(token.to_owned()),
        },
    };

    debug!(token, ?target, ?kind, "resolved dependency");
    Dependency { target, dependency_type: kind }
}
