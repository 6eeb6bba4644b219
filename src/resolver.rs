use crate::error::{BundleError, Result};
use crate::mapper::DependencyMap;
use std::collections::HashSet;

/// Compute a total order over the mapped files in which every dependency
/// precedes its dependents.
///
/// Files are visited in registration order; each visit is a depth-first
/// postorder walk of its dependencies. A file already placed in the result
/// is never revisited. A dependency that is still on the active visit path
/// closes a cycle and fails the whole resolution; a dependency with no
/// mapped file fails it as a missing reference.
pub fn resolve_order(map: &DependencyMap) -> Result<Vec<String>> {
    let mut order: Vec<String> = Vec::with_capacity(map.len());
    let mut resolved: HashSet<String> = HashSet::with_capacity(map.len());
    let mut in_progress: HashSet<String> = HashSet::new();

    for file in map.files() {
        visit(map, file, &mut order, &mut resolved, &mut in_progress)?;
    }

    tracing::debug!(files = order.len(), "dependency order resolved");
    Ok(order)
}

fn visit(
    map: &DependencyMap,
    file: &str,
    order: &mut Vec<String>,
    resolved: &mut HashSet<String>,
    in_progress: &mut HashSet<String>,
) -> Result<()> {
    if resolved.contains(file) {
        return Ok(());
    }

    in_progress.insert(file.to_owned());

    // `file` is always a mapped key here: top-level visits come from the
    // key set and recursive visits are guarded by the missing check below.
    let dependencies = map.dependencies_of(file).unwrap_or_default();
    for dependency in dependencies {
        if in_progress.contains(dependency) {
            return Err(BundleError::CircularDependency(file.to_owned()));
        }
        if !map.contains(dependency) {
            return Err(BundleError::MissingDependency {
                file: file.to_owned(),
                dependency: dependency.clone(),
            });
        }
        visit(map, dependency, order, resolved, in_progress)?;
    }

    order.push(file.to_owned());
    resolved.insert(file.to_owned());
    in_progress.remove(file);
    Ok(())
}
