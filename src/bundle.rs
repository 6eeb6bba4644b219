use crate::error::Result;
use crate::mapper::DependencyMap;
use crate::models::{BundleReport, FileRecord};
use crate::resolver;
use std::fs;
use std::path::{Path, PathBuf};

/// Resolved bundle for one root directory.
///
/// Construction scans the tree, extracts directives, and computes the
/// dependency order. The mapping and order are frozen afterward; only the
/// concatenation re-reads the filesystem.
pub struct Bundle {
    root: PathBuf,
    map: DependencyMap,
    order: Vec<String>,
}

impl Bundle {
    /// Map the tree under `root` and resolve the dependency order.
    pub fn open<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        let map = DependencyMap::scan(&root)?;
        let order = resolver::resolve_order(&map)?;
        Ok(Bundle { root, map, order })
    }

    /// File identifiers in dependency order, dependencies first.
    /// Returns a copy; the internal order cannot be mutated.
    pub fn sorted_files(&self) -> Vec<String> {
        self.order.clone()
    }

    /// Declared dependencies of one mapped file, in declaration order.
    pub fn dependencies_of(&self, file: &str) -> Option<&[String]> {
        self.map.dependencies_of(file)
    }

    /// Concatenate every file's content in dependency order, with a blank
    /// line after each file (including the last). Contents are read fresh
    /// from disk on every call.
    pub fn concatenate(&self) -> Result<String> {
        let mut out = String::new();
        for file in &self.order {
            let content = fs::read_to_string(self.root.join(file))?;
            for line in content.lines() {
                out.push_str(line);
                out.push('\n');
            }
            out.push('\n');
        }
        Ok(out)
    }

    /// Serializable view of the mapping and order, in registration order.
    pub fn report(&self) -> BundleReport {
        let files = self
            .map
            .files()
            .iter()
            .map(|path| FileRecord {
                path: path.clone(),
                dependencies: self
                    .map
                    .dependencies_of(path)
                    .unwrap_or_default()
                    .to_vec(),
            })
            .collect();

        BundleReport {
            files,
            order: self.order.clone(),
        }
    }
}
