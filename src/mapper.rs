use crate::error::{BundleError, Result};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Accepted quote pairs for a dependency directive: straight apostrophes and
/// the typographic pair U+2018/U+2019.
const QUOTE_PAIRS: [(&str, &str); 2] = [("'", "'"), ("\u{2018}", "\u{2019}")];

/// Immutable snapshot of the dependency relationships under one root.
///
/// Keys are root-relative paths with `/` separators. Key iteration order is
/// the order files were first registered during the scan, which is
/// deterministic because directory entries are visited in name order.
#[derive(Debug, Clone)]
pub struct DependencyMap {
    files: Vec<String>,
    deps: HashMap<String, Vec<String>>,
}

impl DependencyMap {
    /// Walk `root` recursively and extract every file's declared dependencies.
    ///
    /// Fails if `root` is not a readable directory or if any directory
    /// listing or file read fails; no partial mapping is ever returned.
    pub fn scan<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = root.as_ref();
        if !root.is_dir() {
            return Err(BundleError::RootNotFound(root.to_path_buf()));
        }

        let mut map = DependencyMap {
            files: Vec::new(),
            deps: HashMap::new(),
        };

        // Explicit worklist instead of call-stack recursion, so directory
        // nesting depth is bounded only by memory. Each entry carries the
        // directory path and its root-relative identifier prefix.
        let mut pending: Vec<(PathBuf, String)> = vec![(root.to_path_buf(), String::new())];

        while let Some((dir, prefix)) = pending.pop() {
            let mut entries = fs::read_dir(&dir)?.collect::<std::io::Result<Vec<_>>>()?;
            entries.sort_by_key(|e| e.file_name());

            let mut subdirs = Vec::new();
            for entry in entries {
                let name = entry.file_name().to_string_lossy().into_owned();
                let id = if prefix.is_empty() {
                    name
                } else {
                    format!("{prefix}/{name}")
                };

                let file_type = entry.file_type()?;
                if file_type.is_dir() {
                    subdirs.push((entry.path(), id));
                } else if file_type.is_file() {
                    map.register(&entry.path(), id)?;
                }
            }

            // Reversed so the stack pops subdirectories in name order.
            pending.extend(subdirs.into_iter().rev());
        }

        tracing::debug!(files = map.files.len(), "directory scan complete");
        Ok(map)
    }

    /// Read one file and record its identifier with its declared dependencies.
    fn register(&mut self, path: &Path, id: String) -> Result<()> {
        let content = fs::read_to_string(path)?;
        let dependencies: Vec<String> = content
            .lines()
            .filter_map(parse_directive)
            .map(str::to_owned)
            .collect();

        self.files.push(id.clone());
        self.deps.insert(id, dependencies);
        Ok(())
    }

    /// File identifiers in registration order.
    pub fn files(&self) -> &[String] {
        &self.files
    }

    /// Declared dependencies of one mapped file, in declaration order.
    pub fn dependencies_of(&self, file: &str) -> Option<&[String]> {
        self.deps.get(file).map(Vec::as_slice)
    }

    pub fn contains(&self, file: &str) -> bool {
        self.deps.contains_key(file)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

#[cfg(test)]
impl DependencyMap {
    /// Build a mapping directly, bypassing the filesystem. Test use only.
    pub(crate) fn from_entries(entries: Vec<(&str, Vec<&str>)>) -> Self {
        let files = entries.iter().map(|(f, _)| (*f).to_owned()).collect();
        let deps = entries
            .into_iter()
            .map(|(f, ds)| (f.to_owned(), ds.into_iter().map(str::to_owned).collect()))
            .collect();
        DependencyMap { files, deps }
    }
}

/// Parse a single line as a dependency directive.
///
/// A line is a directive only if it is exactly `require ` followed by an
/// opening quote, the dependency path, and the matching closing quote with
/// nothing after it. Mismatched pairs and double quotes are ordinary lines.
fn parse_directive(line: &str) -> Option<&str> {
    let rest = line.strip_prefix("require ")?;
    for (open, close) in QUOTE_PAIRS {
        if let Some(inner) = rest.strip_prefix(open).and_then(|r| r.strip_suffix(close)) {
            return Some(inner);
        }
    }
    None
}
