use serde::Serialize;

/// One mapped file and its declared dependencies
#[derive(Debug, Clone, Serialize)]
pub struct FileRecord {
    pub path: String,
    pub dependencies: Vec<String>,
}

/// Serializable view of the dependency mapping and the resolved order
#[derive(Debug, Clone, Serialize)]
pub struct BundleReport {
    pub files: Vec<FileRecord>,
    pub order: Vec<String>,
}
