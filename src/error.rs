use std::path::PathBuf;
use thiserror::Error;

/// All possible errors in the bundler
#[derive(Error, Debug)]
pub enum BundleError {
    #[error("Root directory {} not found or not a directory", .0.display())]
    RootNotFound(PathBuf),

    #[error("Circular dependency detected in file '{0}'")]
    CircularDependency(String),

    #[error("File '{file}' requires '{dependency}', which does not exist under the root")]
    MissingDependency { file: String, dependency: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, BundleError>;
