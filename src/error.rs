use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RoadmapError {
    #[error("Failed to read roadmap {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid roadmap {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Roadmap {0} defines no phases")]
    Empty(PathBuf),
}

pub type Result<T> = std::result::Result<T, RoadmapError>;
