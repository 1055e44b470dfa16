use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("Failed to read fixture file '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse fixture YAML from '{path}'")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("Invalid fixture: {message}")]
    Invalid { message: String },
}
