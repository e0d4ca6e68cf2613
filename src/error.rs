use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, DashboardError>;

#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error("invalid release date {value:?}")]
    InvalidReleaseDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("new release {id} not found")]
    NotFound { id: String },

    #[error("failed to read catalog {}", .path.display())]
    CatalogIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog {}", .path.display())]
    CatalogParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid value {value:?} for {key}")]
    Config { key: &'static str, value: String },
}
