use std::path::PathBuf;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{} not found. Run generate_json.py first.", .path.display())]
    MissingInput { path: PathBuf },

    #[error("malformed schema {}: at JSON path {json_path} → {message}", .path.display())]
    MalformedSchema {
        path: PathBuf,
        json_path: String,
        message: String,
    },

    #[error("class `{class}` lists variant `{variant}`, which is not declared in `types` or `updates`")]
    UnknownClassVariant { class: String, variant: String },

    #[error("i/o error on {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io { path: path.into(), source }
    }
}
