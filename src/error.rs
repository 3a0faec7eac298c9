use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    /// Colonnes obligatoires absentes du tableau importé.
    #[error("input table is missing required columns: {}", .missing.join(", "))]
    Schema { missing: Vec<String> },

    /// Libellé de shift impossible à interpréter comme `"<N> AM|PM - <N> AM|PM"`.
    #[error("malformed shift label {label:?}: {reason}")]
    Format { label: String, reason: &'static str },

    #[error("invalid shift catalog: {0}")]
    Catalog(String),

    #[error("{action} failed for {}: {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0} must be done first")]
    MissingStep(&'static str),

    #[error("unknown workplace: {0}")]
    UnknownWorkplace(String),

    #[error("workplace already exists: {0}")]
    DuplicateWorkplace(String),

    #[error("workplace name cannot be empty")]
    EmptyWorkplaceName,

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl RosterError {
    pub(crate) fn io<P: Into<PathBuf>>(action: &'static str, path: P, source: std::io::Error) -> Self {
        Self::Io {
            action,
            path: path.into(),
            source,
        }
    }

    pub(crate) fn format(label: &str, reason: &'static str) -> Self {
        Self::Format {
            label: label.to_string(),
            reason,
        }
    }
}

pub type Result<T, E = RosterError> = std::result::Result<T, E>;
