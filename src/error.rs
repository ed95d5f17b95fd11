use std::path::PathBuf;
use thiserror::Error;

/// Fatal conditions only. Everything the pipeline can work around is
/// recorded in the [`Ledger`](crate::Ledger) instead and never surfaces
/// through a `Result`.
#[derive(Debug, Error)]
pub enum MendError {
    #[error("file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
