use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HuffError {
    #[error("Input file not found at \"{}\"", .path.display())]
    SourceNotFound { path: PathBuf },

    #[error("Malformed header: {0}")]
    MalformedHeader(String),

    #[error("Corrupt bit stream: {0}")]
    CorruptStream(String),

    #[error("Generic I/O error")]
    IoError(#[from] io::Error),
}
