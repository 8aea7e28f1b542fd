use crate::payload::models::Architecture;
use std::path::PathBuf;
use std::result;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PackError {
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error(transparent)]
    BinRWError(#[from] binrw::Error),

    #[error("Could not read the {architecture} payload from {path:?}: {source}")]
    InputReadError {
        architecture: Architecture,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Packed payload would be {size} bytes, which does not fit the 32-bit offset fields")]
    PayloadTooLarge { size: u64 },
}

pub type PackResult<T> = result::Result<T, PackError>;
