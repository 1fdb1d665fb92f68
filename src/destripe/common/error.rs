use thiserror::Error;

#[derive(Error, Debug)]
pub enum DestripeError {
    #[error("seam definitions must start with -1 and end with the image width")]
    SeamSentinels,

    #[error("seam positions must be strictly increasing, got {1} after {0}")]
    SeamOrder(i64, i64),

    #[error("row band count must be positive")]
    NoRowBands,

    #[error("Invalid image dimensions: width={0}, height={1}")]
    InvalidDimensions(usize, usize),

    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Failed to write output file: {0}")]
    OutputWriteError(String),

    #[error("Failed to decode raster: {0}")]
    DecodeError(String),

    #[error("Failed to encode raster: {0}")]
    EncodeError(String),

    #[error("Failed to write diagnostics: {0}")]
    DiagnosticsWriteError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DestripeError>;
