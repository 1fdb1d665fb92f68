//! Seam destriping module
//!
//! This module corrects brightness discontinuities at known vertical seam
//! positions in a stitched single-channel raster, with separate modules for
//! raster I/O, statistics, the individual correction phases, and pipeline
//! orchestration.

pub mod common;
pub mod diagnostics;
pub mod equalize;
pub mod grid;
pub mod interpolate;
pub mod profile;
pub mod raster;
pub mod stats;

mod pipeline;


pub use common::{
    DestripeError,
    Result,
};

pub use raster::{
    GrayRaster,
    RasterReader,
    RasterWriter,
    PngRasterReader,
    PngRasterWriter,
};

pub use stats::MeanStd;

pub use diagnostics::{
    DiagnosticSink,
    NullSink,
    TextProfileSink,
};

pub use grid::{
    Correction,
    CorrectionGrid,
};

pub use pipeline::{
    DestripeConfig,
    DestripeConfigBuilder,
    DestripePipeline,
};
