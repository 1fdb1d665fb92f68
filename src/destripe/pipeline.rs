use std::io::Write;
use std::path::Path;
use tracing::{info, instrument};

use crate::destripe::{
    common::error::{DestripeError, Result},
    diagnostics::{DiagnosticSink, NullSink, TextProfileSink},
    equalize, grid, interpolate, profile,
    raster::{GrayRaster, PngRasterReader, PngRasterWriter, RasterReader, RasterWriter},
};

/// Default path of the column-profile dump when diagnostics are enabled.
const DEFAULT_PROFILE_PATH: &str = "pl";

/// Configuration for one destriping run.
#[derive(Debug, Clone)]
pub struct DestripeConfig {
    /// Seam X positions, starting with the -1 sentinel and ending with the
    /// image width. Strictly increasing.
    pub seams: Vec<i64>,
    /// Number of equal-height row bands used as the vertical sampling
    /// resolution for local seam corrections.
    pub row_band_count: usize,
    /// Whether to dump the per-column mean/stddev profile.
    pub emit_diagnostics: bool,
}

impl Default for DestripeConfig {
    fn default() -> Self {
        Self {
            seams: Vec::new(),
            row_band_count: 1,
            emit_diagnostics: false,
        }
    }
}

impl DestripeConfig {
    pub fn builder() -> DestripeConfigBuilder {
        DestripeConfigBuilder::default()
    }
}

/// Builder for DestripeConfig
#[derive(Default)]
pub struct DestripeConfigBuilder {
    seams: Option<Vec<i64>>,
    row_band_count: Option<usize>,
    emit_diagnostics: Option<bool>,
}

impl DestripeConfigBuilder {
    pub fn seams(mut self, seams: Vec<i64>) -> Self {
        self.seams = Some(seams);
        self
    }

    pub fn row_band_count(mut self, count: usize) -> Self {
        self.row_band_count = Some(count);
        self
    }

    pub fn emit_diagnostics(mut self, enable: bool) -> Self {
        self.emit_diagnostics = Some(enable);
        self
    }

    pub fn build(self) -> DestripeConfig {
        let default = DestripeConfig::default();
        DestripeConfig {
            seams: self.seams.unwrap_or(default.seams),
            row_band_count: self.row_band_count.unwrap_or(default.row_band_count),
            emit_diagnostics: self.emit_diagnostics.unwrap_or(default.emit_diagnostics),
        }
    }
}

/// Orchestrates the four correction phases: column profile, slab
/// equalization, correction-grid build, and bilinear interpolation. Each
/// phase reads the output of the previous one; nothing is re-entered.
pub struct DestripePipeline<R: RasterReader, W: RasterWriter> {
    reader: R,
    writer: W,
    config: DestripeConfig,
}

impl DestripePipeline<PngRasterReader, PngRasterWriter> {
    pub fn new(config: DestripeConfig) -> Self {
        Self {
            reader: PngRasterReader,
            writer: PngRasterWriter,
            config,
        }
    }
}

impl<R: RasterReader, W: RasterWriter> DestripePipeline<R, W> {
    pub fn with_custom(reader: R, writer: W, config: DestripeConfig) -> Self {
        Self {
            reader,
            writer,
            config,
        }
    }

    fn validate(&self, image: &GrayRaster) -> Result<()> {
        if image.width() == 0 || image.height() == 0 {
            return Err(DestripeError::InvalidDimensions(
                image.width(),
                image.height(),
            ));
        }
        if self.config.row_band_count == 0 {
            return Err(DestripeError::NoRowBands);
        }
        let seams = &self.config.seams;
        if seams.len() < 2
            || seams[0] != -1
            || *seams.last().unwrap() != image.width() as i64
        {
            return Err(DestripeError::SeamSentinels);
        }
        for pair in seams.windows(2) {
            if pair[1] <= pair[0] {
                return Err(DestripeError::SeamOrder(pair[0], pair[1]));
            }
        }
        Ok(())
    }

    /// Runs the full correction on an in-memory raster, returning the
    /// corrected copy. The input is never modified.
    #[instrument(skip(self, image), fields(width = image.width(), height = image.height()))]
    pub fn run(&self, image: &GrayRaster) -> Result<GrayRaster> {
        if self.config.emit_diagnostics {
            let mut sink = TextProfileSink::create(DEFAULT_PROFILE_PATH)?;
            self.run_with_sink(image, &mut sink)
        } else {
            self.run_with_sink(image, &mut NullSink)
        }
    }

    /// Like `run`, but reports the column profile to the supplied sink
    /// regardless of the `emit_diagnostics` setting.
    pub fn run_with_sink(
        &self,
        image: &GrayRaster,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<GrayRaster> {
        self.validate(image)?;

        info!(
            seams = self.config.seams.len(),
            row_bands = self.config.row_band_count,
            "Starting destripe"
        );

        let ys = grid::row_band_centers(self.config.row_band_count, image.height());
        let mut working = image.clone();

        let column_means = {
            let _span = tracing::info_span!("column_profile").entered();
            profile::column_means(&working, sink)?
        };

        {
            let _span = tracing::info_span!("slab_equalize").entered();
            equalize::equalize_slabs(&mut working, &self.config.seams, &column_means);
        }

        let corrections = {
            let _span = tracing::info_span!("build_correction_grid").entered();
            grid::build_correction_grid(&working, &self.config.seams, &ys)
        };

        let output = {
            let _span = tracing::info_span!("interpolate").entered();
            interpolate::apply_corrections(
                &working,
                &self.config.seams,
                &ys,
                &corrections,
                self.config.row_band_count,
            )
        };

        info!("Destripe complete");
        Ok(output)
    }

    /// Decodes a raster from raw file bytes, corrects it, and encodes the
    /// result to `output`.
    #[instrument(skip(self, input_data, output), fields(input_size = input_data.len()))]
    pub fn convert(&self, input_data: &[u8], output: &mut dyn Write) -> Result<()> {
        let image = {
            let _span = tracing::info_span!("decode_raster").entered();
            self.reader.read_gray(input_data)?
        };

        let corrected = self.run(&image)?;

        {
            let _span = tracing::info_span!("encode_raster").entered();
            self.writer.write_gray(&corrected, output)?;
        }
        Ok(())
    }

    #[instrument(skip(self, input_path, output_path))]
    pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
    ) -> Result<()> {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            "Destriping file"
        );

        let input_data = std::fs::read(input_path).map_err(|e| {
            DestripeError::InputReadError(format!("{}: {}", input_path.display(), e))
        })?;

        let mut output_file = std::fs::File::create(output_path).map_err(|e| {
            DestripeError::OutputWriteError(format!("{}: {}", output_path.display(), e))
        })?;

        self.convert(&input_data, &mut output_file)?;

        Ok(())
    }

    pub fn config(&self) -> &DestripeConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: DestripeConfig) {
        self.config = config;
    }
}
