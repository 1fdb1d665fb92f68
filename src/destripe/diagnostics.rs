//! Diagnostic reporting collaborators
//!
//! The pipeline optionally emits the per-column mean/stddev profile to a
//! sink. The sink is a side channel only; correctness never depends on it.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::destripe::common::error::{DestripeError, Result};

pub trait DiagnosticSink {
    fn record_column(&mut self, x: usize, mean: f64, stddev: f64) -> Result<()>;
}

/// Sink that discards everything.
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn record_column(&mut self, _x: usize, _mean: f64, _stddev: f64) -> Result<()> {
        Ok(())
    }
}

/// Sink that writes one `x mean stddev` line per column, suitable for
/// plotting the column profile.
pub struct TextProfileSink<W: Write> {
    out: W,
}

impl TextProfileSink<BufWriter<File>> {
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::create(path.as_ref()).map_err(|e| {
            DestripeError::DiagnosticsWriteError(format!(
                "{}: {}",
                path.as_ref().display(),
                e
            ))
        })?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> TextProfileSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> DiagnosticSink for TextProfileSink<W> {
    fn record_column(&mut self, x: usize, mean: f64, stddev: f64) -> Result<()> {
        writeln!(self.out, "{x} {mean:.2} {stddev:.2}")
            .map_err(|e| DestripeError::DiagnosticsWriteError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_sink_writes_one_line_per_column() {
        let mut sink = TextProfileSink::new(Vec::new());
        sink.record_column(0, 127.5, 3.25).unwrap();
        sink.record_column(1, 10.0, 0.0).unwrap();
        let text = String::from_utf8(sink.out).unwrap();
        assert_eq!(text, "0 127.50 3.25\n1 10.00 0.00\n");
    }
}
