use destripe_rs::destripe::{
    DestripeConfig, DestripePipeline, PngRasterReader, PngRasterWriter, RasterReader,
    RasterWriter,
};
use destripe_rs::logger;

use tracing::{error, info};

/// Interior seam X positions of the acquisition mosaic this tool was built
/// for; the sentinel entries are added once the image width is known.
const DEFAULT_INTERIOR_SEAMS: [i64; 12] = [
    2066, 4684, 7574, 10385, 13222, 15937, 18531, 21198, 23826, 26506, 29175, 31772,
];

/// One row band per thousand rows of image height.
const ROWS_PER_BAND: usize = 1000;

fn usage() -> ! {
    eprintln!("Usage: destripe_rs [-d] <input file> <output file>");
    std::process::exit(42);
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logger::init();

    let mut files = Vec::new();
    let mut diagnostics = false;
    for arg in std::env::args().skip(1) {
        if !arg.starts_with('-') {
            files.push(arg);
        } else if arg == "-d" {
            diagnostics = true;
        } else {
            eprintln!("Unknown option {arg}");
            usage();
        }
    }
    if files.len() < 2 {
        usage();
    }

    info!("Starting destripe_rs...");

    let input_data = std::fs::read(&files[0])?;
    let image = PngRasterReader.read_gray(&input_data)?;
    info!(
        input = %files[0],
        width = image.width(),
        height = image.height(),
        "Opened input image"
    );

    let mut seams = vec![-1];
    seams.extend(DEFAULT_INTERIOR_SEAMS);
    seams.push(image.width() as i64);

    let config = DestripeConfig::builder()
        .seams(seams)
        .row_band_count(image.height() / ROWS_PER_BAND)
        .emit_diagnostics(diagnostics)
        .build();
    let pipeline = DestripePipeline::new(config);

    info!(
        row_bands = pipeline.config().row_band_count,
        seams = pipeline.config().seams.len(),
        "Destripe pipeline initialized"
    );

    let corrected = match pipeline.run(&image) {
        Ok(corrected) => corrected,
        Err(e) => {
            error!("Destriping failed: {}", e);
            return Err(e.into());
        }
    };

    let mut output_file = std::fs::File::create(&files[1])?;
    PngRasterWriter.write_gray(&corrected, &mut output_file)?;
    info!(output = %files[1], "Wrote corrected image");

    Ok(())
}
