use std::{
    fs::{File, OpenOptions},
    io::{BufReader, BufWriter},
    path::{Path, PathBuf},
};

pub use cli::CLIParser;
pub use error::Error;
pub use image::filter::sobel::MagnitudeOverflow;
use image::{
    filter::{
        grayscale::GrayscaleFilter,
        sobel::SobelOperator,
        ImageFilter,
    },
    reader::bmp::BmpImageReader,
    writer::bmp::BmpImageWriter,
    Image, ImageReader, ImageWriter,
};

mod cli;
pub mod color;
mod error;
pub mod image;
mod logger;

pub type Result<T> = std::result::Result<T, error::Error>;

pub struct Arguments {
    input_file: PathBuf,
    output_file: PathBuf,
    threshold: u32,
    overflow: MagnitudeOverflow,
}

impl Arguments {
    pub fn new(
        input_file: PathBuf,
        output_file: PathBuf,
        threshold: u32,
        overflow: MagnitudeOverflow,
    ) -> Self {
        Self {
            input_file,
            output_file,
            threshold,
            overflow,
        }
    }
}

fn open_input_file(file_path: &Path) -> Result<File> {
    File::open(file_path).map_err(|e| {
        Error::UnableToOpenInputFileForReading(file_path.display().to_string(), e)
    })
}

fn open_output_file(file_path: &Path) -> Result<File> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(file_path)
        .map_err(|e| {
            Error::UnableToOpenOutputFileForWriting(file_path.display().to_string(), e)
        })
}

pub fn read_bitmap(file_path: &Path) -> Result<Image> {
    let input_file = open_input_file(file_path)?;
    let image = BmpImageReader::new(BufReader::new(input_file)).read_image()?;
    log::info!(
        "Read {}x{} bitmap from '{}'",
        image.width(),
        image.height(),
        file_path.display()
    );
    Ok(image)
}

pub fn write_bitmap(file_path: &Path, image: &Image) -> Result<()> {
    let output_file = open_output_file(file_path)?;
    BmpImageWriter::new(BufWriter::new(output_file), image).write_image()?;
    log::info!("Wrote bitmap to '{}'", file_path.display());
    Ok(())
}

/// Reads the input bitmap, converts it to grayscale, applies the Sobel
/// operator and writes the result. Nothing is written if reading fails.
pub fn detect_edges(arguments: &Arguments) -> Result<()> {
    let mut image = read_bitmap(&arguments.input_file)?;
    GrayscaleFilter.apply(&mut image);
    log::info!("Converted image to grayscale");
    SobelOperator::new(arguments.threshold, arguments.overflow).apply(&mut image);
    log::info!(
        "Applied Sobel operator with threshold {} ({:?} overflow)",
        arguments.threshold,
        arguments.overflow
    );
    write_bitmap(&arguments.output_file, &image)
}
