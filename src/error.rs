use std::fmt::Display;
use std::io;

#[derive(Debug)]
pub enum Error {
    UnableToOpenInputFileForReading(String, io::Error),
    UnableToOpenOutputFileForWriting(String, io::Error),
    TruncatedHeader(io::Error),
    TruncatedRow(usize, io::Error),
    FailedToReadHeader(io::Error),
    FailedToReadRow(usize, io::Error),
    UnsupportedDimensions(i32, i32),
    FailedToWriteHeader(io::Error),
    FailedToWriteRow(usize, io::Error),
    FailedToFlushOutput(io::Error),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnableToOpenInputFileForReading(path, error) => {
                write!(
                    f,
                    "Unable to open input file '{}' for reading: {}",
                    path, error
                )
            }
            Self::UnableToOpenOutputFileForWriting(path, error) => {
                write!(
                    f,
                    "Unable to open output file '{}' for writing: {}",
                    path, error
                )
            }
            Self::TruncatedHeader(error) => {
                write!(f, "Bitmap header is incomplete: {}", error)
            }
            Self::TruncatedRow(row_index, error) => {
                write!(f, "Pixel row {} is incomplete: {}", row_index, error)
            }
            Self::FailedToReadHeader(error) => {
                write!(f, "Failed to read bitmap header: {}", error)
            }
            Self::FailedToReadRow(row_index, error) => {
                write!(f, "Failed to read pixel row {}: {}", row_index, error)
            }
            Self::UnsupportedDimensions(width, height) => {
                write!(
                    f,
                    "Unsupported image dimensions {}x{}. Width and height must not be negative.",
                    width, height
                )
            }
            Self::FailedToWriteHeader(error) => {
                write!(f, "Failed to write bitmap header: {}", error)
            }
            Self::FailedToWriteRow(row_index, error) => {
                write!(f, "Failed to write pixel row {}: {}", row_index, error)
            }
            Self::FailedToFlushOutput(error) => {
                write!(f, "Failed to flush output: {}", error)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::UnableToOpenInputFileForReading(_, error)
            | Self::UnableToOpenOutputFileForWriting(_, error)
            | Self::TruncatedHeader(error)
            | Self::TruncatedRow(_, error)
            | Self::FailedToReadHeader(error)
            | Self::FailedToReadRow(_, error)
            | Self::FailedToWriteHeader(error)
            | Self::FailedToWriteRow(_, error)
            | Self::FailedToFlushOutput(error) => Some(error),
            Self::UnsupportedDimensions(_, _) => None,
        }
    }
}
