use std::io::{self, Read};

use super::super::{
    padding_length, row_stride, BitmapHeader, Image, ImageReader, Row, HEADER_LENGTH,
};
use crate::color::BGRColorFormat;
use crate::error::Error;
use crate::logger;

pub struct BmpImageReader<T: Read> {
    reader: T,
}

impl<T: Read> BmpImageReader<T> {
    pub fn new(reader: T) -> Self {
        Self { reader }
    }

    fn read_header(&mut self) -> crate::Result<BitmapHeader> {
        let mut bytes = [0; HEADER_LENGTH];
        self.reader
            .read_exact(&mut bytes)
            .map_err(|e| match e.kind() {
                io::ErrorKind::UnexpectedEof => Error::TruncatedHeader(e),
                _ => Error::FailedToReadHeader(e),
            })?;
        logger::log_header(&bytes);
        Ok(BitmapHeader::new(bytes))
    }

    fn check_dimensions(header: &BitmapHeader) -> crate::Result<(usize, usize)> {
        let width = header.width();
        let height = header.height();
        if width < 0 || height < 0 {
            return Err(Error::UnsupportedDimensions(width, height));
        }
        Ok((width as usize, height as usize))
    }

    /// Reads one padded scanline. The buffer only grows as bytes arrive, so a
    /// header announcing an absurd width cannot force a huge allocation.
    fn read_row(
        &mut self,
        row_index: usize,
        width: usize,
        buffer: &mut Vec<u8>,
    ) -> crate::Result<Row> {
        let stride = row_stride(width);
        buffer.clear();
        (&mut self.reader)
            .take(stride as u64)
            .read_to_end(buffer)
            .map_err(|e| Error::FailedToReadRow(row_index, e))?;
        if buffer.len() < stride {
            return Err(Error::TruncatedRow(
                row_index,
                io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    format!("expected {} bytes, got {}", stride, buffer.len()),
                ),
            ));
        }
        let pixel_bytes = stride - padding_length(width);
        let dots = buffer[..pixel_bytes]
            .chunks_exact(BGRColorFormat::BYTES)
            .map(|bytes| BGRColorFormat::new(bytes[0], bytes[1], bytes[2]))
            .collect();
        let padding = buffer[pixel_bytes..].to_vec();
        log::trace!("Read row {} ({} bytes)", row_index, stride);
        Ok(Row::new(dots, padding))
    }
}

impl<T: Read> ImageReader for BmpImageReader<T> {
    fn read_image(&mut self) -> crate::Result<Image> {
        let header = self.read_header()?;
        let (width, height) = Self::check_dimensions(&header)?;
        log::debug!(
            "Bitmap is {}x{} with {} padding bytes per row",
            width,
            height,
            padding_length(width)
        );
        let mut buffer = Vec::new();
        let mut rows = Vec::new();
        for row_index in 0..height {
            rows.push(self.read_row(row_index, width, &mut buffer)?);
        }
        Ok(Image::new(header, width, height, rows))
    }
}
