use std::io::Write;

use super::super::{Image, ImageWriter, Row};
use crate::color::BGRColorFormat;
use crate::error::Error;

pub struct BmpImageWriter<'a, T: Write> {
    writer: T,
    image: &'a Image,
}

impl<'a, T: Write> BmpImageWriter<'a, T> {
    pub fn new(writer: T, image: &'a Image) -> Self {
        Self { writer, image }
    }

    fn write_header(&mut self) -> crate::Result<()> {
        self.writer
            .write_all(self.image.header().as_bytes())
            .map_err(Error::FailedToWriteHeader)
    }

    fn write_rows(&mut self) -> crate::Result<()> {
        let mut buffer = Vec::with_capacity(
            self.image.width() * BGRColorFormat::BYTES + self.image.padding_length(),
        );
        for (row_index, row) in self.image.rows().iter().enumerate() {
            buffer.clear();
            Self::serialize_row(row, &mut buffer);
            self.writer
                .write_all(&buffer)
                .map_err(|e| Error::FailedToWriteRow(row_index, e))?;
            log::trace!("Wrote row {} ({} bytes)", row_index, buffer.len());
        }
        Ok(())
    }

    fn serialize_row(row: &Row, buffer: &mut Vec<u8>) {
        for dot in row.dots() {
            buffer.extend_from_slice(&dot.to_bytes());
        }
        buffer.extend_from_slice(row.padding());
    }
}

impl<T: Write> ImageWriter for BmpImageWriter<'_, T> {
    fn write_image(&mut self) -> crate::Result<()> {
        self.write_header()?;
        self.write_rows()?;
        self.writer.flush().map_err(Error::FailedToFlushOutput)
    }
}

#[cfg(test)]
mod test {
    use std::io::{self, Write};

    use super::BmpImageWriter;
    use crate::{
        color::BGRColorFormat,
        error::Error,
        image::{reader::bmp::BmpImageReader, BitmapHeader, Image, ImageReader, ImageWriter},
    };

    fn write_to_vec(image: &Image) -> Vec<u8> {
        let mut output = Vec::new();
        BmpImageWriter::new(&mut output, image)
            .write_image()
            .expect("writing to a vector should not fail");
        output
    }

    #[test]
    fn write_header_then_padded_rows() {
        let image = Image::from_fn(1, 2, |row, _| BGRColorFormat::new(1, 2, row as u8));
        let output = write_to_vec(&image);
        assert_eq!(&output[..54], image.header().as_bytes());
        assert_eq!(&output[54..], &[1, 2, 0, 0, 1, 2, 1, 0]);
    }

    #[test]
    fn round_trip_is_byte_exact() {
        let mut bytes = BitmapHeader::for_dimensions(3, 2).as_bytes().to_vec();
        bytes[38] = 0x13;
        #[rustfmt::skip]
        let pixel_data = [
            1, 2, 3,  4, 5, 6,  7, 8, 9,  0xAA, 0xBB, 0xCC,
            9, 8, 7,  6, 5, 4,  3, 2, 1,  0x01, 0x02, 0x03,
        ];
        bytes.extend_from_slice(&pixel_data);
        let image = BmpImageReader::new(&bytes[..]).read_image().unwrap();
        assert_eq!(write_to_vec(&image), bytes);
    }

    #[test]
    fn output_length_matches_stride() {
        for width in 1..9 {
            let image = Image::from_fn(width, 3, |_, _| BGRColorFormat::gray(9));
            let stride = (width as usize * 3 + 3) & !3;
            assert_eq!(write_to_vec(&image).len(), 54 + stride * 3);
        }
    }

    struct FailingWriter {
        accepted: usize,
    }

    impl Write for FailingWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.accepted == 0 {
                return Err(io::Error::new(io::ErrorKind::Other, "disk full"));
            }
            let written = buf.len().min(self.accepted);
            self.accepted -= written;
            Ok(written)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn failing_header_write() {
        let image = Image::from_fn(2, 2, |_, _| BGRColorFormat::gray(0));
        let result = BmpImageWriter::new(FailingWriter { accepted: 10 }, &image).write_image();
        assert!(matches!(result, Err(Error::FailedToWriteHeader(_))));
    }

    #[test]
    fn failing_row_write() {
        let image = Image::from_fn(2, 2, |_, _| BGRColorFormat::gray(0));
        let result = BmpImageWriter::new(FailingWriter { accepted: 54 + 8 }, &image).write_image();
        if let Err(Error::FailedToWriteRow(row_index, _)) = result {
            assert_eq!(row_index, 1);
            return;
        }
        panic!("Failing row write was not reported");
    }
}
