use crate::color::BGRColorFormat;

pub mod filter;
pub mod reader;
pub mod writer;

pub const HEADER_LENGTH: usize = 54;
const FILE_SIZE_OFFSET: usize = 2;
const PIXEL_DATA_OFFSET: usize = 10;
const INFO_HEADER_SIZE_OFFSET: usize = 14;
const WIDTH_OFFSET: usize = 18;
const HEIGHT_OFFSET: usize = 22;
const COLOR_PLANES_OFFSET: usize = 26;
const BITS_PER_PIXEL_OFFSET: usize = 28;
const IMAGE_SIZE_OFFSET: usize = 34;
const INFO_HEADER_SIZE: u32 = 40;
const BITS_PER_PIXEL: u16 = 24;

pub trait ImageReader {
    fn read_image(&mut self) -> crate::Result<Image>;
}

pub trait ImageWriter {
    fn write_image(&mut self) -> crate::Result<()>;
}

/// Number of bytes a scanline of `width` pixels occupies, padded to a multiple of four.
pub fn row_stride(width: usize) -> usize {
    (width * BGRColorFormat::BYTES + 3) & !3
}

/// Number of filler bytes following the pixels of a scanline.
pub fn padding_length(width: usize) -> usize {
    row_stride(width) - width * BGRColorFormat::BYTES
}

/// The fixed-size bitmap header. Only width and height are interpreted,
/// all other bytes are carried through untouched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BitmapHeader {
    bytes: [u8; HEADER_LENGTH],
}

impl BitmapHeader {
    pub fn new(bytes: [u8; HEADER_LENGTH]) -> Self {
        Self { bytes }
    }

    /// Builds the header of an uncompressed 24-bit bitmap with the given size.
    pub fn for_dimensions(width: i32, height: i32) -> Self {
        let mut bytes = [0; HEADER_LENGTH];
        bytes[0..2].copy_from_slice(b"BM");
        let image_size = row_stride(width.max(0) as usize) * height.max(0) as usize;
        let file_size = (HEADER_LENGTH + image_size) as u32;
        bytes[FILE_SIZE_OFFSET..FILE_SIZE_OFFSET + 4].copy_from_slice(&file_size.to_le_bytes());
        bytes[PIXEL_DATA_OFFSET..PIXEL_DATA_OFFSET + 4]
            .copy_from_slice(&(HEADER_LENGTH as u32).to_le_bytes());
        bytes[INFO_HEADER_SIZE_OFFSET..INFO_HEADER_SIZE_OFFSET + 4]
            .copy_from_slice(&INFO_HEADER_SIZE.to_le_bytes());
        bytes[WIDTH_OFFSET..WIDTH_OFFSET + 4].copy_from_slice(&width.to_le_bytes());
        bytes[HEIGHT_OFFSET..HEIGHT_OFFSET + 4].copy_from_slice(&height.to_le_bytes());
        bytes[COLOR_PLANES_OFFSET..COLOR_PLANES_OFFSET + 2].copy_from_slice(&1u16.to_le_bytes());
        bytes[BITS_PER_PIXEL_OFFSET..BITS_PER_PIXEL_OFFSET + 2]
            .copy_from_slice(&BITS_PER_PIXEL.to_le_bytes());
        bytes[IMAGE_SIZE_OFFSET..IMAGE_SIZE_OFFSET + 4]
            .copy_from_slice(&(image_size as u32).to_le_bytes());
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8; HEADER_LENGTH] {
        &self.bytes
    }

    pub fn width(&self) -> i32 {
        self.read_i32(WIDTH_OFFSET)
    }

    pub fn height(&self) -> i32 {
        self.read_i32(HEIGHT_OFFSET)
    }

    fn read_i32(&self, offset: usize) -> i32 {
        let mut value = [0; 4];
        value.copy_from_slice(&self.bytes[offset..offset + 4]);
        i32::from_le_bytes(value)
    }
}

/// One scanline: `width` samples followed by the filler bytes read with them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Row {
    dots: Vec<BGRColorFormat>,
    padding: Vec<u8>,
}

impl Row {
    pub fn new(dots: Vec<BGRColorFormat>, padding: Vec<u8>) -> Self {
        Self { dots, padding }
    }

    pub fn dots(&self) -> &[BGRColorFormat] {
        &self.dots
    }

    pub fn dots_mut(&mut self) -> &mut [BGRColorFormat] {
        &mut self.dots
    }

    pub fn padding(&self) -> &[u8] {
        &self.padding
    }
}

/// A decoded bitmap. Row 0 is the first scanline stored in the file,
/// which is the bottom line of the picture.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Image {
    header: BitmapHeader,
    width: usize,
    height: usize,
    padding_length: usize,
    rows: Vec<Row>,
}

impl Image {
    /// Callers must hand over exactly `height` rows of `width` dots, each
    /// followed by `padding_length(width)` filler bytes.
    pub(crate) fn new(header: BitmapHeader, width: usize, height: usize, rows: Vec<Row>) -> Self {
        debug_assert_eq!(rows.len(), height);
        Self {
            header,
            width,
            height,
            padding_length: padding_length(width),
            rows,
        }
    }

    /// Creates an image with a freshly built header and zeroed row padding.
    pub fn from_fn<F>(width: u16, height: u16, mut dot: F) -> Self
    where
        F: FnMut(usize, usize) -> BGRColorFormat,
    {
        let header = BitmapHeader::for_dimensions(width as i32, height as i32);
        let width = width as usize;
        let height = height as usize;
        let rows = (0..height)
            .map(|row_index| {
                let dots = (0..width)
                    .map(|column_index| dot(row_index, column_index))
                    .collect();
                Row::new(dots, vec![0; padding_length(width)])
            })
            .collect();
        Self::new(header, width, height, rows)
    }

    pub fn header(&self) -> &BitmapHeader {
        &self.header
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn padding_length(&self) -> usize {
        self.padding_length
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn rows_mut(&mut self) -> &mut [Row] {
        &mut self.rows
    }

    pub fn dot(&self, row_index: usize, column_index: usize) -> BGRColorFormat {
        self.rows[row_index].dots[column_index]
    }

    pub fn set_dot(&mut self, row_index: usize, column_index: usize, dot: BGRColorFormat) {
        self.rows[row_index].dots[column_index] = dot;
    }
}
