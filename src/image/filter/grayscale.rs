use super::ImageFilter;
use crate::{color::BGRColorFormat, image::Image};

/// Replaces every sample by its luma, written to all three channels.
#[derive(Clone, Copy, Debug, Default)]
pub struct GrayscaleFilter;

impl ImageFilter for GrayscaleFilter {
    fn apply(&self, image: &mut Image) {
        for row in image.rows_mut() {
            for dot in row.dots_mut() {
                *dot = BGRColorFormat::gray(dot.luma());
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::GrayscaleFilter;
    use crate::{
        color::BGRColorFormat,
        image::{filter::ImageFilter, Image},
    };

    fn colorful_image() -> Image {
        Image::from_fn(5, 4, |row, column| {
            BGRColorFormat::new((row * 60) as u8, (column * 50) as u8, (row * column * 13) as u8)
        })
    }

    #[test]
    fn gray_from_weighted_channels() {
        let mut image = Image::from_fn(1, 1, |_, _| BGRColorFormat::new(200, 150, 100));
        GrayscaleFilter.apply(&mut image);
        assert_eq!(image.dot(0, 0), BGRColorFormat::gray(140));
    }

    #[test]
    fn every_dot_becomes_gray() {
        let mut image = colorful_image();
        GrayscaleFilter.apply(&mut image);
        for row in image.rows() {
            assert!(row.dots().iter().all(BGRColorFormat::is_gray));
        }
    }

    #[test]
    fn applying_twice_changes_nothing() {
        let mut once = colorful_image();
        GrayscaleFilter.apply(&mut once);
        let mut twice = once.clone();
        GrayscaleFilter.apply(&mut twice);
        assert_eq!(once, twice);
    }

    #[test]
    fn header_and_padding_untouched() {
        let original = colorful_image();
        let mut image = original.clone();
        GrayscaleFilter.apply(&mut image);
        assert_eq!(image.header(), original.header());
        for (row, original_row) in image.rows().iter().zip(original.rows()) {
            assert_eq!(row.padding(), original_row.padding());
        }
    }
}
