use super::Image;

pub mod grayscale;
pub mod sobel;

/// An in-place transformation over every sample of an image.
pub trait ImageFilter {
    fn apply(&self, image: &mut Image);
}
