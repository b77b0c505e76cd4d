//! Sobel edge detection over a grayscale image.
//!
//! Every anchor `(row, column)` with a full 3×3 window below and to the right
//! of it receives the gradient magnitude of that window. The last two rows and
//! columns have no such window and keep their values. Magnitudes below the
//! threshold are raised to the threshold.

use clap::{builder::PossibleValue, ValueEnum};

use super::ImageFilter;
use crate::{color::BGRColorFormat, image::Image};

type Kernel3 = [[i32; 3]; 3];

const KERNEL_SIZE: usize = 3;
const SOBEL_KERNEL_X: Kernel3 = [[-1, 0, 1], [-2, 0, 2], [-1, 0, 1]];
const SOBEL_KERNEL_Y: Kernel3 = [[-1, -2, -1], [0, 0, 0], [1, 2, 1]];

/// How a value above 255 is stored in an 8-bit channel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MagnitudeOverflow {
    /// Keep the low eight bits.
    #[default]
    Wrap,
    /// Saturate at 255.
    Clamp,
}

impl ValueEnum for MagnitudeOverflow {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Wrap, Self::Clamp]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        match self {
            Self::Wrap => Some(PossibleValue::new("Wrap")),
            Self::Clamp => Some(PossibleValue::new("Clamp")),
        }
    }
}

impl MagnitudeOverflow {
    fn to_channel(self, value: u32) -> u8 {
        match self {
            Self::Wrap => value as u8,
            Self::Clamp => value.min(u8::MAX as u32) as u8,
        }
    }
}

/// Number of anchor positions along an axis of `length` pixels.
fn anchor_count(length: usize) -> usize {
    length.saturating_sub(KERNEL_SIZE - 1)
}

/// Dense `height × width` buffer of gradient magnitudes.
pub struct GradientField {
    width: usize,
    height: usize,
    magnitudes: Vec<u32>,
}

impl GradientField {
    fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            magnitudes: vec![0; width * height],
        }
    }

    /// Computes the magnitude at every anchor, reading only the red channel.
    pub fn compute(image: &Image) -> Self {
        let mut field = Self::new(image.width(), image.height());
        for row in 0..anchor_count(field.height) {
            for column in 0..anchor_count(field.width) {
                let magnitude = Self::magnitude_at(image, row, column);
                field.magnitudes[row * field.width + column] = magnitude;
            }
        }
        field
    }

    pub fn magnitude(&self, row: usize, column: usize) -> u32 {
        self.magnitudes[row * self.width + column]
    }

    fn magnitude_at(image: &Image, row: usize, column: usize) -> u32 {
        let mut x_sum = 0;
        let mut y_sum = 0;
        for (i, window_row) in image.rows()[row..row + KERNEL_SIZE].iter().enumerate() {
            let window = &window_row.dots()[column..column + KERNEL_SIZE];
            for (j, dot) in window.iter().enumerate() {
                let luma = dot.red as i32;
                x_sum += SOBEL_KERNEL_X[i][j] * luma;
                y_sum += SOBEL_KERNEL_Y[i][j] * luma;
            }
        }
        // f64 holds the sum exactly, and its sqrt is exact for perfect squares
        ((x_sum * x_sum + y_sum * y_sum) as f64).sqrt() as u32
    }
}

/// Gradient magnitude edge detector. Expects a grayscale image.
#[derive(Clone, Copy, Debug)]
pub struct SobelOperator {
    threshold: u32,
    overflow: MagnitudeOverflow,
}

impl SobelOperator {
    pub fn new(threshold: u32, overflow: MagnitudeOverflow) -> Self {
        Self {
            threshold,
            overflow,
        }
    }

    fn output_value(&self, magnitude: u32) -> u8 {
        let value = if magnitude > self.threshold {
            magnitude
        } else {
            self.threshold
        };
        self.overflow.to_channel(value)
    }
}

impl ImageFilter for SobelOperator {
    fn apply(&self, image: &mut Image) {
        // all magnitudes come from the unmodified image before anything is written
        let gradients = GradientField::compute(image);
        let anchor_rows = anchor_count(image.height());
        let anchor_columns = anchor_count(image.width());
        log::debug!(
            "Applying Sobel operator to {}x{} anchors with threshold {}",
            anchor_columns,
            anchor_rows,
            self.threshold
        );
        for (row_index, row) in image.rows_mut()[..anchor_rows].iter_mut().enumerate() {
            for (column_index, dot) in row.dots_mut()[..anchor_columns].iter_mut().enumerate() {
                let magnitude = gradients.magnitude(row_index, column_index);
                *dot = BGRColorFormat::gray(self.output_value(magnitude));
            }
        }
    }
}
