/// Luma weights in hundredths, applied to red, green and blue.
const RED_WEIGHT: u32 = 30;
const GREEN_WEIGHT: u32 = 59;
const BLUE_WEIGHT: u32 = 11;
const WEIGHT_SCALE: u32 = 100;

/// A single 24-bit bitmap sample, stored in file order (blue, green, red).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BGRColorFormat {
    pub blue: u8,
    pub green: u8,
    pub red: u8,
}

impl BGRColorFormat {
    pub const BYTES: usize = 3;

    pub fn new(blue: u8, green: u8, red: u8) -> Self {
        BGRColorFormat { blue, green, red }
    }

    pub fn gray(value: u8) -> Self {
        BGRColorFormat {
            blue: value,
            green: value,
            red: value,
        }
    }

    /// `floor(0.3 * R + 0.59 * G + 0.11 * B)`, computed exactly in integers.
    pub fn luma(&self) -> u8 {
        let weighted = RED_WEIGHT * self.red as u32
            + GREEN_WEIGHT * self.green as u32
            + BLUE_WEIGHT * self.blue as u32;
        // weights sum to WEIGHT_SCALE, so the quotient never exceeds u8::MAX
        (weighted / WEIGHT_SCALE) as u8
    }

    pub fn to_bytes(self) -> [u8; 3] {
        [self.blue, self.green, self.red]
    }
}

impl From<[u8; 3]> for BGRColorFormat {
    fn from(value: [u8; 3]) -> Self {
        BGRColorFormat::new(value[0], value[1], value[2])
    }
}

#[cfg(test)]
impl BGRColorFormat {
    pub fn is_gray(&self) -> bool {
        self.red == self.green && self.green == self.blue
    }
}
