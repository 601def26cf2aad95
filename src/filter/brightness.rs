//! Global brightness
//!
//! Scales every channel by `level / 255`. Full brightness is a no-op.

use super::Filter;
use crate::{color::Rgb, math8::scale8_trunc};

#[derive(Debug, Clone, Copy)]
pub struct BrightnessFilter {
    /// Current brightness value (0-255)
    level: u8,
}

impl BrightnessFilter {
    pub const fn new(level: u8) -> Self {
        Self { level }
    }

    pub const fn level(self) -> u8 {
        self.level
    }

    pub fn set(&mut self, level: u8) {
        self.level = level;
    }
}

impl Filter for BrightnessFilter {
    fn apply(&self, pixel: &mut Rgb) {
        if self.level == 255 {
            return;
        }

        pixel.r = scale8_trunc(pixel.r, self.level);
        pixel.g = scale8_trunc(pixel.g, self.level);
        pixel.b = scale8_trunc(pixel.b, self.level);
    }
}
