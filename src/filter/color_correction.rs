//! Color correction filter
//!
//! Compensates for the uneven perceived intensity of LED dies
//! driven with equal current. Red is left as is.

use super::Filter;
use crate::color::Rgb;
use crate::math8::scale8_trunc;

/// Correction factors of a typical SMD5050 LED strip
pub const TYPICAL_LED_STRIP: Rgb = Rgb {
    r: 255,
    g: 176,
    b: 240,
};

#[derive(Debug, Clone, Copy)]
pub struct ColorCorrection {
    enabled: bool,
}

impl ColorCorrection {
    pub const fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub const fn is_enabled(self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
}

impl Filter for ColorCorrection {
    fn apply(&self, pixel: &mut Rgb) {
        if !self.enabled {
            return;
        }

        pixel.g = scale8_trunc(pixel.g, TYPICAL_LED_STRIP.g);
        pixel.b = scale8_trunc(pixel.b, TYPICAL_LED_STRIP.b);
    }
}
