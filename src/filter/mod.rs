use crate::color::Rgb;

mod brightness;
mod color_correction;

pub trait Filter {
    /// Apply the filter to a single pixel in place
    fn apply(&self, pixel: &mut Rgb);
}

pub use brightness::BrightnessFilter;
pub use color_correction::{ColorCorrection, TYPICAL_LED_STRIP};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterConfig {
    /// Global brightness (0-255)
    pub brightness: u8,
    /// Apply typical LED strip color correction
    pub color_correction: bool,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            brightness: 255,
            color_correction: false,
        }
    }
}

/// Filter processor - adjusts pixels right before encoding
///
/// Brightness is always applied before color correction.
#[derive(Debug, Clone, Copy)]
pub struct FilterProcessor {
    /// Brightness filter
    pub brightness: BrightnessFilter,
    /// Color correction filter
    pub color_correction: ColorCorrection,
}

impl FilterProcessor {
    pub const fn new(config: &FilterConfig) -> Self {
        Self {
            brightness: BrightnessFilter::new(config.brightness),
            color_correction: ColorCorrection::new(config.color_correction),
        }
    }

    /// Get the current settings
    pub const fn config(&self) -> FilterConfig {
        FilterConfig {
            brightness: self.brightness.level(),
            color_correction: self.color_correction.is_enabled(),
        }
    }
}

impl Filter for FilterProcessor {
    fn apply(&self, pixel: &mut Rgb) {
        self.brightness.apply(pixel);
        self.color_correction.apply(pixel);
    }
}
