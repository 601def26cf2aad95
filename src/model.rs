//! Supported LED chip models
//!
//! The model decides the order in which color channels are sent
//! and how long the line stays low before the strip latches a frame.

use crate::color::Rgb;

const MODEL_NAME_WS2812B: &str = "ws2812b";
const MODEL_NAME_WS2815: &str = "ws2815";

/// Reset gaps in buffer words (16 SPI bits at 3.2 MHz = 5 µs each).
///
/// Both are shorter than the datasheet minimum but latch reliably.
/// Increase them if the strip shows torn frames.
const RESET_GAP_WS2812B: usize = 3;
const RESET_GAP_WS2815: usize = 30;

/// Order in which channel bytes are clocked out
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChannelOrder {
    /// Green, red, blue
    Grb,
    /// Red, green, blue
    Rgb,
}

impl ChannelOrder {
    /// Get channel bytes of a pixel in transmission order
    pub const fn arrange(self, pixel: Rgb) -> [u8; 3] {
        match self {
            Self::Grb => [pixel.g, pixel.r, pixel.b],
            Self::Rgb => [pixel.r, pixel.g, pixel.b],
        }
    }

    /// Build a pixel from channel bytes in transmission order
    pub const fn assemble(self, channels: [u8; 3]) -> Rgb {
        let [first, second, b] = channels;
        match self {
            Self::Grb => Rgb {
                r: second,
                g: first,
                b,
            },
            Self::Rgb => Rgb {
                r: first,
                g: second,
                b,
            },
        }
    }
}

/// Known LED chip models.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LedModel {
    #[default]
    Ws2812b,
    Ws2815,
}

impl LedModel {
    /// Model name used in log output
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ws2812b => MODEL_NAME_WS2812B,
            Self::Ws2815 => MODEL_NAME_WS2815,
        }
    }

    /// Channel order expected by the chip
    pub const fn channel_order(self) -> ChannelOrder {
        match self {
            Self::Ws2812b => ChannelOrder::Grb,
            Self::Ws2815 => ChannelOrder::Rgb,
        }
    }

    /// Number of zero words appended after the last pixel
    pub const fn reset_gap(self) -> usize {
        match self {
            Self::Ws2812b => RESET_GAP_WS2812B,
            Self::Ws2815 => RESET_GAP_WS2815,
        }
    }
}
