//! WS28xx LED strip driver
//!
//! Colors are expanded into the strip's pulse-width bit pattern and sent
//! over an SPI data line. Each protocol bit becomes four SPI bits at
//! 3.2 MHz, so one nibble maps to one 16-bit DMA word.

#![no_std]

pub mod color;
pub mod error;
pub mod filter;
pub mod frame;
pub mod math8;
pub mod model;
pub mod strip;
pub mod timing;
pub mod transport;

pub use error::InitError;
pub use filter::{FilterConfig, FilterProcessor};
pub use frame::{DmaAllocator, FrameBuffer, frame_words};
pub use model::{ChannelOrder, LedModel};
pub use strip::{StripConfig, Ws28xx};
pub use timing::{TIMING_BITS, decode_byte, encode_byte};
pub use transport::{
    BitOrder, BusConfig, DeviceConfig, SpiBusTransport, SpiTransport, Transfer,
};

pub use color::Rgb;
pub use embassy_time::Duration;
