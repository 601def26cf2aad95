//! Serial peripheral boundary
//!
//! The strip never touches hardware directly. Platforms implement
//! [`SpiTransport`] on top of their SPI master driver.

use embassy_time::Duration;

use crate::timing::BITS_PER_WORD;

mod spi_bus;

pub use spi_bus::SpiBusTransport;

/// SPI clock: four physical bits per 1.25 µs protocol bit
pub const SPI_CLOCK_HZ: u32 = 3_200_000;
/// Clock idle low, sample on the leading edge
pub const SPI_MODE: u8 = 0;
/// Only one frame is ever in flight
pub const SPI_QUEUE_SIZE: usize = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitOrder {
    MsbFirst,
    LsbFirst,
}

/// Bus registration parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusConfig {
    /// GPIO driving the strip data line (MOSI)
    pub data_pin: u8,
    /// Largest transfer the bus has to carry, in bytes
    pub max_transfer_bytes: usize,
}

/// Device registration parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceConfig {
    pub clock_hz: u32,
    pub mode: u8,
    pub bit_order: BitOrder,
    /// Chip select pin, strips have none
    pub cs_pin: Option<u8>,
    pub queue_size: usize,
}

impl DeviceConfig {
    /// Settings required to emulate WS28xx timing
    pub const fn ws28xx() -> Self {
        Self {
            clock_hz: SPI_CLOCK_HZ,
            mode: SPI_MODE,
            bit_order: BitOrder::LsbFirst,
            cs_pin: None,
            queue_size: SPI_QUEUE_SIZE,
        }
    }
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self::ws28xx()
    }
}

/// A single blocking transfer
#[derive(Debug, Clone, Copy)]
pub struct Transfer<'a> {
    /// Words to clock out, each least significant bit first
    pub words: &'a [u16],
    /// Give up waiting after this long. None waits forever.
    /// Transports that cannot cancel a transfer ignore it
    pub timeout: Option<Duration>,
}

impl Transfer<'_> {
    /// Length of the transfer on the wire
    pub const fn length_bits(&self) -> usize {
        self.words.len() * BITS_PER_WORD
    }
}

/// Platform SPI master used to clock out frames
///
/// Implement this trait to support different hardware platforms.
/// Errors are passed to the caller unchanged, nothing is retried.
pub trait SpiTransport {
    type Error;

    /// Initialize the bus and route the data pin
    fn register_bus(&mut self, config: &BusConfig) -> Result<(), Self::Error>;

    /// Attach the strip as a device on the bus
    fn register_device(&mut self, config: &DeviceConfig) -> Result<(), Self::Error>;

    /// Send the frame and block until the transfer is complete
    fn transmit(&mut self, transfer: &Transfer<'_>) -> Result<(), Self::Error>;
}
