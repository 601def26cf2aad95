//! [`SpiTransport`] over an `embedded-hal` bus
//!
//! The bus must already run at 3.2 MHz in mode 0 with 16-bit words, as
//! described by [`DeviceConfig::ws28xx`](super::DeviceConfig::ws28xx).
//! Bit order is handled here: when the bus shifts words out in a different
//! order than the device expects, every word is bit-reversed before writing.

use embedded_hal::spi::SpiBus;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use super::{BitOrder, BusConfig, DeviceConfig, SpiTransport, Transfer};

/// Words bit-reversed per bus write
const SCRATCH_WORDS: usize = 32;

/// Transport backed by a configured `embedded-hal` SPI bus
///
/// Blocking HAL writes cannot be cancelled, so transfer timeouts are
/// not enforced by this transport.
pub struct SpiBusTransport<B> {
    bus: B,
    /// Order the bus shifts words out in
    bus_order: BitOrder,
    /// Order the registered device expects on the wire
    wire_order: BitOrder,
}

impl<B> SpiBusTransport<B> {
    /// Wrap a bus that shifts each word out in `bus_order`
    pub const fn new(bus: B, bus_order: BitOrder) -> Self {
        Self {
            bus,
            bus_order,
            wire_order: BitOrder::LsbFirst,
        }
    }

    /// Give the bus back
    pub fn release(self) -> B {
        self.bus
    }
}

impl<B: SpiBus<u16>> SpiBusTransport<B> {
    fn write_reversed(&mut self, words: &[u16]) -> Result<(), B::Error> {
        let mut scratch = [0u16; SCRATCH_WORDS];
        for source in words.chunks(SCRATCH_WORDS) {
            let reversed = &mut scratch[..source.len()];
            for (dst, word) in reversed.iter_mut().zip(source) {
                *dst = word.reverse_bits();
            }
            self.bus.write(reversed)?;
        }
        Ok(())
    }
}

impl<B: SpiBus<u16>> SpiTransport for SpiBusTransport<B> {
    type Error = B::Error;

    fn register_bus(&mut self, _config: &BusConfig) -> Result<(), Self::Error> {
        // Bus and pins are configured by the HAL constructor
        Ok(())
    }

    fn register_device(&mut self, config: &DeviceConfig) -> Result<(), Self::Error> {
        #[cfg(feature = "esp32-log")]
        {
            if config.bit_order != self.bus_order {
                println!("[SpiBusTransport.register_device] bus bit order differs, reversing words");
            }
        }
        self.wire_order = config.bit_order;
        Ok(())
    }

    fn transmit(&mut self, transfer: &Transfer<'_>) -> Result<(), Self::Error> {
        if self.wire_order == self.bus_order {
            self.bus.write(transfer.words)?;
        } else {
            self.write_reversed(transfer.words)?;
        }
        self.bus.flush()
    }
}
