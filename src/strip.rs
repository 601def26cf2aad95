use embassy_time::Duration;
use smart_leds::SmartLedsWrite;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::color::Rgb;
use crate::error::InitError;
use crate::filter::{FilterConfig, FilterProcessor};
use crate::frame::{DmaAllocator, FrameBuffer, frame_words};
use crate::model::LedModel;
use crate::transport::{BusConfig, DeviceConfig, SpiTransport, Transfer};

/// Configuration for a strip
#[derive(Debug, Clone, Copy)]
pub struct StripConfig {
    /// GPIO connected to the strip data line
    pub data_pin: u8,
    pub model: LedModel,
    /// Number of LEDs in the strip
    pub leds: usize,
    /// Initial brightness and color correction
    pub filters: FilterConfig,
    /// Transfer timeout. None blocks until the transport returns
    pub timeout: Option<Duration>,
}

impl StripConfig {
    pub fn new(data_pin: u8, model: LedModel, leds: usize) -> Self {
        Self {
            data_pin,
            model,
            leds,
            filters: FilterConfig::default(),
            timeout: None,
        }
    }
}

/// WS28xx strip driven over SPI
///
/// Holds an exclusive borrow of the pixel buffer for its whole
/// lifetime; the buffer itself always stays owned by the caller.
pub struct Ws28xx<'a, T: SpiTransport> {
    // External dependencies and configuration
    transport: T,
    timeout: Option<Duration>,

    // Internal state
    pixels: &'a mut [Rgb],
    frame: FrameBuffer<'a>,

    // Internal dependencies
    filters: FilterProcessor,
}

impl<'a, T: SpiTransport> Ws28xx<'a, T> {
    /// Set up the transport and allocate the frame
    ///
    /// Only the first `config.leds` pixels of the buffer are driven.
    /// On failure the transport is handed back with the error.
    ///
    /// # Panics
    ///
    /// Panics if the pixel buffer is shorter than `config.leds`.
    pub fn new<A>(
        config: &StripConfig,
        mut transport: T,
        pixels: &'a mut [Rgb],
        allocator: A,
    ) -> Result<Self, (InitError<T::Error>, T)>
    where
        A: DmaAllocator<'a>,
    {
        let pixels = &mut pixels[..config.leds];
        let words = frame_words(config.leds, config.model);

        let bus = BusConfig {
            data_pin: config.data_pin,
            max_transfer_bytes: words * size_of::<u16>(),
        };
        if let Err(err) = transport.register_bus(&bus) {
            #[cfg(feature = "esp32-log")]
            println!("[Ws28xx.new] failed to register bus on pin {:?}", bus.data_pin);
            return Err((InitError::Bus(err), transport));
        }
        if let Err(err) = transport.register_device(&DeviceConfig::ws28xx()) {
            #[cfg(feature = "esp32-log")]
            println!("[Ws28xx.new] failed to register device");
            return Err((InitError::Device(err), transport));
        }

        let Some(frame) = FrameBuffer::allocate(allocator, config.leds, config.model) else {
            #[cfg(feature = "esp32-log")]
            println!("[Ws28xx.new] failed to allocate {:?} dma words", words);
            return Err((InitError::OutOfMemory { words }, transport));
        };

        #[cfg(feature = "esp32-log")]
        println!(
            "[Ws28xx.new] {:?} x {} on pin {:?}, frame is {:?} words",
            config.leds,
            config.model.as_str(),
            config.data_pin,
            words
        );

        Ok(Self {
            transport,
            timeout: config.timeout,
            pixels,
            frame,
            filters: FilterProcessor::new(&config.filters),
        })
    }

    /// Fill pixels in `[from, to)` with a color
    ///
    /// # Panics
    ///
    /// Panics if the range is out of bounds.
    pub fn fill(&mut self, color: Rgb, from: usize, to: usize) {
        self.pixels[from..to].fill(color);
    }

    /// Fill the whole strip with a color
    pub fn fill_all(&mut self, color: Rgb) {
        self.pixels.fill(color);
    }

    /// Set brightness, applied on the next update
    pub fn set_brightness(&mut self, brightness: u8) {
        #[cfg(feature = "esp32-log")]
        println!("[Ws28xx.set_brightness] setting brightness to {:?}", brightness);
        self.filters.brightness.set(brightness);
    }

    pub fn brightness(&self) -> u8 {
        self.filters.brightness.level()
    }

    /// Enable or disable color correction, applied on the next update
    pub fn set_color_correction(&mut self, enabled: bool) {
        #[cfg(feature = "esp32-log")]
        println!("[Ws28xx.set_color_correction] {:?}", enabled);
        self.filters.color_correction.set_enabled(enabled);
    }

    pub fn color_correction(&self) -> bool {
        self.filters.color_correction.is_enabled()
    }

    /// Encode the pixels and send them to the strip
    ///
    /// Brightness and color correction are applied to the pixel buffer in
    /// place, so a dimmed frame gets dimmer on every update until the
    /// pixels are redrawn. Blocks until the transport is done.
    pub fn update(&mut self) -> Result<(), T::Error> {
        self.frame.encode(self.pixels, &self.filters);

        let transfer = Transfer {
            words: self.frame.words(),
            timeout: self.timeout,
        };
        self.transport.transmit(&transfer).inspect_err(|_| {
            #[cfg(feature = "esp32-log")]
            println!(
                "[Ws28xx.update] transfer of {:?} bits failed",
                transfer.length_bits()
            );
        })
    }

    pub fn pixels(&self) -> &[Rgb] {
        self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [Rgb] {
        self.pixels
    }

    /// Number of LEDs in the strip
    pub fn leds(&self) -> usize {
        self.pixels.len()
    }

    pub fn model(&self) -> LedModel {
        self.frame.model()
    }

    /// Words sent by the last update
    pub fn frame(&self) -> &FrameBuffer<'a> {
        &self.frame
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Tear the strip down, giving back the transport and the pixels
    pub fn release(self) -> (T, &'a mut [Rgb]) {
        (self.transport, self.pixels)
    }
}

impl<T: SpiTransport> SmartLedsWrite for Ws28xx<'_, T> {
    type Error = T::Error;
    type Color = Rgb;

    /// Copy colors into the pixel buffer and update the strip
    ///
    /// Extra colors are ignored, missing ones keep their previous value.
    fn write<I, C>(&mut self, iterator: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = C>,
        C: Into<Self::Color>,
    {
        for (pixel, color) in self.pixels.iter_mut().zip(iterator) {
            *pixel = color.into();
        }
        self.update()
    }
}
