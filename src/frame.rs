//! Transmission buffer
//!
//! Layout of an encoded frame:
//! 1. one zero word before the first pixel
//! 2. six pattern words per pixel, channels in model order
//! 3. `reset_gap` zero words so the strip latches the frame

use heapless::Vec;

use crate::color::Rgb;
use crate::filter::{Filter, FilterProcessor};
use crate::model::LedModel;
use crate::timing::{BITS_PER_WORD, WORDS_PER_BYTE, decode_byte, encode_byte};

/// Zero words sent before the first pixel
pub const LEADING_WORDS: usize = 1;

/// Words produced for one pixel
pub const WORDS_PER_PIXEL: usize = 3 * WORDS_PER_BYTE;

/// Get the number of words in a frame for `leds` pixels
pub const fn frame_words(leds: usize, model: LedModel) -> usize {
    LEADING_WORDS + leds * WORDS_PER_PIXEL + model.reset_gap()
}

/// Source of DMA-capable memory for the frame
///
/// The allocation happens once, when the strip is created.
pub trait DmaAllocator<'a> {
    /// Get a region of exactly `words` words
    ///
    /// Returns None if there is not enough memory
    fn allocate(self, words: usize) -> Option<&'a mut [u16]>;
}

impl<'a> DmaAllocator<'a> for &'a mut [u16] {
    fn allocate(self, words: usize) -> Option<&'a mut [u16]> {
        self.get_mut(..words)
    }
}

impl<'a, const N: usize> DmaAllocator<'a> for &'a mut [u16; N] {
    fn allocate(self, words: usize) -> Option<&'a mut [u16]> {
        self.get_mut(..words)
    }
}

impl<'a, const N: usize> DmaAllocator<'a> for &'a mut Vec<u16, N> {
    fn allocate(self, words: usize) -> Option<&'a mut [u16]> {
        self.clear();
        self.resize_default(words).ok()?;
        Some(self.as_mut_slice())
    }
}

/// Encoded frame, sized once for a fixed LED count and model
#[derive(Debug)]
pub struct FrameBuffer<'a> {
    words: &'a mut [u16],
    leds: usize,
    model: LedModel,
}

impl<'a> FrameBuffer<'a> {
    /// Allocate a frame for `leds` pixels
    ///
    /// Returns None if the allocator is out of memory
    pub fn allocate<A>(allocator: A, leds: usize, model: LedModel) -> Option<Self>
    where
        A: DmaAllocator<'a>,
    {
        let words = allocator.allocate(frame_words(leds, model))?;
        Some(Self { words, leds, model })
    }

    /// Encode pixels into the frame
    ///
    /// Filters are applied to the pixels in place before encoding.
    ///
    /// # Panics
    ///
    /// Panics if the number of pixels differs from the number the frame
    /// was allocated for.
    pub fn encode(&mut self, pixels: &mut [Rgb], filters: &FilterProcessor) {
        assert_eq!(
            pixels.len(),
            self.leds,
            "pixel count changed without re-initialization"
        );

        self.words.fill(0);
        let mut written = LEADING_WORDS;
        let order = self.model.channel_order();
        for pixel in pixels.iter_mut() {
            filters.apply(pixel);
            for channel in order.arrange(*pixel) {
                let [high, low] = encode_byte(channel);
                self.words[written] = high;
                self.words[written + 1] = low;
                written += WORDS_PER_BYTE;
            }
        }
        // Reset gap is already zeroed
        written += self.model.reset_gap();

        assert_eq!(written, self.words.len(), "frame size mismatch");
    }

    /// Read a pixel back from the encoded words
    ///
    /// Returns None if the index is out of range or the words
    /// do not hold a valid encoding (e.g. before the first encode)
    pub fn decode_pixel(&self, index: usize) -> Option<Rgb> {
        if index >= self.leds {
            return None;
        }
        let start = LEADING_WORDS + index * WORDS_PER_PIXEL;
        let words = &self.words[start..start + WORDS_PER_PIXEL];
        let mut channels = [0u8; 3];
        for (channel, pair) in channels.iter_mut().zip(words.chunks_exact(WORDS_PER_BYTE)) {
            *channel = decode_byte([pair[0], pair[1]])?;
        }
        Some(self.model.channel_order().assemble(channels))
    }

    /// Encoded words
    pub fn words(&self) -> &[u16] {
        self.words
    }

    /// Number of words in the frame
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Length of the frame on the wire
    pub fn length_bits(&self) -> usize {
        self.words.len() * BITS_PER_WORD
    }

    pub const fn leds(&self) -> usize {
        self.leds
    }

    pub const fn model(&self) -> LedModel {
        self.model
    }
}
