use core::fmt;

/// Error returned when a strip cannot be set up
///
/// No part of the strip survives a failed initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitError<E> {
    /// The transport failed to initialize the bus
    Bus(E),
    /// The transport failed to attach the device
    Device(E),
    /// No DMA memory for the frame
    OutOfMemory { words: usize },
}

impl<E: fmt::Debug> fmt::Display for InitError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bus(err) => write!(f, "failed to initialize spi bus: {err:?}"),
            Self::Device(err) => write!(f, "failed to add spi device: {err:?}"),
            Self::OutOfMemory { words } => {
                write!(f, "failed to allocate {words} words of dma memory")
            }
        }
    }
}
