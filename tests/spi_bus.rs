mod tests {
    use embassy_time::Duration;
    use embedded_hal::spi::{ErrorKind, ErrorType, SpiBus};
    use myrtio_ws28xx::{
        BitOrder, BusConfig, DeviceConfig, SpiBusTransport, SpiTransport, TIMING_BITS, Transfer,
    };

    #[derive(Default)]
    struct MockBus {
        written: Vec<u16>,
        writes: usize,
        flushes: usize,
        fail: bool,
    }

    impl ErrorType for MockBus {
        type Error = ErrorKind;
    }

    impl SpiBus<u16> for MockBus {
        fn read(&mut self, _words: &mut [u16]) -> Result<(), Self::Error> {
            Ok(())
        }

        fn write(&mut self, words: &[u16]) -> Result<(), Self::Error> {
            if self.fail {
                return Err(ErrorKind::Overrun);
            }
            self.writes += 1;
            self.written.extend_from_slice(words);
            Ok(())
        }

        fn transfer(&mut self, _read: &mut [u16], write: &[u16]) -> Result<(), Self::Error> {
            self.write(write)
        }

        fn transfer_in_place(&mut self, _words: &mut [u16]) -> Result<(), Self::Error> {
            Ok(())
        }

        fn flush(&mut self) -> Result<(), Self::Error> {
            self.flushes += 1;
            Ok(())
        }
    }

    fn registered(bus_order: BitOrder) -> SpiBusTransport<MockBus> {
        let mut transport = SpiBusTransport::new(MockBus::default(), bus_order);
        let bus = BusConfig {
            data_pin: 4,
            max_transfer_bytes: 44,
        };
        assert_eq!(transport.register_bus(&bus), Ok(()));
        assert_eq!(transport.register_device(&DeviceConfig::ws28xx()), Ok(()));
        transport
    }

    #[test]
    fn test_lsb_first_bus_writes_words_as_is() {
        let mut transport = registered(BitOrder::LsbFirst);
        let words = [0, 0x1111, 0x7777, TIMING_BITS[8], 0];
        let transfer = Transfer {
            words: &words,
            timeout: None,
        };
        assert_eq!(transport.transmit(&transfer), Ok(()));

        let bus = transport.release();
        assert_eq!(bus.written, words);
        assert_eq!(bus.flushes, 1);
    }

    #[test]
    fn test_msb_first_bus_reverses_words() {
        let mut transport = registered(BitOrder::MsbFirst);
        let words = [0, TIMING_BITS[8], TIMING_BITS[0]];
        let transfer = Transfer {
            words: &words,
            timeout: None,
        };
        assert_eq!(transport.transmit(&transfer), Ok(()));

        let bus = transport.release();
        // Nibble 8 starts with a long high pulse: 1110 goes out first
        assert_eq!(bus.written, [0, 0xe888, 0x8888]);
        assert_eq!(bus.written[1] >> 12, 0b1110);
        assert_eq!(bus.flushes, 1);
    }

    #[test]
    fn test_msb_first_bus_long_frame() {
        let mut transport = registered(BitOrder::MsbFirst);
        let words: Vec<u16> = (0..100).map(|i| TIMING_BITS[i % 16]).collect();
        let transfer = Transfer {
            words: &words,
            timeout: None,
        };
        assert_eq!(transport.transmit(&transfer), Ok(()));

        let bus = transport.release();
        assert_eq!(bus.written.len(), 100);
        assert!(bus.writes > 1);
        for (sent, word) in bus.written.iter().zip(&words) {
            assert_eq!(sent.reverse_bits(), *word);
        }
    }

    #[test]
    fn test_device_order_matching_bus_order() {
        let mut transport = SpiBusTransport::new(MockBus::default(), BitOrder::MsbFirst);
        let device = DeviceConfig {
            bit_order: BitOrder::MsbFirst,
            ..DeviceConfig::ws28xx()
        };
        assert_eq!(transport.register_device(&device), Ok(()));
        let transfer = Transfer {
            words: &[0x1117],
            timeout: None,
        };
        assert_eq!(transport.transmit(&transfer), Ok(()));
        assert_eq!(transport.release().written, [0x1117]);
    }

    #[test]
    fn test_transmit_bus_error() {
        let mut transport = SpiBusTransport::new(
            MockBus {
                fail: true,
                ..MockBus::default()
            },
            BitOrder::LsbFirst,
        );
        let transfer = Transfer {
            words: &[0; 4],
            timeout: None,
        };
        assert_eq!(transport.transmit(&transfer), Err(ErrorKind::Overrun));
    }

    #[test]
    fn test_timeout_does_not_fail_delivered_frame() {
        let mut transport = registered(BitOrder::LsbFirst);
        let transfer = Transfer {
            words: &[0; 4],
            timeout: Some(Duration::from_ticks(0)),
        };
        assert_eq!(transport.transmit(&transfer), Ok(()));
        assert_eq!(transport.release().written, [0; 4]);
    }
}
