mod tests {
    use myrtio_ws28xx::timing::{TIMING_BITS, decode_byte, decode_word, encode_byte};

    #[test]
    fn test_timing_table_is_bijective() {
        for (nibble, &word) in TIMING_BITS.iter().enumerate() {
            assert_eq!(decode_word(word), Some(nibble as u8));
        }
    }

    #[test]
    fn test_timing_symbols() {
        // Every digit is a 4-bit symbol: 0x1 short high, 0x7 long high
        for word in TIMING_BITS {
            for shift in [0, 4, 8, 12] {
                let symbol = (word >> shift) & 0xf;
                assert!(symbol == 0x1 || symbol == 0x7, "bad symbol in {word:#06x}");
            }
        }
        // Most significant bit of the nibble goes out first
        assert_eq!(TIMING_BITS[0b1000], 0x1117);
        assert_eq!(TIMING_BITS[0b0001], 0x7111);
    }

    #[test]
    fn test_encode_byte() {
        assert_eq!(encode_byte(0x00), [0x1111, 0x1111]);
        assert_eq!(encode_byte(0xff), [0x7777, 0x7777]);
        assert_eq!(encode_byte(0xa5), [TIMING_BITS[0xa], TIMING_BITS[0x5]]);
        assert_eq!(encode_byte(0x1e), [0x7111, 0x1777]);
    }

    #[test]
    fn test_encode_decode_all_bytes() {
        for value in 0..=u8::MAX {
            assert_eq!(decode_byte(encode_byte(value)), Some(value));
        }
    }

    #[test]
    fn test_decode_unknown_word() {
        assert_eq!(decode_word(0x0000), None);
        assert_eq!(decode_word(0x1112), None);
        assert_eq!(decode_byte([0x1111, 0x0000]), None);
    }
}
