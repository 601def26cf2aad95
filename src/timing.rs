//! WS28xx bit timing table
//!
//! Every logical protocol bit is sent as a 4-bit SPI symbol, least
//! significant bit first. `0x1` goes out as `1000` (short high, logical 0)
//! and `0x7` as `1110` (long high, logical 1). One table word therefore
//! carries a whole nibble, its most significant bit in the lowest digit.

/// Physical pattern for every nibble value
pub const TIMING_BITS: [u16; 16] = [
    0x1111, 0x7111, 0x1711, 0x7711, 0x1171, 0x7171, 0x1771, 0x7771, //
    0x1117, 0x7117, 0x1717, 0x7717, 0x1177, 0x7177, 0x1777, 0x7777,
];

/// Number of words produced for one channel byte
pub const WORDS_PER_BYTE: usize = 2;

/// Number of physical bits in one buffer word
pub const BITS_PER_WORD: usize = 16;

/// Encode a channel byte, high nibble first
#[inline]
pub const fn encode_byte(value: u8) -> [u16; WORDS_PER_BYTE] {
    [
        TIMING_BITS[(value >> 4) as usize],
        TIMING_BITS[(value & 0x0f) as usize],
    ]
}

/// Find the nibble a pattern word encodes
///
/// Returns None if the word is not part of the table
#[allow(clippy::cast_possible_truncation)]
pub const fn decode_word(word: u16) -> Option<u8> {
    let mut nibble = 0;
    while nibble < TIMING_BITS.len() {
        if TIMING_BITS[nibble] == word {
            return Some(nibble as u8);
        }
        nibble += 1;
    }
    None
}

/// Decode a pair of pattern words back to the channel byte
pub const fn decode_byte(words: [u16; WORDS_PER_BYTE]) -> Option<u8> {
    match (decode_word(words[0]), decode_word(words[1])) {
        (Some(high), Some(low)) => Some((high << 4) | low),
        _ => None,
    }
}
