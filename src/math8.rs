/// Scale an 8-bit value by `scale / 255` (0-255 = 0.0-1.0)
///
/// Uses float math and truncates toward zero, so `scale = 255`
/// returns the value unchanged and `scale = 0` returns zero.
#[inline]
#[allow(
    clippy::cast_lossless,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub const fn scale8_trunc(value: u8, scale: u8) -> u8 {
    (value as f32 * (scale as f32 / 255.0)) as u8
}
