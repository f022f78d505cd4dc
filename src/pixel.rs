//! Упакованный формат пикселя `0x00RRGGBB`
//!
//! Красный канал занимает биты 16–23, зелёный 8–15, синий 0–7.
//! Старший байт при чтении игнорируется и при записи всегда равен нулю.

/// Маска значимых 24 бит пикселя
pub const RGB_MASK: u32 = 0x00ff_ffff;

/// Раскладывает пиксель на каналы `[r, g, b]`.
///
/// # Примеры
/// ```
/// use blurlock::pixel::channels;
/// assert_eq!(channels(0xff12_3456), [0x12, 0x34, 0x56]);
/// ```
#[inline]
#[must_use]
pub fn channels(pixel: u32) -> [u32; 3] {
    [(pixel >> 16) & 0xff, (pixel >> 8) & 0xff, pixel & 0xff]
}

/// Собирает пиксель из каналов, обрезая каждый до 8 бит.
#[inline]
#[must_use]
pub fn pack([r, g, b]: [u32; 3]) -> u32 {
    ((r & 0xff) << 16) | ((g & 0xff) << 8) | (b & 0xff)
}

/// Собирает пиксель из отдельных компонент.
#[inline]
#[must_use]
pub fn rgb(r: u8, g: u8, b: u8) -> u32 {
    pack([u32::from(r), u32::from(g), u32::from(b)])
}
