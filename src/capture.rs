//! Захват корневого окна X11

use crate::error::CaptureError;
use crate::frame::Frame;
use crate::pixel::RGB_MASK;
use x11rb::connection::Connection;
use x11rb::protocol::xproto::{ConnectionExt as _, ImageFormat, ImageOrder};

/// Снимает содержимое экрана по умолчанию из `$DISPLAY`.
///
/// Поддерживаются только форматы с 4 байтами на пиксель (глубина 24 и 32).
pub fn capture_screen() -> Result<Frame, CaptureError> {
    let (conn, screen_num) = x11rb::connect(None)?;
    let setup = conn.setup();
    let screen = &setup.roots[screen_num];
    let (width, height) = (screen.width_in_pixels, screen.height_in_pixels);
    log::debug!("capturing root window {width}x{height} of screen {screen_num}");

    let reply = conn
        .get_image(
            ImageFormat::Z_PIXMAP,
            screen.root,
            0,
            0,
            width,
            height,
            u32::MAX,
        )?
        .reply()?;

    let (width, height) = (u32::from(width), u32::from(height));
    let expected = width as usize * height as usize * 4;
    if reply.data.len() != expected {
        return Err(CaptureError::UnsupportedFormat {
            depth: reply.depth,
            bytes: reply.data.len(),
            width,
            height,
        });
    }

    let little_endian = setup.image_byte_order == ImageOrder::LSB_FIRST;
    let data = reply
        .data
        .chunks_exact(4)
        .map(|b| {
            let bytes = [b[0], b[1], b[2], b[3]];
            let px = if little_endian {
                u32::from_le_bytes(bytes)
            } else {
                u32::from_be_bytes(bytes)
            };
            px & RGB_MASK
        })
        .collect();

    Ok(Frame {
        width,
        height,
        data,
    })
}
