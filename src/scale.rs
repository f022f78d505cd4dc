//! Масштабирование кадра до и после размытия
//!
//! Размытие большого радиуса на уменьшенном кадре выглядит почти так же, как
//! на полном, а стоит в `factor²` раз дешевле. Оба преобразования —
//! ближайший сосед с целым коэффициентом.

use crate::error::ScaleError;
use crate::frame::Frame;
use crate::parallel::{DefaultExecutor, Executor};

/// Уменьшает кадр в `factor` раз, беря каждый `factor`-й пиксель.
pub fn downsample(frame: &Frame, factor: u32) -> Result<Frame, ScaleError> {
    downsample_with(&DefaultExecutor::default(), frame, factor)
}

pub fn downsample_with<E: Executor>(
    executor: &E,
    frame: &Frame,
    factor: u32,
) -> Result<Frame, ScaleError> {
    if factor == 0 {
        return Err(ScaleError::ZeroFactor);
    }
    if factor == 1 {
        return Ok(frame.clone());
    }

    let width = frame.width / factor;
    let height = frame.height / factor;
    if width == 0 || height == 0 {
        return Err(ScaleError::Empty {
            width: frame.width,
            height: frame.height,
            factor,
        });
    }

    log::debug!(
        "downsampling {}x{} -> {width}x{height}",
        frame.width,
        frame.height
    );
    let mut out = Frame::new(width, height);
    executor.for_each_chunk(&mut out.data, width as usize, |y, line| {
        let src_y = y as u32 * factor;
        for (x, px) in line.iter_mut().enumerate() {
            *px = frame.get(x as u32 * factor, src_y);
        }
    });
    Ok(out)
}

/// Увеличивает кадр в `factor` раз, повторяя каждый пиксель блоком `factor × factor`.
pub fn upscale(frame: &Frame, factor: u32) -> Result<Frame, ScaleError> {
    upscale_with(&DefaultExecutor::default(), frame, factor)
}

pub fn upscale_with<E: Executor>(
    executor: &E,
    frame: &Frame,
    factor: u32,
) -> Result<Frame, ScaleError> {
    if factor == 0 {
        return Err(ScaleError::ZeroFactor);
    }
    if factor == 1 {
        return Ok(frame.clone());
    }

    let width = frame.width * factor;
    let height = frame.height * factor;
    log::debug!(
        "upscaling {}x{} -> {width}x{height}",
        frame.width,
        frame.height
    );
    let mut out = Frame::new(width, height);
    executor.for_each_chunk(&mut out.data, width as usize, |y, line| {
        let src_y = y as u32 / factor;
        for (x, px) in line.iter_mut().enumerate() {
            *px = frame.get(x as u32 / factor, src_y);
        }
    });
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(width: u32, height: u32) -> Frame {
        Frame::from_raw(width, height, (0..width * height).collect()).unwrap()
    }

    #[test]
    fn downsample_takes_top_left_of_each_block() {
        let frame = numbered(5, 4);
        let small = downsample(&frame, 2).unwrap();
        assert_eq!((small.width, small.height), (2, 2));
        assert_eq!(small.data, vec![0, 2, 10, 12]);
    }

    #[test]
    fn upscale_replicates_blocks() {
        let frame = numbered(2, 1);
        let big = upscale(&frame, 3).unwrap();
        assert_eq!((big.width, big.height), (6, 3));
        assert_eq!(&big.data[..6], &[0, 0, 0, 1, 1, 1]);
        assert_eq!(&big.data[12..], &[0, 0, 0, 1, 1, 1]);
    }

    #[test]
    fn factor_one_is_identity() {
        let frame = numbered(3, 3);
        assert_eq!(downsample(&frame, 1).unwrap(), frame);
        assert_eq!(upscale(&frame, 1).unwrap(), frame);
    }

    #[test]
    fn rejects_degenerate_factors() {
        let frame = numbered(3, 3);
        assert!(matches!(downsample(&frame, 0), Err(ScaleError::ZeroFactor)));
        assert!(matches!(
            downsample(&frame, 4),
            Err(ScaleError::Empty { factor: 4, .. })
        ));
    }
}
