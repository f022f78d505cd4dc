// src/blur/mod.rs
//! Многопроходное прямоугольное размытие
//!
//! Один проход — горизонтальное размытие во временный буфер и вертикальное
//! из него в выходной. Повторение прохода несколько раз приближает гауссово
//! размытие (свёртка нескольких прямоугольных ядер).
//!
//! ## Буферы
//!
//! Исходный и выходной буферы вызывающего чередуются ролями между проходами
//! ([`BlurBuffers`]), промежуточный буфер выделяется один раз на вызов.
//! Исходный буфер поэтому портится при `times >= 2`.
//!
//! ## Пример
//! ```
//! use blurlock::blur::box_blur;
//! use blurlock::pixel::rgb;
//!
//! let (height, width) = (4, 6);
//! let mut src = vec![rgb(200, 100, 50); height * width];
//! let mut dest = vec![0; height * width];
//! box_blur(&mut dest, &mut src, height, width, 1, 2)?;
//! assert_eq!(dest.len(), height * width);
//! # Ok::<(), blurlock::error::BlurError>(())
//! ```

pub mod buffers;
pub mod pass;

pub use buffers::{BlurBuffers, PassBuffers, Slot};
pub use pass::{box_blur_h, box_blur_v};

use crate::error::BlurError;
use crate::parallel::{DefaultExecutor, Executor};

/// Один проход: строки `src` в `scratch`, затем столбцы `scratch` в `dest`.
pub fn box_blur_once<E: Executor>(
    executor: &E,
    dest: &mut [u32],
    src: &[u32],
    scratch: &mut [u32],
    height: usize,
    width: usize,
    radius: usize,
) {
    box_blur_h(executor, scratch, src, height, width, radius);
    box_blur_v(executor, dest, scratch, height, width, radius);
}

/// Применяет [`box_blur_once`] `times` раз, результат всегда в `dest`.
///
/// Параметры не проверяются: `height`, `width` и `times` должны быть
/// положительными, а оба буфера — длины `height * width`.
///
/// # Ошибки
/// [`BlurError::ScratchAllocation`], если не удалось выделить промежуточный буфер.
pub fn box_blur_with<E: Executor>(
    executor: &E,
    dest: &mut [u32],
    src: &mut [u32],
    height: usize,
    width: usize,
    radius: usize,
    times: usize,
) -> Result<(), BlurError> {
    debug_assert!(times >= 1, "at least one pass is required");
    debug_assert_eq!(src.len(), height * width);

    let mut buffers = BlurBuffers::new(src, dest)?;
    for pass in 0..times {
        log::trace!("blur pass {}/{times} from {:?}", pass + 1, buffers.valid());
        let PassBuffers {
            input,
            output,
            scratch,
        } = buffers.split();
        box_blur_once(executor, output, input, scratch, height, width, radius);
        buffers.swap();
    }

    if buffers.finish() {
        log::trace!("copied result of {times} passes back into destination");
    }
    Ok(())
}

/// То же, что [`box_blur_with`], на исполнителе по умолчанию.
pub fn box_blur(
    dest: &mut [u32],
    src: &mut [u32],
    height: usize,
    width: usize,
    radius: usize,
    times: usize,
) -> Result<(), BlurError> {
    box_blur_with(
        &DefaultExecutor::default(),
        dest,
        src,
        height,
        width,
        radius,
        times,
    )
}
