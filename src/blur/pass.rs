//! Одномерные проходы скользящим окном
//!
//! Каждый выходной пиксель — сумма попавших в окно `2r+1` отсчётов,
//! делённая на фиксированное `2r+1` с округлением вверх от половины.
//! Отсчёты за границей строки (столбца) считаются нулевыми, делитель не
//! пересчитывается: края изображения получаются темнее.

use crate::parallel::Executor;
use crate::pixel::{channels, pack};

/// На сколько полос строк делится вертикальный проход
const VERTICAL_BLOCKS: usize = 32;

/// Размывает каждую строку `src` и пишет результат в `dest`.
pub fn box_blur_h<E: Executor>(
    executor: &E,
    dest: &mut [u32],
    src: &[u32],
    height: usize,
    width: usize,
    radius: usize,
) {
    debug_assert_eq!(src.len(), height * width);
    debug_assert_eq!(dest.len(), height * width);

    let window = Window::new(radius, width);
    executor.for_each_chunk(dest, width, |y, line| {
        blur_row(line, row(src, y, width), &window);
    });
}

/// Размывает каждый столбец `src` и пишет результат в `dest`.
///
/// Столбцы обрабатываются все сразу полосами строк: у каждой полосы свой
/// набор сумм по столбцам, который сначала набирается из строк выше полосы,
/// а затем скользит вниз по одной строке.
pub fn box_blur_v<E: Executor>(
    executor: &E,
    dest: &mut [u32],
    src: &[u32],
    height: usize,
    width: usize,
    radius: usize,
) {
    debug_assert_eq!(src.len(), height * width);
    debug_assert_eq!(dest.len(), height * width);

    let window = Window::new(radius, height);
    let reach = window.reach;
    let rows_per_block = height
        .div_ceil(VERTICAL_BLOCKS)
        .max(2 * reach)
        .min(height)
        .max(1);

    executor.for_each_chunk(dest, rows_per_block * width, |block, chunk| {
        let y0 = block * rows_per_block;
        let mut acc = vec![[0u64; 3]; width];
        for y in y0.saturating_sub(reach + 1)..(y0 + reach).min(height) {
            add_row(&mut acc, row(src, y, width));
        }

        for (dy, out) in chunk.chunks_mut(width).enumerate() {
            let y = y0 + dy;
            if y + reach < height {
                add_row(&mut acc, row(src, y + reach, width));
            }
            if y > reach {
                sub_row(&mut acc, row(src, y - reach - 1, width));
            }
            for (px, &sums) in out.iter_mut().zip(&acc) {
                *px = window.average(sums);
            }
        }
    });
}

/// Окно `2r+1` на линии длины `len`.
///
/// Отсчёты берутся не дальше `reach = min(r, len)` от позиции: более
/// широкое окно всё равно накрывает всю линию. Настоящий радиус нужен
/// только делителю, поэтому тот считается в `u128`.
struct Window {
    reach: usize,
    half: u128,
    size: u128,
}

impl Window {
    fn new(radius: usize, len: usize) -> Self {
        let half = radius as u128;
        Self {
            reach: radius.min(len),
            half,
            size: 2 * half + 1,
        }
    }

    /// Суммы каналов целочисленные, поэтому `(sum + r) / (2r+1)` совпадает с
    /// `sum / (2r+1) + 0.5` с отбрасыванием дробной части и не накапливает
    /// ошибку на длинных линиях.
    #[inline]
    fn average(&self, sums: [u64; 3]) -> u32 {
        pack(sums.map(|sum| ((u128::from(sum) + self.half) / self.size) as u32))
    }
}

/// Скользящее окно по одной строке.
///
/// Перед выдачей позиции `x` в окно входит отсчёт `x + reach` и выходит
/// `x - reach - 1`.
#[inline]
fn blur_row(out: &mut [u32], src: &[u32], window: &Window) {
    let len = src.len();
    let reach = window.reach;
    let mut acc = [0u64; 3];

    for &px in &src[..reach] {
        add(&mut acc, px);
    }

    for (x, px) in out.iter_mut().enumerate() {
        if x + reach < len {
            add(&mut acc, src[x + reach]);
        }
        if x > reach {
            sub(&mut acc, src[x - reach - 1]);
        }
        *px = window.average(acc);
    }
}

#[inline]
fn add(acc: &mut [u64; 3], pixel: u32) {
    for (sum, c) in acc.iter_mut().zip(channels(pixel)) {
        *sum += u64::from(c);
    }
}

#[inline]
fn sub(acc: &mut [u64; 3], pixel: u32) {
    for (sum, c) in acc.iter_mut().zip(channels(pixel)) {
        *sum -= u64::from(c);
    }
}

#[inline]
fn row(src: &[u32], y: usize, width: usize) -> &[u32] {
    &src[y * width..(y + 1) * width]
}

fn add_row(acc: &mut [[u64; 3]], row: &[u32]) {
    for (sums, &px) in acc.iter_mut().zip(row) {
        add(sums, px);
    }
}

fn sub_row(acc: &mut [[u64; 3]], row: &[u32]) {
    for (sums, &px) in acc.iter_mut().zip(row) {
        sub(sums, px);
    }
}
