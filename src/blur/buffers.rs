//! Двойной буфер для многократного размытия
//!
//! Два слота — буферы вызывающего (исходный и назначенный выходной) — и
//! один собственный промежуточный буфер. Проход читает действительный слот и
//! пишет в другой, после чего слоты меняются ролями. В конце результат
//! гарантированно оказывается в выходном слоте.

use crate::error::BlurError;

/// Слот, в котором лежит последнее действительное изображение
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Source,
    Destination,
}

impl Slot {
    #[must_use]
    pub fn other(self) -> Self {
        match self {
            Slot::Source => Slot::Destination,
            Slot::Destination => Slot::Source,
        }
    }
}

/// Выделяет обнулённый буфер на `pixels` пикселей.
///
/// Нехватка памяти возвращается как ошибка, а не обрывает процесс.
pub fn alloc_pixels(pixels: usize) -> Result<Vec<u32>, BlurError> {
    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(pixels)
        .map_err(|_| BlurError::ScratchAllocation { pixels })?;
    buffer.resize(pixels, 0);
    Ok(buffer)
}

/// Буферы одного вызова размытия
#[derive(Debug)]
pub struct BlurBuffers<'a> {
    source: &'a mut [u32],
    destination: &'a mut [u32],
    scratch: Vec<u32>,
    valid: Slot,
}

/// Срезы для одного прохода: вход, выход и промежуточный буфер
pub struct PassBuffers<'b> {
    pub input: &'b [u32],
    pub output: &'b mut [u32],
    pub scratch: &'b mut [u32],
}

impl<'a> BlurBuffers<'a> {
    /// Занимает оба буфера и выделяет промежуточный того же размера.
    ///
    /// Изначально действительным считается исходный слот. Длины буферов
    /// должен согласовать вызывающий, проверка есть только в отладочной сборке.
    pub fn new(source: &'a mut [u32], destination: &'a mut [u32]) -> Result<Self, BlurError> {
        debug_assert_eq!(
            source.len(),
            destination.len(),
            "source and destination must have the same shape"
        );
        let scratch = alloc_pixels(source.len())?;

        Ok(Self {
            source,
            destination,
            scratch,
            valid: Slot::Source,
        })
    }

    #[must_use]
    pub fn valid(&self) -> Slot {
        self.valid
    }

    /// Выдаёт действительный слот на чтение, второй слот на запись и промежуточный буфер.
    pub fn split(&mut self) -> PassBuffers<'_> {
        let (input, output): (&[u32], &mut [u32]) = match self.valid {
            Slot::Source => (&*self.source, &mut *self.destination),
            Slot::Destination => (&*self.destination, &mut *self.source),
        };
        PassBuffers {
            input,
            output,
            scratch: &mut self.scratch,
        }
    }

    /// Отмечает, что последний проход записал результат во второй слот.
    pub fn swap(&mut self) {
        self.valid = self.valid.other();
    }

    /// Переносит результат в выходной слот, если он остался в исходном.
    ///
    /// Возвращает `true`, если понадобилось копирование.
    pub fn finish(self) -> bool {
        match self.valid {
            Slot::Destination => false,
            Slot::Source => {
                self.destination.copy_from_slice(self.source);
                true
            }
        }
    }
}
