use crate::blur::buffers::alloc_pixels;
use crate::error::BlurError;
use crate::parallel::{DefaultExecutor, Executor};
use crate::pixel::{RGB_MASK, channels};
use image::{ImageBuffer, Rgb};

/// Снимок экрана: пиксели `0x00RRGGBB` построчно
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u32>,
}

impl Frame {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; (width * height) as usize],
        }
    }

    /// Оборачивает готовые пиксели, если их ровно `width * height`.
    pub fn from_raw(width: u32, height: u32, data: Vec<u32>) -> Option<Self> {
        (data.len() == (width as usize) * (height as usize)).then_some(Self {
            width,
            height,
            data,
        })
    }

    pub fn get(&self, x: u32, y: u32) -> u32 {
        self.data[(y * self.width + x) as usize]
    }

    pub fn set(&mut self, x: u32, y: u32, value: u32) {
        self.data[(y * self.width + x) as usize] = value & RGB_MASK;
    }

    /// Размывает кадр на месте исполнителем по умолчанию.
    pub fn blur(&mut self, radius: usize, times: usize) -> Result<(), BlurError> {
        self.blur_with(&DefaultExecutor::default(), radius, times)
    }

    /// Размывает кадр на месте: сам кадр служит исходным буфером.
    ///
    /// Выходной буфер выделяется так же, как промежуточный: нехватка памяти
    /// возвращается как [`BlurError::ScratchAllocation`].
    pub fn blur_with<E: Executor>(
        &mut self,
        executor: &E,
        radius: usize,
        times: usize,
    ) -> Result<(), BlurError> {
        let mut output = alloc_pixels(self.data.len())?;
        crate::blur::box_blur_with(
            executor,
            &mut output,
            &mut self.data,
            self.height as usize,
            self.width as usize,
            radius,
            times,
        )?;
        self.data = output;
        Ok(())
    }

    /// Байты в порядке хоста, по 4 на пиксель (формат `WxH:native` у i3lock).
    pub fn to_native_bytes(&self) -> Vec<u8> {
        self.data.iter().flat_map(|px| px.to_ne_bytes()).collect()
    }

    pub fn to_rgb_image(&self) -> Vec<u8> {
        self.data
            .iter()
            .flat_map(|&px| channels(px).map(|c| c as u8))
            .collect()
    }

    pub fn save_as_png(&self, path: &str) -> Result<(), Box<dyn std::error::Error>> {
        let img: ImageBuffer<Rgb<u8>, Vec<u8>> =
            ImageBuffer::from_raw(self.width, self.height, self.to_rgb_image())
                .ok_or("Failed to create image buffer")?;
        img.save(path)?;
        Ok(())
    }
}
