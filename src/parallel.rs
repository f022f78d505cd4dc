//! Параллельный обход независимых участков буфера
//!
//! Проходы размытия не зависят от конкретного пула потоков: они получают
//! исполнителя через трейт [`Executor`]. Есть два исполнителя:
//! - [`Sequential`] — всё на вызывающем потоке, по порядку;
//! - [`Rayon`] — глобальный пул rayon (фича `parallel`).
//!
//! Обход работает по схеме fork-join: возврат происходит только после
//! завершения всех задач.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Исполнитель независимых задач
pub trait Executor: Sync {
    /// Вызывает `task(index, chunk)` для каждого куска `dst` длины `chunk_len`
    /// (последний кусок может быть короче).
    ///
    /// Куски не пересекаются, поэтому задачи пишут без синхронизации.
    /// Строки изображения — куски длины `width`.
    fn for_each_chunk<F>(&self, dst: &mut [u32], chunk_len: usize, task: F)
    where
        F: Fn(usize, &mut [u32]) + Sync + Send;
}

/// Однопоточный исполнитель
#[derive(Debug, Clone, Copy, Default)]
pub struct Sequential;

impl Executor for Sequential {
    fn for_each_chunk<F>(&self, dst: &mut [u32], chunk_len: usize, task: F)
    where
        F: Fn(usize, &mut [u32]) + Sync + Send,
    {
        dst.chunks_mut(chunk_len)
            .enumerate()
            .for_each(|(index, chunk)| task(index, chunk));
    }
}

/// Исполнитель на глобальном пуле rayon
#[cfg(feature = "parallel")]
#[derive(Debug, Clone, Copy, Default)]
pub struct Rayon;

#[cfg(feature = "parallel")]
impl Executor for Rayon {
    fn for_each_chunk<F>(&self, dst: &mut [u32], chunk_len: usize, task: F)
    where
        F: Fn(usize, &mut [u32]) + Sync + Send,
    {
        dst.par_chunks_mut(chunk_len)
            .enumerate()
            .for_each(|(index, chunk)| task(index, chunk));
    }
}

/// Исполнитель по умолчанию для текущего набора фич
#[cfg(feature = "parallel")]
pub type DefaultExecutor = Rayon;

/// Исполнитель по умолчанию для текущего набора фич
#[cfg(not(feature = "parallel"))]
pub type DefaultExecutor = Sequential;

/// Фиксирует число рабочих потоков глобального пула.
///
/// Без фичи `parallel` ничего не делает. Повторная настройка пула
/// (например, из тестов) не считается ошибкой и лишь пишется в лог.
pub fn configure_threads(threads: usize) {
    #[cfg(feature = "parallel")]
    {
        if let Err(err) = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
        {
            log::warn!("thread pool already initialised: {err}");
        }
    }
    #[cfg(not(feature = "parallel"))]
    {
        log::debug!("parallel feature disabled, ignoring threads = {threads}");
    }
}
