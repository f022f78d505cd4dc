// src/config.rs
//! Параметры блокировки экрана
//!
//! Управляют всей цепочкой: масштабом захвата, силой размытия и запуском
//! программы блокировки. Все поля необязательны и могут задаваться в TOML;
//! радиус и число проходов из командной строки важнее файла:
//!
//! ```toml
//! radius = 5
//! times = 3
//! scale = 2
//! locker = "i3lock"
//! locker_args = ["--nofork"]
//! threads = 4
//! ```

use serde::{Deserialize, Serialize};
use std::fs;

use crate::error::ConfigError;
use crate::lock::{DEFAULT_LOCKER, LockCommand};

/// Наибольший допустимый радиус: окно шире любого экрана уже ничего не меняет
pub const MAX_RADIUS: usize = 4096;

/// Параметры одного запуска
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LockParams {
    /// Радиус окна размытия в пикселях уменьшенного кадра (окно `2r+1`)
    #[serde(default = "default_radius")]
    pub radius: usize,

    /// Сколько раз повторить горизонтальный и вертикальный проход
    #[serde(default = "default_times")]
    pub times: usize,

    /// Во сколько раз уменьшать кадр перед размытием (1 = без уменьшения)
    #[serde(default = "default_scale")]
    pub scale: u32,

    /// Программа блокировки
    #[serde(default = "default_locker")]
    pub locker: String,

    /// Дополнительные аргументы программы блокировки
    #[serde(default)]
    pub locker_args: Vec<String>,

    /// Число потоков пула (по умолчанию — по числу ядер)
    #[serde(default)]
    pub threads: Option<usize>,
}

fn default_radius() -> usize {
    5
}
fn default_times() -> usize {
    3
}
fn default_scale() -> u32 {
    2
}
fn default_locker() -> String {
    DEFAULT_LOCKER.to_string()
}

impl Default for LockParams {
    fn default() -> Self {
        Self {
            radius: default_radius(),
            times: default_times(),
            scale: default_scale(),
            locker: default_locker(),
            locker_args: Vec::new(),
            threads: None,
        }
    }
}

impl LockParams {
    /// Загружает параметры из TOML-файла
    ///
    /// # Ошибки
    /// Возвращает ошибку, если файл не читается или содержит недопустимый формат.
    pub fn from_toml_file(path: &str) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.into(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let params: Self = toml::from_str(contents)?;
        Ok(params)
    }

    /// Проверяет то, что движок размытия сам не проверяет.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.radius == 0 {
            return Err(ConfigError::Invalid("radius must be positive".into()));
        }
        if self.radius > MAX_RADIUS {
            return Err(ConfigError::Invalid(format!(
                "radius {} exceeds {MAX_RADIUS}",
                self.radius
            )));
        }
        if self.times == 0 {
            return Err(ConfigError::Invalid("times must be positive".into()));
        }
        if self.scale == 0 {
            return Err(ConfigError::Invalid("scale must be positive".into()));
        }
        if self.threads == Some(0) {
            return Err(ConfigError::Invalid("threads must be positive".into()));
        }
        if self.locker.trim().is_empty() {
            return Err(ConfigError::Invalid("locker must not be empty".into()));
        }
        Ok(())
    }

    #[must_use]
    pub fn lock_command(&self) -> LockCommand {
        LockCommand::new(self.locker.clone(), self.locker_args.clone())
    }
}
