//! Ошибки библиотеки

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Ошибки движка размытия
#[derive(Debug, Error)]
pub enum BlurError {
    #[error("failed to allocate scratch buffer for {pixels} pixels")]
    ScratchAllocation { pixels: usize },
}

/// Ошибки загрузки и проверки конфигурации
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Ошибки масштабирования
#[derive(Debug, Error)]
pub enum ScaleError {
    #[error("scale factor must be positive")]
    ZeroFactor,
    #[error("{width}x{height} frame is too small for scale factor {factor}")]
    Empty { width: u32, height: u32, factor: u32 },
}

/// Ошибки захвата экрана
#[cfg(feature = "x11")]
#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("cannot connect to X server: {0}")]
    Connect(#[from] x11rb::errors::ConnectError),
    #[error("X connection failed: {0}")]
    Connection(#[from] x11rb::errors::ConnectionError),
    #[error("X request failed: {0}")]
    Reply(#[from] x11rb::errors::ReplyError),
    #[error("unsupported pixel format: depth {depth}, {bytes} bytes for {width}x{height}")]
    UnsupportedFormat {
        depth: u8,
        bytes: usize,
        width: u32,
        height: u32,
    },
}

/// Ошибки запуска программы блокировки
#[derive(Debug, Error)]
pub enum LockError {
    #[error("failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("failed to stream image to {program}: {source}")]
    Pipe {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("failed to wait for {program}: {source}")]
    Wait {
        program: String,
        #[source]
        source: io::Error,
    },
}
