//! Запуск внешней программы блокировки
//!
//! Кадр передаётся программе через stdin в сыром виде, геометрия — ключом
//! `-r WxH:native` (сырой формат i3lock).

use std::io::Write;
use std::process::{Command, ExitStatus, Stdio};

use crate::error::LockError;
use crate::frame::Frame;

/// Программа блокировки по умолчанию
pub const DEFAULT_LOCKER: &str = "i3lock";

/// Команда запуска программы блокировки
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockCommand {
    pub program: String,
    /// Аргументы пользователя, добавляются после служебных
    pub extra_args: Vec<String>,
}

impl Default for LockCommand {
    fn default() -> Self {
        Self {
            program: DEFAULT_LOCKER.to_string(),
            extra_args: Vec::new(),
        }
    }
}

impl LockCommand {
    pub fn new(program: impl Into<String>, extra_args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            extra_args,
        }
    }

    /// Полный список аргументов для кадра `width × height`.
    ///
    /// # Примеры
    /// ```
    /// use blurlock::lock::LockCommand;
    /// let cmd = LockCommand::new("i3lock", vec!["-n".into()]);
    /// assert_eq!(
    ///     cmd.args(1920, 1080),
    ///     ["-i", "/dev/stdin", "-r", "1920x1080:native", "-n"]
    /// );
    /// ```
    #[must_use]
    pub fn args(&self, width: u32, height: u32) -> Vec<String> {
        let mut args = vec![
            "-i".to_string(),
            "/dev/stdin".to_string(),
            "-r".to_string(),
            format!("{width}x{height}:native"),
        ];
        args.extend(self.extra_args.iter().cloned());
        args
    }

    /// Запускает программу, передаёт ей кадр и ждёт завершения.
    pub fn run(&self, frame: &Frame) -> Result<ExitStatus, LockError> {
        let args = self.args(frame.width, frame.height);
        log::info!("launching {} {}", self.program, args.join(" "));

        let mut child = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::piped())
            .spawn()
            .map_err(|source| LockError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(&frame.to_native_bytes())
                .map_err(|source| LockError::Pipe {
                    program: self.program.clone(),
                    source,
                })?;
        }

        let status = child.wait().map_err(|source| LockError::Wait {
            program: self.program.clone(),
            source,
        })?;
        log::debug!("{} exited with {status}", self.program);
        Ok(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_targets_i3lock_without_extra_args() {
        let cmd = LockCommand::default();
        assert_eq!(cmd.program, "i3lock");
        assert_eq!(cmd.args(4, 3), ["-i", "/dev/stdin", "-r", "4x3:native"]);
    }

    #[test]
    fn forwarded_args_keep_order() {
        let cmd = LockCommand::new("i3lock", vec!["--nofork".into(), "-e".into()]);
        assert_eq!(&cmd.args(1, 1)[4..], ["--nofork", "-e"]);
    }

    #[test]
    fn missing_program_is_spawn_error() {
        let cmd = LockCommand::new("blurlock-no-such-locker", Vec::new());
        let frame = Frame::new(1, 1);
        assert!(matches!(cmd.run(&frame), Err(LockError::Spawn { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn streams_frame_and_reports_status() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("fake-locker");
        let out = dir.path().join("received");
        std::fs::write(
            &script,
            format!("#!/bin/sh\ncat > '{}'\nexit 3\n", out.display()),
        )
        .unwrap();
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();

        let cmd = LockCommand::new(script.to_string_lossy(), Vec::new());
        let frame = Frame::from_raw(2, 2, vec![1, 2, 3, 4]).unwrap();
        let status = cmd.run(&frame).unwrap();

        assert_eq!(status.code(), Some(3));
        assert_eq!(std::fs::read(&out).unwrap(), frame.to_native_bytes());
    }
}
