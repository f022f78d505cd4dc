use anyhow::{Context, Result};
use blurlock::{Frame, LockParams, parallel, scale};
use clap::Parser;
use std::path::PathBuf;
use std::process;

/// Размытый снимок экрана для i3lock
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Радиус размытия (окно 2r+1), по умолчанию из конфигурации
    radius: Option<usize>,

    /// Количество проходов размытия, по умолчанию из конфигурации
    times: Option<usize>,

    /// Аргументы, передаваемые программе блокировки как есть
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    locker_args: Vec<String>,

    /// Путь к конфигурационному файлу в формате TOML
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Во сколько раз уменьшать кадр перед размытием
    #[arg(short, long)]
    scale: Option<u32>,

    /// Программа блокировки (по умолчанию: i3lock)
    #[arg(long)]
    locker: Option<String>,

    /// Сохранить размытый кадр в PNG вместо блокировки
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl Cli {
    fn params(&self) -> Result<LockParams> {
        let mut params = match &self.config {
            Some(path) => {
                let path = path.to_str().context("config path is not valid UTF-8")?;
                LockParams::from_toml_file(path)?
            }
            None => LockParams::default(),
        };
        if let Some(radius) = self.radius {
            params.radius = radius;
        }
        if let Some(times) = self.times {
            params.times = times;
        }
        if let Some(scale) = self.scale {
            params.scale = scale;
        }
        if let Some(locker) = &self.locker {
            params.locker.clone_from(locker);
        }
        params.locker_args.extend(self.locker_args.iter().cloned());
        params.validate()?;
        Ok(params)
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run(&Cli::parse()) {
        Ok(code) => process::exit(code),
        Err(err) => {
            eprintln!("blurlock: {err:#}");
            process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> Result<i32> {
    let params = cli.params()?;
    if let Some(threads) = params.threads {
        parallel::configure_threads(threads);
    }

    let screen = capture()?;
    log::info!("captured {}x{} screen", screen.width, screen.height);

    let mut small = scale::downsample(&screen, params.scale).context("downsampling screen")?;
    drop(screen);
    small
        .blur(params.radius, params.times)
        .context("blurring screen")?;
    let blurred = scale::upscale(&small, params.scale).context("upscaling screen")?;

    if let Some(path) = &cli.output {
        let path = path.to_str().context("output path is not valid UTF-8")?;
        blurred
            .save_as_png(path)
            .map_err(|err| anyhow::anyhow!("saving {path}: {err}"))?;
        log::info!("saved blurred screen to {path}");
        return Ok(0);
    }

    let status = params
        .lock_command()
        .run(&blurred)
        .context("running screen locker")?;
    Ok(status.code().unwrap_or(1))
}

#[cfg(feature = "x11")]
fn capture() -> Result<Frame> {
    blurlock::capture::capture_screen().context("capturing screen")
}

#[cfg(not(feature = "x11"))]
fn capture() -> Result<Frame> {
    anyhow::bail!("screen capture requires the `x11` feature")
}
