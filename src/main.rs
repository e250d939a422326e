use std::process::ExitCode;

use clap::Parser;
use log::{error, info};
use mandelbrot_viewer::{PixelsPresenterFactory, RunGuiCommand, ViewerConfig};

/// Interactive Mandelbrot set viewer.
///
/// WASD pans, R zooms in, F zooms out, Home resets the view, Tab toggles the
/// HUD and Escape quits.
#[derive(Parser, Debug)]
#[command(name = "mandelbrot", version, about, long_about = None)]
struct Cli {
    /// Maximum iterations per pixel
    #[arg(long, default_value_t = 200)]
    iterations: u32,

    /// Width and height of the square window in pixels
    #[arg(long, default_value_t = 720.0)]
    size: f64,

    /// Display refresh rate (1-240)
    #[arg(long, default_value_t = 120)]
    fps: u32,

    /// Cap on generator passes per second; uncapped when omitted
    #[arg(long)]
    generation_rate: Option<f64>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    let config = match ViewerConfig::new(cli.iterations, cli.size, cli.fps, cli.generation_rate) {
        Ok(config) => config,
        Err(err) => {
            error!("invalid configuration: {err}");
            return ExitCode::FAILURE;
        }
    };

    info!(
        "Generating Mandelbrot for {} iterations at {}x{}",
        config.max_iterations(),
        config.window_size(),
        config.window_size()
    );

    let command = RunGuiCommand::new(PixelsPresenterFactory::new());

    match command.execute(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["mandelbrot"]).unwrap();

        assert_eq!(cli.iterations, 200);
        assert_eq!(cli.size, 720.0);
        assert_eq!(cli.fps, 120);
        assert_eq!(cli.generation_rate, None);
    }

    #[test]
    fn test_all_flags() {
        let cli = Cli::try_parse_from([
            "mandelbrot",
            "--iterations",
            "50",
            "--size",
            "400",
            "--fps",
            "60",
            "--generation-rate",
            "30",
        ])
        .unwrap();

        assert_eq!(cli.iterations, 50);
        assert_eq!(cli.size, 400.0);
        assert_eq!(cli.fps, 60);
        assert_eq!(cli.generation_rate, Some(30.0));
    }

    #[test]
    fn test_rejects_non_numeric_iterations() {
        assert!(Cli::try_parse_from(["mandelbrot", "--iterations", "many"]).is_err());
    }
}
