//! freqdata - reduce a WAV file to per-window frequency bands as JSON

use clap::Parser;
use frequency_data::config::{DEFAULT_REDUCTION_FACTOR, DEFAULT_WINDOW_SIZE};
use frequency_data::{process_audio, ChannelMode, ReducerConfig};
use std::path::PathBuf;
use std::process::ExitCode;

/// Reduce a WAV file to averaged FFT magnitude bands for visualization.
///
/// The signal is cut into non-overlapping windows (trailing samples that do
/// not fill a window are dropped). Each window's lower-half DFT magnitudes
/// are averaged in groups of REDUCTION_FACTOR bins. No window function or dB
/// scaling is applied.
#[derive(Parser, Debug)]
#[command(name = "freqdata")]
#[command(version)]
struct Cli {
    /// Input WAV file
    input: PathBuf,

    /// Output JSON file (created or overwritten)
    output: PathBuf,

    /// Samples per window
    #[arg(short = 'w', long, default_value_t = DEFAULT_WINDOW_SIZE)]
    window_size: usize,

    /// Adjacent magnitude bins averaged into one band
    #[arg(short = 'r', long, default_value_t = DEFAULT_REDUCTION_FACTOR)]
    reduction_factor: usize,

    /// Multi-channel handling: "mixdown" or a zero-based channel index
    #[arg(short = 'c', long, default_value_t = ChannelMode::Mixdown)]
    channel: ChannelMode,

    /// Verbose output
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let config = ReducerConfig::new(cli.window_size, cli.reduction_factor)
        .with_channel_mode(cli.channel);

    match process_audio(&cli.input, &cli.output, &config) {
        Ok(data) => {
            log::debug!(
                "Wrote {} windows x {} bands",
                data.num_windows(),
                data.num_bands()
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
