use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::exit::CliResult;
use crate::output::OutputFormat;

pub mod decode;
pub mod simulate;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Decode frames from a serial device or capture file.
    Decode(DecodeArgs),
    /// Generate synthetic sensor wire bytes.
    Simulate(SimulateArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Decode(args) => decode::run(args, format),
        Command::Simulate(args) => simulate::run(args),
        Command::Version(args) => version::run(args),
    }
}

#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Device or capture file to read, or "-" for stdin.
    pub path: PathBuf,
    /// Per-field read timeout (e.g. 1s, 250ms).
    #[arg(long, default_value = "1s")]
    pub timeout: String,
    /// Exit after decoding N frames.
    #[arg(long)]
    pub count: Option<usize>,
    /// Append each frame as a JSON line to this file.
    #[arg(long, value_name = "FILE")]
    pub out: Option<PathBuf>,
    /// Suppress per-frame stdout output (useful with --out).
    #[arg(long)]
    pub quiet: bool,
}

#[derive(Args, Debug)]
pub struct SimulateArgs {
    /// File to write wire bytes to, or "-" for stdout.
    pub path: PathBuf,
    /// Number of frames to generate.
    #[arg(long, default_value = "10")]
    pub frames: u32,
    /// Point records per frame.
    #[arg(long, default_value = "8")]
    pub points: u16,
    /// Noise bytes to emit before the first frame (exercises resync).
    #[arg(long, default_value = "0")]
    pub leading_noise: usize,
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build information.
    #[arg(long)]
    pub extended: bool,
}
