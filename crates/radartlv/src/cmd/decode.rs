use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use radartlv_frame::{DecodeError, DecoderConfig, FrameAssembler, FrameSink};
use radartlv_publish::JsonLinesSink;
use radartlv_source::ReadSource;
use tracing::warn;

use crate::cmd::DecodeArgs;
use crate::exit::{decode_error, io_error, CliError, CliResult, SUCCESS, USAGE};
use crate::output::{print_frame, OutputFormat};

pub fn run(args: DecodeArgs, format: OutputFormat) -> CliResult<i32> {
    let timeout = parse_duration(&args.timeout)?;
    let config = DecoderConfig {
        read_timeout: timeout,
        ..DecoderConfig::default()
    };

    let input = open_input(&args.path)?;
    let mut assembler = FrameAssembler::with_config(ReadSource::new(input), config);

    let mut json_sink = match &args.out {
        Some(path) => {
            let file = File::create(path)
                .map_err(|err| io_error(&format!("failed creating {}", path.display()), err))?;
            Some(JsonLinesSink::new(file))
        }
        None => None,
    };

    let running = Arc::new(AtomicBool::new(true));
    install_ctrlc_handler(running.clone())?;

    let mut decoded = 0usize;

    while running.load(Ordering::SeqCst) {
        let frame = match assembler.next_frame() {
            Ok(frame) => frame,
            // A quiet link is the steady state; keep listening.
            Err(DecodeError::Timeout { .. }) => continue,
            Err(DecodeError::SourceClosed) => break,
            Err(err) => return Err(decode_error("decode failed", err)),
        };

        if let Some(sink) = &mut json_sink {
            if let Err(err) = sink.publish(frame.clone()) {
                warn!(sequence = frame.sequence, error = %err, "failed writing frame to --out");
            }
        }
        if !args.quiet {
            print_frame(&frame, format);
        }

        decoded = decoded.saturating_add(1);
        if let Some(count) = args.count {
            if decoded >= count {
                break;
            }
        }
    }

    Ok(SUCCESS)
}

fn open_input(path: &Path) -> CliResult<Box<dyn Read>> {
    if path.as_os_str() == "-" {
        return Ok(Box::new(std::io::stdin()));
    }
    let file = File::open(path)
        .map_err(|err| io_error(&format!("failed opening {}", path.display()), err))?;
    Ok(Box::new(file))
}

fn install_ctrlc_handler(running: Arc<AtomicBool>) -> CliResult<()> {
    ctrlc::set_handler(move || {
        running.store(false, Ordering::SeqCst);
    })
    .map_err(|err| {
        CliError::new(
            crate::exit::INTERNAL,
            format!("signal handler setup failed: {err}"),
        )
    })
}

pub(crate) fn parse_duration(input: &str) -> CliResult<Duration> {
    let input = input.trim();
    if input.is_empty() {
        return Err(CliError::new(USAGE, "duration must not be empty"));
    }

    let (number, unit) = if let Some(num) = input.strip_suffix("ms") {
        (num, "ms")
    } else if let Some(num) = input.strip_suffix('s') {
        (num, "s")
    } else {
        (input, "s")
    };

    let value: u64 = number
        .parse()
        .map_err(|_| CliError::new(USAGE, format!("invalid duration value: {input}")))?;

    if value == 0 {
        return Err(CliError::new(USAGE, "duration must be greater than zero"));
    }

    match unit {
        "ms" => Ok(Duration::from_millis(value)),
        "s" => Ok(Duration::from_secs(value)),
        _ => Err(CliError::new(
            USAGE,
            format!("unsupported duration unit: {unit}"),
        )),
    }
}
