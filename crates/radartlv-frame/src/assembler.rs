use std::time::{Duration, SystemTime};

use radartlv_source::{ByteSource, SourceError};
use tracing::{debug, info, warn};

use crate::error::{DecodeError, Result};
use crate::frame::Frame;
use crate::header::FrameHeader;
use crate::matcher::SlidingMatcher;
use crate::points::{decode_points, PointOutcome};
use crate::reader::FieldReader;
use crate::schema::FrameSchema;
use crate::sink::FrameSink;

/// Default per-field read timeout, matching the sensor link's serial
/// timeout.
pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_millis(1000);

/// Decoder configuration.
#[derive(Debug, Clone, Copy)]
pub struct DecoderConfig {
    /// Longest wait for any single field group before the frame is
    /// abandoned.
    pub read_timeout: Duration,
    /// Shape of the TLV frame type being decoded.
    pub schema: FrameSchema,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            read_timeout: DEFAULT_READ_TIMEOUT,
            schema: FrameSchema::point_cloud(),
        }
    }
}

/// Observable decode state.
///
/// `Complete` and `Aborted` are transitions, not resting states: a
/// completed frame is returned to the caller and an aborted one is
/// discarded, both leaving the machine in `Searching` (or directly in
/// `HeaderParsed` after an early re-sync).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecoderState {
    /// Scanning raw bytes for the magic pattern. Initial and idle state.
    Searching,
    /// Magic matched; header fields are being read.
    HeaderParsed,
    /// Header decoded; point records are being read.
    DecodingPoints,
}

/// Counters across the life of one assembler.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeStats {
    /// Frames fully decoded and handed out.
    pub frames: u64,
    /// Frames discarded after a mid-frame timeout.
    pub aborted: u64,
    /// Frames abandoned because a newer magic pattern appeared inside
    /// their point data.
    pub early_resyncs: u64,
    /// Records consumed past frame capacity and dropped.
    pub discarded_points: u64,
}

/// Owns the decode state machine:
/// `Searching → HeaderParsed → DecodingPoints → {Complete | Aborted}`.
///
/// The assembler has exclusive use of the byte source for the duration of a
/// decode attempt and owns the in-progress frame until it is handed out.
/// All decoder state lives here — nothing module-level, nothing shared.
pub struct FrameAssembler<S> {
    source: S,
    config: DecoderConfig,
    matcher: SlidingMatcher,
    state: DecoderState,
    sequence: u64,
    stats: DecodeStats,
}

impl<S: ByteSource> FrameAssembler<S> {
    /// Create an assembler with the default configuration.
    pub fn new(source: S) -> Self {
        Self::with_config(source, DecoderConfig::default())
    }

    /// Create an assembler with explicit configuration.
    pub fn with_config(source: S, config: DecoderConfig) -> Self {
        Self {
            source,
            config,
            matcher: SlidingMatcher::new(),
            state: DecoderState::Searching,
            sequence: 0,
            stats: DecodeStats::default(),
        }
    }

    /// Pull the next completed frame.
    ///
    /// Runs the machine until a frame completes. Mid-frame failures are
    /// handled internally: the frame is discarded and searching resumes.
    /// What escapes is a quiet link while searching
    /// (`Timeout { field: "magic" }`) or the loss of the source itself —
    /// both leave the machine in `Searching`, ready to be called again.
    pub fn next_frame(&mut self) -> Result<Frame> {
        loop {
            if self.state == DecoderState::Searching {
                self.seek_magic()?;
                self.state = DecoderState::HeaderParsed;
            }

            let header = {
                let mut reader = FieldReader::new(&mut self.source, self.config.read_timeout);
                match FrameHeader::decode(&mut reader, &self.config.schema) {
                    Ok(header) => header,
                    Err(err) => {
                        self.abort_frame("header", &err);
                        match err {
                            DecodeError::Timeout { .. } => continue,
                            fatal => return Err(fatal),
                        }
                    }
                }
            };
            let timestamp = SystemTime::now();
            self.state = DecoderState::DecodingPoints;
            debug!(
                major = header.major_count,
                minor = header.minor_count,
                "frame header decoded"
            );

            let outcome = {
                let mut reader = FieldReader::new(&mut self.source, self.config.read_timeout);
                decode_points(
                    &mut reader,
                    &mut self.matcher,
                    &header,
                    &self.config.schema,
                )
            };
            match outcome {
                Ok(PointOutcome::Complete { points, discarded }) => {
                    if discarded > 0 {
                        debug!(discarded, "records past capacity consumed and dropped");
                        self.stats.discarded_points += discarded as u64;
                    }
                    self.sequence += 1;
                    self.stats.frames += 1;
                    self.state = DecoderState::Searching;
                    return Ok(Frame {
                        sequence: self.sequence,
                        timestamp,
                        points,
                    });
                }
                Ok(PointOutcome::Resync) => {
                    // A new frame announced itself inside this one's point
                    // data; its header starts at the very next byte, so
                    // searching is skipped.
                    self.stats.early_resyncs += 1;
                    self.matcher.reset();
                    self.state = DecoderState::HeaderParsed;
                    warn!("magic pattern inside point data; frame abandoned");
                }
                Err(err) => {
                    self.abort_frame("points", &err);
                    match err {
                        DecodeError::Timeout { .. } => {}
                        fatal => return Err(fatal),
                    }
                }
            }
        }
    }

    /// Pump completed frames into `sink` until the source closes.
    ///
    /// A quiet link is the steady state while searching and does not stop
    /// the pump. A failed publish is logged and never retried.
    pub fn run(&mut self, sink: &mut dyn FrameSink) -> Result<()> {
        loop {
            match self.next_frame() {
                Ok(frame) => {
                    let sequence = frame.sequence;
                    if let Err(err) = sink.publish(frame) {
                        warn!(sequence, error = %err, "sink rejected frame");
                    }
                }
                Err(DecodeError::Timeout { .. }) => continue,
                Err(DecodeError::SourceClosed) => {
                    info!(frames = self.stats.frames, "byte source closed; decoder stopping");
                    return Ok(());
                }
                Err(err) => return Err(err),
            }
        }
    }

    /// Current machine state. `Searching` between calls except after an
    /// early re-sync handed control straight to a new header.
    pub fn state(&self) -> DecoderState {
        self.state
    }

    /// Lifetime counters.
    pub fn stats(&self) -> DecodeStats {
        self.stats
    }

    /// Sequence number of the most recently completed frame.
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    /// Active configuration.
    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Consume the assembler and return the byte source.
    pub fn into_inner(self) -> S {
        self.source
    }

    /// Consume bytes one at a time until the magic pattern matches.
    ///
    /// Each byte gets a fresh timeout: silence between frames is normal,
    /// and only an entirely quiet window surfaces to the caller.
    fn seek_magic(&mut self) -> Result<()> {
        loop {
            let byte = self
                .source
                .read_byte(self.config.read_timeout)
                .map_err(|err| match err {
                    SourceError::Timeout(_) => DecodeError::Timeout { field: "magic" },
                    SourceError::Closed => DecodeError::SourceClosed,
                    SourceError::Io(io) => DecodeError::Source(io),
                })?;
            if self.matcher.push(byte) {
                debug!("magic pattern matched");
                self.matcher.reset();
                return Ok(());
            }
        }
    }

    fn abort_frame(&mut self, stage: &'static str, err: &DecodeError) {
        self.stats.aborted += 1;
        self.matcher.reset();
        self.state = DecoderState::Searching;
        warn!(stage, error = %err, "frame discarded");
    }
}
