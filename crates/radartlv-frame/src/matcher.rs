use crate::wire::MAGIC_WINDOW;

/// Rolling-window search for the frame magic pattern.
///
/// The window is an 8-byte shift register: every incoming byte is shifted in
/// and the whole register compared against the wire image of the magic.
/// Every byte is tested individually — the pattern may start at any offset,
/// so there is no block skipping. Absence of a match is the steady state,
/// never an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct SlidingMatcher {
    window: u64,
}

impl SlidingMatcher {
    /// Create a matcher with an empty window.
    pub fn new() -> Self {
        Self::default()
    }

    /// Shift one byte into the window; returns true when the last 8 bytes
    /// form the magic pattern.
    ///
    /// The pattern's leading wire byte is non-zero, so a freshly reset
    /// window cannot alias a partial pattern.
    pub fn push(&mut self, byte: u8) -> bool {
        self.window = (self.window << 8) | byte as u64;
        self.window == MAGIC_WINDOW
    }

    /// Clear the window. Called after a match so stale bytes cannot
    /// contribute to the next one.
    pub fn reset(&mut self) {
        self.window = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wire::MAGIC_BYTES;

    fn feed(matcher: &mut SlidingMatcher, bytes: &[u8]) -> Option<usize> {
        for (i, &byte) in bytes.iter().enumerate() {
            if matcher.push(byte) {
                return Some(i);
            }
        }
        None
    }

    #[test]
    fn matches_pattern_at_start() {
        let mut matcher = SlidingMatcher::new();
        assert_eq!(feed(&mut matcher, &MAGIC_BYTES), Some(7));
    }

    #[test]
    fn matches_pattern_at_arbitrary_offset() {
        let mut stream = vec![0x00, 0xFF, 0x02, 0x01, 0x99]; // includes a decoy prefix
        stream.extend_from_slice(&MAGIC_BYTES);

        let mut matcher = SlidingMatcher::new();
        assert_eq!(feed(&mut matcher, &stream), Some(stream.len() - 1));
    }

    #[test]
    fn partial_pattern_does_not_match() {
        let mut matcher = SlidingMatcher::new();
        assert_eq!(feed(&mut matcher, &MAGIC_BYTES[..7]), None);
    }

    #[test]
    fn interrupted_pattern_recovers_on_retransmit() {
        let mut stream = MAGIC_BYTES[..5].to_vec();
        stream.extend_from_slice(&MAGIC_BYTES);

        let mut matcher = SlidingMatcher::new();
        assert_eq!(feed(&mut matcher, &stream), Some(stream.len() - 1));
    }

    #[test]
    fn reset_clears_window() {
        let mut matcher = SlidingMatcher::new();
        feed(&mut matcher, &MAGIC_BYTES[..7]);
        matcher.reset();
        assert!(!matcher.push(MAGIC_BYTES[7]));
    }

    #[test]
    fn no_rematch_without_full_pattern() {
        let mut matcher = SlidingMatcher::new();
        assert_eq!(feed(&mut matcher, &MAGIC_BYTES), Some(7));
        matcher.reset();
        assert_eq!(feed(&mut matcher, &[0x00; 16]), None);
    }
}
