//! telemetry/counters.rs
//! Counters collected during one compress or expand run.

use serde::{Deserialize, Serialize};

use crate::constants::MIN_CODE_WIDTH;
use crate::policy::Transition;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodecCounters {
    /// Bytes consumed from the input.
    pub bytes_in: u64,
    /// Bytes produced, final padding included.
    pub bytes_out: u64,
    /// Codewords on the wire, end-of-stream code included.
    pub codewords: u64,
    pub widenings: u64,
    pub resets: u64,
    /// Whether the codebook stopped learning at max width.
    pub frozen: bool,
    /// Codeword width when the run ended.
    pub final_width: u32,
    /// Leading mode bit of the stream.
    pub reset_enabled: bool,
}

impl Default for CodecCounters {
    fn default() -> Self {
        Self {
            bytes_in: 0,
            bytes_out: 0,
            codewords: 0,
            widenings: 0,
            resets: 0,
            frozen: false,
            final_width: MIN_CODE_WIDTH,
            reset_enabled: false,
        }
    }
}

impl CodecCounters {
    pub fn new(reset_enabled: bool) -> Self {
        Self { reset_enabled, ..Self::default() }
    }

    pub fn add_codeword(&mut self) {
        self.codewords += 1;
    }

    /// Returns true the first time the codebook freezes.
    pub fn record(&mut self, transition: Transition) -> bool {
        match transition {
            Transition::Continue => false,
            Transition::Widened { .. } => {
                self.widenings += 1;
                true
            }
            Transition::Reset => {
                self.resets += 1;
                true
            }
            Transition::Frozen { .. } => {
                let first = !self.frozen;
                self.frozen = true;
                first
            }
        }
    }
}
