//! compression/mod.rs
//! Adaptive-width LZW compression and expansion.
//!
//! Notes:
//! - Stream layout: one mode bit, then codewords of the current width,
//!   MSB-first, ending with the end-of-stream code.
//! - Both sides run one `CodeSpace` and call `advance` then `claim` in the
//!   same order; that order is the whole protocol.

pub mod compress;
pub mod expand;
pub mod stream;

pub use compress::*;
pub use expand::*;
pub use stream::*;

use tracing::debug;

use crate::policy::Transition;
use crate::telemetry::{CodecCounters, CodecEvent, CodecObserver};

/// Count a policy transition, log it, and pass it to the observer.
/// A frozen codebook is reported only the first time.
pub(crate) fn report_transition(
    side: &'static str,
    transition: Transition,
    counters: &mut CodecCounters,
    observer: &mut dyn CodecObserver,
) {
    if !counters.record(transition) {
        return;
    }
    match transition {
        Transition::Widened { width } => debug!(side, width, "codeword width increased"),
        Transition::Reset => debug!(side, resets = counters.resets, "codebook reset"),
        Transition::Frozen { width } => debug!(side, width, "codebook full, no further entries"),
        Transition::Continue => {}
    }
    if let Some(event) = CodecEvent::from_transition(transition) {
        observer.on_event(event);
    }
}
