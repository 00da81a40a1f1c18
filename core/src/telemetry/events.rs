//! telemetry/events.rs
//! Observer hook for codebook activity.

use crate::policy::Transition;
use crate::types::Code;

/// One codebook event, borrowed from the codec's working buffers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecEvent<'a> {
    /// `code` now stands for `sequence`.
    Assigned { code: Code, sequence: &'a [u8] },
    Widened { width: u32 },
    Reset,
    /// Reported once, the first time the codebook stops learning.
    Frozen { width: u32 },
}

impl<'a> CodecEvent<'a> {
    pub(crate) fn from_transition(transition: Transition) -> Option<Self> {
        match transition {
            Transition::Continue => None,
            Transition::Widened { width } => Some(CodecEvent::Widened { width }),
            Transition::Reset => Some(CodecEvent::Reset),
            Transition::Frozen { width } => Some(CodecEvent::Frozen { width }),
        }
    }
}

pub trait CodecObserver {
    fn on_event(&mut self, event: CodecEvent<'_>);
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl CodecObserver for NoopObserver {
    #[inline]
    fn on_event(&mut self, _event: CodecEvent<'_>) {}
}

/// Owned copy of a `CodecEvent`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedEvent {
    Assigned { code: Code, sequence: Vec<u8> },
    Widened { width: u32 },
    Reset,
    Frozen { width: u32 },
}

/// Records every event in order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EventLog {
    pub events: Vec<RecordedEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// `(code, sequence)` pairs in assignment order.
    pub fn assignments(&self) -> Vec<(Code, Vec<u8>)> {
        self.events
            .iter()
            .filter_map(|e| match e {
                RecordedEvent::Assigned { code, sequence } => Some((*code, sequence.clone())),
                _ => None,
            })
            .collect()
    }

    /// Widths reached through widening, in order.
    pub fn widenings(&self) -> Vec<u32> {
        self.events
            .iter()
            .filter_map(|e| match e {
                RecordedEvent::Widened { width } => Some(*width),
                _ => None,
            })
            .collect()
    }

    pub fn resets(&self) -> usize {
        self.events.iter().filter(|e| matches!(e, RecordedEvent::Reset)).count()
    }

    /// Same events with assignment payloads dropped; handy for comparing
    /// lifecycle order between the two sides.
    pub fn lifecycle(&self) -> Vec<RecordedEvent> {
        self.events
            .iter()
            .filter(|e| !matches!(e, RecordedEvent::Assigned { .. }))
            .cloned()
            .collect()
    }
}

impl CodecObserver for EventLog {
    fn on_event(&mut self, event: CodecEvent<'_>) {
        let owned = match event {
            CodecEvent::Assigned { code, sequence } => RecordedEvent::Assigned {
                code,
                sequence: sequence.to_vec(),
            },
            CodecEvent::Widened { width } => RecordedEvent::Widened { width },
            CodecEvent::Reset => RecordedEvent::Reset,
            CodecEvent::Frozen { width } => RecordedEvent::Frozen { width },
        };
        self.events.push(owned);
    }
}
