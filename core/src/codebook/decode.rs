//! codebook/decode.rs
//! Code → sequence dictionary used by the expander.
//!
//! Design notes:
//! - A growable vector indexed by code, pre-sized to the capacity of the
//!   current width and reserved to twice that on each widening.
//! - Learned entries are stored as (prefix code, last byte) and materialised
//!   by walking the chain back to a seeded byte.
//! - Right after a reset the expander's pending sequence belongs to the
//!   discarded dictionary, so that one entry is stored as owned bytes.

use crate::constants::{ALPHABET_SIZE, EOF_CODE, INITIAL_CAPACITY};
use crate::types::{Code, FormatError};

#[derive(Debug, Clone)]
enum Slot {
    Byte(u8),
    /// End-of-stream marker; decodes to nothing.
    Reserved,
    Chained { prefix: Code, last: u8, first: u8, len: u32 },
    Owned(Box<[u8]>),
}

#[derive(Debug, Clone)]
pub struct DecoderCodebook {
    slots: Vec<Slot>,
}

impl Default for DecoderCodebook {
    fn default() -> Self {
        Self::new()
    }
}

impl DecoderCodebook {
    pub fn new() -> Self {
        let mut book = Self { slots: Vec::with_capacity(INITIAL_CAPACITY as usize) };
        book.seed();
        book
    }

    fn seed(&mut self) {
        self.slots.extend((0..ALPHABET_SIZE).map(|b| Slot::Byte(b as u8)));
        self.slots.push(Slot::Reserved);
    }

    /// Back to slots 0..=255 plus the reserved EOF slot, storage sized for
    /// the minimum width.
    pub fn reset(&mut self) {
        self.slots = Vec::with_capacity(INITIAL_CAPACITY as usize);
        self.seed();
    }

    /// Make room for `capacity` entries without populating them.
    pub fn grow(&mut self, capacity: Code) {
        let wanted = capacity as usize;
        if wanted > self.slots.capacity() {
            self.slots.reserve_exact(wanted - self.slots.len());
        }
    }

    /// Number of assigned codes, the reserved EOF slot included.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    fn slot(&self, code: Code) -> Result<&Slot, FormatError> {
        self.slots.get(code as usize).ok_or(FormatError::CodeOutOfRange {
            code,
            next_code: self.slots.len() as Code,
        })
    }

    pub fn sequence_len(&self, code: Code) -> Result<usize, FormatError> {
        Ok(match self.slot(code)? {
            Slot::Byte(_) => 1,
            Slot::Reserved => 0,
            Slot::Chained { len, .. } => *len as usize,
            Slot::Owned(bytes) => bytes.len(),
        })
    }

    pub fn first_byte(&self, code: Code) -> Result<u8, FormatError> {
        match self.slot(code)? {
            Slot::Byte(b) => Ok(*b),
            Slot::Chained { first, .. } => Ok(*first),
            Slot::Owned(bytes) => Ok(bytes[0]),
            Slot::Reserved => Err(FormatError::CodeOutOfRange {
                code: EOF_CODE,
                next_code: self.slots.len() as Code,
            }),
        }
    }

    /// Append the sequence for `code` to `out`.
    pub fn write_sequence(&self, code: Code, out: &mut Vec<u8>) -> Result<(), FormatError> {
        let len = self.sequence_len(code)?;
        let start = out.len();
        out.resize(start + len, 0);

        // Fill from the back while walking prefixes toward the root.
        let mut end = start + len;
        let mut cursor = code;
        loop {
            match &self.slots[cursor as usize] {
                Slot::Byte(b) => {
                    out[end - 1] = *b;
                    break;
                }
                Slot::Reserved => break,
                Slot::Owned(bytes) => {
                    out[end - bytes.len()..end].copy_from_slice(bytes);
                    break;
                }
                Slot::Chained { prefix, last, .. } => {
                    out[end - 1] = *last;
                    end -= 1;
                    cursor = *prefix;
                }
            }
        }
        Ok(())
    }

    pub fn get(&self, code: Code) -> Result<Vec<u8>, FormatError> {
        let mut out = Vec::new();
        self.write_sequence(code, &mut out)?;
        Ok(out)
    }

    /// Store a full copy of `sequence` under the next code.
    pub fn append(&mut self, sequence: &[u8]) -> Code {
        debug_assert!(!sequence.is_empty());
        let code = self.slots.len() as Code;
        self.slots.push(Slot::Owned(sequence.into()));
        code
    }

    /// Store `prefix`'s sequence extended by `byte` under the next code.
    pub fn append_chained(&mut self, prefix: Code, byte: u8) -> Result<Code, FormatError> {
        let first = self.first_byte(prefix)?;
        let len = self.sequence_len(prefix)? as u32 + 1;
        let code = self.slots.len() as Code;
        self.slots.push(Slot::Chained { prefix, last: byte, first, len });
        Ok(code)
    }
}
