//! policy.rs
//! Codeword width and codebook lifecycle policy.
//!
//! Summary: tracks the current width, the capacity at that width, and the
//! next code to hand out. The compressor and the expander drive one
//! `CodeSpace` each, calling `advance` then `claim` in the same order, which
//! keeps their code assignment in lockstep.

use crate::constants::{FIRST_FREE_CODE, INITIAL_CAPACITY, MIN_CODE_WIDTH};
use crate::types::{CodebookMode, Code};

/// Outcome of `CodeSpace::advance`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Room left at the current width.
    Continue,
    /// Width grew by one bit and capacity doubled.
    Widened { width: u32 },
    /// Full at max width in reset mode; back to the seeded state.
    Reset,
    /// Full at max width without reset; no more codes will be assigned.
    Frozen { width: u32 },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodeSpace {
    width: u32,
    capacity: Code,
    next_code: Code,
    max_width: u32,
}

impl CodeSpace {
    pub fn new(max_width: u32) -> Self {
        debug_assert!(max_width >= MIN_CODE_WIDTH);
        Self {
            width: MIN_CODE_WIDTH,
            capacity: INITIAL_CAPACITY,
            next_code: FIRST_FREE_CODE,
            max_width,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn capacity(&self) -> Code {
        self.capacity
    }

    pub fn next_code(&self) -> Code {
        self.next_code
    }

    pub fn max_width(&self) -> u32 {
        self.max_width
    }

    pub fn is_full(&self) -> bool {
        self.next_code >= self.capacity
    }

    /// Apply the width/reset policy if every code at the current width is taken.
    pub fn advance(&mut self, mode: CodebookMode) -> Transition {
        if !self.is_full() {
            return Transition::Continue;
        }
        if self.width < self.max_width {
            self.width += 1;
            self.capacity <<= 1;
            Transition::Widened { width: self.width }
        } else if mode.resets_when_full() {
            self.reset();
            Transition::Reset
        } else {
            Transition::Frozen { width: self.width }
        }
    }

    /// Hand out the next code, or `None` while the space is full.
    pub fn claim(&mut self) -> Option<Code> {
        if self.is_full() {
            return None;
        }
        let code = self.next_code;
        self.next_code += 1;
        Some(code)
    }

    pub fn reset(&mut self) {
        self.width = MIN_CODE_WIDTH;
        self.capacity = INITIAL_CAPACITY;
        self.next_code = FIRST_FREE_CODE;
    }
}

