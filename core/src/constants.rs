//! constants.rs
//! Fixed codec parameters shared by the compressor and the expander.

use crate::types::Code;

/// Number of single-byte symbols seeded into every codebook.
pub const ALPHABET_SIZE: usize = 256;

/// Reserved code that terminates every stream.
pub const EOF_CODE: Code = ALPHABET_SIZE as Code;

/// First code handed out to a learned sequence (0..=255 symbols, 256 EOF).
pub const FIRST_FREE_CODE: Code = EOF_CODE + 1;

/// Codeword width at stream start and after every reset.
pub const MIN_CODE_WIDTH: u32 = 9;

/// Widest codeword the wire format allows.
pub const MAX_CODE_WIDTH: u32 = 16;

/// Codebook capacity at `MIN_CODE_WIDTH` (2^9).
pub const INITIAL_CAPACITY: Code = 1 << MIN_CODE_WIDTH;

/// Leading flag bit values.
pub mod mode_flags {
    pub const NONE: bool  = false;
    pub const RESET: bool = true;
}
