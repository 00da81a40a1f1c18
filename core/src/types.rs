use std::fmt;
use std::io;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::mode_flags;
use crate::utils::fmt_bytes;

/// Dictionary code. Valid values grow from `0..=256` up to `0..2^max_width`.
pub type Code = u32;

/// How the codebook behaves once it is full at the maximum width.
#[repr(u8)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CodebookMode {
    /// Stop learning and keep coding against the existing entries.
    #[default]
    None    = 0x00,
    /// Discard the dictionary and start over at the minimum width.
    Reset   = 0x01,
    /// Reset while watching the compression ratio. Recognised, never implemented.
    Monitor = 0x02,
}

impl CodebookMode {
    /// Leading stream bit for this mode.
    pub fn flag_bit(self) -> bool {
        match self {
            CodebookMode::None => mode_flags::NONE,
            CodebookMode::Reset | CodebookMode::Monitor => mode_flags::RESET,
        }
    }

    /// Mode recovered from the leading stream bit.
    pub fn from_flag_bit(bit: bool) -> Self {
        if bit == mode_flags::RESET {
            CodebookMode::Reset
        } else {
            CodebookMode::None
        }
    }

    pub fn resets_when_full(self) -> bool {
        matches!(self, CodebookMode::Reset | CodebookMode::Monitor)
    }

    /// Fail fast on modes that have no implementation.
    pub fn verify(self) -> Result<(), LzwError> {
        match self {
            CodebookMode::None | CodebookMode::Reset => Ok(()),
            CodebookMode::Monitor => Err(LzwError::UnsupportedMode { mode: self }),
        }
    }
}

impl fmt::Display for CodebookMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CodebookMode::None => "none",
            CodebookMode::Reset => "reset",
            CodebookMode::Monitor => "monitor",
        };
        f.write_str(name)
    }
}

impl FromStr for CodebookMode {
    type Err = LzwError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "n" | "none" => Ok(CodebookMode::None),
            "r" | "reset" => Ok(CodebookMode::Reset),
            "m" | "monitor" => Ok(CodebookMode::Monitor),
            other => Err(LzwError::Config(format!("unknown codebook mode: {other:?}"))),
        }
    }
}

/// Malformed or truncated compressed input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    /// Input ended before the leading mode bit.
    #[error("stream is empty: missing mode flag")]
    MissingModeFlag,

    /// Input ended before the end-of-stream code.
    #[error("stream truncated after {codewords} codewords without an end-of-stream code")]
    Truncated { codewords: u64 },

    /// Codeword references an entry that does not exist yet.
    #[error("codeword {code} out of range (next assignable code is {next_code})")]
    CodeOutOfRange { code: u32, next_code: u32 },

    /// Codeword width beyond what the configuration allows.
    #[error("codeword width {width} exceeds configured maximum {max}")]
    WidthExceeded { width: u32, max: u32 },
}

/// Encoder codebook contract violations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodebookError {
    #[error("cannot insert an empty sequence")]
    EmptySequence,

    #[error("sequence {sequence} is already assigned code {code}")]
    DuplicateSequence { sequence: String, code: Code },

    #[error("code {code} is already in use")]
    CodeInUse { code: Code },
}

impl CodebookError {
    pub fn duplicate(sequence: &[u8], code: Code) -> Self {
        CodebookError::DuplicateSequence { sequence: fmt_bytes(sequence), code }
    }
}

/// Unified codec error.
/// - `From<T>` impls let `?` carry format, codebook, and I/O failures upward.
/// - No variant is recoverable: encoder and decoder state would drift apart.
#[derive(Debug, Error)]
pub enum LzwError {
    #[error("stream format error: {0}")]
    Format(#[from] FormatError),

    #[error("unsupported codebook mode: {mode}")]
    UnsupportedMode { mode: CodebookMode },

    #[error("codebook error: {0}")]
    Codebook(#[from] CodebookError),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
