//! config.rs
//! Per-invocation codec configuration.

use crate::constants::{MAX_CODE_WIDTH, MIN_CODE_WIDTH};
use crate::types::{CodebookMode, FormatError, LzwError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LzwConfig {
    /// Codebook behaviour at max width. Only the compressor reads this; the
    /// expander takes the mode from the stream's leading bit.
    pub mode: CodebookMode,

    /// Widest codeword before the codebook resets or freezes.
    /// Not carried on the wire, so both sides must agree on it.
    pub max_width: u32,
}

impl Default for LzwConfig {
    fn default() -> Self {
        Self {
            mode: CodebookMode::None,
            max_width: MAX_CODE_WIDTH,
        }
    }
}

impl LzwConfig {
    pub fn new(mode: Option<CodebookMode>, max_width: Option<u32>) -> Self {
        Self {
            mode: mode.unwrap_or_default(),
            max_width: max_width.unwrap_or(MAX_CODE_WIDTH),
        }
    }

    pub fn with_mode(mode: CodebookMode) -> Self {
        Self { mode, ..Self::default() }
    }

    /// Checks the width bounds. The mode is checked separately by the
    /// compressor, since the expander never uses it.
    pub fn validate(&self) -> Result<(), LzwError> {
        if self.max_width < MIN_CODE_WIDTH {
            return Err(LzwError::Config(format!(
                "max_width {} is below the minimum codeword width {}",
                self.max_width, MIN_CODE_WIDTH
            )));
        }
        if self.max_width > MAX_CODE_WIDTH {
            return Err(FormatError::WidthExceeded {
                width: self.max_width,
                max: MAX_CODE_WIDTH,
            }
            .into());
        }
        Ok(())
    }
}
