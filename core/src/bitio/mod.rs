//! bitio/mod.rs
//! Bit-level stream I/O for the codec.
//!
//! Notes:
//! - Multi-bit fields are most-significant-bit first on both sides. A
//!   mismatch here misdecodes silently instead of failing.
//! - The writer pads the final partial byte with zero bits on close.

pub mod reader;
pub mod writer;

pub use reader::*;
pub use writer::*;

/// Widest field a single read or write accepts.
pub const MAX_FIELD_BITS: u32 = 32;

pub(crate) fn check_width(width: u32) -> std::io::Result<()> {
    if width == 0 || width > MAX_FIELD_BITS {
        return Err(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("field width {width} outside 1..={MAX_FIELD_BITS}"),
        ));
    }
    Ok(())
}
