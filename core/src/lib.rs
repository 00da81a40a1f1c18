//! lzw-core
//!
//! Adaptive-width LZW compression: codewords grow from 9 to 16 bits as the
//! dictionary fills, with an optional dictionary reset at full width.
//! Pure Rust, single-threaded, no FFI.

#![forbid(unsafe_code)]

// Shared and top level
pub mod config;
pub mod constants;
pub mod types;
pub mod utils;

pub mod bitio;
pub mod codebook;
pub mod policy;
pub mod telemetry;

// Codec
pub mod compression;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::compression::{
        compress_bytes, compress_stream, expand_bytes, expand_stream, InputSource, LzwCompressor,
        LzwExpander, OutputSink,
    };
    pub use crate::config::LzwConfig;
    pub use crate::telemetry::{CodecCounters, CodecObserver, EventLog};
    pub use crate::types::{CodebookMode, LzwError};
}
