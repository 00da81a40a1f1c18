//! codebook/mod.rs
//! Dictionaries for both directions.
//!
//! Notes:
//! - The encoder side maps byte sequences to codes and answers one-byte
//!   extensions of the current match without rescanning.
//! - The decoder side maps codes back to sequences and is built in the same
//!   order, one entry behind.

pub mod encode;
pub mod decode;

pub use encode::*;
pub use decode::*;
