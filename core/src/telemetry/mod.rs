//! telemetry/mod.rs
//! Run counters and codebook event hooks.
//!
//! Notes:
//! - Counters are plain data returned from every compress/expand run.
//! - Observers see each code assignment, widening, reset, and freeze in the
//!   order they happen, which lets tests compare the two sides directly.

pub mod counters;
pub mod events;

pub use counters::*;
pub use events::*;
