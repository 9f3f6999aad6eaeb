//! Adapter implementations for port traits.
//!
//! - `live`: real disk I/O
//! - `recording`: wraps another adapter and records every call
//! - `replaying`: answers calls from a recorded cassette

pub mod live;
pub mod recording;
pub mod replaying;
