//! Replaying adapters that answer port calls from a cassette.

pub mod filesystem;

pub use filesystem::ReplayingFileSystem;
