//! Live adapters backed by the real filesystem.

pub mod filesystem;

pub use filesystem::LiveFileSystem;
