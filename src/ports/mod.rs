//! Port traits defining external boundaries.
//!
//! The linker only touches the outside world through the filesystem:
//! reading the inventory, checking candidate paths, and writing the result.
//! Implementations live in `src/adapters/`.

pub mod filesystem;

pub use filesystem::FileSystem;
