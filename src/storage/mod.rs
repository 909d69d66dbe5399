//! File storage helpers

pub mod file_io;

pub use file_io::write_atomic;
