//! Tools for preparing mesh data for upload.

mod compress_indices;
pub use self::compress_indices::{compress_indices, CompressedIndices, IndexFormat, IndexType};
