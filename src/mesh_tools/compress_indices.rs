use std::mem;

use bytemuck::Pod;

use crate::gl;

/// Enumerates the available type encodings for mesh indices.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum IndexType {
    UnsignedByte,
    UnsignedShort,
    UnsignedInt,
}

impl IndexType {
    /// Size of a single index in bytes.
    pub fn size(&self) -> usize {
        match self {
            IndexType::UnsignedByte => 1,
            IndexType::UnsignedShort => 2,
            IndexType::UnsignedInt => 4,
        }
    }

    /// The OpenGL enum value for this type.
    pub fn gl_enum(&self) -> u32 {
        match self {
            IndexType::UnsignedByte => gl::UNSIGNED_BYTE,
            IndexType::UnsignedShort => gl::UNSIGNED_SHORT,
            IndexType::UnsignedInt => gl::UNSIGNED_INT,
        }
    }

    /// The smallest type that can hold `max_index`.
    pub fn for_max_index(max_index: u32) -> IndexType {
        if max_index <= u8::MAX as u32 {
            IndexType::UnsignedByte
        } else if max_index <= u16::MAX as u32 {
            IndexType::UnsignedShort
        } else {
            IndexType::UnsignedInt
        }
    }
}

/// Trait implemented for types that can be used as indices encoded in the associated [IndexType].
pub unsafe trait IndexFormat: Pod {
    /// The [IndexType] associated with this [IndexFormat].
    const TYPE: IndexType;

    /// Narrows `index` to this type. Only called with indices that fit.
    fn narrow(index: u32) -> Self;
}

unsafe impl IndexFormat for u8 {
    const TYPE: IndexType = IndexType::UnsignedByte;

    fn narrow(index: u32) -> Self {
        index as u8
    }
}

unsafe impl IndexFormat for u16 {
    const TYPE: IndexType = IndexType::UnsignedShort;

    fn narrow(index: u32) -> Self {
        index as u16
    }
}

unsafe impl IndexFormat for u32 {
    const TYPE: IndexType = IndexType::UnsignedInt;

    fn narrow(index: u32) -> Self {
        index
    }
}

/// Index data narrowed to the smallest sufficient [IndexType], see [compress_indices].
#[derive(Clone, PartialEq, Debug)]
pub struct CompressedIndices {
    /// The number of indices.
    pub count: usize,
    pub index_type: IndexType,
    /// The indices encoded as `index_type` in native byte order.
    pub data: Vec<u8>,
}

impl CompressedIndices {
    pub fn index_size(&self) -> usize {
        self.index_type.size()
    }

    pub fn byte_len(&self) -> usize {
        self.data.len()
    }
}

/// Compresses `indices` to the smallest [IndexType] that can hold the largest index.
///
/// Indices up to `255` are stored as bytes, indices up to `65535` as shorts and anything larger
/// as ints. An empty slice compresses to zero bytes of [IndexType::UnsignedByte] data.
///
/// # Example
///
/// ```rust
/// use shader_glitz::mesh_tools::{compress_indices, IndexType};
///
/// let compressed = compress_indices(&[0, 1, 2, 300]);
///
/// assert_eq!(compressed.count, 4);
/// assert_eq!(compressed.index_type, IndexType::UnsignedShort);
/// assert_eq!(compressed.byte_len(), 8);
/// ```
pub fn compress_indices(indices: &[u32]) -> CompressedIndices {
    let max_index = indices.iter().copied().max().unwrap_or(0);

    match IndexType::for_max_index(max_index) {
        IndexType::UnsignedByte => compress::<u8>(indices),
        IndexType::UnsignedShort => compress::<u16>(indices),
        IndexType::UnsignedInt => compress::<u32>(indices),
    }
}

fn compress<T>(indices: &[u32]) -> CompressedIndices
where
    T: IndexFormat,
{
    let narrowed: Vec<T> = indices.iter().map(|index| T::narrow(*index)).collect();
    let data = bytemuck::cast_slice::<T, u8>(&narrowed).to_vec();

    debug_assert_eq!(data.len(), indices.len() * mem::size_of::<T>());

    CompressedIndices {
        count: indices.len(),
        index_type: T::TYPE,
        data,
    }
}
