//! Size domain module

mod byte_size;

pub use byte_size::{compression_ratio, ByteSize, DEFAULT_MAX_SIZE_BYTES};
