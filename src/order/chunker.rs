use crate::error::OrderError;
use std::num::NonZeroUsize;

/// Pages per output line.
pub const DEFAULT_CHUNK_SIZE: usize = 16;

pub struct Chunker;

impl Chunker {
    pub fn chunk(series: &[u32], size: NonZeroUsize) -> Vec<Vec<u32>> {
        series.chunks(size.get()).map(<[u32]>::to_vec).collect()
    }

    pub fn size(value: usize) -> Result<NonZeroUsize, OrderError> {
        NonZeroUsize::new(value).ok_or(OrderError::ZeroChunkSize)
    }
}
