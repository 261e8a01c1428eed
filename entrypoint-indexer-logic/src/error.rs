use crate::store::StoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IndexerError {
    #[error("{field} slice {start}..{end} is out of bounds for {len} bytes")]
    MalformedSlice {
        field: &'static str,
        start: usize,
        end: usize,
        len: usize,
    },
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}
