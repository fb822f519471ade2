use thiserror::Error;

/// Reasons a [`RingBuffer`](crate::util::RingBuffer) could not be built.
/// When this is returned no buffer exists at all.
#[derive(Debug, Error)]
pub enum CreateError {
    #[error("ring buffer capacity must be a positive integer")]
    InvalidArgument,
    #[error("unable to allocate storage for {0} slots")]
    Allocation(usize),
}

/// Returned by an insert against a saturated buffer. Carries the rejected
/// value back so the caller can retry, drop or stash it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("ring buffer is full, value {0} not inserted")]
pub struct Full(pub i32);

/// Returned by a remove against a drained buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("ring buffer is empty")]
pub struct Empty;
