mod ringbuffer;
mod snapshot;
mod wrapping_index;

pub use ringbuffer::*;
pub use snapshot::*;
pub use wrapping_index::*;
