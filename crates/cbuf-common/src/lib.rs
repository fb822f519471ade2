#![no_std]

extern crate alloc;

mod devlog;
pub mod error;
pub mod util;

pub use error::*;
pub use util::{RingBuffer, Snapshot, WrappingIndex};

pub use log as __log;
