use alloc::boxed::Box;
use core::alloc::Layout;
use core::iter::FusedIterator;
use core::ptr;

use super::{Snapshot, WrappingIndex};
use crate::error::{CreateError, Empty, Full};
use crate::{dev_debug, dev_error, dev_trace, dev_warn};

/// A fixed-capacity FIFO ring buffer of `i32` backed by a boxed slice
/// allocated once at construction.
///
/// `readptr` is the slot the next remove reads from and `writeptr` the slot
/// the next insert writes to. Both wrap at `capacity`. Since the two cursors
/// coincide both when the buffer is empty and when it is full, the number of
/// live elements is tracked separately in `count` and is the only thing
/// consulted to tell those two states apart.
pub struct RingBuffer {
    storage: Box<[i32]>,
    readptr: WrappingIndex,
    writeptr: WrappingIndex,
    count: usize,
}

impl RingBuffer {
    /// Creates an empty buffer with room for exactly `capacity` elements.
    /// Storage is zeroed.
    ///
    /// Fails with [`CreateError::InvalidArgument`] if `capacity` is zero,
    /// negative or does not fit in a `usize`, and with
    /// [`CreateError::Allocation`] if the storage cannot be reserved.
    pub fn new<C>(capacity: C) -> Result<Self, CreateError>
    where
        C: TryInto<usize>,
    {
        let capacity = match capacity.try_into() {
            Ok(capacity) if capacity > 0 => capacity,
            _ => {
                dev_error!("Rejected ring buffer capacity, must be positive");
                return Err(CreateError::InvalidArgument);
            }
        };

        let storage = match Self::alloc_zeroed_slots(capacity) {
            Some(storage) => storage,
            None => {
                dev_error!("Unable to allocate {} slots", capacity);
                return Err(CreateError::Allocation(capacity));
            }
        };
        dev_trace!("Created ring buffer with capacity {}", capacity);

        Ok(Self {
            storage,
            readptr: WrappingIndex::ZERO,
            writeptr: WrappingIndex::ZERO,
            count: 0,
        })
    }

    /// Asks the allocator for `capacity` already zeroed slots, so no page is
    /// touched before it is actually written. `None` if the size overflows
    /// or the allocator refuses.
    fn alloc_zeroed_slots(capacity: usize) -> Option<Box<[i32]>> {
        let layout = Layout::array::<i32>(capacity).ok()?;
        if layout.size() == 0 {
            return None;
        }

        let ptr = unsafe {
            // SAFETY: `layout` has a non-zero size.
            alloc::alloc::alloc_zeroed(layout)
        }
        .cast::<i32>();
        if ptr.is_null() {
            return None;
        }

        Some(unsafe {
            // SAFETY: `ptr` comes from the global allocator with the layout of
            // `[i32; capacity]`, which is the layout `Box<[i32]>` frees with,
            // and all-zero bytes are a valid `i32`.
            Box::from_raw(ptr::slice_from_raw_parts_mut(ptr, capacity))
        })
    }

    /// Returns the number of elements currently stored in the buffer.
    #[inline(always)]
    pub fn occupancy(&self) -> usize {
        self.count
    }

    /// Same as [`occupancy`](Self::occupancy).
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns the number of free slots in the buffer.
    #[inline(always)]
    pub fn free(&self) -> usize {
        self.capacity() - self.count
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    #[inline(always)]
    pub fn is_full(&self) -> bool {
        self.count == self.capacity()
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Physical slot the next remove will read from.
    #[inline(always)]
    pub fn read_pos(&self) -> usize {
        self.readptr.index()
    }

    /// Physical slot the next insert will write to.
    #[inline(always)]
    pub fn write_pos(&self) -> usize {
        self.writeptr.index()
    }

    /// Raw slot contents, including slots that are not currently live.
    #[inline(always)]
    pub fn storage(&self) -> &[i32] {
        &self.storage
    }

    /// Appends `value` at the back of the buffer.
    ///
    /// If the buffer is full nothing is modified and the value is handed back
    /// inside [`Full`].
    pub fn insert(&mut self, value: i32) -> Result<(), Full> {
        if self.is_full() {
            dev_warn!("Buffer overflow, value {} ignored", value);
            return Err(Full(value));
        }

        dev_debug!("Insert {} at slot {}", value, self.writeptr.index());
        self.storage[self.writeptr.index()] = value;
        self.writeptr = self.writeptr.advance(self.capacity());
        self.count += 1;
        Ok(())
    }

    /// Removes and returns the oldest element.
    ///
    /// If the buffer is empty nothing is modified and [`Empty`] is returned.
    pub fn remove(&mut self) -> Result<i32, Empty> {
        if self.is_empty() {
            dev_warn!("Remove from empty buffer");
            return Err(Empty);
        }

        let value = self.storage[self.readptr.index()];
        dev_debug!("Remove {} from slot {}", value, self.readptr.index());
        self.readptr = self.readptr.advance(self.capacity());
        self.count -= 1;
        Ok(value)
    }

    /// Returns a reference to the first (oldest) element, or `None` if empty.
    pub fn peek_first(&self) -> Option<&i32> {
        if self.is_empty() {
            return None;
        }

        Some(&self.storage[self.readptr.index()])
    }

    /// Returns a reference to the last (newest) element, or `None` if empty.
    pub fn peek_last(&self) -> Option<&i32> {
        if self.is_empty() {
            return None;
        }

        let last = self.readptr.offset(self.count - 1, self.capacity());
        Some(&self.storage[last.index()])
    }

    /// Iterates the live elements from oldest to newest.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            storage: &self.storage,
            front: self.readptr,
            remaining: self.count,
        }
    }

    /// Read-only view of the internal state, for diagnostics.
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot::new(&self.storage, self.count, self.readptr.index(), self.writeptr.index())
    }

    /// Releases the buffer and its storage. Equivalent to dropping it.
    pub fn destroy(self) {}
}

impl Drop for RingBuffer {
    fn drop(&mut self) {
        dev_trace!("Releasing ring buffer with capacity {}", self.capacity());
    }
}

impl<'a> IntoIterator for &'a RingBuffer {
    type Item = &'a i32;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the live elements of a [`RingBuffer`], oldest first.
pub struct Iter<'a> {
    storage: &'a [i32],
    front: WrappingIndex,
    remaining: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a i32;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let item = &self.storage[self.front.index()];
        self.front = self.front.advance(self.storage.len());
        self.remaining -= 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        self.remaining -= 1;
        let back = self.front.offset(self.remaining, self.storage.len());
        Some(&self.storage[back.index()])
    }
}

impl ExactSizeIterator for Iter<'_> {}
impl FusedIterator for Iter<'_> {}
