use core::fmt;

/// Borrowed, read-only view of a ring buffer's internals: the raw slots and
/// both cursors. Its `Display` output is the human readable buffer dump.
#[derive(Clone, Copy, Debug)]
pub struct Snapshot<'a> {
    slots: &'a [i32],
    count: usize,
    head: usize,
    tail: usize,
}

impl<'a> Snapshot<'a> {
    pub(crate) const fn new(slots: &'a [i32], count: usize, head: usize, tail: usize) -> Self {
        Self { slots, count, head, tail }
    }

    pub const fn slots(&self) -> &'a [i32] {
        self.slots
    }

    pub const fn count(&self) -> usize {
        self.count
    }

    /// Read cursor.
    pub const fn head(&self) -> usize {
        self.head
    }

    /// Write cursor.
    pub const fn tail(&self) -> usize {
        self.tail
    }
}

impl fmt::Display for Snapshot<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "circular buffer dump:")?;
        for (i, v) in self.slots.iter().enumerate() {
            writeln!(f, "{}: {}", i, v)?;
        }
        write!(f, "count: {}, head: {}, tail:{}", self.count, self.head, self.tail)
    }
}
