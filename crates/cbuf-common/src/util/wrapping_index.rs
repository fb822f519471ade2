/// A cursor into a ring of `len` slots. It starts at zero and only moves
/// forward, wrapping back to zero after the last slot.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WrappingIndex(usize);

impl WrappingIndex {
    pub const ZERO: Self = Self(0);

    #[inline(always)]
    pub const fn index(self) -> usize {
        self.0
    }

    /// Returns the next slot, `(pos + 1) mod len`.
    #[inline(always)]
    pub const fn advance(self, len: usize) -> Self {
        let next = self.0 + 1;
        if next == len { Self(0) } else { Self(next) }
    }

    /// Returns the slot `n` positions ahead, wrapping as many times as needed.
    #[inline]
    pub const fn offset(self, n: usize, len: usize) -> Self {
        Self((self.0 + n % len) % len)
    }
}
