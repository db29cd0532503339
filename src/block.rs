/// Process id of an unowned block. Blocks on the free list
/// always carry this id.
pub const FREE: u32 = 0;

/// One contiguous region of the simulated partition. The `end`
/// address is inclusive, so a block always spans at least one
/// addressable unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    pub start: usize,
    pub end: usize,
    pub pid: u32,
}

impl Block {
    pub fn new(start: usize, end: usize, pid: u32) -> Self {
        debug_assert!(start <= end);
        Self { start, end, pid }
    }

    /// A block with no owner, as created at partition setup or
    /// when an allocation leaves a fragment behind.
    pub fn free(start: usize, end: usize) -> Self {
        Self::new(start, end, FREE)
    }

    /// Number of addressable units covered by the block. Both
    /// bounds are inclusive, hence the +1.
    pub fn capacity(&self) -> usize {
        self.end - self.start + 1
    }

    pub fn is_free(&self) -> bool {
        self.pid == FREE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_counts_both_bounds() {
        assert_eq!(Block::free(0, 0).capacity(), 1);
        assert_eq!(Block::free(0, 9).capacity(), 10);
        assert_eq!(Block::new(5, 9, 3).capacity(), 5);
    }

    #[test]
    fn ownership_flag() {
        assert!(Block::free(0, 7).is_free());
        assert!(!Block::new(0, 7, 1).is_free());
    }
}
