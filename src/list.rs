use crate::block::Block;

/// Ordered sequence of blocks. The list itself guarantees no
/// particular order: order is established by which insertion
/// mode the caller uses, and the free list's order is what
/// realizes the placement policy (see the allocation scan in
/// the `mmu` module, which always takes the first block that
/// fits, whatever the order).
///
/// Blocks move in and out of the list by value, so a block is
/// never present in two lists at once.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BlockList {
    blocks: Vec<Block>,
}

impl BlockList {
    pub fn new() -> Self {
        Self { blocks: Vec::new() }
    }

    /// Append at the tail. Re-inserting freed blocks this way
    /// means the least recently freed block is scanned first,
    /// which is the FIFO placement order.
    pub fn push_back(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Insert immediately before the first block whose capacity
    /// is strictly larger than the new block's. Equal capacities
    /// keep arrival order at that position. A forward scan over
    /// the resulting list meets the smallest sufficient block
    /// first: best-fit.
    pub fn insert_by_capacity_ascending(&mut self, block: Block) {
        let at = self.blocks
            .iter()
            .position(|other| other.capacity() > block.capacity())
            .unwrap_or(self.blocks.len());
        self.blocks.insert(at, block);
    }

    /// Mirror image of the ascending insert: the largest block
    /// ends up at the head, which is worst-fit.
    pub fn insert_by_capacity_descending(&mut self, block: Block) {
        let at = self.blocks
            .iter()
            .position(|other| other.capacity() < block.capacity())
            .unwrap_or(self.blocks.len());
        self.blocks.insert(at, block);
    }

    /// Insert keeping the list totally ordered by start address.
    /// Used for the allocated list and for the coalescing
    /// rebuild; address order is what makes adjacent blocks
    /// neighbors in the list.
    pub fn insert_by_address(&mut self, block: Block) {
        let at = self.blocks
            .iter()
            .position(|other| other.start > block.start)
            .unwrap_or(self.blocks.len());
        self.blocks.insert(at, block);
    }

    /// Detach the block at `index`, handing its ownership back
    /// to the caller.
    pub fn remove(&mut self, index: usize) -> Block {
        self.blocks.remove(index)
    }

    /// Detach the head block, if any.
    pub fn pop_front(&mut self) -> Option<Block> {
        if self.blocks.is_empty() {
            None
        } else {
            Some(self.blocks.remove(0))
        }
    }

    /// Index of the first block satisfying the predicate,
    /// scanning from the head.
    pub fn position<P>(&self, mut predicate: P) -> Option<usize>
    where
        P: FnMut(&Block) -> bool,
    {
        self.blocks.iter().position(|block| predicate(block))
    }

    /// Single forward pass merging every run of address-adjacent
    /// blocks into one spanning block. Only meaningful on an
    /// address-ordered list; the merged block keeps the left
    /// block's pid (always the free id when called from
    /// coalescing).
    pub fn merge_adjacent(&mut self) {
        let mut i = 0;
        while i + 1 < self.blocks.len() {
            if self.blocks[i].end + 1 == self.blocks[i + 1].start {
                // The right block is destroyed and the left one
                // grows to span the union.
                let right = self.blocks.remove(i + 1);
                self.blocks[i].end = right.end;
            } else {
                i += 1;
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Block> {
        self.blocks.iter()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}
