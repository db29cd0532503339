use crate::block::{Block, FREE};
use crate::list::BlockList;
use crate::policy::Policy;

use thiserror::Error;

/// The two recoverable failures of the engine. Both leave the
/// lists untouched; the simulation carries on with the next
/// instruction.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MmuError {
    #[error("Memory Allocation {size} blocks")]
    AllocationFailure { size: usize },
    #[error("Can't locate Memory Used by PID: {pid}")]
    UnknownPid { pid: u32 },
}

/// Fixed-partition memory manager state: the free list, the
/// allocated list, and the placement policy fixed at setup.
/// Only metadata is tracked; no actual memory moves.
pub struct Mmu {
    policy: Policy,
    free: BlockList,
    allocated: BlockList,
}

impl Mmu {
    /// Set up the partition `[0, partition_size - 1]` as one
    /// free block.
    pub fn new(partition_size: usize, policy: Policy) -> Self {
        debug_assert!(partition_size > 0);

        let mut free = BlockList::new();
        free.push_back(Block::free(0, partition_size - 1));

        Self {
            policy,
            free,
            allocated: BlockList::new(),
        }
    }

    /// Allocate `size` units for `pid`. The free list is
    /// scanned from the head and the first block with capacity
    /// strictly greater than `size` is taken; an exact-fit
    /// block is passed over. The chosen block is shrunk in
    /// place and moved to the allocated list, and the remainder
    /// goes back to the free list as a fragment, inserted in
    /// the active policy's order.
    pub fn allocate(&mut self, pid: u32, size: usize) -> Result<(), MmuError> {
        debug_assert!(pid != FREE && size > 0);

        // The scan rule is the same for every policy; what
        // varies between policies is the order the free list
        // was built in. Capacity is compared strictly, so a
        // block of exactly `size` units never qualifies.
        let found = self.free.position(|block| block.capacity() > size);

        let index = match found {
            Some(index) => index,
            None => return Err(MmuError::AllocationFailure { size }),
        };

        let mut block = self.free.remove(index);
        let old_end = block.end;

        block.pid = pid;
        block.end = block.start + size - 1;
        let new_end = block.end;
        self.allocated.insert_by_address(block);

        // Whatever the shrunk block no longer covers becomes a
        // free fragment. Under the strict capacity rule the
        // remainder is never empty, but an exact fit would
        // simply produce no fragment.
        if new_end != old_end {
            self.insert_free(Block::free(new_end + 1, old_end));
        }

        Ok(())
    }

    /// Return `pid`'s block to the free list. The allocated
    /// list is scanned linearly; no merging happens here, so
    /// the returned block may sit next to another free block
    /// until the next coalesce.
    pub fn deallocate(&mut self, pid: u32) -> Result<(), MmuError> {
        let found = self.allocated.position(|block| block.pid == pid);

        let index = match found {
            Some(index) => index,
            None => return Err(MmuError::UnknownPid { pid }),
        };

        let mut block = self.allocated.remove(index);
        block.pid = FREE;
        self.insert_free(block);

        Ok(())
    }

    /// Merge adjacent free blocks. The free list is rebuilt
    /// front-to-back into address-ascending order (discarding
    /// any policy ordering until further insertions), then a
    /// single forward pass combines every run of blocks whose
    /// ranges touch. Running it twice changes nothing the
    /// second time.
    pub fn coalesce(&mut self) {
        let mut rebuilt = BlockList::new();
        while let Some(block) = self.free.pop_front() {
            rebuilt.insert_by_address(block);
        }
        rebuilt.merge_adjacent();

        self.free = rebuilt;
    }

    /// Read-only view of the free list, in scan order.
    pub fn free_blocks(&self) -> impl Iterator<Item = &Block> {
        self.free.iter()
    }

    /// Read-only view of the allocated list, address-ascending.
    pub fn allocated_blocks(&self) -> impl Iterator<Item = &Block> {
        self.allocated.iter()
    }

    pub fn policy(&self) -> Policy {
        self.policy
    }

    /// Insert a returned or fragment block into the free list
    /// in the order the active policy dictates.
    fn insert_free(&mut self, block: Block) {
        match self.policy {
            Policy::Fifo => self.free.push_back(block),
            Policy::BestFit => self.free.insert_by_capacity_ascending(block),
            Policy::WorstFit => self.free.insert_by_capacity_descending(block),
        }
    }
}
