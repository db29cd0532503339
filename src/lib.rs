//! Fixed-partition memory allocation simulator: two ordered
//! block lists (free and allocated), three placement policies
//! realized as free-list insertion orders, and explicit
//! coalescing of adjacent free blocks. Only bookkeeping — no
//! actual memory is allocated for the simulated processes.

mod block;
mod list;
mod mmu;
mod policy;

pub mod instructions;
pub mod report;

pub use block::{Block, FREE};
pub use list::BlockList;
pub use mmu::{Mmu, MmuError};
pub use policy::Policy;
