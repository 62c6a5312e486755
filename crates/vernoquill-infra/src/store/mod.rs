//! Post storage adapters.

mod memory;

pub use memory::MemoryPostStore;
