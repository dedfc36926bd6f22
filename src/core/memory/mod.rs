pub mod arena;

pub use arena::{ArenaScope, ArenaSlice, DEFAULT_SCRATCH_CAPACITY, ScratchArena};
