pub mod debouncer;

pub use debouncer::{DEFAULT_COOLDOWN_MS, DEFAULT_ITERATION_COUNT, IterationDebouncer};
