/// Capacity of the scratch arena used to stage shader sources.
pub const DEFAULT_SCRATCH_CAPACITY: usize = 4 * 1024 * 1024;

const ALIGNMENT: usize = 4;

/// Fixed-capacity bump allocator for transient data.
///
/// Memory is only handed out through an [`ArenaScope`]; dropping the scope releases
/// everything pushed inside it, including on early returns. Running out of capacity is
/// an invariant violation and panics.
#[derive(Debug)]
pub struct ScratchArena {
    memory: Vec<u8>,
    top: usize,
}

/// Handle to a region pushed inside an [`ArenaScope`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ArenaSlice {
    offset: usize,
    len: usize,
}

impl ArenaSlice {
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl ScratchArena {
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            memory: vec![0; capacity],
            top: 0,
        }
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.memory.len()
    }

    #[must_use]
    pub fn used(&self) -> usize {
        self.top
    }

    pub fn scope(&mut self) -> ArenaScope<'_> {
        ArenaScope {
            mark: self.top,
            arena: self,
        }
    }
}

impl Default for ScratchArena {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_SCRATCH_CAPACITY)
    }
}

/// A push/pop region of a [`ScratchArena`]. Released on drop.
#[derive(Debug)]
pub struct ArenaScope<'a> {
    arena: &'a mut ScratchArena,
    mark: usize,
}

impl ArenaScope<'_> {
    /// Reserves `len` bytes, rounded up to a 4-byte boundary.
    ///
    /// # Panics
    ///
    /// Panics when the arena cannot hold the request.
    pub fn push(&mut self, len: usize) -> ArenaSlice {
        let offset = self.arena.top;
        let new_top = aligned(len)
            .and_then(|aligned_len| offset.checked_add(aligned_len))
            .filter(|&top| top <= self.arena.capacity());

        let Some(new_top) = new_top else {
            panic!(
                "scratch arena exhausted: {} bytes requested, {} of {} in use",
                len,
                offset,
                self.arena.capacity()
            );
        };

        self.arena.top = new_top;
        ArenaSlice { offset, len }
    }

    /// Releases the most recent push of this scope.
    ///
    /// # Panics
    ///
    /// Panics when `slice` is not the top of the arena or was pushed by an outer scope.
    pub fn pop(&mut self, slice: ArenaSlice) {
        let end = aligned(slice.len).and_then(|len| slice.offset.checked_add(len));

        assert!(
            slice.offset >= self.mark && end == Some(self.arena.top),
            "scratch arena pops must be last-in first-out"
        );

        self.arena.top = slice.offset;
    }

    #[must_use]
    pub fn bytes(&self, slice: ArenaSlice) -> &[u8] {
        &self.arena.memory[slice.offset..slice.offset + slice.len]
    }

    pub fn bytes_mut(&mut self, slice: ArenaSlice) -> &mut [u8] {
        &mut self.arena.memory[slice.offset..slice.offset + slice.len]
    }

    /// Opens a nested region that is released before this one.
    pub fn scope(&mut self) -> ArenaScope<'_> {
        self.arena.scope()
    }

    /// Bytes pushed through this scope (and any live nested scopes).
    #[must_use]
    pub fn used(&self) -> usize {
        self.arena.top - self.mark
    }
}

impl Drop for ArenaScope<'_> {
    fn drop(&mut self) {
        self.arena.top = self.mark;
    }
}

fn aligned(len: usize) -> Option<usize> {
    len.checked_add(ALIGNMENT - 1).map(|len| len & !(ALIGNMENT - 1))
}
