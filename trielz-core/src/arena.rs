//! Append-only, block-grown arena with stable integer handles.
//!
//! Storage grows in blocks: the first block holds [`FIRST_BLOCK_LEN`]
//! entries, each subsequent block doubles the previous one up to
//! [`MAX_BLOCK_LEN`]. Allocation bump-advances within the newest block, so
//! a handle stays valid for the arena's whole lifetime and existing blocks
//! are never moved. There is no retail free; everything drops with the
//! arena at the end of one compression pass.

use crate::error::{CoreError, Result};

/// Entries in the first block.
pub const FIRST_BLOCK_LEN: usize = 256;
/// Cap on the entries of any single block.
pub const MAX_BLOCK_LEN: usize = 16_384;

/// Stable handle to an arena entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle(u32);

impl Handle {
    /// Position of the entry in allocation order.
    pub fn index(self) -> u32 {
        self.0
    }
}

/// Append-only storage for same-sized objects.
#[derive(Debug)]
pub struct Arena<T> {
    blocks: Vec<Vec<T>>,
    /// Global index of the first entry of each block, parallel to `blocks`.
    starts: Vec<u32>,
    /// Target capacity of the tail block.
    tail_cap: usize,
    len: u32,
}

impl<T> Arena<T> {
    /// Create an empty arena. The first block is allocated lazily.
    pub fn new() -> Self {
        Self {
            blocks: Vec::new(),
            starts: Vec::new(),
            tail_cap: 0,
            len: 0,
        }
    }

    /// Number of allocated entries.
    pub fn len(&self) -> u32 {
        self.len
    }

    /// True if nothing has been allocated.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Allocate an entry and return its handle.
    ///
    /// Returns [`CoreError::OutOfMemory`] if backing memory for a new block
    /// cannot be obtained.
    pub fn alloc(&mut self, value: T) -> Result<Handle> {
        let tail_full = match self.blocks.last() {
            Some(block) => block.len() == self.tail_cap,
            None => true,
        };
        if tail_full {
            self.grow()?;
        }

        let tail = self.blocks.len() - 1;
        self.blocks[tail].push(value);

        let handle = Handle(self.len);
        self.len += 1;
        Ok(handle)
    }

    /// Borrow the entry behind `handle`.
    ///
    /// # Panics
    ///
    /// Panics if `handle` was not returned by this arena.
    pub fn get(&self, handle: Handle) -> &T {
        let (block, offset) = self.locate(handle);
        &self.blocks[block][offset]
    }

    /// Mutably borrow the entry behind `handle`.
    ///
    /// # Panics
    ///
    /// Panics if `handle` was not returned by this arena.
    pub fn get_mut(&mut self, handle: Handle) -> &mut T {
        let (block, offset) = self.locate(handle);
        &mut self.blocks[block][offset]
    }

    fn locate(&self, handle: Handle) -> (usize, usize) {
        assert!(handle.0 < self.len, "handle out of range");

        let block = self.starts.partition_point(|&start| start <= handle.0) - 1;
        (block, (handle.0 - self.starts[block]) as usize)
    }

    fn grow(&mut self) -> Result<()> {
        let cap = if self.blocks.is_empty() {
            FIRST_BLOCK_LEN
        } else {
            (self.tail_cap * 2).min(MAX_BLOCK_LEN)
        };

        let mut block = Vec::new();
        block
            .try_reserve_exact(cap)
            .map_err(|_| CoreError::OutOfMemory {
                bytes: cap * std::mem::size_of::<T>(),
            })?;

        self.starts.push(self.len);
        self.blocks.push(block);
        self.tail_cap = cap;
        Ok(())
    }
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}
