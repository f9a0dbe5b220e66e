//! Simulated physical memory.
//!
//! [`PhysicalStore`] is a growable byte arena. Frames are bump-allocated:
//! each allocation appends one zeroed page to the end of the arena and the
//! base address of that region is never reused or invalidated afterwards.
//! There is no free operation; the translation path only ever grows the
//! store for the life of the session.

use vmsim_error::define_sim_error;

use crate::addr::{PAGE_SIZE, PhysAddr};

define_sim_error! {
    /// Physical store error type (codes 0x01xx).
    pub enum MemError(0x01) {
        /// Configured capacity ceiling would be exceeded
        OutOfMemory = 0x01 => "Physical memory exhausted",
    }
}

/// A growable arena of simulated physical memory.
///
/// By default the store is unbounded. A
/// capacity ceiling (in bytes) can be configured; once an allocation would
/// grow the arena past the ceiling, [`PhysicalStore::alloc_frame`] fails
/// with [`MemError::OutOfMemory`] and the arena is left unchanged.
pub struct PhysicalStore {
    bytes: Vec<u8>,
    page_size: usize,
    capacity: Option<usize>,
}

impl PhysicalStore {
    /// Create an unbounded store with the given frame size.
    pub fn new(page_size: usize) -> Self {
        Self {
            bytes: Vec::new(),
            page_size,
            capacity: None,
        }
    }

    /// Create a store that refuses to grow past `capacity` bytes.
    pub fn with_capacity(page_size: usize, capacity: usize) -> Self {
        Self {
            bytes: Vec::new(),
            page_size,
            capacity: Some(capacity),
        }
    }

    /// Allocate one frame: append `page_size` zeroed bytes to the arena.
    ///
    /// Returns the base address of the new frame. Addresses returned by
    /// earlier calls stay valid; the arena only grows.
    pub fn alloc_frame(&mut self) -> Result<PhysAddr, MemError> {
        let base = self.bytes.len();
        if let Some(cap) = self.capacity {
            if base + self.page_size > cap {
                log::warn!(
                    "[STORE] alloc_frame: capacity {cap:#x} exhausted ({base:#x} used)"
                );
                return Err(MemError::OutOfMemory);
            }
        }
        self.bytes.resize(base + self.page_size, 0);
        log::trace!("[STORE] allocated frame at {base:#x}");
        Ok(PhysAddr(base))
    }

    /// Frame size the store was configured with.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Bytes currently backing the arena.
    pub fn used_bytes(&self) -> usize {
        self.bytes.len()
    }

    /// Number of frames allocated so far.
    pub fn frame_count(&self) -> usize {
        self.bytes.len() / self.page_size
    }

    /// Borrow the frame starting at `base`, if it has been allocated.
    pub fn frame(&self, base: PhysAddr) -> Option<&[u8]> {
        let end = base.0.checked_add(self.page_size)?;
        self.bytes.get(base.0..end)
    }

    /// Mutably borrow the frame starting at `base`, if it has been allocated.
    pub fn frame_mut(&mut self, base: PhysAddr) -> Option<&mut [u8]> {
        let end = base.0.checked_add(self.page_size)?;
        self.bytes.get_mut(base.0..end)
    }
}

impl Default for PhysicalStore {
    fn default() -> Self {
        Self::new(PAGE_SIZE)
    }
}
