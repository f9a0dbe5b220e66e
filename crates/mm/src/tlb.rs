//! Translation-lookaside buffer.
//!
//! A cache of completed translations, consulted before the page table.
//! The cache is unbounded, has no eviction, and is never invalidated
//! automatically when the underlying page table changes. A stale entry can
//! therefore outlive a remap; [`Tlb::flush`] is the explicit hook for the
//! driver, never called implicitly.

use std::collections::HashMap;

use crate::addr::{PhysAddr, VirtAddr};

/// Map from virtual address to resolved physical address.
#[derive(Default)]
pub struct Tlb {
    entries: HashMap<VirtAddr, PhysAddr>,
}

impl Tlb {
    /// Create an empty TLB.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached translation for `va`, if present.
    pub fn get(&self, va: VirtAddr) -> Option<PhysAddr> {
        self.entries.get(&va).copied()
    }

    /// Cache `va -> pa`, replacing any previous entry.
    pub fn put(&mut self, va: VirtAddr, pa: PhysAddr) {
        self.entries.insert(va, pa);
    }

    /// Number of cached translations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every cached translation.
    pub fn flush(&mut self) {
        log::debug!("[TLB] flush: dropping {} entries", self.entries.len());
        self.entries.clear();
    }
}
