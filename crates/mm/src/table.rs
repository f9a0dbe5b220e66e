//! Address-keyed page table.
//!
//! The translation-path page table is keyed by the FULL virtual address,
//! not by page number. Two addresses on the same page but with different
//! offsets are distinct keys and fault independently, so the offset-sharing
//! a conventional page-number-keyed table provides is absent. That is the
//! simulated design, not an accident; see DESIGN.md for the discussion.

use std::collections::HashMap;

use crate::addr::{PhysAddr, VirtAddr};

/// Map from virtual address to physical frame base.
///
/// Lookups are total (presence or absence, never an error). Inserts are
/// unconditional; re-inserting a key silently replaces the old mapping.
/// The translation path never removes entries.
#[derive(Default)]
pub struct PageTable {
    entries: HashMap<VirtAddr, PhysAddr>,
}

impl PageTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Exact-match lookup of the full virtual address.
    pub fn lookup(&self, va: VirtAddr) -> Option<PhysAddr> {
        self.entries.get(&va).copied()
    }

    /// Map `va` to `frame_base`, replacing any previous mapping.
    pub fn insert(&mut self, va: VirtAddr, frame_base: PhysAddr) {
        if let Some(old) = self.entries.insert(va, frame_base) {
            log::debug!("[TABLE] remapped {va} from {old} to {frame_base}");
        }
    }

    /// Number of mapped addresses.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no address is mapped.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over mappings in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (VirtAddr, PhysAddr)> + '_ {
        self.entries.iter().map(|(&va, &pa)| (va, pa))
    }
}
