//! Address translators.
//!
//! Two independent configurations, demonstrated side by side:
//! [`Translator`] consults only the page table, and
//! [`TlbTranslator`] consults a TLB first. Each owns its store, table and
//! (where present) TLB outright; nothing is shared between instances.
//!
//! Both key the page table by the full virtual address (see
//! [`crate::table`]), so every distinct address hard-faults and receives a
//! fresh frame on first sight, even when it shares a page with an address
//! translated earlier.

use crate::addr::{PAGE_SIZE, PhysAddr, VirtAddr};
use crate::store::{MemError, PhysicalStore};
use crate::table::PageTable;
use crate::tlb::Tlb;

/// Construction-time configuration for a translator.
#[derive(Clone, Copy, Debug)]
pub struct TranslatorConfig {
    /// Frame size in bytes.
    pub page_size: usize,
    /// Physical memory ceiling in bytes; `None` means unbounded.
    pub capacity: Option<usize>,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            page_size: PAGE_SIZE,
            capacity: None,
        }
    }
}

impl TranslatorConfig {
    fn store(self) -> PhysicalStore {
        match self.capacity {
            Some(cap) => PhysicalStore::with_capacity(self.page_size, cap),
            None => PhysicalStore::new(self.page_size),
        }
    }
}

/// Counters for the lookup paths taken by a translator.
///
/// `tlb_hits` stays zero for the TLB-less [`Translator`]. Tests use these
/// to observe which level served a translation without instrumenting the
/// tables themselves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TranslateStats {
    /// Translations served by the TLB alone.
    pub tlb_hits: u64,
    /// TLB misses served by the page table (no new frame).
    pub table_hits: u64,
    /// Full misses that allocated a fresh frame.
    pub hard_faults: u64,
}

/// Page-table-only translator.
pub struct Translator {
    store: PhysicalStore,
    table: PageTable,
    page_size: usize,
    stats: TranslateStats,
}

impl Translator {
    /// Translator with default configuration (4KB pages, unbounded store).
    pub fn new() -> Self {
        Self::with_config(TranslatorConfig::default())
    }

    /// Translator with explicit page size and capacity.
    pub fn with_config(config: TranslatorConfig) -> Self {
        Self {
            store: config.store(),
            table: PageTable::new(),
            page_size: config.page_size,
            stats: TranslateStats::default(),
        }
    }

    /// Physical address for `va`, allocating a frame on first reference.
    ///
    /// Never fails with an unbounded store; a configured capacity surfaces
    /// [`MemError::OutOfMemory`] when a hard fault cannot be served.
    pub fn translate(&mut self, va: VirtAddr) -> Result<PhysAddr, MemError> {
        let offset = va.page_offset(self.page_size);
        if let Some(base) = self.table.lookup(va) {
            self.stats.table_hits += 1;
            log::trace!("[XLATE] {va}: table hit, frame {base}");
            return Ok(base.add_offset(offset));
        }
        let base = self.fault_in(va)?;
        Ok(base.add_offset(offset))
    }

    fn fault_in(&mut self, va: VirtAddr) -> Result<PhysAddr, MemError> {
        self.stats.hard_faults += 1;
        let base = self.store.alloc_frame()?;
        self.table.insert(va, base);
        log::debug!("[XLATE] {va}: hard fault, new frame {base}");
        Ok(base)
    }

    /// Lookup-path counters accumulated so far.
    pub fn stats(&self) -> TranslateStats {
        self.stats
    }

    /// The owned page table, for display.
    pub fn table(&self) -> &PageTable {
        &self.table
    }

    /// The owned physical store, for display.
    pub fn store(&self) -> &PhysicalStore {
        &self.store
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::new()
    }
}

/// TLB-backed translator: TLB first, then page table, then fault.
pub struct TlbTranslator {
    store: PhysicalStore,
    table: PageTable,
    tlb: Tlb,
    page_size: usize,
    stats: TranslateStats,
}

impl TlbTranslator {
    /// Translator with default configuration (4KB pages, unbounded store).
    pub fn new() -> Self {
        Self::with_config(TranslatorConfig::default())
    }

    /// Translator with explicit page size and capacity.
    pub fn with_config(config: TranslatorConfig) -> Self {
        Self {
            store: config.store(),
            table: PageTable::new(),
            tlb: Tlb::new(),
            page_size: config.page_size,
            stats: TranslateStats::default(),
        }
    }

    /// Physical address for `va` via the two-level lookup.
    ///
    /// A TLB hit returns immediately with no page-table or store access.
    /// A TLB miss that hits the page table populates the TLB (a soft
    /// fault). A full miss allocates a frame, maps it, and caches the
    /// completed translation so the next reference is TLB-served.
    pub fn translate(&mut self, va: VirtAddr) -> Result<PhysAddr, MemError> {
        if let Some(pa) = self.tlb.get(va) {
            self.stats.tlb_hits += 1;
            log::trace!("[XLATE] {va}: TLB hit, {pa}");
            return Ok(pa);
        }
        let offset = va.page_offset(self.page_size);
        let pa = if let Some(base) = self.table.lookup(va) {
            self.stats.table_hits += 1;
            log::trace!("[XLATE] {va}: TLB miss, table hit, frame {base}");
            base.add_offset(offset)
        } else {
            self.stats.hard_faults += 1;
            let base = self.store.alloc_frame()?;
            self.table.insert(va, base);
            log::debug!("[XLATE] {va}: hard fault, new frame {base}");
            base.add_offset(offset)
        };
        self.tlb.put(va, pa);
        Ok(pa)
    }

    /// Drop all cached translations; the page table is untouched.
    pub fn flush_tlb(&mut self) {
        self.tlb.flush();
    }

    /// Lookup-path counters accumulated so far.
    pub fn stats(&self) -> TranslateStats {
        self.stats
    }

    /// The owned TLB, for display.
    pub fn tlb(&self) -> &Tlb {
        &self.tlb
    }

    /// The owned page table, for display.
    pub fn table(&self) -> &PageTable {
        &self.table
    }

    /// The owned physical store, for display.
    pub fn store(&self) -> &PhysicalStore {
        &self.store
    }
}

impl Default for TlbTranslator {
    fn default() -> Self {
        Self::new()
    }
}
