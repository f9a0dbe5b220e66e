//! Core model for the virtual-memory address-translation simulator.
//!
//! The pieces, leaves first:
//! - [`store::PhysicalStore`] — growable byte arena; bump-allocates frames.
//! - [`table::PageTable`] — address-keyed map to physical frame bases.
//! - [`slotted::SlottedPageTable`] — fixed-capacity demonstration table.
//! - [`tlb::Tlb`] — cache of completed translations.
//! - [`translator`] — [`translator::Translator`] (table only) and
//!   [`translator::TlbTranslator`] (TLB first), separately constructible.
//!
//! Everything is a plain value owned by its translator or by the caller;
//! there is no global state, and one session or test never observes
//! another's mappings.

pub mod addr;
pub mod slotted;
pub mod store;
pub mod table;
pub mod tlb;
pub mod translator;

pub use addr::{PAGE_SHIFT, PAGE_SIZE, PhysAddr, VirtAddr};
pub use slotted::{PageSlot, SlotFlags, SlottedPageTable, TableError};
pub use store::{MemError, PhysicalStore};
pub use table::PageTable;
pub use tlb::Tlb;
pub use translator::{TlbTranslator, TranslateStats, Translator, TranslatorConfig};
