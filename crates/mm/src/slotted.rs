//! Capacity-bounded, slotted page table.
//!
//! Independent from the address-keyed [`crate::table::PageTable`]: this is
//! the demonstration table with a fixed number of slots, explicit
//! allocate/deallocate operations, and a printable snapshot. Each valid
//! slot maps one page number to one frame number, at most once.

use bitflags::bitflags;
use vmsim_error::define_sim_error;

define_sim_error! {
    /// Slotted page table error type (codes 0x02xx).
    pub enum TableError(0x02) {
        /// allocate_page for a page number already mapped
        PageAlreadyMapped = 0x01 => "Page already mapped",
        /// allocate_page with no invalid slot remaining
        TableFull = 0x02 => "Page table full",
        /// deallocate_page for a page number not currently mapped
        PageNotMapped = 0x03 => "Page not mapped",
    }
}

bitflags! {
    /// Flags for a page-table slot.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct SlotFlags: u8 {
        /// Slot currently maps a page
        const VALID = 1 << 0;
    }
}

/// One slot of the bounded table.
///
/// Deallocation clears VALID but retains the frame number, so a snapshot
/// shows the last occupant of a freed slot. Slots that were never used
/// carry `-1` sentinels for both numbers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageSlot {
    pub page_number: i64,
    pub frame_number: i64,
    pub flags: SlotFlags,
}

impl PageSlot {
    /// A never-used slot.
    pub const fn empty() -> Self {
        Self {
            page_number: -1,
            frame_number: -1,
            flags: SlotFlags::empty(),
        }
    }

    /// Whether the slot currently maps a page.
    pub fn is_valid(&self) -> bool {
        self.flags.contains(SlotFlags::VALID)
    }
}

/// Fixed-capacity page table with first-fit slot occupancy.
pub struct SlottedPageTable {
    slots: Vec<PageSlot>,
}

impl SlottedPageTable {
    /// Create a table with `num_frames` slots, all invalid.
    pub fn new(num_frames: usize) -> Self {
        Self {
            slots: vec![PageSlot::empty(); num_frames],
        }
    }

    /// Linear scan for the first valid slot mapping `page_number`.
    pub fn find_page(&self, page_number: i64) -> Option<&PageSlot> {
        self.slots
            .iter()
            .find(|slot| slot.is_valid() && slot.page_number == page_number)
    }

    fn find_page_mut(&mut self, page_number: i64) -> Option<&mut PageSlot> {
        self.slots
            .iter_mut()
            .find(|slot| slot.is_valid() && slot.page_number == page_number)
    }

    /// Occupy the first invalid slot with `page_number -> frame_number`.
    ///
    /// Fails with [`TableError::PageAlreadyMapped`] if the page is mapped,
    /// or [`TableError::TableFull`] if every slot is valid.
    pub fn allocate_page(&mut self, page_number: i64, frame_number: i64) -> Result<(), TableError> {
        if self.find_page(page_number).is_some() {
            return Err(TableError::PageAlreadyMapped);
        }
        let slot = self
            .slots
            .iter_mut()
            .find(|slot| !slot.is_valid())
            .ok_or(TableError::TableFull)?;
        slot.page_number = page_number;
        slot.frame_number = frame_number;
        slot.flags.insert(SlotFlags::VALID);
        log::trace!("[TABLE] allocated page {page_number} in frame {frame_number}");
        Ok(())
    }

    /// Mark the slot holding `page_number` invalid.
    ///
    /// The frame number is retained (logically free). Fails with
    /// [`TableError::PageNotMapped`] if the page is not currently mapped.
    pub fn deallocate_page(&mut self, page_number: i64) -> Result<(), TableError> {
        let slot = self
            .find_page_mut(page_number)
            .ok_or(TableError::PageNotMapped)?;
        slot.flags.remove(SlotFlags::VALID);
        log::trace!("[TABLE] deallocated page {page_number}");
        Ok(())
    }

    /// All slots in slot order, for display and testing.
    pub fn snapshot(&self) -> &[PageSlot] {
        &self.slots
    }

    /// Number of slots (valid or not).
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }
}
