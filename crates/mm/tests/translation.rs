// End-to-end translation scenarios against the public API, using the
// values the demo driver prints.

use vmsim_mm::{
    MemError, PhysAddr, SlottedPageTable, TableError, TlbTranslator, Translator,
    TranslatorConfig, VirtAddr, PAGE_SIZE,
};

/// Translating 0x1000, 0x2000, 0x3000, 0x4000 on a fresh translator yields
/// physical bases 0x0, 0x1000, 0x2000, 0x3000: four hard faults allocating
/// contiguous frames in order.
#[test]
fn translate_sequence_allocates_in_order() {
    let mut xlat = Translator::new();
    let vas = [0x1000, 0x2000, 0x3000, 0x4000];
    let expected = [0x0, 0x1000, 0x2000, 0x3000];
    for (&va, &pa) in vas.iter().zip(expected.iter()) {
        assert_eq!(xlat.translate(VirtAddr(va)).unwrap(), PhysAddr(pa));
    }
    assert_eq!(xlat.stats().hard_faults, 4);
}

/// The TLB-backed translator produces the same sequence.
#[test]
fn tlb_sequence_allocates_in_order() {
    let mut xlat = TlbTranslator::new();
    let vas = [0x1000, 0x2000, 0x3000, 0x4000];
    let expected = [0x0, 0x1000, 0x2000, 0x3000];
    for (&va, &pa) in vas.iter().zip(expected.iter()) {
        assert_eq!(xlat.translate(VirtAddr(va)).unwrap(), PhysAddr(pa));
    }
}

/// Translating the same address twice yields the same physical address.
#[test]
fn translation_is_idempotent() {
    let mut plain = Translator::new();
    let mut tlb = TlbTranslator::new();
    for va in [0x1000usize, 0x1004, 0x7ABC, 0x0] {
        let first = plain.translate(VirtAddr(va)).unwrap();
        assert_eq!(plain.translate(VirtAddr(va)).unwrap(), first);
        let first = tlb.translate(VirtAddr(va)).unwrap();
        assert_eq!(tlb.translate(VirtAddr(va)).unwrap(), first);
    }
}

/// Two addresses on the same page with different offsets get two
/// independently allocated frames with different bases. This is the
/// intended per-address fault granularity, not page sharing.
#[test]
fn same_page_different_offsets_are_distinct() {
    let mut xlat = Translator::new();
    let a = xlat.translate(VirtAddr(0x1000)).unwrap();
    let b = xlat.translate(VirtAddr(0x1010)).unwrap();
    // a resolves into frame 0, b into frame 1.
    assert_eq!(a, PhysAddr(0x0));
    assert_eq!(b, PhysAddr(0x1000 + 0x10));
    assert_eq!(xlat.store().frame_count(), 2);
}

/// After the first resolution of an address (hard fault included), the
/// next translation is served purely from the TLB: neither the table-hit
/// nor the fault counter moves.
#[test]
fn repeat_is_tlb_served() {
    let mut xlat = TlbTranslator::new();
    xlat.translate(VirtAddr(0x5000)).unwrap();
    let before = xlat.stats();
    xlat.translate(VirtAddr(0x5000)).unwrap();
    let after = xlat.stats();
    assert_eq!(after.tlb_hits, before.tlb_hits + 1);
    assert_eq!(after.table_hits, before.table_hits);
    assert_eq!(after.hard_faults, before.hard_faults);
}

/// A bounded translator surfaces OutOfMemory instead of growing past the
/// configured physical memory size.
#[test]
fn bounded_store_surfaces_out_of_memory() {
    let mut xlat = TlbTranslator::with_config(TranslatorConfig {
        page_size: PAGE_SIZE,
        capacity: Some(2 * PAGE_SIZE),
    });
    assert!(xlat.translate(VirtAddr(0x1000)).is_ok());
    assert!(xlat.translate(VirtAddr(0x2000)).is_ok());
    assert_eq!(
        xlat.translate(VirtAddr(0x3000)),
        Err(MemError::OutOfMemory)
    );
    // Existing mappings keep translating.
    assert!(xlat.translate(VirtAddr(0x1000)).is_ok());
}

/// Slotted table: three frames, allocate pages 1/2/3,
/// deallocate 2, then 2 is absent while 1 and 3 keep their frames.
#[test]
fn slotted_three_frame_scenario() {
    let mut table = SlottedPageTable::new(3);
    table.allocate_page(1, 0).unwrap();
    table.allocate_page(2, 1).unwrap();
    table.allocate_page(3, 2).unwrap();
    table.deallocate_page(2).unwrap();

    assert!(table.find_page(2).is_none());
    assert_eq!(table.find_page(1).unwrap().frame_number, 0);
    assert_eq!(table.find_page(3).unwrap().frame_number, 2);
}

/// Slotted table: duplicate allocation is rejected; deallocate-then-
/// allocate succeeds by reusing the freed slot.
#[test]
fn slotted_duplicate_and_reuse() {
    let mut table = SlottedPageTable::new(3);
    table.allocate_page(1, 0).unwrap();
    assert_eq!(
        table.allocate_page(1, 9),
        Err(TableError::PageAlreadyMapped)
    );
    table.deallocate_page(1).unwrap();
    table.allocate_page(1, 9).unwrap();
    assert_eq!(table.find_page(1).unwrap().frame_number, 9);
}

/// Slotted table with capacity N: the (N+1)th distinct page is rejected.
#[test]
fn slotted_capacity_bound() {
    let n = 5;
    let mut table = SlottedPageTable::new(n);
    for page in 0..n as i64 {
        table.allocate_page(page, page).unwrap();
    }
    assert_eq!(table.allocate_page(99, 0), Err(TableError::TableFull));
}
