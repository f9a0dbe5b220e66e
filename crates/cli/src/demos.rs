//! The demonstrations behind each menu entry.
//!
//! Every demo constructs its own translator or table, runs to completion,
//! and prints to stdout; nothing is shared between runs. The interactive
//! menu is an iterative loop, so backing out of a demo never grows the
//! stack.

use std::fmt::Write as _;
use std::io::{self, BufRead};

use anyhow::{Context, Result};
use vmsim_mm::{PhysicalStore, SlottedPageTable, TlbTranslator, Translator, VirtAddr};

/// Addresses walked by the translation demos.
const DEMO_ADDRS: [usize; 4] = [0x1000, 0x2000, 0x3000, 0x4000];

/// Physical memory size for the dump demo, in bytes.
const DEMO_MEMORY_SIZE: usize = 64;
/// Frame size for the dump demo.
const DEMO_FRAME_SIZE: usize = 16;
/// Slot count for the placement demo.
const DEMO_TABLE_SLOTS: usize = 8;

/// Render a slotted table as tab-separated rows under a header.
pub fn render_slots(table: &SlottedPageTable) -> String {
    let mut out = String::from("Page Number\tValid\tFrame Number\n");
    for slot in table.snapshot() {
        let _ = writeln!(
            out,
            "{}\t\t{}\t\t{}",
            slot.page_number,
            u8::from(slot.is_valid()),
            slot.frame_number
        );
    }
    out
}

/// Slotted table walkthrough: allocate pages 1-3 in a three-frame table,
/// print it, deallocate page 2, print again.
pub fn slotted_table() -> Result<()> {
    let mut table = SlottedPageTable::new(3);
    table.allocate_page(1, 0)?;
    table.allocate_page(2, 1)?;
    table.allocate_page(3, 2)?;
    print!("{}", render_slots(&table));

    table.deallocate_page(2)?;
    println!();
    print!("{}", render_slots(&table));
    Ok(())
}

/// Reference translation sequence through the page-table-only translator.
pub fn translate() -> Result<()> {
    let mut xlat = Translator::new();
    for va in DEMO_ADDRS {
        let pa = xlat.translate(VirtAddr(va))?;
        println!("{pa:x}");
    }
    Ok(())
}

/// Reference sequence through the TLB-backed translator, run twice. The
/// second pass resolves every address from the TLB alone.
pub fn tlb() -> Result<()> {
    let mut xlat = TlbTranslator::new();
    for va in DEMO_ADDRS {
        let pa = xlat.translate(VirtAddr(va))?;
        println!("{pa:x}");
    }
    for va in DEMO_ADDRS {
        let pa = xlat.translate(VirtAddr(va))?;
        println!("{pa:x} (cached)");
    }
    let stats = xlat.stats();
    println!(
        "tlb hits: {}, table hits: {}, hard faults: {}",
        stats.tlb_hits, stats.table_hits, stats.hard_faults
    );
    Ok(())
}

/// Allocate a small bounded store, fill it with a counting pattern, and
/// dump every location.
pub fn physical_memory() -> Result<()> {
    let mut store = PhysicalStore::with_capacity(DEMO_FRAME_SIZE, DEMO_MEMORY_SIZE);
    let mut bases = Vec::new();
    for _ in 0..DEMO_MEMORY_SIZE / DEMO_FRAME_SIZE {
        bases.push(store.alloc_frame()?);
    }
    for (i, &base) in bases.iter().enumerate() {
        let frame = store.frame_mut(base).context("frame not backed")?;
        for (j, byte) in frame.iter_mut().enumerate() {
            *byte = (i * DEMO_FRAME_SIZE + j) as u8;
        }
    }
    for &base in &bases {
        let frame = store.frame(base).context("frame not backed")?;
        for (j, byte) in frame.iter().enumerate() {
            println!("Physical memory location {}: {}", usize::from(base) + j, byte);
        }
    }
    Ok(())
}

/// Place one page in a fresh slotted table and print the result.
pub fn place(page: i64, frame: i64) -> Result<()> {
    let mut table = SlottedPageTable::new(DEMO_TABLE_SLOTS);
    table.allocate_page(page, frame)?;
    println!("Placed page {page} in frame {frame}");
    print!("{}", render_slots(&table));
    Ok(())
}

/// One entry of the interactive menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    Table,
    Translate,
    Tlb,
    Memory,
    Place,
    Quit,
}

/// Parse a menu line. Accepts the numeric menu choices plus `q`.
pub fn parse_choice(line: &str) -> Option<MenuChoice> {
    match line.trim() {
        "1" => Some(MenuChoice::Table),
        "2" => Some(MenuChoice::Translate),
        "3" => Some(MenuChoice::Tlb),
        "4" => Some(MenuChoice::Memory),
        "5" => Some(MenuChoice::Place),
        "0" | "q" | "quit" => Some(MenuChoice::Quit),
        _ => None,
    }
}

fn print_menu() {
    println!("-----------------------------------------");
    println!("Menu");
    println!("Press 1 for Page Table");
    println!("Press 2 for Translate from virtual address to physical address");
    println!("Press 3 for Translate with TLB");
    println!("Press 4 for Physical Memory");
    println!("Press 5 for Placing a page in main memory");
    println!("Press 0 to quit");
}

fn dispatch(choice: MenuChoice) -> Result<()> {
    match choice {
        MenuChoice::Table => slotted_table(),
        MenuChoice::Translate => translate(),
        MenuChoice::Tlb => tlb(),
        MenuChoice::Memory => physical_memory(),
        MenuChoice::Place => place(42, 10),
        MenuChoice::Quit => Ok(()),
    }
}

/// Interactive menu: one flat loop, no recursion for "go back".
pub fn menu() -> Result<()> {
    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print_menu();
        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        match parse_choice(&line) {
            Some(MenuChoice::Quit) => break,
            Some(choice) => dispatch(choice)?,
            None => println!("Unrecognized choice: {}", line.trim()),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests: numeric choices and quit aliases parse, junk does not
    #[test]
    fn test_parse_choice() {
        assert_eq!(parse_choice("1"), Some(MenuChoice::Table));
        assert_eq!(parse_choice(" 3 "), Some(MenuChoice::Tlb));
        assert_eq!(parse_choice("0"), Some(MenuChoice::Quit));
        assert_eq!(parse_choice("q"), Some(MenuChoice::Quit));
        assert_eq!(parse_choice("7"), None);
        assert_eq!(parse_choice(""), None);
    }

    /// Tests: the rendered table carries the header and one row
    /// per slot, valid shown as 1/0
    #[test]
    fn test_render_slots() {
        let mut table = SlottedPageTable::new(2);
        table.allocate_page(1, 0).unwrap();
        let out = render_slots(&table);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Page Number\tValid\tFrame Number");
        assert_eq!(lines[1], "1\t\t1\t\t0");
        assert_eq!(lines[2], "-1\t\t0\t\t-1");
    }

    /// Tests: every demo runs to completion on a fresh state
    #[test]
    fn test_demos_run() {
        slotted_table().unwrap();
        translate().unwrap();
        tlb().unwrap();
        physical_memory().unwrap();
        place(42, 10).unwrap();
    }
}
