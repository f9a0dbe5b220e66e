use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "vmsim")]
#[command(about = "Virtual-memory address-translation simulator")]
pub struct Cli {
    /// Increase log verbosity (-v: debug, -vv: trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub cmd: Cmd,
}

#[derive(Subcommand)]
pub enum Cmd {
    /// Slotted page table demo: allocate pages 1-3, print, deallocate 2, print.
    Table,

    /// Translate the demo addresses through the page-table-only translator.
    Translate,

    /// Translate the demo addresses twice through the TLB-backed
    /// translator; the second pass is served from the TLB.
    Tlb,

    /// Initialize and dump the simulated physical memory.
    Memory,

    /// Place one page in a fresh slotted table and print it.
    Place {
        /// Virtual page number to place.
        #[arg(default_value_t = 42)]
        page: i64,
        /// Physical frame number to back it with.
        #[arg(default_value_t = 10)]
        frame: i64,
    },

    /// Interactive menu over the demos above.
    Menu,
}
