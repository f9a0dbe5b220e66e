use anyhow::Result;

pub fn run(cli: crate::cli::Cli) -> Result<()> {
    match cli.cmd {
        crate::cli::Cmd::Table => crate::demos::slotted_table(),
        crate::cli::Cmd::Translate => crate::demos::translate(),
        crate::cli::Cmd::Tlb => crate::demos::tlb(),
        crate::cli::Cmd::Memory => crate::demos::physical_memory(),
        crate::cli::Cmd::Place { page, frame } => crate::demos::place(page, frame),
        crate::cli::Cmd::Menu => crate::demos::menu(),
    }
}
