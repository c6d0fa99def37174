use anyhow::Result;

fn main() -> Result<()> {
    readtrace_cli::main_entry()
}
