use crate::error::CliResult;
use japanki_vocab::Category;
use std::io::{self, Write};

/// List every category, one per line
pub fn execute() -> CliResult<()> {
    write_categories(&mut io::stdout())
}

fn write_categories<W: Write>(out: &mut W) -> CliResult<()> {
    for category in Category::ALL {
        writeln!(out, "{}", category)?;
    }
    Ok(())
}
