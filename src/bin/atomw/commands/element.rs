use std::io::{self, Write};

use anyhow::{Context, Result};
use atomic_weight::ElementTable;

use crate::cli::{ElementArgs, GlobalOptions};

pub fn run_element(args: ElementArgs, table: &ElementTable, options: &GlobalOptions) -> Result<()> {
    let mut out = io::stdout().lock();

    for symbol in &args.symbols {
        let weight = table
            .weight(symbol)
            .with_context(|| format!("Failed to look up element '{symbol}'"))?;
        writeln!(out, "{symbol}\t{weight:.prec$}", prec = options.precision)?;
    }

    out.flush()?;
    Ok(())
}
