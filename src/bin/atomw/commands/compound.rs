use std::io::{self, Write};

use anyhow::{Context, Result};
use atomic_weight::{Compound, ElementTable};

use crate::cli::{CompoundArgs, GlobalOptions};
use crate::display::print_breakdown;

pub fn run_compound(
    args: CompoundArgs,
    table: &ElementTable,
    options: &GlobalOptions,
) -> Result<()> {
    let mut out = io::stdout().lock();

    for formula in &args.formulas {
        let compound = Compound::new(formula, table)
            .with_context(|| format!("Failed to parse formula '{formula}'"))?;

        writeln!(
            out,
            "{formula}\t{weight:.prec$}",
            weight = compound.weight(),
            prec = options.precision
        )?;

        if args.breakdown {
            print_breakdown(&mut out, &compound, options.precision)?;
        }
    }

    out.flush()?;
    Ok(())
}
