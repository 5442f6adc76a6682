mod compound;
mod element;

use compound::run_compound;
use element::run_element;

use std::borrow::Cow;

use anyhow::{Context as _, Result};
use atomic_weight::ElementTable;

use crate::cli::{Command, GlobalOptions};
use crate::display::{self, Context};

pub fn dispatch(command: Command, options: &GlobalOptions, ctx: Context) -> Result<()> {
    let table = load_table(options)?;

    if ctx.interactive {
        display::print_table_summary(&table, options.table.as_deref());
    }

    match command {
        Command::Element(args) => run_element(args, &table, options),
        Command::Compound(args) => run_compound(args, &table, options),
    }
}

fn load_table(options: &GlobalOptions) -> Result<Cow<'static, ElementTable>> {
    match &options.table {
        Some(path) => {
            let table = ElementTable::from_path(path).with_context(|| {
                format!("Failed to load element table: {}", path.display())
            })?;
            Ok(Cow::Owned(table))
        }
        None => Ok(Cow::Borrowed(ElementTable::get_default())),
    }
}
