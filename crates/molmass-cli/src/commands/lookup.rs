use super::load_element_table;
use crate::cli::LookupArgs;
use crate::config::AppConfig;
use crate::error::{CliError, Result};
use molmass::core::elements::record::ElementRecord;
use molmass::core::elements::registry::ElementTable;
use std::io::Write;

pub fn run(args: LookupArgs, config: &AppConfig) -> Result<()> {
    let table = load_element_table(&config.dataset)?;
    execute(&args.element, &table, &mut std::io::stdout().lock())
}

fn find<'t>(table: &'t ElementTable, query: &str) -> Option<&'t ElementRecord> {
    let query = query.trim();
    match query.parse::<u32>() {
        Ok(atomic_number) => table.by_atomic_number(atomic_number),
        Err(_) => table.get(query),
    }
}

fn execute(query: &str, table: &ElementTable, out: &mut impl Write) -> Result<()> {
    let record = find(table, query).ok_or_else(|| {
        CliError::Argument(format!("No element matching '{}' in the dataset", query))
    })?;

    writeln!(out, "{} ({})", record.name, record.symbol)?;
    writeln!(out, "  Atomic number: {}", record.atomic_number)?;
    writeln!(out, "  Atomic mass:   {}", record.atomic_mass)?;
    writeln!(out, "  Group:         {}", record.group)?;
    writeln!(out, "  Source:        {}", record.source)?;
    Ok(())
}
