use super::load_element_table;
use crate::cli::CalcArgs;
use crate::config::AppConfig;
use crate::error::{CliError, Result};
use molmass::core::elements::registry::ElementTable;
use molmass::core::formula::normalize_formula;
use molmass::core::mass::CalculationError;
use molmass::workflows;
use std::io::{BufRead, Write};
use tracing::{info, warn};

const PROMPT: &str = "Enter a Chemical Formula (e.g., CO2): ";

pub fn run(args: CalcArgs, config: &AppConfig) -> Result<()> {
    let table = match load_element_table(&config.dataset) {
        Ok(table) => table,
        Err(e) => {
            warn!("Continuing with an empty element table: {}", e);
            eprintln!("Error loading element dataset: {}", e);
            ElementTable::empty()
        }
    };

    let stdin = std::io::stdin();
    execute(
        &args,
        config,
        &table,
        &mut stdin.lock(),
        &mut std::io::stdout().lock(),
    )
}

fn execute(
    args: &CalcArgs,
    config: &AppConfig,
    table: &ElementTable,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<()> {
    let raw = match &args.formula {
        Some(formula) => formula.clone(),
        None => prompt_formula(input, out)?,
    };
    let display = raw.trim();
    let formula = normalize_formula(display);
    info!("Calculating molar mass of {:?}", formula);

    let masses = table.mass_table();
    match workflows::calculate::run(&formula, &masses, config.calculation.mode) {
        Ok(report) => {
            if args.show_composition {
                writeln!(out, "Composition: {}", report.composition)?;
            }
            writeln!(
                out,
                "The molar mass of {} is {:.*} g/mol",
                display, config.calculation.precision, report.molar_mass
            )?;
            Ok(())
        }
        Err(e) => {
            match &e {
                CalculationError::UnknownElement { symbol } => {
                    writeln!(out, "UnknownElement: {}", symbol)?
                }
                CalculationError::Formula(inner) => writeln!(out, "MalformedFormula: {}", inner)?,
            }
            Err(e.into())
        }
    }
}

fn prompt_formula(input: &mut impl BufRead, out: &mut impl Write) -> Result<String> {
    write!(out, "{}", PROMPT)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(CliError::Argument(
            "No formula provided on standard input".to_string(),
        ));
    }
    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::ParseModeFlags;
    use crate::config::{CalculationSettings, DatasetSettings};
    use molmass::core::elements::builder::DatasetBuilder;
    use molmass::core::formula::{FormulaError, ParseMode};
    use molmass::core::io::format::DatasetFormat;
    use std::io::Cursor;
    use std::path::PathBuf;

    fn args(formula: Option<&str>) -> CalcArgs {
        CalcArgs {
            formula: formula.map(str::to_string),
            dataset: None,
            parse_mode: ParseModeFlags::default(),
            precision: None,
            show_composition: false,
        }
    }

    fn config(mode: ParseMode, precision: usize) -> AppConfig {
        AppConfig {
            dataset: DatasetSettings {
                path: PathBuf::from("elements.json"),
                format: DatasetFormat::Json,
            },
            calculation: CalculationSettings { mode, precision },
        }
    }

    fn standard_table() -> ElementTable {
        ElementTable::from_records(DatasetBuilder::standard().build_standard()).unwrap()
    }

    fn run_with(
        args: &CalcArgs,
        config: &AppConfig,
        table: &ElementTable,
        stdin: &str,
    ) -> (Result<()>, String) {
        let mut out = Vec::new();
        let result = execute(args, config, table, &mut Cursor::new(stdin), &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn prints_mass_to_three_decimals() {
        let (result, out) = run_with(
            &args(Some("C6H12O6")),
            &config(ParseMode::Strict, 3),
            &standard_table(),
            "",
        );
        assert!(result.is_ok());
        assert_eq!(out, "The molar mass of C6H12O6 is 180.156 g/mol\n");
    }

    #[test]
    fn prompts_when_formula_is_missing() {
        let (result, out) = run_with(
            &args(None),
            &config(ParseMode::Strict, 3),
            &standard_table(),
            "  Al2(SO4)3\n",
        );
        assert!(result.is_ok());
        assert_eq!(
            out,
            format!("{PROMPT}The molar mass of Al2(SO4)3 is 342.146 g/mol\n")
        );
    }

    #[test]
    fn subscript_input_is_normalized_but_echoed_as_typed() {
        let (result, out) = run_with(
            &args(Some("H₂O")),
            &config(ParseMode::Strict, 3),
            &standard_table(),
            "",
        );
        assert!(result.is_ok());
        assert_eq!(out, "The molar mass of H₂O is 18.015 g/mol\n");
    }

    #[test]
    fn composition_is_shown_on_request() {
        let mut calc_args = args(Some("Al2(SO4)3"));
        calc_args.show_composition = true;
        let (_, out) = run_with(
            &calc_args,
            &config(ParseMode::Strict, 3),
            &standard_table(),
            "",
        );
        assert!(out.starts_with("Composition: Al2 S3 O12\n"));
    }

    #[test]
    fn unknown_element_line_names_symbol() {
        let (result, out) = run_with(
            &args(Some("Xx2O")),
            &config(ParseMode::Strict, 3),
            &standard_table(),
            "",
        );
        assert_eq!(out, "UnknownElement: Xx\n");
        assert!(matches!(
            result,
            Err(CliError::Calculation(CalculationError::UnknownElement { symbol })) if symbol == "Xx"
        ));
    }

    #[test]
    fn empty_table_makes_every_element_unknown() {
        let (result, out) = run_with(
            &args(Some("H2O")),
            &config(ParseMode::Strict, 3),
            &ElementTable::empty(),
            "",
        );
        assert_eq!(out, "UnknownElement: H\n");
        assert!(result.is_err());
    }

    #[test]
    fn strict_mode_reports_malformed_formula() {
        let (result, out) = run_with(
            &args(Some("Na(Cl")),
            &config(ParseMode::Strict, 3),
            &standard_table(),
            "",
        );
        assert_eq!(out, "MalformedFormula: Unclosed '(' at position 2\n");
        assert!(matches!(
            result,
            Err(CliError::Calculation(CalculationError::Formula(
                FormulaError::UnclosedGroup { position: 2 }
            )))
        ));
    }

    #[test]
    fn lenient_mode_drops_unclosed_group() {
        let (result, out) = run_with(
            &args(Some("Na(Cl")),
            &config(ParseMode::Lenient, 3),
            &standard_table(),
            "",
        );
        assert!(result.is_ok());
        assert_eq!(out, "The molar mass of Na(Cl is 22.990 g/mol\n");
    }

    #[test]
    fn end_of_input_without_formula_is_an_argument_error() {
        let (result, out) = run_with(
            &args(None),
            &config(ParseMode::Strict, 3),
            &standard_table(),
            "",
        );
        assert_eq!(out, PROMPT);
        assert!(matches!(result, Err(CliError::Argument(_))));
    }
}
