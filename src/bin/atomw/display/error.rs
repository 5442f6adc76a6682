use std::io::{self, Write};

use anyhow::Error;
use atomic_weight::{DataLoadError, FormulaFault, InvalidAtomicSymbol, InvalidFormula};

use crate::util::text::wrap;

const REPORT_WIDTH: usize = 62;

pub fn print_error(err: &Error) {
    let mut stderr = io::stderr().lock();
    let _ = write_report(&mut stderr, err);
}

fn write_report(out: &mut impl Write, err: &Error) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", border('╔', '═', '╗'))?;
    writeln!(out, "{}", row(2, "✗ Error"))?;

    for line in wrap(&err.to_string(), REPORT_WIDTH - 3) {
        writeln!(out, "{}", row(2, &line))?;
    }

    let mut source = err.source();
    while let Some(cause) = source {
        writeln!(out, "{}", border('╟', '─', '╢'))?;
        writeln!(out, "{}", row(2, "Caused by:"))?;
        for line in wrap(&cause.to_string(), REPORT_WIDTH - 5) {
            writeln!(out, "{}", row(4, &line))?;
        }
        source = cause.source();
    }

    let hints = HintCollector::collect(err);
    if !hints.is_empty() {
        writeln!(out, "{}", border('╟', '─', '╢'))?;
        writeln!(out, "{}", row(2, "Hints:"))?;
        for hint in hints {
            let wrapped = wrap(&hint, REPORT_WIDTH - 7);
            for (i, line) in wrapped.iter().enumerate() {
                let bullet = if i == 0 { "• " } else { "  " };
                writeln!(out, "{}", row(4, &format!("{bullet}{line}")))?;
            }
        }
    }

    writeln!(out, "{}", border('╚', '═', '╝'))?;
    writeln!(out)
}

fn border(left: char, fill: char, right: char) -> String {
    let line: String = std::iter::repeat_n(fill, REPORT_WIDTH).collect();
    format!("   {left}{line}{right}")
}

fn row(indent: usize, text: &str) -> String {
    let width = REPORT_WIDTH - indent - 1;
    let pad = width.saturating_sub(text.chars().count());
    format!("   ║{:indent$}{text}{:pad$} ║", "", "")
}

#[derive(Default)]
struct HintCollector {
    hints: Vec<String>,
}

impl HintCollector {
    fn collect(err: &Error) -> Vec<String> {
        let mut collector = Self::default();

        if let Some(e) = err.downcast_ref::<InvalidFormula>() {
            collector.formula_hints(e);
        } else if let Some(e) = err.downcast_ref::<InvalidAtomicSymbol>() {
            collector.symbol_hints(e);
        } else if let Some(e) = err.downcast_ref::<DataLoadError>() {
            collector.data_load_hints(e);
        }

        collector.hints
    }

    fn add(&mut self, hint: impl Into<String>) {
        self.hints.push(hint.into());
    }

    fn formula_hints(&mut self, err: &InvalidFormula) {
        match err.fault() {
            FormulaFault::Unmatched => {
                self.add(format!(
                    "'{}' at position {} is not a known element symbol",
                    err.fragment(),
                    err.position()
                ));
                self.add("Symbols are case-sensitive: write 'Co' for cobalt, 'CO' for carbon monoxide");
                self.add("Counts follow the symbol (H2O, not 2HO); groups, charges and hydrates are not supported");
            }
            FormulaFault::ExplicitCountOfOne => {
                self.add(format!("Write '{}' without the count of one", symbol_of(err.fragment())));
            }
            FormulaFault::ZeroCount => {
                self.add("Counts must be at least two; omit the count for a single atom");
            }
            FormulaFault::CountOverflow => {
                self.add(format!("Counts are limited to {}", u32::MAX));
            }
        }
    }

    fn symbol_hints(&mut self, err: &InvalidAtomicSymbol) {
        self.add(format!("'{}' is not in the element table", err.symbol()));
        self.add("Symbols are case-sensitive and start with an uppercase letter");
    }

    fn data_load_hints(&mut self, err: &DataLoadError) {
        match err {
            DataLoadError::Io { source } => match source.kind() {
                io::ErrorKind::NotFound => {
                    self.add("File not found");
                    self.add("Check the --table path spelling and ensure the file exists");
                }
                io::ErrorKind::PermissionDenied => {
                    self.add("Permission denied reading the table file");
                }
                _ => self.add("Check the --table path and file permissions"),
            },
            DataLoadError::Json(_) => {
                self.add("The table must be a JSON object with an 'elements' array");
                self.add("Each record needs a string 'symbol' and a numeric 'atomic_mass'");
            }
            DataLoadError::InvalidRecord { index, .. } => {
                self.add(format!("Fix record #{index} of the 'elements' array"));
            }
            DataLoadError::DuplicateSymbol { symbol, .. } => {
                self.add(format!("Remove the repeated '{symbol}' record"));
            }
        }
    }
}

fn symbol_of(term: &str) -> &str {
    term.trim_end_matches(|c: char| c.is_ascii_digit())
}
