use std::collections::BTreeMap;
use std::io::{self, Write};
use std::path::Path;

use atomic_weight::{Compound, ElementTable};

use crate::util::text::truncate;

const INDENT: &str = "      ";

const BOX_INNER_WIDTH: usize = 62;
const SAFE_TABLE_WIDTH: usize = BOX_INNER_WIDTH - INDENT.len();

pub fn print_table_summary(table: &ElementTable, path: Option<&Path>) {
    let stderr = io::stderr();
    let mut out = stderr.lock();

    let source = match path {
        Some(p) => p.display().to_string(),
        None => "bundled periodic table".to_string(),
    };
    let longest = table.symbols().next().map(str::len).unwrap_or(0);

    let rows = vec![
        ("Source", source),
        ("Elements", format!("{}", table.len())),
        ("Longest Symbol", format!("{longest}")),
    ];

    let _ = print_kv_table(&mut out, "Element Table", &rows);
}

/// Per-element count, subtotal and share of the total weight.
pub fn print_breakdown(
    out: &mut impl Write,
    compound: &Compound,
    precision: usize,
) -> io::Result<()> {
    let formula = compound.formula();
    let total_weight = compound.weight();

    let mut rows: BTreeMap<&str, (u64, f64)> = BTreeMap::new();
    for term in formula.terms() {
        let row = rows.entry(term.element().symbol()).or_insert((0, 0.0));
        row.0 += u64::from(term.count());
        row.1 += term.weight();
    }

    let sym_w = 6usize;
    let count_w = 7usize;
    let sub_w = 12usize;
    let sep_overhead = 12;
    let dist_w = SAFE_TABLE_WIDTH.saturating_sub(sym_w + count_w + sub_w + sep_overhead);
    let max_bar_width = dist_w.saturating_sub(8).min(20);

    let rule = |left: &str, mid: &str, right: &str| {
        format!(
            "{INDENT}{left}{}{mid}{}{mid}{}{mid}{}{right}",
            "─".repeat(sym_w + 2),
            "─".repeat(count_w + 2),
            "─".repeat(sub_w + 2),
            "─".repeat(dist_w + 2),
        )
    };

    writeln!(
        out,
        "{INDENT}┌─ {} ─┐",
        truncate(formula.as_str(), SAFE_TABLE_WIDTH - 6)
    )?;
    writeln!(out, "{}", rule("┌", "┬", "┐"))?;
    writeln!(
        out,
        "{INDENT}│ {:<sym_w$} │ {:>count_w$} │ {:>sub_w$} │ {:<dist_w$} │",
        "Elem", "Count", "Weight", "Mass Share"
    )?;
    writeln!(out, "{}", rule("├", "┼", "┤"))?;

    for (symbol, (count, subtotal)) in &rows {
        let pct = subtotal / total_weight * 100.0;
        let dist_cell = format!("{}  {:>5.1}%", make_bar(pct, max_bar_width), pct);

        writeln!(
            out,
            "{INDENT}│ {:<sym_w$} │ {:>count_w$} │ {:>sub_w$.precision$} │ {:<dist_w$} │",
            truncate(symbol, sym_w),
            count,
            subtotal,
            dist_cell
        )?;
    }

    writeln!(out, "{}", rule("├", "┼", "┤"))?;
    writeln!(
        out,
        "{INDENT}│ {:<sym_w$} │ {:>count_w$} │ {:>sub_w$.precision$} │ {:<dist_w$} │",
        "Total",
        formula.atom_count(),
        total_weight,
        ""
    )?;
    writeln!(out, "{}", rule("└", "┴", "┘"))
}

fn print_kv_table(out: &mut impl Write, title: &str, rows: &[(&str, String)]) -> io::Result<()> {
    let key_w = 16usize;
    let sep_overhead = 6;
    let val_w = SAFE_TABLE_WIDTH.saturating_sub(key_w + sep_overhead);

    writeln!(
        out,
        "{}┌─ {} ─┐",
        INDENT,
        truncate(title, SAFE_TABLE_WIDTH - 6)
    )?;
    writeln!(
        out,
        "{}┌{k_line}┬{v_line}┐",
        INDENT,
        k_line = "─".repeat(key_w + 2),
        v_line = "─".repeat(val_w + 2)
    )?;

    for (key, val) in rows {
        writeln!(
            out,
            "{}│ {:<key_w$} │ {:>val_w$} │",
            INDENT,
            truncate(key, key_w),
            truncate(val, val_w),
        )?;
    }

    writeln!(
        out,
        "{}└{k_line}┴{v_line}┘",
        INDENT,
        k_line = "─".repeat(key_w + 2),
        v_line = "─".repeat(val_w + 2)
    )
}

fn make_bar(pct: f64, max_width: usize) -> String {
    let filled = (((pct / 100.0) * max_width as f64).round() as usize).min(max_width);
    let empty = max_width - filled;
    format!("{}{}", "█".repeat(filled), "░".repeat(empty))
}
