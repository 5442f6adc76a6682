use super::error::{FormulaFault, InvalidFormula};
use super::{Formula, Term};
use crate::model::table::ElementTable;

pub(super) fn scan(text: &str, table: &ElementTable) -> Result<Formula, InvalidFormula> {
    let mut terms = Vec::new();
    let mut pos = 0;

    while pos < text.len() {
        let Some(element) = table.match_prefix(&text[pos..]) else {
            let end = gap_end(text, pos, table);
            return Err(InvalidFormula::new(
                text,
                FormulaFault::Unmatched,
                pos,
                &text[pos..end],
            ));
        };

        let digits_start = pos + element.symbol().len();
        let digits_len = text[digits_start..]
            .bytes()
            .take_while(u8::is_ascii_digit)
            .count();
        let end = digits_start + digits_len;

        let count = if digits_len == 0 {
            1
        } else {
            parse_count(text, pos, digits_start, end)?
        };

        log::trace!("matched term '{}' x{} at {}..{}", element.symbol(), count, pos, end);

        terms.push(Term {
            element: element.clone(),
            count,
            span: pos..end,
        });
        pos = end;
    }

    Ok(Formula {
        source: text.to_string(),
        terms,
    })
}

fn parse_count(
    text: &str,
    term_start: usize,
    digits_start: usize,
    end: usize,
) -> Result<u32, InvalidFormula> {
    let fault = match text[digits_start..end].parse::<u32>() {
        Ok(0) => FormulaFault::ZeroCount,
        Ok(1) => FormulaFault::ExplicitCountOfOne,
        Ok(n) => return Ok(n),
        Err(_) => FormulaFault::CountOverflow,
    };
    Err(InvalidFormula::new(
        text,
        fault,
        term_start,
        &text[term_start..end],
    ))
}

/// End of the unmatched run starting at `start`: the next character boundary
/// where some symbol matches, or the end of the text.
fn gap_end(text: &str, start: usize, table: &ElementTable) -> usize {
    text[start..]
        .char_indices()
        .skip(1)
        .map(|(offset, _)| start + offset)
        .find(|&i| table.match_prefix(&text[i..]).is_some())
        .unwrap_or(text.len())
}
