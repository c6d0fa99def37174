use crate::config::PageGeometry;
use crate::error::{RepairError, Result};
use readtrace_table::{schema, EventTable};

/// Sentinel stored in `Index` for events not associated with a word
pub const MISSING_INDEX: i64 = -100;

/// Repair the sparse metadata of a raw log table.
///
/// Returns a new table; the input is untouched. In order: quiz rows are
/// scored into a `response` column, `ItemId` is forward-filled, `response`
/// is backward-filled (quiz rows close a trial, so its flags propagate up
/// onto the trial's event rows), rows preceding the first stamped `ItemId`
/// are dropped, identifiers are coerced to integers, and missing ordinals
/// and mouse positions receive their sentinels.
pub fn impute(table: &EventTable, geometry: &PageGeometry) -> Result<EventTable> {
    let mut out = table.clone();

    // Fail fast on a log that is missing mandatory columns.
    for name in [
        schema::ITEM_ID,
        schema::EXPERIMENT,
        schema::CONDITION,
        schema::INDEX,
        schema::MOUSE_X,
        schema::MOUSE_Y,
    ] {
        if out.column(name).is_none() {
            return Err(RepairError::missing_column(name));
        }
    }

    let scored = score_quiz_rows(&mut out);

    forward_fill(&mut out, schema::ITEM_ID);
    if out.column(schema::RESPONSE).is_some() {
        backward_fill_response(&mut out, &scored);
    }

    drop_rows_missing(&mut out, schema::ITEM_ID);

    coerce_integer(&mut out, schema::ITEM_ID)?;
    forward_fill(&mut out, schema::EXPERIMENT);
    coerce_integer(&mut out, schema::EXPERIMENT)?;
    forward_fill(&mut out, schema::CONDITION);
    coerce_integer(&mut out, schema::CONDITION)?;

    fill_missing(&mut out, schema::INDEX, MISSING_INDEX);
    coerce_integer(&mut out, schema::INDEX)?;
    fill_missing(&mut out, schema::MOUSE_X, geometry.default_click_x);
    coerce_integer(&mut out, schema::MOUSE_X)?;
    fill_missing(&mut out, schema::MOUSE_Y, geometry.default_click_y);
    coerce_integer(&mut out, schema::MOUSE_Y)?;

    log::debug!("Imputed table: {} rows retained", out.len());
    Ok(out)
}

/// Score the quiz rows of a log into a `response` column.
///
/// A quiz row has no `Experiment` stamp but a populated first question
/// column. Each answered question contributes a `'1'`/`'0'` flag (exact
/// string match after trimming, case-sensitive); flags join with commas. A
/// quiz row with nothing comparable scores an empty string. That is still a
/// scored value, and the returned mask records it: backward fill must treat
/// it as present rather than pulling the next trial's flags upward.
fn score_quiz_rows(table: &mut EventTable) -> Vec<bool> {
    let mut scored = vec![false; table.len()];

    if table.column(&schema::answer(1)).is_none() {
        return scored;
    }
    let Some(question_col) = table.column(&schema::question(1)) else {
        return scored;
    };
    // Presence checked by the caller.
    let experiment_col = table.column(schema::EXPERIMENT).unwrap();

    let pairs: Vec<(usize, usize)> = (1..=schema::QUIZ_SLOTS)
        .filter_map(|i| {
            table
                .column(&schema::answer(i))
                .zip(table.column(&schema::correct_answer(i)))
        })
        .collect();

    let response_col = table.ensure_column(schema::RESPONSE);
    for row in 0..table.len() {
        if table.get(row, experiment_col).is_some() || table.get(row, question_col).is_none() {
            continue;
        }
        let mut flags: Vec<&str> = Vec::new();
        for &(answer_col, correct_col) in &pairs {
            if let (Some(answer), Some(correct)) =
                (table.get(row, answer_col), table.get(row, correct_col))
            {
                flags.push(if answer.trim() == correct.trim() { "1" } else { "0" });
            }
        }
        let response = flags.join(",");
        table.set(row, response_col, response);
        scored[row] = true;
    }
    scored
}

/// Propagate the nearest following non-missing value upward
fn backward_fill_response(table: &mut EventTable, scored: &[bool]) {
    let col = match table.column(schema::RESPONSE) {
        Some(col) => col,
        None => return,
    };
    let mut carried: Option<String> = None;
    for row in (0..table.len()).rev() {
        // A scored-but-empty response is a real value, not a gap.
        if scored[row] || table.get(row, col).is_some() {
            carried = Some(table.row(row)[col].clone());
        } else if let Some(value) = &carried {
            table.set(row, col, value.clone());
        }
    }
}

/// Propagate the nearest preceding non-missing value downward
fn forward_fill(table: &mut EventTable, name: &str) {
    let col = match table.column(name) {
        Some(col) => col,
        None => return,
    };
    let mut carried: Option<String> = None;
    for row in 0..table.len() {
        match table.get(row, col) {
            Some(value) => carried = Some(value.to_string()),
            None => {
                if let Some(value) = &carried {
                    table.set(row, col, value.clone());
                }
            }
        }
    }
}

fn drop_rows_missing(table: &mut EventTable, name: &str) {
    let col = match table.column(name) {
        Some(col) => col,
        None => return,
    };
    let missing: Vec<bool> = (0..table.len())
        .map(|row| table.get(row, col).is_none())
        .collect();
    let dropped = missing.iter().filter(|m| **m).count();
    if dropped > 0 {
        log::debug!("Dropping {dropped} rows with no {name}");
    }
    table.retain_rows(|row| !missing[row]);
}

fn fill_missing(table: &mut EventTable, name: &str, value: i64) {
    let col = match table.column(name) {
        Some(col) => col,
        None => return,
    };
    for row in 0..table.len() {
        if table.get(row, col).is_none() {
            table.set_i64(row, col, value);
        }
    }
}

/// Normalize a column to integer text; numeric text with a fractional part
/// truncates toward zero
fn coerce_integer(table: &mut EventTable, name: &str) -> Result<()> {
    let col = match table.column(name) {
        Some(col) => col,
        None => return Ok(()),
    };
    for row in 0..table.len() {
        match table.get(row, col) {
            Some(raw) => match table.get_i64(row, col) {
                Some(value) => table.set_i64(row, col, value),
                None => {
                    return Err(RepairError::InvalidNumber {
                        column: name.to_string(),
                        row,
                        value: raw.to_string(),
                    })
                }
            },
            None => {
                return Err(RepairError::MissingValue {
                    column: name.to_string(),
                    row,
                })
            }
        }
    }
    Ok(())
}
