use crate::classify::{classify, RowClass, WordBox};
use crate::config::PageGeometry;
use crate::error::{RepairError, Result};
use readtrace_table::{schema, EventTable};

/// Whether a participant table needs the spatial correction pass.
///
/// The recording defect always leaves at least one strongly negative x, so a
/// table with none is either clean or already corrected.
pub fn needs_correction(table: &EventTable) -> bool {
    let Some(x_col) = table.column(schema::MOUSE_X) else {
        return false;
    };
    (0..table.len()).any(|row| matches!(table.get_f64(row, x_col), Some(x) if x < -1.0))
}

struct SpatialColumns {
    mouse_x: usize,
    mouse_y: usize,
    word_left: usize,
    word_top: usize,
    word_right: usize,
    word_bottom: usize,
}

impl SpatialColumns {
    fn resolve(table: &EventTable) -> Result<Self> {
        let col = |name: &str| {
            table
                .column(name)
                .ok_or_else(|| RepairError::missing_column(name))
        };
        Ok(Self {
            mouse_x: col(schema::MOUSE_X)?,
            mouse_y: col(schema::MOUSE_Y)?,
            word_left: col(schema::WORD_LEFT)?,
            word_top: col(schema::WORD_TOP)?,
            word_right: col(schema::WORD_RIGHT)?,
            word_bottom: col(schema::WORD_BOTTOM)?,
        })
    }

    fn word_box(&self, table: &EventTable, row: usize) -> WordBox {
        WordBox {
            left: table.get_f64(row, self.word_left),
            top: table.get_f64(row, self.word_top),
            right: table.get_f64(row, self.word_right),
            bottom: table.get_f64(row, self.word_bottom),
        }
    }
}

/// Correct the spatial click coordinates of one participant table.
///
/// Returns a new table; the input is untouched. Tables that do not meet the
/// [`needs_correction`] precondition pass through unchanged, which also makes
/// the pass idempotent. Rows are classified once against the incoming values;
/// the transforms then run in a fixed order:
///
/// 1. normal rows: box-relative click becomes page-absolute,
/// 2. combined rows: the word box drops a line and re-anchors to the left
///    margin,
/// 3. reverse traversal: blank rows with no box borrow the nearest later
///    row's box,
/// 4. rows whose x is still negative receive the off-page anchor offsets.
pub fn correct(table: &EventTable, geometry: &PageGeometry) -> Result<EventTable> {
    if !needs_correction(table) {
        return Ok(table.clone());
    }

    let mut out = table.clone();
    let cols = SpatialColumns::resolve(&out)?;

    let classes: Vec<RowClass> = (0..out.len())
        .map(|row| {
            let x = out.get_f64(row, cols.mouse_x).unwrap_or_default();
            let y = out.get_f64(row, cols.mouse_y).unwrap_or_default();
            classify(x, y, &cols.word_box(&out, row), geometry)
        })
        .collect();

    translate_normal_rows(&mut out, &cols, &classes);
    reanchor_combined_rows(&mut out, &cols, &classes, geometry);
    borrow_backward(&mut out, &cols, &classes);
    apply_offpage_anchor(&mut out, &cols, geometry);

    Ok(out)
}

/// Box-relative click positions become page-absolute
fn translate_normal_rows(table: &mut EventTable, cols: &SpatialColumns, classes: &[RowClass]) {
    for row in 0..table.len() {
        if !classes[row].normal {
            continue;
        }
        if let (Some(x), Some(left)) = (
            table.get_f64(row, cols.mouse_x),
            table.get_f64(row, cols.word_left),
        ) {
            table.set_f64(row, cols.mouse_x, x + left);
        }
        if let (Some(y), Some(top)) = (
            table.get_f64(row, cols.mouse_y),
            table.get_f64(row, cols.word_top),
        ) {
            table.set_f64(row, cols.mouse_y, y + top);
        }
    }
}

/// Word boxes of combined rows drop one line and re-anchor to the left margin
fn reanchor_combined_rows(
    table: &mut EventTable,
    cols: &SpatialColumns,
    classes: &[RowClass],
    geometry: &PageGeometry,
) {
    for row in 0..table.len() {
        if !classes[row].combined {
            continue;
        }
        if let Some(bottom) = table.get_f64(row, cols.word_bottom) {
            table.set_f64(row, cols.word_bottom, bottom + geometry.line_offset);
        }
        if let Some(top) = table.get_f64(row, cols.word_top) {
            table.set_f64(row, cols.word_top, top + geometry.line_offset);
        }
        if let Some(left) = table.get_f64(row, cols.word_left) {
            let offset = left - geometry.left_margin;
            table.set_f64(row, cols.word_left, left - offset);
            if let Some(right) = table.get_f64(row, cols.word_right) {
                table.set_f64(row, cols.word_right, right - offset);
            }
        }
    }
}

/// Reverse traversal: blank rows with no local box borrow the nearest later
/// row's (already re-anchored) box.
///
/// Order dependence is the point: each row's correction may depend on a row
/// below it, so this loop must stay sequential and must run after the
/// combined-row fix.
fn borrow_backward(table: &mut EventTable, cols: &SpatialColumns, classes: &[RowClass]) {
    let mut last_valid: Option<usize> = None;
    for row in (0..table.len()).rev() {
        if table.get_f64(row, cols.word_left).is_some() {
            last_valid = Some(row);
        } else if let Some(valid) = last_valid {
            if classes[row].blank {
                if let (Some(x), Some(left)) = (
                    table.get_f64(row, cols.mouse_x),
                    table.get_f64(valid, cols.word_left),
                ) {
                    table.set_f64(row, cols.mouse_x, x + left);
                }
                if let (Some(y), Some(top)) = (
                    table.get_f64(row, cols.mouse_y),
                    table.get_f64(valid, cols.word_top),
                ) {
                    table.set_f64(row, cols.mouse_y, y + top);
                }
            }
        }
    }
}

/// Clicks whose x is still negative land on the off-page anchor
fn apply_offpage_anchor(table: &mut EventTable, cols: &SpatialColumns, geometry: &PageGeometry) {
    for row in 0..table.len() {
        let Some(x) = table.get_f64(row, cols.mouse_x) else {
            continue;
        };
        if x < 0.0 {
            table.set_f64(row, cols.mouse_x, x + geometry.offpage_anchor_x);
            if let Some(y) = table.get_f64(row, cols.mouse_y) {
                table.set_f64(row, cols.mouse_y, y + geometry.offpage_anchor_y);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const HEADERS: [&str; 6] = [
        "mousePositionX",
        "mousePositionY",
        "wordPositionLeft",
        "wordPositionTop",
        "wordPositionRight",
        "wordPositionBottom",
    ];

    fn spatial_table(rows: &[[&str; 6]]) -> EventTable {
        let mut table = EventTable::new(HEADERS.iter().map(|h| h.to_string()).collect());
        for row in rows {
            table.push_row(row.iter().map(|c| c.to_string()).collect());
        }
        table
    }

    fn geometry() -> PageGeometry {
        PageGeometry::default()
    }

    fn cell<'a>(table: &'a EventTable, row: usize, name: &str) -> Option<&'a str> {
        table.get(row, table.column(name).unwrap())
    }

    #[test]
    fn clean_table_passes_through_unchanged() {
        let table = spatial_table(&[["10", "5", "100", "50", "160", "70"]]);
        let out = correct(&table, &geometry()).unwrap();
        assert_eq!(out, table);
    }

    #[test]
    fn correction_is_idempotent() {
        let table = spatial_table(&[
            ["-12", "5", "", "", "", ""],
            ["10", "5", "100", "50", "160", "70"],
        ]);
        let once = correct(&table, &geometry()).unwrap();
        let twice = correct(&once, &geometry()).unwrap();
        assert_eq!(twice, once);
    }

    #[test]
    fn normal_row_translates_to_page_coordinates() {
        let table = spatial_table(&[
            ["-12", "5", "", "", "", ""],
            ["10", "5", "100", "50", "160", "70"],
        ]);
        let out = correct(&table, &geometry()).unwrap();
        assert_eq!(cell(&out, 1, "mousePositionX"), Some("110"));
        assert_eq!(cell(&out, 1, "mousePositionY"), Some("55"));
    }

    #[test]
    fn combined_row_reanchors_box_to_left_margin() {
        let table = spatial_table(&[
            // negative → combined; box shifts down one line, left snaps to 94
            ["-12", "300", "104", "140", "180", "160"],
        ]);
        let out = correct(&table, &geometry()).unwrap();
        assert_eq!(cell(&out, 0, "wordPositionLeft"), Some("94"));
        assert_eq!(cell(&out, 0, "wordPositionRight"), Some("170"));
        assert_eq!(cell(&out, 0, "wordPositionTop"), Some("180"));
        assert_eq!(cell(&out, 0, "wordPositionBottom"), Some("200"));
    }

    #[test]
    fn blank_rows_borrow_the_nearest_later_box() {
        let table = spatial_table(&[
            ["-12", "5", "", "", "", ""],
            ["10", "5", "", "", "", ""],
            ["11", "6", "", "", "", ""],
            ["5", "300", "200", "30", "260", "50"],
        ]);
        let out = correct(&table, &geometry()).unwrap();
        // Rows 1 and 2 are blank with no box: both borrow row 3's box.
        assert_eq!(cell(&out, 1, "mousePositionX"), Some("210"));
        assert_eq!(cell(&out, 1, "mousePositionY"), Some("35"));
        assert_eq!(cell(&out, 2, "mousePositionX"), Some("211"));
        assert_eq!(cell(&out, 2, "mousePositionY"), Some("36"));
    }

    #[test]
    fn borrowed_box_is_the_reanchored_one() {
        let table = spatial_table(&[
            ["10", "5", "", "", "", ""],
            // negative row with a box: combined fix runs before borrowing
            ["-12", "300", "104", "140", "180", "160"],
        ]);
        let out = correct(&table, &geometry()).unwrap();
        // Row 0 borrows row 1's box after the fix: left 94, top 180.
        assert_eq!(cell(&out, 0, "mousePositionX"), Some("104"));
        assert_eq!(cell(&out, 0, "mousePositionY"), Some("185"));
    }

    #[test]
    fn rows_with_their_own_box_are_never_borrowed_into() {
        let table = spatial_table(&[
            ["-12", "5", "", "", "", ""],
            // blank-region coordinates but the row carries its own box and
            // fails the size checks, so the traversal only notes its index
            ["80", "15", "300", "400", "310", "405"],
            ["500", "300", "200", "30", "260", "50"],
        ]);
        let out = correct(&table, &geometry()).unwrap();
        assert_eq!(cell(&out, 1, "mousePositionX"), Some("80"));
        assert_eq!(cell(&out, 1, "mousePositionY"), Some("15"));
    }

    #[test]
    fn unresolved_negative_rows_land_on_offpage_anchor() {
        let table = spatial_table(&[["-5", "10", "", "", "", ""]]);
        let out = correct(&table, &geometry()).unwrap();
        assert_eq!(cell(&out, 0, "mousePositionX"), Some("734"));
        assert_eq!(cell(&out, 0, "mousePositionY"), Some("77"));
    }

    #[test]
    fn precondition_ignores_minus_one() {
        let table = spatial_table(&[["-1", "5", "", "", "", ""]]);
        assert!(!needs_correction(&table));
        let out = correct(&table, &geometry()).unwrap();
        assert_eq!(out, table);
    }

    #[test]
    fn missing_box_columns_error_only_when_correction_runs() {
        let mut table = EventTable::new(vec![
            "mousePositionX".to_string(),
            "mousePositionY".to_string(),
        ]);
        table.push_row(vec!["-12".to_string(), "5".to_string()]);
        assert!(correct(&table, &geometry()).is_err());

        let mut clean = EventTable::new(vec![
            "mousePositionX".to_string(),
            "mousePositionY".to_string(),
        ]);
        clean.push_row(vec!["10".to_string(), "5".to_string()]);
        assert!(correct(&clean, &geometry()).is_ok());
    }
}
