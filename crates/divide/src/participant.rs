use crate::error::{DivideError, Result};
use readtrace_table::{schema, EventTable};
use std::collections::HashMap;

/// Normalize the participant identifier column in place.
///
/// `SubjectId` is stamped once per participant, so it is forward-filled; if
/// `submission_id` is absent it is created as a copy. Returns the
/// `submission_id` column index, or a configuration error when neither
/// identifier exists.
pub fn normalize_participant_column(table: &mut EventTable) -> Result<usize> {
    if let Some(subject_col) = table.column(schema::SUBJECT_ID) {
        let mut carried: Option<String> = None;
        for row in 0..table.len() {
            match table.get(row, subject_col) {
                Some(value) => carried = Some(value.to_string()),
                None => {
                    if let Some(value) = &carried {
                        table.set(row, subject_col, value.clone());
                    }
                }
            }
        }
        if table.column(schema::SUBMISSION_ID).is_none() {
            let submission_col = table.ensure_column(schema::SUBMISSION_ID);
            for row in 0..table.len() {
                let value = table.row(row)[subject_col].clone();
                table.set(row, submission_col, value);
            }
        }
    }

    table
        .column(schema::SUBMISSION_ID)
        .ok_or(DivideError::MissingParticipantColumn)
}

/// Group a repaired table by participant identifier.
///
/// Within-group row order is preserved from the source log (the corrector's
/// traversal order depends on it); groups are returned in sorted identifier
/// order so output is deterministic. Rows with no identifier are skipped.
pub fn split_by_participant(table: &EventTable, id_col: usize) -> Vec<(String, EventTable)> {
    let mut groups: Vec<(String, EventTable)> = Vec::new();
    let mut by_id: HashMap<String, usize> = HashMap::new();

    for row in 0..table.len() {
        let Some(id) = table.get(row, id_col) else {
            log::debug!("Skipping row {row}: no participant identifier");
            continue;
        };
        let slot = *by_id.entry(id.to_string()).or_insert_with(|| {
            groups.push((id.to_string(), EventTable::new(table.headers().to_vec())));
            groups.len() - 1
        });
        groups[slot].1.push_row(table.row(row).to_vec());
    }

    groups.sort_by(|a, b| a.0.cmp(&b.0));
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn table(headers: &[&str], rows: &[&[&str]]) -> EventTable {
        let mut t = EventTable::new(headers.iter().map(|h| h.to_string()).collect());
        for row in rows {
            t.push_row(row.iter().map(|c| c.to_string()).collect());
        }
        t
    }

    #[test]
    fn subject_id_is_filled_and_copied() {
        let mut t = table(
            &["SubjectId", "Index"],
            &[&["alice", "0"], &["", "1"], &["", "2"]],
        );
        let id_col = normalize_participant_column(&mut t).unwrap();
        assert_eq!(t.headers().last().map(String::as_str), Some("submission_id"));
        for row in 0..t.len() {
            assert_eq!(t.get(row, id_col), Some("alice"));
        }
    }

    #[test]
    fn existing_submission_id_is_untouched() {
        let mut t = table(
            &["submission_id", "SubjectId", "Index"],
            &[&["77", "alice", "0"], &["78", "", "1"]],
        );
        let id_col = normalize_participant_column(&mut t).unwrap();
        assert_eq!(t.get(0, id_col), Some("77"));
        assert_eq!(t.get(1, id_col), Some("78"));
        // SubjectId still forward-filled
        assert_eq!(t.get(1, 1), Some("alice"));
    }

    #[test]
    fn missing_both_identifier_columns_is_an_error() {
        let mut t = table(&["Index"], &[&["0"]]);
        let err = normalize_participant_column(&mut t).unwrap_err();
        assert!(matches!(err, DivideError::MissingParticipantColumn));
    }

    #[test]
    fn split_preserves_row_order_and_covers_all_rows() {
        let t = table(
            &["submission_id", "Index"],
            &[
                &["b", "0"],
                &["a", "0"],
                &["b", "1"],
                &["a", "1"],
                &["b", "2"],
            ],
        );
        let groups = split_by_participant(&t, 0);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, "a");
        assert_eq!(groups[1].0, "b");

        let a = &groups[0].1;
        assert_eq!((a.get(0, 1), a.get(1, 1)), (Some("0"), Some("1")));
        let b = &groups[1].1;
        assert_eq!(
            (b.get(0, 1), b.get(1, 1), b.get(2, 1)),
            (Some("0"), Some("1"), Some("2"))
        );

        let total: usize = groups.iter().map(|(_, g)| g.len()).sum();
        assert_eq!(total, t.len());
    }

    #[test]
    fn rows_without_identifier_are_skipped() {
        let t = table(
            &["submission_id", "Index"],
            &[&["a", "0"], &["", "1"], &["a", "2"]],
        );
        let groups = split_by_participant(&t, 0);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].1.len(), 2);
    }
}
