use crate::error::Result;
use readtrace_table::{read_csv, schema, write_csv, EventTable};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Split a corrected table into one file per (ItemId, PageNumber) group.
///
/// Rows missing any of `ItemId`, `PageNumber`, `Index`, or `Word` carry no
/// word-level measure and are dropped before grouping. Within-group row order
/// is preserved; files are named `item_{item}_page_{page}.csv`. Returns the
/// number of files written.
pub fn split_by_item_and_page(input: impl AsRef<Path>, out_dir: impl AsRef<Path>) -> Result<usize> {
    let input = input.as_ref();
    let out_dir = out_dir.as_ref();

    let table = read_csv(input)?;
    log::info!("Splitting {} ({} rows) by item and page", input.display(), table.len());

    let item_col = table.require_column(schema::ITEM_ID)?;
    let page_col = table.require_column(schema::PAGE_NUMBER)?;
    let index_col = table.require_column(schema::INDEX)?;
    let word_col = table.require_column(schema::WORD)?;

    let mut groups: Vec<((i64, i64), EventTable)> = Vec::new();
    let mut by_key: HashMap<(i64, i64), usize> = HashMap::new();
    let mut dropped = 0usize;

    for row in 0..table.len() {
        let keep = table.get_i64(row, item_col).is_some()
            && table.get_i64(row, page_col).is_some()
            && table.get(row, index_col).is_some()
            && table.get(row, word_col).is_some();
        if !keep {
            dropped += 1;
            continue;
        }
        let key = (
            table.get_i64(row, item_col).unwrap(),
            table.get_i64(row, page_col).unwrap(),
        );
        let slot = *by_key.entry(key).or_insert_with(|| {
            groups.push((key, EventTable::new(table.headers().to_vec())));
            groups.len() - 1
        });
        let mut cells = table.row(row).to_vec();
        // Normalize the grouping keys to integer text in the output.
        cells[item_col] = key.0.to_string();
        cells[page_col] = key.1.to_string();
        groups[slot].1.push_row(cells);
    }
    if dropped > 0 {
        log::debug!("Dropped {dropped} rows missing item/page/index/word");
    }

    groups.sort_by_key(|(key, _)| *key);

    fs::create_dir_all(out_dir)?;
    for ((item, page), group) in &groups {
        let path = out_dir.join(format!("item_{item}_page_{page}.csv"));
        write_csv(group, path)?;
    }

    log::info!("Wrote {} item/page files to {}", groups.len(), out_dir.display());
    Ok(groups.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::tempdir;

    const INPUT: &str = "\
ItemId,PageNumber,Index,Word,mousePositionX
1,0,0,The,100
1,0,1,cat,120
1,1,0,sat,140
2.0,0,0,Dogs,160
1,0,,keypress,180
,0,5,orphan,200
";

    #[test]
    fn groups_by_item_and_page_dropping_incomplete_rows() {
        let temp = tempdir().unwrap();
        let input = temp.path().join("reader_alice.csv");
        fs::write(&input, INPUT).unwrap();
        let out = temp.path().join("by_page");

        let files = split_by_item_and_page(&input, &out).unwrap();
        assert_eq!(files, 3);

        let page = read_csv(out.join("item_1_page_0.csv")).unwrap();
        assert_eq!(page.len(), 2);
        assert_eq!(page.get(0, 3), Some("The"));
        assert_eq!(page.get(1, 3), Some("cat"));

        // Float-texted ItemId normalizes into the file name and cells.
        let dogs = read_csv(out.join("item_2_page_0.csv")).unwrap();
        assert_eq!(dogs.len(), 1);
        assert_eq!(dogs.get(0, 0), Some("2"));

        assert!(out.join("item_1_page_1.csv").exists());
    }

    #[test]
    fn missing_mandatory_column_is_fatal() {
        let temp = tempdir().unwrap();
        let input = temp.path().join("reader.csv");
        fs::write(&input, "ItemId,Index\n1,0\n").unwrap();

        let err = split_by_item_and_page(&input, temp.path().join("out")).unwrap_err();
        assert!(matches!(err, crate::TrialsError::Table(_)));
    }
}
