use crate::error::Result;
use crate::table::EventTable;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";

/// Read a comma-separated log file into an [`EventTable`].
///
/// Every cell is read as text; short rows are padded to the header width.
pub fn read_csv(path: impl AsRef<Path>) -> Result<EventTable> {
    let path = path.as_ref();
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)?;

    let mut headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.to_string())
        .collect();
    // Some exports prepend a UTF-8 BOM that survives into the first header.
    if let Some(first) = headers.first_mut() {
        if let Some(stripped) = first.strip_prefix('\u{feff}') {
            *first = stripped.to_string();
        }
    }

    let mut table = EventTable::new(headers);
    for record in reader.records() {
        let record = record?;
        table.push_row(record.iter().map(|c| c.to_string()).collect());
    }

    log::debug!("Read {} rows from {}", table.len(), path.display());
    Ok(table)
}

/// Write a table as plain UTF-8 CSV
pub fn write_csv(table: &EventTable, path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(path.as_ref())?;
    write_records(table, BufWriter::new(file))
}

/// Write a table as UTF-8 CSV with a byte-order mark.
///
/// The BOM keeps non-ASCII answer text intact when participants' files are
/// opened in spreadsheet tools.
pub fn write_csv_bom(table: &EventTable, path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(path.as_ref())?;
    let mut out = BufWriter::new(file);
    out.write_all(UTF8_BOM)?;
    write_records(table, out)
}

fn write_records(table: &EventTable, out: impl Write) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(table.headers())?;
    for row in 0..table.len() {
        writer.write_record(table.row(row))?;
    }
    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn round_trips_cells_and_missing_values() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("log.csv");
        fs::write(&path, "ItemId,Word\n1,casă\n,mère\n").unwrap();

        let table = read_csv(&path).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get(0, 1), Some("casă"));
        assert_eq!(table.get(1, 0), None);

        let out = temp.path().join("out.csv");
        write_csv(&table, &out).unwrap();
        let reread = read_csv(&out).unwrap();
        assert_eq!(reread, table);
    }

    #[test]
    fn bom_output_starts_with_marker_and_reads_back() {
        let temp = tempdir().unwrap();
        let mut table = EventTable::new(vec!["ItemId".into(), "Word".into()]);
        table.push_row(vec!["1".into(), "über".into()]);

        let path = temp.path().join("reader_1.csv");
        write_csv_bom(&table, &path).unwrap();

        let bytes = fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"\xef\xbb\xbf"));

        let reread = read_csv(&path).unwrap();
        assert_eq!(reread.headers(), &["ItemId".to_string(), "Word".to_string()]);
        assert_eq!(reread.get(0, 1), Some("über"));
    }

    #[test]
    fn pads_ragged_rows_to_header_width() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("ragged.csv");
        fs::write(&path, "a,b,c\n1,2\n").unwrap();

        let table = read_csv(&path).unwrap();
        assert_eq!(table.row(0).len(), 3);
        assert_eq!(table.get(0, 2), None);
    }
}
