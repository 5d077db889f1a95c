use crate::ExtractionError;
use csv::ReaderBuilder;

/// Flatten a CSV file row-wise.
///
/// The first row is treated as a header and skipped. Each data row becomes
/// one line with its cells joined by single spaces, so the chunker sees one
/// paragraph per row.
pub fn extract_csv(bytes: &[u8]) -> Result<String, ExtractionError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(bytes);

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| ExtractionError::Csv(e.to_string()))?;
        rows.push(record.iter().collect::<Vec<_>>().join(" "));
    }

    Ok(rows.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flattens_rows_and_skips_header() {
        let csv = b"topic,fact\nphysics,F = ma\nchemistry,pH measures acidity\n";
        let text = extract_csv(csv).unwrap();
        assert_eq!(text, "physics F = ma\nchemistry pH measures acidity");
    }

    #[test]
    fn quoted_cells_keep_commas() {
        let csv = b"name,notes\n\"Newton, Isaac\",\"laws of motion, gravity\"\n";
        let text = extract_csv(csv).unwrap();
        assert_eq!(text, "Newton, Isaac laws of motion, gravity");
    }

    #[test]
    fn ragged_rows_are_accepted() {
        let csv = b"a,b,c\n1,2\n3,4,5,6\n";
        let text = extract_csv(csv).unwrap();
        assert_eq!(text, "1 2\n3 4 5 6");
    }

    #[test]
    fn header_only_is_empty() {
        assert_eq!(extract_csv(b"a,b\n").unwrap(), "");
    }
}
