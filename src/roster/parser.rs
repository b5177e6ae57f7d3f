use std::io::Read;

use crate::cohort::RawApplicantRow;

/// Parse an admission roster export. Cell whitespace is trimmed during
/// parsing; headers must match the export's column names, extra columns are
/// ignored, and a missing required column fails the whole import.
pub(crate) fn parse_rows<R: Read>(reader: R) -> Result<Vec<RawApplicantRow>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut rows = Vec::new();

    for row in csv_reader.deserialize::<RawApplicantRow>() {
        rows.push(row?);
    }

    Ok(rows)
}
