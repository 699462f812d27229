use crate::models::error::{Result, ScanError};
use crate::models::plate_signature::PlateSignature;
use log::info;
use std::cmp::Ordering;
use std::path::Path;

const CSV_HEADER: [&str; 2] = ["Plate_Barcode", "Measurement_Signature"];

/// Integer value of a barcode, compared without any width limit.
/// Leading zeros are ignored, so `007` and `7` compare equal.
#[derive(Debug, PartialEq, Eq)]
struct BarcodeKey<'a> {
    negative: bool,
    digits: &'a str,
}

impl<'a> BarcodeKey<'a> {
    /// An optional `+` or `-` followed by one or more ASCII digits
    fn parse(barcode: &'a str) -> Option<Self> {
        let (negative, unsigned) = match barcode.as_bytes().first() {
            Some(b'-') => (true, &barcode[1..]),
            Some(b'+') => (false, &barcode[1..]),
            _ => (false, barcode),
        };
        if unsigned.is_empty() || !unsigned.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let digits = unsigned.trim_start_matches('0');
        Some(Self {
            // -0 is zero
            negative: negative && !digits.is_empty(),
            digits,
        })
    }

    fn cmp_magnitude(&self, other: &Self) -> Ordering {
        self.digits
            .len()
            .cmp(&other.digits.len())
            .then_with(|| self.digits.cmp(other.digits))
    }
}

impl Ord for BarcodeKey<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (false, false) => self.cmp_magnitude(other),
            (true, true) => other.cmp_magnitude(self),
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
        }
    }
}

impl PartialOrd for BarcodeKey<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Sorts results by barcode as an integer of any length. Ties keep their scan order.
/// Fails on the first barcode that is not an integer.
pub fn sort_by_barcode(results: &[PlateSignature]) -> Result<Vec<&PlateSignature>> {
    let mut keyed = Vec::with_capacity(results.len());
    for record in results {
        let key = BarcodeKey::parse(&record.barcode).ok_or_else(|| {
            ScanError::NonNumericBarcode {
                barcode: record.barcode.clone(),
            }
        })?;
        keyed.push((key, record));
    }
    keyed.sort_by(|(a, _), (b, _)| a.cmp(b));
    Ok(keyed.into_iter().map(|(_, record)| record).collect())
}

/// Writes the sorted results to `output_path`, replacing any existing file.
/// Nothing is written if a barcode is not numeric.
pub fn save_results_to_csv(results: &[PlateSignature], output_path: &Path) -> Result<()> {
    let sorted = sort_by_barcode(results)?;

    let csv_error = |cause: csv::Error| ScanError::CsvWrite {
        path: output_path.to_path_buf(),
        cause,
    };

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(output_path)
        .map_err(csv_error)?;
    writer.write_record(CSV_HEADER).map_err(csv_error)?;
    for record in sorted {
        writer.serialize(record).map_err(csv_error)?;
    }
    writer.flush().map_err(|cause| csv_error(cause.into()))?;

    info!("Results saved to: {}", output_path.display());
    Ok(())
}
