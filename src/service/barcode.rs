const BARCODE_DELIMITER: &str = "__";

/// Plate barcode is everything before the first `__` in the folder name
pub fn extract_plate_barcode(folder_name: &str) -> &str {
    match folder_name.split_once(BARCODE_DELIMITER) {
        Some((barcode, _)) => barcode,
        None => folder_name,
    }
}
