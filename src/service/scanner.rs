use crate::models::error::Result;
use crate::models::plate_signature::PlateSignature;
use crate::models::scan_report::ScanReport;
use crate::service::barcode::extract_plate_barcode;
use crate::service::index_file::read_measurement_signature;
use crate::utils::directory::get_subdirectories;
use indicatif::ProgressBar;
use log::{info, warn};
use std::path::Path;

/// Scans every immediate subfolder of `root` for an index file and collects
/// one barcode/signature pair per folder. Folders that cannot be processed
/// are logged and recorded in the report's skip list.
pub fn scan_directory(
    root: &Path,
    index_file_name: &str,
    progress: Option<&ProgressBar>,
) -> Result<ScanReport> {
    info!("Processing indexfiles directory: {}", root.display());

    let mut report = ScanReport::default();

    for folder_path in get_subdirectories(root)? {
        let folder_name = folder_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        if let Some(pb) = progress {
            pb.set_message(format!("Scanning: {}", folder_name));
            pb.inc(1);
        }

        let barcode = extract_plate_barcode(&folder_name);
        let index_file = folder_path.join(index_file_name);

        if !index_file.is_file() {
            warn!("{} not found in {}", index_file_name, folder_path.display());
            report.skip(&folder_name, format!("{} not found", index_file_name));
            continue;
        }

        match read_measurement_signature(&index_file) {
            Ok(Some(signature)) => {
                info!("Processed: {} -> {}", barcode, signature);
                report.results.push(PlateSignature::new(barcode, signature));
            }
            Ok(None) => {
                warn!(
                    "No measurement signature found for {} ({})",
                    barcode, folder_name
                );
                report.skip(&folder_name, "no measurement signature in URL");
            }
            Err(e) => {
                warn!("Skipping {}: {}", folder_name, e);
                report.skip(&folder_name, e.to_string());
            }
        }
    }

    info!(
        "Scan finished: {} processed, {} skipped",
        report.results.len(),
        report.skipped.len()
    );
    Ok(report)
}
