use crate::models::plate_signature::PlateSignature;

/// A folder that was left out of the results, with the warning that was logged for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFolder {
    pub folder: String,
    pub reason: String,
}

/// Outcome of scanning one input root
#[derive(Debug, Default)]
pub struct ScanReport {
    pub results: Vec<PlateSignature>,
    pub skipped: Vec<SkippedFolder>,
}

impl ScanReport {
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn skip(&mut self, folder: &str, reason: impl Into<String>) {
        self.skipped.push(SkippedFolder {
            folder: folder.to_string(),
            reason: reason.into(),
        });
    }
}
