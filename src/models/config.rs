use crate::models::error::{Result, ScanError};
use log::info;
use std::path::PathBuf;

pub const DEFAULT_INDEX_FILE_NAME: &str = "indexfile.txt";
pub const DEFAULT_OUTPUT_FILE_NAME: &str = "plates_measurement_signatures.csv";

#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub input_dir: PathBuf,
    pub index_file_name: String,
    pub output_path: PathBuf,
    pub dry_run: bool,
}

impl ScanConfig {
    /// Builds a config whose output file lives inside the input directory
    pub fn from_cli_parts(
        input_dir: &str,
        index_file_name: &str,
        output_name: &str,
        dry_run: bool,
    ) -> Self {
        // Strip any surrounding quotes left over from shell copy-paste
        let input_dir = PathBuf::from(input_dir.trim_matches(|c| c == '"' || c == '\''));
        let output_path = input_dir.join(output_name);
        Self {
            input_dir,
            index_file_name: index_file_name.to_string(),
            output_path,
            dry_run,
        }
    }

    pub fn validate(&self) -> Result<()> {
        info!("Validating input directory: {}", self.input_dir.display());

        if !self.input_dir.exists() {
            return Err(ScanError::InputNotFound {
                path: self.input_dir.clone(),
            });
        }

        if !self.input_dir.is_dir() {
            return Err(ScanError::NotADirectory {
                path: self.input_dir.clone(),
            });
        }

        Ok(())
    }
}
