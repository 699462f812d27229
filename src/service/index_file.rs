use crate::models::error::{Result, ScanError};
use crate::service::signature::extract_measurement_signature;
use log::debug;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

const COLUMN_DELIMITER: char = '\t';
const URL_COLUMN_MARKER: &str = "URL";

/// Line-at-a-time reader over an index file. Only the header and the first
/// data row are ever consumed.
pub struct IndexFileReader<R: BufRead> {
    reader: R,
    path: PathBuf,
    line_number: usize,
}

impl IndexFileReader<BufReader<File>> {
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|cause| match cause.kind() {
            io::ErrorKind::NotFound => ScanError::IndexFileNotFound {
                path: path.to_path_buf(),
            },
            _ => ScanError::IndexFileRead {
                path: path.to_path_buf(),
                cause,
            },
        })?;
        Ok(Self::new(BufReader::new(file), path))
    }
}

impl<R: BufRead> IndexFileReader<R> {
    pub fn new(reader: R, path: &Path) -> Self {
        Self {
            reader,
            path: path.to_path_buf(),
            line_number: 0,
        }
    }

    /// Number of lines consumed so far
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Next line without its terminator, or `None` at end of input
    pub fn next_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let count = self
            .reader
            .read_line(&mut line)
            .map_err(|cause| ScanError::IndexFileRead {
                path: self.path.clone(),
                cause,
            })?;
        if count == 0 {
            return Ok(None);
        }
        self.line_number += 1;
        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    /// Reads the header and first data row and returns the signature from the URL column
    pub fn read_signature(mut self) -> Result<Option<String>> {
        let header = self.next_line()?.unwrap_or_default();
        let url_column = find_url_column(&header).ok_or_else(|| ScanError::MissingUrlColumn {
            path: self.path.clone(),
        })?;
        debug!(
            "URL column in {} is at index {}",
            self.path.display(),
            url_column
        );

        let row = self.next_line()?.ok_or_else(|| ScanError::MissingDataRow {
            path: self.path.clone(),
        })?;
        let columns: Vec<&str> = row.split(COLUMN_DELIMITER).collect();
        let url = columns
            .get(url_column)
            .ok_or_else(|| ScanError::MalformedRow {
                path: self.path.clone(),
                line: self.line_number(),
                url_column,
                found: columns.len(),
            })?;

        Ok(extract_measurement_signature(url).map(str::to_string))
    }
}

/// Index of the first header column whose name contains "URL", ignoring case
pub fn find_url_column(header: &str) -> Option<usize> {
    header
        .split(COLUMN_DELIMITER)
        .position(|column| column.to_uppercase().contains(URL_COLUMN_MARKER))
}

pub fn read_measurement_signature(path: &Path) -> Result<Option<String>> {
    IndexFileReader::open(path)?.read_signature()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use tempfile::{NamedTempFile, TempDir};

    const SIGNATURE: &str = "abc12345-1111-2222-3333-444455556666";

    fn reader(content: &str) -> IndexFileReader<Cursor<Vec<u8>>> {
        IndexFileReader::new(
            Cursor::new(content.as_bytes().to_vec()),
            Path::new("indexfile.txt"),
        )
    }

    #[test]
    fn test_well_formed_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(
            temp_file,
            "Row\tURL\tDate\n1\thttp://host/{}/file\t2024-01-01\n",
            SIGNATURE
        )
        .unwrap();
        temp_file.flush().unwrap();

        let signature = read_measurement_signature(temp_file.path()).unwrap();
        assert_eq!(signature.as_deref(), Some(SIGNATURE));
    }

    #[test]
    fn test_only_first_data_row_is_used() {
        let content = format!(
            "Row\tURL\n1\thttp://host/{}/a\n2\thttp://host/ffffffff-ffff-ffff-ffff-ffffffffffff/b\n",
            SIGNATURE
        );
        let mut cursor = reader(&content);
        cursor.next_line().unwrap();
        cursor.next_line().unwrap();
        assert_eq!(cursor.line_number(), 2);

        let signature = reader(&content).read_signature().unwrap();
        assert_eq!(signature.as_deref(), Some(SIGNATURE));
    }

    #[test]
    fn test_crlf_line_endings() {
        let content = format!("Row\tURL\r\n1\thttp://host/{}/file\r\n", SIGNATURE);
        let signature = reader(&content).read_signature().unwrap();
        assert_eq!(signature.as_deref(), Some(SIGNATURE));
    }

    #[test]
    fn test_url_column_match_is_case_insensitive_substring() {
        assert_eq!(find_url_column("Row\tImage url\tDate"), Some(1));
        assert_eq!(find_url_column("Row\tSourceURL\tURL"), Some(1));
        assert_eq!(find_url_column("Row\tPath\tDate"), None);
    }

    #[test]
    fn test_missing_url_column() {
        let content = format!("Row\tPath\tDate\n1\thttp://host/{}/file\t2024\n", SIGNATURE);
        match reader(&content).read_signature() {
            Err(ScanError::MissingUrlColumn { .. }) => {}
            other => panic!("Expected MissingUrlColumn error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_url_column_stops_reading() {
        let mut cursor = reader("Row\tPath\n1\tx\n");
        let header = cursor.next_line().unwrap().unwrap();
        assert_eq!(find_url_column(&header), None);
        assert_eq!(cursor.line_number(), 1);
    }

    #[test]
    fn test_empty_file_has_no_url_column() {
        match reader("").read_signature() {
            Err(ScanError::MissingUrlColumn { .. }) => {}
            other => panic!("Expected MissingUrlColumn error, got {:?}", other),
        }
    }

    #[test]
    fn test_header_without_data_row() {
        match reader("Row\tURL\n").read_signature() {
            Err(ScanError::MissingDataRow { .. }) => {}
            other => panic!("Expected MissingDataRow error, got {:?}", other),
        }
    }

    #[test]
    fn test_short_data_row_is_malformed() {
        match reader("Row\tDate\tURL\n1\t2024-01-01\n").read_signature() {
            Err(ScanError::MalformedRow {
                line,
                url_column,
                found,
                ..
            }) => {
                assert_eq!(line, 2);
                assert_eq!(url_column, 2);
                assert_eq!(found, 2);
            }
            other => panic!("Expected MalformedRow error, got {:?}", other),
        }
    }

    #[test]
    fn test_url_without_signature() {
        let signature = reader("Row\tURL\n1\thttp://host/images/file.tiff\n")
            .read_signature()
            .unwrap();
        assert_eq!(signature, None);
    }

    #[test]
    fn test_empty_leading_column_keeps_indices() {
        let content = format!("\tURL\n\thttp://host/{}/file\n", SIGNATURE);
        let signature = reader(&content).read_signature().unwrap();
        assert_eq!(signature.as_deref(), Some(SIGNATURE));
    }

    #[test]
    fn test_missing_file_is_distinct_error() {
        let temp_dir = TempDir::new().unwrap();
        match read_measurement_signature(&temp_dir.path().join("indexfile.txt")) {
            Err(ScanError::IndexFileNotFound { .. }) => {}
            other => panic!("Expected IndexFileNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_utf8_is_read_error() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"Row\tURL\n1\t\xff\xfe\n").unwrap();
        temp_file.flush().unwrap();

        match read_measurement_signature(temp_file.path()) {
            Err(ScanError::IndexFileRead { .. }) => {}
            other => panic!("Expected IndexFileRead error, got {:?}", other),
        }
    }
}
