pub mod config;
pub mod error;
pub mod plate_signature;
pub mod scan_report;
