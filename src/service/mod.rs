pub mod barcode;
pub mod index_file;
pub mod scanner;
pub mod signature;
pub mod writer;
