//! ZIP archive parsing and extraction.
//!
//! - [`structures`]: fixed-layout records (EOCD, ZIP64 EOCD, headers)
//! - [`parser`]: reads those records from any [`ReadAt`](crate::io::ReadAt) source
//! - [`extractor`]: lists entries and inflates their data
//!
//! The Central Directory is read first, from the end of the archive, and
//! entry data is located through each Local File Header.
//!
//! ## Supported Features
//!
//! - Standard ZIP format and ZIP64 extensions
//! - STORED and DEFLATE compression methods
//! - CRC-32 verification of every extracted entry
//!
//! ## Limitations
//!
//! - No encryption support
//! - No multi-disk archive support

mod extractor;
mod parser;
mod structures;

pub use extractor::ZipExtractor;
pub use parser::ZipParser;
pub use structures::*;
