//! # cesmd
//!
//! Client for the CESMD strong motion records search service.
//!
//! A search is described by [`SearchOptions`], translated into the
//! service's query vocabulary, sent as a single GET request, and the
//! returned zip archive is either saved as-is or unpacked into a
//! directory tree.
//!
//! ## Example
//!
//! ```no_run
//! use cesmd::{RecordsRequest, SearchOptions, ServiceClient, get_records};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> cesmd::Result<()> {
//!     let client = ServiceClient::new()?;
//!     let options = SearchOptions {
//!         eventid: Some("nc73201181".to_string()),
//!         station_type: Some("G".to_string()),
//!         ..Default::default()
//!     };
//!     let request = RecordsRequest::new("nc73201181", "me@example.org")
//!         .unpack(true)
//!         .options(options);
//!
//!     let result = get_records(&client, &request).await?;
//!     for file in &result.files {
//!         println!("{}", file);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! - [`search`]: search options, constant tables, query translation
//! - [`io`]: the service client and in-memory archive reader
//! - [`zip`]: zip archive parsing and extraction
//! - [`unpack`]: flattening nested archives onto disk
//! - [`records`]: the end-to-end download
//! - [`cli`]: the `getrecords` command line

pub mod cli;
pub mod error;
pub mod io;
pub mod records;
pub mod search;
pub mod unpack;
pub mod zip;

pub use cli::Cli;
pub use error::{Error, Result};
pub use io::{MemoryReader, ReadAt, ServiceClient};
pub use records::{RecordsRequest, get_records};
pub use search::{QueryParameters, SearchOptions, build_query};
pub use unpack::{ArchiveEntry, ExtractionResult, unpack_archive};
