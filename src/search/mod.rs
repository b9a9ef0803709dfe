//! Search criteria and their translation into service query parameters.
//!
//! - [`options`]: typed search options and the enumerated fields
//! - [`tables`]: fixed network, station type and key-name vocabularies
//! - [`query`]: validation and translation into [`QueryParameters`]

pub mod options;
pub mod query;
pub mod tables;

pub use options::{FaultType, GroupBy, ProcessLevel, ReturnType, SearchOptions};
pub use query::{QueryParameters, build_query, validate};
