#[macro_use]
extern crate lazy_static;

mod error;
mod parse;
mod range;
mod table;
mod verify;

pub use error::TableError;
pub use parse::{parse_line, parse_table};
pub use range::CodePointRange;
pub use table::{is_abridged, DATA, IDNA_MAPPING_TABLE};
pub use verify::verify_partition;

pub use idna_table::IdnaStatus;
