//! csvshape: map CSV rows onto statically declared record shapes.
//!
//! A record shape is an ordinary struct whose fields are declared with the
//! [`record!`] macro. Header tokens such as `"Lv. 50 HP"` are normalized to
//! canonical field names (`lv_50_hp`), each column is bound to the field of
//! the same name, and every value is coerced to the field's declared type.
//!
//! # Core Principles
//!
//! - **No reflection**: each shape carries a static field table and an
//!   `assign` capability
//! - **Fail fast**: one malformed row aborts the whole file
//! - **Empty means absent**: an empty value is `None` for optional fields and
//!   an error for required ones
//!
//! # Example
//!
//! ```no_run
//! use csvshape::RecordMapper;
//!
//! csvshape::record! {
//!     #[derive(Debug)]
//!     pub struct Support {
//!         pub name: String,
//!         pub description: String,
//!     }
//! }
//!
//! let mapper = RecordMapper::<Support>::new().unwrap();
//! let parsed = mapper.parse_file("DigiDB_supportlist.csv").unwrap();
//!
//! println!("Header: {}", parsed.header);
//! println!("Records: {}", parsed.len());
//! ```

pub mod coerce;
pub mod error;
pub mod input;
pub mod mapper;
pub mod record;
pub mod schema;

pub use error::{CsvShapeError, Result};
pub use input::{parse_file_with, parse_reader_with, split_line, CsvReader, Line, Parsed};
pub use mapper::{HeaderBinding, MapperConfig, MissingFieldPolicy, RecordMapper};
pub use record::{FieldType, Record};
pub use schema::{normalize, FieldDescriptor, FieldKind, Schema, Value};
