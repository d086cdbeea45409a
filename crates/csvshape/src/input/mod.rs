//! Line-oriented CSV input: splitting lines and driving the parse loop.

mod parser;
mod source;
mod split;

pub use parser::{parse_file_with, parse_reader_with, CsvReader, Line};
pub use source::Parsed;
pub use split::split_line;
