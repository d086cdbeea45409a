//! Record shape descriptions: field descriptors, their kinds, and header
//! name normalization.

mod column;
mod normalize;
mod table;
mod types;

pub use column::FieldDescriptor;
pub use normalize::normalize;
pub use table::Schema;
pub use types::{FieldKind, Value};
