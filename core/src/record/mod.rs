//! Typed record values and their field encoding.
//!
//! Turns a row of optional column values into field writes plus a record
//! trailer. Column types are carried by the values themselves; there is no
//! schema to validate against.

pub mod value;
pub mod encode;

pub use value::Value;
pub use encode::write_record;
