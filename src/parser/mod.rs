//! Hand-written structural parser for the JSON-shaped data files.
//!
//! The grammar it accepts is the one the data files actually use, not full
//! RFC 8259: arrays of objects, objects of named sections, flat `"key": value`
//! objects, and string/number scalars. Decomposition happens in layers: the
//! reader classifies a document, the splitter partitions array and object
//! bodies at the top level, the flat-object walk extracts properties, and the
//! record builders coerce them into typed domain records.

mod build;
mod object;
mod reader;
mod scanner;
mod splitter;

pub use self::build::{
    ingredients_from_str, modifiers_from_str, nutrition_from_str, recipes_from_str,
};
pub(crate) use self::reader::read_file;
