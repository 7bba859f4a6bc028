//! Export of catalogue views as delimited text
//!
//! The filtered view and the current selection are each exportable as a
//! CSV rendition of the visible table, identifier column included.

pub mod csv;

pub use csv::{encode_classification, parse_classification, ParseError, CLASSIFICATION_HEADER};
