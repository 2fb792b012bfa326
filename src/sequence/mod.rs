// Reference Sequence Module
//
// This module is responsible for turning user-supplied reference strings
// into page id sequences.

pub mod parser;

// Export key types
pub use parser::ParseError;
pub use parser::parse_sequence;
