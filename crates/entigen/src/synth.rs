//! The synthesis passes: single-field insertion, derived string
//! representation, and bidirectional link maintenance.

pub mod bidirectional;
pub mod field;
pub mod to_string;
