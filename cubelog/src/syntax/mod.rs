//! Syntax analysis for cube game records

pub mod error;
pub mod parser;

pub use error::{SyntaxError, SyntaxResult};
pub use parser::Parser;
