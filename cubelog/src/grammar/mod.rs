//! Grammar definitions for the cube game record language

pub mod ast;
pub mod keywords;

pub use ast::{GameStatement, RevealStatement, SubsetStatement};
pub use keywords::{CubeColor, Keyword};
